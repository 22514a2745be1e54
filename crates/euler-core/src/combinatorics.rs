//! Factorial and the closed-form summation helpers.

use num_bigint::BigUint;
use num_traits::One;

/// n! as an arbitrary-precision integer; `factorial(0) == 1`.
///
/// O(n) multiplications of growing magnitude. The unsigned parameter
/// leaves no negative-input case to reject.
///
/// # Example
/// ```
/// assert_eq!(euler_core::factorial(20).to_string(), "2432902008176640000");
/// ```
#[must_use]
pub fn factorial(n: u32) -> BigUint {
    let mut product = BigUint::one();
    for i in 2..=u64::from(n) {
        product *= i;
    }
    product
}

/// Sum of the first `n` natural numbers, n(n+1)/2.
///
/// Exact while the intermediate product fits `u64`; keeping `n` small
/// enough is the caller's responsibility (the workspace profile enables
/// overflow checks, so an overflow traps rather than wraps).
#[must_use]
pub const fn natural_sum(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Sum of the squares of the first `n` natural numbers, n(n+1)(2n+1)/6.
///
/// Same overflow contract as [`natural_sum`].
#[must_use]
pub const fn sum_of_squares(n: u64) -> u64 {
    n * (n + 1) * (2 * n + 1) / 6
}
