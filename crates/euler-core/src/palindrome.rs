//! Dual palindrome predicates over primitive integers.
//!
//! Two independent implementations of the same predicate are kept on
//! purpose: the numeric variant does constant-space half-reversal, the
//! string variant is the obvious reference. Their agreement on every input
//! is asserted by the property suite.

use std::fmt::Display;

use num_traits::PrimInt;

/// Base-10 palindrome test by half-reversal: O(digits/2) time, O(1) space,
/// no string conversion.
///
/// Negative values are never palindromes, and neither is a nonzero value
/// ending in 0 (its reversal would need a leading zero). Otherwise the low
/// half of the digits is peeled into a reversed accumulator and compared
/// against the remaining high half, ignoring the middle digit when the
/// digit count is odd.
///
/// # Example
/// ```
/// assert!(euler_core::is_palindrome_fast(22));
/// assert!(euler_core::is_palindrome_fast(12321));
/// assert!(!euler_core::is_palindrome_fast(10));
/// ```
pub fn is_palindrome_fast<T: PrimInt>(x: T) -> bool {
    let zero = T::zero();
    if x < zero {
        return false;
    }
    let ten = T::from(10).expect("base 10 fits every primitive integer");
    if x != zero && x % ten == zero {
        return false;
    }

    // Reverse the low half of the digits until it meets the high half.
    let mut prefix = x;
    let mut rev = zero;
    while prefix > rev {
        rev = rev * ten + prefix % ten;
        prefix = prefix / ten;
    }

    // Even digit count: halves match exactly.
    // Odd digit count: the accumulator carries the middle digit; drop it.
    prefix == rev || prefix == rev / ten
}

/// Reference palindrome test by string reversal: O(digits) time and space.
///
/// Negative values are never palindromes; otherwise the decimal
/// representation must equal its own reverse.
pub fn is_palindrome_slow<T: PrimInt + Display>(x: T) -> bool {
    if x < T::zero() {
        return false;
    }
    let s = x.to_string();
    s.bytes().eq(s.bytes().rev())
}
