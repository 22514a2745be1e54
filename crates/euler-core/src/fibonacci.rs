//! Fibonacci computation: approximate closed form and exact fast doubling.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};

/// Approximate F(n) via the Binet closed form.
///
/// Evaluates φⁿ/√5 in `f64` and rounds to the nearest integer. Exact only
/// while the result fits the 53-bit mantissa, in practice up to about
/// F(70); beyond that the returned value silently degrades. That is the
/// documented accuracy boundary of the closed form, not a defect; use
/// [`big_fib`] when exact values are needed at any index.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fib(n: u64) -> u64 {
    let sqrt5 = 5.0_f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    (phi.powf(n as f64) / sqrt5).round() as u64
}

/// Exact F(n) by iterative fast doubling.
///
/// Scans the bits of `n` from most to least significant, maintaining the
/// pair (F(k), F(k+1)) under the doubling identities
///
/// ```text
/// F(2k)   = F(k) · (2·F(k+1) − F(k))
/// F(2k+1) = F(k)² + F(k+1)²
/// ```
///
/// and advancing the pair by one position for odd bits, where
/// F(2k+2) = F(2k) + F(2k+1). O(log n) big-integer multiplications;
/// indices up to [`MAX_FIB_U64`] are answered from the precomputed table.
///
/// # Example
/// ```
/// assert_eq!(euler_core::big_fib(0).to_string(), "0");
/// assert_eq!(euler_core::big_fib(100).to_string(), "354224848179261915075");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn big_fib(n: u64) -> BigUint {
    if n <= MAX_FIB_U64 {
        return BigUint::from(FIB_TABLE[n as usize]);
    }

    let mut fk = BigUint::ZERO;
    let mut fk1 = BigUint::one();
    let num_bits = 64 - n.leading_zeros();
    for i in (0..num_bits).rev() {
        // t = 2·F(k+1) − F(k); always non-negative since F(k+1) ≥ F(k)
        let mut t = &fk1 << 1;
        t -= &fk;

        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            // Shift the window: F(2k+1) takes the low slot, F(2k)+F(2k+1) the high.
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }
    fk
}

/// Recover the index of a Fibonacci number: the n with F(n) ≈ `fib`.
///
/// Change-of-base logarithm, n ≈ log_φ(√5·fib), rounded to nearest.
/// Shares the `f64` precision ceiling of [`fib`] and is therefore
/// approximate for very large inputs. `F(1) = F(2) = 1` is ambiguous;
/// the formula (and this function) answers 2.
///
/// # Panics
/// Panics if `fib == 0`; the inverse is defined for `fib ≥ 1` only.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn inverse_fib(fib: u64) -> u64 {
    assert!(fib >= 1, "inverse_fib is defined for fib >= 1");
    let sqrt5 = 5.0_f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    ((sqrt5 * fib as f64).ln() / phi.ln()).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_fib_matches_table_through_93() {
        for (n, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(big_fib(n as u64), BigUint::from(expected), "n={n}");
        }
    }

    #[test]
    fn big_fib_first_values_beyond_u64() {
        assert_eq!(
            big_fib(94),
            BigUint::parse_bytes(b"19740274219868223167", 10).unwrap()
        );
        assert_eq!(
            big_fib(100),
            BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
        );
    }

    #[test]
    fn big_fib_f200() {
        let expected =
            BigUint::parse_bytes(b"280571172992510140037611932413038677189525", 10).unwrap();
        assert_eq!(big_fib(200), expected);
    }

    #[test]
    fn big_fib_f1000_shape() {
        let s = big_fib(1000).to_string();
        assert!(s.starts_with("43466557686937456435688527675040625802564"));
        assert_eq!(s.len(), 209);
    }

    #[test]
    fn binet_exact_for_small_indices() {
        for n in 0..=60u64 {
            assert_eq!(fib(n), FIB_TABLE[n as usize], "n={n}");
        }
    }

    #[test]
    fn inverse_fib_recovers_indices() {
        for n in 3..=50u64 {
            assert_eq!(inverse_fib(FIB_TABLE[n as usize]), n, "n={n}");
        }
    }

    #[test]
    fn inverse_fib_ambiguous_one() {
        // F(1) = F(2) = 1; the log formula answers 2.
        assert_eq!(inverse_fib(1), 2);
    }

    #[test]
    #[should_panic(expected = "inverse_fib is defined for fib >= 1")]
    fn inverse_fib_zero_panics() {
        inverse_fib(0);
    }
}
