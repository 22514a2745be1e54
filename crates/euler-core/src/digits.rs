//! Digit-wise operations over bounded and unbounded integers.
//!
//! The unbounded operations are generic over the `num` signed-integer
//! traits, so one implementation serves `num_bigint::BigInt` as well as
//! fixed-width signed types.

use num_integer::Integer;
use num_traits::{FromPrimitive, Signed};

fn radix<T: FromPrimitive>() -> T {
    T::from_u8(10).expect("10 is representable in every supported digit type")
}

/// Sum of the base-10 digits of the magnitude of `n`.
///
/// The sign is ignored: `digit_sum(-123) == digit_sum(123) == 6`, and zero
/// sums to zero. Runs in O(digits) divisions.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
///
/// let n: BigInt = "1000000000000000000000000000000".parse().unwrap();
/// assert_eq!(euler_core::digit_sum(&n), BigInt::from(1));
/// ```
pub fn digit_sum<T>(n: &T) -> T
where
    T: Integer + Signed + FromPrimitive,
{
    let ten = radix::<T>();
    let mut magnitude = n.abs();
    let mut sum = T::zero();
    while !magnitude.is_zero() {
        let (quotient, digit) = magnitude.div_rem(&ten);
        sum = sum + digit;
        magnitude = quotient;
    }
    sum
}

/// Number of base-10 digits of `n`; zero counts as one digit.
#[must_use]
pub const fn digit_count(mut n: u64) -> usize {
    if n == 0 {
        return 1;
    }
    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Number of base-10 digits of the magnitude of an unbounded signed value.
///
/// The sign is not a digit: `big_digit_count(-12345) == 5`. Zero counts as
/// one digit and returns immediately, whatever representation of zero the
/// backing type produced.
pub fn big_digit_count<T>(n: &T) -> usize
where
    T: Integer + Signed + FromPrimitive,
{
    if n.is_zero() {
        return 1;
    }
    let ten = radix::<T>();
    let mut magnitude = n.abs();
    let mut count = 0;
    while !magnitude.is_zero() {
        let (quotient, _) = magnitude.div_rem(&ten);
        magnitude = quotient;
        count += 1;
    }
    count
}
