//! # euler-core
//!
//! Number-theoretic and arbitrary-precision building blocks for
//! problem-solving code: primality testing and sieving, digit-wise
//! operations on unbounded integers, palindrome detection, Fibonacci
//! computation, and combinatorial helpers.
//!
//! Every function here is pure: no I/O, no shared or global state, and the
//! returned values are owned exclusively by the caller.
//!
//! # Example
//! ```
//! assert_eq!(euler_core::big_fib(100).to_string(), "354224848179261915075");
//! assert!(euler_core::is_prime(97));
//! ```

pub mod combinatorics;
pub mod constants;
pub mod digits;
pub mod fibonacci;
pub mod palindrome;
pub mod primes;

// Re-exports
pub use combinatorics::{factorial, natural_sum, sum_of_squares};
pub use constants::{FIB_TABLE, MAX_FIB_U64};
pub use digits::{big_digit_count, digit_count, digit_sum};
pub use fibonacci::{big_fib, fib, inverse_fib};
pub use palindrome::{is_palindrome_fast, is_palindrome_slow};
pub use primes::{is_prime, nth_prime, sieve_of_eratosthenes};
