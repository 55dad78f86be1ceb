//! # decint-core
//!
//! Arbitrary-precision non-negative integers stored as little-endian
//! base-10⁴ limbs. Multiplication picks between schoolbook, Karatsuba, and
//! FFT convolution by operand size; division guesses each quotient digit
//! from a floating-point estimate of the leading limbs and corrects it with
//! a bounded linear search.
//!
//! # Example
//! ```
//! use decint_core::Integer;
//!
//! let a: Integer = "123456789".parse().unwrap();
//! let b: Integer = "987654321".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "121932631112635269");
//!
//! let (quotient, remainder) = (&a * &b).div_mod(&b);
//! assert_eq!(quotient, a);
//! assert_eq!(remainder.to_string(), "0");
//! ```

mod arith;
pub mod constants;
mod div;
mod error;
mod integer;
mod mul;

// Re-exports
pub use error::ParseIntegerError;
pub use integer::Integer;
