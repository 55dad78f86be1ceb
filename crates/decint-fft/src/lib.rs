//! # decint-fft
//!
//! Complex radix-2 iterative FFT with real-convolution packing tricks.
//!
//! The engine computes the linear (or circular) convolution of two real
//! sequences, or the square of one real sequence, with exactly one forward
//! and one inverse transform by packing both real signals into a single
//! complex input. Twiddle roots and the bit-reversal permutation are cached
//! and grown lazily across calls.

pub mod coefficient;
pub mod convolve;
pub mod engine;

// Re-exports
pub use coefficient::Coefficient;
pub use convolve::{multiply, square};
pub use engine::{round_up_power_two, FftEngine};
