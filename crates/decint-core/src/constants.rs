//! Representation and regime-selection constants.

/// Decimal digits per limb.
pub const SECTION: usize = 4;

/// Radix of the limb representation: `10^SECTION`.
pub const BASE: u16 = 10_000;

/// `BASE` widened for accumulator arithmetic.
pub const BASE_U64: u64 = BASE as u64;

/// Leading limbs consulted when forming the floating division estimate.
pub const DOUBLE_DIV_SECTIONS: usize = 5;

/// Limb count above which multiplication stops using schoolbook.
pub const KARATSUBA_CUTOFF: usize = 150;

/// Combined limb count above which multiplication uses the FFT engine.
pub const INTEGER_FFT_CUTOFF: usize = 1_500;

/// Schoolbook accumulator flush threshold: one more limb product must
/// always fit without overflowing the 64-bit accumulator.
pub const U64_BOUND: u64 = u64::MAX - BASE_U64 * BASE_U64;

/// Scalar size beyond which 64-bit fast paths promote to full integers.
pub const BASE_OVERFLOW_CUTOFF: u64 = u64::MAX / BASE_U64;
