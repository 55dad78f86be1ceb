//! Multiplication: schoolbook, Karatsuba, and FFT regimes, plus the scalar
//! fast path.
//!
//! Regime choice is purely size-driven. With `n <= m` limb counts:
//! schoolbook up to `KARATSUBA_CUTOFF`, Karatsuba above it, and the FFT
//! convolution once the combined count clears `INTEGER_FFT_CUTOFF`. The FFT
//! envelope keeps every convolution coefficient below 2⁵³ so the double
//! transform stays exact after rounding.

use std::ops::{Mul, MulAssign};

use tracing::debug;

use crate::arith::forward_binop;
use crate::constants::{
    BASE_OVERFLOW_CUTOFF, BASE_U64, INTEGER_FFT_CUTOFF, KARATSUBA_CUTOFF, U64_BOUND,
};
use crate::integer::Integer;

impl Mul<&Integer> for &Integer {
    type Output = Integer;

    fn mul(self, other: &Integer) -> Integer {
        let n = self.limbs.len();
        let m = other.limbs.len();

        if n > m {
            return other * self;
        }

        if n > KARATSUBA_CUTOFF && n + m > INTEGER_FFT_CUTOFF {
            debug!(left_limbs = n, right_limbs = m, "fft multiplication");
            mul_fft(self, other)
        } else if n > KARATSUBA_CUTOFF {
            mul_karatsuba(self, other)
        } else {
            mul_schoolbook(self, other)
        }
    }
}

forward_binop!(impl Mul, mul);

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, other: &Integer) {
        *self = &*self * other;
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, other: Integer) {
        *self *= &other;
    }
}

/// Convolve the limb sequences and renormalize to base 10⁴ with a running
/// carry.
fn mul_fft(a: &Integer, b: &Integer) -> Integer {
    let convolution: Vec<u64> = decint_fft::multiply(&a.limbs, &b.limbs, false);

    let mut product = Integer::zero();
    let mut carry = 0u64;
    let mut i = 0;

    while i < convolution.len() || carry > 0 {
        let value = convolution.get(i).copied().unwrap_or(0) + carry;
        carry = value / BASE_U64;
        product.checked_add_at(i, value % BASE_U64);
        i += 1;
    }

    product.trim();
    product
}

/// Split both operands at `n / 2` limbs and combine three half-size
/// products.
fn mul_karatsuba(a: &Integer, b: &Integer) -> Integer {
    let n = a.limbs.len();
    let m = b.limbs.len();
    let mid = n / 2;

    let a_low = a.range(..mid);
    let a_high = a.range(mid..n);
    let b_low = b.range(..mid);
    let b_high = b.range(mid..m);

    let high = &a_high * &b_high;
    let low = &a_low * &b_low;
    let mixed = (a_low + a_high) * (b_low + b_high) - &high - &low;

    (high << (2 * mid)) + (mixed << mid) + low
}

/// Direct coefficient accumulation, flushing into a separate carry word
/// whenever the accumulator nears overflow.
fn mul_schoolbook(a: &Integer, b: &Integer) -> Integer {
    let n = a.limbs.len();
    let m = b.limbs.len();

    let mut product = Integer {
        limbs: vec![0; n + m - 1],
    };
    let mut carry = 0u64;
    let mut index_sum = 0;

    while index_sum < n + m - 1 || carry > 0 {
        let mut value = carry % BASE_U64;
        carry /= BASE_U64;

        let low = index_sum.saturating_sub(m - 1);
        let high = (n - 1).min(index_sum);
        for i in low..=high {
            value += u64::from(a.limbs[i]) * u64::from(b.limbs[index_sum - i]);

            if value > U64_BOUND {
                carry += value / BASE_U64;
                value %= BASE_U64;
            }
        }

        carry += value / BASE_U64;
        value %= BASE_U64;
        product.checked_add_at(index_sum, value);
        index_sum += 1;
    }

    product.trim();
    product
}

impl Mul<u64> for &Integer {
    type Output = Integer;

    fn mul(self, scalar: u64) -> Integer {
        if scalar == 0 {
            return Integer::zero();
        }
        if scalar >= BASE_OVERFLOW_CUTOFF {
            return self * &Integer::from(scalar);
        }

        let n = self.limbs.len();
        let mut product = Integer {
            limbs: vec![0; n + 1],
        };
        let mut carry = 0u64;
        let mut i = 0;

        while i < n || carry > 0 {
            let limb = if i < n { u64::from(self.limbs[i]) } else { 0 };
            let value = scalar * limb + carry;
            carry = value / BASE_U64;
            product.checked_add_at(i, value % BASE_U64);
            i += 1;
        }

        product.trim();
        product
    }
}

impl Mul<u64> for Integer {
    type Output = Integer;

    fn mul(self, scalar: u64) -> Integer {
        &self * scalar
    }
}

impl MulAssign<u64> for Integer {
    fn mul_assign(&mut self, scalar: u64) {
        *self = &*self * scalar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    /// A deterministic operand with `limbs` limbs, every limb non-zero.
    fn dense(limbs: usize, seed: u64) -> Integer {
        let mut value = Integer {
            limbs: (0..limbs)
                .map(|i| (1 + (i as u64 * 37 + seed * 101) % 9_999) as u16)
                .collect(),
        };
        value.trim();
        value
    }

    #[test]
    fn zero_absorbs() {
        assert_eq!((int("0") * int("123456789")).to_string(), "0");
        assert_eq!((int("123456789") * int("0")).to_string(), "0");
    }

    #[test]
    fn one_is_identity() {
        assert_eq!((int("1") * int("987654321")).to_string(), "987654321");
    }

    #[test]
    fn small_products() {
        assert_eq!((int("2") * int("3")).to_string(), "6");
        assert_eq!((int("9999") * int("9999")).to_string(), "99980001");
        assert_eq!(
            (int("123456789") * int("987654321")).to_string(),
            "121932631112635269"
        );
    }

    #[test]
    fn compound_assignment() {
        let mut value = int("111");
        value *= int("111");
        assert_eq!(value.to_string(), "12321");
        value *= 2u64;
        assert_eq!(value.to_string(), "24642");
    }

    #[test]
    fn regimes_agree_on_identical_operands() {
        // Operand sizes land on each side of both cutoffs; the private
        // regime entry points must all produce the same product.
        for (n, m) in [
            (KARATSUBA_CUTOFF - 1, KARATSUBA_CUTOFF + 2),
            (KARATSUBA_CUTOFF + 1, KARATSUBA_CUTOFF + 1),
            (KARATSUBA_CUTOFF + 1, INTEGER_FFT_CUTOFF - KARATSUBA_CUTOFF),
            (KARATSUBA_CUTOFF + 2, INTEGER_FFT_CUTOFF),
        ] {
            let a = dense(n, 1);
            let b = dense(m, 2);
            let (small, large) = if a.limb_count() <= b.limb_count() {
                (&a, &b)
            } else {
                (&b, &a)
            };
            let school = mul_schoolbook(small, large);
            let karatsuba = mul_karatsuba(small, large);
            let fft = mul_fft(small, large);
            assert_eq!(school, karatsuba, "n={n} m={m}");
            assert_eq!(school, fft, "n={n} m={m}");
        }
    }

    #[test]
    fn schoolbook_flushes_saturated_accumulator() {
        // 600 limbs of 9999 each drive the accumulator past U64_BOUND many
        // times within a single output column.
        let nines = "9".repeat(2_400);
        let a: Integer = nines.parse().unwrap();
        let product = mul_schoolbook(&a, &a);

        // (10^2400 - 1)^2 = 10^4800 - 2*10^2400 + 1
        let expected = format!("{}8{}1", "9".repeat(2_399), "0".repeat(2_399));
        assert_eq!(product.to_string(), expected);
    }

    #[test]
    fn scalar_multiplication_matches_big_multiplication() {
        let value = int("123456789012345678901234567890");
        assert_eq!(&value * 97u64, &value * &int("97"));
        assert_eq!(&value * 0u64, Integer::zero());
        assert_eq!(&value * 1u64, value.clone());
    }

    #[test]
    fn oversized_scalar_promotes() {
        let value = int("340282366920938463463374607431768211455");
        let scalar = u64::MAX; // above BASE_OVERFLOW_CUTOFF
        assert!(scalar >= BASE_OVERFLOW_CUTOFF);
        assert_eq!(&value * scalar, &value * &Integer::from(scalar));
    }
}
