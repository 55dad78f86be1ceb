//! Division: estimate-guided long division and the scalar fast paths.
//!
//! Each quotient digit is guessed from a floating-point ratio of the
//! leading limbs, then corrected by a linear search that runs a bounded
//! number of steps on average.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::arith::forward_binop;
use crate::constants::{BASE, BASE_OVERFLOW_CUTOFF, BASE_U64, DOUBLE_DIV_SECTIONS};
use crate::integer::Integer;

impl Integer {
    /// Floating estimate of `self / other` from up to
    /// [`DOUBLE_DIV_SECTIONS`] leading limbs of each operand.
    fn estimate_div(&self, other: &Integer) -> f64 {
        let mut numerator = 0.0;
        let mut power = 1.0;
        for &limb in self.limbs.iter().rev().take(DOUBLE_DIV_SECTIONS) {
            numerator += power * f64::from(limb);
            power /= f64::from(BASE);
        }

        let mut denominator = 0.0;
        power = 1.0;
        for &limb in other.limbs.iter().rev().take(DOUBLE_DIV_SECTIONS) {
            denominator += power * f64::from(limb);
            power /= f64::from(BASE);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let exponent = self.limbs.len() as i32 - other.limbs.len() as i32;
        numerator / denominator * f64::from(BASE).powi(exponent)
    }

    /// Quotient and remainder of `self / other`.
    ///
    /// # Panics
    /// Panics if `other` is zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn div_mod(&self, other: &Integer) -> (Integer, Integer) {
        assert!(!other.is_zero(), "division by zero");

        let n = self.limbs.len();
        let m = other.limbs.len();
        let mut quotient = Integer::zero();
        let mut remainder = self.clone();

        if n >= m {
            for i in (0..=n - m).rev() {
                if i >= remainder.limbs.len() {
                    continue;
                }

                let chunk = remainder.range(i..);
                let mut digit = (chunk.estimate_div(other) + 1e-7) as u64;
                let mut scaled = other * digit;

                while digit > 0 && scaled > chunk {
                    scaled -= other;
                    digit -= 1;
                }
                while digit < BASE_U64 - 1 && &scaled + other <= chunk {
                    scaled += other;
                    digit += 1;
                }

                remainder -= scaled << i;
                if digit > 0 {
                    quotient.checked_add_at(i, digit);
                }
            }
        }

        quotient.trim();
        remainder.trim();
        (quotient, remainder)
    }

    /// Quotient and scalar remainder of `self / denominator`.
    ///
    /// Scans limbs from the most significant down, keeping the running
    /// remainder in a 64-bit word. Denominators at or above
    /// [`BASE_OVERFLOW_CUTOFF`] promote to full integer division.
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn div_mod_u64(&self, denominator: u64) -> (Integer, u64) {
        assert!(denominator > 0, "division by zero");

        if denominator >= BASE_OVERFLOW_CUTOFF {
            let (quotient, remainder) = self.div_mod(&Integer::from(denominator));
            return (quotient, remainder.to_u64());
        }

        let mut quotient = Integer::zero();
        let mut remainder = 0u64;

        for i in (0..self.limbs.len()).rev() {
            remainder = BASE_U64 * remainder + u64::from(self.limbs[i]);

            if remainder >= denominator {
                quotient.checked_add_at(i, remainder / denominator);
                remainder %= denominator;
            }
        }

        quotient.trim();
        (quotient, remainder)
    }
}

impl Div<&Integer> for &Integer {
    type Output = Integer;

    /// # Panics
    /// Panics if `other` is zero.
    fn div(self, other: &Integer) -> Integer {
        self.div_mod(other).0
    }
}

impl Rem<&Integer> for &Integer {
    type Output = Integer;

    /// # Panics
    /// Panics if `other` is zero.
    fn rem(self, other: &Integer) -> Integer {
        self.div_mod(other).1
    }
}

forward_binop!(impl Div, div);
forward_binop!(impl Rem, rem);

impl DivAssign<&Integer> for Integer {
    fn div_assign(&mut self, other: &Integer) {
        *self = &*self / other;
    }
}

impl DivAssign for Integer {
    fn div_assign(&mut self, other: Integer) {
        *self /= &other;
    }
}

impl RemAssign<&Integer> for Integer {
    fn rem_assign(&mut self, other: &Integer) {
        *self = &*self % other;
    }
}

impl RemAssign for Integer {
    fn rem_assign(&mut self, other: Integer) {
        *self %= &other;
    }
}

impl Div<u64> for &Integer {
    type Output = Integer;

    /// # Panics
    /// Panics if `denominator` is zero.
    fn div(self, denominator: u64) -> Integer {
        self.div_mod_u64(denominator).0
    }
}

impl Div<u64> for Integer {
    type Output = Integer;

    fn div(self, denominator: u64) -> Integer {
        &self / denominator
    }
}

impl Rem<u64> for &Integer {
    type Output = u64;

    /// Remainder by a 64-bit denominator.
    ///
    /// When `BASE` is a multiple of the denominator only the lowest limb
    /// matters: every higher limb contributes a multiple of `BASE` and thus
    /// of the denominator.
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    fn rem(self, denominator: u64) -> u64 {
        assert!(denominator > 0, "division by zero");

        if BASE_U64 % denominator == 0 {
            return u64::from(self.limbs[0]) % denominator;
        }

        if denominator >= BASE_OVERFLOW_CUTOFF {
            return self.div_mod(&Integer::from(denominator)).1.to_u64();
        }

        let mut remainder = 0u64;
        for &limb in self.limbs.iter().rev() {
            remainder = BASE_U64 * remainder + u64::from(limb);

            if remainder >= BASE_OVERFLOW_CUTOFF {
                remainder %= denominator;
            }
        }

        remainder % denominator
    }
}

impl Rem<u64> for Integer {
    type Output = u64;

    fn rem(self, denominator: u64) -> u64 {
        &self % denominator
    }
}

impl DivAssign<u64> for Integer {
    fn div_assign(&mut self, denominator: u64) {
        *self = &*self / denominator;
    }
}

impl RemAssign<u64> for Integer {
    fn rem_assign(&mut self, denominator: u64) {
        *self = Integer::from(&*self % denominator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn exact_division() {
        let (q, r) = int("121932631112635269").div_mod(&int("987654321"));
        assert_eq!(q.to_string(), "123456789");
        assert_eq!(r.to_string(), "0");
    }

    #[test]
    fn division_with_remainder() {
        let (q, r) = int("1000000000000000000000").div_mod(&int("999999999999"));
        assert_eq!(q.to_string(), "1000000000");
        assert_eq!(r.to_string(), "1000000000");
    }

    #[test]
    fn dividend_smaller_than_divisor() {
        let (q, r) = int("123").div_mod(&int("456789"));
        assert_eq!(q.to_string(), "0");
        assert_eq!(r.to_string(), "123");
    }

    #[test]
    fn quotient_digit_correction_handles_close_operands() {
        // Leading limbs alone overestimate the quotient here; the
        // correction loop must walk it back.
        let divisor = int("10000000000000000000000000000001");
        let dividend = &(&divisor * &divisor) - &int("1");
        let (q, r) = dividend.div_mod(&divisor);
        assert_eq!(q, &divisor - &int("1"));
        assert_eq!(r, &divisor - &int("1"));
    }

    #[test]
    fn division_roundtrip_identity() {
        let a = int("98765432101234567890987654321");
        let b = int("12345678987654321");
        let (q, r) = a.div_mod(&b);
        assert!(r < b);
        assert_eq!(&(&q * &b) + &r, a);
    }

    #[test]
    fn scalar_division_matches_big_division() {
        let value = int("3141592653589793238462643383279502884197");
        for scalar in [1u64, 2, 3, 7, 9_999, 10_000, 10_001, 123_456_789] {
            let (q_big, r_big) = value.div_mod(&Integer::from(scalar));
            let (q, r) = value.div_mod_u64(scalar);
            assert_eq!(q, q_big, "scalar {scalar}");
            assert_eq!(Integer::from(r), r_big, "scalar {scalar}");
        }
    }

    #[test]
    fn oversized_scalar_denominator_promotes() {
        let value = int("340282366920938463463374607431768211455");
        let denominator = u64::MAX;
        assert!(denominator >= BASE_OVERFLOW_CUTOFF);
        let (q, r) = value.div_mod_u64(denominator);
        let (q_big, r_big) = value.div_mod(&Integer::from(denominator));
        assert_eq!(q, q_big);
        assert_eq!(Integer::from(r), r_big);
    }

    #[test]
    fn small_denominator_shortcut_uses_lowest_limb() {
        // 10, 100, 1000, 2, 4, 5, 8 all divide BASE.
        let value = int("123456789012345678901234567");
        for denominator in [2u64, 4, 5, 8, 10, 16, 100, 1_000, 10_000] {
            let expected = (&value % &Integer::from(denominator)).to_u64();
            assert_eq!(&value % denominator, expected, "denominator {denominator}");
        }
    }

    #[test]
    fn rem_assign_scalar_stores_remainder() {
        let mut value = int("1000000007");
        value %= 97u64;
        assert_eq!(value, Integer::from(1_000_000_007u64 % 97));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn big_division_by_zero_panics() {
        let _ = int("1").div_mod(&Integer::zero());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn scalar_division_by_zero_panics() {
        let _ = int("1").div_mod_u64(0);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn scalar_remainder_by_zero_panics() {
        let _ = &int("1") % 0u64;
    }
}
