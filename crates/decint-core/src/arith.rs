//! Addition and subtraction, plus the operator forwarding used by every
//! binary operation on [`Integer`].

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::constants::BASE;
use crate::integer::Integer;

/// Forward a reference-reference binary operator to the remaining
/// ownership combinations.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<Integer> for Integer {
            type Output = Integer;

            fn $method(self, other: Integer) -> Integer {
                $imp::$method(&self, &other)
            }
        }

        impl $imp<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, other: &Integer) -> Integer {
                $imp::$method(&self, other)
            }
        }

        impl $imp<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, other: Integer) -> Integer {
                $imp::$method(self, &other)
            }
        }
    };
}

pub(crate) use forward_binop;

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, other: &Integer) {
        let n = other.limbs.len();
        let mut carry = 0u16;
        let mut i = 0;

        while i < n || carry > 0 {
            let add = if i < n { other.limbs[i] } else { 0 } + carry;
            self.checked_add_at(i, u64::from(add));

            if self.limbs[i] >= BASE {
                self.limbs[i] -= BASE;
                carry = 1;
            } else {
                carry = 0;
            }
            i += 1;
        }

        self.trim();
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, other: Integer) {
        *self += &other;
    }
}

impl SubAssign<&Integer> for Integer {
    /// # Panics
    /// Panics if `self < other`; negative values are unrepresentable.
    fn sub_assign(&mut self, other: &Integer) {
        assert!(
            *self >= *other,
            "subtraction underflow: minuend is smaller than subtrahend"
        );

        let n = other.limbs.len();
        let mut borrow = 0u16;
        let mut i = 0;

        while i < n || borrow > 0 {
            let subtract = if i < n { other.limbs[i] } else { 0 } + borrow;

            if self.limbs[i] < subtract {
                self.limbs[i] += BASE - subtract;
                borrow = 1;
            } else {
                self.limbs[i] -= subtract;
                borrow = 0;
            }
            i += 1;
        }

        self.trim();
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, other: Integer) {
        *self -= &other;
    }
}

impl Add<&Integer> for &Integer {
    type Output = Integer;

    fn add(self, other: &Integer) -> Integer {
        let mut result = self.clone();
        result += other;
        result
    }
}

impl Sub<&Integer> for &Integer {
    type Output = Integer;

    /// # Panics
    /// Panics if `self < other`.
    fn sub(self, other: &Integer) -> Integer {
        let mut result = self.clone();
        result -= other;
        result
    }
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
