use {
    super::{ModRing, UintMont},
    std::{
        fmt::{self, Formatter},
        ops::{Mul, MulAssign},
    },
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::Zeroize,
};

/// Element of a [`ModRing`], kept in Montgomery form.
#[derive(Clone, Copy)]
pub struct ModRingElement<'a, Uint: UintMont> {
    ring:  &'a ModRing<Uint>,
    value: Uint,
}

impl<'a, Uint: UintMont> ModRingElement<'a, Uint> {
    #[inline]
    #[must_use]
    pub const fn from_montgomery(ring: &'a ModRing<Uint>, value: Uint) -> Self {
        Self { ring, value }
    }

    #[inline]
    #[must_use]
    pub const fn ring(&self) -> &'a ModRing<Uint> {
        self.ring
    }

    #[inline]
    #[must_use]
    pub const fn as_montgomery(self) -> Uint {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn to_uint(self) -> Uint {
        self.ring.mont_mul(self.value, Uint::from_u64(1))
    }

    #[inline]
    #[must_use]
    pub fn square(mut self) -> Self {
        self.value = self.ring.mont_mul(self.value, self.value);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_one(&self) -> Choice {
        self.value.ct_eq(&self.ring.montgomery_r())
    }

    /// Constant-time exponentation with arbitrary unsigned int exponent.
    ///
    /// Iterates over the full width of the exponent type, so run time does not
    /// depend on the exponent value. Use this for secret exponents.
    #[must_use]
    pub fn pow_ct<E: UintMont>(self, exponent: E) -> Self {
        let mut result = self.ring.one();
        let mut power = self;
        for i in 0..E::bit_capacity() {
            let product = result * power;
            result.conditional_assign(&product, exponent.bit_ct(i));
            power = power.square();
        }
        power.zeroize();
        result
    }

    /// Square-and-multiply exponentiation.
    ///
    /// Run time depends on the exponent, only use it with public exponents.
    #[must_use]
    pub fn pow_vartime<E: UintMont>(self, exponent: E) -> Self {
        let mut result = self.ring.one();
        for i in (0..exponent.bit_len()).rev() {
            result = result.square();
            if bool::from(exponent.bit_ct(i)) {
                result *= self;
            }
        }
        result
    }
}

impl<Uint: UintMont> Zeroize for ModRingElement<'_, Uint> {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

// Deliberately not forwarding `Display`: elements may hold secrets.
impl<Uint: UintMont> fmt::Debug for ModRingElement<'_, Uint> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ModRingElement")
            .field("modulus", &self.ring.modulus())
            .finish_non_exhaustive()
    }
}

impl<Uint: UintMont> PartialEq for ModRingElement<'_, Uint> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<Uint: UintMont> Eq for ModRingElement<'_, Uint> {}

impl<Uint: UintMont> Mul for ModRingElement<'_, Uint> {
    type Output = Self;

    #[inline(always)]
    fn mul(mut self, other: Self) -> Self {
        self *= other;
        self
    }
}

impl<Uint: UintMont> MulAssign for ModRingElement<'_, Uint> {
    #[inline(always)]
    fn mul_assign(&mut self, other: Self) {
        debug_assert_eq!(self.ring, other.ring);
        self.value = self.ring.mont_mul(self.value, other.value);
    }
}

impl<Uint: UintMont> ConditionallySelectable for ModRingElement<'_, Uint> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        debug_assert_eq!(a.ring, b.ring);
        let value = Uint::conditional_select(&a.value, &b.value, choice);
        Self::from_montgomery(a.ring, value)
    }
}

impl<Uint: UintMont> ConstantTimeEq for ModRingElement<'_, Uint> {
    fn ct_eq(&self, other: &Self) -> Choice {
        debug_assert_eq!(self.ring, other.ring);
        self.value.ct_eq(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ruint::{aliases::U2048, uint},
    };

    #[test]
    fn test_small_powers() {
        let ring = ModRing::from_modulus(U2048::from(23_u64)).unwrap();
        let five = ring.from_u64(5);
        assert_eq!(five.pow_ct(U2048::from(2_u64)).to_uint(), U2048::from(2_u64));
        assert_eq!(five.pow_vartime(U2048::from(2_u64)).to_uint(), U2048::from(2_u64));
        assert!(bool::from(five.pow_ct(U2048::from(22_u64)).is_one()));
        assert!(bool::from(five.pow_vartime(U2048::ZERO).is_one()));
    }

    #[test]
    fn test_element_reduces() {
        let ring = ModRing::from_modulus(U2048::from(23_u64)).unwrap();
        assert_eq!(ring.from_u64(28).to_uint(), U2048::from(5_u64));
        assert_eq!(ring.from_u64(23).to_uint(), U2048::ZERO);
    }

    #[test]
    fn test_ct_matches_vartime() {
        let modulus = uint!(1399252811935680595399801714158014275474696840019_U2048);
        let ring = ModRing::from_modulus(modulus).unwrap();
        let rng = &mut rand::thread_rng();
        for _ in 0..8 {
            let base = ring.element(U2048::random_at_most(rng, modulus));
            let exponent = U2048::random_at_most(rng, modulus);
            assert_eq!(base.pow_ct(exponent), base.pow_vartime(exponent));
        }
    }
}
