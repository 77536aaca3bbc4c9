use super::{ModRingElement, UintMont};

/// Ring of integers modulo an odd integer greater than two.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModRing<Uint: UintMont> {
    modulus: Uint,

    // Precomputed values for Montgomery multiplication.
    montgomery_r:  Uint, // R = 2^64*LIMBS mod modulus
    montgomery_r2: Uint, // R^2, or R in Montgomery form
    mod_inv:       u64,  // -1 / modulus mod 2^64
}

impl<Uint: UintMont> ModRing<Uint> {
    pub fn from_parameters(modulus: Uint, montgomery_r2: Uint, mod_inv: u64) -> Self {
        let montgomery_r = montgomery_r2.mul_redc(Uint::from_u64(1), modulus, mod_inv);
        Self {
            modulus,
            montgomery_r,
            montgomery_r2,
            mod_inv,
        }
    }

    /// Returns `None` for even moduli and moduli below three.
    #[inline]
    #[must_use]
    pub fn from_modulus(modulus: Uint) -> Option<Self> {
        Uint::parameters_from_modulus(modulus)
    }

    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> Uint {
        self.modulus
    }

    #[inline]
    #[must_use]
    pub const fn montgomery_r(&self) -> Uint {
        self.montgomery_r
    }

    #[inline]
    #[must_use]
    pub const fn montgomery_r2(&self) -> Uint {
        self.montgomery_r2
    }

    #[inline]
    #[must_use]
    pub const fn mod_inv(&self) -> u64 {
        self.mod_inv
    }

    /// Converts an integer to a ring element, reducing it first.
    #[must_use]
    pub fn element(&self, value: Uint) -> ModRingElement<'_, Uint> {
        let reduced = if value < self.modulus {
            value
        } else {
            value.reduce(self.modulus)
        };
        let value = self.mont_mul(reduced, self.montgomery_r2);
        ModRingElement::from_montgomery(self, value)
    }

    #[inline]
    #[must_use]
    pub fn from_u64(&self, value: u64) -> ModRingElement<'_, Uint> {
        self.element(Uint::from_u64(value))
    }

    #[inline]
    #[must_use]
    pub fn one(&self) -> ModRingElement<'_, Uint> {
        ModRingElement::from_montgomery(self, self.montgomery_r)
    }

    /// Montogomery multiplication for the ring.
    #[inline]
    #[must_use]
    pub(super) fn mont_mul(&self, a: Uint, b: Uint) -> Uint {
        a.mul_redc(b, self.modulus, self.mod_inv)
    }
}
