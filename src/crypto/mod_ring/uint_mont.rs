use {
    super::ModRing,
    rand::Rng,
    ruint::{aliases::U64, Uint},
    std::fmt::Debug,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::Zeroize,
};

/// Trait for Uint backends supporting Montgomery multiplication.
///
/// The only implemented backed is Ruint, but the code is cleaner
/// if we abstract this, otherwise we would have to pass along the
/// const-generic parameters everywhere.
pub trait UintMont:
    Sized
    + Copy
    + PartialEq
    + Eq
    + PartialOrd
    + Debug
    + ConstantTimeEq
    + ConditionallySelectable
    + Zeroize
{
    /// Montgomery parameters for `modulus`, or `None` if it is even or
    /// smaller than three.
    fn parameters_from_modulus(modulus: Self) -> Option<ModRing<Self>>;
    fn from_u64(value: u64) -> Self;
    /// Uniform random value in `0..=max`.
    fn random_at_most<R: Rng + ?Sized>(rng: &mut R, max: Self) -> Self;
    fn reduce(self, modulus: Self) -> Self;
    fn mul_redc(self, other: Self, modulus: Self, mod_inv: u64) -> Self;

    /// Number of bits in the representation. Does not depend on the value.
    fn bit_capacity() -> usize;

    /// Position of the highest set bit plus one. Depends on the value.
    fn bit_len(&self) -> usize;

    /// Is the `index`th bit set in the binary expansion of `self`.
    fn bit_ct(&self, index: usize) -> Choice;
}

impl<const BITS: usize, const LIMBS: usize> UintMont for Uint<BITS, LIMBS> {
    fn parameters_from_modulus(modulus: Self) -> Option<ModRing<Self>> {
        if modulus < Self::from(3_u64) {
            return None;
        }
        // Even moduli have no inverse modulo 2^64.
        let mod_inv = U64::wrapping_from(modulus)
            .inv_ring()?
            .wrapping_neg()
            .to();

        // montgomery_r2 = 2^(128 * LIMBS) mod modulus.
        let mut montgomery_r2 = Self::ZERO;
        if Self::BITS > 32 * Self::LIMBS {
            montgomery_r2.set_bit(32 * Self::LIMBS, true);
            montgomery_r2 %= modulus;
        } else {
            montgomery_r2 = Self::from((1_u64 << 32) % modulus.to::<u64>());
        }
        montgomery_r2 = montgomery_r2.mul_mod(montgomery_r2, modulus);
        montgomery_r2 = montgomery_r2.mul_mod(montgomery_r2, modulus);
        Some(ModRing::from_parameters(modulus, montgomery_r2, mod_inv))
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        Self::from(value)
    }

    fn random_at_most<R: Rng + ?Sized>(rng: &mut R, max: Self) -> Self {
        let leading_zeros = max.leading_zeros();
        loop {
            let mut value = rng.gen::<Self>();
            if leading_zeros < BITS {
                value >>= leading_zeros;
            } else {
                value = Self::ZERO;
            }
            if value <= max {
                return value;
            }
        }
    }

    #[inline]
    fn reduce(self, modulus: Self) -> Self {
        self % modulus
    }

    #[inline]
    fn mul_redc(self, other: Self, modulus: Self, mod_inv: u64) -> Self {
        Self::mul_redc(self, other, modulus, mod_inv)
    }

    #[inline]
    fn bit_capacity() -> usize {
        BITS
    }

    #[inline]
    fn bit_len(&self) -> usize {
        Self::bit_len(self)
    }

    #[inline]
    fn bit_ct(&self, index: usize) -> Choice {
        Choice::from(u8::from(self.bit(index)))
    }
}
