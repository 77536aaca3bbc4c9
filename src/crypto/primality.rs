//! Probabilistic primality testing.
//!
//! Trial division by the primes below 256, followed by Miller-Rabin with
//! uniformly random bases. Candidates may be adversarial (domain parameters
//! arrive from the other party), so bases are never fixed.

use {
    super::mod_ring::{ModRing, UintMont},
    rand::Rng,
    ruint::Uint,
};

const SMALL_PRIMES: [u64; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Number of Miller-Rabin rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounds {
    /// Pick the count from the bit length of the candidate, targeting an
    /// error probability below 2^-80 for random candidates.
    #[default]
    ForSize,

    /// Always run exactly this many rounds.
    Fixed(usize),
}

impl Rounds {
    #[must_use]
    pub const fn for_bits(self, bits: usize) -> usize {
        match self {
            Self::Fixed(rounds) => rounds,
            Self::ForSize => match bits {
                3747.. => 3,
                1345.. => 4,
                476.. => 5,
                400.. => 6,
                347.. => 7,
                308.. => 8,
                55.. => 27,
                _ => 34,
            },
        }
    }
}

/// Primality test configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Primality {
    pub rounds: Rounds,
}

impl Primality {
    #[must_use]
    pub const fn with_rounds(rounds: usize) -> Self {
        Self {
            rounds: Rounds::Fixed(rounds),
        }
    }

    /// Tests `candidate` using bases drawn from the thread-local CSPRNG.
    #[must_use]
    pub fn is_probable_prime<const BITS: usize, const LIMBS: usize>(
        &self,
        candidate: Uint<BITS, LIMBS>,
    ) -> bool {
        self.is_probable_prime_with_rng(candidate, &mut rand::thread_rng())
    }

    pub fn is_probable_prime_with_rng<R, const BITS: usize, const LIMBS: usize>(
        &self,
        candidate: Uint<BITS, LIMBS>,
        rng: &mut R,
    ) -> bool
    where
        R: Rng + ?Sized,
    {
        if candidate < Uint::<BITS, LIMBS>::from(2_u64) {
            return false;
        }
        for small in SMALL_PRIMES {
            let small = Uint::<BITS, LIMBS>::from(small);
            if candidate == small {
                return true;
            }
            if (candidate % small).is_zero() {
                return false;
            }
        }

        // Survived trial division, so candidate is odd and above 251.
        let Some(ring) = ModRing::from_modulus(candidate) else {
            return false;
        };
        let n_minus_one = candidate - Uint::<BITS, LIMBS>::from(1_u64);
        let shift = n_minus_one.trailing_zeros();
        let odd_part = n_minus_one >> shift;
        let one = ring.one();
        let minus_one = ring.element(n_minus_one);

        // Bases are uniform in [2, n - 2].
        let two = Uint::<BITS, LIMBS>::from(2_u64);
        let span = candidate - Uint::<BITS, LIMBS>::from(4_u64);
        let rounds = self.rounds.for_bits(candidate.bit_len());
        'witness: for _ in 0..rounds {
            let base = Uint::<BITS, LIMBS>::random_at_most(rng, span) + two;
            let mut x = ring.element(base).pow_vartime(odd_part);
            if x == one || x == minus_one {
                continue;
            }
            for _ in 1..shift {
                x = x.square();
                if x == minus_one {
                    continue 'witness;
                }
                if x == one {
                    return false;
                }
            }
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ruint::{
            aliases::{U2048, U64},
            uint,
        },
    };

    #[test]
    fn test_small_values() {
        let primality = Primality::default();
        let primes = [2_u64, 3, 5, 7, 11, 23, 251, 257, 65537];
        let composites = [0_u64, 1, 4, 9, 15, 21, 255, 65535];
        for p in primes {
            assert!(primality.is_probable_prime(U64::from(p)), "{p} is prime");
        }
        for c in composites {
            assert!(!primality.is_probable_prime(U64::from(c)), "{c} is composite");
        }
    }

    #[test]
    fn test_carmichael() {
        // Passes the Fermat test for every coprime base and has no factor
        // below 256, so only Miller-Rabin catches it.
        let primality = Primality::with_rounds(16);
        let carmichael = uint!(118901521_U64); // 271 * 541 * 811
        assert!(!primality.is_probable_prime(carmichael));
        assert!(!primality.is_probable_prime(U64::from(561_u64)));
    }

    #[test]
    fn test_large() {
        let primality = Primality::default();
        // Mersenne prime 2^127 - 1 and its neighbour.
        let m127 = (U2048::from(1_u64) << 127_usize) - U2048::from(1_u64);
        assert!(primality.is_probable_prime(m127));
        assert!(!primality.is_probable_prime(m127 + U2048::from(2_u64)));
        // RFC 5114 group 1 subgroup order.
        let q = uint!(0xF518AA87_81A8DF27_8ABA4E7D_64B7CB9D_49462353_U2048);
        assert!(primality.is_probable_prime(q));
        assert!(!primality.is_probable_prime(q * U2048::from(3_u64)));
    }

    #[test]
    fn test_round_table() {
        assert_eq!(Rounds::ForSize.for_bits(2048), 4);
        assert_eq!(Rounds::ForSize.for_bits(1024), 5);
        assert_eq!(Rounds::ForSize.for_bits(160), 27);
        assert_eq!(Rounds::ForSize.for_bits(8), 34);
        assert_eq!(Rounds::Fixed(64).for_bits(8), 64);
    }
}
