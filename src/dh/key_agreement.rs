//! Diffie-Hellman key generation and shared secret computation.

use {
    super::{check, DhUint, DomainParameters},
    crate::{
        crypto::{
            codec::{BsiTr031111Codec, Codec},
            mod_ring::{ModRingElement, UintMont},
            CryptoCoreRng,
        },
        error::{Error, Result},
    },
    std::fmt::{self, Formatter},
    subtle::ConstantTimeEq,
    tracing::warn,
    zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing},
};

/// Secret exponent `x`. Erased on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(DhUint);

impl PrivateKey {
    /// Uniform random key in `[2, q - 2]`, or `[2, p - 2]` without `q`,
    /// as required by X9.42.
    pub fn random(params: &DomainParameters, rng: &mut dyn CryptoCoreRng) -> Result<Self> {
        let upper = params.order().unwrap_or_else(|| params.modulus());
        if upper < DhUint::from(4_u64) {
            return Err(Error::MalformedGroup);
        }
        let offset = <DhUint as UintMont>::random_at_most(rng, upper - DhUint::from(4_u64));
        Ok(Self(offset + DhUint::from(2_u64)))
    }

    /// Imports a big-endian encoded key.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        let mut buffer = bytes;
        let value = BsiTr031111Codec::with_length(bytes.len()).decode(&mut buffer, ())?;
        let key = Self(value);
        if key.0.is_zero() {
            return Err(Error::MalformedInput("private key is zero"));
        }
        Ok(key)
    }

    #[must_use]
    pub fn to_be_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_be_bytes_trimmed_vec())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// Key pair bound to the domain parameters it was generated for.
#[derive(Debug)]
pub struct KeyPair<'a> {
    params:  &'a DomainParameters,
    private: PrivateKey,
    public:  DhUint,
}

impl<'a> KeyPair<'a> {
    /// Generates a fresh key pair and validates the public value.
    ///
    /// On [`Error::KeyValidationFailed`] the private key is erased and the
    /// caller may try again.
    pub fn generate(params: &'a DomainParameters, rng: &mut dyn CryptoCoreRng) -> Result<Self> {
        let private = PrivateKey::random(params, rng)?;
        Self::from_private_key(params, private)
    }

    /// Computes `g^x mod p` and validates it.
    pub fn from_private_key(params: &'a DomainParameters, private: PrivateKey) -> Result<Self> {
        let mut power = params.generator_element().pow_ct(private.0);
        let public = power.to_uint();
        power.zeroize();
        let verdict = check(params, public);
        if !verdict.is_empty() {
            warn!(%verdict, "generated public key failed validation");
            return Err(Error::KeyValidationFailed(verdict));
        }
        Ok(Self {
            params,
            private,
            public,
        })
    }

    #[must_use]
    pub const fn params(&self) -> &'a DomainParameters {
        self.params
    }

    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    #[must_use]
    pub const fn public_key(&self) -> DhUint {
        self.public
    }

    /// Public value encoded big-endian to the byte length of `p`.
    #[must_use]
    pub fn public_key_bytes(&self) -> Vec<u8> {
        let codec = BsiTr031111Codec::with_length(self.params.byte_len());
        let mut buffer = Vec::with_capacity(self.params.byte_len());
        codec.encode(&mut buffer, self.public);
        buffer
    }

    /// Shared secret with the peer's public value.
    ///
    /// See [`compute`] for the validation the caller is responsible for.
    pub fn compute(&self, peer_public: &[u8]) -> Result<SharedSecret> {
        compute(&self.private, self.params, peer_public)
    }
}

/// Computes `y^x mod p` for the peer's big-endian public value `y`.
///
/// The peer value is only checked to be a field element. Run
/// [`super::check_bytes`] on it first: without that, a small subgroup
/// value leaks bits of the private key.
pub fn compute(
    private: &PrivateKey,
    params: &DomainParameters,
    peer_public: &[u8],
) -> Result<SharedSecret> {
    if peer_public.is_empty() {
        return Err(Error::MalformedInput("empty public value"));
    }
    let leading_zeros = peer_public.iter().take_while(|b| **b == 0).count();
    let significant = &peer_public[leading_zeros..];
    let width = params.byte_len();
    if significant.len() > width {
        return Err(Error::MalformedInput("public value is not a field element"));
    }
    let mut padded = vec![0; width];
    padded[width - significant.len()..].copy_from_slice(significant);
    let peer: ModRingElement<_> =
        BsiTr031111Codec::default().decode(&mut padded.as_slice(), params.field())?;
    let shared = Zeroizing::new(peer.pow_ct(private.0));
    let mut secret = Zeroizing::new(Vec::with_capacity(params.byte_len()));
    BsiTr031111Codec::default().encode(&mut *secret, *shared);
    Ok(SharedSecret(secret))
}

/// Shared secret `Z`, exactly as long as `p`. Erased on drop.
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "SharedSecret({} bytes)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::dh::{lookup, GroupId, PublicKeyCheck},
        hex_literal::hex,
    };

    // RFC 5114 appendix A.1
    const XA: [u8; 20] = hex!("b9a3b3ae 8fefc1a2 93049650 7086f845 5d48943e");
    const YA: [u8; 128] = hex!(
        "2A853B3D 92197501 B9015B2D EB3ED84F 5E021DCC 3E52F109 D3273D2B 7521281C"
        "BABE0E76 FF5727FA 8ACCE269 56BA9A1F CA26F202 28D8693F EB10841D 84A73600"
        "54ECE5A7 F5B7A61A D3DFB3C6 0D2E4310 6D8727DA 37DF9CCE 95B47875 5D06BCEA"
        "8F9D4596 5F75A5F3 D1DF3701 165FC9E5 0C4279CE B07F9895 40AE96D5 D88ED776"
    );
    const XB: [u8; 20] = hex!("9392c9f9 eb6a7a6a 9022f7d8 3e7223c6 835bbdda");
    const YB: [u8; 128] = hex!(
        "717A6CB0 53371FF4 A3B93294 1C1E5663 F861A1D6 AD34AE66 576DFB98 F6C6CBF9"
        "DDD5A56C 7833F6BC FDFF0955 82AD868E 440E8D09 FD769E3C ECCDC3D3 B1E4CFA0"
        "57776CAA F9739B6A 9FEE8E74 11F8D6DA C09D6A4E DB46CC2B 5D520309 0EAE6126"
        "311E53FD 2C14B574 E6A3109A 3DA1BE41 BDCEAA18 6F5CE067 16A2B6A0 7B3C33FE"
    );
    const Z: [u8; 128] = hex!(
        "5C804F45 4D30D9C4 DF85271F 93528C91 DF6B48AB 5F80B3B5 9CAAC1B2 8F8ACBA9"
        "CD3E39F3 CB614525 D9521D2E 644C53B8 07B810F3 40062F25 7D7D6FBF E8D5E8F0"
        "72E9B6E9 AFDA9413 EAFB2E8B 0699B1FB 5A0CACED DEAEAD7E 9CFBB36A E2B42083"
        "5BD83A19 FB0B5E96 BF8FA4D0 9E345525 167ECD91 55416F46 F408ED31 B63C6E6D"
    );

    fn small(p: u64, g: u64, q: Option<u64>) -> DomainParameters {
        DomainParameters::new(DhUint::from(p), DhUint::from(g), q.map(DhUint::from)).unwrap()
    }

    #[test]
    fn test_known_answer() {
        let params = lookup(GroupId::Modp1);
        let alice = KeyPair::from_private_key(params, PrivateKey::from_be_bytes(&XA).unwrap())
            .unwrap();
        let bob = KeyPair::from_private_key(params, PrivateKey::from_be_bytes(&XB).unwrap())
            .unwrap();
        assert_eq!(alice.public_key_bytes(), YA);
        assert_eq!(bob.public_key_bytes(), YB);
        assert_eq!(alice.compute(&YB).unwrap().as_bytes(), Z);
        assert_eq!(bob.compute(&YA).unwrap().as_bytes(), Z);
    }

    #[test]
    fn test_symmetry() {
        let rng = &mut rand::thread_rng();
        for id in GroupId::ALL {
            let params = lookup(id);
            let alice = KeyPair::generate(params, rng).unwrap();
            let bob = KeyPair::generate(params, rng).unwrap();
            assert!(check(params, alice.public_key()).is_empty());

            let alice_shared = alice.compute(&bob.public_key_bytes()).unwrap();
            let bob_shared = bob.compute(&alice.public_key_bytes()).unwrap();
            assert_eq!(alice_shared, bob_shared, "{id}");
            assert_eq!(alice_shared.len(), params.byte_len());
        }
    }

    #[test]
    fn test_private_key_range() {
        let rng = &mut rand::thread_rng();
        // q = 5 leaves exactly [2, 3].
        let params = small(11, 3, Some(5));
        for _ in 0..32 {
            let key = PrivateKey::random(&params, rng).unwrap();
            assert!((2..=3).contains(&key.0.to::<u64>()));
        }
        assert_eq!(
            PrivateKey::random(&small(11, 10, Some(3)), rng).unwrap_err(),
            Error::MalformedGroup
        );
    }

    #[test]
    fn test_degenerate_generator() {
        // g = p - 1 only reaches 1 and p - 1.
        let params = small(23, 22, Some(11));
        let rng = &mut rand::thread_rng();
        for _ in 0..16 {
            let Err(Error::KeyValidationFailed(verdict)) = KeyPair::generate(&params, rng) else {
                panic!("degenerate key pair accepted");
            };
            assert!(
                verdict.contains(PublicKeyCheck::TOO_SMALL)
                    || verdict.contains(PublicKeyCheck::TOO_LARGE)
            );
        }
    }

    #[test]
    fn test_malformed_peer() {
        let params = lookup(GroupId::Modp1);
        let key = PrivateKey::from_be_bytes(&XA).unwrap();
        let p = params.modulus().to_be_bytes_trimmed_vec();
        let too_wide = vec![0xff; DhUint::BYTES + 1];
        // Fits the arithmetic but is longer than p.
        let mut longer_than_p = vec![0; params.byte_len() + 1];
        longer_than_p[0] = 1;
        for peer in [
            &[][..],
            p.as_slice(),
            too_wide.as_slice(),
            longer_than_p.as_slice(),
        ] {
            assert!(matches!(
                compute(&key, params, peer),
                Err(Error::MalformedInput(_))
            ));
        }

        // Leading zeros are accepted.
        let mut padded = vec![0; 3];
        padded.extend_from_slice(&YB);
        assert_eq!(compute(&key, params, &padded).unwrap().as_bytes(), Z);
    }

    #[test]
    fn test_secret_padding() {
        // 2^2 = 4 mod 23 encodes to the single byte length of p.
        let params = small(23, 2, Some(11));
        let key = PrivateKey::from_be_bytes(&[2]).unwrap();
        let secret = compute(&key, &params, &[2]).unwrap();
        assert_eq!(secret.as_bytes(), &[4]);

        let params = lookup(GroupId::Modp2);
        let secret = compute(&key, params, &[1]).unwrap();
        assert_eq!(secret.len(), 256);
        assert_eq!(secret.as_bytes()[255], 1);
        assert!(secret.as_bytes()[..255].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_private_key_import() {
        assert!(matches!(
            PrivateKey::from_be_bytes(&[0, 0]),
            Err(Error::MalformedInput(_))
        ));
        let key = PrivateKey::from_be_bytes(&XA).unwrap();
        assert_eq!(key.to_be_bytes().as_slice(), XA);
        assert_eq!(format!("{key:?}"), "PrivateKey(..)");
    }
}
