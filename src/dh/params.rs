use {
    super::DhUint,
    crate::{
        crypto::{
            codec::{BsiTr031111Codec, Codec},
            mod_ring::{ModRing, ModRingElement},
        },
        error::{Error, Result},
    },
    tracing::debug,
};

/// Prime field Diffie-Hellman domain parameters `(p, g, q)`.
///
/// Construction only enforces what the arithmetic needs. Use
/// [`super::accept`] before trusting parameters from the other party.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DomainParameters {
    modulus:   DhUint,
    generator: DhUint,
    order:     Option<DhUint>,
    field:     ModRing<DhUint>,
}

impl DomainParameters {
    pub fn new(modulus: DhUint, generator: DhUint, order: Option<DhUint>) -> Result<Self> {
        if modulus < DhUint::from(5_u64) {
            return Err(Error::MalformedInput("modulus must be at least 5"));
        }
        let field = ModRing::from_modulus(modulus)
            .ok_or(Error::MalformedInput("modulus must be odd"))?;
        if generator >= modulus {
            return Err(Error::MalformedInput("generator must be less than the modulus"));
        }
        if let Some(order) = order {
            if order < DhUint::from(2_u64) || order >= modulus {
                return Err(Error::MalformedInput("subgroup order out of range"));
            }
        }
        Ok(Self {
            modulus,
            generator,
            order,
            field,
        })
    }

    /// Parses big-endian unsigned `p`, `g` and optional `q`.
    pub fn from_be_bytes(modulus: &[u8], generator: &[u8], order: Option<&[u8]>) -> Result<Self> {
        let modulus = decode_parameter(modulus)?;
        let generator = decode_parameter(generator)?;
        let order = order.map(decode_parameter).transpose()?;
        let params = Self::new(modulus, generator, order)?;
        debug!(bits = modulus.bit_len(), has_order = order.is_some(), "parsed domain parameters");
        Ok(params)
    }

    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> DhUint {
        self.modulus
    }

    #[inline]
    #[must_use]
    pub const fn generator(&self) -> DhUint {
        self.generator
    }

    /// Order of the prime subgroup generated by `g`, if known.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> Option<DhUint> {
        self.order
    }

    /// The field `Z/pZ`.
    #[inline]
    #[must_use]
    pub const fn field(&self) -> &ModRing<DhUint> {
        &self.field
    }

    /// Length of `p` in bytes, which is also the width of encoded field
    /// elements.
    #[inline]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.modulus.byte_len()
    }

    #[must_use]
    pub fn generator_element(&self) -> ModRingElement<'_, DhUint> {
        self.field.element(self.generator)
    }

    /// Copy of these parameters with the subgroup order replaced.
    pub(super) fn with_order(&self, order: DhUint) -> Result<Self> {
        Self::new(self.modulus, self.generator, Some(order))
    }
}

fn decode_parameter(bytes: &[u8]) -> Result<DhUint> {
    let leading_zeros = bytes.iter().take_while(|b| **b == 0).count();
    if bytes.len() - leading_zeros > DhUint::BYTES {
        return Err(Error::ResourceExhausted("domain parameter exceeds 2048 bits"));
    }
    let mut buffer = &bytes[leading_zeros..];
    BsiTr031111Codec::with_length(buffer.len()).decode(&mut buffer, ())
}
