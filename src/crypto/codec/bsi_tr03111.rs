//! Implements the encodings from BSI TR-03111 section 3.1.
use {
    super::Codec,
    crate::{
        crypto::mod_ring::{ModRing, ModRingElement},
        error::{Error, Result},
    },
    bytes::{Buf, BufMut},
    ruint::Uint,
    zeroize::Zeroizing,
};

/// The integer encodings from BSI TR-03111
#[derive(Clone, Copy, Debug, Default)]
pub struct BsiTr031111Codec {
    /// Byte length for uints (defaults to Uint::BYTES).
    pub uint_bytes: Option<usize>,
}

impl BsiTr031111Codec {
    #[must_use]
    pub const fn with_length(uint_bytes: usize) -> Self {
        Self {
            uint_bytes: Some(uint_bytes),
        }
    }
}

/// BSI TR-03111 3.1.2: Conversion between Integers and Octet Strings
impl<const BITS: usize, const LIMBS: usize> Codec<Uint<BITS, LIMBS>> for BsiTr031111Codec {
    type Parent = ();

    fn encode<B: BufMut>(&self, buffer: &mut B, value: Uint<BITS, LIMBS>) {
        let size = self.uint_bytes.unwrap_or(Uint::<BITS, LIMBS>::BYTES);
        assert!(value.byte_len() <= size, "Invalid byte length for uint");
        let bytes = Zeroizing::new(value.to_be_bytes_vec());
        buffer.put_bytes(0, size.saturating_sub(bytes.len()));
        let trim = bytes.len().saturating_sub(size);
        buffer.put_slice(&bytes[trim..]);
    }

    fn decode<B: Buf>(&self, buffer: &mut B, _parent: Self::Parent) -> Result<Uint<BITS, LIMBS>> {
        let size = self.uint_bytes.unwrap_or(Uint::<BITS, LIMBS>::BYTES);
        if buffer.remaining() < size {
            return Err(Error::MalformedInput("insufficient bytes remaining"));
        }
        let mut bytes = Zeroizing::new(vec![0; size]);
        buffer.copy_to_slice(&mut bytes);
        let trim = size.saturating_sub(Uint::<BITS, LIMBS>::BYTES);
        if bytes[..trim].iter().any(|b| *b != 0) {
            return Err(Error::MalformedInput("value too large for target uint"));
        }
        Uint::try_from_be_slice(&bytes[trim..])
            .ok_or(Error::MalformedInput("value too large for target uint"))
    }
}

/// BSI TR-03111 3.1.3: Conversion between Field Elements and Octet Strings
impl<'a, const BITS: usize, const LIMBS: usize> Codec<ModRingElement<'a, Uint<BITS, LIMBS>>>
    for BsiTr031111Codec
{
    type Parent = &'a ModRing<Uint<BITS, LIMBS>>;

    fn encode<B: BufMut>(&self, buffer: &mut B, value: ModRingElement<'a, Uint<BITS, LIMBS>>) {
        let codec = Self::with_length(value.ring().modulus().byte_len());
        let uint = Zeroizing::new(value.to_uint());
        codec.encode(buffer, *uint);
    }

    fn decode<B: Buf>(
        &self,
        buffer: &mut B,
        parent: Self::Parent,
    ) -> Result<ModRingElement<'a, Uint<BITS, LIMBS>>> {
        let codec = Self::with_length(parent.modulus().byte_len());
        let uint: Zeroizing<Uint<BITS, LIMBS>> = Zeroizing::new(codec.decode(buffer, ())?);
        if *uint >= parent.modulus() {
            return Err(Error::MalformedInput("value is not a field element"));
        }
        Ok(parent.element(*uint))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, bytes::BytesMut, hex_literal::hex, ruint::aliases::U64};

    #[test]
    fn test_uint_padding() {
        let codec = BsiTr031111Codec::with_length(4);
        let mut buffer = BytesMut::new();
        codec.encode(&mut buffer, U64::from(0x0102_u64));
        assert_eq!(&buffer[..], &hex!("00 00 01 02"));
        assert_eq!(codec.encoded_size(U64::from(0x0102_u64)), 4);

        let decoded: U64 = codec.decode(&mut &buffer[..], ()).unwrap();
        assert_eq!(decoded, U64::from(0x0102_u64));
    }

    #[test]
    fn test_uint_default_length() {
        let codec = BsiTr031111Codec::default();
        assert_eq!(codec.encoded_size(U64::from(1_u64)), 8);
    }

    #[test]
    fn test_uint_wide_input() {
        let codec = BsiTr031111Codec::with_length(10);
        let zero_padded = hex!("00 00 00 00 00 00 00 00 00 2a");
        let value: U64 = codec.decode(&mut &zero_padded[..], ()).unwrap();
        assert_eq!(value, U64::from(42_u64));

        let too_large = hex!("01 00 00 00 00 00 00 00 00 2a");
        let result: Result<U64> = codec.decode(&mut &too_large[..], ());
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_uint_short_input() {
        let codec = BsiTr031111Codec::with_length(4);
        let result: Result<U64> = codec.decode(&mut &hex!("01 02")[..], ());
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_field_element() {
        let field = ModRing::from_modulus(U64::from(0x0101_u64)).unwrap();
        let codec = BsiTr031111Codec::default();

        let element = field.from_u64(7);
        let mut buffer = BytesMut::new();
        codec.encode(&mut buffer, element);
        assert_eq!(&buffer[..], &hex!("00 07"));

        let decoded: ModRingElement<_> = codec.decode(&mut &buffer[..], &field).unwrap();
        assert_eq!(decoded, element);

        let result: Result<ModRingElement<_>> = codec.decode(&mut &hex!("01 01")[..], &field);
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }
}
