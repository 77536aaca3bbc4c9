//! Octet string encodings for integers and field elements.

mod bsi_tr03111;

pub use self::bsi_tr03111::BsiTr031111Codec;
use {
    crate::error::Result,
    bytes::{Buf, BufMut, BytesMut},
};

pub trait Codec<T> {
    /// Context needed to decode, such as the field an element belongs to.
    type Parent;

    fn encoded_size(&self, value: T) -> usize {
        let mut buffer = BytesMut::new();
        self.encode(&mut buffer, value);
        buffer.len()
    }

    fn encode<B: BufMut>(&self, buffer: &mut B, value: T);

    fn decode<B: Buf>(&self, buffer: &mut B, parent: Self::Parent) -> Result<T>;
}
