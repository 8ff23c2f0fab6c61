use bytes::{Buf, BufMut};
use uuid::Uuid;

use crate::protocol::{
    constants::UUID_SIZE,
    packet::{DecodeError, WireValue},
    types::ensure_remaining,
};

impl WireValue for bool {
    fn encode_wire(&self, dst: &mut impl BufMut) {
        dst.put_u8(if *self { 1 } else { 0 });
    }

    /// Any nonzero byte reads as `true`.
    fn decode_wire(src: &mut impl Buf) -> Result<Self, DecodeError> {
        ensure_remaining(src, 1)?;
        Ok(src.get_u8() != 0)
    }
}

impl WireValue for Uuid {
    fn encode_wire(&self, dst: &mut impl BufMut) {
        dst.put_slice(self.as_bytes());
    }

    fn decode_wire(src: &mut impl Buf) -> Result<Self, DecodeError> {
        ensure_remaining(src, UUID_SIZE)?;

        let mut raw = [0u8; UUID_SIZE];
        // Reads exactly 16 bytes and advances the Buf.
        src.copy_to_slice(&mut raw);

        Ok(Uuid::from_bytes(raw))
    }
}
