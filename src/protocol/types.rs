mod location;
mod primitives;

pub use location::Location;

use bytes::{Buf, BufMut, Bytes};
use std::mem;

use crate::protocol::{
    constants::{MAX_DATA_LEN, MAX_VARINT_LEN},
    packet::{DecodeError, WireValue},
};

/// Fails with `TruncatedInput` unless `src` still holds `needed` bytes.
pub(crate) fn ensure_remaining(src: &impl Buf, needed: usize) -> Result<(), DecodeError> {
    let remaining = src.remaining();
    if remaining < needed {
        return Err(DecodeError::truncated(needed, remaining));
    }
    Ok(())
}

macro_rules! impl_wire_fixed {
    ($ty:ty, $put:ident, $get:ident) => {
        impl WireValue for $ty {
            fn encode_wire(&self, dst: &mut impl BufMut) {
                dst.$put(*self);
            }

            fn decode_wire(src: &mut impl Buf) -> Result<Self, DecodeError> {
                ensure_remaining(src, mem::size_of::<$ty>())?;
                Ok(src.$get())
            }
        }
    };
}

// Everything multi-byte is big-endian.
impl_wire_fixed!(u8, put_u8, get_u8);
impl_wire_fixed!(i32, put_i32, get_i32);
impl_wire_fixed!(f64, put_f64, get_f64);

/// Unsigned LEB128 length prefix, capped at five bytes and `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt(pub u32);

impl VarInt {
    /// Number of bytes this value occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        match self.0 {
            0..=0x7f => 1,
            0x80..=0x3fff => 2,
            0x4000..=0x1f_ffff => 3,
            0x20_0000..=0x0fff_ffff => 4,
            _ => 5,
        }
    }
}

impl WireValue for VarInt {
    fn encode_wire(&self, dst: &mut impl BufMut) {
        let mut v = self.0;
        while v >= 0x80 {
            dst.put_u8(((v & 0x7f) | 0x80) as u8);
            v >>= 7;
        }
        dst.put_u8(v as u8);
    }

    fn decode_wire(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let mut result: u32 = 0;
        for i in 0..MAX_VARINT_LEN {
            ensure_remaining(src, 1)?;
            let byte = src.get_u8();
            // Only 4 payload bits fit in the fifth byte, and the top one is the sign.
            if i == MAX_VARINT_LEN - 1 && byte & 0xf8 != 0 {
                return Err(DecodeError::InvalidVarint);
            }
            result |= ((byte & 0x7f) as u32) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(VarInt(result));
            }
        }
        Err(DecodeError::InvalidVarint)
    }
}

/// A length-prefixed byte block: `varint(len)` followed by `len` raw bytes.
impl WireValue for Bytes {
    fn encode_wire(&self, dst: &mut impl BufMut) {
        debug_assert!(
            self.len() <= MAX_DATA_LEN,
            "data block of {} bytes does not fit a length prefix",
            self.len()
        );
        VarInt(self.len() as u32).encode_wire(dst);
        dst.put_slice(self);
    }

    fn decode_wire(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let len = VarInt::decode_wire(src)?.0 as usize;
        ensure_remaining(src, len)?;
        Ok(src.copy_to_bytes(len))
    }
}

/// Wire size of a length-prefixed byte block.
pub(crate) fn byte_array_len(data: &Bytes) -> usize {
    VarInt(data.len() as u32).encoded_len() + data.len()
}
