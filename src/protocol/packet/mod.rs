pub mod connection;
pub mod mic;
pub mod sound;
mod error;
mod id;
mod registry;
mod utils;

pub use connection::*;
pub use error::DecodeError;
pub use id::PacketId;
pub use mic::MicPacket;
pub use registry::{ClientboundPacket, ServerboundPacket};
pub use sound::*;

use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Implemented by every concrete voice packet body type.
///
/// The ID byte is never part of the body; the framing layer (or
/// `ServerboundPacket`/`ClientboundPacket`) writes and reads it.
pub trait Packet: Sized {
    /// The fixed ID used to identify this packet on the wire.
    const ID: PacketId;
}

/// A packet body the client can put on the wire.
///
/// Encoding is infallible: the caller guarantees that every `data` block
/// fits a length prefix before handing the packet over.
pub trait Encodable: Packet {
    /// Encode the body of this packet into the destination buffer.
    fn encode(&self, dst: &mut impl BufMut);

    /// Exact number of bytes `encode` will write.
    fn encoded_len(&self) -> usize;

    /// Encode the body into a fresh, frozen buffer.
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut buf);
        buf.freeze()
    }
}

/// A packet body the client can read off the wire.
pub trait Decodable: Packet {
    /// Decode the body of this packet from the source buffer.
    ///
    /// On success the cursor sits right after the body. On failure no
    /// value is produced and the packet must be discarded.
    fn decode(src: &mut impl Buf) -> Result<Self, DecodeError>;
}

/// Trait for field types that know how to encode/decode themselves using
/// the voice wire format.
pub trait WireValue: Sized {
    /// Encode this value into the destination buffer.
    fn encode_wire(&self, dst: &mut impl BufMut);

    /// Decode a value of this type from the source buffer.
    fn decode_wire(src: &mut impl Buf) -> Result<Self, DecodeError>;
}
