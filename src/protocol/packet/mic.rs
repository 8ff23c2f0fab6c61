//! Microphone audio sent from the client to the voice server.

use bytes::{BufMut, Bytes};

use crate::protocol::{
    constants::SEQUENCE_SIZE,
    packet::{Encodable, Packet, PacketId, WireValue},
    types::byte_array_len,
};

/// One frame of encoded microphone audio.
///
/// Wire layout: `varint(len)` · `data` · `sequence: i32` · `whispering: u8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicPacket {
    pub data: Bytes,
    pub whispering: bool,
    pub sequence: i32,
}

impl MicPacket {
    pub fn new(data: impl Into<Bytes>, whispering: bool, sequence: i32) -> Self {
        Self {
            data: data.into(),
            whispering,
            sequence,
        }
    }
}

impl Packet for MicPacket {
    const ID: PacketId = PacketId::Mic;
}

impl Encodable for MicPacket {
    fn encode(&self, dst: &mut impl BufMut) {
        self.data.encode_wire(dst);
        self.sequence.encode_wire(dst);
        self.whispering.encode_wire(dst);
    }

    fn encoded_len(&self) -> usize {
        byte_array_len(&self.data) + SEQUENCE_SIZE + 1
    }
}
