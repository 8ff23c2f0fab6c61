//! Audio relayed by the voice server to the client.
//!
//! All three sound packets carry the same sender/data/sequence triple,
//! held in [`SoundPacket`]. Each variant places its extra field at its
//! own position on the wire, so the layouts are decoded one by one
//! rather than through a shared routine.

use bytes::{Buf, Bytes};
use uuid::Uuid;

use crate::protocol::{
    packet::{Decodable, DecodeError, Packet, PacketId, WireValue},
    types::Location,
};

/// Fields shared by every sound packet. Never sent on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundPacket {
    pub sender: Uuid,
    pub data: Bytes,
    pub sequence: i32,
}

/// Audio from a single player, heard without positional falloff.
///
/// Wire layout: `sender` · `varint(len)` · `data` · `sequence` · `whispering`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSoundPacket {
    pub sound: SoundPacket,
    pub whispering: bool,
}

impl Packet for PlayerSoundPacket {
    const ID: PacketId = PacketId::PlayerSound;
}

impl Decodable for PlayerSoundPacket {
    fn decode(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let sender = Uuid::decode_wire(src)?;
        let data = Bytes::decode_wire(src)?;
        let sequence = i32::decode_wire(src)?;
        let whispering = bool::decode_wire(src)?;

        Ok(Self {
            sound: SoundPacket {
                sender,
                data,
                sequence,
            },
            whispering,
        })
    }
}

/// Audio from a member of the client's group.
///
/// Wire layout: `sender` · `varint(len)` · `data` · `sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSoundPacket {
    pub sound: SoundPacket,
}

impl Packet for GroupSoundPacket {
    const ID: PacketId = PacketId::GroupSound;
}

impl Decodable for GroupSoundPacket {
    fn decode(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let sender = Uuid::decode_wire(src)?;
        let data = Bytes::decode_wire(src)?;
        let sequence = i32::decode_wire(src)?;

        Ok(Self {
            sound: SoundPacket {
                sender,
                data,
                sequence,
            },
        })
    }
}

/// Audio emitted at a fixed point in the world.
///
/// Wire layout: `sender` · `x` · `y` · `z` · `varint(len)` · `data` · `sequence`.
/// The location comes before the data block, unlike the other sound packets.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSoundPacket {
    pub sound: SoundPacket,
    pub location: Location,
}

impl Packet for LocationSoundPacket {
    const ID: PacketId = PacketId::LocationSound;
}

impl Decodable for LocationSoundPacket {
    fn decode(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let sender = Uuid::decode_wire(src)?;
        let location = Location::decode_wire(src)?;
        let data = Bytes::decode_wire(src)?;
        let sequence = i32::decode_wire(src)?;

        Ok(Self {
            sound: SoundPacket {
                sender,
                data,
                sequence,
            },
            location,
        })
    }
}
