use std::fmt;

use crate::protocol::{constants::*, packet::DecodeError};

/// Numeric identifier of every packet in the voice protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PacketId {
    Mic = MIC_PACKET_ID,
    PlayerSound = PLAYER_SOUND_PACKET_ID,
    GroupSound = GROUP_SOUND_PACKET_ID,
    LocationSound = LOCATION_SOUND_PACKET_ID,
    Authenticate = AUTHENTICATE_PACKET_ID,
    AuthenticateAck = AUTHENTICATE_ACK_PACKET_ID,
    Ping = PING_PACKET_ID,
    KeepAlive = KEEP_ALIVE_PACKET_ID,
}

impl PacketId {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PacketId {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            MIC_PACKET_ID => PacketId::Mic,
            PLAYER_SOUND_PACKET_ID => PacketId::PlayerSound,
            GROUP_SOUND_PACKET_ID => PacketId::GroupSound,
            LOCATION_SOUND_PACKET_ID => PacketId::LocationSound,
            AUTHENTICATE_PACKET_ID => PacketId::Authenticate,
            AUTHENTICATE_ACK_PACKET_ID => PacketId::AuthenticateAck,
            PING_PACKET_ID => PacketId::Ping,
            KEEP_ALIVE_PACKET_ID => PacketId::KeepAlive,
            other => return Err(DecodeError::UnknownPacketId(other)),
        })
    }
}

impl From<PacketId> for u8 {
    fn from(id: PacketId) -> Self {
        id.as_u8()
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.as_u8())
    }
}
