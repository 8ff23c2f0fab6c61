//! Handshake and liveness packets.

use bytes::{Buf, BufMut};
use uuid::Uuid;

use crate::protocol::{
    constants::UUID_SIZE,
    packet::{Decodable, DecodeError, Encodable, Packet, PacketId, WireValue},
};

/// Sent by the client to bind its UDP endpoint to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatePacket {
    pub player_uuid: Uuid,
    pub secret: Uuid,
}

impl AuthenticatePacket {
    pub fn new(player_uuid: Uuid, secret: Uuid) -> Self {
        Self {
            player_uuid,
            secret,
        }
    }
}

impl Packet for AuthenticatePacket {
    const ID: PacketId = PacketId::Authenticate;
}

impl Encodable for AuthenticatePacket {
    fn encode(&self, dst: &mut impl BufMut) {
        self.player_uuid.encode_wire(dst);
        self.secret.encode_wire(dst);
    }

    fn encoded_len(&self) -> usize {
        2 * UUID_SIZE
    }
}

/// Server confirmation that authentication succeeded. Has no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthenticateAckPacket;

impl Packet for AuthenticateAckPacket {
    const ID: PacketId = PacketId::AuthenticateAck;
}

impl Decodable for AuthenticateAckPacket {
    fn decode(_src: &mut impl Buf) -> Result<Self, DecodeError> {
        Ok(AuthenticateAckPacket)
    }
}

/// Round-trip probe. The server echoes it back unchanged.
///
/// `timestamp` is only 32 bits wide on the wire. Callers holding a
/// millisecond clock must truncate it before building the packet, and
/// compare echoed values with wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingPacket {
    pub id: Uuid,
    pub timestamp: i32,
}

impl PingPacket {
    pub fn new(id: Uuid, timestamp: i32) -> Self {
        Self { id, timestamp }
    }
}

impl Packet for PingPacket {
    const ID: PacketId = PacketId::Ping;
}

impl Encodable for PingPacket {
    fn encode(&self, dst: &mut impl BufMut) {
        self.id.encode_wire(dst);
        self.timestamp.encode_wire(dst);
    }

    fn encoded_len(&self) -> usize {
        UUID_SIZE + 4
    }
}

impl Decodable for PingPacket {
    fn decode(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let id = Uuid::decode_wire(src)?;
        let timestamp = i32::decode_wire(src)?;
        Ok(Self { id, timestamp })
    }
}

/// Sent periodically so the server does not drop an idle client. Has no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeepAlivePacket;

impl Packet for KeepAlivePacket {
    const ID: PacketId = PacketId::KeepAlive;
}

impl Encodable for KeepAlivePacket {
    fn encode(&self, _dst: &mut impl BufMut) {}

    fn encoded_len(&self) -> usize {
        0
    }
}
