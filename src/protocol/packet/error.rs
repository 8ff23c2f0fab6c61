use thiserror::Error;

use crate::protocol::packet::PacketId;

/// Errors that may occur while decoding voice packets or their fields.
///
/// This type is shared by every `WireValue` implementation and packet
/// body, so a failure anywhere in a body aborts the whole packet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ran out before the field being read was complete.
    #[error("Truncated input, needed {needed} more byte(s) but only {remaining} remain.")]
    TruncatedInput { needed: usize, remaining: usize },

    /// A length prefix was longer than five bytes or described a value
    /// that does not fit in a positive `i32`.
    #[error("Invalid VarInt length prefix.")]
    InvalidVarint,

    /// The leading ID byte does not name any known packet.
    #[error("Unknown Packet, ID: 0x{0:02x}")]
    UnknownPacketId(u8),

    /// The ID is known but that packet is never sent in this direction.
    #[error("Packet {0} cannot be decoded, it is only ever sent by the client.")]
    UnsupportedDirection(PacketId),
}

impl DecodeError {
    pub(crate) fn truncated(needed: usize, remaining: usize) -> Self {
        DecodeError::TruncatedInput { needed, remaining }
    }
}
