/// Maximum number of bytes a length prefix may occupy on the wire.
pub const MAX_VARINT_LEN: usize = 5;

/// Largest `data` block a length prefix can describe.
pub const MAX_DATA_LEN: usize = i32::MAX as usize;

/// Size of an encoded UUID.
pub const UUID_SIZE: usize = 16;

/// Size of an encoded [Location](crate::protocol::types::Location), three `f64`s.
pub const LOCATION_SIZE: usize = 3 * 8;

/// Size of a sequence number.
pub const SEQUENCE_SIZE: usize = 4;

// Packet IDs. The framing layer writes these ahead of the body.

pub const MIC_PACKET_ID: u8 = 0x01;
pub const PLAYER_SOUND_PACKET_ID: u8 = 0x02;
pub const GROUP_SOUND_PACKET_ID: u8 = 0x03;
pub const LOCATION_SOUND_PACKET_ID: u8 = 0x04;
pub const AUTHENTICATE_PACKET_ID: u8 = 0x05;
pub const AUTHENTICATE_ACK_PACKET_ID: u8 = 0x06;
pub const PING_PACKET_ID: u8 = 0x07;
pub const KEEP_ALIVE_PACKET_ID: u8 = 0x08;
