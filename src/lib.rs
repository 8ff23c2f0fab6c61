//! Wire format for the packets exchanged between a voice chat client and
//! its voice server.
//!
//! Each packet body implements [`Encodable`], [`Decodable`], or both, and
//! carries a fixed [`PacketId`]. The body codecs never read or write the
//! ID byte; [`ServerboundPacket`] and [`ClientboundPacket`] add it for
//! callers that do their own framing over UDP.
//!
//! ```
//! use voicechat_protocol::{ClientboundPacket, PingPacket, ServerboundPacket};
//! use uuid::Uuid;
//!
//! let ping = PingPacket::new(Uuid::nil(), 1_000);
//! let mut frame = ServerboundPacket::from(ping).to_bytes();
//! let echoed = ClientboundPacket::decode(&mut frame)?;
//! assert_eq!(echoed, ClientboundPacket::PingPacket(ping));
//! # Ok::<(), voicechat_protocol::DecodeError>(())
//! ```

pub mod protocol;

pub use protocol::packet::{
    AuthenticateAckPacket, AuthenticatePacket, ClientboundPacket, Decodable, DecodeError,
    Encodable, GroupSoundPacket, KeepAlivePacket, LocationSoundPacket, MicPacket, Packet,
    PacketId, PingPacket, PlayerSoundPacket, ServerboundPacket, SoundPacket,
};
pub use protocol::types::Location;
