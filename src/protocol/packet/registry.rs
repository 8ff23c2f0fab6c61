use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::protocol::packet::{
    utils::{define_clientbound_packets, define_serverbound_packets},
    *,
};

define_clientbound_packets! {
    PlayerSoundPacket,
    GroupSoundPacket,
    LocationSoundPacket,
    AuthenticateAckPacket,
    PingPacket,
}

define_serverbound_packets! {
    MicPacket,
    AuthenticatePacket,
    PingPacket,
    KeepAlivePacket,
}
