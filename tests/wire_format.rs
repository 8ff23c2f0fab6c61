use bytes::{Buf, BufMut, Bytes, BytesMut};
use uuid::Uuid;
use voicechat_protocol::{
    AuthenticateAckPacket, AuthenticatePacket, ClientboundPacket, Decodable, DecodeError,
    Encodable, GroupSoundPacket, KeepAlivePacket, Location, LocationSoundPacket, MicPacket,
    Packet, PacketId, PingPacket, PlayerSoundPacket, ServerboundPacket,
};

fn player_sound_frame(sender: Uuid, data: &[u8], sequence: i32, whispering: bool) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u8(PlayerSoundPacket::ID.as_u8());
    buf.put_slice(sender.as_bytes());
    buf.put_u8(data.len() as u8);
    buf.put_slice(data);
    buf.put_i32(sequence);
    buf.put_u8(whispering as u8);
    buf.freeze()
}

#[test]
fn ids_match_protocol_table() {
    assert_eq!(MicPacket::ID.as_u8(), 0x01);
    assert_eq!(PlayerSoundPacket::ID.as_u8(), 0x02);
    assert_eq!(GroupSoundPacket::ID.as_u8(), 0x03);
    assert_eq!(LocationSoundPacket::ID.as_u8(), 0x04);
    assert_eq!(AuthenticatePacket::ID.as_u8(), 0x05);
    assert_eq!(AuthenticateAckPacket::ID.as_u8(), 0x06);
    assert_eq!(PingPacket::ID.as_u8(), 0x07);
    assert_eq!(KeepAlivePacket::ID.as_u8(), 0x08);
}

#[test]
fn random_pings_survive_roundtrip() {
    for timestamp in [0, 17, -17, i32::MAX, i32::MIN] {
        let ping = PingPacket::new(Uuid::new_v4(), timestamp);
        let mut body = ping.to_bytes();
        assert_eq!(PingPacket::decode(&mut body), Ok(ping));
        assert!(!body.has_remaining());
    }
}

#[test]
fn authenticate_uuids_are_bit_exact() {
    let player = Uuid::new_v4();
    let secret = Uuid::new_v4();
    let body = AuthenticatePacket::new(player, secret).to_bytes();

    // Reuse the ping decoder to read the first UUID back out.
    let mut first = body.slice(..20);
    assert_eq!(PingPacket::decode(&mut first).unwrap().id, player);
    assert_eq!(Uuid::from_slice(&body[16..]).unwrap(), secret);
}

#[test]
fn back_to_back_frames_decode_independently() {
    let sender = Uuid::new_v4();
    let mut stream = BytesMut::new();
    stream.put(player_sound_frame(sender, &[1, 2], 10, false));
    stream.put(player_sound_frame(sender, &[3], 11, true));
    let mut src = stream.freeze();

    let first = ClientboundPacket::decode(&mut src).unwrap();
    let second = ClientboundPacket::decode(&mut src).unwrap();
    assert!(!src.has_remaining());

    let (first, second) = match (first, second) {
        (ClientboundPacket::PlayerSoundPacket(a), ClientboundPacket::PlayerSoundPacket(b)) => {
            (a, b)
        }
        other => panic!("expected two player sounds, got {other:?}"),
    };
    assert_eq!((first.sound.sequence, first.whispering), (10, false));
    assert_eq!((second.sound.sequence, second.whispering), (11, true));
    assert_eq!(&second.sound.data[..], &[3]);
}

#[test]
fn failed_frame_does_not_affect_next() {
    let good = player_sound_frame(Uuid::nil(), &[7, 7], 1, false);
    let bad = good.slice(..good.len() - 1);

    let mut src = bad;
    assert!(matches!(
        ClientboundPacket::decode(&mut src),
        Err(DecodeError::TruncatedInput { .. })
    ));

    let mut src = good;
    assert_eq!(ClientboundPacket::decode(&mut src).unwrap().id(), PacketId::PlayerSound);
}

#[test]
fn every_truncation_of_location_sound_fails() {
    let mut buf = BytesMut::new();
    buf.put_slice(Uuid::new_v4().as_bytes());
    buf.put_f64(1.5);
    buf.put_f64(2.5);
    buf.put_f64(3.5);
    buf.put_u8(4);
    buf.put_slice(&[9, 8, 7, 6]);
    buf.put_i32(100);
    let body = buf.freeze();

    let mut full = body.clone();
    let pkt = LocationSoundPacket::decode(&mut full).unwrap();
    assert_eq!(pkt.location, Location::new(1.5, 2.5, 3.5));

    for cut in 0..body.len() {
        let mut src = body.slice(..cut);
        assert!(
            matches!(
                LocationSoundPacket::decode(&mut src),
                Err(DecodeError::TruncatedInput { .. })
            ),
            "cut at {cut}"
        );
    }
}

#[test]
fn serverbound_frames() {
    let frames: Vec<ServerboundPacket> = vec![
        MicPacket::new(vec![1u8, 2, 3], true, 5).into(),
        AuthenticatePacket::new(Uuid::nil(), Uuid::from_u128(u128::MAX)).into(),
        PingPacket::new(Uuid::nil(), 0).into(),
        KeepAlivePacket.into(),
    ];
    let lengths: Vec<usize> = frames.iter().map(|f| f.to_bytes().len()).collect();
    assert_eq!(lengths, vec![1 + 1 + 3 + 4 + 1, 1 + 32, 1 + 16 + 4, 1]);
    for frame in &frames {
        assert_eq!(frame.to_bytes()[0], frame.id().as_u8());
    }
}
