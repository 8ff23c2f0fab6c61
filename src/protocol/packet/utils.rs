/// INTERNAL
/// Generates the enum of packets the client receives, along with
/// `decode`, which reads the leading ID byte and dispatches to the
/// matching body decoder.
///
/// Every ID not listed but still known to `PacketId` is rejected with
/// `UnsupportedDirection`.
macro_rules! define_clientbound_packets {
    (
        $(
            $name:ident,
        )+
    ) => {
        /// Every packet the voice server can send to the client.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClientboundPacket {
            $(
                $name($name),
            )+
        }

        impl ClientboundPacket {
            /// Decode an ID-prefixed packet.
            pub fn decode(src: &mut impl Buf) -> Result<Self, DecodeError> {
                let raw = u8::decode_wire(src)?;
                let id = PacketId::try_from(raw).inspect_err(|_| {
                    tracing::debug!(id = format_args!("0x{:02x}", raw), "unknown packet id");
                })?;
                let body_len = src.remaining();
                let packet = match id {
                    $(
                        <$name as Packet>::ID => {
                            <$name as Decodable>::decode(src).map(ClientboundPacket::$name)
                        }
                    )+
                    other => Err(DecodeError::UnsupportedDirection(other)),
                };
                match &packet {
                    Ok(_) => tracing::trace!(
                        id = %id,
                        len = body_len - src.remaining(),
                        "decoded packet"
                    ),
                    Err(e) => tracing::debug!(id = %id, error = ?e, "failed to decode packet"),
                }
                packet
            }

            pub fn id(&self) -> PacketId {
                match self {
                    $(
                        ClientboundPacket::$name(_inner) => <$name as Packet>::ID,
                    )+
                }
            }
        }

        $(
            impl From<$name> for ClientboundPacket {
                fn from(inner: $name) -> Self {
                    ClientboundPacket::$name(inner)
                }
            }
        )+
    }
}

/// INTERNAL
/// Generates the enum of packets the client sends, along with `encode`,
/// which writes the ID byte ahead of the body.
macro_rules! define_serverbound_packets {
    (
        $(
            $name:ident,
        )+
    ) => {
        /// Every packet the client can send to the voice server.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ServerboundPacket {
            $(
                $name($name),
            )+
        }

        impl ServerboundPacket {
            pub fn id(&self) -> PacketId {
                match self {
                    $(
                        ServerboundPacket::$name(_inner) => <$name as Packet>::ID,
                    )+
                }
            }

            /// Number of bytes `encode` writes, ID byte included.
            pub fn encoded_len(&self) -> usize {
                1 + match self {
                    $(
                        ServerboundPacket::$name(inner) => inner.encoded_len(),
                    )+
                }
            }

            /// Encode the ID byte followed by the packet body.
            pub fn encode(&self, dst: &mut impl BufMut) {
                self.id().as_u8().encode_wire(dst);
                match self {
                    $(
                        ServerboundPacket::$name(inner) => inner.encode(dst),
                    )+
                }
                tracing::trace!(id = %self.id(), len = self.encoded_len(), "encoded packet");
            }

            pub fn to_bytes(&self) -> Bytes {
                let mut buf = BytesMut::with_capacity(self.encoded_len());
                self.encode(&mut buf);
                buf.freeze()
            }
        }

        $(
            impl From<$name> for ServerboundPacket {
                fn from(inner: $name) -> Self {
                    ServerboundPacket::$name(inner)
                }
            }
        )+
    }
}

pub(crate) use define_clientbound_packets;
pub(crate) use define_serverbound_packets;
