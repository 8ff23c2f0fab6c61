use bytes::{Buf, BufMut};

use crate::protocol::{
    constants::LOCATION_SIZE,
    packet::{DecodeError, WireValue},
    types::ensure_remaining,
};

/// World position a positional sound originates from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Location {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Location { x, y, z }
    }
}

impl From<Location> for (f64, f64, f64) {
    fn from(loc: Location) -> Self {
        (loc.x, loc.y, loc.z)
    }
}

impl WireValue for Location {
    fn encode_wire(&self, dst: &mut impl BufMut) {
        dst.put_f64(self.x);
        dst.put_f64(self.y);
        dst.put_f64(self.z);
    }

    fn decode_wire(src: &mut impl Buf) -> Result<Self, DecodeError> {
        // Check all three up front so a short buffer never yields half a position.
        ensure_remaining(src, LOCATION_SIZE)?;
        Ok(Location {
            x: src.get_f64(),
            y: src.get_f64(),
            z: src.get_f64(),
        })
    }
}
