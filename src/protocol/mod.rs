//! Voice protocol constants, packet definitions and field encoding helpers.
//!
//! Packet bodies live in `packet`; the field-level building blocks they
//! are made of (length prefixes, UUIDs, positions) live in `types`.

pub mod constants;
pub mod packet;
pub mod types;
