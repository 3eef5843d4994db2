//! Tux Pad Serial Protocol (MTCP)
//!
//! This crate defines the wire format spoken between the host and the Tux
//! game pad over its 9600 baud serial line.
//!
//! # Protocol Overview
//!
//! The pad answers with fixed 3-byte response packets:
//! ```text
//! ┌────────┬───────────┬───────────┐
//! │ OPCODE │ B         │ C         │
//! │ 0xxxxx │ 1xxx xxxx │ 1xxx xxxx │
//! └────────┴───────────┴───────────┘
//! ```
//!
//! The host sends variable-length commands: a 2-byte enable sequence at
//! start-up and 6-byte LED updates:
//! ```text
//! ┌─────────┬─────────────┬────┬────┬────┬────┐
//! │ LED_SET │ DIGIT MASK  │ D0 │ D1 │ D2 │ D3 │
//! └─────────┴─────────────┴────┴────┴────┴────┘
//! ```
//!
//! The pad never blocks the host: every command is acknowledged with an
//! `ACK` response, and the host sends the next LED update only after that.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buttons;
pub mod led;
pub mod messages;
pub mod packet;

pub use buttons::{ButtonStatus, Buttons};
pub use led::{segment_pattern, LedValue, LED_PACKET_LEN, SEGMENTS, SEGMENT_DECIMAL_POINT};
pub use messages::{HostCommand, PadMessage, ENABLE_SEQUENCE, MAX_COMMAND_LEN};
pub use packet::{Packet, PacketAssembler, PacketError};
