//! Message types for the MTCP protocol
//!
//! Message types are divided into two categories:
//! - Pad → Host: 3-byte responses (acks, button events, reset notices)
//! - Host → Pad: commands (reporting/LED mode selection, LED updates)

use heapless::Vec;

use crate::buttons::ButtonStatus;
use crate::led::{LedValue, LED_PACKET_LEN};
use crate::packet::Packet;

// Opcodes: Host → Pad
pub const MTCP_BIOC_ON: u8 = 0xC3;
pub const MTCP_LED_SET: u8 = 0xC6;
pub const MTCP_LED_USR: u8 = 0xC8;

// Opcodes: Pad → Host
pub const MTCP_ACK: u8 = 0x40;
pub const MTCP_BIOC_EVENT: u8 = 0x41;
pub const MTCP_CLK_EVENT: u8 = 0x42;
pub const MTCP_POLL_OK: u8 = 0x43;
pub const MTCP_RESET: u8 = 0x46;
pub const MTCP_ERROR: u8 = 0x47;

/// Turn on button-event reporting, then hand the LEDs to the host
pub const ENABLE_SEQUENCE: [u8; 2] = [MTCP_BIOC_ON, MTCP_LED_USR];

/// Longest host command
pub const MAX_COMMAND_LEN: usize = LED_PACKET_LEN;

/// Responses received from the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadMessage {
    /// The pad powered up or was reset; host state must be re-sent
    Reset,
    /// The previous command was processed
    Ack,
    /// Button state changed
    ButtonEvent(ButtonStatus),
    /// Any response this layer does not act on
    Other(u8),
}

impl PadMessage {
    /// Classify a response from its three fields
    pub const fn decode(opcode: u8, b: u8, c: u8) -> Self {
        match opcode {
            MTCP_RESET => PadMessage::Reset,
            MTCP_ACK => PadMessage::Ack,
            MTCP_BIOC_EVENT => PadMessage::ButtonEvent(ButtonStatus::from_event(b, c)),
            other => PadMessage::Other(other),
        }
    }

    /// Classify an assembled packet
    pub const fn from_packet(packet: &Packet) -> Self {
        Self::decode(packet.opcode, packet.b, packet.c)
    }
}

/// Commands sent to the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand {
    /// Enable button events and user-controlled LEDs
    Enable,
    /// Update the LED display
    SetLed(LedValue),
}

impl HostCommand {
    /// Encode this command into its wire bytes
    pub fn encode(&self) -> Vec<u8, MAX_COMMAND_LEN> {
        let mut out = Vec::new();
        // Every command fits in MAX_COMMAND_LEN
        match self {
            HostCommand::Enable => {
                let _ = out.extend_from_slice(&ENABLE_SEQUENCE);
            }
            HostCommand::SetLed(value) => {
                let _ = out.extend_from_slice(&value.to_packet());
            }
        }
        out
    }
}
