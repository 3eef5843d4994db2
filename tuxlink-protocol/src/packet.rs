//! Response packet framing.
//!
//! Packet format:
//! - OPCODE (1 byte): response type, bit 7 clear
//! - B (1 byte): first payload byte, bit 7 set
//! - C (1 byte): second payload byte, bit 7 set
//!
//! The framing bit makes the stream self-synchronizing: a byte with bit 7
//! clear always begins a packet.

/// Bit 7 marks payload bytes
const PAYLOAD_FLAG: u8 = 0x80;

/// Framing errors reported while assembling packets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Payload byte arrived with no packet in progress; it was dropped
    Unsynchronized,
    /// A new opcode arrived before the previous packet was complete
    ///
    /// The partial packet is discarded and the new opcode starts the next one.
    Truncated,
}

/// A complete 3-byte response packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Response type
    pub opcode: u8,
    /// First payload byte
    pub b: u8,
    /// Second payload byte
    pub c: u8,
}

impl Packet {
    /// Create a packet from its three fields
    pub const fn new(opcode: u8, b: u8, c: u8) -> Self {
        Self { opcode, b, c }
    }
}

/// State machine for assembling packets out of the raw serial stream
#[derive(Debug, Clone)]
pub struct PacketAssembler {
    state: AssembleState,
    opcode: u8,
    b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssembleState {
    /// Waiting for an opcode byte
    WaitingForOpcode,
    /// Got the opcode, waiting for B
    WaitingForB,
    /// Got B, waiting for C
    WaitingForC,
}

impl Default for PacketAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketAssembler {
    /// Create a new assembler
    pub const fn new() -> Self {
        Self {
            state: AssembleState::WaitingForOpcode,
            opcode: 0,
            b: 0,
        }
    }

    /// Drop any partial packet
    pub fn reset(&mut self) {
        self.state = AssembleState::WaitingForOpcode;
        self.opcode = 0;
        self.b = 0;
    }

    /// Feed a single byte to the assembler
    ///
    /// Returns `Ok(Some(packet))` when a packet completes, `Ok(None)` when
    /// more bytes are needed, or `Err` when the stream had to be
    /// resynchronized. Assembly continues normally after an error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Packet>, PacketError> {
        if byte & PAYLOAD_FLAG == 0 {
            let truncated = self.state != AssembleState::WaitingForOpcode;
            self.opcode = byte;
            self.state = AssembleState::WaitingForB;
            return if truncated {
                Err(PacketError::Truncated)
            } else {
                Ok(None)
            };
        }

        match self.state {
            AssembleState::WaitingForOpcode => Err(PacketError::Unsynchronized),
            AssembleState::WaitingForB => {
                self.b = byte;
                self.state = AssembleState::WaitingForC;
                Ok(None)
            }
            AssembleState::WaitingForC => {
                let packet = Packet::new(self.opcode, self.b, byte);
                self.reset();
                Ok(Some(packet))
            }
        }
    }

    /// Feed multiple bytes to the assembler
    ///
    /// Returns the first complete packet found, if any.
    /// Remaining bytes after a complete packet are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Packet>, PacketError> {
        for &byte in bytes {
            if let Some(packet) = self.feed(byte)? {
                return Ok(Some(packet));
            }
        }
        Ok(None)
    }
}
