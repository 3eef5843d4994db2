//! Button state reported by the pad
//!
//! A `BIOC_EVENT` packet carries the eight buttons in two active-low
//! nibbles:
//!
//! ```text
//! B: | 1 X X X |   C   |   B  |   A  | START |
//! C: | 1 X X X | RIGHT | DOWN | LEFT |  UP   |
//! ```
//!
//! The host folds them into a single register byte. Left and down are
//! swapped on the way so that the register reads
//! `RIGHT LEFT DOWN UP C B A START` from bit 7 to bit 0.

use bitflags::bitflags;

bitflags! {
    /// Set of pressed buttons (active-high)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const START = 1 << 0;
        const A = 1 << 1;
        const B = 1 << 2;
        const C = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
        const LEFT = 1 << 6;
        const RIGHT = 1 << 7;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Buttons {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Buttons({=u8:#x})", self.bits());
    }
}

/// Button status register
///
/// Holds the byte exactly as the packet handler computes it: active-low,
/// so a pressed button reads as a cleared bit and `0xFF` means nothing is
/// held. Use [`ButtonStatus::pressed`] for the active-high view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStatus(u8);

impl Default for ButtonStatus {
    fn default() -> Self {
        Self::RELEASED
    }
}

impl ButtonStatus {
    /// Every button released
    pub const RELEASED: Self = Self(0xFF);

    /// Wrap a raw register byte
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Raw register byte
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Decode the payload of a `BIOC_EVENT` packet
    ///
    /// The bit shuffle must match the pad's wiring exactly.
    pub const fn from_event(b: u8, c: u8) -> Self {
        let b = !b;
        let c = !c;
        Self(!((b & 0x0F) | (((c & 0x0F) << 4) & 0x9F) | ((c & 0x02) << 5) | ((c & 0x04) << 3)))
    }

    /// Register value when exactly `buttons` are held
    pub const fn with_pressed(buttons: Buttons) -> Self {
        Self(!buttons.bits())
    }

    /// Buttons currently held
    pub const fn pressed(self) -> Buttons {
        Buttons::from_bits_retain(!self.0)
    }

    /// Returns true if nothing is held
    pub const fn is_released(self) -> bool {
        self.0 == Self::RELEASED.0
    }
}
