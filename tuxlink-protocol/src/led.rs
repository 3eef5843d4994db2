//! Seven-segment LED display encoding
//!
//! The host describes the display as a single 32-bit value:
//!
//! ```text
//! bits 24..27  decimal point for digit 0..3
//! bits 16..19  enable mask for digit 0..3
//! bits  0..15  four hex digits, digit 0 in the low nibble (rightmost)
//! ```
//!
//! On the wire each enabled digit becomes one segment byte.

use crate::messages::MTCP_LED_SET;

/// Segment patterns for hex digits 0-F
pub const SEGMENTS: [u8; 16] = [
    0xE7, 0x06, 0xCB, 0x8F, 0x2E, 0xAD, 0xED, 0x86, 0xEF, 0xAF, 0xEE, 0x6D, 0xE1, 0x4F, 0xE9, 0xE8,
];

/// Segment bit lighting a digit's decimal point
pub const SEGMENT_DECIMAL_POINT: u8 = 0x10;

/// Number of digits on the display
pub const DIGIT_COUNT: usize = 4;

/// Size of an LED_SET command (opcode + mask + one byte per digit)
pub const LED_PACKET_LEN: usize = 2 + DIGIT_COUNT;

const DIGIT_MASK: u32 = 0x0F;
const ENABLE_SHIFT: u32 = 16;
const DECIMAL_POINT_SHIFT: u32 = 24;

// Digit indices are taken modulo DIGIT_COUNT
const fn position(index: usize) -> u32 {
    (index & (DIGIT_COUNT - 1)) as u32
}

/// Segment pattern for the low nibble of `digit`
pub const fn segment_pattern(digit: u8) -> u8 {
    SEGMENTS[(digit & 0x0F) as usize]
}

/// Packed display value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedValue(u32);

impl LedValue {
    /// All digits off
    pub const BLANK: Self = Self(0);

    /// Wrap a raw display value
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw display value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Set the hex value of digit `index` (0 = rightmost)
    ///
    /// Like every per-digit accessor, `index` is taken modulo
    /// [`DIGIT_COUNT`].
    pub const fn with_digit(self, index: usize, value: u8) -> Self {
        let shift = 4 * position(index);
        let cleared = self.0 & !(DIGIT_MASK << shift);
        Self(cleared | (((value as u32) & DIGIT_MASK) << shift))
    }

    /// Turn digit `index` on or off
    pub const fn with_enabled(self, index: usize, enabled: bool) -> Self {
        let bit = 1 << (ENABLE_SHIFT + position(index));
        if enabled {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }

    /// Light or clear the decimal point of digit `index`
    pub const fn with_decimal_point(self, index: usize, lit: bool) -> Self {
        let bit = 1 << (DECIMAL_POINT_SHIFT + position(index));
        if lit {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }

    /// Hex value of digit `index`
    pub const fn digit(self, index: usize) -> u8 {
        ((self.0 >> (4 * position(index))) & DIGIT_MASK) as u8
    }

    /// Per-digit enable mask (bit `i` enables digit `i`)
    pub const fn enable_mask(self) -> u8 {
        ((self.0 >> ENABLE_SHIFT) & DIGIT_MASK) as u8
    }

    /// Returns true if digit `index` is shown
    pub const fn is_enabled(self, index: usize) -> bool {
        self.enable_mask() & (1 << position(index)) != 0
    }

    /// Returns true if the decimal point of digit `index` is lit
    pub const fn has_decimal_point(self, index: usize) -> bool {
        (self.0 >> (DECIMAL_POINT_SHIFT + position(index))) & 1 != 0
    }

    /// Segment byte sent for digit `index`, 0 when the digit is disabled
    pub const fn segment_byte(self, index: usize) -> u8 {
        if !self.is_enabled(index) {
            return 0;
        }
        let dp = if self.has_decimal_point(index) {
            SEGMENT_DECIMAL_POINT
        } else {
            0
        };
        segment_pattern(self.digit(index)) | dp
    }

    /// Encode the complete LED_SET command
    pub const fn to_packet(self) -> [u8; LED_PACKET_LEN] {
        [
            MTCP_LED_SET,
            self.enable_mask(),
            self.segment_byte(0),
            self.segment_byte(1),
            self.segment_byte(2),
            self.segment_byte(3),
        ]
    }
}
