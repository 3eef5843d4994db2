//! Free-text buffer filled by typing at the keyboard

use heapless::String;

/// Maximum number of typed characters kept
pub const MAX_TYPED_LEN: usize = 20;

/// Backspace key
pub const BACKSPACE: u8 = 0x08;

/// Delete key (sent by most terminals for the backspace key)
pub const DELETE: u8 = 0x7F;

/// Returns true if `byte` edits the typed text
///
/// Letters, digits and space are appended; backspace and delete erase.
pub const fn is_typable(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
        || byte.is_ascii_digit()
        || byte == b' '
        || byte == BACKSPACE
        || byte == DELETE
}

/// Bounded line of typed text
///
/// Content is only ever ASCII letters, digits and spaces. Characters typed
/// once the buffer is full are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedBuffer {
    text: String<MAX_TYPED_LEN>,
}

impl TypedBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Current text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Number of characters typed
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if nothing is typed
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if further characters would be dropped
    pub fn is_full(&self) -> bool {
        self.text.len() == MAX_TYPED_LEN
    }

    /// Apply one typable byte
    ///
    /// Backspace and delete remove the last character if any; other
    /// typable bytes are appended while there is room. Non-typable bytes
    /// are ignored.
    pub fn edit(&mut self, byte: u8) {
        match byte {
            BACKSPACE | DELETE => {
                self.text.pop();
            }
            _ if is_typable(byte) => {
                // Full buffer drops the character
                let _ = self.text.push(char::from(byte));
            }
            _ => {}
        }
    }

    /// Forget everything typed so far
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
