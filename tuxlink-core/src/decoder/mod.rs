//! Keyboard escape-sequence decoder
//!
//! Turns the raw byte stream of a terminal in character mode into
//! commands. Cursor keys arrive as `ESC [ A..D`; insert, home and page up
//! arrive as `ESC [ 2 ~`, `ESC [ 1 ~` and `ESC [ 5 ~`. Everything else that
//! looks like text goes to a [`TypedBuffer`].
//!
//! State transitions:
//!
//! ```text
//! Idle ──ESC──▶ SawEscape ──'['──▶ SawBracket ──'A'..'D'──▶ Idle
//!                                      │
//!                                      └──'1' '2' '5'──▶ AwaitingTilde ──'~'──▶ Idle
//! ```
//!
//! Any unexpected byte drops back to `Idle` and is then handled as if it
//! had arrived there; the partial sequence is discarded. A backtick quits
//! from every state.

mod typed;

pub use typed::{is_typable, TypedBuffer, BACKSPACE, DELETE, MAX_TYPED_LEN};

use crate::command::Command;

/// Escape byte
pub const ESC: u8 = 0x1B;

/// Key that quits from any state
pub const QUIT_KEY: u8 = b'`';

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    /// Not inside an escape sequence
    #[default]
    Idle,
    /// Got ESC
    SawEscape,
    /// Got ESC [
    SawBracket,
    /// Got ESC [ digit, a trailing '~' is swallowed
    AwaitingTilde,
}

/// Escape-sequence decoder with its typed-text buffer
#[derive(Debug, Clone, Default)]
pub struct EscapeDecoder {
    state: DecoderState,
    typed: TypedBuffer,
}

impl EscapeDecoder {
    /// Create a decoder in the idle state with no typed text
    pub const fn new() -> Self {
        Self {
            state: DecoderState::Idle,
            typed: TypedBuffer::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Text typed so far
    pub fn typed_text(&self) -> &str {
        self.typed.as_str()
    }

    /// Clear the typed text
    pub fn reset_typed_text(&mut self) {
        self.typed.clear();
    }

    /// Feed a single byte
    ///
    /// Returns the command completed by this byte, if any.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        if byte == QUIT_KEY {
            self.state = DecoderState::Idle;
            return Some(Command::Quit);
        }

        match self.state {
            DecoderState::Idle => self.idle(byte),
            DecoderState::SawEscape => {
                if byte == b'[' {
                    self.state = DecoderState::SawBracket;
                    None
                } else {
                    self.state = DecoderState::Idle;
                    self.idle(byte)
                }
            }
            DecoderState::SawBracket => match byte {
                b'A' => self.complete(Command::Up),
                b'B' => self.complete(Command::Down),
                b'C' => self.complete(Command::Right),
                b'D' => self.complete(Command::Left),
                b'1' => self.await_tilde(Command::Enter),
                b'2' => self.await_tilde(Command::MoveLeft),
                b'5' => self.await_tilde(Command::MoveRight),
                _ => {
                    self.state = DecoderState::Idle;
                    self.idle(byte)
                }
            },
            DecoderState::AwaitingTilde => {
                self.state = DecoderState::Idle;
                if byte == b'~' {
                    None
                } else {
                    self.idle(byte)
                }
            }
        }
    }

    /// Feed a single byte without escape decoding
    ///
    /// Only the quit key, typed text and line endings are recognized; used
    /// when movement comes from the pad rather than the keyboard.
    pub fn feed_text(&mut self, byte: u8) -> Option<Command> {
        self.state = DecoderState::Idle;
        match byte {
            QUIT_KEY => Some(Command::Quit),
            b'\n' | b'\r' => Some(Command::Typed),
            _ => {
                self.typed.edit(byte);
                None
            }
        }
    }

    fn idle(&mut self, byte: u8) -> Option<Command> {
        match byte {
            ESC => {
                self.state = DecoderState::SawEscape;
                None
            }
            b'\n' | b'\r' => Some(Command::Typed),
            _ => {
                // Ignores anything that is not typable
                self.typed.edit(byte);
                None
            }
        }
    }

    fn complete(&mut self, command: Command) -> Option<Command> {
        self.state = DecoderState::Idle;
        Some(command)
    }

    fn await_tilde(&mut self, command: Command) -> Option<Command> {
        self.state = DecoderState::AwaitingTilde;
        Some(command)
    }
}
