//! Command façade
//!
//! Merges the keyboard and the pad into the single [`Command`] stream the
//! game loop consumes, and formats the elapsed-time display.
//!
//! Pad directions are level-triggered: they repeat on every poll while
//! held. Action buttons are edge-triggered: a press reports once, and the
//! trigger re-arms when the status moves to anything else.

use tuxlink_hal::ByteSource;
use tuxlink_protocol::{Buttons, LedValue};

use crate::command::Command;
use crate::config::{InputConfig, InputMode};
use crate::decoder::EscapeDecoder;
use crate::traits::ButtonPort;

const SECONDS_PER_MINUTE: u32 = 60;

/// Minutes digit plus two seconds digits, point after the minutes
pub const THREE_DIGIT_LAYOUT: LedValue = LedValue::from_raw(0x0407_0000);

/// Two minutes digits plus two seconds digits, point after the minutes
pub const FOUR_DIGIT_LAYOUT: LedValue = LedValue::from_raw(0x040F_0000);

/// Pad buttons that map to a command when held alone
const BUTTON_COMMANDS: [(Buttons, Command); 8] = [
    (Buttons::UP, Command::Up),
    (Buttons::DOWN, Command::Down),
    (Buttons::LEFT, Command::Left),
    (Buttons::RIGHT, Command::Right),
    (Buttons::A, Command::MoveLeft),
    (Buttons::B, Command::Enter),
    (Buttons::C, Command::MoveRight),
    (Buttons::START, Command::Quit),
];

/// Command for exactly this set of held buttons
///
/// Chords and an idle pad both map to [`Command::None`].
pub fn button_command(pressed: Buttons) -> Command {
    BUTTON_COMMANDS
        .iter()
        .find(|(buttons, _)| *buttons == pressed)
        .map_or(Command::None, |&(_, command)| command)
}

/// Display value showing `seconds` as minutes and seconds
///
/// Under ten minutes the leading minutes digit is blanked.
pub fn elapsed_display_value(seconds: u32) -> LedValue {
    let minutes = seconds / SECONDS_PER_MINUTE;
    let seconds = seconds % SECONDS_PER_MINUTE;

    let layout = if minutes > 9 {
        FOUR_DIGIT_LAYOUT
    } else {
        THREE_DIGIT_LAYOUT
    };

    // with_digit keeps only the low nibble
    layout
        .with_digit(3, (minutes / 10) as u8)
        .with_digit(2, (minutes % 10) as u8)
        .with_digit(1, (seconds / 10) as u8)
        .with_digit(0, (seconds % 10) as u8)
}

/// Input controller combining keyboard and pad
pub struct InputController<K, P> {
    keyboard: K,
    pad: P,
    decoder: EscapeDecoder,
    mode: InputMode,
    /// Last command reported from the pad
    last_action: Command,
}

impl<K: ByteSource, P: ButtonPort> InputController<K, P> {
    /// Create a new controller
    pub fn new(keyboard: K, pad: P, mode: InputMode) -> Self {
        Self {
            keyboard,
            pad,
            decoder: EscapeDecoder::new(),
            mode,
            last_action: Command::None,
        }
    }

    /// Create a controller using the configured input mode
    pub fn from_config(keyboard: K, pad: P, config: &InputConfig) -> Self {
        Self::new(keyboard, pad, config.input.mode)
    }

    /// Configured input mode
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Access the pad driver
    pub fn pad(&self) -> &P {
        &self.pad
    }

    /// Drain the keyboard
    ///
    /// Returns the last command completed by the pending bytes. Quit is
    /// returned as soon as it is seen and leaves any later bytes unread.
    pub fn poll_keyboard(&mut self) -> Command {
        let mut pushed = Command::None;

        loop {
            let byte = match self.keyboard.try_read_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => break,
                Err(_) => {
                    warn!("keyboard read failed, ending drain");
                    break;
                }
            };

            let command = match self.mode {
                InputMode::Keyboard => self.decoder.feed(byte),
                InputMode::Controller => self.decoder.feed_text(byte),
            };

            match command {
                Some(Command::Quit) => return Command::Quit,
                Some(command) => pushed = command,
                None => {}
            }
        }

        pushed
    }

    /// Read the pad
    ///
    /// Directions repeat while held. Action buttons report once per press.
    pub fn poll_controller(&mut self) -> Command {
        let status = self.pad.query_buttons();
        let command = button_command(status.pressed());

        if command.is_none() {
            self.last_action = Command::None;
            return Command::None;
        }

        if command.is_direction() || command != self.last_action {
            trace!("pad command {:?}", command);
            self.last_action = command;
            return command;
        }

        Command::None
    }

    /// Show elapsed play time on the pad's LEDs
    ///
    /// Dropped silently while the previous update is unacknowledged.
    pub fn display_elapsed(&self, seconds: u32) -> Result<(), P::Error> {
        self.pad.set_display(elapsed_display_value(seconds).raw())
    }

    /// Text typed so far
    pub fn typed_text(&self) -> &str {
        self.decoder.typed_text()
    }

    /// Clear the typed text
    pub fn reset_typed_text(&mut self) {
        self.decoder.reset_typed_text();
    }
}
