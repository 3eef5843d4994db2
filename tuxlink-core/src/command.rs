//! Commands produced by the input layer

/// Abstract game input
///
/// Both the keyboard decoder and the pad poller reduce their input to this
/// vocabulary; what a command does is up to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Nothing happened
    #[default]
    None,
    Right,
    Left,
    Up,
    Down,
    MoveLeft,
    Enter,
    MoveRight,
    /// A line of typed text was submitted
    Typed,
    Quit,
}

impl Command {
    /// Every command, in display order
    pub const ALL: [Command; 10] = [
        Command::None,
        Command::Right,
        Command::Left,
        Command::Up,
        Command::Down,
        Command::MoveLeft,
        Command::Enter,
        Command::MoveRight,
        Command::Typed,
        Command::Quit,
    ];

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Command::None => "none",
            Command::Right => "right",
            Command::Left => "left",
            Command::Up => "up",
            Command::Down => "down",
            Command::MoveLeft => "move left",
            Command::Enter => "enter",
            Command::MoveRight => "move right",
            Command::Typed => "typed command",
            Command::Quit => "quit",
        }
    }

    /// Returns true for [`Command::None`]
    pub const fn is_none(self) -> bool {
        matches!(self, Command::None)
    }

    /// Returns true for the four cursor directions
    pub const fn is_direction(self) -> bool {
        matches!(
            self,
            Command::Up | Command::Down | Command::Left | Command::Right
        )
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
