use alloc::string::{String, ToString};
use core::fmt;

use serde::{Deserialize, Serialize};
use tuxlink_hal::SerialConfig;

/// Where movement commands come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Cursor keys on the keyboard
    #[default]
    Keyboard,
    /// The pad; the keyboard only types text and quits
    Controller,
}

/// `[input]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct InputSection {
    pub mode: InputMode,
}

/// Complete input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct InputConfig {
    pub input: InputSection,
    /// Serial line to the pad
    pub link: SerialConfig,
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid TOML or has wrong value types
    Parse(String),
    /// A baud rate of zero was requested
    InvalidBaudrate(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid input configuration: {message}"),
            ConfigError::InvalidBaudrate(baudrate) => {
                write!(f, "invalid serial baud rate {baudrate}")
            }
        }
    }
}

impl InputConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.link.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate(self.link.baudrate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuxlink_hal::{Parity, StopBits, TUX_BAUDRATE};

    #[test]
    fn test_empty_document_is_default() {
        let config = InputConfig::from_toml("").unwrap();
        assert_eq!(config, InputConfig::default());
        assert_eq!(config.input.mode, InputMode::Keyboard);
        assert_eq!(config.link.baudrate, TUX_BAUDRATE);
    }

    #[test]
    fn test_controller_mode() {
        let config = InputConfig::from_toml(
            r#"
            # Play with the pad
            [input]
            mode = "controller"
            "#,
        )
        .unwrap();
        assert_eq!(config.input.mode, InputMode::Controller);
        assert_eq!(config.link, SerialConfig::default());
    }

    #[test]
    fn test_link_overrides() {
        let config = InputConfig::from_toml(
            r#"
            [link]
            baudrate = 19200
            parity = "even"
            stop_bits = "two"
            "#,
        )
        .unwrap();
        assert_eq!(config.link.baudrate, 19200);
        assert_eq!(config.link.parity, Parity::Even);
        assert_eq!(config.link.stop_bits, StopBits::Two);
    }

    #[test]
    fn test_zero_baudrate_rejected() {
        let result = InputConfig::from_toml("[link]\nbaudrate = 0\n");
        assert_eq!(result, Err(ConfigError::InvalidBaudrate(0)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = InputConfig::from_toml("[input]\nmode = \"joystick\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
