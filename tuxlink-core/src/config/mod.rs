//! Configuration types
//!
//! Input configuration is read from a small TOML document:
//!
//! ```toml
//! [input]
//! mode = "controller"
//!
//! [link]
//! baudrate = 9600
//! ```
//!
//! Every key is optional; missing keys take the defaults (keyboard mode,
//! 9600 8N1).

mod types;

pub use types::{ConfigError, InputConfig, InputMode, InputSection};
