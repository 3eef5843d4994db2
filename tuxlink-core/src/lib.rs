//! Board-agnostic input logic for the Tux pad and keyboard
//!
//! This crate contains everything above the wire that does not depend on a
//! particular serial transport:
//!
//! - The command vocabulary shared by keyboard and pad
//! - The keyboard escape-sequence decoder and typed-text buffer
//! - The command façade polled by the game loop
//! - The pad driver trait
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Must come first so the logging macros are visible in every module
mod fmt;

pub mod command;
pub mod config;
pub mod decoder;
pub mod input;
pub mod traits;

pub use command::Command;
pub use config::{ConfigError, InputConfig, InputMode};
pub use decoder::{EscapeDecoder, TypedBuffer};
pub use input::{elapsed_display_value, InputController};
pub use traits::ButtonPort;
