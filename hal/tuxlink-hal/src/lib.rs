//! Tuxlink Hardware Abstraction Layer
//!
//! This crate defines the byte-level seams between the protocol layer and
//! whatever actually moves bytes: a terminal in raw mode for the keyboard,
//! and a 9600 baud serial line for the Tux pad.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tuxlink-core / tuxlink-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tuxlink-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  raw-mode tty │       │  serial line  │
//! │   (keyboard)  │       │  (Tux pad)    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`serial::ByteSource`] - Non-blocking byte input
//! - [`serial::ByteSink`] - Non-blocking byte output
//!
//! Any [`embedded_io`] implementation can be plugged in through
//! [`io::IoSource`] and [`io::IoSink`].

#![no_std]
#![deny(unsafe_code)]

pub mod error;
pub mod io;
pub mod serial;

// Re-export key types at crate root for convenience
pub use error::LinkError;
pub use io::{IoSink, IoSource};
pub use serial::{ByteSink, ByteSource, DataBits, Parity, SerialConfig, StopBits, TUX_BAUDRATE};
