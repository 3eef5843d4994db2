//! Pad driver implementations
//!
//! This crate provides the concrete implementation of the
//! [`ButtonPort`](tuxlink_core::traits::ButtonPort) trait defined in
//! tuxlink-core for the Tux game pad:
//!
//! - Link driver (enable, ack-gated LED updates, reset resync)
//! - Packet receiver (stream reassembly and dispatch)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible in every module
mod fmt;

pub mod pad;

pub use pad::{PacketReceiver, TuxController};
