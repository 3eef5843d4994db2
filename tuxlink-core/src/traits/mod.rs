//! Hardware abstraction traits
//!
//! These traits define the interface between the command logic and the
//! driver that talks to the pad.

pub mod pad;

pub use pad::ButtonPort;
