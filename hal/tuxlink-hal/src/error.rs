//! Link error taxonomy
//!
//! Setting up the keyboard line or the pad's serial line can fail before
//! any protocol traffic happens. Those failures are fatal to initialization
//! and are handed back to the caller with a diagnostic message.

use core::fmt;

/// Errors surfaced by the byte transports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The device could not be opened
    Open(&'static str),
    /// The device was opened but could not be configured
    Configure(&'static str),
    /// Transfer failed after setup
    Io(embedded_io::ErrorKind),
}

impl LinkError {
    /// Whether this error happened while bringing the link up
    pub fn is_setup(&self) -> bool {
        matches!(self, LinkError::Open(_) | LinkError::Configure(_))
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::Open(what) => write!(f, "failed to open {what}"),
            LinkError::Configure(what) => write!(f, "failed to configure {what}"),
            LinkError::Io(kind) => write!(f, "link transfer failed: {kind:?}"),
        }
    }
}

impl embedded_io::Error for LinkError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            LinkError::Open(_) => embedded_io::ErrorKind::NotFound,
            LinkError::Configure(_) => embedded_io::ErrorKind::InvalidInput,
            LinkError::Io(kind) => *kind,
        }
    }
}
