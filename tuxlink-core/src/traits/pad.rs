//! Pad driver trait

use tuxlink_protocol::ButtonStatus;

/// Polling-side view of the Tux pad
///
/// Implementations are shared with an asynchronous packet handler, so both
/// operations take `&self` and must return without waiting on the serial
/// line.
pub trait ButtonPort {
    /// Error type for transmit failures
    type Error;

    /// Last button status reported by the pad
    fn query_buttons(&self) -> ButtonStatus;

    /// Request a new LED display value
    ///
    /// Returns `Ok(())` without sending anything while a previous update is
    /// still unacknowledged.
    fn set_display(&self, value: u32) -> Result<(), Self::Error>;
}

impl<T: ButtonPort + ?Sized> ButtonPort for &T {
    type Error = T::Error;

    fn query_buttons(&self) -> ButtonStatus {
        T::query_buttons(self)
    }

    fn set_display(&self, value: u32) -> Result<(), Self::Error> {
        T::set_display(self, value)
    }
}
