//! Serial byte stream abstractions
//!
//! Both directions are non-blocking by contract. A source reports "nothing
//! available right now" as `Ok(None)` instead of waiting, and a sink queues
//! bytes for transmission and returns without waiting for them to drain.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line speed of the Tux pad's serial link
pub const TUX_BAUDRATE: u32 = 9600;

/// Non-blocking byte receiver
pub trait ByteSource {
    /// Error type for receive operations
    type Error;

    /// Read the next available byte
    ///
    /// Returns `Ok(None)` immediately when no byte is pending.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Non-blocking byte transmitter
pub trait ByteSink {
    /// Error type for transmit operations
    type Error;

    /// Queue `data` for transmission
    ///
    /// Must not wait for the bytes to leave the wire; at 9600 baud a
    /// 6-byte packet takes several milliseconds.
    fn put(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    type Error = T::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        T::try_read_byte(self)
    }
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    type Error = T::Error;

    fn put(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::put(self, data)
    }
}

/// Serial line configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: TUX_BAUDRATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StopBits {
    One,
    Two,
}
