//! Adapters from `embedded-io` streams
//!
//! Lets any `embedded_io` reader or writer stand in as a [`ByteSource`] or
//! [`ByteSink`]. The reader must implement [`ReadReady`] so that polling
//! never blocks; the writer is expected to be buffered (a UART with a
//! transmit FIFO, a tty, a pipe).

use embedded_io::{Error as _, Read, ReadReady, Write};

use crate::error::LinkError;
use crate::serial::{ByteSink, ByteSource};

/// Non-blocking [`ByteSource`] over an `embedded-io` reader
#[derive(Debug)]
pub struct IoSource<T> {
    inner: T,
}

impl<T> IoSource<T> {
    /// Wrap a reader
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consume the adapter and return the reader
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + ReadReady> ByteSource for IoSource<T> {
    type Error = LinkError;

    fn try_read_byte(&mut self) -> Result<Option<u8>, LinkError> {
        if !self.inner.read_ready().map_err(|e| LinkError::Io(e.kind()))? {
            return Ok(None);
        }

        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf).map_err(|e| LinkError::Io(e.kind()))? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}

/// [`ByteSink`] over an `embedded-io` writer
#[derive(Debug)]
pub struct IoSink<T> {
    inner: T,
}

impl<T> IoSink<T> {
    /// Wrap a writer
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consume the adapter and return the writer
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write> ByteSink for IoSink<T> {
    type Error = LinkError;

    fn put(&mut self, data: &[u8]) -> Result<(), LinkError> {
        self.inner
            .write_all(data)
            .map_err(|e| LinkError::Io(e.kind()))
    }
}
