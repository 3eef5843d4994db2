//! Receive side of the pad link
//!
//! Reassembles the raw serial stream into response packets and hands them
//! to a [`TuxController`]. Run it from wherever bytes arrive (a UART
//! interrupt, a reader thread or the main loop).

use embassy_sync::blocking_mutex::raw::RawMutex;
use tuxlink_hal::{ByteSink, ByteSource};
use tuxlink_protocol::PacketAssembler;

use super::tux::TuxController;

/// Packet receiver for one pad link
pub struct PacketReceiver<R> {
    source: R,
    assembler: PacketAssembler,
}

impl<R: ByteSource> PacketReceiver<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            assembler: PacketAssembler::new(),
        }
    }

    /// Dispatch every packet the source has ready
    ///
    /// Returns the number of complete packets handled. A partial packet is
    /// kept until its remaining bytes arrive.
    pub fn poll<M: RawMutex, S: ByteSink>(
        &mut self,
        tux: &TuxController<M, S>,
    ) -> Result<usize, R::Error> {
        let mut handled = 0;

        while let Some(byte) = self.source.try_read_byte()? {
            match self.assembler.feed(byte) {
                Ok(Some(packet)) => {
                    tux.handle(packet);
                    handled += 1;
                }
                Ok(None) => {}
                Err(e) => debug!("resynchronizing pad stream: {:?}", e),
            }
        }

        Ok(handled)
    }

    /// Drop any partial packet
    pub fn reset(&mut self) {
        self.assembler.reset();
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }
}
