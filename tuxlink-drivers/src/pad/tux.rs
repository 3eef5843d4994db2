//! Tux pad link driver
//!
//! Owns the transmit side of the MTCP line and the small amount of state
//! the pad protocol requires:
//!
//! - the last button status reported by the pad
//! - whether the pad acknowledged the last command
//! - the last LED value sent, replayed after a pad reset
//!
//! The pad accepts one command at a time. An LED update is only sent once
//! the previous command was acknowledged; updates requested earlier are
//! dropped, not queued.
//!
//! Packets arrive in a different context than the game loop polls from, so
//! every field sits behind its own blocking mutex and no lock is held while
//! bytes are written.

use core::cell::{Cell, RefCell};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use tuxlink_core::traits::ButtonPort;
use tuxlink_hal::ByteSink;
use tuxlink_protocol::{ButtonStatus, HostCommand, LedValue, Packet, PadMessage};

/// Driver for one Tux pad
pub struct TuxController<M: RawMutex, S> {
    sink: Mutex<M, RefCell<S>>,
    status: Mutex<M, Cell<ButtonStatus>>,
    ack: Mutex<M, Cell<bool>>,
    pending_led: Mutex<M, Cell<u32>>,
}

impl<M: RawMutex, S: ByteSink> TuxController<M, S> {
    /// Create a driver writing to `sink`
    ///
    /// Nothing is sent until [`initialize`](Self::initialize) is called.
    pub const fn new(sink: S) -> Self {
        Self {
            sink: Mutex::new(RefCell::new(sink)),
            status: Mutex::new(Cell::new(ButtonStatus::RELEASED)),
            ack: Mutex::new(Cell::new(false)),
            pending_led: Mutex::new(Cell::new(0)),
        }
    }

    /// Reset driver state and enable the pad
    ///
    /// Enables button events and user-controlled LEDs. The driver waits
    /// for an acknowledgment before sending any LED update. Safe to call
    /// again at any time.
    pub fn initialize(&self) -> Result<(), S::Error> {
        self.ack.lock(|ack| ack.set(false));
        self.pending_led.lock(|led| led.set(0));
        self.status.lock(|status| status.set(ButtonStatus::RELEASED));

        debug!("enabling pad");
        self.send(HostCommand::Enable)
    }

    /// Handle one response packet from the pad
    ///
    /// Transmit failures are logged here; there is no caller to report them
    /// to.
    pub fn handle_packet(&self, opcode: u8, b: u8, c: u8) {
        self.handle(Packet::new(opcode, b, c));
    }

    /// Handle an assembled response packet
    pub fn handle(&self, packet: Packet) {
        match PadMessage::from_packet(&packet) {
            PadMessage::Reset => self.resync(),
            PadMessage::Ack => self.ack.lock(|ack| ack.set(true)),
            PadMessage::ButtonEvent(status) => {
                trace!("buttons {:#x}", status.raw());
                self.status.lock(|cell| cell.set(status));
            }
            PadMessage::Other(opcode) => {
                trace!("ignoring response {:#x}", opcode);
            }
        }
    }

    /// Last button status reported by the pad
    pub fn query_buttons(&self) -> ButtonStatus {
        self.status.lock(|status| status.get())
    }

    /// Send a new LED value
    ///
    /// Does nothing while the previous command is unacknowledged.
    pub fn set_display(&self, value: u32) -> Result<(), S::Error> {
        let ready = self.ack.lock(|ack| ack.replace(false));
        if !ready {
            return Ok(());
        }

        self.pending_led.lock(|led| led.set(value));
        self.send(HostCommand::SetLed(LedValue::from_raw(value)))
    }

    /// Last LED value sent
    pub fn pending_display(&self) -> u32 {
        self.pending_led.lock(|led| led.get())
    }

    /// True if the pad acknowledged the last command
    pub fn is_acknowledged(&self) -> bool {
        self.ack.lock(|ack| ack.get())
    }

    /// Consume the driver, returning the sink
    pub fn into_sink(self) -> S {
        self.sink.into_inner().into_inner()
    }

    // A reset pad has blank LEDs and button events disabled. The display is
    // replayed only if the last update had been acknowledged.
    fn resync(&self) {
        let was_acked = self.is_acknowledged();
        let pending = self.pending_display();

        info!("pad reset, resynchronizing");
        if self.initialize().is_err() {
            warn!("failed to re-enable pad after reset");
            return;
        }

        if was_acked {
            // Bypasses the ack gate that initialize just closed
            self.pending_led.lock(|led| led.set(pending));
            if self.send(HostCommand::SetLed(LedValue::from_raw(pending))).is_err() {
                warn!("failed to restore display after reset");
            }
        }
    }

    fn send(&self, command: HostCommand) -> Result<(), S::Error> {
        let bytes = command.encode();
        self.sink.lock(|sink| sink.borrow_mut().put(&bytes))
    }
}

impl<M: RawMutex, S: ByteSink> ButtonPort for TuxController<M, S> {
    type Error = S::Error;

    fn query_buttons(&self) -> ButtonStatus {
        TuxController::query_buttons(self)
    }

    fn set_display(&self, value: u32) -> Result<(), S::Error> {
        TuxController::set_display(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use proptest::prelude::*;
    use tuxlink_protocol::messages::{
        MTCP_ACK, MTCP_BIOC_EVENT, MTCP_CLK_EVENT, MTCP_ERROR, MTCP_POLL_OK, MTCP_RESET,
    };
    use tuxlink_protocol::{Buttons, ENABLE_SEQUENCE};

    // Sink recording every write as one chunk
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<Vec<u8>>,
        fail: bool,
    }

    impl ByteSink for RecordingSink {
        type Error = ();

        fn put(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.writes.push(data.to_vec());
            Ok(())
        }
    }

    type TestController = TuxController<NoopRawMutex, RecordingSink>;

    fn writes(tux: TestController) -> Vec<Vec<u8>> {
        tux.into_sink().writes
    }

    fn ack(tux: &TestController) {
        tux.handle_packet(MTCP_ACK, 0x80, 0x80);
    }

    #[test]
    fn test_initialize_sends_enable() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();

        assert!(!tux.is_acknowledged());
        assert_eq!(tux.pending_display(), 0);
        assert!(tux.query_buttons().is_released());
        assert_eq!(writes(tux), [ENABLE_SEQUENCE.to_vec()]);
    }

    #[test]
    fn test_initialize_reports_sink_failure() {
        let tux = TestController::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        assert_eq!(tux.initialize(), Err(()));
    }

    #[test]
    fn test_display_dropped_until_ack() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();

        tux.set_display(0x0407_0123).unwrap();
        assert_eq!(tux.pending_display(), 0);
        assert_eq!(writes(tux), [ENABLE_SEQUENCE.to_vec()]);
    }

    #[test]
    fn test_second_display_dropped_before_ack() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();
        ack(&tux);

        tux.set_display(0x0407_0123).unwrap();
        assert!(!tux.is_acknowledged());
        tux.set_display(0x040F_1205).unwrap();
        assert_eq!(tux.pending_display(), 0x0407_0123);

        ack(&tux);
        tux.set_display(0x040F_1205).unwrap();
        assert_eq!(tux.pending_display(), 0x040F_1205);

        assert_eq!(
            writes(tux),
            [
                ENABLE_SEQUENCE.to_vec(),
                vec![0xC6, 0x07, 0x8F, 0xCB, 0x16, 0x00],
                vec![0xC6, 0x0F, 0xAD, 0xE7, 0xDB, 0x06],
            ]
        );
    }

    #[test]
    fn test_display_requested_in_flight_is_not_stored() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();
        ack(&tux);

        tux.set_display(0x000F_1111).unwrap();
        tux.set_display(0x000F_2222).unwrap();
        assert_eq!(tux.pending_display(), 0x000F_1111);

        // The unacknowledged update is not replayed
        tux.handle_packet(MTCP_RESET, 0x80, 0x80);
        assert_eq!(
            writes(tux),
            [
                ENABLE_SEQUENCE.to_vec(),
                vec![0xC6, 0x0F, 0x06, 0x06, 0x06, 0x06],
                ENABLE_SEQUENCE.to_vec(),
            ]
        );
    }

    #[test]
    fn test_button_event_updates_status() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();

        tux.handle_packet(MTCP_BIOC_EVENT, 0x8F, 0x8E);
        assert_eq!(tux.query_buttons().pressed(), Buttons::UP);
        assert_eq!(tux.query_buttons().raw(), 0xEF);

        tux.handle_packet(MTCP_BIOC_EVENT, 0x8F, 0x8F);
        assert!(tux.query_buttons().is_released());
    }

    #[test]
    fn test_other_responses_ignored() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();
        tux.handle_packet(MTCP_BIOC_EVENT, 0x8E, 0x8F);
        let before = tux.query_buttons();

        for opcode in [MTCP_CLK_EVENT, MTCP_POLL_OK, MTCP_ERROR, 0x7E] {
            tux.handle_packet(opcode, 0x80, 0x80);
        }

        assert_eq!(tux.query_buttons(), before);
        assert!(!tux.is_acknowledged());
        assert_eq!(writes(tux).len(), 1);
    }

    #[test]
    fn test_reset_after_ack_replays_display() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();
        ack(&tux);
        tux.set_display(0x0407_0123).unwrap();
        ack(&tux);
        tux.handle_packet(MTCP_BIOC_EVENT, 0x8F, 0x8E);

        tux.handle_packet(MTCP_RESET, 0x80, 0x80);

        assert!(!tux.is_acknowledged());
        assert!(tux.query_buttons().is_released());
        assert_eq!(tux.pending_display(), 0x0407_0123);

        let led = vec![0xC6, 0x07, 0x8F, 0xCB, 0x16, 0x00];
        assert_eq!(
            writes(tux),
            [ENABLE_SEQUENCE.to_vec(), led.clone(), ENABLE_SEQUENCE.to_vec(), led]
        );
    }

    #[test]
    fn test_reset_while_unacked_only_reenables() {
        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();
        ack(&tux);
        tux.set_display(0x0407_0123).unwrap();

        tux.handle_packet(MTCP_RESET, 0x80, 0x80);

        assert_eq!(tux.pending_display(), 0);
        let w = writes(tux);
        assert_eq!(w.len(), 3);
        assert_eq!(w[2], ENABLE_SEQUENCE.to_vec());
    }

    #[test]
    fn test_reset_with_failing_sink_does_not_panic() {
        let tux = TestController::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        tux.handle_packet(MTCP_RESET, 0x80, 0x80);
        assert!(!tux.is_acknowledged());
    }

    #[test]
    fn test_handle_assembled_packets() {
        use tuxlink_protocol::PacketAssembler;

        let tux = TestController::new(RecordingSink::default());
        tux.initialize().unwrap();

        let mut assembler = PacketAssembler::new();
        for byte in [MTCP_ACK, 0x80, 0x80, MTCP_BIOC_EVENT, 0x8E, 0x8F] {
            if let Ok(Some(packet)) = assembler.feed(byte) {
                tux.handle(packet);
            }
        }

        assert!(tux.is_acknowledged());
        assert_eq!(tux.query_buttons().pressed(), Buttons::START);
    }

    #[test]
    fn test_shared_between_threads() {
        let tux: TuxController<CriticalSectionRawMutex, RecordingSink> =
            TuxController::new(RecordingSink::default());
        tux.initialize().unwrap();

        std::thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..100 {
                    tux.handle_packet(MTCP_ACK, 0x80, 0x80);
                    tux.handle_packet(MTCP_BIOC_EVENT, 0x8F, 0x8E);
                }
            });
            s.spawn(|| {
                for seconds in 0..100 {
                    tux.set_display(0x0407_0000 | seconds).unwrap();
                    let _ = tux.query_buttons();
                }
            });
        });

        // Every write is a whole command
        for write in tux.into_sink().writes {
            assert!(write == ENABLE_SEQUENCE || (write.len() == 6 && write[0] == 0xC6));
        }
    }

    #[derive(Debug, Clone)]
    enum Step {
        Display(u32),
        Ack,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![any::<u32>().prop_map(Step::Display), Just(Step::Ack)]
    }

    proptest! {
        #[test]
        fn prop_one_led_packet_per_ack(steps in proptest::collection::vec(step(), 0..64)) {
            let tux = TestController::new(RecordingSink::default());
            tux.initialize().unwrap();

            // Values the driver should have sent, in order
            let mut accepted = Vec::new();
            let mut acked = false;

            for step in &steps {
                match *step {
                    Step::Ack => {
                        tux.handle_packet(MTCP_ACK, 0x80, 0x80);
                        acked = true;
                    }
                    Step::Display(value) => {
                        tux.set_display(value).unwrap();
                        if acked {
                            accepted.push(value);
                            acked = false;
                        }
                    }
                }
                prop_assert_eq!(tux.is_acknowledged(), acked);
                prop_assert_eq!(tux.pending_display(), accepted.last().copied().unwrap_or(0));
            }

            let expected: Vec<Vec<u8>> = std::iter::once(ENABLE_SEQUENCE.to_vec())
                .chain(accepted.iter().map(|&v| LedValue::from_raw(v).to_packet().to_vec()))
                .collect();
            prop_assert_eq!(writes(tux), expected);
        }
    }
}
