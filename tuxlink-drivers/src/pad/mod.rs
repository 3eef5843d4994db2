//! Tux pad over an MTCP serial line
//!
//! [`TuxController`] owns the transmit side and the shared pad state;
//! [`PacketReceiver`] feeds it from the receive side.

pub mod receiver;
pub mod tux;

pub use receiver::PacketReceiver;
pub use tux::TuxController;

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use std::collections::VecDeque;
    use tuxlink_core::{Command, InputController, InputMode};
    use tuxlink_hal::{ByteSink, ByteSource};

    #[derive(Default)]
    struct Wire(Vec<u8>);

    impl ByteSink for Wire {
        type Error = ();

        fn put(&mut self, data: &[u8]) -> Result<(), ()> {
            self.0.extend_from_slice(data);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Bytes(VecDeque<u8>);

    impl ByteSource for Bytes {
        type Error = ();

        fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
            Ok(self.0.pop_front())
        }
    }

    #[test]
    fn test_elapsed_time_reaches_the_wire() {
        let tux = TuxController::<CriticalSectionRawMutex, _>::new(Wire::default());
        tux.initialize().unwrap();
        let mut rx = PacketReceiver::new(Bytes::default());
        let input = InputController::new(Bytes::default(), &tux, InputMode::Controller);

        rx.source_mut().0.extend([0x40, 0x80, 0x80]);
        rx.poll(&tux).unwrap();
        input.display_elapsed(83).unwrap();
        // Not acknowledged yet
        input.display_elapsed(84).unwrap();

        rx.source_mut().0.extend([0x40, 0x80, 0x80]);
        rx.poll(&tux).unwrap();
        input.display_elapsed(725).unwrap();
        drop(input);

        assert_eq!(
            tux.into_sink().0,
            [
                0xC3, 0xC8, //
                0xC6, 0x07, 0x8F, 0xCB, 0x16, 0x00, //
                0xC6, 0x0F, 0xAD, 0xE7, 0xDB, 0x06,
            ]
        );
    }

    #[test]
    fn test_pad_buttons_reach_the_game_loop() {
        let tux = TuxController::<CriticalSectionRawMutex, _>::new(Wire::default());
        tux.initialize().unwrap();
        let mut rx = PacketReceiver::new(Bytes::default());
        let mut input = InputController::new(Bytes::default(), &tux, InputMode::Controller);

        // B pressed
        rx.source_mut().0.extend([0x41, 0x8B, 0x8F]);
        rx.poll(&tux).unwrap();
        assert_eq!(input.poll_controller(), Command::Enter);
        assert_eq!(input.poll_controller(), Command::None);

        // Released, then LEFT held
        rx.source_mut().0.extend([0x41, 0x8F, 0x8F, 0x41, 0x8F, 0x8D]);
        rx.poll(&tux).unwrap();
        assert_eq!(input.poll_controller(), Command::Left);
        assert_eq!(input.poll_controller(), Command::Left);
    }
}
