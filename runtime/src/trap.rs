use divtest_core::Sink;

use crate::{NOP_EXIT, NOP_PUTC};

/// The external trap handler, seen from the program.
///
/// `tag` selects the service and `arg` carries its single operand. The
/// handler is opaque: a simulator, a debug harness, or real hardware.
pub trait Trap {
    fn trap(&mut self, tag: u32, arg: u32);
}

impl<T: Trap + ?Sized> Trap for &mut T {
    fn trap(&mut self, tag: u32, arg: u32) {
        (**self).trap(tag, arg)
    }
}

/// A [`Sink`] that raises [`NOP_PUTC`] once per character.
#[derive(Debug, Default)]
pub struct TrapSink<T> {
    trap: T,
}

impl<T: Trap> TrapSink<T> {
    pub fn new(trap: T) -> Self {
        Self { trap }
    }

    /// Raises [`NOP_EXIT`] with `code`.
    ///
    /// This does not diverge: whether the program stops here is up to the
    /// handler.
    pub fn exit(&mut self, code: i32) {
        self.trap.trap(NOP_EXIT, code as u32);
    }

    pub fn get_ref(&self) -> &T {
        &self.trap
    }

    pub fn into_inner(self) -> T {
        self.trap
    }
}

impl<T: Trap> Sink for TrapSink<T> {
    fn putc(&mut self, c: u8) {
        self.trap.trap(NOP_PUTC, c as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(u32, u32)>);

    impl Trap for Recorder {
        fn trap(&mut self, tag: u32, arg: u32) {
            self.0.push((tag, arg));
        }
    }

    #[test]
    fn each_character_is_one_putc_trap() {
        let mut sink = TrapSink::new(Recorder::default());
        sink.puts(b"7f\n");
        sink.exit(0);

        assert_eq!(
            sink.into_inner().0,
            vec![
                (NOP_PUTC, u32::from(b'7')),
                (NOP_PUTC, u32::from(b'f')),
                (NOP_PUTC, u32::from(b'\n')),
                (NOP_EXIT, 0),
            ]
        );
    }

    #[test]
    fn negative_exit_codes_keep_their_bits() {
        let mut sink = TrapSink::new(Recorder::default());
        sink.exit(-1);
        assert_eq!(sink.get_ref().0, vec![(NOP_EXIT, u32::MAX)]);
    }

    #[test]
    fn borrowed_handler() {
        let mut recorder = Recorder::default();
        {
            let mut sink = TrapSink::new(&mut recorder);
            divtest_core::write_line(&mut sink, 1);
        }
        assert_eq!(recorder.0.len(), 9);
        assert!(recorder.0.iter().all(|&(tag, _)| tag == NOP_PUTC));
    }
}
