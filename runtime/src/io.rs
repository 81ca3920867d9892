#[cfg(target_arch = "riscv32")]
mod riscv32 {
    use crate::{trap, Trap, TrapSink, NOP_EXIT};

    /// The target's own trap: an `ecall` picked up by the simulator.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Nop;

    impl Trap for Nop {
        fn trap(&mut self, tag: u32, arg: u32) {
            trap!(tag, arg);
        }
    }

    pub type Console = TrapSink<Nop>;

    /// The default sink for this target.
    pub fn console() -> Console {
        TrapSink::new(Nop)
    }

    /// Exit the program with the given exit code.
    pub fn exit(exit_code: i32) -> ! {
        trap!(NOP_EXIT, exit_code as u32);
        // The handler stops the core; park here if it does not.
        loop {
            core::hint::spin_loop();
        }
    }
}

#[cfg(target_arch = "riscv32")]
pub use riscv32::*;

#[cfg(not(target_arch = "riscv32"))]
mod native {
    use std::io::{self, BufWriter, StdoutLock, Write};

    use divtest_core::Sink;

    /// Standard output, held locked for the life of the sink.
    ///
    /// A failed write is fatal: the transcript would be incomplete anyway.
    pub struct Console {
        out: BufWriter<StdoutLock<'static>>,
    }

    impl Console {
        pub fn new() -> Self {
            Self {
                out: BufWriter::new(io::stdout().lock()),
            }
        }
    }

    impl Default for Console {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Sink for Console {
        fn putc(&mut self, c: u8) {
            self.out
                .write_all(&[c])
                .expect("failed to write to stdout");
        }

        fn flush(&mut self) {
            self.out.flush().expect("failed to flush stdout");
        }
    }

    /// The default sink for this target.
    pub fn console() -> Console {
        Console::new()
    }
}

#[cfg(not(target_arch = "riscv32"))]
pub use native::*;

#[cfg(not(target_arch = "riscv32"))]
pub use std::process::exit;
