//! # divtest-rt
//!
//! Character output and process exit for the division test, on the
//! bare-metal target and on the host.
//!
//! On the target every character is handed to an external trap handler:
//! the character goes in the first argument register, a fixed tag in the
//! syscall register, and an environment call signals the handler. The tags
//! follow the simulator "nop" conventions of the OR1200 test bench. On the
//! host the same program writes to standard output instead.
//!
//! Both sides expose [`console`] (the default [`Sink`]) and [`exit`].
#![cfg_attr(target_arch = "riscv32", no_std)]

#[cfg(target_arch = "riscv32")]
mod runtime;

mod io;
mod trap;

pub use divtest_core::Sink;
pub use io::*;
pub use trap::{Trap, TrapSink};

/// Trap tag: terminate with the exit code in the argument register.
pub const NOP_EXIT: u32 = 0x0001;
/// Trap tag: emit the low byte of the argument register.
pub const NOP_PUTC: u32 = 0x0004;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PANIC: i32 = 1;

/// Raises a trap: `$tag` in a7, `$arg` in a0, then `ecall`.
#[macro_export]
macro_rules! trap {
    ($tag:expr, $arg:expr) => {{
        let arg: u32 = $arg;
        let tag: u32 = $tag;
        unsafe {
            core::arch::asm!(
                "ecall",
                in("a0") arg,
                in("a7") tag,
                options(nostack),
            )
        }
    }};
}
