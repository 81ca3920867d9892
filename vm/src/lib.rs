//! # divtest-vm
//!
//! Runs the trap-based build of the division test on the host.
//!
//! The program raises `NOP_PUTC` for every character and `NOP_EXIT` at the
//! end, exactly as it would on the target. [`TrapHandler`] services those
//! traps in place of the simulator, so the trap path can be checked
//! against the plain console path without hardware.

pub mod error;
pub mod syscalls;

pub use error::{Result, VmError};
pub use syscalls::{emulate, Execution, TrapCode, TrapHandler};

use divtest_rt::EXIT_SUCCESS;

/// Runs the quotient table through the trap path.
pub fn emulate_divtest(handler: TrapHandler) -> Result<Execution> {
    tracing::info!("running quotient table through trap handler");
    emulate(handler, |sink| {
        divtest_core::run(sink);
        sink.exit(EXIT_SUCCESS);
    })
}
