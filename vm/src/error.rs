use std::io;

use thiserror::Error;

/// Errors raised while handling traps from the program.
#[derive(Debug, Error, PartialEq)]
pub enum VmError {
    // Tag not known to the handler
    #[error("Unknown trap: tag=0x{tag:04X}, arg=0x{arg:08X}")]
    UnknownTrap { tag: u32, arg: u32 },

    // Program kept running after it asked to exit
    #[error("Trap raised after exit: tag=0x{0:04X}, exit code {1}")]
    TrapAfterExit(u32, i32),

    // Program returned without raising the exit trap
    #[error("Program finished without exiting ({0} traps handled)")]
    NoExit(usize),

    #[error("Console write failed: {0}")]
    ConsoleWrite(io::ErrorKind),
}

impl From<io::Error> for VmError {
    fn from(e: io::Error) -> Self {
        VmError::ConsoleWrite(e.kind())
    }
}

/// Result type for trap handling.
pub type Result<T, E = VmError> = std::result::Result<T, E>;
