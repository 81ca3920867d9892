//! Host-side handling of the target's output traps.

use std::io::Write;

use divtest_rt::{Trap, TrapSink, NOP_EXIT, NOP_PUTC};

use crate::error::{
    Result,
    VmError::{NoExit, TrapAfterExit, UnknownTrap},
};

/// What a program left behind once it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub exit_code: i32,
    /// Console bytes, empty when they were streamed to stdout.
    pub console: Vec<u8>,
    pub traps: usize,
}

pub enum TrapCode {
    Exit = NOP_EXIT as isize,
    Putc = NOP_PUTC as isize,
}

impl TrapCode {
    fn from_tag(tag: u32, arg: u32) -> Result<Self> {
        match tag {
            NOP_EXIT => Ok(TrapCode::Exit),
            NOP_PUTC => Ok(TrapCode::Putc),
            _ => Err(UnknownTrap { tag, arg }),
        }
    }
}

/// Stands in for the simulator's trap handler.
///
/// The first failing trap is remembered and every later trap is ignored,
/// since [`Trap::trap`] has no way to report back to the program.
#[derive(Debug, Default)]
pub struct TrapHandler {
    to_stdout: bool,
    console: Vec<u8>,
    exit_code: Option<i32>,
    traps: usize,
    error: Option<crate::VmError>,
}

impl TrapHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_stdout(&mut self) {
        self.to_stdout = true;
    }

    pub fn console(&self) -> &[u8] {
        &self.console
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Emits the low byte of `arg`.
    /// If `to_stdout` is true, writes it to standard output; otherwise, stores it in `console`.
    fn putc(&mut self, arg: u32) -> Result<()> {
        let c = arg.to_le_bytes()[0];
        if self.to_stdout {
            std::io::stdout().write_all(&[c])?;
        } else {
            self.console.push(c);
        }
        Ok(())
    }

    fn exit(&mut self, arg: u32) -> Result<()> {
        let code = arg as i32;
        tracing::debug!(exit_code = code, traps = self.traps, "program exited");
        self.exit_code = Some(code);
        Ok(())
    }

    /// Handles one trap raised by the program.
    pub fn handle(&mut self, tag: u32, arg: u32) -> Result<()> {
        if let Some(code) = self.exit_code {
            return Err(TrapAfterExit(tag, code));
        }
        let code = TrapCode::from_tag(tag, arg)?;
        self.traps += 1;

        match code {
            TrapCode::Exit => self.exit(arg),
            TrapCode::Putc => self.putc(arg),
        }
    }

    pub fn finish(self) -> Result<Execution> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let exit_code = self.exit_code.ok_or(NoExit(self.traps))?;
        if self.to_stdout {
            std::io::stdout().flush()?;
        }
        Ok(Execution {
            exit_code,
            console: self.console,
            traps: self.traps,
        })
    }
}

/// Runs `program` against `handler` and collects the result.
pub fn emulate<F>(mut handler: TrapHandler, program: F) -> Result<Execution>
where
    F: FnOnce(&mut TrapSink<&mut TrapHandler>),
{
    program(&mut TrapSink::new(&mut handler));
    handler.finish()
}

impl Trap for TrapHandler {
    fn trap(&mut self, tag: u32, arg: u32) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.handle(tag, arg) {
            tracing::warn!(error = %e, "trap failed");
            self.error = Some(e);
        }
    }
}
