//! Target build of the division test.
//!
//! Build with `--target riscv32im-unknown-none-elf` to get the trap-based
//! program for a simulator; a plain host build writes to stdout instead.
#![cfg_attr(target_arch = "riscv32", no_std, no_main)]

use divtest_rt::{console, exit, EXIT_SUCCESS};

#[cfg_attr(target_arch = "riscv32", no_mangle)]
fn main() {
    let mut out = console();
    divtest_core::run(&mut out);
    drop(out);

    exit(EXIT_SUCCESS);
}
