// Bare-metal entry for the division test.
// Note: the startup sequence follows riscv-rt, trimmed to what a
// single-threaded program without a heap needs.
use core::panic::PanicInfo;

use crate::{exit, EXIT_PANIC, EXIT_SUCCESS};

core::arch::global_asm!(
    ".section .init, \"ax\"",
    ".global _start",
    "_start:",
    ".option push",
    ".option norelax",
    "la gp, __global_pointer$",
    ".option pop",
    "la sp, __stack_top",
    "call _start_rust",
    "1:",
    "j 1b",
);

#[inline(never)]
#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    exit(EXIT_PANIC)
}

#[export_name = "error: divtest-rt appears more than once"]
#[doc(hidden)]
pub static __ONCE__: () = ();

/// Rust entry point (_start_rust).
#[doc(hidden)]
#[link_section = ".init.rust"]
#[export_name = "_start_rust"]
pub unsafe extern "C" fn start_rust() -> ! {
    extern "Rust" {
        // Provided by the program as `#[no_mangle] fn main()`.
        fn main();
    }

    main();

    exit(EXIT_SUCCESS)
}
