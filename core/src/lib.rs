//! # divtest-core
//!
//! The quotient table at the heart of the OR1200 division test.
//!
//! Every entry of [`TEST_VECTOR`] is divided by every entry except the
//! first (which is zero). Each quotient is written to a [`Sink`] as eight
//! lowercase hexadecimal digits followed by `\n`, one character at a time.
//! The resulting transcript is 1056 lines long and identical on every
//! target, which makes it a conformance check for the divide instruction.
//!
//! ```
//! use divtest_core::{run, verify, TABLE_LEN};
//!
//! let mut out = Vec::new();
//! run(&mut out);
//! assert_eq!(out.len(), TABLE_LEN);
//! assert!(verify(&out).is_ok());
//! ```
#![cfg_attr(not(test), no_std)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

mod hex;
mod sink;
mod table;
pub mod verify;

pub use hex::{hex_line, write_hex, write_line, BIN2HEX, DIGITS, LINE_LEN};
pub use sink::Sink;
pub use table::{
    divide, entry, quotients, run, Entry, COLS, FIRST_COL, LINE_COUNT, ROWS, TABLE_LEN, TEST_VECTOR,
};
pub use verify::{verify, Mismatch, Summary, Verifier};
