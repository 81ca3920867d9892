use core::{fmt, hint::black_box};

use crate::{hex::write_line, Sink, LINE_LEN};

/// Dividends and divisors, including the boundary values around zero and
/// `i32::MAX`.
pub const TEST_VECTOR: [i32; 33] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 20, 21, 33, 66, 75, 80, 81, 90, 99, 100, 101,
    1000, 10001, 1010101, 123456789, 1073741822, 1073741823, 2147483646, 2147483647,
];

/// Number of dividends (rows).
pub const ROWS: usize = TEST_VECTOR.len();

/// Index of the first divisor. Column 0 holds the zero entry and is never
/// used as a divisor.
pub const FIRST_COL: usize = 1;

/// Number of divisors (columns).
pub const COLS: usize = ROWS - FIRST_COL;

/// Lines in a complete transcript.
pub const LINE_COUNT: usize = ROWS * COLS;

/// Bytes in a complete transcript.
pub const TABLE_LEN: usize = LINE_COUNT * LINE_LEN;

/// One division step of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub dividend: i32,
    pub divisor: i32,
    pub quotient: i32,
}

/// Divides on the executing core.
///
/// The operands are constants, so the optimizer could otherwise fold the
/// quotient at compile time and print its own answer instead of the
/// divide instruction's.
#[inline(never)]
pub fn divide(dividend: i32, divisor: i32) -> i32 {
    black_box(dividend) / black_box(divisor)
}

impl Entry {
    // `col` is always at least FIRST_COL here, so the divisor is non-zero.
    fn new(row: usize, col: usize) -> Self {
        let dividend = TEST_VECTOR[row];
        let divisor = TEST_VECTOR[col];
        Self {
            row,
            col,
            dividend,
            divisor,
            quotient: divide(dividend, divisor),
        }
    }

    /// The entry on zero-based transcript line `line`, which must be below
    /// [`LINE_COUNT`].
    pub(crate) fn at_line(line: usize) -> Self {
        Self::new(line / COLS, FIRST_COL + line % COLS)
    }

    /// Zero-based position of this entry's line in the transcript.
    pub fn line(&self) -> usize {
        self.row * COLS + (self.col - FIRST_COL)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}]: {} / {} = {}",
            self.row, self.col, self.dividend, self.divisor, self.quotient
        )
    }
}

/// Looks up the entry printed on zero-based transcript line `line`.
pub fn entry(line: usize) -> Option<Entry> {
    (line < LINE_COUNT).then(|| Entry::at_line(line))
}

/// All entries in emission order: rows outer, columns inner.
pub fn quotients() -> impl Iterator<Item = Entry> {
    (0..ROWS).flat_map(|row| (FIRST_COL..ROWS).map(move |col| Entry::new(row, col)))
}

/// Emits the whole quotient table to `sink`, then flushes it.
pub fn run<S: Sink + ?Sized>(sink: &mut S) {
    for entry in quotients() {
        write_line(sink, entry.quotient);
    }
    sink.flush();
}
