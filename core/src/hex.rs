use crate::Sink;

/// Maps a nibble to its lowercase ASCII digit.
pub const BIN2HEX: [u8; 16] = *b"0123456789abcdef";

/// Hex digits per quotient.
pub const DIGITS: usize = 8;

/// Bytes per emitted line: the digits plus `\n`.
pub const LINE_LEN: usize = DIGITS + 1;

#[inline]
fn nibble(value: i32, shift: u32) -> u8 {
    BIN2HEX[((value >> shift) & 0xf) as usize]
}

/// Writes the 32-bit pattern of `value`, most significant nibble first.
///
/// Negative values are not special-cased: their two's-complement bits are
/// printed verbatim, so `-1` becomes `ffffffff`.
pub fn write_hex<S: Sink + ?Sized>(sink: &mut S, value: i32) {
    for shift in (0..32).step_by(4).rev() {
        sink.putc(nibble(value, shift));
    }
}

/// Writes `value` as one transcript line.
pub fn write_line<S: Sink + ?Sized>(sink: &mut S, value: i32) {
    write_hex(sink, value);
    sink.putc(b'\n');
}

/// The exact bytes [`write_line`] emits for `value`.
pub fn hex_line(value: i32) -> [u8; LINE_LEN] {
    let mut line = [b'\n'; LINE_LEN];
    for (i, shift) in (0..32).step_by(4).rev().enumerate() {
        line[i] = nibble(value, shift);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(value: i32) -> Vec<u8> {
        let mut out = Vec::new();
        write_line(&mut out, value);
        out
    }

    #[test]
    fn digits_are_lowercase_and_padded() {
        assert_eq!(line(0), b"00000000\n");
        assert_eq!(line(1), b"00000001\n");
        assert_eq!(line(0x3ade68a), b"03ade68a\n");
        assert_eq!(line(i32::MAX), b"7fffffff\n");
    }

    #[test]
    fn negative_values_print_their_bit_pattern() {
        assert_eq!(line(-1), b"ffffffff\n");
        assert_eq!(line(i32::MIN), b"80000000\n");
        assert_eq!(line(-16), b"fffffff0\n");
    }

    #[test]
    fn hex_line_matches_streamed_output() {
        for value in [0, 7, 1010, 65075262, -123456789, i32::MIN, i32::MAX] {
            assert_eq!(&hex_line(value)[..], &line(value)[..]);
        }
    }

    #[test]
    fn write_hex_has_no_terminator() {
        let mut out = Vec::new();
        write_hex(&mut out, 0xabc);
        assert_eq!(out, b"00000abc");
    }
}
