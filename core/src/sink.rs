/// Accepts one character at a time, in order.
///
/// This is the only thing the quotient table needs from its environment.
/// Implementations decide what "emit" means: a trap into a simulator, a
/// write to standard output, or a comparison against a reference.
/// There is no backpressure and no error path; a sink that cannot accept
/// a character is expected to fail at the platform level.
pub trait Sink {
    fn putc(&mut self, c: u8);

    /// Emits every byte of `bytes` in order.
    fn puts(&mut self, bytes: &[u8]) {
        for &c in bytes {
            self.putc(c);
        }
    }

    /// Pushes out anything the sink has held back.
    fn flush(&mut self) {}
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn putc(&mut self, c: u8) {
        (**self).putc(c)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

#[cfg(any(test, feature = "alloc"))]
impl Sink for alloc::vec::Vec<u8> {
    fn putc(&mut self, c: u8) {
        self.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(usize);

    impl Sink for Counter {
        fn putc(&mut self, _c: u8) {
            self.0 += 1;
        }
    }

    #[test]
    fn puts_forwards_each_byte() {
        let mut counter = Counter(0);
        counter.puts(b"7fffffff\n");
        assert_eq!(counter.0, 9);
    }

    #[test]
    fn mutable_reference_is_a_sink() {
        fn newline<S: Sink>(mut sink: S) {
            sink.putc(b'\n');
        }

        let mut counter = Counter(0);
        newline(&mut counter);
        newline(&mut counter);
        assert_eq!(counter.0, 2);
    }
}
