//! Hexadecimal memory dumper.
//!
//! Formats a byte buffer as a canonical hex dump: an offset column, groups of
//! hexadecimal byte values, and a printable ASCII gutter.
//!
//! # Examples
//!
//! ```
//! use hexd::Printer;
//!
//! let buf = b"Hello, world!\0\0\0";
//! let dump = Printer::<u8>::new(0, buf).to_string();
//! assert!(dump.contains("Hello, world!"));
//! ```

use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;

/// Number of columns grouped per dump row.
const WIDTH: usize = 16;

/// Hex dump formatter.
///
/// Renders a byte buffer starting at a given base offset. The generic
/// parameter is unused beyond fixing the element width to a byte and exists
/// to mirror call sites which parameterize over the buffer's item type.
#[derive(Clone, Copy, Debug)]
pub struct Printer<'a, T = u8> {
    base: usize,
    buf: &'a [u8],
    _kind: PhantomData<T>,
}

impl<'a, T> Printer<'a, T> {
    /// Constructs a new `Printer` over `buf`, labelling the first byte as
    /// `base`.
    #[must_use]
    pub fn new(base: usize, buf: &'a [u8]) -> Self {
        Self {
            base,
            buf,
            _kind: PhantomData,
        }
    }
}

impl<T> Display for Printer<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.buf.chunks(WIDTH).enumerate() {
            let addr = self.base + row * WIDTH;
            write!(f, "{addr:08x}  ")?;
            for (i, byte) in chunk.iter().enumerate() {
                write!(f, "{byte:02x} ")?;
                if i == WIDTH / 2 - 1 {
                    write!(f, " ")?;
                }
            }
            for pad in chunk.len()..WIDTH {
                write!(f, "   ")?;
                if pad == WIDTH / 2 - 1 {
                    write!(f, " ")?;
                }
            }
            write!(f, " |")?;
            for byte in chunk {
                let ch = if byte.is_ascii_graphic() || *byte == b' ' {
                    *byte as char
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_ascii_gutter() {
        let buf = b"Hi!";
        let out = Printer::<u8>::new(0, buf).to_string();
        assert!(out.starts_with("00000000  "));
        assert!(out.contains("|Hi!|"));
    }

    #[test]
    fn honours_base_offset() {
        let buf = [0u8; 4];
        let out = Printer::<u8>::new(0x100, &buf).to_string();
        assert!(out.starts_with("00000100"));
    }

    #[test]
    fn wraps_at_width() {
        let buf = [0xaau8; WIDTH + 1];
        let out = Printer::<u8>::new(0, &buf).to_string();
        assert_eq!(out.lines().count(), 2);
    }
}
