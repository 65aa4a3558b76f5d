//! CGB palette RAM.
//!
//! Backs the `BCPS`/`BCPD` (`[$FF68..=$FF69]`) and `OCPS`/`OCPD`
//! (`[$FF6A..=$FF6B]`) register pairs. Each pair addresses the same 64-byte
//! palette RAM (8 palettes of 4 colours, 2 bytes each, 5-5-5 RGB packed
//! little-endian) through an auto-incrementing index register.

use rugby_arch::mem::{Memory, Result};
use rugby_arch::{Block, Byte, Shared, Word};

/// A bank of CGB palette RAM, addressed through an index/data register pair.
#[derive(Clone, Debug)]
pub struct Cram {
    data: [Byte; 0x40],
    index: Byte,
    autoinc: bool,
}

impl Default for Cram {
    fn default() -> Self {
        Self {
            data: [0xff; 0x40],
            index: 0,
            autoinc: false,
        }
    }
}

impl Cram {
    /// Constructs a new `Cram`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the packed RGB555 colour for palette `pal` (0-7), colour index
    /// `col` (0-3).
    #[must_use]
    pub fn color(&self, pal: Byte, col: Byte) -> u16 {
        let base = usize::from(pal & 0x07) * 8 + usize::from(col & 0x03) * 2;
        u16::from(self.data[base]) | (u16::from(self.data[base + 1]) << 8)
    }

    /// Raw palette bytes, for save states.
    #[must_use]
    pub fn raw(&self) -> &[Byte; 0x40] {
        &self.data
    }

    /// Raw palette bytes, for save states.
    pub fn raw_mut(&mut self) -> &mut [Byte; 0x40] {
        &mut self.data
    }
}

impl Block for Cram {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Index/auto-increment register (`BCPS`/`OCPS`).
#[derive(Clone, Debug)]
pub struct Index(pub Shared<Cram>);

impl Memory for Index {
    fn read(&self, _: Word) -> Result<Byte> {
        let cram = self.0.borrow();
        Ok(0x40 | (Byte::from(cram.autoinc) << 7) | cram.index)
    }

    fn write(&mut self, _: Word, value: Byte) -> Result<()> {
        let mut cram = self.0.borrow_mut();
        cram.autoinc = value & 0x80 != 0;
        cram.index = value & 0x3f;
        Ok(())
    }
}

/// Data register (`BCPD`/`OCPD`).
#[derive(Clone, Debug)]
pub struct Data(pub Shared<Cram>);

impl Memory for Data {
    fn read(&self, _: Word) -> Result<Byte> {
        let cram = self.0.borrow();
        Ok(cram.data[usize::from(cram.index)])
    }

    fn write(&mut self, _: Word, value: Byte) -> Result<()> {
        let mut cram = self.0.borrow_mut();
        let idx = usize::from(cram.index);
        cram.data[idx] = value;
        if cram.autoinc {
            cram.index = (cram.index + 1) & 0x3f;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_decodes_5_5_5_little_endian() {
        let mut cram = Cram::new();
        cram.data[0] = 0x1f; // low byte: red = 0b11111
        cram.data[1] = 0x00;
        assert_eq!(cram.color(0, 0), 0x001f);
    }

    #[test]
    fn data_register_auto_increments_only_when_armed() {
        let cram = Shared::new(Cram::new());
        let mut index = Index(cram.clone());
        let mut data = Data(cram.clone());

        index.write(0, 0x00).unwrap(); // index 0, auto-increment off
        data.write(0, 0xaa).unwrap();
        data.write(0, 0xbb).unwrap();
        assert_eq!(cram.borrow().data[0], 0xbb);

        index.write(0, 0x80).unwrap(); // index 0, auto-increment on
        data.write(0, 0x11).unwrap();
        data.write(0, 0x22).unwrap();
        assert_eq!(cram.borrow().data[0], 0x11);
        assert_eq!(cram.borrow().data[1], 0x22);
    }

    #[test]
    fn index_register_wraps_at_64_bytes() {
        let cram = Shared::new(Cram::new());
        let mut index = Index(cram.clone());
        index.write(0, 0xbf).unwrap(); // auto-increment on, index 0x3f
        let mut data = Data(cram);
        data.write(0, 0x42).unwrap();
        assert_eq!(index.read(0).unwrap() & 0x3f, 0x00);
    }
}
