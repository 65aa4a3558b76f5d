use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Ram as RamWrap, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [MBC5][mbc5] cartridge type.
///
/// [mbc5]: https://gbdev.io/pandocs/MBC5.html
#[derive(Clone, Debug)]
pub struct Mbc5 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Mbc5 {
    /// Constructs a new `Mbc5`.
    #[must_use]
    pub fn new(rom: Data, ram: Data) -> Self {
        let ctl = Shared::new(Control::default());
        Self {
            rom: Shared::new(Rom::new(ctl.clone(), rom)),
            ram: Shared::new(Ram::new(ctl.clone(), ram)),
            ctl,
        }
    }
}

impl Block for Mbc5 {
    fn reset(&mut self) {
        *self.ctl.borrow_mut() = Control::default();
    }
}

impl Mbc for Mbc5 {
    fn rom(&self) -> Device {
        self.rom.clone().into()
    }

    fn ram(&self) -> Device {
        self.ram.clone().into()
    }

    fn flash(&mut self, buf: &mut dyn io::Read) -> io::Result<usize> {
        buf.read(self.ram.borrow_mut().mem.inner_mut())
    }

    fn dump(&self, buf: &mut dyn io::Write) -> io::Result<usize> {
        buf.write(self.ram.borrow().mem.inner())
    }
}

impl Mmio for Mbc5 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// MBC5 registers.
///
/// |     Address     | Size | Name | Description                |
/// |:---------------:|------|------|----------------------------|
/// | `$0000..=$1FFF` | 1bit | ENA  | RAM Enable.                |
/// | `$2000..=$2FFF` | 8bit | ROML | ROM Bank Number (low byte). |
/// | `$3000..=$3FFF` | 1bit | ROMH | ROM Bank Number (bit 9).    |
/// | `$4000..=$5FFF` | 4bit | RAM  | RAM Bank Number.            |
#[derive(Clone, Debug, Default)]
struct Control {
    /// RAM Enable.
    ena: bool,
    /// ROM Bank Number (9 bits).
    rom: u16,
    /// RAM Bank Number.
    ram: u8,
}

/// MBC5 ROM.
#[derive(Debug)]
struct Rom {
    ctl: Shared<Control>,
    mem: Data,
}

impl Rom {
    fn new(ctl: Shared<Control>, mem: Data) -> Self {
        Self { ctl, mem }
    }

    fn nbanks(&self) -> usize {
        (self.mem.len() / 0x4000).max(1)
    }

    fn adjust(&self, addr: u16) -> usize {
        let bank = usize::from(self.ctl.borrow().rom);
        ((bank % self.nbanks()) << 14) | (usize::from(addr) & 0x3fff)
    }
}

impl Memory for Rom {
    fn read(&self, addr: u16) -> Result<u8> {
        let index = match addr {
            0x0000..=0x3fff => usize::from(addr),
            0x4000..=0x7fff => self.adjust(addr),
            _ => return Err(Error::Range),
        };
        self.mem.get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        trace!("Mbc5::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            // RAM Enable
            0x0000..=0x1fff => {
                ctl.ena = data & 0x0f == 0x0a;
                debug!("RAM Enable: {}", ctl.ena);
            }
            // ROM Bank Number (low byte)
            0x2000..=0x2fff => {
                ctl.rom = (ctl.rom & 0x100) | u16::from(data);
                debug!("ROM Bank Number: {:#05x}", ctl.rom);
            }
            // ROM Bank Number (bit 9)
            0x3000..=0x3fff => {
                ctl.rom = (ctl.rom & 0x0ff) | (u16::from(data & 0x01) << 8);
                debug!("ROM Bank Number: {:#05x}", ctl.rom);
            }
            // RAM Bank Number
            0x4000..=0x5fff => {
                ctl.ram = data & 0x0f;
                debug!("RAM Bank Number: {:#04x}", ctl.ram);
            }
            0x6000..=0x7fff => {}
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// MBC5 RAM.
#[derive(Debug)]
struct Ram {
    ctl: Shared<Control>,
    mem: RamWrap<Data>,
}

impl Ram {
    fn new(ctl: Shared<Control>, mem: Data) -> Self {
        Self {
            ctl,
            mem: RamWrap::from(mem),
        }
    }

    fn adjust(&self, addr: u16) -> usize {
        let bank = usize::from(self.ctl.borrow().ram);
        let len = self.mem.inner().len().max(0x2000);
        ((bank << 13) | (usize::from(addr) & 0x1fff)) % len
    }
}

impl Memory for Ram {
    fn read(&self, addr: u16) -> Result<u8> {
        if !self.ctl.borrow().ena {
            return Err(Error::Disabled);
        }
        let index = self.adjust(addr);
        self.mem.inner().get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        if !self.ctl.borrow().ena {
            return Err(Error::Disabled);
        }
        let index = self.adjust(addr);
        *self.mem.inner_mut().get_mut(index).ok_or(Error::Range)? = data;
        Ok(())
    }
}
