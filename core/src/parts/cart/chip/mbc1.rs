use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Ram as RamWrap, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [MBC1][mbc1] cartridge type.
///
/// [mbc1]: https://gbdev.io/pandocs/MBC1.html
#[derive(Clone, Debug)]
pub struct Mbc1 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Mbc1 {
    /// Constructs a new `Mbc1`.
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

impl Block for Mbc1 {
    fn reset(&mut self) {
        *self.ctl.borrow_mut() = Control::default();
    }
}

impl Mbc for Mbc1 {
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

impl Mmio for Mbc1 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// MBC1 registers.
///
/// |    Address      | Size | Name  | Description                   |
/// |:----------------:|------|-------|-------------------------------|
/// | `$0000..=$1FFF` | 4bit | ENA   | RAM Enable.                   |
/// | `$2000..=$3FFF` | 5bit | BANK1 | ROM Bank Number (lower bits). |
/// | `$4000..=$5FFF` | 2bit | BANK2 | RAM Bank / ROM Bank (upper).  |
/// | `$6000..=$7FFF` | 1bit | MODE  | Banking Mode Select.          |
#[derive(Clone, Debug, Default)]
struct Control {
    /// RAM Enable.
    ena: bool,
    /// ROM Bank Number (lower 5 bits).
    bank1: u8,
    /// RAM Bank Number / ROM Bank Number (upper 2 bits).
    bank2: u8,
    /// Banking Mode Select (false = simple, true = advanced).
    mode: bool,
}

impl Control {
    /// Effective ROM bank for the `$4000..=$7FFF` window.
    fn rom_bank(&self) -> usize {
        let bank1 = if self.bank1 == 0 { 1 } else { self.bank1 };
        (usize::from(self.bank2) << 5) | usize::from(bank1)
    }

    /// Effective ROM bank for the `$0000..=$3FFF` window.
    fn rom_bank0(&self) -> usize {
        if self.mode {
            usize::from(self.bank2) << 5
        } else {
            0
        }
    }

    /// Effective RAM bank.
    fn ram_bank(&self) -> usize {
        if self.mode {
            usize::from(self.bank2)
        } else {
            0
        }
    }
}

/// MBC1 ROM.
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
}

impl Memory for Rom {
    fn read(&self, addr: u16) -> Result<u8> {
        let ctl = self.ctl.borrow();
        let index = match addr {
            0x0000..=0x3fff => (ctl.rom_bank0() % self.nbanks()) << 14 | usize::from(addr),
            0x4000..=0x7fff => {
                (ctl.rom_bank() % self.nbanks()) << 14 | (usize::from(addr) & 0x3fff)
            }
            _ => return Err(Error::Range),
        };
        self.mem.get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        trace!("Mbc1::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            // RAM Enable
            0x0000..=0x1fff => {
                ctl.ena = data & 0x0f == 0x0a;
                debug!("RAM Enable: {}", ctl.ena);
            }
            // ROM Bank Number (lower 5 bits)
            0x2000..=0x3fff => {
                ctl.bank1 = data & 0x1f;
                debug!("BANK1: {:#04x}", ctl.bank1);
            }
            // RAM Bank Number / upper ROM bank bits
            0x4000..=0x5fff => {
                ctl.bank2 = data & 0x03;
                debug!("BANK2: {:#04x}", ctl.bank2);
            }
            // Banking Mode Select
            0x6000..=0x7fff => {
                ctl.mode = data & 0x01 != 0;
                debug!("Banking Mode: {}", ctl.mode);
            }
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// MBC1 RAM.
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
        let bank = self.ctl.borrow().ram_bank();
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
        *self
            .mem
            .inner_mut()
            .get_mut(index)
            .ok_or(Error::Range)? = data;
        Ok(())
    }
}
