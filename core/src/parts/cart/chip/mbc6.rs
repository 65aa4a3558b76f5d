use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Ram as RamWrap, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [MBC6][mbc6] cartridge type.
///
/// Used by a single game (Net de Get: Minimoni). This models the two
/// independently-selectable 8 KiB ROM banking windows and the battery-backed
/// SRAM; the cartridge's onboard flash memory (used to download minigames
/// over a peripheral this emulator does not model) is not implemented.
///
/// [mbc6]: https://gbdev.io/pandocs/MBC6.html
#[derive(Clone, Debug)]
pub struct Mbc6 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Mbc6 {
    /// Constructs a new `Mbc6`.
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

impl Block for Mbc6 {
    fn reset(&mut self) {
        *self.ctl.borrow_mut() = Control::default();
    }
}

impl Mbc for Mbc6 {
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

impl Mmio for Mbc6 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// MBC6 registers.
///
/// Two independent 8 KiB ROM windows (`$4000..=$5FFF`, `$6000..=$7FFF`), each
/// with its own bank number register.
#[derive(Clone, Debug, Default)]
struct Control {
    /// RAM Enable.
    ena: bool,
    /// Bank mapped into `$4000..=$5FFF`.
    bank_a: u8,
    /// Bank mapped into `$6000..=$7FFF`.
    bank_b: u8,
}

/// MBC6 ROM.
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
        (self.mem.len() / 0x2000).max(1)
    }
}

impl Memory for Rom {
    fn read(&self, addr: u16) -> Result<u8> {
        let ctl = self.ctl.borrow();
        let index = match addr {
            0x0000..=0x3fff => usize::from(addr),
            0x4000..=0x5fff => {
                (usize::from(ctl.bank_a) % self.nbanks()) << 13 | (usize::from(addr) & 0x1fff)
            }
            0x6000..=0x7fff => {
                (usize::from(ctl.bank_b) % self.nbanks()) << 13 | (usize::from(addr) & 0x1fff)
            }
            _ => return Err(Error::Range),
        };
        self.mem.get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        trace!("Mbc6::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            0x0000..=0x1fff => {
                ctl.ena = data & 0x0f == 0x0a;
                debug!("RAM Enable: {}", ctl.ena);
            }
            0x2000..=0x27ff => ctl.bank_a = data,
            0x2800..=0x2fff => {}
            0x3000..=0x37ff => ctl.bank_b = data,
            0x3800..=0x3fff => {}
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// MBC6 RAM.
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
}

impl Memory for Ram {
    fn read(&self, addr: u16) -> Result<u8> {
        if !self.ctl.borrow().ena {
            return Err(Error::Disabled);
        }
        let index = usize::from(addr) % self.mem.inner().len().max(1);
        self.mem.inner().get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        if !self.ctl.borrow().ena {
            return Err(Error::Disabled);
        }
        let index = usize::from(addr) % self.mem.inner().len().max(1);
        *self.mem.inner_mut().get_mut(index).ok_or(Error::Range)? = data;
        Ok(())
    }
}
