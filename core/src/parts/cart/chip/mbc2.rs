use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [MBC2][mbc2] cartridge type.
///
/// [mbc2]: https://gbdev.io/pandocs/MBC2.html
#[derive(Clone, Debug)]
pub struct Mbc2 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Mbc2 {
    /// Constructs a new `Mbc2`.
    #[must_use]
    pub fn new(rom: Data, _ram: Data) -> Self {
        let ctl = Shared::new(Control::default());
        Self {
            rom: Shared::new(Rom::new(ctl.clone(), rom)),
            // MBC2 carries its own 512 x 4-bit RAM, independent of the
            // header's declared external RAM size.
            ram: Shared::new(Ram::new(ctl.clone(), vec![0; 0x200].into_boxed_slice())),
            ctl,
        }
    }
}

impl Block for Mbc2 {
    fn reset(&mut self) {
        *self.ctl.borrow_mut() = Control::default();
    }
}

impl Mbc for Mbc2 {
    fn rom(&self) -> Device {
        self.rom.clone().into()
    }

    fn ram(&self) -> Device {
        self.ram.clone().into()
    }

    fn flash(&mut self, buf: &mut dyn io::Read) -> io::Result<usize> {
        buf.read(&mut self.ram.borrow_mut().mem)
    }

    fn dump(&self, buf: &mut dyn io::Write) -> io::Result<usize> {
        buf.write(&self.ram.borrow().mem)
    }
}

impl Mmio for Mbc2 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// MBC2 registers.
///
/// Both registers share the `$0000..=$3FFF` range; which one a write targets
/// is decided by bit 8 of the address (the "least significant bit of the
/// upper address byte").
#[derive(Clone, Debug, Default)]
struct Control {
    /// RAM Enable.
    ena: bool,
    /// ROM Bank Number (4 bits).
    bank: u8,
}

/// MBC2 ROM.
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
        let index = match addr {
            0x0000..=0x3fff => usize::from(addr),
            0x4000..=0x7fff => {
                let bank = self.ctl.borrow().bank.max(1);
                (usize::from(bank) % self.nbanks()) << 14 | (usize::from(addr) & 0x3fff)
            }
            _ => return Err(Error::Range),
        };
        self.mem.get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        trace!("Mbc2::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            0x0000..=0x3fff => {
                if addr & 0x0100 == 0 {
                    ctl.ena = data & 0x0f == 0x0a;
                    debug!("RAM Enable: {}", ctl.ena);
                } else {
                    ctl.bank = (data & 0x0f).max(1);
                    debug!("ROM Bank Number: {:#04x}", ctl.bank);
                }
            }
            0x4000..=0x7fff => {}
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// MBC2 built-in RAM (512 x 4-bit nibbles).
#[derive(Debug)]
struct Ram {
    ctl: Shared<Control>,
    mem: Data,
}

impl Ram {
    fn new(ctl: Shared<Control>, mem: Data) -> Self {
        Self { ctl, mem }
    }
}

impl Memory for Ram {
    fn read(&self, addr: u16) -> Result<u8> {
        if !self.ctl.borrow().ena {
            return Err(Error::Disabled);
        }
        let index = usize::from(addr) % self.mem.len();
        self.mem
            .get(index)
            .ok_or(Error::Range)
            .map(|&nibble| 0xf0 | nibble)
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        if !self.ctl.borrow().ena {
            return Err(Error::Disabled);
        }
        let index = usize::from(addr) % self.mem.len();
        *self.mem.get_mut(index).ok_or(Error::Range)? = data & 0x0f;
        Ok(())
    }
}
