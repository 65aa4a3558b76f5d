use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Ram as RamWrap, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [MMM01][mmm01] cartridge type.
///
/// A bank-multiplexer used by multi-game compilation carts: on power-up the
/// console boots directly into a fixed sub-game selected by a mask ROM
/// wiring, then the sub-game unlocks [`Mbc1`](super::Mbc1)-style banking
/// relative to an outer bank offset. Only the conventional unlock sequence
/// (a `$0000` write with bit 6 set) is modelled; non-standard unlock
/// sequences used by other menu implementations are not.
///
/// [mmm01]: https://gbdev.io/pandocs/MBC1.html#mmm01
#[derive(Clone, Debug)]
pub struct Mmm01 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Mmm01 {
    /// Constructs a new `Mmm01`.
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

impl Block for Mmm01 {
    fn reset(&mut self) {
        *self.ctl.borrow_mut() = Control::default();
    }
}

impl Mbc for Mmm01 {
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

impl Mmio for Mmm01 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// MMM01 registers.
#[derive(Clone, Debug, Default)]
struct Control {
    /// Whether the MBC1-style banking registers have been unlocked.
    unlocked: bool,
    /// Outer bank offset, latched from the unlock write.
    outer: u8,
    /// RAM Enable.
    ena: bool,
    /// ROM Bank Number (lower 5 bits).
    bank1: u8,
    /// RAM Bank Number / ROM Bank Number (upper bits).
    bank2: u8,
}

/// MMM01 ROM.
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
        let bank = if ctl.unlocked {
            let bank1 = if ctl.bank1 == 0 { 1 } else { ctl.bank1 };
            match addr {
                0x0000..=0x3fff => usize::from(ctl.outer),
                _ => (usize::from(ctl.outer) + ((usize::from(ctl.bank2) << 5) | usize::from(bank1))),
            }
        } else {
            usize::from(ctl.outer)
        };
        let index = (bank % self.nbanks()) << 14 | (usize::from(addr) & 0x3fff);
        self.mem.get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        trace!("Mmm01::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            0x0000..=0x1fff => {
                if !ctl.unlocked && data & 0x40 != 0 {
                    ctl.unlocked = true;
                    ctl.outer = data & 0x3f;
                    debug!("unlocked MMM01 banking, outer bank: {:#04x}", ctl.outer);
                } else {
                    ctl.ena = data & 0x0f == 0x0a;
                }
            }
            0x2000..=0x3fff => ctl.bank1 = data & 0x1f,
            0x4000..=0x5fff => ctl.bank2 = data & 0x03,
            0x6000..=0x7fff => {}
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// MMM01 RAM.
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
        let bank = usize::from(self.ctl.borrow().bank2);
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
