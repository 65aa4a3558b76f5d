use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [MBC7][mbc7] cartridge type.
///
/// Adds a 2-axis accelerometer and a small battery-backed EEPROM (used by
/// Kirby Tilt 'n' Tumble and Command Master). The EEPROM is modelled as a
/// flat, directly-addressable byte array rather than bit-clocked through the
/// real chip's 93LC56 serial interface; reads/writes at `$A080..=$A0FF`
/// index straight into it.
///
/// [mbc7]: https://gbdev.io/pandocs/MBC7.html
#[derive(Clone, Debug)]
pub struct Mbc7 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Mbc7 {
    /// Constructs a new `Mbc7`.
    #[must_use]
    pub fn new(rom: Data, _ram: Data) -> Self {
        let ctl = Shared::new(Control::default());
        Self {
            rom: Shared::new(Rom::new(ctl.clone(), rom)),
            ram: Shared::new(Ram::new(ctl.clone())),
            ctl,
        }
    }

    /// Sets the accelerometer's tilt, where `0x8000` is level on each axis.
    pub fn tilt(&mut self, x: u16, y: u16) {
        let mut ctl = self.ctl.borrow_mut();
        ctl.x = x;
        ctl.y = y;
    }
}

impl Block for Mbc7 {
    fn reset(&mut self) {
        let eeprom = std::mem::take(&mut self.ctl.borrow_mut().eeprom);
        *self.ctl.borrow_mut() = Control {
            eeprom,
            ..Control::default()
        };
    }
}

impl Mbc for Mbc7 {
    fn rom(&self) -> Device {
        self.rom.clone().into()
    }

    fn ram(&self) -> Device {
        self.ram.clone().into()
    }

    fn flash(&mut self, buf: &mut dyn io::Read) -> io::Result<usize> {
        buf.read(&mut self.ctl.borrow_mut().eeprom)
    }

    fn dump(&self, buf: &mut dyn io::Write) -> io::Result<usize> {
        buf.write(&self.ctl.borrow().eeprom)
    }
}

impl Mmio for Mbc7 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// Size, in bytes, of the onboard EEPROM.
const EEPROM_SIZE: usize = 0x100;

/// MBC7 registers.
#[derive(Clone, Debug)]
struct Control {
    /// RAM/accelerometer Enable.
    ena: bool,
    /// ROM Bank Number.
    rom: u8,
    /// Accelerometer latch state.
    latch: bool,
    /// Accelerometer X axis (`0x8000` centered).
    x: u16,
    /// Accelerometer Y axis (`0x8000` centered).
    y: u16,
    /// Onboard EEPROM.
    eeprom: Data,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            ena: false,
            rom: 0,
            latch: false,
            x: 0x8000,
            y: 0x8000,
            eeprom: vec![0xff; EEPROM_SIZE].into_boxed_slice(),
        }
    }
}

/// MBC7 ROM.
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
                let bank = usize::from(self.ctl.borrow().rom.max(1));
                (bank % self.nbanks()) << 14 | (usize::from(addr) & 0x3fff)
            }
            _ => return Err(Error::Range),
        };
        self.mem.get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        trace!("Mbc7::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            0x0000..=0x1fff => {
                ctl.ena = data & 0x0f == 0x0a;
                debug!("RAM/accelerometer Enable: {}", ctl.ena);
            }
            0x2000..=0x3fff => ctl.rom = data & 0x7f,
            0x4000..=0x7fff => {}
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// MBC7's `$A000..=$BFFF` window: accelerometer sensor registers at
/// `$A000..=$A00F`, EEPROM at `$A080..=$A0FF`.
#[derive(Debug)]
struct Ram {
    ctl: Shared<Control>,
}

impl Ram {
    fn new(ctl: Shared<Control>) -> Self {
        Self { ctl }
    }
}

impl Memory for Ram {
    fn read(&self, addr: u16) -> Result<u8> {
        let ctl = self.ctl.borrow();
        if !ctl.ena {
            return Err(Error::Disabled);
        }
        match addr & 0x00ff {
            0x04 => Ok(ctl.x as u8),
            0x05 => Ok((ctl.x >> 8) as u8),
            0x06 => Ok(ctl.y as u8),
            0x07 => Ok((ctl.y >> 8) as u8),
            byte @ 0x80..=0xff => Ok(ctl.eeprom[usize::from(byte - 0x80)]),
            _ => Ok(0x00),
        }
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        let mut ctl = self.ctl.borrow_mut();
        if !ctl.ena {
            return Err(Error::Disabled);
        }
        match addr & 0x00ff {
            0x02 => {
                // Latches the accelerometer on a 1 -> 0 transition.
                let next = data & 0x01 != 0;
                if ctl.latch && !next {
                    debug!("latched accelerometer: x={:#06x}, y={:#06x}", ctl.x, ctl.y);
                }
                ctl.latch = next;
            }
            byte @ 0x80..=0xff => ctl.eeprom[usize::from(byte - 0x80)] = data,
            _ => {}
        }
        Ok(())
    }
}
