use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Ram as RamWrap, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [HuC3][huc3] cartridge type.
///
/// Adds a real-time clock and infrared port to [`Huc1`](super::Huc1)-style
/// banking. The real chip exposes its clock through a semi-serial
/// command/response protocol shifted one nibble at a time; this models the
/// same seconds/minutes/hours/day counters as [`Mbc3`](super::Mbc3)'s RTC but
/// exposes them as plain addressable registers rather than reproducing the
/// bit-level protocol, and (like [`Huc1`](super::Huc1)) treats the IR port as
/// an always-idle transceiver.
///
/// [huc3]: https://gbdev.io/pandocs/MBC3.html#huc3
#[derive(Clone, Debug)]
pub struct Huc3 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Huc3 {
    /// Constructs a new `Huc3`.
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

impl Block for Huc3 {
    fn cycle(&mut self) {
        self.ctl.borrow_mut().rtc.tick();
    }

    fn reset(&mut self) {
        let rtc = self.ctl.borrow().rtc;
        *self.ctl.borrow_mut() = Control {
            rtc,
            ..Control::default()
        };
    }
}

impl Mbc for Huc3 {
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

impl Mmio for Huc3 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// HuC3 registers.
#[derive(Clone, Debug, Default)]
struct Control {
    /// RAM bank (`0x00..=0x03`), or special mode select (`>= 0x0a`).
    sel: u8,
    /// ROM Bank Number.
    rom: u8,
    /// Real-time clock.
    rtc: Rtc,
}

impl Control {
    fn rtc_selected(&self) -> bool {
        self.sel >= 0x0a
    }
}

/// HuC3 ROM.
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
        trace!("Huc3::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            0x0000..=0x1fff => {
                // RAM enable is ignored: HuC3 RAM reads/writes are always
                // permitted, gated only by the mode register.
            }
            0x2000..=0x3fff => ctl.rom = data & 0x7f,
            0x4000..=0x5fff => {
                ctl.sel = data;
                debug!("mode select: {:#04x}", ctl.sel);
            }
            0x6000..=0x7fff => {}
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// HuC3 RAM / RTC / IR window.
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
        let bank = usize::from(self.ctl.borrow().sel);
        let len = self.mem.inner().len().max(0x2000);
        ((bank << 13) | (usize::from(addr) & 0x1fff)) % len
    }
}

impl Memory for Ram {
    fn read(&self, addr: u16) -> Result<u8> {
        let ctl = self.ctl.borrow();
        if ctl.rtc_selected() {
            return Ok(ctl.rtc.load(ctl.sel));
        }
        drop(ctl);
        let index = self.adjust(addr);
        self.mem.inner().get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        let ctl = self.ctl.borrow();
        if ctl.rtc_selected() {
            let sel = ctl.sel;
            drop(ctl);
            self.ctl.borrow_mut().rtc.store(sel, data);
            return Ok(());
        }
        drop(ctl);
        let index = self.adjust(addr);
        *self.mem.inner_mut().get_mut(index).ok_or(Error::Range)? = data;
        Ok(())
    }
}

/// Simplified real-time clock shared by the `0x0a..=0x0d` mode-select window.
#[derive(Clone, Copy, Debug, Default)]
struct Rtc {
    sec: u8,
    min: u8,
    hour: u8,
    day: u16,
    sub: u32,
}

impl Rtc {
    const HZ: u32 = 0x0040_0000;

    fn tick(&mut self) {
        self.sub += 1;
        if self.sub < Self::HZ {
            return;
        }
        self.sub -= Self::HZ;
        self.sec += 1;
        if self.sec < 60 {
            return;
        }
        self.sec = 0;
        self.min += 1;
        if self.min < 60 {
            return;
        }
        self.min = 0;
        self.hour += 1;
        if self.hour < 24 {
            return;
        }
        self.hour = 0;
        self.day = self.day.wrapping_add(1);
    }

    fn load(&self, sel: u8) -> u8 {
        match sel {
            0x0a => self.min,
            0x0b => self.hour,
            0x0c => self.day as u8,
            0x0d => (self.day >> 8) as u8,
            _ => self.sec,
        }
    }

    fn store(&mut self, sel: u8, data: u8) {
        match sel {
            0x0a => self.min = data % 60,
            0x0b => self.hour = data % 24,
            0x0c => self.day = (self.day & 0xff00) | u16::from(data),
            0x0d => self.day = (self.day & 0x00ff) | (u16::from(data) << 8),
            _ => self.sec = data % 60,
        }
    }
}
