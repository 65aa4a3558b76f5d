use std::io;

use log::{debug, trace};
use rugby_arch::mem::{Error, Memory, Ram as RamWrap, Result};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// [HuC1][huc1] cartridge type.
///
/// Banking is identical to [`Mbc1`](super::Mbc1) without the large-ROM
/// banking-mode quirk; the 2-bit register at `$4000..=$5FFF` only ever
/// selects a RAM bank. The infrared LED/photoreceiver pair exposed through
/// the RAM window when `$0000..=$1FFF` is written `0x0E` is modelled as an
/// always-idle transceiver (no light detected, nothing transmitted), since
/// this emulator has no link-cable peer to exchange IR signals with.
///
/// [huc1]: https://gbdev.io/pandocs/MBC1.html#huc1
#[derive(Clone, Debug)]
pub struct Huc1 {
    ctl: Shared<Control>,
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl Huc1 {
    /// Constructs a new `Huc1`.
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

impl Block for Huc1 {
    fn reset(&mut self) {
        *self.ctl.borrow_mut() = Control::default();
    }
}

impl Mbc for Huc1 {
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

impl Mmio for Huc1 {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}

/// HuC1 registers.
#[derive(Clone, Debug, Default)]
struct Control {
    /// Whether the `$A000..=$BFFF` window addresses RAM (`false`) or the IR
    /// port (`true`).
    ir: bool,
    /// ROM Bank Number.
    rom: u8,
    /// RAM Bank Number.
    ram: u8,
}

/// HuC1 ROM.
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
        trace!("Huc1::write(${addr:04x}, {data:#04x})");
        let mut ctl = self.ctl.borrow_mut();
        match addr {
            0x0000..=0x1fff => {
                ctl.ir = data & 0x0f == 0x0e;
                debug!("IR mode: {}", ctl.ir);
            }
            0x2000..=0x3fff => ctl.rom = data & 0x3f,
            0x4000..=0x5fff => ctl.ram = data & 0x03,
            0x6000..=0x7fff => {}
            _ => return Err(Error::Range),
        }
        Ok(())
    }
}

/// HuC1 RAM / IR port.
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
        if self.ctl.borrow().ir {
            // No photoreceiver input: read back as "no light detected".
            return Ok(0x01);
        }
        let index = self.adjust(addr);
        self.mem.inner().get(index).ok_or(Error::Range).copied()
    }

    fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        if self.ctl.borrow().ir {
            // LED writes are accepted but go nowhere.
            return Ok(());
        }
        let index = self.adjust(addr);
        *self.mem.inner_mut().get_mut(index).ok_or(Error::Range)? = data;
        Ok(())
    }
}
