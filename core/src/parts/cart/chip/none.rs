use std::io;

use rugby_arch::mem::{Ram as RamWrap, Rom as RomWrap};
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::{Block, Shared};

use super::{Data, Mbc};

/// Cartridge ROM.
type Rom = RomWrap<Data>;
/// Cartridge RAM.
type Ram = RamWrap<Data>;

/// [No MBC][none] cartridge type.
///
/// [none]: https://gbdev.io/pandocs/nombc.html
#[derive(Clone, Debug)]
pub struct None {
    rom: Shared<Rom>,
    ram: Shared<Ram>,
}

impl None {
    /// Constructs a new `None`.
    #[must_use]
    pub fn new(rom: Data, ram: Data) -> Self {
        Self {
            rom: Shared::new(Rom::from(rom)),
            ram: Shared::new(Ram::from(ram)),
        }
    }
}

impl Block for None {}

impl Mbc for None {
    fn rom(&self) -> Device {
        self.rom.clone().into()
    }

    fn ram(&self) -> Device {
        self.ram.clone().into()
    }

    fn flash(&mut self, buf: &mut dyn io::Read) -> io::Result<usize> {
        buf.read(self.ram.borrow_mut().inner_mut())
    }

    fn dump(&self, buf: &mut dyn io::Write) -> io::Result<usize> {
        buf.write(self.ram.borrow().inner())
    }
}

impl Mmio for None {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0x0000..=0x7fff, self.rom.clone().into());
        bus.map(0xa000..=0xbfff, self.ram.clone().into());
    }

    fn detach(&self, bus: &mut Bus) {
        assert!(bus.unmap(&self.rom.clone().into()));
        assert!(bus.unmap(&self.ram.clone().into()));
    }
}
