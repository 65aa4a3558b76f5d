//! Machine model.
//!
//! Wires every [hardware part](crate::parts) into a single runnable machine.
//! The same [`GameBoy`] aggregate models both DMG and CGB consoles: CGB-only
//! facilities (the speed switch, HDMA) are always present, but sit inert
//! unless the loaded cartridge actually drives them.

use rugby_arch::dev::Null;
use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::reg::Port;
use rugby_arch::{Block, Shared};

use crate::api::core::{has, Core};
use crate::api::part::proc::Processor;
use crate::parts::apu::Apu;
use crate::parts::boot::{self, Boot};
use crate::parts::cart::Cartridge;
use crate::parts::cpu::sm83::{Cpu, Select16};
use crate::parts::cpu::speed;
use crate::parts::dma::Dma;
use crate::parts::hdma::Hdma;
use crate::parts::joypad::Joypad;
use crate::parts::pic::Pic;
use crate::parts::ppu::{Compat, Oam, Ppu, Vram};
use crate::parts::serial::Serial;
use crate::parts::timer::Timer;

pub use crate::parts::joypad::Button;

/// DMG post-boot register file, as left behind by the real boot ROM.
const DMG_POSTBOOT: [(Select16, u16); 5] = [
    (Select16::AF, 0x01b0),
    (Select16::BC, 0x0013),
    (Select16::DE, 0x00d8),
    (Select16::HL, 0x014d),
    (Select16::SP, 0xfffe),
];

/// CGB post-boot register file.
///
/// <https://gbdev.io/pandocs/Power_Up_Sequence.html#cpu-registers>
const CGB_POSTBOOT: [(Select16, u16); 5] = [
    (Select16::AF, 0x1180),
    (Select16::BC, 0x0000),
    (Select16::DE, 0xff56),
    (Select16::HL, 0x000d),
    (Select16::SP, 0xfffe),
];

/// A fully wired Game Boy.
#[derive(Debug)]
pub struct GameBoy {
    // State
    clock: usize,
    // Processors
    pub(crate) apu: Apu,
    pub(crate) cpu: Cpu,
    pub(crate) ppu: Ppu,
    // Peripherals
    pub(crate) joypad: Joypad,
    pub(crate) serial: Serial,
    pub(crate) timer: Timer,
    // Transfer engines
    pub(crate) dma: Dma,
    pub(crate) hdma: Hdma,
    // Memory
    pub(crate) cart: Option<Cartridge>,
    pub(crate) boot: Option<boot::Chip>,
    pub(crate) vram: Shared<Vram>,
    pub(crate) oam: Shared<Oam>,
    // Shared
    pub(crate) key1: Shared<speed::Control>,
    pub(crate) pic: Pic,
}

impl GameBoy {
    /// Constructs a new `GameBoy`, optionally with a boot ROM and cartridge
    /// already loaded.
    ///
    /// Without a boot ROM, the CPU's register file is synthesized as though
    /// the (unmodelled) boot sequence had already completed, matching the
    /// state either console leaves behind at `$0100`.
    #[must_use]
    pub fn new(boot: Option<Boot>, cart: Option<Cartridge>) -> Self {
        let pic = Pic::new();
        let key1 = Shared::new(speed::Control::new());
        let vram = Shared::default();
        let oam = Shared::default();
        let boot = boot.map(boot::Chip::new);

        // The CPU owns the single bus it reads and writes through; it starts
        // empty and is populated below, once every component exists to
        // attach its own registers onto it.
        let cpu = Cpu::new(Bus::new(), pic.line.clone(), key1.clone());
        let apu = Apu::new();
        let joypad = Joypad::new(pic.line.clone());
        let serial = Serial::new(pic.line.clone());
        let timer = Timer::new(pic.line.clone());

        // `Dma`/`Hdma` each read from their own private bus so a background
        // transfer can proceed while the CPU-facing bus is locked; these
        // must be built fresh whenever the cartridge changes, since they
        // cannot be remapped after construction.
        let dma = Dma::new(Self::xfer_bus(cart.as_ref(), &cpu), oam.clone());
        let compat = if cart.as_ref().is_some_and(|cart| cart.header().cgb) {
            Compat::Cgb
        } else {
            Compat::Dmg
        };
        let ppu = Ppu::new(
            vram.clone(),
            oam.clone(),
            dma.reg.clone(),
            pic.line.clone(),
            compat,
        );
        let hdma = Hdma::new(Self::xfer_bus(cart.as_ref(), &cpu), key1.clone());

        let mut gb = Self {
            clock: 0,
            apu,
            cpu,
            ppu,
            joypad,
            serial,
            timer,
            dma,
            hdma,
            cart,
            boot,
            vram,
            oam,
            key1,
            pic,
        };
        gb.connect();
        if gb.boot.is_none() {
            gb.postboot();
        }
        gb
    }

    /// Builds a private bus for a background transfer engine (DMA/HDMA),
    /// reaching the cartridge and work RAM, but not the CPU's own registers.
    fn xfer_bus(cart: Option<&Cartridge>, cpu: &Cpu) -> Bus {
        let mut bus = Bus::new();
        bus.map(0x0000..=0xffff, Device::dev(Null::with(0xff)));
        if let Some(cart) = cart {
            cart.attach(&mut bus);
        }
        cpu.mem.attach(&mut bus);
        bus
    }

    /// (Re)connects every component onto the CPU's bus.
    fn connect(&mut self) {
        let bus = &mut self.cpu.bus;
        bus.clear();
        // Unmapped addresses read back as `0xff`.
        bus.map(0x0000..=0xffff, Device::dev(Null::with(0xff)));
        // Memory
        if let Some(boot) = &self.boot {
            boot.attach(bus);
        }
        if let Some(cart) = &self.cart {
            cart.attach(bus);
        }
        bus.map(0x8000..=0x9fff, self.vram.clone().into());
        bus.map(0xfe00..=0xfe9f, self.oam.clone().into());
        self.cpu.mem.attach(bus);
        // Processors
        self.apu.attach(bus);
        self.ppu.attach(bus);
        // Peripherals
        self.joypad.attach(bus);
        self.serial.attach(bus);
        self.timer.attach(bus);
        // Transfer engines
        self.hdma.attach(bus);
        // Shared
        self.pic.attach(bus);
    }

    /// Synthesizes the CPU register file left behind by a completed boot
    /// sequence, and disables the (absent) boot ROM overlay.
    fn postboot(&mut self) {
        let cgb = self.cart.as_ref().is_some_and(|cart| cart.header().cgb);
        let regs = if cgb { &CGB_POSTBOOT } else { &DMG_POSTBOOT };
        for &(reg, value) in regs {
            Port::<u16>::store(&mut self.cpu, reg, value);
        }
        self.cpu.goto(0x0100);
        self.cpu.write(0xff40, 0x91); // enable the LCD
        self.cpu.write(0xff50, 0x01); // disable the boot ROM overlay
    }

    /// Loads a cartridge, replacing (and returning) any already loaded.
    ///
    /// `Dma`/`Hdma` are rebuilt against the newly loaded cartridge, since
    /// neither exposes a way to remap its private bus after construction.
    pub fn load(&mut self, cart: Cartridge) -> Option<Cartridge> {
        let prev = self.cart.replace(cart);
        self.dma = Dma::new(Self::xfer_bus(self.cart.as_ref(), &self.cpu), self.oam.clone());
        self.ppu.reg.dma = self.dma.reg.clone();
        self.hdma = Hdma::new(
            Self::xfer_bus(self.cart.as_ref(), &self.cpu),
            self.key1.clone(),
        );
        self.connect();
        prev
    }

    /// Ejects the loaded cartridge, if any.
    pub fn eject(&mut self) -> Option<Cartridge> {
        let cart = self.cart.take();
        self.dma = Dma::new(Self::xfer_bus(None, &self.cpu), self.oam.clone());
        self.ppu.reg.dma = self.dma.reg.clone();
        self.hdma = Hdma::new(Self::xfer_bus(None, &self.cpu), self.key1.clone());
        self.connect();
        cart
    }

    /// Gets a reference to the loaded cartridge, if any.
    #[must_use]
    pub fn cart(&self) -> Option<&Cartridge> {
        self.cart.as_ref()
    }

    /// Gets the `GameBoy`'s CPU.
    #[must_use]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutably gets the `GameBoy`'s CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Gets the `GameBoy`'s PPU.
    #[must_use]
    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    /// Mutably gets the `GameBoy`'s PPU.
    pub fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    /// Gets the `GameBoy`'s APU.
    #[must_use]
    pub fn apu(&self) -> &Apu {
        &self.apu
    }

    /// Mutably gets the `GameBoy`'s APU.
    pub fn apu_mut(&mut self) -> &mut Apu {
        &mut self.apu
    }

    /// Gets the `GameBoy`'s joypad.
    #[must_use]
    pub fn joypad(&self) -> &Joypad {
        &self.joypad
    }

    /// Mutably gets the `GameBoy`'s joypad.
    pub fn joypad_mut(&mut self) -> &mut Joypad {
        &mut self.joypad
    }

    /// Gets the `GameBoy`'s serial port.
    #[must_use]
    pub fn serial(&self) -> &Serial {
        &self.serial
    }

    /// Mutably gets the `GameBoy`'s serial port.
    pub fn serial_mut(&mut self) -> &mut Serial {
        &mut self.serial
    }

    /// Gets the `GameBoy`'s timer.
    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Mutably gets the `GameBoy`'s timer.
    pub fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Block for GameBoy {
    #[rustfmt::skip]
    fn reset(&mut self) {
        // Processors
        self.apu.reset();
        self.cpu.reset();
        self.ppu.reset();
        // Peripherals
        self.joypad.reset();
        self.serial.reset();
        self.timer.reset();
        // Transfer engines
        self.dma.reset();
        self.hdma.reset();
        // Memory
        if let Some(cart) = &mut self.cart { cart.reset(); }
        // Shared
        self.key1.borrow_mut().reset();
        self.pic.reset();

        self.connect();
        if self.boot.is_none() {
            self.postboot();
        }
    }

    fn cycle(&mut self) {
        // Wake a halted CPU once an interrupt is pending.
        if !self.cpu.ready() && self.pic.line.pending() {
            self.cpu.wake();
        }

        // While OAM DMA is in progress, the CPU's bus can only reach HRAM;
        // every other read returns `0xff` and every other write is dropped.
        if self.dma.ready() {
            self.cpu.bus.busy_except(0xff80..=0xfffe);
        } else {
            self.cpu.bus.free();
        }

        // The CPU runs at a rate of `speed::Mode::mult` times the base
        // 1 MiHz clock; everything else ticks at the fixed base rate, as on
        // real hardware (only the CPU's own throughput is doubled).
        let mult = self.key1.borrow().speed().mult();
        if self.clock % (4 / mult) == 0 && self.cpu.ready() {
            self.cpu.cycle();
        }

        // PPU runs on a 4 MiHz clock.
        if self.ppu.ready() {
            self.ppu.cycle();
        }

        // OAM DMA and HDMA run alongside everything else; both gate their
        // own actual byte transfers internally.
        if self.dma.ready() {
            self.dma.cycle();
        }
        self.hdma.cycle();

        // Serial runs on an 8192 Hz clock.
        if self.clock % 0x200 == 0 && self.serial.ready() {
            self.serial.cycle();
        }

        // Timer and APU tick every cycle of the base 4 MiHz clock.
        self.timer.cycle();
        self.apu.cycle();

        // The cartridge ticks its own mapper (MBC3/HuC3 real-time clocks
        // advance here) alongside everything else.
        if let Some(cart) = &mut self.cart {
            cart.cycle();
        }

        self.clock = self.clock.wrapping_add(1);
    }
}

impl Core for GameBoy {}

impl has::Audio for GameBoy {
    type Audio = Apu;

    fn audio(&self) -> &Self::Audio {
        &self.apu
    }

    fn audio_mut(&mut self) -> &mut Self::Audio {
        &mut self.apu
    }
}

impl has::Joypad for GameBoy {
    type Joypad = Joypad;

    fn joypad(&self) -> &Self::Joypad {
        &self.joypad
    }

    fn joypad_mut(&mut self) -> &mut Self::Joypad {
        &mut self.joypad
    }
}

impl has::Processor for GameBoy {
    type Proc = Cpu;

    fn proc(&self) -> &Self::Proc {
        &self.cpu
    }

    fn proc_mut(&mut self) -> &mut Self::Proc {
        &mut self.cpu
    }
}

impl has::Serial for GameBoy {
    type Serial = Serial;

    fn serial(&self) -> &Self::Serial {
        &self.serial
    }

    fn serial_mut(&mut self) -> &mut Self::Serial {
        &mut self.serial
    }
}

impl has::Video for GameBoy {
    type Video = Ppu;

    fn video(&self) -> &Self::Video {
        &self.ppu
    }

    fn video_mut(&mut self) -> &mut Self::Video {
        &mut self.ppu
    }
}

#[cfg(test)]
mod tests {
    use rugby_arch::reg::Register;

    use super::*;

    #[test]
    fn no_boot_rom_synthesizes_postboot_state() {
        let gb = GameBoy::new(None, None);
        assert_eq!(Port::<u16>::load(&gb.cpu, Select16::PC), 0x0100);
        assert_eq!(Port::<u16>::load(&gb.cpu, Select16::SP), 0xfffe);
    }

    #[test]
    fn cycle_advances_clock() {
        let mut gb = GameBoy::new(None, None);
        for _ in 0..8 {
            gb.cycle();
        }
        assert_eq!(gb.clock, 8);
    }

    #[test]
    fn double_speed_runs_without_panicking() {
        let mut gb = GameBoy::new(None, None);
        gb.key1.borrow_mut().store(0x01);
        gb.key1.borrow_mut().switch();
        assert_eq!(gb.key1.borrow().speed(), speed::Mode::Double);
        for _ in 0..64 {
            gb.cycle();
        }
        assert_eq!(gb.clock, 64);
    }

    #[test]
    fn load_then_eject_roundtrips() {
        let mut gb = GameBoy::new(None, None);
        assert!(gb.cart().is_none());
        let prev = gb.load(Cartridge::blank());
        assert!(prev.is_none());
        assert!(gb.cart().is_some());
        let cart = gb.eject();
        assert!(cart.is_some());
        assert!(gb.cart().is_none());
    }
}
