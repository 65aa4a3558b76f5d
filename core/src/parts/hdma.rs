//! CGB VRAM DMA (HDMA).

use log::{debug, trace};
use rugby_arch::mem::{Memory, Result};
use rugby_arch::mio::{Bus, Mmio};
use rugby_arch::reg::Register;
use rugby_arch::{Block, Byte, Shared, Word};

use super::cpu::speed;

/// VRAM DMA unit.
///
/// Copies from ROM/RAM into VRAM, either all at once ([`Xfer::General`]) or
/// one 16-byte chunk per HBlank ([`Xfer::HBlank`]). Source and destination are
/// reached through this unit's own private [`Bus`], distinct from the CPU's,
/// so the transfer can proceed while the CPU-facing bus is blacked out.
///
/// A byte is copied once every `2 / `[`speed::Mode::mult`] t-cycles, so a
/// 16-byte chunk takes half the wall-clock time in double-speed mode as it
/// does in single-speed mode.
#[derive(Debug)]
pub struct Hdma {
    /// HDMA registers.
    pub reg: Control,
    // Shared
    bus: Bus,
    key1: Shared<speed::Control>,
    // Internal
    sub: Byte,
}

impl Hdma {
    /// Constructs a new `Hdma`.
    #[must_use]
    pub fn new(bus: Bus, key1: Shared<speed::Control>) -> Self {
        Self {
            reg: Control::new(),
            bus,
            key1,
            sub: 0,
        }
    }

    /// Notifies the unit of HBlank entry, arming the next chunk of an
    /// [`Xfer::HBlank`] transfer, if one is active.
    pub fn hblank(&mut self) {
        self.reg.hdma5.borrow_mut().hblank();
    }
}

impl Block for Hdma {
    fn ready(&self) -> bool {
        self.reg.hdma5.borrow().ready()
    }

    fn cycle(&mut self) {
        if !self.reg.hdma5.borrow().due() {
            return;
        }
        self.sub += 1;
        let mult = self.key1.borrow().speed().mult() as Byte;
        if self.sub < 2 / mult {
            return;
        }
        self.sub = 0;
        let Some((src, dst)) = self.reg.hdma5.borrow_mut().step() else {
            return;
        };
        let data = self.bus.read(src).unwrap_or(0xff);
        let _ = self.bus.write(dst, data);
        trace!("copied: VRAM[${dst:04x}] <- [${src:04x}], data: {data:#04x}");
        if !self.reg.hdma5.borrow().ready() {
            debug!("finished transfer");
        }
    }

    fn reset(&mut self) {
        self.reg.reset();
        self.sub = 0;
    }
}

impl Mmio for Hdma {
    fn attach(&self, bus: &mut Bus) {
        self.reg.attach(bus);
    }
}

/// Transfer kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Xfer {
    /// Transfers the entire block in one go.
    General,
    /// Transfers a single 16-byte chunk per HBlank.
    HBlank,
}

/// HDMA control registers.
///
/// | Address | Size | Name  | Description                 |
/// |:-------:|------|-------|------------------------------|
/// | `$FF51` | Byte | HDMA1 | Source address (high)        |
/// | `$FF52` | Byte | HDMA2 | Source address (low)         |
/// | `$FF53` | Byte | HDMA3 | Destination address (high)   |
/// | `$FF54` | Byte | HDMA4 | Destination address (low)    |
/// | `$FF55` | Byte | HDMA5 | Length / mode / start        |
#[derive(Debug)]
pub struct Control {
    /// Source address (high).
    pub src_hi: Shared<Byte>,
    /// Source address (low).
    pub src_lo: Shared<Byte>,
    /// Destination address (high).
    pub dst_hi: Shared<Byte>,
    /// Destination address (low).
    pub dst_lo: Shared<Byte>,
    /// Length / mode / start.
    pub hdma5: Shared<Hdma5>,
}

impl Control {
    /// Constructs a new `Control`.
    #[must_use]
    pub fn new() -> Self {
        let src_hi = Shared::default();
        let src_lo = Shared::default();
        let dst_hi = Shared::default();
        let dst_lo = Shared::default();
        let hdma5 = Shared::new(Hdma5::new(
            src_hi.clone(),
            src_lo.clone(),
            dst_hi.clone(),
            dst_lo.clone(),
        ));
        Self {
            src_hi,
            src_lo,
            dst_hi,
            dst_lo,
            hdma5,
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

impl Block for Control {
    fn reset(&mut self) {
        self.src_hi.take();
        self.src_lo.take();
        self.dst_hi.take();
        self.dst_lo.take();
        self.hdma5.borrow_mut().reset();
    }
}

impl Mmio for Control {
    fn attach(&self, bus: &mut Bus) {
        bus.map(0xff51..=0xff51, self.src_hi.clone().into());
        bus.map(0xff52..=0xff52, self.src_lo.clone().into());
        bus.map(0xff53..=0xff53, self.dst_hi.clone().into());
        bus.map(0xff54..=0xff54, self.dst_lo.clone().into());
        bus.map(0xff55..=0xff55, self.hdma5.clone().into());
    }
}

/// HDMA5: length, mode, and start/cancel.
#[derive(Debug)]
pub struct Hdma5 {
    src_hi: Shared<Byte>,
    src_lo: Shared<Byte>,
    dst_hi: Shared<Byte>,
    dst_lo: Shared<Byte>,
    state: State,
    /// Length of the most recently cancelled transfer, for readback.
    cancelled: Option<u16>,
}

impl Hdma5 {
    fn new(src_hi: Shared<Byte>, src_lo: Shared<Byte>, dst_hi: Shared<Byte>, dst_lo: Shared<Byte>) -> Self {
        Self {
            src_hi,
            src_lo,
            dst_hi,
            dst_lo,
            state: State::Off,
            cancelled: None,
        }
    }

    fn reset(&mut self) {
        self.state = State::Off;
        self.cancelled = None;
    }

    fn ready(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    fn hblank(&mut self) {
        if let State::Active {
            xfer: Xfer::HBlank,
            pending,
            since_chunk,
            ..
        } = &mut self.state
        {
            if *since_chunk == 0 {
                *pending = true;
            }
        }
    }

    /// Checks whether a byte transfer is due, i.e. the transfer is active and,
    /// for [`Xfer::HBlank`], not between chunks awaiting the next HBlank.
    fn due(&self) -> bool {
        match &self.state {
            State::Off => false,
            State::Active {
                xfer,
                pending,
                since_chunk,
                ..
            } => !(matches!(xfer, Xfer::HBlank) && *since_chunk == 0 && !*pending),
        }
    }

    /// Advances the transfer by one byte. Must only be called when
    /// [`due`](Self::due).
    ///
    /// Returns the `(src, dst)` addresses to copy, if any.
    fn step(&mut self) -> Option<(Word, Word)> {
        let State::Active {
            src,
            dst,
            remaining,
            pending,
            since_chunk,
            ..
        } = &mut self.state
        else {
            return None;
        };
        let out = (*src, *dst);
        *src = src.wrapping_add(1);
        *dst = 0x8000 | (dst.wrapping_add(1) & 0x1fff);
        *remaining -= 1;
        *since_chunk += 1;
        if *since_chunk == 0x10 {
            *since_chunk = 0;
            *pending = false;
        }
        if *remaining == 0 {
            self.state = State::Off;
        }
        Some(out)
    }

    fn store_hdma5(&mut self, value: Byte) {
        let hblank = value & 0x80 != 0;
        let len = u16::from(value & 0x7f) + 1;
        if !hblank {
            if let State::Active {
                xfer: Xfer::HBlank,
                remaining,
                ..
            } = self.state
            {
                // Cancel the active HBlank transfer; preserve the remaining
                // length for HDMA5 readback.
                self.cancelled = Some(remaining);
                self.state = State::Off;
                return;
            }
        }
        self.cancelled = None;
        let src = Word::from_be_bytes([self.src_hi.load(), self.src_lo.load()]) & 0xfff0;
        let dst = 0x8000 | (Word::from_be_bytes([self.dst_hi.load(), self.dst_lo.load()]) & 0x1ff0);
        self.state = State::Active {
            xfer: if hblank { Xfer::HBlank } else { Xfer::General },
            src,
            dst,
            remaining: len * 0x10,
            pending: !hblank,
            since_chunk: 0,
        };
    }

    fn load_hdma5(&self) -> Byte {
        match (&self.state, self.cancelled) {
            (State::Active { remaining, .. }, _) => (((*remaining - 1) / 0x10) as Byte) & 0x7f,
            (State::Off, Some(remaining)) => 0x80 | ((((remaining - 1) / 0x10) as Byte) & 0x7f),
            (State::Off, None) => 0xff,
        }
    }
}

impl Memory for Hdma5 {
    fn read(&self, _: Word) -> Result<Byte> {
        Ok(self.load())
    }

    fn write(&mut self, _: Word, data: Byte) -> Result<()> {
        self.store(data);
        Ok(())
    }
}

impl Register for Hdma5 {
    type Value = Byte;

    fn load(&self) -> Self::Value {
        self.load_hdma5()
    }

    fn store(&mut self, value: Self::Value) {
        self.store_hdma5(value);
    }
}

/// Transfer state.
#[derive(Debug, Default)]
enum State {
    /// No transfer in progress.
    #[default]
    Off,
    /// Transfer in progress.
    Active {
        /// Transfer kind.
        xfer: Xfer,
        /// Next source address.
        src: Word,
        /// Next destination address.
        dst: Word,
        /// Bytes remaining in the whole transfer.
        remaining: u16,
        /// Whether a chunk is currently due to be copied.
        pending: bool,
        /// Bytes copied so far in the current 16-byte chunk.
        since_chunk: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rugby_arch::mem::Ram;
    use rugby_arch::mio::Device;

    fn setup() -> Hdma {
        let mut bus = Bus::new();
        bus.map(0x0000..=0xffff, Device::dev(Ram::from([0xaau8; 0x10000])));
        Hdma::new(bus, Shared::new(speed::Control::new()))
    }

    #[test]
    fn double_speed_halves_byte_rate() {
        let mut hdma = setup();
        hdma.key1.borrow_mut().store(0x01);
        hdma.key1.borrow_mut().switch();
        hdma.reg.hdma5.borrow_mut().store(0x00); // general-purpose, 1 block
        for _ in 0..16 {
            assert!(hdma.ready());
            hdma.cycle(); // byte copied every tick in double speed
        }
        assert!(!hdma.ready());
    }

    #[test]
    fn general_transfer_copies_whole_block() {
        let mut hdma = setup();
        hdma.reg.src_hi.store(0x10);
        hdma.reg.src_lo.store(0x00);
        hdma.reg.dst_hi.store(0x80);
        hdma.reg.dst_lo.store(0x00);
        hdma.reg.hdma5.borrow_mut().store(0x00); // general-purpose, 1 block (16 bytes)
        assert!(hdma.ready());
        for _ in 0..16 {
            assert!(hdma.ready());
            hdma.cycle(); // consumed as pacing tick, no byte yet
            assert!(hdma.ready());
            hdma.cycle(); // byte copied
        }
        assert!(!hdma.ready());
    }

    #[test]
    fn hblank_transfer_waits_between_chunks() {
        let mut hdma = setup();
        hdma.reg.src_hi.store(0x10);
        hdma.reg.dst_hi.store(0x80);
        hdma.reg.hdma5.borrow_mut().store(0x80 | 0x01); // hblank, 2 blocks (32 bytes)
        assert!(hdma.ready());
        hdma.cycle(); // no-op; no hblank triggered yet
        assert!(hdma.ready());
        hdma.hblank();
        for _ in 0..32 {
            hdma.cycle();
        }
        assert!(hdma.ready()); // second chunk still pending
        hdma.cycle(); // no-op; waiting for next hblank
        hdma.hblank();
        for _ in 0..32 {
            hdma.cycle();
        }
        assert!(!hdma.ready());
    }

    #[test]
    fn cancel_preserves_remaining_length() {
        let mut hdma = setup();
        hdma.reg.hdma5.borrow_mut().store(0x80 | 0x03); // hblank, 4 blocks
        hdma.hblank();
        hdma.cycle();
        hdma.reg.hdma5.borrow_mut().store(0x00 & !0x80); // cancel
        let readback = hdma.reg.hdma5.borrow().load();
        assert_eq!(readback & 0x80, 0x80);
    }
}
