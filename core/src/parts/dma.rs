//! Direct memory access.

use log::{debug, trace, warn};
use rugby_arch::mem::Memory;
use rugby_arch::mio::Bus;
use rugby_arch::reg::Register;
use rugby_arch::{Block, Byte, Shared, Word};

pub use super::ppu::Oam;

/// Direct memory access unit.
///
/// Transfers 160 bytes from a source page into OAM, 4 t-cycles per byte. The
/// source is read through this unit's own private [`Bus`], which is never
/// locked, so the transfer can proceed while the CPU-facing bus is blacked
/// out; see [`Dma::ready`].
#[derive(Debug)]
pub struct Dma {
    /// DMA register.
    pub reg: Shared<Control>,
    // Memory
    oam: Shared<Oam>,
    // Shared
    bus: Bus,
}

impl Dma {
    /// Constructs a new `Dma`
    #[must_use]
    pub fn new(bus: Bus, oam: Shared<Oam>) -> Self {
        Self {
            // Control
            reg: Shared::default(),
            // Memory
            oam,
            // Shared
            bus,
        }
    }
}

impl Block for Dma {
    fn ready(&self) -> bool {
        !matches!(self.reg.borrow().state, State::Off)
    }

    fn cycle(&mut self) {
        // Determine next state
        let state = match self.reg.borrow().state {
            State::Off => {
                unreachable!("cannot to cycle DMA while disabled");
            }
            State::Req(src) => {
                // Initiate transfer; this tick counts as the first of the
                // 4 t-cycles spent transferring the first byte.
                trace!("started: 0xfe00 <- {src:#04x}00");
                State::On {
                    hi: src,
                    lo: 0x00,
                    sub: 1,
                }
            }
            State::On { hi, lo, sub } if sub < 4 => State::On {
                hi,
                lo,
                sub: sub + 1,
            },
            State::On { hi, lo, .. } => {
                // Transfer single byte
                let addr = u16::from_be_bytes([hi, lo]);
                let data = self.bus.read(addr).unwrap_or(0xff);
                self.oam.write(Word::from(lo), data).unwrap();
                trace!("copied: 0xfe{lo:02x} <- {addr:#06x}, data: {data:#04x}");
                // Increment transfer index
                let lo = lo.saturating_add(1);
                if usize::from(lo) < self.oam.borrow().inner().len() {
                    State::On { hi, lo, sub: 1 }
                } else {
                    // Complete transfer
                    debug!("finished: 0xfe00 <- {hi:#04x}00");
                    State::Off
                }
            }
        };
        // Update the state
        self.reg.borrow_mut().state = state;
    }

    fn reset(&mut self) {
        self.reg.reset();
    }
}

/// DMA control register.
#[derive(Debug, Default)]
pub struct Control {
    /// DMA progress.
    state: State,
    /// DMA source page.
    mpage: Byte,
}

impl Block for Control {
    fn reset(&mut self) {
        std::mem::take(self);
    }
}

impl Memory for Control {
    fn read(&self, _: Word) -> rugby_arch::mem::Result<Byte> {
        Ok(self.load())
    }

    fn write(&mut self, _: Word, data: Byte) -> rugby_arch::mem::Result<()> {
        self.store(data);
        Ok(())
    }
}

impl Register for Control {
    type Value = Byte;

    fn load(&self) -> Self::Value {
        self.mpage.load()
    }

    fn store(&mut self, value: Self::Value) {
        match self.state {
            State::Off => {
                // Request a new transfer
                self.state = State::Req(value);
                debug!("request: 0xfe00 <- {:#04x}00", value);
            }
            State::Req(_) | State::On { .. } => {
                warn!("ignored request; already in progress");
            }
        }
        // Always update stored value
        self.mpage.store(value);
    }
}

/// DMA Transfer State.
#[derive(Debug, Default)]
enum State {
    /// Disabled.
    #[default]
    Off,
    /// Requested.
    Req(Byte),
    /// In-progress.
    On {
        /// Source page (high byte of the source address).
        hi: Byte,
        /// Transfer index (also the destination OAM offset).
        lo: Byte,
        /// Sub-byte t-cycle counter (`1..=4`); a byte is transferred when it
        /// reaches 4.
        sub: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::ppu::Oam;

    fn setup() -> Dma {
        Dma::new(Bus::new(), Shared::new(Oam::from([0u8; 0xa0])))
    }

    #[test]
    fn transfer_takes_640_cycles() {
        let mut dma = setup();
        dma.reg.borrow_mut().store(0xc0);
        assert!(dma.ready());
        for _ in 0..640 {
            assert!(dma.ready());
            dma.cycle();
        }
        assert!(!dma.ready());
    }
}
