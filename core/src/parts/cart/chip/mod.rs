//! Memory bank controllers.
//!
//! Implementations of various kinds of cartridge hardware.

#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;
use std::io;

use rugby_arch::mio::{Bus, Device, Mmio};
use rugby_arch::Block;

use super::header::Info;
use super::{Error, Header, Result};

mod huc1;
mod huc3;
mod mbc1;
mod mbc2;
mod mbc3;
mod mbc5;
mod mbc6;
mod mbc7;
mod mmm01;
mod none;

pub use self::huc1::Huc1;
pub use self::huc3::Huc3;
pub use self::mbc1::Mbc1;
pub use self::mbc2::Mbc2;
pub use self::mbc3::Mbc3;
pub use self::mbc5::Mbc5;
pub use self::mbc6::Mbc6;
pub use self::mbc7::Mbc7;
pub use self::mmm01::Mmm01;
pub use self::none::None;

/// Memory data.
type Data = Box<[u8]>;

/// Memory bank controller.
pub trait Mbc: Block + Debug + Mmio {
    /// Gets the contents of the cartridge's ROM.
    fn rom(&self) -> Device;

    /// Gets the contents of the cartridge's RAM.
    fn ram(&self) -> Device;

    /// Flashes data onto the cartridge's external RAM, ignoring banking.
    ///
    /// # Errors
    ///
    /// May generate an I/O error indicating that the operation could not be
    /// completed. If an error is returned then no bytes were read.
    fn flash(&mut self, buf: &mut dyn io::Read) -> io::Result<usize>;

    /// Dumps the entirety of the cartridge's external RAM, ignoring banking.
    ///
    /// # Errors
    ///
    /// May generate an I/O error indicating that the operation could not be
    /// completed. If an error is returned then no bytes were written.
    fn dump(&self, buf: &mut dyn io::Write) -> io::Result<usize>;
}

/// Cartridge body.
///
/// Contains the cartridge's ROM and RAM, modelling cartridge-specific hardware.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub(crate) enum Chip {
    None(None),
    Mbc1(Mbc1),
    Mbc2(Mbc2),
    Mbc3(Mbc3),
    Mbc5(Mbc5),
    Mbc6(Mbc6),
    Mbc7(Mbc7),
    Mmm01(Mmm01),
    Huc1(Huc1),
    Huc3(Huc3),
}

impl Chip {
    /// Constructs a new `Chip`.
    ///
    /// # Errors
    ///
    /// Returns an error if unsupported cartridge type is specified in the
    /// header.
    pub fn new(head: &Header, rom: &[u8]) -> Result<Self> {
        // Initialize ROM
        let rom = init::rom(head, rom);
        if !rom.is_empty() {
            log::trace!("cart ROM:\n{}", hexd::Printer::<u8>::new(0, &rom));
        }
        // Initialize RAM
        let ram = init::ram(head);
        // Construct body
        match &head.info {
            Info::Bare { .. } => Ok(Chip::None(None::new(rom, ram))),
            Info::Mbc1 { .. } => Ok(Chip::Mbc1(Mbc1::new(rom, ram))),
            Info::Mbc2 { .. } => Ok(Chip::Mbc2(Mbc2::new(rom, ram))),
            Info::Mbc3 { .. } => Ok(Chip::Mbc3(Mbc3::new(rom, ram))),
            Info::Mbc5 { .. } => Ok(Chip::Mbc5(Mbc5::new(rom, ram))),
            Info::Mbc6 => Ok(Chip::Mbc6(Mbc6::new(rom, ram))),
            Info::Mbc7 => Ok(Chip::Mbc7(Mbc7::new(rom, ram))),
            Info::Mmm01 { .. } => Ok(Chip::Mmm01(Mmm01::new(rom, ram))),
            Info::HuC1 => Ok(Chip::Huc1(Huc1::new(rom, ram))),
            Info::HuC3 => Ok(Chip::Huc3(Huc3::new(rom, ram))),
            kind => Err(Error::Unsupported(kind.clone())),
        }
    }

    /// Checks if a ROM can reasonably be constructed.
    ///
    /// # Errors
    ///
    /// Returns an error if unsupported cartridge type is specified in the
    /// header.
    pub fn check(head: &Header) -> Result<()> {
        match &head.info {
            Info::Bare { .. }
            | Info::Mbc1 { .. }
            | Info::Mbc2 { .. }
            | Info::Mbc3 { .. }
            | Info::Mbc5 { .. }
            | Info::Mbc6
            | Info::Mbc7
            | Info::Mmm01 { .. }
            | Info::HuC1
            | Info::HuC3 => Ok(()),
            kind => Err(Error::Unsupported(kind.clone())),
        }
    }
}

/// Dispatches a method call to every variant of [`Chip`].
macro_rules! dispatch {
    ($self:ident, $mbc:ident => $call:expr) => {
        match $self {
            Chip::None($mbc) => $call,
            Chip::Mbc1($mbc) => $call,
            Chip::Mbc2($mbc) => $call,
            Chip::Mbc3($mbc) => $call,
            Chip::Mbc5($mbc) => $call,
            Chip::Mbc6($mbc) => $call,
            Chip::Mbc7($mbc) => $call,
            Chip::Mmm01($mbc) => $call,
            Chip::Huc1($mbc) => $call,
            Chip::Huc3($mbc) => $call,
        }
    };
}

impl Block for Chip {
    fn ready(&self) -> bool {
        dispatch!(self, mbc => mbc.ready())
    }

    fn cycle(&mut self) {
        dispatch!(self, mbc => mbc.cycle());
    }

    fn reset(&mut self) {
        dispatch!(self, mbc => mbc.reset());
    }
}

impl Mbc for Chip {
    fn rom(&self) -> Device {
        dispatch!(self, mbc => mbc.rom())
    }

    fn ram(&self) -> Device {
        dispatch!(self, mbc => mbc.ram())
    }

    fn flash(&mut self, buf: &mut dyn io::Read) -> io::Result<usize> {
        dispatch!(self, mbc => mbc.flash(buf))
    }

    fn dump(&self, buf: &mut dyn io::Write) -> io::Result<usize> {
        dispatch!(self, mbc => mbc.dump(buf))
    }
}

impl Mmio for Chip {
    fn attach(&self, bus: &mut Bus) {
        dispatch!(self, mbc => mbc.attach(bus));
    }

    fn detach(&self, bus: &mut Bus) {
        dispatch!(self, mbc => mbc.detach(bus));
    }
}

mod init {
    use std::cmp::Ordering;
    use std::iter;

    use log::warn;

    use super::{Data, Header};

    /// Constructs a new ROM.
    pub fn rom(head: &Header, rom: &[u8]) -> Data {
        let read = rom.len();
        match read.cmp(&head.romsz) {
            Ordering::Less => {
                warn!(
                    "loaded {init}; remaining {diff} uninitialized",
                    init = bfmt::Size::from(read),
                    diff = bfmt::Size::from(head.romsz - read),
                );
            }
            Ordering::Equal => {}
            Ordering::Greater => {
                warn!(
                    "loaded {init}; remaining {diff} truncated",
                    init = bfmt::Size::from(head.romsz),
                    diff = bfmt::Size::from(read - head.romsz),
                );
            }
        }
        rom.iter()
            .copied()
            // pad missing values with open bus value
            .chain(iter::repeat(0xff))
            // truncate based on recorded cartridge size
            .take(head.romsz)
            // collect as a heap-allocated slice
            .collect::<Box<_>>()
    }

    /// Constructs a new RAM.
    pub fn ram(head: &Header) -> Data {
        if head.info.has_ram() && head.ramsz == 0 {
            warn!("cartridge supports RAM, but specified size is zero");
        }
        if !head.info.has_ram() && head.ramsz > 0 {
            warn!(
                "cartridge does not support RAM, but specified size is non-zero (found: {})",
                head.ramsz
            );
        }
        vec![0; head.ramsz].into_boxed_slice()
    }
}
