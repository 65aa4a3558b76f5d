//! Game ROM cartridge.
//!
//! Encoded within the ROM is a [header] describing the physical cartridge
//! hardware upon which the ROM resides.
//!
//! Additionally, one of several supported [memory bank controllers][mbcs] may
//! be used to expand the ROM and external RAM beyond the respective 32 KiB and
//! 8 KiB addressable bytes.
//!
//! [header]: https://gbdev.io/pandocs/The_Cartridge_Header.html
//! [mbcs]:   https://gbdev.io/pandocs/MBCs.html

use std::io;

use rugby_arch::mio::{Bus, Mmio};
use rugby_arch::Block;
use thiserror::Error;

use self::chip::Chip;
use self::header::{Header, Info};

pub mod chip;
pub mod header;

/// Game cartridge.
///
/// Parses a [`Header`] from the ROM, then initializes the memory bank
/// controller ([`chip`]).
#[derive(Clone, Debug)]
pub struct Cartridge {
    /// Cartridge header.
    head: Header,
    /// Cartridge body.
    body: Chip,
}

impl Cartridge {
    /// Constructs a new `Cartridge`.
    ///
    /// # Errors
    ///
    /// Returns an error when the cartridge header cannot be parsed.
    pub fn new(rom: &[u8]) -> Result<Self> {
        let head = Header::new(rom)?;
        let body = Chip::new(&head, rom)?;
        Ok(Self { head, body })
    }

    /// Constructs a new `Cartridge` explicitly checking the entire header.
    ///
    /// # Errors
    ///
    /// Returns an error when the cartridge header contained an error.
    pub fn checked(rom: &[u8]) -> Result<Self> {
        // Check then parse cartridge header
        let head = Header::check(rom).and_then(|()| Header::try_from(rom))?;
        // Construct memory bank controller
        let body = Chip::new(&head, rom)?;
        Ok(Self { head, body })
    }

    /// Constructs a new `Cartridge` without checking the header.
    ///
    /// # Panics
    ///
    /// Panics if the memory bank controller could not be constructed.
    pub fn unchecked(rom: &[u8]) -> Self {
        let head = Header::new(rom).ok().unwrap_or_else(Header::blank);
        let body = Chip::new(&head, rom).expect("unsupported cartridge kind");
        Self { head, body }
    }

    /// Constructs a blank `Cartridge`.
    #[must_use]
    pub fn blank() -> Self {
        let head = Header::blank();
        let body = Chip::new(&head, &[]).expect("`Info::Bare` is always supported");
        Self { head, body }
    }

    /// Gets the cartridge's title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.head.title.as_deref().unwrap_or("Unknown")
    }

    /// Gets the cartridge's header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.head
    }

    /// Flashes data onto the cartridge's battery-backed RAM.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the read failed.
    pub fn flash(&mut self, buf: &mut impl io::Read) -> io::Result<usize> {
        self.body.flash(buf)
    }

    /// Dumps the cartridge's battery-backed RAM.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write failed.
    pub fn dump(&self, buf: &mut impl io::Write) -> io::Result<usize> {
        self.body.dump(buf)
    }
}

impl Block for Cartridge {
    fn ready(&self) -> bool {
        self.body.ready()
    }

    fn cycle(&mut self) {
        self.body.cycle();
    }

    fn reset(&mut self) {
        self.body.reset();
    }
}

impl Mmio for Cartridge {
    fn attach(&self, bus: &mut Bus) {
        self.body.attach(bus);
    }

    fn detach(&self, bus: &mut Bus) {
        self.body.detach(bus);
    }
}

/// A convenient type alias for [`Result`](std::result::Result).
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error caused by constructing a [cartridge](Cartridge).
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse header.
    #[error("failed to parse header")]
    Header(#[from] header::Error),
    /// Unsupported cartridge kind.
    #[error("unsupported cartridge: {0}")]
    Unsupported(Info),
}
