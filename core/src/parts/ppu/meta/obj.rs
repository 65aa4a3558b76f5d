use rugby_arch::Byte;

use super::pixel::Meta;

/// Sprite metadata.
#[derive(Clone, Debug)]
pub struct Sprite {
    /// Byte 0: Y Position.
    pub ypos: Byte,
    /// Byte 1: X Position.
    pub xpos: Byte,
    /// Byte 2: Tile Index.
    pub tnum: Byte,
    /// Byte 3: Attributes.
    pub attr: Attributes,
}

impl Sprite {
    /// Constructs a new `Sprite`.
    #[must_use]
    pub fn new(data: [Byte; 4]) -> Self {
        Self::from(data)
    }

    /// Extracts sprite metadata.
    #[must_use]
    pub fn meta(&self) -> Meta {
        Meta::sprite(&self.attr)
    }
}

impl From<[Byte; 4]> for Sprite {
    fn from(data: [Byte; 4]) -> Self {
        Self {
            ypos: data[0],
            xpos: data[1],
            tnum: data[2],
            attr: data[3].into(),
        }
    }
}

/// Sprite attributes.
///
/// Attributes are encoded as `0bZYXP0000` on DMG, where:
/// - `P` is the object palette.
/// - `X` is the x-flip flag.
/// - `Y` is the y-flip flag.
/// - `Z` is the priority flag.
///
/// On CGB, bit 3 additionally selects the VRAM bank holding this sprite's
/// tile data, and bits `0..=2` select one of the 8 OBJ palettes; bit 4 (`P`)
/// keeps its DMG meaning but goes unused by the CGB colour pipeline.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug)]
pub struct Attributes {
    /// Priority flag.
    ///
    /// When set, background/window pixels have priority. (Other than
    /// [`C0`](super::Color::C0), which is always transparent.)
    pub prty: bool,
    /// Y-flip.
    ///
    /// Vertically flips the sprite.
    pub yflip: bool,
    /// X-flip.
    ///
    /// Horizontally flips the sprite.
    pub xflip: bool,
    /// Object palette.
    ///
    /// Selects between using `obp0` or `obp1`. (DMG only.)
    pub objp: bool,
    /// VRAM bank holding this sprite's tile data. (CGB only.)
    pub bank: bool,
    /// OBJ palette index, `0..=7`. (CGB only.)
    pub cgb_pal: Byte,
}

impl Attributes {
    /// Constructs a new `Attributes`.
    #[must_use]
    pub fn new(byte: Byte) -> Self {
        Self::from(byte)
    }
}

impl From<Byte> for Attributes {
    #[rustfmt::skip]
    fn from(byte: Byte) -> Self {
        Self {
            prty:    byte & (1 << 7) != 0,
            yflip:   byte & (1 << 6) != 0,
            xflip:   byte & (1 << 5) != 0,
            objp:    byte & (1 << 4) != 0,
            bank:    byte & (1 << 3) != 0,
            cgb_pal: byte & 0b0000_0111,
        }
    }
}

/// BG/window tile attributes. (CGB only.)
///
/// Decoded from the byte at the same tile-map address as the tile number,
/// but in VRAM bank 1. Encoded as `0bZYXB0PPP`, where:
/// - `PPP` is the BG palette index.
/// - `B` is the VRAM bank holding this tile's data.
/// - `X` is the x-flip flag.
/// - `Y` is the y-flip flag.
/// - `Z` is the BG-to-OBJ priority flag.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default)]
pub struct BgAttr {
    /// BG-to-OBJ priority.
    ///
    /// When set, this tile's non-transparent pixels are drawn over sprites,
    /// overriding the sprite's own priority bit (unless master priority is
    /// disabled via `LCDC` bit 0).
    pub priority: bool,
    /// Y-flip.
    pub yflip: bool,
    /// X-flip.
    pub xflip: bool,
    /// VRAM bank holding this tile's data.
    pub bank: bool,
    /// BG palette index, `0..=7`.
    pub pal: Byte,
}

impl From<Byte> for BgAttr {
    #[rustfmt::skip]
    fn from(byte: Byte) -> Self {
        Self {
            priority: byte & (1 << 7) != 0,
            yflip:    byte & (1 << 6) != 0,
            xflip:    byte & (1 << 5) != 0,
            bank:     byte & (1 << 3) != 0,
            pal:      byte & 0b0000_0111,
        }
    }
}
