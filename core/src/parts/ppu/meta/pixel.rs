use rugby_arch::Byte;

use super::{Attributes, BgAttr, Color, Palette};

/// Pre-rendered pixel.
#[derive(Clone, Debug)]
pub struct Pixel {
    /// Color value.
    pub col: Color,
    /// Pixel metadata.
    pub meta: Meta,
}

impl Pixel {
    /// Constructs a new `Pixel`.
    #[must_use]
    pub fn new(col: Color, meta: Meta) -> Self {
        Self { col, meta }
    }

    /// Blends a pair of window/background and sprite pixels together.
    ///
    /// `master_priority` is `LCDC` bit 0 on CGB (always `true` on DMG, where
    /// that bit instead gates whether the background/window is blanked
    /// entirely). When clear, sprites are always drawn over the background
    /// and window, ignoring every priority bit.
    #[allow(clippy::if_same_then_else)]
    #[must_use]
    pub fn blend(winbg: Self, sprite: Self, master_priority: bool) -> Self {
        // Pixels are blended as follows:
        //
        // 1. If the color number of the sprite pixel is 0, the background pixel
        //    is pushed to the LCD.
        if sprite.col == Color::C0 {
            winbg
        }
        // 2. If master priority is disabled, sprites are always drawn on top.
        else if !master_priority {
            sprite
        }
        // 3. If either side's BG-to-OBJ priority bit is set and the color
        //    number of the background pixel is anything other than 0, the
        //    background pixel is pushed to the LCD.
        else if (sprite.meta.bgp || winbg.meta.bgp) && winbg.col != Color::C0 {
            winbg
        }
        // 4. If none of the above conditions apply, the Sprite Pixel is pushed
        //    to the LCD.
        else {
            sprite
        }
        // <https://hacktix.github.io/GBEDG/ppu/#pixel-mixing>
    }
}

/// Pixel metadata.
#[derive(Clone, Debug)]
pub struct Meta {
    /// Monochrome palette.
    pub pal: Palette,
    /// BG-to-OBJ priority.
    ///
    /// For sprites, this is the OAM attribute's own priority bit. For
    /// background/window tiles, this is the CGB attribute byte's priority
    /// bit (always `false` on DMG).
    pub bgp: bool,
    /// CGB palette index, `0..=7`. Unused on DMG.
    pub cgb_pal: Byte,
}

impl Meta {
    /// Constructs background/window metadata.
    #[must_use]
    pub fn bgwin(attr: &BgAttr) -> Self {
        Self {
            pal: Palette::BgWin,
            bgp: attr.priority,
            cgb_pal: attr.pal,
        }
    }

    /// Constructs object metadata.
    #[must_use]
    pub fn sprite(attr: &Attributes) -> Self {
        Self {
            pal: Palette::objp(attr.objp),
            bgp: attr.prty,
            cgb_pal: attr.cgb_pal,
        }
    }
}
