//! Debugging the [PPU](super).

use itertools::Itertools;
use rugby_arch::Word;

use super::meta::{BgAttr, Layer, Meta, Pixel, Rgb15, Tile};
use super::Ppu;

/// Collects debug information.
#[must_use]
pub fn info(ppu: &Ppu) -> Debug {
    Debug::new(ppu)
}

/// Debug information.
#[derive(Debug)]
pub struct Debug {
    /// Tile data.
    ///
    /// Rendering of the VRAM's tile data (`$8000..=$97FF`), bank 0.
    pub tdat: Box<[Rgb15; 0x06000]>,
    /// Tile map 1.
    ///
    /// Rendering of the VRAM's tile map 1 (`$9800..=$9BFF`).
    pub map1: Box<[Rgb15; 0x10000]>,
    /// Tile map 2.
    ///
    /// Rendering of the VRAM's tile map 1 (`$9C00..=$9FFF`).
    pub map2: Box<[Rgb15; 0x10000]>,
}

impl Debug {
    /// Constructs a new `Debug`.
    fn new(ppu: &Ppu) -> Self {
        // Tile index, as addressed in $8000 mode (used for both tile maps).
        let tidx = |tnum| usize::from(ppu.tidx(Layer::Background, tnum) >> 4);

        // Extract tile data, maps. Debug views always render bank 0.
        let vram = ppu.mem.vram.borrow();
        let tdat: [_; 0x180] = (0..0x1800)
            .map(|addr: Word| vram.bank(0, addr))
            .collect_vec()
            .chunks_exact(16) // 16-bytes per tile
            .map(|tile| Tile::from(<[_; 16]>::try_from(tile).unwrap()))
            .collect_vec()
            .try_into()
            .unwrap();
        let map1: [_; 0x400] = (0x1800..0x1c00)
            .map(|addr: Word| vram.bank(0, addr))
            .map(|tnum| tdat[tidx(tnum)].clone())
            .collect_vec()
            .try_into()
            .unwrap();
        let map2: [_; 0x400] = (0x1c00..0x2000)
            .map(|addr: Word| vram.bank(0, addr))
            .map(|tnum| tdat[tidx(tnum)].clone())
            .collect_vec()
            .try_into()
            .unwrap();
        drop(vram);

        // Render tile data, maps
        let meta = Meta::bgwin(&BgAttr::default()); // prepare metadata
        let tdat = Self::render(&tdat, ppu, &meta, 16); // 16x24 tiles
        let map1 = Self::render(&map1, ppu, &meta, 32); // 32x32 tiles
        let map2 = Self::render(&map2, ppu, &meta, 32); // 32x32 tiles

        // Return debug info
        Self { tdat, map1, map2 }
    }

    /// Renders tiles as pixels, `width` tiles per row.
    #[allow(clippy::unnecessary_box_returns)]
    fn render<const N: usize>(
        tdat: &[Tile],
        ppu: &Ppu,
        meta: &Meta,
        width: usize,
    ) -> Box<[Rgb15; N]> {
        tdat.chunks_exact(width) // tiles per row
            .flat_map(|tiles| {
                // Interleave tiles scanline-by-scanline to produce a raster image.
                (0..8).flat_map(move |line| {
                    tiles
                        .iter()
                        .flat_map(move |tile| tile[line].iter().copied())
                })
            })
            .map(|col| ppu.color(&Pixel::new(col, meta.clone())))
            .collect::<Vec<_>>()
            .try_into()
            .unwrap()
    }
}
