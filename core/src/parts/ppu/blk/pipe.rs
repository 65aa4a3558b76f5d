use log::trace;
use rugby_arch::reg::Register;
use rugby_arch::{Block, Byte};

use crate::parts::ppu::Compat;

use super::fetch::{Background, Sprite as SpriteFetcher, Step};
use super::meta::{Color, Layer, Pixel, Sprite};
use super::{Lcdc, Ppu};

/// Pixel pipeline.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    /// Warm-up completed.
    pub ready: bool,
    /// LCD X-coordinate.
    pub lx: Byte,
    /// Pixels still to discard due to fine horizontal scroll.
    pub scroll: Byte,
    /// Background/window fetcher.
    pub bgw: Background,
    /// Sprite fetcher.
    pub sprite: SpriteFetcher,
}

impl Pipeline {
    /// Performs a fetch for the next pixels to the appropriate FIFO.
    pub fn fetch(&mut self, ppu: &mut Ppu, objs: &[Sprite]) {
        // Check if we're at an object
        if let Some(obj) = objs.iter().find(|obj| obj.xpos == self.lx + 8) {
            trace!("found sprite: {obj:?}");
            // Ensure the sprite is not overridden
            if self.sprite.fifo.is_empty() {
                // Fetch the sprite
                self.sprite.exec(ppu, obj);
                // Stall the background fetcher
                return;
            }
            trace!("ignored; sprite already being drawn");
        }

        // Execute the background fetcher
        self.bgw.exec(ppu);

        // Restart background fetcher when:
        //
        // 1. The first "warm-up" fetch completes
        let done_warmup = !self.ready && matches!(self.bgw.step, Step::Push { .. });
        if done_warmup {
            trace!("pipeline warmup complete");
            // We're now ready for real fetches
            self.ready = true;
        }
        // 2. The window border has been reached
        let window_reached = {
            // 1. The window is enabled
            let win_enabled = ppu.lcdc(Lcdc::WinEnable);
            // 2. Fetcher is still at the background
            let fetch_at_bg = self.bgw.layer == Layer::Background;
            // 3. Y-coordinate is below the window
            let y_below_win = ppu.reg.wy.load() <= ppu.reg.ly.load();
            // 4. X-coordinate is right of window
            let x_right_win = ppu.reg.wx.load() <= self.lx + 7;
            //
            // Determine result:
            win_enabled && fetch_at_bg && y_below_win && x_right_win
        };
        if window_reached {
            trace!(
                "window border reached at: (row: {ly}, col: {lx})",
                ly = ppu.reg.ly.load(),
                lx = self.lx
            );
            // Update the fetcher's location
            self.bgw.layer = Layer::Window;
        }
        //
        // If either condition is met, reset the background fetcher (keeping
        // its current layer) and clear its FIFO.
        if done_warmup || window_reached {
            self.bgw.reset();
        }
    }

    /// Shift out a blended pixel from the FIFOs.
    pub fn shift(&mut self, ppu: &Ppu) -> Option<Pixel> {
        // Check the sprite fetcher isn't mid-fetch
        if !matches!(self.sprite.step, Step::Fetch) {
            return None;
        }

        // Pop from the background/window FIFO
        let Some(mut bgw) = self.bgw.fifo.pop() else {
            return None; // FIFO is empty
        };

        // Discard pixels scrolled past by SCX % 8
        if self.scroll > 0 {
            self.scroll -= 1;
            return None;
        }

        // `LCDC` bit 0 means different things depending on console mode: on
        // DMG, it blanks the background/window to the lightest shade; on
        // CGB, it instead becomes the sprite/background master priority bit,
        // handled below by `Pixel::blend`.
        let lcdc = ppu.reg.lcdc.load();
        let bgwin_enable = Lcdc::BgWinEnable.get(&lcdc);
        let master_priority = match ppu.compat() {
            Compat::Dmg => {
                if !bgwin_enable {
                    bgw.col = Color::C0;
                }
                true
            }
            Compat::Cgb => bgwin_enable,
        };

        // Pop from the sprite FIFO
        let pixel = if let Some(sprite) = self.sprite.fifo.pop() {
            Pixel::blend(bgw, sprite, master_priority) // blend the pixels together
        } else {
            bgw // no sprite; use background/window pixel
        };

        Some(pixel)
    }
}
