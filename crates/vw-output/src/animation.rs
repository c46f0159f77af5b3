//! Animated GIF rendering of a recorded history.
//!
//! Each [`GridSnapshot`] becomes one frame.  Cell codes map onto a binary
//! white→black ramp:
//!
//! | Code | Meaning        | Colour   |
//! |------|----------------|----------|
//! | 0    | clean, empty   | white    |
//! | 1    | agent present  | mid-grey |
//! | 2    | dirty, empty   | black    |
//!
//! Grid `x` runs down the image and grid `y` across it, so a `W x H` grid
//! renders as an image `H * cell_px` wide and `W * cell_px` tall.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use vw_spatial::{CellCode, GridSnapshot};

use crate::{OutputError, OutputResult};

/// Renders a history of snapshots as a looping GIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRenderer {
    /// Edge length of one grid cell, in pixels.  Clamped to at least 1.
    pub cell_px:        u32,
    /// Display time of each frame.
    pub frame_delay_ms: u32,
    /// Maximum number of frames written; later snapshots are dropped.
    pub frame_cap:      usize,
}

impl Default for AnimationRenderer {
    fn default() -> Self {
        Self {
            cell_px:        32,
            frame_delay_ms: 100,
            frame_cap:      500,
        }
    }
}

impl AnimationRenderer {
    /// Grey level for a cell code: `255 - code * 255 / MAX`.
    #[inline]
    pub fn shade(code: CellCode) -> u8 {
        let code = code.0.min(CellCode::MAX) as u32;
        (255 - code * 255 / CellCode::MAX as u32) as u8
    }

    /// Draw one snapshot, each cell scaled up to a `cell_px` square.
    ///
    /// Fails with [`OutputError::FrameTooLarge`] if the scaled image does not
    /// fit in `u32` pixel dimensions or addressable memory.
    pub fn render_frame(&self, snapshot: &GridSnapshot) -> OutputResult<RgbaImage> {
        let px = self.cell_px.max(1);
        let dims = snapshot.dims();
        let too_large = || OutputError::FrameTooLarge {
            width:   dims.width,
            height:  dims.height,
            cell_px: px,
        };

        let img_w = dims.height.checked_mul(px).ok_or_else(too_large)?;
        let img_h = dims.width.checked_mul(px).ok_or_else(too_large)?;
        (img_w as usize)
            .checked_mul(img_h as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(too_large)?;

        let cells = snapshot.cells();
        Ok(RgbaImage::from_fn(img_w, img_h, |col, row| {
            // Row-major cells: grid (x, y) sits at y * width + x.
            let idx = (col / px) as usize * dims.width as usize + (row / px) as usize;
            let g = Self::shade(cells[idx]);
            Rgba([g, g, g, 255])
        }))
    }

    /// Write `min(frames.len(), frame_cap)` frames to a GIF at `path`.
    ///
    /// Returns the number of frames written.  With nothing to write, no file
    /// is created and `0` is returned.
    pub fn render_gif(&self, frames: &[GridSnapshot], path: &Path) -> OutputResult<usize> {
        let count = frames.len().min(self.frame_cap);
        if count == 0 {
            return Ok(0);
        }

        let mut encoder = GifEncoder::new(BufWriter::new(File::create(path)?));
        encoder.set_repeat(Repeat::Infinite)?;

        let delay = Delay::from_numer_denom_ms(self.frame_delay_ms, 1);
        for snapshot in &frames[..count] {
            let frame = Frame::from_parts(self.render_frame(snapshot)?, 0, 0, delay);
            encoder.encode_frame(frame)?;
        }
        // Dropping the encoder writes the GIF trailer.
        drop(encoder);
        Ok(count)
    }
}
