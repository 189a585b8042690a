//! # Image Transfer
//!
//! Getting decoded pictures onto a [`Surface`].
//!
//! Decoding is left to the caller: anything implementing [`ImageSource`] can
//! be shown. The pipeline is
//!
//! 1. [`fit`] computes where the picture goes, keeping its aspect ratio
//! 2. a [`Canvas`] the size of the surface receives a 1:1 copy or a
//!    resampled version of the picture
//! 3. [`Surface::dump_image`] packs the canvas into native pixels

use alloc::vec::Vec;
use log::debug;

use crate::error::{Error, Result};
use crate::framebuffer::{Color, Surface};

/// A rectangular picture with random access to its pixels.
pub trait ImageSource {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// `false` for palette images; `get_pixel` still resolves to RGB.
    fn is_truecolor(&self) -> bool {
        true
    }

    /// Color at `x`, `y`. Only called with in-range coordinates.
    fn get_pixel(&self, x: usize, y: usize) -> Color;
}

/// Target rectangle of a picture inside a destination area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Placement {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Largest rectangle inside `dst_w` x `dst_h` with the aspect ratio of the
/// source, centered.
///
/// Without `upscale` a source that already fits keeps its size.
pub fn fit(src_w: usize, src_h: usize, dst_w: usize, dst_h: usize, upscale: bool) -> Placement {
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
        return Placement::default();
    }

    let (width, height) = if !upscale && src_w <= dst_w && src_h <= dst_h {
        (src_w, src_h)
    } else {
        let h = scale(src_h, dst_w, src_w);
        if h <= dst_h {
            (dst_w, h.max(1))
        } else {
            (scale(src_w, dst_h, src_h).max(1), dst_h)
        }
    };

    Placement {
        x: (dst_w - width) / 2,
        y: (dst_h - height) / 2,
        width,
        height,
    }
}

/// `v * num / den` without intermediate overflow.
#[inline]
fn scale(v: usize, num: usize, den: usize) -> usize {
    (v as u128 * num as u128 / den as u128) as usize
}

/// Owned truecolor picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A canvas filled with `fill`. Fails with `Error::OutOfMemory` when the
    /// pixel storage cannot be allocated.
    pub fn new(width: usize, height: usize, fill: Color) -> Result<Self> {
        let count = width.checked_mul(height).ok_or(Error::OutOfMemory {
            requested: usize::MAX,
        })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| Error::OutOfMemory {
                requested: count.saturating_mul(core::mem::size_of::<Color>()),
            })?;
        pixels.resize(count, fill);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy of any image source.
    pub fn from_source<S: ImageSource + ?Sized>(src: &S) -> Result<Self> {
        let mut canvas = Canvas::new(src.width(), src.height(), Color::BLACK)?;
        canvas.copy(src, 0, 0);
        Ok(canvas)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Copy `src` unscaled with its top left corner at `x`, `y`, clipped
    /// to the canvas.
    pub fn copy<S: ImageSource + ?Sized>(&mut self, src: &S, x: usize, y: usize) {
        let w = src.width().min(self.width.saturating_sub(x));
        let h = src.height().min(self.height.saturating_sub(y));
        for sy in 0..h {
            let row = (y + sy) * self.width + x;
            for sx in 0..w {
                self.pixels[row + sx] = src.get_pixel(sx, sy);
            }
        }
    }

    /// Scale all of `src` into the rectangle `to`.
    ///
    /// Each target pixel averages the source pixels its area covers. When
    /// enlarging, an area covers less than one source pixel and the nearest
    /// one is used.
    pub fn copy_resampled<S: ImageSource + ?Sized>(&mut self, src: &S, to: Placement) {
        let (sw, sh) = (src.width(), src.height());
        if sw == 0 || sh == 0 || to.is_empty() {
            return;
        }
        let w = to.width.min(self.width.saturating_sub(to.x));
        let h = to.height.min(self.height.saturating_sub(to.y));

        for ty in 0..h {
            let y0 = scale(ty, sh, to.height);
            let y1 = scale(ty + 1, sh, to.height).max(y0 + 1).min(sh);
            let row = (to.y + ty) * self.width + to.x;
            for tx in 0..w {
                let x0 = scale(tx, sw, to.width);
                let x1 = scale(tx + 1, sw, to.width).max(x0 + 1).min(sw);
                self.pixels[row + tx] = average(src, x0..x1, y0..y1);
            }
        }
    }
}

fn average<S: ImageSource + ?Sized>(
    src: &S,
    xs: core::ops::Range<usize>,
    ys: core::ops::Range<usize>,
) -> Color {
    let (mut r, mut g, mut b, mut a) = (0u64, 0u64, 0u64, 0u64);
    let mut n = 0u64;
    for y in ys {
        for x in xs.clone() {
            let c = src.get_pixel(x, y);
            r += c.r as u64;
            g += c.g as u64;
            b += c.b as u64;
            a += c.a as u64;
            n += 1;
        }
    }
    if n == 0 {
        return Color::BLACK;
    }
    Color::with_alpha((r / n) as u8, (g / n) as u8, (b / n) as u8, (a / n) as u8)
}

impl ImageSource for Canvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }
}

impl Surface<'_> {
    /// Pack `src` into the surface starting at its top left corner. Only the
    /// overlap of both is written.
    pub fn dump_image<S: ImageSource + ?Sized>(&mut self, src: &S) {
        let w = self.width().min(src.width());
        let h = self.height().min(src.height());
        let (ox, oy) = (self.x_offset(), self.y_offset());
        for y in 0..h {
            for x in 0..w {
                let c = src.get_pixel(x, y);
                let native = self.rgb_to_native(c.r, c.g, c.b);
                self.put(ox + x, oy + y, native);
            }
        }
    }

    /// Show `src` centered on a black screen, shrunk to fit if needed and
    /// enlarged as well when `upscale` is set.
    pub fn show_image<S: ImageSource + ?Sized>(&mut self, src: &S, upscale: bool) -> Result<Placement> {
        let (w, h) = (self.width(), self.height());
        let placement = fit(src.width(), src.height(), w, h, upscale);
        let mut canvas = Canvas::new(w, h, Color::BLACK)?;

        if placement.width == src.width() && placement.height == src.height() {
            debug!(
                "image {}x{} ({}) copied at {},{}",
                src.width(),
                src.height(),
                if src.is_truecolor() { "truecolor" } else { "palette" },
                placement.x,
                placement.y
            );
            canvas.copy(src, placement.x, placement.y);
        } else {
            debug!(
                "image {}x{} ({}) resampled to {}x{} at {},{}",
                src.width(),
                src.height(),
                if src.is_truecolor() { "truecolor" } else { "palette" },
                placement.width,
                placement.height,
                placement.x,
                placement.y
            );
            canvas.copy_resampled(src, placement);
        }

        self.dump_image(&canvas);
        Ok(placement)
    }
}
