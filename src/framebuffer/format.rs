//! Pixel formats and native pixel packing
//!
//! Each supported depth has a fixed byte layout in the framebuffer:
//!
//! | bpp | layout                                              |
//! |-----|-----------------------------------------------------|
//! | 1   | one bit per pixel, most significant bit first       |
//! | 8   | one byte, gray level or palette index               |
//! | 16  | RGB 5-6-5, little endian                            |
//! | 24  | B, G, R bytes                                       |
//! | 32  | B, G, R, A bytes                                    |
//!
//! Conversion from RGB to 1bpp and 8bpp goes through a cheap luma
//! approximation `(2R + 6G + B) / 9`; 16bpp truncates to 5-6-5.
use super::color::Color;
use crate::error::{Error, Result};

/// A pixel value in the packing of one [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NativePixel(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Mono1,
    Gray8,
    Rgb565,
    Rgb888,
    Argb8888,
}

impl PixelFormat {
    pub fn from_bpp(bits_per_pixel: u32) -> Result<Self> {
        match bits_per_pixel {
            1 => Ok(PixelFormat::Mono1),
            8 => Ok(PixelFormat::Gray8),
            16 => Ok(PixelFormat::Rgb565),
            24 => Ok(PixelFormat::Rgb888),
            32 => Ok(PixelFormat::Argb8888),
            other => Err(Error::UnsupportedDepth(other)),
        }
    }

    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Mono1 => 1,
            PixelFormat::Gray8 => 8,
            PixelFormat::Rgb565 => 16,
            PixelFormat::Rgb888 => 24,
            PixelFormat::Argb8888 => 32,
        }
    }

    /// Bytes per pixel, zero for the packed 1bpp format.
    pub const fn bytes_per_pixel(self) -> usize {
        self.bits_per_pixel() as usize / 8
    }

    /// Smallest number of bytes that holds `pixels` pixels of a scan line.
    pub const fn row_bytes(self, pixels: usize) -> usize {
        (pixels * self.bits_per_pixel() as usize + 7) / 8
    }

    /// `row_bytes` for untrusted geometry, `None` when it does not fit in
    /// `usize`.
    pub fn checked_row_bytes(self, pixels: usize) -> Option<usize> {
        let bits = pixels.checked_mul(self.bits_per_pixel() as usize)?;
        Some(bits / 8 + usize::from(bits % 8 != 0))
    }

    pub fn rgb_to_native(self, r: u8, g: u8, b: u8) -> NativePixel {
        let (r, g, b) = (r as u32, g as u32, b as u32);
        let value = match self {
            PixelFormat::Mono1 => {
                if luma(r, g, b) < 128 {
                    0
                } else {
                    1
                }
            }
            PixelFormat::Gray8 => luma(r, g, b),
            PixelFormat::Rgb565 => ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3),
            PixelFormat::Rgb888 => (r << 16) | (g << 8) | b,
            PixelFormat::Argb8888 => 0xFF00_0000 | (r << 16) | (g << 8) | b,
        };
        NativePixel(value)
    }

    pub fn color_to_native(self, color: Color) -> NativePixel {
        self.rgb_to_native(color.r, color.g, color.b)
    }

    /// Expand a native value back to RGB. 5-6-5 channels are widened by bit
    /// replication so that re-packing yields the same native value.
    pub fn native_to_rgb(self, pixel: NativePixel) -> Color {
        let v = pixel.0;
        match self {
            PixelFormat::Mono1 => {
                if v & 1 != 0 {
                    Color::new(255, 255, 255)
                } else {
                    Color::new(0, 0, 0)
                }
            }
            PixelFormat::Gray8 => {
                let gray = v as u8;
                Color::new(gray, gray, gray)
            }
            PixelFormat::Rgb565 => {
                let r = ((v >> 11) & 0x1F) as u8;
                let g = ((v >> 5) & 0x3F) as u8;
                let b = (v & 0x1F) as u8;
                Color::new((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
            }
            PixelFormat::Rgb888 => Color::new((v >> 16) as u8, (v >> 8) as u8, v as u8),
            PixelFormat::Argb8888 => {
                Color::with_alpha((v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8)
            }
        }
    }

    /// Store `pixel` into the first `bytes_per_pixel` bytes of `dst`.
    /// Not used for 1bpp, which is bit addressed.
    #[inline]
    pub(crate) fn store(self, dst: &mut [u8], pixel: NativePixel) {
        let bytes = pixel.0.to_le_bytes();
        let n = self.bytes_per_pixel();
        dst[..n].copy_from_slice(&bytes[..n]);
    }

    #[inline]
    pub(crate) fn load(self, src: &[u8]) -> NativePixel {
        let mut bytes = [0u8; 4];
        let n = self.bytes_per_pixel();
        bytes[..n].copy_from_slice(&src[..n]);
        NativePixel(u32::from_le_bytes(bytes))
    }
}

#[inline]
fn luma(r: u32, g: u32, b: u32) -> u32 {
    (2 * r + 6 * g + b) / 9
}
