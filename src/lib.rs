//! # sfb
//!
//! Software rasterizer for linear framebuffers at 1, 8, 16, 24 and 32 bits
//! per pixel.
//!
//! A [`Surface`] wraps a mapped pixel buffer together with its geometry. On
//! top of it:
//!
//! - `raster`: lines, rectangles, circles and discs
//! - `text`: bitmap font rendering with a cursor, wrapping and scrolling
//! - `image`: aspect-preserving fit, box-filter resampling and blits
//! - `framebuffer::shift`: scrolling the contents by rows or bytes
//!
//! The crate is `no_std` with `alloc`. Surfaces can be shared between
//! contexts through [`SharedSurface`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod format;
pub mod framebuffer;
pub mod image;
pub mod raster;
pub mod shared;
pub mod text;

pub use error::{Error, Result};
pub use framebuffer::{
    Color, NativePixel, PixelFormat, ShiftDirection, Surface, SurfaceInfo, SurfaceProvider,
    NAMED_COLORS,
};
pub use image::{fit, Canvas, ImageSource, Placement};
pub use raster::Octants;
pub use shared::SharedSurface;
pub use text::{Bitmap, Font, GlyphMap, FONT_6X8};
