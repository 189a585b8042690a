//! # Framebuffer Surface Module
//!
//! Pixel storage and the primitive writes everything else is built on.
//!
//! ## Modules
//!
//! - `color`: `Color` type with the named color table
//! - `format`: `PixelFormat` and conversion between RGB and native pixels
//! - `surface`: `Surface`, the clipped pixel/run writer over a memory region
//! - `shift`: in-place scrolling of the surface contents
//!
//! ## Coordinates
//!
//! Drawing coordinates are signed and relative to the viewport origin
//! (`x_offset`, `y_offset`). Anything outside `[0, width) x [0, height)` is
//! clipped before an address is computed, so drawing never touches memory
//! outside the viewport.

pub mod color;
pub mod format;
pub mod shift;
pub mod surface;

pub use color::{Color, NAMED_COLORS};
pub use format::{NativePixel, PixelFormat};
pub use shift::ShiftDirection;
pub use surface::{Surface, SurfaceInfo, SurfaceProvider};
