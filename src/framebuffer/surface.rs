//! Drawing surface over a framebuffer memory region
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{Rgb888, RgbColor},
    primitives::Rectangle,
    Pixel,
};
use log::debug;

use super::color::Color;
use super::format::{NativePixel, PixelFormat};
use crate::error::{Error, Result};
use crate::text::TextState;

/// Geometry of a framebuffer as reported by the surface provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInfo {
    /// Visible width in pixels.
    pub width: usize,
    /// Visible height in pixels.
    pub height: usize,
    /// Bytes from the start of one scan line to the next.
    pub stride: usize,
    pub bits_per_pixel: u32,
    /// Viewport origin inside a larger physical buffer.
    pub x_offset: usize,
    pub y_offset: usize,
}

impl SurfaceInfo {
    pub const fn new(width: usize, height: usize, stride: usize, bits_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            stride,
            bits_per_pixel,
            x_offset: 0,
            y_offset: 0,
        }
    }

    pub const fn with_offset(mut self, x_offset: usize, y_offset: usize) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }
}

/// Source of a mapped framebuffer: a device driver, a test buffer, an
/// off-screen window. Errors are passed through `Surface::from_provider`
/// unchanged.
pub trait SurfaceProvider {
    fn info(&self) -> Result<SurfaceInfo>;

    fn buffer(&mut self) -> Result<&mut [u8]>;
}

/// One destination framebuffer: pixel memory, geometry, pixel format and the
/// text cursor state.
///
/// All drawing clips to `[0, width) x [0, height)`. Coordinates outside are
/// silently ignored and runs are shortened at either end.
pub struct Surface<'a> {
    buffer: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    x_offset: usize,
    y_offset: usize,
    format: PixelFormat,
    pub(crate) text: TextState,
}

impl<'a> Surface<'a> {
    pub fn new(buffer: &'a mut [u8], info: SurfaceInfo) -> Result<Self> {
        let format = PixelFormat::from_bpp(info.bits_per_pixel)?;

        let overflow = Error::BufferTooSmall {
            len: buffer.len(),
            required: usize::MAX,
        };
        let row = match info
            .x_offset
            .checked_add(info.width)
            .and_then(|pixels| format.checked_row_bytes(pixels))
        {
            Some(row) => row,
            None => return Err(overflow),
        };
        if info.stride < row {
            return Err(Error::StrideTooSmall {
                stride: info.stride,
                required: row,
            });
        }
        let required = match info.y_offset.checked_add(info.height) {
            Some(0) => Some(0),
            Some(rows) => (rows - 1)
                .checked_mul(info.stride)
                .and_then(|bytes| bytes.checked_add(row)),
            None => None,
        };
        let required = match required {
            Some(required) => required,
            None => return Err(overflow),
        };
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                len: buffer.len(),
                required,
            });
        }

        debug!(
            "surface {}x{} at {},{}: {}bpp, stride {}, {} bytes",
            info.width,
            info.height,
            info.x_offset,
            info.y_offset,
            info.bits_per_pixel,
            info.stride,
            buffer.len()
        );

        Ok(Self {
            buffer,
            width: info.width,
            height: info.height,
            stride: info.stride,
            x_offset: info.x_offset,
            y_offset: info.y_offset,
            format,
            text: TextState::new(format),
        })
    }

    /// Query the provider for its geometry and memory and wrap them.
    pub fn from_provider<P: SurfaceProvider>(provider: &'a mut P) -> Result<Self> {
        let info = provider.info()?;
        let buffer = provider.buffer()?;
        Surface::new(buffer, info)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn x_offset(&self) -> usize {
        self.x_offset
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.format.bits_per_pixel()
    }

    /// Raw pixel memory, including any bytes outside the viewport.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..]
    }

    pub fn native(&self, color: Color) -> NativePixel {
        self.format.color_to_native(color)
    }

    pub fn rgb_to_native(&self, r: u8, g: u8, b: u8) -> NativePixel {
        self.format.rgb_to_native(r, g, b)
    }

    pub fn color_of(&self, pixel: NativePixel) -> Color {
        self.format.native_to_rgb(pixel)
    }

    /// Read the native value at `x`, `y`; `None` outside the surface.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<NativePixel> {
        let (x, y) = self.clip_point(x, y)?;
        let (ax, ay) = (x + self.x_offset, y + self.y_offset);
        match self.format {
            PixelFormat::Mono1 => {
                let byte = self.buffer[ay * self.stride + ax / 8];
                Some(NativePixel(u32::from(byte & (0x80 >> (ax & 7)) != 0)))
            }
            format => Some(format.load(&self.buffer[self.byte_offset(ax, ay)..])),
        }
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: NativePixel) {
        if let Some((x, y)) = self.clip_point(x, y) {
            self.put(x + self.x_offset, y + self.y_offset, color);
        }
    }

    /// Horizontal run of `len` pixels starting at `x`, `y`.
    pub fn hline(&mut self, x: i32, y: i32, len: i32, color: NativePixel) {
        if y < 0 || y as i64 >= self.height as i64 {
            return;
        }
        let Some((x, len)) = clip_span(x, len, self.width) else {
            return;
        };
        let (ax, ay) = (x + self.x_offset, y as usize + self.y_offset);

        match self.format {
            PixelFormat::Mono1 => {
                for px in ax..ax + len {
                    self.put_bit(px, ay, color);
                }
            }
            PixelFormat::Gray8 => {
                let pos = self.byte_offset(ax, ay);
                self.buffer[pos..pos + len].fill(color.0 as u8);
            }
            format => {
                let bpp = format.bytes_per_pixel();
                let pos = self.byte_offset(ax, ay);
                for px in self.buffer[pos..pos + len * bpp].chunks_exact_mut(bpp) {
                    format.store(px, color);
                }
            }
        }
    }

    /// Vertical run of `len` pixels starting at `x`, `y`.
    pub fn vline(&mut self, x: i32, y: i32, len: i32, color: NativePixel) {
        if x < 0 || x as i64 >= self.width as i64 {
            return;
        }
        let Some((y, len)) = clip_span(y, len, self.height) else {
            return;
        };
        let ax = x as usize + self.x_offset;
        for ay in y + self.y_offset..y + self.y_offset + len {
            self.put(ax, ay, color);
        }
    }

    /// Fill the whole viewport with the current background color.
    pub fn clear(&mut self) {
        let background = self.text.background;
        let width = self.width.min(i32::MAX as usize) as i32;
        for y in 0..self.height.min(i32::MAX as usize) as i32 {
            self.hline(0, y, width, background);
        }
    }

    /// Byte range `[lo, hi)` of a scan line that belongs to the viewport.
    pub(crate) fn row_span(&self) -> (usize, usize) {
        let bits = self.format.bits_per_pixel() as usize;
        let lo = self.x_offset * bits / 8;
        let hi = self.format.row_bytes(self.x_offset + self.width);
        (lo, hi)
    }

    /// Bits of the first and last byte of `row_span` that lie outside the
    /// viewport. Only a 1bpp viewport not aligned to whole bytes has any.
    pub(crate) fn edge_masks(&self) -> (u8, u8) {
        if self.format != PixelFormat::Mono1 {
            return (0, 0);
        }
        let lead = match self.x_offset % 8 {
            0 => 0,
            bits => !(0xFFu8 >> bits),
        };
        let trail = match (self.x_offset + self.width) % 8 {
            0 => 0,
            bits => 0xFFu8 >> bits,
        };
        (lead, trail)
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer[..]
    }

    /// Store a pixel at absolute, already clipped buffer coordinates.
    #[inline]
    pub(crate) fn put(&mut self, ax: usize, ay: usize, color: NativePixel) {
        match self.format {
            PixelFormat::Mono1 => self.put_bit(ax, ay, color),
            format => {
                let pos = self.byte_offset(ax, ay);
                format.store(&mut self.buffer[pos..], color);
            }
        }
    }

    #[inline]
    fn put_bit(&mut self, ax: usize, ay: usize, color: NativePixel) {
        let mask = 0x80u8 >> (ax & 7);
        let byte = &mut self.buffer[ay * self.stride + ax / 8];
        if color.0 != 0 {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    #[inline]
    fn byte_offset(&self, ax: usize, ay: usize) -> usize {
        ay * self.stride + ax * self.format.bytes_per_pixel()
    }

    #[inline]
    fn clip_point(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x, y))
    }
}

/// Clip a run `[start, start + len)` against `[0, limit)`.
///
/// A negative start shortens the run from the front; the returned length is
/// never zero.
fn clip_span(start: i32, len: i32, limit: usize) -> Option<(usize, usize)> {
    let mut start = start as i64;
    let mut len = len as i64;
    let limit = limit as i64;
    if start < 0 {
        len += start;
        start = 0;
    }
    if start + len > limit {
        len = limit - start;
    }
    if len <= 0 || start >= limit {
        return None;
    }
    Some((start as usize, len as usize))
}

impl DrawTarget for Surface<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let native = self.format.rgb_to_native(color.r(), color.g(), color.b());
            self.set_pixel(x, y, native);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> core::result::Result<(), Self::Error> {
        let native = self.format.rgb_to_native(color.r(), color.g(), color.b());
        let width = area.size.width.min(i32::MAX as u32) as i32;
        let height = area.size.height.min(i32::MAX as u32) as i32;
        for row in 0..height {
            self.hline(area.top_left.x, area.top_left.y.saturating_add(row), width, native);
        }
        Ok(())
    }
}

impl OriginDimensions for Surface<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Zeroed buffer sized for a `width` x `height` surface at `bpp` with
    /// the minimum stride.
    pub(crate) fn buffer_for(width: usize, height: usize, bpp: u32) -> (Vec<u8>, SurfaceInfo) {
        let stride = PixelFormat::from_bpp(bpp).unwrap().row_bytes(width);
        (vec![0u8; stride * height], SurfaceInfo::new(width, height, stride, bpp))
    }

    const DEPTHS: [u32; 5] = [1, 8, 16, 24, 32];

    #[test]
    fn test_rejects_bad_geometry() {
        let mut buf = vec![0u8; 100];
        assert_eq!(
            Surface::new(&mut buf, SurfaceInfo::new(10, 10, 10, 4)).err(),
            Some(Error::UnsupportedDepth(4))
        );
        assert_eq!(
            Surface::new(&mut buf, SurfaceInfo::new(10, 10, 20, 32)).err(),
            Some(Error::StrideTooSmall { stride: 20, required: 40 })
        );
        assert_eq!(
            Surface::new(&mut buf, SurfaceInfo::new(10, 10, 40, 32)).err(),
            Some(Error::BufferTooSmall { len: 100, required: 400 })
        );
        assert!(Surface::new(&mut buf, SurfaceInfo::new(10, 10, 10, 8)).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_geometry() {
        let mut buf = vec![0u8; 16];
        let overflow = Some(Error::BufferTooSmall { len: 16, required: usize::MAX });
        let cases = [
            SurfaceInfo::new(usize::MAX / 4, 2, 64, 32),
            SurfaceInfo::new(2, 2, 64, 8).with_offset(usize::MAX, 0),
            SurfaceInfo::new(2, usize::MAX, 64, 8).with_offset(0, 1),
            SurfaceInfo::new(2, usize::MAX / 2, 4, 8),
        ];
        for info in cases {
            assert_eq!(Surface::new(&mut buf, info).err(), overflow);
        }
    }

    #[test]
    fn test_set_get_round_trip_all_depths() {
        let colors = [Color::RED, Color::WHITE, Color::CORNFLOWER_BLUE, Color::BLACK];
        for bpp in DEPTHS {
            let (mut buf, info) = buffer_for(13, 7, bpp);
            let mut s = Surface::new(&mut buf, info).unwrap();
            for (i, color) in colors.iter().enumerate() {
                let native = s.native(*color);
                for y in 0..7 {
                    for x in 0..13 {
                        if (x + y) as usize % colors.len() == i {
                            s.set_pixel(x, y, native);
                        }
                    }
                }
            }
            for y in 0..7 {
                for x in 0..13 {
                    let color = colors[(x + y) as usize % colors.len()];
                    let native = s.get_pixel(x, y).unwrap();
                    assert_eq!(native, s.native(color), "bpp {} at {},{}", bpp, x, y);
                    assert_eq!(s.native(s.color_of(native)), native);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_is_noop() {
        for bpp in DEPTHS {
            let (mut buf, info) = buffer_for(9, 5, bpp);
            let mut s = Surface::new(&mut buf, info).unwrap();
            let white = s.native(Color::WHITE);
            let before = s.buffer().to_vec();
            for (x, y) in [(-1, 0), (0, -1), (9, 0), (0, 5), (i32::MIN, i32::MAX), (100, 100)] {
                s.set_pixel(x, y, white);
                assert_eq!(s.get_pixel(x, y), None);
            }
            s.hline(0, -1, 9, white);
            s.hline(0, 5, 9, white);
            s.hline(-20, 2, 5, white);
            s.hline(9, 2, 5, white);
            s.vline(-1, 0, 5, white);
            s.vline(9, 0, 5, white);
            s.vline(3, -10, 4, white);
            s.hline(2, 2, 0, white);
            s.hline(2, 2, -3, white);
            assert_eq!(s.buffer(), &before[..], "bpp {}", bpp);
        }
    }

    #[test]
    fn test_hline_clips_both_ends() {
        let (mut buf, info) = buffer_for(10, 3, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.hline(-3, 1, 6, NativePixel(7));
        s.hline(8, 2, 100, NativePixel(9));
        assert_eq!(&s.buffer()[10..20], &[7, 7, 7, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&s.buffer()[20..30], &[0, 0, 0, 0, 0, 0, 0, 0, 9, 9]);
        assert_eq!(&s.buffer()[0..10], &[0; 10]);
    }

    #[test]
    fn test_vline_clips_both_ends() {
        let (mut buf, info) = buffer_for(4, 6, 16);
        let mut s = Surface::new(&mut buf, info).unwrap();
        let c = NativePixel(0xABCD);
        s.vline(1, -2, 4, c);
        s.vline(2, 4, 10, c);
        for y in 0..6 {
            assert_eq!(s.get_pixel(1, y), Some(if y < 2 { c } else { NativePixel(0) }));
            assert_eq!(s.get_pixel(2, y), Some(if y >= 4 { c } else { NativePixel(0) }));
        }
    }

    #[test]
    fn test_mono_bit_layout() {
        let (mut buf, info) = buffer_for(16, 2, 1);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_pixel(0, 0, NativePixel(1));
        s.set_pixel(9, 0, NativePixel(1));
        s.hline(4, 1, 8, NativePixel(1));
        assert_eq!(s.buffer(), &[0x80, 0x40, 0x0F, 0xF0]);
        s.set_pixel(0, 0, NativePixel(0));
        assert_eq!(s.buffer()[0], 0x00);
    }

    #[test]
    fn test_byte_order() {
        let (mut buf, info) = buffer_for(2, 1, 32);
        let mut s = Surface::new(&mut buf, info).unwrap();
        let red = s.native(Color::RED);
        s.set_pixel(1, 0, red);
        assert_eq!(s.buffer(), &[0, 0, 0, 0, 0x00, 0x00, 0xFF, 0xFF]);

        let (mut buf, info) = buffer_for(1, 1, 24);
        let mut s = Surface::new(&mut buf, info).unwrap();
        let c = s.native(Color::from_hex(0x102030));
        s.set_pixel(0, 0, c);
        assert_eq!(s.buffer(), &[0x30, 0x20, 0x10]);
    }

    #[test]
    fn test_padded_stride_and_offset() {
        // 4x2 viewport at (2,1) inside a 8x4 buffer with 4 bytes of row padding
        let mut buf = vec![0u8; 12 * 4];
        let info = SurfaceInfo::new(4, 2, 12, 8).with_offset(2, 1);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.hline(-1, 0, 10, NativePixel(0x55));
        s.set_pixel(3, 1, NativePixel(0x66));
        let b = s.buffer();
        assert_eq!(&b[12..24], &[0, 0, 0x55, 0x55, 0x55, 0x55, 0, 0, 0, 0, 0, 0]);
        assert_eq!(b[24 + 5], 0x66);
        assert!(b[..12].iter().all(|&v| v == 0));
        assert_eq!(s.get_pixel(0, 0), Some(NativePixel(0x55)));
    }

    #[test]
    fn test_clear_uses_background() {
        for bpp in DEPTHS {
            let (mut buf, info) = buffer_for(5, 3, bpp);
            let mut s = Surface::new(&mut buf, info).unwrap();
            s.set_background(Color::WHITE);
            s.clear();
            let white = s.native(Color::WHITE);
            for y in 0..3 {
                for x in 0..5 {
                    assert_eq!(s.get_pixel(x, y), Some(white));
                }
            }
        }
    }

    struct FakeDevice {
        memory: Vec<u8>,
        fail_map: bool,
    }

    impl SurfaceProvider for FakeDevice {
        fn info(&self) -> Result<SurfaceInfo> {
            Ok(SurfaceInfo::new(8, 8, 16, 16))
        }

        fn buffer(&mut self) -> Result<&mut [u8]> {
            if self.fail_map {
                return Err(Error::Map("mmap refused"));
            }
            Ok(self.memory.as_mut_slice())
        }
    }

    #[test]
    fn test_from_provider() {
        let mut device = FakeDevice { memory: vec![0; 128], fail_map: false };
        let s = Surface::from_provider(&mut device).unwrap();
        assert_eq!((s.width(), s.height(), s.bits_per_pixel()), (8, 8, 16));

        let mut device = FakeDevice { memory: vec![0; 128], fail_map: true };
        assert_eq!(
            Surface::from_provider(&mut device).err(),
            Some(Error::Map("mmap refused"))
        );
    }

    #[test]
    fn test_draw_target_integration() {
        use embedded_graphics::{
            prelude::*,
            primitives::{PrimitiveStyle, Rectangle},
        };

        let (mut buf, info) = buffer_for(20, 20, 16);
        let mut s = Surface::new(&mut buf, info).unwrap();
        Rectangle::new(Point::new(-2, 3), Size::new(5, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0, 0, 255)))
            .draw(&mut s)
            .unwrap();
        Pixel(Point::new(19, 19), Rgb888::new(255, 0, 0)).draw(&mut s).unwrap();
        Pixel(Point::new(20, 19), Rgb888::new(255, 0, 0)).draw(&mut s).unwrap();

        let blue = s.native(Color::BLUE);
        assert_eq!(s.get_pixel(0, 3), Some(blue));
        assert_eq!(s.get_pixel(2, 6), Some(blue));
        assert_eq!(s.get_pixel(3, 3), Some(NativePixel(0)));
        assert_eq!(s.get_pixel(19, 19), Some(s.native(Color::RED)));
        assert_eq!(s.size(), Size::new(20, 20));
    }
}
