//! # Text Output
//!
//! Cursor based glyph rendering on a [`Surface`].
//!
//! Characters are drawn at the cursor, which then advances by one cell.
//! Control characters:
//!
//! - `\n`: back to column 0 and down one line
//! - `\r`: back to column 0
//! - `\x0c` (form feed): clear the surface and home the cursor
//!
//! When the next cell would not fit horizontally the cursor wraps to the
//! next line. When a line would extend past the bottom, the contents are
//! shifted up by one line and the cursor stays on the last full line.
//!
//! Characters without a glyph in the active font are skipped without moving
//! the cursor.

mod font;
mod font_6x8;

pub use font::{Bitmap, Font, GlyphMap, FONT_6X8};

use crate::error::{Error, Result};
use crate::framebuffer::{Color, NativePixel, PixelFormat, ShiftDirection, Surface};

/// Per-surface cursor, font and colors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextState {
    pub(crate) cursor_x: usize,
    pub(crate) cursor_y: usize,
    pub(crate) font: &'static Font,
    pub(crate) foreground: NativePixel,
    pub(crate) background: NativePixel,
    pub(crate) opaque: bool,
}

impl TextState {
    pub(crate) fn new(format: PixelFormat) -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            font: &FONT_6X8,
            foreground: format.color_to_native(Color::WHITE),
            background: format.color_to_native(Color::BLACK),
            opaque: true,
        }
    }
}

impl Surface<'_> {
    /// Move the cursor, keeping it inside the surface.
    pub fn goto_xy(&mut self, x: i32, y: i32) {
        let max_x = self.width().saturating_sub(1);
        let max_y = self.height().saturating_sub(1);
        self.text.cursor_x = (x.max(0) as usize).min(max_x);
        self.text.cursor_y = (y.max(0) as usize).min(max_y);
    }

    pub fn cursor_x(&self) -> usize {
        self.text.cursor_x
    }

    pub fn cursor_y(&self) -> usize {
        self.text.cursor_y
    }

    pub fn set_font(&mut self, font: &'static Font) {
        self.text.font = font;
    }

    pub fn font(&self) -> &'static Font {
        self.text.font
    }

    pub fn font_width(&self) -> usize {
        self.text.font.cell_width
    }

    pub fn font_height(&self) -> usize {
        self.text.font.cell_height
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.text.foreground = self.native(color);
    }

    pub fn set_background(&mut self, color: Color) {
        self.text.background = self.native(color);
    }

    pub fn foreground(&self) -> NativePixel {
        self.text.foreground
    }

    pub fn background(&self) -> NativePixel {
        self.text.background
    }

    /// With opaque mode on, each glyph cell is filled with the background
    /// before the glyph is drawn.
    pub fn set_opaque(&mut self, opaque: bool) {
        self.text.opaque = opaque;
    }

    pub fn is_opaque(&self) -> bool {
        self.text.opaque
    }

    pub fn put_char(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.text.cursor_x = 0;
                self.next_line();
            }
            '\r' => self.text.cursor_x = 0,
            '\x0c' => {
                self.clear();
                self.text.cursor_x = 0;
                self.text.cursor_y = 0;
            }
            _ => {
                let font = self.text.font;
                let Some(index) = font.glyph_index(ch) else {
                    return;
                };
                self.draw_glyph(font, index, ch);
                self.text.cursor_x += font.cell_width;
                if self.text.cursor_x + font.cell_width > self.width() {
                    self.text.cursor_x = 0;
                    self.next_line();
                }
            }
        }
    }

    /// Emit every character of `text`; returns the number of characters.
    pub fn put_str(&mut self, text: &str) -> usize {
        let mut count = 0;
        for ch in text.chars() {
            self.put_char(ch);
            count += 1;
        }
        count
    }

    /// Emit UTF-8 encoded `bytes`.
    ///
    /// On invalid input everything before the bad sequence is drawn and
    /// `Error::Encoding` reports where decoding stopped.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        match core::str::from_utf8(bytes) {
            Ok(text) => Ok(self.put_str(text)),
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                if let Ok(prefix) = core::str::from_utf8(&bytes[..valid_up_to]) {
                    self.put_str(prefix);
                }
                Err(Error::Encoding { valid_up_to })
            }
        }
    }

    fn next_line(&mut self) {
        let line = self.text.font.cell_height;
        self.text.cursor_y += line;
        if self.text.cursor_y + line > self.height() {
            self.shift(ShiftDirection::Up, line);
            self.text.cursor_y -= line;
        }
    }

    fn draw_glyph(&mut self, font: &Font, index: usize, ch: char) {
        let x = clamp_i32(self.text.cursor_x);
        let y = clamp_i32(self.text.cursor_y);

        if self.text.opaque {
            let background = self.text.background;
            let width = clamp_i32(font.cell_width);
            for row in 0..clamp_i32(font.cell_height) {
                self.hline(x, y.saturating_add(row), width, background);
            }
        }

        let foreground = self.text.foreground;
        let top = y.saturating_add(clamp_i32(font.descent(ch)));
        for row in 0..font.glyph_height {
            let Some(mut bits) = font.glyph_row(index, row) else {
                break;
            };
            let py = top.saturating_add(clamp_i32(row));
            let mut px = x;
            while bits != 0 {
                if bits & 0x8000_0000 != 0 {
                    self.set_pixel(px, py, foreground);
                }
                bits <<= 1;
                px = px.saturating_add(1);
            }
        }
    }
}

#[inline]
fn clamp_i32(v: usize) -> i32 {
    v.min(i32::MAX as usize) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::surface::tests::buffer_for;

    const BLOCK: [u8; 8] = [0x3F; 8];
    const DOT: [u8; 8] = [0x20, 0, 0, 0, 0, 0, 0, 0];

    static CELLS: [u8; 16] = {
        let mut rows = [0u8; 16];
        let mut i = 0;
        while i < 8 {
            rows[i] = BLOCK[i];
            rows[8 + i] = DOT[i];
            i += 1;
        }
        rows
    };

    /// 6x8 font with a solid block for 'a' and a single top-left dot for 'b'.
    static SIX_BY_EIGHT: Font = Font::new(6, 8, GlyphMap::Sparse(&['a', 'b']), Bitmap::Bytes(&CELLS));

    const WHITE: NativePixel = NativePixel(255);
    const BLACK: NativePixel = NativePixel(0);

    #[test]
    fn test_defaults() {
        let (mut buf, info) = buffer_for(40, 20, 32);
        let s = Surface::new(&mut buf, info).unwrap();
        assert_eq!((s.cursor_x(), s.cursor_y()), (0, 0));
        assert_eq!((s.font_width(), s.font_height()), (6, 10));
        assert_eq!(s.foreground(), NativePixel(0xFFFF_FFFF));
        assert_eq!(s.background(), NativePixel(0xFF00_0000));
        assert!(s.is_opaque());
    }

    #[test]
    fn test_wrap_after_last_full_cell() {
        let (mut buf, info) = buffer_for(36, 16, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        assert_eq!(s.put_str("aaaaaaa"), 7);
        assert_eq!((s.cursor_x(), s.cursor_y()), (6, 8));
        // first row fully covered, second row has one cell
        assert_eq!(s.get_pixel(35, 7), Some(WHITE));
        assert_eq!(s.get_pixel(5, 8), Some(WHITE));
        assert_eq!(s.get_pixel(6, 8), Some(BLACK));
    }

    #[test]
    fn test_newline_scrolls_at_bottom() {
        let (mut buf, info) = buffer_for(18, 16, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        s.put_str("b\n");
        assert_eq!((s.cursor_x(), s.cursor_y()), (0, 8));
        s.put_str("ab\n");
        assert_eq!((s.cursor_x(), s.cursor_y()), (0, 8));
        // the second line moved to the top, the bottom line is blank
        assert_eq!(s.get_pixel(5, 7), Some(WHITE));
        assert_eq!(s.get_pixel(6, 0), Some(WHITE));
        assert_eq!(s.get_pixel(7, 0), Some(BLACK));
        for y in 8..16 {
            for x in 0..18 {
                assert_eq!(s.get_pixel(x, y), Some(BLACK));
            }
        }
    }

    #[test]
    fn test_wrap_scrolls_at_bottom() {
        let (mut buf, info) = buffer_for(12, 8, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        s.put_str("a");
        assert_eq!((s.cursor_x(), s.cursor_y()), (6, 0));
        s.put_str("a");
        // wrapped and scrolled: the line is gone, the cursor stays on row 0
        assert_eq!((s.cursor_x(), s.cursor_y()), (0, 0));
        assert!(s.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_carriage_return_and_opaque_cell() {
        let (mut buf, info) = buffer_for(24, 8, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        s.put_str("aa\rb");
        assert_eq!((s.cursor_x(), s.cursor_y()), (6, 0));
        assert_eq!(s.get_pixel(0, 0), Some(WHITE));
        // the rest of the first cell was repainted with the background
        assert_eq!(s.get_pixel(1, 0), Some(BLACK));
        assert_eq!(s.get_pixel(5, 7), Some(BLACK));
        assert_eq!(s.get_pixel(6, 0), Some(WHITE));
    }

    #[test]
    fn test_wide_glyph_rows() {
        // 12 columns per row, stored as 16-bit words
        static WIDE: Font = Font::new(12, 2, GlyphMap::Sparse(&['w']), Bitmap::Words(&[0x0801, 0x0FFF]));
        let (mut buf, info) = buffer_for(30, 4, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&WIDE);
        assert_eq!(s.put_str("ww"), 2);
        assert_eq!((s.cursor_x(), s.cursor_y()), (24, 0));
        for x in 0..24 {
            let top = if x % 12 == 0 || x % 12 == 11 { WHITE } else { BLACK };
            assert_eq!(s.get_pixel(x, 0), Some(top), "top row at {}", x);
            assert_eq!(s.get_pixel(x, 1), Some(WHITE), "bottom row at {}", x);
        }
        assert_eq!(s.get_pixel(24, 1), Some(BLACK));
        assert_eq!(s.get_pixel(0, 2), Some(BLACK));
    }

    #[test]
    fn test_transparent_mode_keeps_pixels() {
        let (mut buf, info) = buffer_for(24, 8, 16);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        s.set_foreground(Color::RED);
        s.put_char('a');
        s.goto_xy(0, 0);
        s.set_opaque(false);
        s.set_foreground(Color::BLUE);
        s.put_char('b');
        assert_eq!(s.get_pixel(0, 0), Some(s.native(Color::BLUE)));
        assert_eq!(s.get_pixel(1, 0), Some(s.native(Color::RED)));
        assert_eq!(s.get_pixel(6, 0), Some(NativePixel(0)));
    }

    #[test]
    fn test_form_feed_clears_and_homes() {
        let (mut buf, info) = buffer_for(24, 16, 24);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        s.set_background(Color::GREEN);
        s.put_str("aa\na");
        s.put_char('\x0c');
        assert_eq!((s.cursor_x(), s.cursor_y()), (0, 0));
        let green = s.native(Color::GREEN);
        for y in 0..16 {
            for x in 0..24 {
                assert_eq!(s.get_pixel(x, y), Some(green));
            }
        }
    }

    #[test]
    fn test_missing_glyph_is_skipped() {
        let (mut buf, info) = buffer_for(24, 8, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        assert_eq!(s.put_str("zbz"), 3);
        assert_eq!((s.cursor_x(), s.cursor_y()), (6, 0));
        assert_eq!(s.get_pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn test_invalid_utf8_draws_prefix() {
        let (mut buf, info) = buffer_for(36, 8, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_font(&SIX_BY_EIGHT);
        assert_eq!(s.put_bytes(b"ab\xFFa"), Err(Error::Encoding { valid_up_to: 2 }));
        assert_eq!(s.cursor_x(), 12);
        assert_eq!(s.get_pixel(12, 0), Some(BLACK));
        assert_eq!(s.put_bytes("ab".as_bytes()), Ok(2));
    }

    #[test]
    fn test_builtin_font_and_descenders() {
        let (mut buf, info) = buffer_for(60, 20, 8);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.put_str("Ag");
        // 'A' row 1 is 0b000100
        assert_eq!(s.get_pixel(3, 1), Some(WHITE));
        assert_eq!(s.get_pixel(2, 1), Some(BLACK));
        // 'g' row 1 is 0b001101, drawn two rows lower
        assert_eq!(s.get_pixel(6 + 2, 3), Some(WHITE));
        assert_eq!(s.get_pixel(6 + 3, 3), Some(WHITE));
        assert_eq!(s.get_pixel(6 + 5, 3), Some(WHITE));
        assert_eq!(s.get_pixel(6 + 2, 1), Some(BLACK));
        assert_eq!(s.cursor_x(), 12);
        s.put_char('é');
        assert_eq!(s.cursor_x(), 12);
    }

    #[test]
    fn test_goto_xy_is_bounded() {
        let (mut buf, info) = buffer_for(30, 20, 1);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.goto_xy(-4, 100);
        assert_eq!((s.cursor_x(), s.cursor_y()), (0, 19));
        s.goto_xy(12, 3);
        assert_eq!((s.cursor_x(), s.cursor_y()), (12, 3));
    }
}
