//! Bitmap font assets
use super::font_6x8;

/// How characters are mapped to glyph numbers.
#[derive(Debug, Clone, Copy)]
pub enum GlyphMap {
    /// Glyph `i` shows `map[i]`; the first match wins.
    Sparse(&'static [char]),
    /// Glyph `i` shows the character with code `i`, for codes below `count`.
    Dense { count: usize },
}

/// Row-packed glyph data, one word per glyph row. The word type must be at
/// least as wide as the glyph; the leftmost column is the highest used bit.
#[derive(Debug, Clone, Copy)]
pub enum Bitmap {
    Bytes(&'static [u8]),
    Words(&'static [u16]),
    DoubleWords(&'static [u32]),
}

impl Bitmap {
    pub fn row(&self, index: usize) -> Option<u32> {
        match self {
            Bitmap::Bytes(rows) => rows.get(index).map(|&r| r as u32),
            Bitmap::Words(rows) => rows.get(index).map(|&r| r as u32),
            Bitmap::DoubleWords(rows) => rows.get(index).copied(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Font {
    /// Horizontal advance per character.
    pub cell_width: usize,
    /// Vertical advance per line.
    pub cell_height: usize,
    pub glyph_width: usize,
    pub glyph_height: usize,
    pub map: GlyphMap,
    /// Characters drawn at the bottom of the cell instead of the top.
    pub descenders: &'static [char],
    pub bitmap: Bitmap,
}

impl Font {
    /// A font whose glyphs fill their cell exactly.
    pub const fn new(width: usize, height: usize, map: GlyphMap, bitmap: Bitmap) -> Self {
        Self {
            cell_width: width,
            cell_height: height,
            glyph_width: width,
            glyph_height: height,
            map,
            descenders: &[],
            bitmap,
        }
    }

    pub fn glyph_index(&self, ch: char) -> Option<usize> {
        match self.map {
            GlyphMap::Sparse(map) => map.iter().position(|&c| c == ch),
            GlyphMap::Dense { count } => {
                let code = ch as usize;
                (code < count).then_some(code)
            }
        }
    }

    /// Row offset of the glyph for `ch` inside its cell.
    pub fn descent(&self, ch: char) -> usize {
        if self.descenders.contains(&ch) {
            self.cell_height.saturating_sub(self.glyph_height)
        } else {
            0
        }
    }

    /// Row `row` of glyph `index`, left aligned to bit 31. Columns beyond 32
    /// are not representable and are dropped.
    pub fn glyph_row(&self, index: usize, row: usize) -> Option<u32> {
        let width = self.glyph_width.min(32);
        if width == 0 || row >= self.glyph_height {
            return None;
        }
        let bits = self.bitmap.row(index * self.glyph_height + row)?;
        Some(bits << (32 - width))
    }
}

/// Built-in 6x8 font for codes 0x00 to 0x7F in a 6x10 cell. The cell
/// leaves two spare rows so that descenders can drop below the baseline.
pub static FONT_6X8: Font = Font {
    cell_width: 6,
    cell_height: 10,
    glyph_width: 6,
    glyph_height: 8,
    map: GlyphMap::Dense { count: 128 },
    descenders: &[',', '.', 'g', 'p', 'q', 'y'],
    bitmap: Bitmap::Bytes(&font_6x8::GLYPHS),
};
