//! Scrolling the surface contents
use log::trace;

use super::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Out-of-viewport bits sharing a byte with the viewport edges.
///
/// Every row write in `shift` is wrapped in `take` and `restore`, so those
/// bits neither move into the viewport nor get overwritten.
#[derive(Debug, Clone, Copy)]
struct Edges {
    first: usize,
    last: usize,
    lead: u8,
    trail: u8,
}

impl Edges {
    fn is_empty(&self) -> bool {
        self.lead == 0 && self.trail == 0
    }

    /// Clear the outside bits of a row, returning them.
    fn take(&self, buf: &mut [u8], row: usize) -> (u8, u8) {
        let saved = (buf[row + self.first] & self.lead, buf[row + self.last] & self.trail);
        self.restore(buf, row, (0, 0));
        saved
    }

    fn restore(&self, buf: &mut [u8], row: usize, (lead, trail): (u8, u8)) {
        let first = &mut buf[row + self.first];
        *first = (*first & !self.lead) | lead;
        let last = &mut buf[row + self.last];
        *last = (*last & !self.trail) | trail;
    }
}

impl Surface<'_> {
    /// Move the visible contents and zero the vacated area.
    ///
    /// For `Left` and `Right` the amount is in bytes of each scan line, so
    /// callers convert pixels with the format's bytes per pixel. For `Up` and
    /// `Down` it is in rows. Amounts beyond the viewport are clamped, which
    /// simply clears it. Pixels outside the viewport are never changed, even
    /// when a 1bpp viewport starts or ends inside a byte.
    pub fn shift(&mut self, direction: ShiftDirection, amount: usize) {
        let (lo, hi) = self.row_span();
        let (lead, trail) = self.edge_masks();
        let stride = self.stride();
        let top = self.y_offset();
        let rows = self.height();

        let limit = match direction {
            ShiftDirection::Left | ShiftDirection::Right => hi - lo,
            ShiftDirection::Up | ShiftDirection::Down => rows,
        };
        let n = amount.min(limit);
        if n < amount {
            trace!("shift {:?} by {} clamped to {}", direction, amount, n);
        }
        if n == 0 || rows == 0 || hi == lo {
            return;
        }

        let edges = Edges {
            first: lo,
            last: hi - 1,
            lead,
            trail,
        };
        // contiguous rows can be moved as one block
        let full_rows = lo == 0 && hi == stride && edges.is_empty();
        let buf = self.buffer_mut();

        match direction {
            ShiftDirection::Left => {
                for y in top..top + rows {
                    let row = y * stride;
                    let saved = edges.take(buf, row);
                    buf.copy_within(row + lo + n..row + hi, row + lo);
                    buf[row + hi - n..row + hi].fill(0);
                    edges.restore(buf, row, saved);
                }
            }
            ShiftDirection::Right => {
                for y in top..top + rows {
                    let row = y * stride;
                    let saved = edges.take(buf, row);
                    buf.copy_within(row + lo..row + hi - n, row + lo + n);
                    buf[row + lo..row + lo + n].fill(0);
                    edges.restore(buf, row, saved);
                }
            }
            ShiftDirection::Up => {
                let kept = rows - n;
                if full_rows && kept > 0 {
                    let src = (top + n) * stride;
                    buf.copy_within(src..src + (kept - 1) * stride + hi, top * stride);
                } else {
                    for y in 0..kept {
                        let dst = (top + y) * stride;
                        let src = (top + y + n) * stride;
                        let saved = edges.take(buf, dst);
                        buf.copy_within(src + lo..src + hi, dst + lo);
                        edges.restore(buf, dst, saved);
                    }
                }
                for y in top + kept..top + rows {
                    clear_row(buf, &edges, y * stride, lo, hi);
                }
            }
            ShiftDirection::Down => {
                let kept = rows - n;
                if full_rows && kept > 0 {
                    let src = top * stride;
                    buf.copy_within(src..src + (kept - 1) * stride + hi, (top + n) * stride);
                } else {
                    for y in (0..kept).rev() {
                        let dst = (top + y + n) * stride;
                        let src = (top + y) * stride;
                        let saved = edges.take(buf, dst);
                        buf.copy_within(src + lo..src + hi, dst + lo);
                        edges.restore(buf, dst, saved);
                    }
                }
                for y in top..top + n {
                    clear_row(buf, &edges, y * stride, lo, hi);
                }
            }
        }
    }
}

fn clear_row(buf: &mut [u8], edges: &Edges, row: usize, lo: usize, hi: usize) {
    let saved = edges.take(buf, row);
    buf[row + lo..row + hi].fill(0);
    edges.restore(buf, row, saved);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::surface::tests::buffer_for;
    use crate::framebuffer::{NativePixel, SurfaceInfo};
    use alloc::vec;
    use alloc::vec::Vec;

    fn numbered(width: usize, height: usize) -> (Vec<u8>, SurfaceInfo) {
        let (mut buf, info) = buffer_for(width, height, 8);
        for (i, b) in buf.iter_mut().enumerate() {
            *b = (i % 251) as u8 + 1;
        }
        (buf, info)
    }

    #[test]
    fn test_shift_up_moves_rows_and_zeroes_bottom() {
        let (mut buf, info) = numbered(4, 5);
        let original = buf.clone();
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.shift(ShiftDirection::Up, 2);
        let b = s.buffer();
        assert_eq!(&b[0..12], &original[8..20]);
        assert_eq!(&b[12..20], &[0; 8]);
    }

    #[test]
    fn test_shift_down_moves_rows_and_zeroes_top() {
        let (mut buf, info) = numbered(4, 5);
        let original = buf.clone();
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.shift(ShiftDirection::Down, 1);
        let b = s.buffer();
        assert_eq!(&b[0..4], &[0; 4]);
        assert_eq!(&b[4..20], &original[0..16]);
    }

    #[test]
    fn test_shift_left_right_are_per_row() {
        let (mut buf, info) = numbered(5, 2);
        let original = buf.clone();
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.shift(ShiftDirection::Left, 2);
        assert_eq!(&s.buffer()[0..5], &[original[2], original[3], original[4], 0, 0]);
        assert_eq!(&s.buffer()[5..10], &[original[7], original[8], original[9], 0, 0]);
        s.shift(ShiftDirection::Right, 1);
        assert_eq!(&s.buffer()[0..5], &[0, original[2], original[3], original[4], 0]);
    }

    #[test]
    fn test_inverse_shift_restores_interior() {
        for (dir, back) in [
            (ShiftDirection::Left, ShiftDirection::Right),
            (ShiftDirection::Right, ShiftDirection::Left),
            (ShiftDirection::Up, ShiftDirection::Down),
            (ShiftDirection::Down, ShiftDirection::Up),
        ] {
            let (mut buf, info) = numbered(7, 6);
            let original = buf.clone();
            let mut s = Surface::new(&mut buf, info).unwrap();
            s.shift(dir, 3);
            s.shift(back, 3);
            for y in 0..6usize {
                for x in 0..7usize {
                    let zeroed = match dir {
                        ShiftDirection::Left => x < 3,
                        ShiftDirection::Right => x >= 4,
                        ShiftDirection::Up => y < 3,
                        ShiftDirection::Down => y >= 3,
                    };
                    let got = s.buffer()[y * 7 + x];
                    if zeroed {
                        assert_eq!(got, 0, "{:?} at {},{}", dir, x, y);
                    } else {
                        assert_eq!(got, original[y * 7 + x], "{:?} at {},{}", dir, x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_oversized_shift_clears() {
        let (mut buf, info) = numbered(4, 3);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.shift(ShiftDirection::Up, 100);
        assert!(s.buffer().iter().all(|&b| b == 0));

        let (mut buf, info) = numbered(4, 3);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.shift(ShiftDirection::Right, 4);
        assert!(s.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_shift_stays_inside_viewport() {
        // 2x2 window at (1,1) in a 4x4, 8bpp buffer
        let mut buf = vec![0xEEu8; 16];
        let info = SurfaceInfo::new(2, 2, 4, 8).with_offset(1, 1);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_pixel(0, 1, NativePixel(0x11));
        s.shift(ShiftDirection::Up, 1);
        assert_eq!(s.get_pixel(0, 0), Some(NativePixel(0x11)));
        assert_eq!(s.get_pixel(0, 1), Some(NativePixel(0)));
        let b = s.buffer();
        assert!(b[0..4].iter().all(|&v| v == 0xEE));
        assert_eq!(b[4], 0xEE);
        assert_eq!(b[7], 0xEE);
        assert!(b[12..16].iter().all(|&v| v == 0xEE));
    }

    #[test]
    fn test_mono_unaligned_shift_keeps_neighbour_bits() {
        // 8x2 window at x = 3 in 16-pixel rows; bits 0-2 and 11-15 of each
        // row belong to someone else
        let mut buf = vec![0u8; 4];
        buf[1] = 0x01;
        buf[2] = 0x80;
        buf[3] = 0x02;
        let info = SurfaceInfo::new(8, 2, 2, 1).with_offset(3, 0);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.set_pixel(0, 1, NativePixel(1));
        s.set_pixel(7, 1, NativePixel(1));

        s.shift(ShiftDirection::Up, 1);
        assert_eq!(s.buffer(), &[0x10, 0x21, 0x80, 0x02]);
        assert_eq!(s.get_pixel(0, 0), Some(NativePixel(1)));
        assert_eq!(s.get_pixel(7, 0), Some(NativePixel(1)));

        s.shift(ShiftDirection::Down, 1);
        assert_eq!(s.buffer(), &[0x00, 0x01, 0x90, 0x22]);

        // a whole-byte move pushes the window contents past its edges, but
        // neither lets outside bits in nor clears them
        s.shift(ShiftDirection::Left, 1);
        assert_eq!(s.buffer(), &[0x00, 0x01, 0x80, 0x02]);
        for y in 0..2 {
            assert!((0..8).all(|x| s.get_pixel(x, y) == Some(NativePixel(0))));
        }
    }
}
