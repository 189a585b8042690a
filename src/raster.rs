//! Lines, rectangles, circles and discs built on the surface primitives
use bitflags::bitflags;

use crate::framebuffer::{NativePixel, Surface};

bitflags! {
    /// The eight symmetric arcs of a circle, counter-clockwise from the
    /// positive x axis. Bit `i` enables arc `i`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Octants: u8 {
        const ENE = 0b0000_0001;
        const NNE = 0b0000_0010;
        const NNW = 0b0000_0100;
        const WNW = 0b0000_1000;
        const WSW = 0b0001_0000;
        const SSW = 0b0010_0000;
        const SSE = 0b0100_0000;
        const ESE = 0b1000_0000;

        const TOP = Self::NNE.bits() | Self::NNW.bits();
        const BOTTOM = Self::SSW.bits() | Self::SSE.bits();
        const LEFT = Self::WNW.bits() | Self::WSW.bits();
        const RIGHT = Self::ENE.bits() | Self::ESE.bits();
        const ALL = 0xFF;
    }
}

/// Drawing operations
impl Surface<'_> {
    /// Bresenham line from (`x1`, `y1`) towards (`x2`, `y2`).
    ///
    /// The end point itself is not drawn; callers wanting a closed segment
    /// plot it explicitly.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: NativePixel) {
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();

        if dx >= dy {
            let steps = BresenhamSteps::new((x1, sx, dx), (y1, sy, dy), self.width());
            for (x, y) in steps {
                self.plot(x, y, color);
            }
        } else {
            let steps = BresenhamSteps::new((y1, sy, dy), (x1, sx, dx), self.height());
            for (y, x) in steps {
                self.plot(x, y, color);
            }
        }
    }

    /// Outline of the rectangle spanned by two opposite corners, both
    /// corners included.
    pub fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: NativePixel) {
        let (left, top, right, bottom) = normalize(x1, y1, x2, y2);
        let w = right - left + 1;
        let h = bottom - top + 1;

        self.span_h(left, top, w, color);
        self.span_h(left, bottom, w, color);
        self.span_v(left, top, h, color);
        self.span_v(right, top, h, color);
    }

    /// Filled rectangle spanned by two opposite corners, both corners included.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: NativePixel) {
        let (left, top, right, bottom) = normalize(x1, y1, x2, y2);
        let w = right - left + 1;
        // only rows inside the surface
        let first = top.max(0);
        let last = bottom.min(self.height() as i64 - 1);
        for row in first..=last {
            self.span_h(left, row, w, color);
        }
    }

    /// Midpoint circle restricted to the arcs in `octants`.
    pub fn circle_octants(&mut self, octants: Octants, cx: i32, cy: i32, r: i32, color: NativePixel) {
        let (x, y) = (cx as i64, cy as i64);
        for (dx, dy) in MidpointSteps::new(r) {
            if octants.contains(Octants::ENE) {
                self.plot(x + dx, y - dy, color);
            }
            if octants.contains(Octants::NNE) {
                self.plot(x + dy, y - dx, color);
            }
            if octants.contains(Octants::NNW) {
                self.plot(x - dy, y - dx, color);
            }
            if octants.contains(Octants::WNW) {
                self.plot(x - dx, y - dy, color);
            }
            if octants.contains(Octants::WSW) {
                self.plot(x - dx, y + dy, color);
            }
            if octants.contains(Octants::SSW) {
                self.plot(x - dy, y + dx, color);
            }
            if octants.contains(Octants::SSE) {
                self.plot(x + dy, y + dx, color);
            }
            if octants.contains(Octants::ESE) {
                self.plot(x + dx, y + dy, color);
            }
        }
    }

    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: NativePixel) {
        self.circle_octants(Octants::ALL, cx, cy, r, color);
    }

    /// Filled arcs: for every midpoint step each octant gets one run from
    /// the diagonal out to the circle boundary, inclusive at both ends.
    pub fn disc_octants(&mut self, octants: Octants, cx: i32, cy: i32, r: i32, color: NativePixel) {
        let (x, y) = (cx as i64, cy as i64);
        for (dx, dy) in MidpointSteps::new(r) {
            let n = dx - dy + 1;
            if octants.contains(Octants::ENE) {
                self.span_h(x + dy, y - dy, n, color);
            }
            if octants.contains(Octants::NNE) {
                self.span_v(x + dy, y - dx, n, color);
            }
            if octants.contains(Octants::NNW) {
                self.span_v(x - dy, y - dx, n, color);
            }
            if octants.contains(Octants::WNW) {
                self.span_h(x - dx, y - dy, n, color);
            }
            if octants.contains(Octants::WSW) {
                self.span_h(x - dx, y + dy, n, color);
            }
            if octants.contains(Octants::SSW) {
                self.span_v(x - dy, y + dy, n, color);
            }
            if octants.contains(Octants::SSE) {
                self.span_v(x + dy, y + dy, n, color);
            }
            if octants.contains(Octants::ESE) {
                self.span_h(x + dy, y + dy, n, color);
            }
        }
    }

    pub fn disc(&mut self, cx: i32, cy: i32, r: i32, color: NativePixel) {
        self.disc_octants(Octants::ALL, cx, cy, r, color);
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: NativePixel) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// `hline` for wide intermediate coordinates.
    fn span_h(&mut self, x: i64, y: i64, len: i64, color: NativePixel) {
        if let Some((x, len)) = narrow_span(x, len) {
            if let Ok(y) = i32::try_from(y) {
                self.hline(x, y, len, color);
            }
        }
    }

    fn span_v(&mut self, x: i64, y: i64, len: i64, color: NativePixel) {
        if let Some((y, len)) = narrow_span(y, len) {
            if let Ok(x) = i32::try_from(x) {
                self.vline(x, y, len, color);
            }
        }
    }
}

/// `(dx, dy)` offsets of the first octant, from `(r, 0)` to the diagonal.
struct MidpointSteps {
    dda: i64,
    dx: i64,
    dy: i64,
}

impl MidpointSteps {
    fn new(r: i32) -> Self {
        let r = r as i64;
        Self { dda: r, dx: r, dy: 0 }
    }
}

impl Iterator for MidpointSteps {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.dx < self.dy {
            return None;
        }
        let step = (self.dx, self.dy);
        self.dy += 1;
        self.dda -= self.dy;
        if self.dda < 0 {
            self.dda += self.dx;
            self.dx -= 1;
        }
        Some(step)
    }
}

/// `(major, minor)` points of a Bresenham walk, limited to the steps whose
/// major coordinate lies in `[0, limit)`.
struct BresenhamSteps {
    major: i64,
    minor: i64,
    step_major: i64,
    step_minor: i64,
    delta_major: i64,
    delta_minor: i64,
    dda: i64,
    remaining: i64,
}

impl BresenhamSteps {
    /// Each axis is `(start, step, delta)`; the walk takes `delta` major
    /// steps and stops before the end point.
    fn new(major: (i64, i64, i64), minor: (i64, i64, i64), limit: usize) -> Self {
        let (start, step_major, delta_major) = major;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let (enter, leave) = if step_major > 0 {
            (-start, limit.saturating_sub(start))
        } else {
            (start.saturating_sub(limit - 1), start + 1)
        };
        let first = enter.clamp(0, delta_major);
        let end = leave.clamp(0, delta_major);

        let mut walk = Self {
            major: start,
            minor: minor.0,
            step_major,
            step_minor: minor.1,
            delta_major,
            delta_minor: minor.2,
            dda: delta_major / 2,
            remaining: (end - first).max(0),
        };
        if walk.remaining > 0 && first > 0 {
            walk.jump(first);
        }
        walk
    }

    /// Jump over `k` steps at once, `0 < k < delta_major`.
    fn jump(&mut self, k: i64) {
        let (k, major, minor) = (k as i128, self.delta_major as i128, self.delta_minor as i128);
        let half = self.dda as i128;
        // minor steps taken so far, leaving dda in (0, delta_major]
        let m = (k * minor - half).div_euclid(major) + 1;
        self.major += self.step_major * k as i64;
        self.minor += self.step_minor * m as i64;
        self.dda = (half - k * minor + m * major) as i64;
    }
}

impl Iterator for BresenhamSteps {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = (self.major, self.minor);
        self.remaining -= 1;
        self.major += self.step_major;
        self.dda -= self.delta_minor;
        if self.dda <= 0 {
            self.minor += self.step_minor;
            self.dda += self.delta_major;
        }
        Some(point)
    }
}

fn normalize(x1: i32, y1: i32, x2: i32, y2: i32) -> (i64, i64, i64, i64) {
    let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
    (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
}

/// Shorten a run with a negative start so that it fits `i32`; the surface
/// clips the rest.
fn narrow_span(mut start: i64, mut len: i64) -> Option<(i32, i32)> {
    if start < 0 {
        len += start;
        start = 0;
    }
    if len <= 0 {
        return None;
    }
    let start = i32::try_from(start).ok()?;
    Some((start, len.min(i32::MAX as i64) as i32))
}
