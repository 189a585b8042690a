//! Formatted text output
use alloc::string::String;
use core::fmt::{self, Write};

use crate::error::{Error, Result};
use crate::framebuffer::Surface;

/// A writer that only counts the bytes it is given.
#[derive(Debug, Default)]
pub struct FmtLen {
    len: usize,
}

impl FmtLen {
    pub fn new() -> Self {
        FmtLen { len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Write for FmtLen {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len = self.len.saturating_add(s.len());
        Ok(())
    }
}

/// Number of bytes `args` expands to.
pub fn formatted_len(args: fmt::Arguments<'_>) -> usize {
    let mut counter = FmtLen::new();
    // a failing Display impl stops the count early, same as the write below
    let _ = counter.write_fmt(args);
    counter.len()
}

impl Surface<'_> {
    /// `printf` for surfaces: format into a temporary string, then emit it
    /// like `put_str`.
    ///
    /// Returns the number of characters drawn, or `Error::OutOfMemory` with
    /// nothing drawn when the string cannot be allocated.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<usize> {
        let requested = formatted_len(args);
        let mut text = String::new();
        text.try_reserve_exact(requested)
            .map_err(|_| Error::OutOfMemory { requested })?;
        let _ = text.write_fmt(args);
        Ok(self.put_str(&text))
    }
}

/// Direct formatting without the temporary string, for `write!`.
impl Write for Surface<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(s);
        Ok(())
    }
}

/// Formatted output at the cursor of a surface.
///
/// ```ignore
/// fb_print!(surface, "{} x {}", width, height)?;
/// ```
#[macro_export]
macro_rules! fb_print {
    ($surface:expr, $($arg:tt)*) => {
        $surface.print_fmt(core::format_args!($($arg)*))
    };
}

/// Like `fb_print!`, followed by a newline.
#[macro_export]
macro_rules! fb_println {
    ($surface:expr) => {
        $surface.print_fmt(core::format_args!("\n"))
    };
    ($surface:expr, $($arg:tt)*) => {
        $surface.print_fmt(core::format_args!("{}\n", core::format_args!($($arg)*)))
    };
}
