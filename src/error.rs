use core::fmt;

/// Errors reported by surface setup and by text output.
///
/// Geometry never produces an error: out-of-range drawing is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The surface provider could not open its device.
    Open(&'static str),
    /// The surface provider could not query the screen geometry.
    ScreenInfo(&'static str),
    /// The surface provider could not map the pixel memory.
    Map(&'static str),
    /// Bits per pixel other than 1, 8, 16, 24 or 32.
    UnsupportedDepth(u32),
    StrideTooSmall { stride: usize, required: usize },
    BufferTooSmall { len: usize, required: usize },
    /// Invalid UTF-8 in text passed to `put_bytes`; everything before
    /// `valid_up_to` has already been drawn.
    Encoding { valid_up_to: usize },
    /// The temporary buffer for formatted output could not be allocated.
    OutOfMemory { requested: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open(why) => write!(f, "cannot open framebuffer device: {}", why),
            Error::ScreenInfo(why) => write!(f, "cannot query screen info: {}", why),
            Error::Map(why) => write!(f, "cannot map framebuffer memory: {}", why),
            Error::UnsupportedDepth(bpp) => write!(f, "unsupported depth: {} bits per pixel", bpp),
            Error::StrideTooSmall { stride, required } => {
                write!(f, "stride {} is below the {} bytes a scan line needs", stride, required)
            }
            Error::BufferTooSmall { len, required } => {
                write!(f, "buffer holds {} bytes, geometry needs {}", len, required)
            }
            Error::Encoding { valid_up_to } => {
                write!(f, "invalid UTF-8 sequence at byte {}", valid_up_to)
            }
            Error::OutOfMemory { requested } => {
                write!(f, "insufficient memory for formatted output ({} bytes)", requested)
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::UnsupportedDepth(4).to_string(),
            "unsupported depth: 4 bits per pixel"
        );
        assert_eq!(
            Error::Encoding { valid_up_to: 3 }.to_string(),
            "invalid UTF-8 sequence at byte 3"
        );
        assert!(Error::Open("no such device").to_string().contains("no such device"));
    }
}
