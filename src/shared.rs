//! Surface shared between several users
//!
//! A `Surface` assumes a single writer. When more than one context needs
//! to draw (an interrupt handler and a main loop, several threads), put the
//! surface in a `SharedSurface` and draw through `with`:
//!
//! ```ignore
//! static SCREEN: SharedSurface<'static> = SharedSurface::empty();
//!
//! SCREEN.install(Surface::new(memory, info)?);
//! SCREEN.with(|s| s.put_str("ready\n"));
//! ```
use spin::{Mutex, MutexGuard};

use crate::framebuffer::Surface;

pub struct SharedSurface<'a> {
    slot: Mutex<Option<Surface<'a>>>,
}

impl<'a> SharedSurface<'a> {
    /// No surface yet; usable in a `static`.
    pub const fn empty() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub fn new(surface: Surface<'a>) -> Self {
        Self {
            slot: Mutex::new(Some(surface)),
        }
    }

    /// Put `surface` in place, returning the one it replaces.
    pub fn install(&self, surface: Surface<'a>) -> Option<Surface<'a>> {
        self.slot.lock().replace(surface)
    }

    /// Remove the surface, releasing its buffer to the caller.
    pub fn take(&self) -> Option<Surface<'a>> {
        self.slot.lock().take()
    }

    pub fn is_installed(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Run `f` with exclusive access; `None` when no surface is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut Surface<'a>) -> R) -> Option<R> {
        self.slot.lock().as_mut().map(f)
    }

    pub fn lock(&self) -> MutexGuard<'_, Option<Surface<'a>>> {
        self.slot.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::surface::tests::buffer_for;
    use crate::framebuffer::NativePixel;

    #[test]
    fn test_install_and_take() {
        let (mut buf, info) = buffer_for(4, 4, 8);
        let shared = SharedSurface::empty();
        assert!(!shared.is_installed());
        assert_eq!(shared.with(|s| s.width()), None);

        assert!(shared.install(Surface::new(&mut buf, info).unwrap()).is_none());
        assert_eq!(shared.with(|s| s.width()), Some(4));
        let surface = shared.take().unwrap();
        assert_eq!(surface.height(), 4);
        assert!(!shared.is_installed());
    }

    #[test]
    fn test_draw_from_threads() {
        let (mut buf, info) = buffer_for(8, 8, 32);
        let shared = SharedSurface::new(Surface::new(&mut buf, info).unwrap());
        std::thread::scope(|scope| {
            for row in 0..8 {
                let shared = &shared;
                scope.spawn(move || {
                    shared.with(|s| s.hline(0, row, 8, NativePixel(row as u32 + 1)));
                });
            }
        });
        let guard = shared.lock();
        let s = guard.as_ref().unwrap();
        for y in 0..8 {
            assert_eq!(s.get_pixel(7, y), Some(NativePixel(y as u32 + 1)));
        }
    }
}
