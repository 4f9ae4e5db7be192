use std::fmt;

use serde::{Deserialize, Serialize};

/// Geometry of a terminal as reported by the operating system.
///
/// `rows`/`cols` are character cells. Pixel dimensions are zero on platforms
/// (and terminals) that don't report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
    pub pixel_width: u16,
    pub pixel_height: u16,
}

impl WindowSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            rows,
            cols,
            pixel_width: 0,
            pixel_height: 0,
        }
    }

    pub fn with_pixels(self, pixel_width: u16, pixel_height: u16) -> Self {
        Self {
            pixel_width,
            pixel_height,
            ..self
        }
    }

    /// A report of 0x0 means the size is unknown, not an empty terminal.
    pub fn is_indeterminate(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

#[cfg(unix)]
impl From<libc::winsize> for WindowSize {
    fn from(ws: libc::winsize) -> Self {
        Self {
            rows: ws.ws_row,
            cols: ws.ws_col,
            pixel_width: ws.ws_xpixel,
            pixel_height: ws.ws_ypixel,
        }
    }
}

#[cfg(unix)]
impl From<WindowSize> for libc::winsize {
    fn from(size: WindowSize) -> Self {
        libc::winsize {
            ws_row: size.rows,
            ws_col: size.cols,
            ws_xpixel: size.pixel_width,
            ws_ypixel: size.pixel_height,
        }
    }
}
