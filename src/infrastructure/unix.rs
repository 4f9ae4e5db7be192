use std::os::fd::{AsFd, AsRawFd};

use crate::domain::primitive::WindowSize;
use crate::shared::error::QueryError;

/// Issue `TIOCGWINSZ` against `fd`.
///
/// The request number and `winsize` layout come from `libc` for the target
/// platform; nothing here is hand-derived.
pub fn get_winsize(fd: impl AsFd) -> Result<WindowSize, QueryError> {
    let raw_fd = fd.as_fd().as_raw_fd();
    let mut ws: libc::winsize = WindowSize::default().into();

    // SAFETY: `raw_fd` is borrowed from a live `AsFd` for the duration of the
    // call, and `ws` is a properly sized `winsize` the kernel writes into.
    // The request type differs between libc targets (c_ulong vs c_int).
    #[allow(clippy::useless_conversion)]
    let result = unsafe { libc::ioctl(raw_fd, libc::TIOCGWINSZ.into(), &mut ws) };
    if result != 0 {
        return Err(QueryError::last_os_error());
    }

    Ok(ws.into())
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::os::fd::BorrowedFd;

    use portable_pty::{native_pty_system, PtyPair, PtySize};

    use super::get_winsize;
    use crate::domain::primitive::WindowSize;
    use crate::shared::error::QueryError;

    fn open_pty(cols: u16, rows: u16) -> anyhow::Result<PtyPair> {
        native_pty_system().openpty(PtySize {
            rows,
            cols,
            pixel_width: 0,
            pixel_height: 0,
        })
    }

    fn query_master(pair: &PtyPair) -> Result<WindowSize, QueryError> {
        let raw_fd = pair
            .master
            .as_raw_fd()
            .expect("unix pty master exposes its fd");
        // SAFETY: the fd is owned by `pair`, which outlives this borrow.
        let fd = unsafe { BorrowedFd::borrow_raw(raw_fd) };
        get_winsize(fd)
    }

    // =========================================================================
    // Tests: terminal descriptors
    // =========================================================================

    #[test]
    fn reports_24_by_80_terminal() -> anyhow::Result<()> {
        let pair = open_pty(80, 24)?;
        let size = query_master(&pair)?;
        assert_eq!(size.rows, 24);
        assert_eq!(size.cols, 80);
        Ok(())
    }

    #[test]
    fn reports_pixel_dimensions_when_set() -> anyhow::Result<()> {
        let pair = native_pty_system().openpty(PtySize {
            rows: 30,
            cols: 100,
            pixel_width: 900,
            pixel_height: 600,
        })?;
        let size = query_master(&pair)?;
        assert_eq!(size, WindowSize::new(100, 30).with_pixels(900, 600));
        Ok(())
    }

    #[test]
    fn successive_queries_agree_without_resize() -> anyhow::Result<()> {
        let pair = open_pty(120, 40)?;
        let first = query_master(&pair)?;
        let second = query_master(&pair)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn query_after_resize_reflects_new_size() -> anyhow::Result<()> {
        let pair = open_pty(80, 24)?;
        let before = query_master(&pair)?;

        pair.master.resize(PtySize {
            rows: 50,
            cols: 160,
            pixel_width: 0,
            pixel_height: 0,
        })?;
        let after = query_master(&pair)?;

        assert_eq!(before, WindowSize::new(80, 24));
        assert_eq!(after, WindowSize::new(160, 50));
        Ok(())
    }

    // =========================================================================
    // Tests: non-terminal descriptors
    // =========================================================================

    #[test]
    fn dev_null_is_not_a_terminal() -> anyhow::Result<()> {
        let file = File::open("/dev/null")?;
        let err = get_winsize(&file).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ENOTTY));
        Ok(())
    }

    #[test]
    fn regular_file_is_not_a_terminal() -> anyhow::Result<()> {
        let file = File::open(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))?;
        let err = get_winsize(&file).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ENOTTY));
        Ok(())
    }

    #[test]
    fn pipe_is_not_a_terminal() -> anyhow::Result<()> {
        let mut child = std::process::Command::new("true")
            .stdout(std::process::Stdio::piped())
            .spawn()?;
        let stdout = child.stdout.take().expect("stdout was piped");
        let result = get_winsize(&stdout);
        child.wait()?;
        assert!(matches!(result, Err(QueryError::Os(_))));
        Ok(())
    }
}
