#[cfg(unix)]
use std::os::fd::{AsFd, AsRawFd};

use crate::domain::primitive::{Stream, WindowSize};
use crate::shared::error::QueryError;

/// Query the size of the terminal connected to standard input.
///
/// Every call asks the OS again; nothing is cached, so a resize between two
/// calls shows up in the second result.
pub fn query() -> Result<WindowSize, QueryError> {
    query_stream(Stream::Stdin)
}

/// Query the size of the terminal connected to `stream`.
///
/// On Windows the console API answers for the attached console regardless
/// of which stream is named.
pub fn query_stream(stream: Stream) -> Result<WindowSize, QueryError> {
    log::trace!("querying terminal size on {}", stream);
    platform_query(stream)
}

/// Try stdout, stdin, then stderr, returning the first size reported.
///
/// When none of them is a terminal the error from stderr is returned.
pub fn query_any() -> Result<WindowSize, QueryError> {
    let mut result = query_stream(Stream::FALLBACK_ORDER[0]);
    for &stream in &Stream::FALLBACK_ORDER[1..] {
        if result.is_ok() {
            break;
        }
        result = query_stream(stream);
    }
    result
}

/// Query the size of the terminal behind an arbitrary descriptor, such as a
/// pty master or an opened `/dev/tty`.
#[cfg(unix)]
pub fn query_fd(fd: impl AsFd) -> Result<WindowSize, QueryError> {
    let fd = fd.as_fd();
    let raw_fd = fd.as_raw_fd();
    log::trace!("querying terminal size on fd {}", raw_fd);
    log_outcome(
        format_args!("fd {}", raw_fd),
        crate::infrastructure::get_winsize(fd),
    )
}

fn log_outcome(
    source: std::fmt::Arguments<'_>,
    result: Result<WindowSize, QueryError>,
) -> Result<WindowSize, QueryError> {
    match &result {
        Ok(size) => log::trace!("{} reports {}", source, size),
        Err(e) => log::debug!("{} has no terminal size: {}", source, e),
    }
    result
}

#[cfg(unix)]
fn platform_query(stream: Stream) -> Result<WindowSize, QueryError> {
    match stream {
        Stream::Stdin => query_fd(std::io::stdin()),
        Stream::Stdout => query_fd(std::io::stdout()),
        Stream::Stderr => query_fd(std::io::stderr()),
    }
}

#[cfg(windows)]
fn platform_query(stream: Stream) -> Result<WindowSize, QueryError> {
    log_outcome(
        format_args!("console for {}", stream),
        crate::infrastructure::get_console_size(),
    )
}

#[cfg(not(any(unix, windows)))]
fn platform_query(stream: Stream) -> Result<WindowSize, QueryError> {
    log_outcome(
        format_args!("{}", stream),
        Err(QueryError::Os(std::io::Error::from(
            std::io::ErrorKind::Unsupported,
        ))),
    )
}
