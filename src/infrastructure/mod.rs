#[cfg(unix)]
pub mod unix;
#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub use unix::get_winsize;
#[cfg(windows)]
pub use windows::get_console_size;
