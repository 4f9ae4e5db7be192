//! Ask the operating system how big the controlling terminal is.
//!
//! ```no_run
//! let size = winsize::query()?;
//! println!("{} columns, {} rows", size.cols, size.rows);
//! # Ok::<(), winsize::QueryError>(())
//! ```

mod domain;
mod infrastructure;
mod shared;
mod usecase;

pub use crate::domain::primitive::{Stream, WindowSize};
pub use crate::shared::error::QueryError;
#[cfg(unix)]
pub use crate::usecase::terminal_size_query::query_fd;
pub use crate::usecase::terminal_size_query::{query, query_any, query_stream};
