use crate::domain::primitive::WindowSize;
use crate::shared::error::QueryError;

/// Read the console screen buffer size through the console API.
///
/// The console reports no pixel geometry, so those fields stay zero.
pub fn get_console_size() -> Result<WindowSize, QueryError> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok(WindowSize::new(cols, rows))
}
