use std::io;

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("Failed to query terminal size: {0}")]
    Os(#[source] io::Error),
}

impl QueryError {
    /// Capture `errno` from the call that just failed.
    pub fn last_os_error() -> Self {
        Self::Os(io::Error::last_os_error())
    }

    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Os(e) => e.raw_os_error(),
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Os(e) => e.kind(),
        }
    }
}

impl From<io::Error> for QueryError {
    fn from(e: io::Error) -> Self {
        Self::Os(e)
    }
}
