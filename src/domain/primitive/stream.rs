use std::fmt;

/// Standard stream whose terminal is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stream {
    #[default]
    Stdin,
    Stdout,
    Stderr,
}

impl Stream {
    /// Order tried by `query_any`.
    pub const FALLBACK_ORDER: [Stream; 3] = [Stream::Stdout, Stream::Stdin, Stream::Stderr];
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stdin => "stdin",
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        };
        f.write_str(name)
    }
}
