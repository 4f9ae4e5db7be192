pub mod stream;
pub mod window_size;

pub use stream::Stream;
pub use window_size::WindowSize;
