pub mod seekable_stream;

pub use seekable_stream::{CountingStream, LocalSeekableStream, SeekableStream};
