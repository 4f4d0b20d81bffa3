pub mod bits;

pub mod mp4;
pub use mp4::{BoxHeader, BoxScanner, FourCC, MovieHeader, ScanLimits};

pub mod streams;
pub use streams::{seekable_stream, CountingStream, LocalSeekableStream, SeekableStream};

pub mod duration;
pub use duration::{
    duration_from_path, duration_from_path_with_limits, duration_from_reader,
    duration_from_reader_with_limits, movie_header_from_path, movie_header_from_reader,
    movie_header_from_reader_with_limits, movie_timing_from_path, MovieTiming,
};

pub mod errors;
pub use errors::{MediaDurationError, MediaDurationResult, Mp4Error};
