use super::types::MovieTiming;
use crate::errors::MediaDurationResult;
use crate::mp4::{find_movie_header_box, MovieHeader, ScanLimits};
use crate::streams::seekable_stream::{LocalSeekableStream, SeekableStream};
use log::debug;
use std::path::Path;
use std::time::Duration;

/// Playback duration of the movie in `stream`, scanning from its current position
pub fn duration_from_reader<S: SeekableStream>(stream: S) -> MediaDurationResult<Duration> {
    duration_from_reader_with_limits(stream, ScanLimits::default())
}

/// [`duration_from_reader`] with explicit scan limits
pub fn duration_from_reader_with_limits<S: SeekableStream>(
    stream: S,
    limits: ScanLimits,
) -> MediaDurationResult<Duration> {
    let header = movie_header_from_reader_with_limits(stream, limits)?;
    Ok(header.duration()?)
}

/// Playback duration of the movie file at `path`
pub fn duration_from_path<P: AsRef<Path>>(path: P) -> MediaDurationResult<Duration> {
    duration_from_path_with_limits(path, ScanLimits::default())
}

/// [`duration_from_path`] with explicit scan limits
pub fn duration_from_path_with_limits<P: AsRef<Path>>(
    path: P,
    limits: ScanLimits,
) -> MediaDurationResult<Duration> {
    // The stream is owned by the callee and dropped on every return path
    let stream = LocalSeekableStream::open(path)?;
    duration_from_reader_with_limits(stream, limits)
}

/// Decoded movie header of the movie in `stream`
pub fn movie_header_from_reader<S: SeekableStream>(stream: S) -> MediaDurationResult<MovieHeader> {
    movie_header_from_reader_with_limits(stream, ScanLimits::default())
}

/// [`movie_header_from_reader`] with explicit scan limits
pub fn movie_header_from_reader_with_limits<S: SeekableStream>(
    mut stream: S,
    limits: ScanLimits,
) -> MediaDurationResult<MovieHeader> {
    let found = find_movie_header_box(&mut stream, limits)?;
    let header = MovieHeader::parse(&found.payload)?;
    debug!(
        "mvhd v{}: timescale={} ticks={}",
        header.version(),
        header.timescale(),
        header.ticks()
    );
    stream.print_stats();
    Ok(header)
}

/// Decoded movie header of the movie file at `path`
pub fn movie_header_from_path<P: AsRef<Path>>(path: P) -> MediaDurationResult<MovieHeader> {
    let stream = LocalSeekableStream::open(path)?;
    movie_header_from_reader(stream)
}

/// Timing summary of the movie file at `path`
pub fn movie_timing_from_path<P: AsRef<Path>>(path: P) -> MediaDurationResult<MovieTiming> {
    let header = movie_header_from_path(path)?;
    Ok(MovieTiming::try_from(&header)?)
}
