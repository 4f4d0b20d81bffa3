use crate::errors::{MediaDurationError, MediaDurationResult, Mp4Error};
use crate::mp4::limits::ScanLimits;
use crate::mp4::r#box::{BoxHeader, BoxScanner, FourCC};
use crate::streams::seekable_stream::SeekableStream;
use log::debug;

/// Where the movie header lives: moov → mvhd
pub const MOVIE_HEADER_PATH: [FourCC; 2] = [FourCC::MOOV, FourCC::MVHD];

/// Result of locating the movie header
#[derive(Debug, Clone)]
pub struct MovieHeaderBox {
    pub header: BoxHeader,
    pub payload: Vec<u8>,
}

/// Walk from the stream's current position to moov/mvhd and read the mvhd payload.
///
/// Top-level boxes other than moov (mdat in particular) are seeked over, never
/// read.
pub fn find_movie_header_box<S: SeekableStream>(
    stream: &mut S,
    limits: ScanLimits,
) -> MediaDurationResult<MovieHeaderBox> {
    let mut scanner = BoxScanner::new(stream, limits)?;
    match scanner.find_path(&MOVIE_HEADER_PATH) {
        Ok((header, payload)) => {
            debug!(
                "mvhd at offset {} with {} byte payload",
                header.offset,
                payload.len()
            );
            Ok(MovieHeaderBox { header, payload })
        }
        Err(MediaDurationError::Mp4(Mp4Error::BoxNotFound { box_type })) => {
            Err(if box_type == FourCC::MOOV {
                Mp4Error::MovieMetadataNotFound
            } else {
                Mp4Error::MovieHeaderNotFound
            }
            .into())
        }
        Err(e) => Err(e),
    }
}
