pub mod r#box;
pub use r#box::{BoxHeader, BoxScanner, FourCC};
pub mod limits;
pub use limits::ScanLimits;
pub mod moov_finder;
pub use moov_finder::{find_movie_header_box, MovieHeaderBox, MOVIE_HEADER_PATH};
pub mod mvhd;
mod mvhd_test;
pub use mvhd::{parse_mvhd, ticks_to_duration, MovieHeader};

#[cfg(test)]
pub(crate) mod fixtures;
