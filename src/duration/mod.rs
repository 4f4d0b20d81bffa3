mod extractor;
mod types;

pub use extractor::{
    duration_from_path, duration_from_path_with_limits, duration_from_reader,
    duration_from_reader_with_limits, movie_header_from_path, movie_header_from_reader,
    movie_header_from_reader_with_limits, movie_timing_from_path,
};

pub use types::*;
