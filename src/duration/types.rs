use crate::errors::Mp4Error;
use crate::mp4::MovieHeader;
use serde::Serialize;
use std::time::Duration;

/// Timing summary of a movie, as recorded next to an accepted upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovieTiming {
    pub version: u8,
    pub timescale: u32,
    pub ticks: u64,
    pub duration: Duration,
}

impl TryFrom<&MovieHeader> for MovieTiming {
    type Error = Mp4Error;

    fn try_from(header: &MovieHeader) -> Result<Self, Self::Error> {
        Ok(MovieTiming {
            version: header.version(),
            timescale: header.timescale(),
            ticks: header.ticks(),
            duration: header.duration()?,
        })
    }
}
