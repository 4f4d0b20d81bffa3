use crate::bits::reader::{read_u24, read_u32, read_u64, read_u8};
use crate::errors::Mp4Error;
use serde::Serialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Minimum payload for version 0: version/flags + 3 * u32 + duration u32
const V0_MIN_SIZE: usize = 20;
/// Minimum payload for version 1: version/flags + 2 * u64 + u32 + duration u64
const V1_MIN_SIZE: usize = 32;
/// Seconds between 1904-01-01 (the MP4 epoch) and 1970-01-01
pub(crate) const MP4_EPOCH_OFFSET: u64 = 2_082_844_800;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Decoded movie header, one variant per layout version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MovieHeader {
    V0 {
        flags: u32,
        creation_time: u32,
        modification_time: u32,
        timescale: u32,
        duration: u32,
    },
    V1 {
        flags: u32,
        creation_time: u64,
        modification_time: u64,
        timescale: u32,
        duration: u64,
    },
}

impl MovieHeader {
    /// Decode an mvhd payload (everything after the 8 or 16 byte box header).
    pub fn parse(payload: &[u8]) -> Result<Self, Mp4Error> {
        let mut pos = 0usize;
        let version = read_u8(payload, &mut pos)
            .ok_or_else(|| Mp4Error::malformed("empty mvhd payload"))?;
        let min_size = match version {
            0 => V0_MIN_SIZE,
            1 => V1_MIN_SIZE,
            v => return Err(Mp4Error::UnsupportedVersion { version: v }),
        };
        if payload.len() < min_size {
            return Err(truncated(version, payload.len()));
        }

        let flags = read_u24(payload, &mut pos).ok_or_else(|| truncated(version, payload.len()))?;
        let header = if version == 0 {
            let mut field = || read_u32(payload, &mut pos).ok_or_else(|| truncated(0, payload.len()));
            MovieHeader::V0 {
                flags,
                creation_time: field()?,
                modification_time: field()?,
                timescale: field()?,
                duration: field()?,
            }
        } else {
            let creation_time =
                read_u64(payload, &mut pos).ok_or_else(|| truncated(1, payload.len()))?;
            let modification_time =
                read_u64(payload, &mut pos).ok_or_else(|| truncated(1, payload.len()))?;
            let timescale =
                read_u32(payload, &mut pos).ok_or_else(|| truncated(1, payload.len()))?;
            let duration =
                read_u64(payload, &mut pos).ok_or_else(|| truncated(1, payload.len()))?;
            MovieHeader::V1 {
                flags,
                creation_time,
                modification_time,
                timescale,
                duration,
            }
        };

        if header.timescale() == 0 {
            return Err(Mp4Error::InvalidTimescale);
        }
        Ok(header)
    }

    pub fn version(&self) -> u8 {
        match self {
            MovieHeader::V0 { .. } => 0,
            MovieHeader::V1 { .. } => 1,
        }
    }

    /// Ticks per second.
    pub fn timescale(&self) -> u32 {
        match *self {
            MovieHeader::V0 { timescale, .. } | MovieHeader::V1 { timescale, .. } => timescale,
        }
    }

    /// Duration in timescale units.
    pub fn ticks(&self) -> u64 {
        match *self {
            MovieHeader::V0 { duration, .. } => u64::from(duration),
            MovieHeader::V1 { duration, .. } => duration,
        }
    }

    /// Creation time in seconds since 1904-01-01.
    pub fn creation_time(&self) -> u64 {
        match *self {
            MovieHeader::V0 { creation_time, .. } => u64::from(creation_time),
            MovieHeader::V1 { creation_time, .. } => creation_time,
        }
    }

    /// Modification time in seconds since 1904-01-01.
    pub fn modification_time(&self) -> u64 {
        match *self {
            MovieHeader::V0 {
                modification_time, ..
            } => u64::from(modification_time),
            MovieHeader::V1 {
                modification_time, ..
            } => modification_time,
        }
    }

    /// Creation time as wall clock, `None` when it predates 1970 (commonly 0).
    pub fn created_at(&self) -> Option<SystemTime> {
        mp4_time_to_system(self.creation_time())
    }

    /// Modification time as wall clock, `None` when it predates 1970.
    pub fn modified_at(&self) -> Option<SystemTime> {
        mp4_time_to_system(self.modification_time())
    }

    /// Playback duration, exact to the nanosecond (truncated below that).
    pub fn duration(&self) -> Result<Duration, Mp4Error> {
        ticks_to_duration(self.ticks(), self.timescale())
    }
}

/// Parse mvhd payload to get timescale and duration in ticks
pub fn parse_mvhd(payload: &[u8]) -> Result<(u32, u64), Mp4Error> {
    let header = MovieHeader::parse(payload)?;
    Ok((header.timescale(), header.ticks()))
}

/// Convert a tick count to a `Duration` with integer arithmetic only.
pub fn ticks_to_duration(ticks: u64, timescale: u32) -> Result<Duration, Mp4Error> {
    if timescale == 0 {
        return Err(Mp4Error::InvalidTimescale);
    }
    let timescale = u64::from(timescale);
    let secs = ticks / timescale;
    // rem < 2^32, so rem * 10^9 stays below 2^62
    let rem = ticks % timescale;
    let nanos = rem * NANOS_PER_SEC / timescale;
    Ok(Duration::new(secs, nanos as u32))
}

fn mp4_time_to_system(secs_since_1904: u64) -> Option<SystemTime> {
    let unix = secs_since_1904.checked_sub(MP4_EPOCH_OFFSET)?;
    UNIX_EPOCH.checked_add(Duration::from_secs(unix))
}

fn truncated(version: u8, len: usize) -> Mp4Error {
    let needed = if version == 0 { V0_MIN_SIZE } else { V1_MIN_SIZE };
    Mp4Error::malformed(format!(
        "mvhd v{} payload is {} bytes, need at least {}",
        version, len, needed
    ))
}
