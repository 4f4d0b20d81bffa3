use std::error::Error;
use std::fmt;
use std::io;

use crate::mp4::r#box::FourCC;

/// Enumeration of all errors returned by duration extraction
#[derive(Debug)]
pub enum MediaDurationError {
    /// The container could not be interpreted
    Mp4(Mp4Error),
    /// The underlying stream failed (open, seek, device error)
    Io(io::Error),
}

/// MP4 container specific errors
#[derive(Debug)]
pub enum Mp4Error {
    /// Header or payload shorter than required, or sizes that do not fit their level
    MalformedContainer { message: String },
    /// A level was exhausted without finding the requested box
    BoxNotFound { box_type: FourCC },
    /// No `moov` box at the top level
    MovieMetadataNotFound,
    /// A `moov` box without an `mvhd` leaf
    MovieHeaderNotFound,
    /// Movie header version outside {0, 1}
    UnsupportedVersion { version: u8 },
    /// Movie header timescale of zero
    InvalidTimescale,
}

impl Mp4Error {
    /// Create a malformed container error with the given message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Mp4Error::MalformedContainer {
            message: message.into(),
        }
    }
}

impl MediaDurationError {
    /// True when the error came from the stream rather than the container.
    pub fn is_io(&self) -> bool {
        matches!(self, MediaDurationError::Io(_))
    }

    /// True when the stream was readable but the container was rejected.
    pub fn is_container(&self) -> bool {
        matches!(self, MediaDurationError::Mp4(_))
    }

    /// The container error, if any.
    pub fn mp4_error(&self) -> Option<&Mp4Error> {
        match self {
            MediaDurationError::Mp4(err) => Some(err),
            MediaDurationError::Io(_) => None,
        }
    }
}

impl fmt::Display for MediaDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaDurationError::Io(err) => write!(f, "I/O error: {}", err),
            MediaDurationError::Mp4(err) => write!(f, "MP4 error: {}", err),
        }
    }
}

impl fmt::Display for Mp4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mp4Error::MalformedContainer { message } => {
                write!(f, "malformed container: {}", message)
            }
            Mp4Error::BoxNotFound { box_type } => write!(f, "{} box not found", box_type),
            Mp4Error::MovieMetadataNotFound => write!(f, "moov box not found"),
            Mp4Error::MovieHeaderNotFound => write!(f, "mvhd box not found in moov"),
            Mp4Error::UnsupportedVersion { version } => {
                write!(f, "unsupported mvhd version {}", version)
            }
            Mp4Error::InvalidTimescale => write!(f, "mvhd timescale is zero"),
        }
    }
}

impl Error for MediaDurationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MediaDurationError::Io(err) => Some(err),
            MediaDurationError::Mp4(err) => Some(err),
        }
    }
}

impl Error for Mp4Error {}

// Conversion implementations
impl From<io::Error> for MediaDurationError {
    fn from(err: io::Error) -> Self {
        MediaDurationError::Io(err)
    }
}

impl From<Mp4Error> for MediaDurationError {
    fn from(err: Mp4Error) -> Self {
        MediaDurationError::Mp4(err)
    }
}

// Conversion to io::Error for callers living in io::Result
impl From<MediaDurationError> for io::Error {
    fn from(err: MediaDurationError) -> Self {
        match err {
            MediaDurationError::Io(err) => err,
            MediaDurationError::Mp4(err) => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

impl From<Mp4Error> for io::Error {
    fn from(err: Mp4Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

// Type alias for Result with MediaDurationError
pub type MediaDurationResult<T> = Result<T, MediaDurationError>;
