use crate::bits::reader::{read_exact_or_eof, read_u64_be};
use crate::errors::{MediaDurationError, MediaDurationResult, Mp4Error};
use crate::mp4::limits::ScanLimits;
use crate::streams::seekable_stream::SeekableStream;
use log::{debug, trace};
use serde::Serialize;
use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};

/// Four character box type code
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const FTYP: FourCC = FourCC(*b"ftyp");
    pub const MOOV: FourCC = FourCC(*b"moov");
    pub const MVHD: FourCC = FourCC(*b"mvhd");
    pub const MDAT: FourCC = FourCC(*b"mdat");
    pub const FREE: FourCC = FourCC(*b"free");
    pub const SKIP: FourCC = FourCC(*b"skip");
    pub const TRAK: FourCC = FourCC(*b"trak");
    pub const UDTA: FourCC = FourCC(*b"udta");

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Latin-1, so iTunes style types print as ©nam
        for &b in &self.0 {
            let c = if b < 0x20 || b == 0x7f { '.' } else { char::from(b) };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC(\"{}\")", self)
    }
}

/// Box header information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxHeader {
    pub box_type: FourCC,
    /// Total size including the header
    pub size: u64,
    /// 8, or 16 when a 64-bit size follows the type
    pub header_size: u64,
    /// Absolute offset of the first header byte
    pub offset: u64,
}

impl BoxHeader {
    pub fn payload_size(&self) -> u64 {
        self.size - self.header_size
    }
}

/// Lazy walker over the boxes of one level of a container.
///
/// Only box headers are read while walking. A payload is consumed when the
/// caller asks for it through [`BoxScanner::read_payload`] or
/// [`BoxScanner::descend`]; otherwise it is skipped with a relative seek the
/// next time [`BoxScanner::next_box`] runs, so skipped boxes cost no memory
/// whatever their size.
pub struct BoxScanner<'a, S: SeekableStream> {
    stream: &'a mut S,
    offset: u64,
    remaining: u64,
    pending: u64,
    current: Option<BoxHeader>,
    boxes_seen: usize,
    depth: usize,
    limits: ScanLimits,
}

impl<'a, S: SeekableStream> BoxScanner<'a, S> {
    /// Scanner over everything from the stream's current position to its end.
    pub fn new(stream: &'a mut S, limits: ScanLimits) -> MediaDurationResult<Self> {
        let start = stream.stream_position()?;
        let end = stream.seek(SeekFrom::End(0))?;
        stream.seek(SeekFrom::Start(start))?;
        Ok(Self::bounded(
            stream,
            start,
            end.saturating_sub(start),
            limits,
        ))
    }

    /// Scanner over `length` bytes starting at the stream's current position,
    /// which the caller asserts is `offset`.
    pub fn bounded(stream: &'a mut S, offset: u64, length: u64, limits: ScanLimits) -> Self {
        Self {
            stream,
            offset,
            remaining: length,
            pending: 0,
            current: None,
            boxes_seen: 0,
            depth: 0,
            limits,
        }
    }

    /// Nesting depth of this level, 0 for the top level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Bytes of this level not yet walked, excluding the current box.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Read the next box header of this level.
    ///
    /// Returns `Ok(None)` when the level ends exactly on a box boundary. Any
    /// unconsumed payload of the previous box is skipped first.
    pub fn next_box(&mut self) -> MediaDurationResult<Option<BoxHeader>> {
        self.skip()?;
        self.current = None;

        if self.remaining == 0 {
            return Ok(None);
        }
        if let Some(max) = self.limits.max_boxes_per_level {
            if self.boxes_seen >= max {
                return Err(Mp4Error::malformed(format!(
                    "more than {} boxes at depth {}",
                    max, self.depth
                ))
                .into());
            }
        }
        if self.remaining < 8 {
            return Err(Mp4Error::malformed(format!(
                "{} trailing bytes at offset {} cannot hold a box header",
                self.remaining, self.offset
            ))
            .into());
        }

        let mut raw = [0u8; 8];
        let got = read_exact_or_eof(&mut *self.stream, &mut raw)?;
        if got < raw.len() {
            return Err(Mp4Error::malformed(format!(
                "truncated box header at offset {}: {} of 8 bytes",
                self.offset, got
            ))
            .into());
        }

        let size32 = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
        let box_type = FourCC([raw[4], raw[5], raw[6], raw[7]]);
        let (size, header_size) = match size32 {
            // Box runs to the end of the enclosing level
            0 => (self.remaining, 8),
            1 => {
                if self.remaining < 16 {
                    return Err(Mp4Error::malformed(format!(
                        "{} box at offset {} has no room for its 64-bit size",
                        box_type, self.offset
                    ))
                    .into());
                }
                let large = read_u64_be(&mut *self.stream)
                    .map_err(|e| short_read(e, "extended box size", self.offset))?;
                (large, 16)
            }
            n => (u64::from(n), 8),
        };

        if size < header_size {
            return Err(Mp4Error::malformed(format!(
                "{} box at offset {} declares size {} smaller than its {}-byte header",
                box_type, self.offset, size, header_size
            ))
            .into());
        }
        if size > self.remaining {
            return Err(Mp4Error::malformed(format!(
                "{} box at offset {} declares {} bytes but only {} remain",
                box_type, self.offset, size, self.remaining
            ))
            .into());
        }

        let header = BoxHeader {
            box_type,
            size,
            header_size,
            offset: self.offset,
        };
        trace!(
            "box {} size={} offset={} depth={}",
            box_type,
            size,
            header.offset,
            self.depth
        );

        self.offset += header_size;
        self.remaining -= size;
        self.pending = header.payload_size();
        self.current = Some(header);
        self.boxes_seen += 1;
        Ok(Some(header))
    }

    /// Move past the current box's payload without reading it.
    pub fn skip(&mut self) -> MediaDurationResult<()> {
        if self.pending == 0 {
            return Ok(());
        }
        let len = self.pending;
        seek_forward(&mut *self.stream, len)?;
        if let Some(header) = self.current {
            trace!("skipped {} payload of {} bytes", header.box_type, len);
        }
        self.offset += len;
        self.pending = 0;
        Ok(())
    }

    /// Read the current box's payload into memory.
    ///
    /// Meant for small leaf boxes; payloads above `max_leaf_payload` are
    /// rejected before anything is allocated.
    pub fn read_payload(&mut self) -> MediaDurationResult<Vec<u8>> {
        let box_type = self.current_type();
        let len = self.pending;
        if len > self.limits.max_leaf_payload {
            return Err(Mp4Error::malformed(format!(
                "{} payload of {} bytes exceeds the {} byte limit",
                box_type, len, self.limits.max_leaf_payload
            ))
            .into());
        }

        let mut payload = vec![0u8; len as usize];
        self.stream
            .read_exact(&mut payload)
            .map_err(|e| short_read(e, "box payload", self.offset))?;
        self.offset += len;
        self.pending = 0;
        Ok(payload)
    }

    /// Walk the current box's payload as a nested level.
    ///
    /// Whatever `f` leaves unread in the nested level is skipped afterwards, so
    /// this scanner continues at the next sibling. That holds even when `f`
    /// swallowed an error from the nested level part way through a header.
    pub fn descend<T, F>(&mut self, f: F) -> MediaDurationResult<T>
    where
        F: FnOnce(&mut BoxScanner<'_, S>) -> MediaDurationResult<T>,
    {
        let box_type = self.current_type();
        if self.depth + 1 > self.limits.max_depth {
            return Err(Mp4Error::malformed(format!(
                "{} box nests deeper than {} levels",
                box_type, self.limits.max_depth
            ))
            .into());
        }

        let len = self.pending;
        let end = self.offset + len;
        self.pending = 0;
        let mut child = BoxScanner {
            stream: &mut *self.stream,
            offset: self.offset,
            remaining: len,
            pending: 0,
            current: None,
            boxes_seen: 0,
            depth: self.depth + 1,
            limits: self.limits,
        };
        let result = f(&mut child)?;

        // The stream may sit inside a rejected header, so reposition absolutely
        if child.remaining + child.pending > 0 {
            self.stream.seek(SeekFrom::Start(end))?;
        }
        self.offset = end;
        Ok(result)
    }

    /// Locate a box by path and read its payload.
    ///
    /// Every segment but the last names a container to descend into; the last
    /// names the leaf whose payload is returned. Boxes of any other type are
    /// skipped. An exhausted level yields `BoxNotFound` for the segment that
    /// was being searched.
    pub fn find_path(&mut self, path: &[FourCC]) -> MediaDurationResult<(BoxHeader, Vec<u8>)> {
        let (target, rest) = path
            .split_first()
            .ok_or_else(|| Mp4Error::malformed("empty box path"))?;

        while let Some(header) = self.next_box()? {
            if header.box_type != *target {
                continue;
            }
            debug!(
                "found {} at offset {} ({} bytes)",
                header.box_type, header.offset, header.size
            );
            if rest.is_empty() {
                let payload = self.read_payload()?;
                return Ok((header, payload));
            }
            return self.descend(|child| child.find_path(rest));
        }

        Err(Mp4Error::BoxNotFound { box_type: *target }.into())
    }

    fn current_type(&self) -> FourCC {
        self.current
            .map(|h| h.box_type)
            .unwrap_or(FourCC(*b"????"))
    }
}

fn seek_forward<S: SeekableStream>(stream: &mut S, len: u64) -> MediaDurationResult<()> {
    let delta = i64::try_from(len)
        .map_err(|_| Mp4Error::malformed(format!("cannot seek forward {} bytes", len)))?;
    stream.seek(SeekFrom::Current(delta))?;
    Ok(())
}

/// A read that ran out of data is a container problem; anything else is I/O.
fn short_read(err: io::Error, what: &str, offset: u64) -> MediaDurationError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Mp4Error::malformed(format!("truncated {} at offset {}", what, offset)).into()
    } else {
        MediaDurationError::Io(err)
    }
}
