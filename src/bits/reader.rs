/*
# Bits Reader Module

 Byte-aligned big endian readers for container parsing.

 Key components:
 - Stream readers: `read_u64_be()`, `read_exact_or_eof()`
 - Slice readers: `read_u8()`, `read_u24()`, `read_u32()`, `read_u64()` with position tracking
*/

use std::io::{self, Read};

/// Read a 64-bit big endian value from `r`.
pub fn read_u64_be<R: Read>(r: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}

/// Fill `buf` completely, returning how many bytes arrived before end of stream.
///
/// Unlike `read_exact` a short read is not an error here; the caller decides
/// what a partial fill means. Interrupted reads are retried.
pub fn read_exact_or_eof<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read one byte from a byte slice advancing the position.
pub fn read_u8(data: &[u8], pos: &mut usize) -> Option<u8> {
    let v = *data.get(*pos)?;
    *pos += 1;
    Some(v)
}

/// Read a 24-bit big endian value from a byte slice advancing the position.
pub fn read_u24(data: &[u8], pos: &mut usize) -> Option<u32> {
    if *pos + 3 > data.len() {
        return None;
    }
    let v = ((data[*pos] as u32) << 16) | ((data[*pos + 1] as u32) << 8) | data[*pos + 2] as u32;
    *pos += 3;
    Some(v)
}

/// Read a 32-bit big endian value from a byte slice advancing the position.
pub fn read_u32(data: &[u8], pos: &mut usize) -> Option<u32> {
    if *pos + 4 > data.len() {
        return None;
    }
    let v = u32::from_be_bytes([data[*pos], data[*pos + 1], data[*pos + 2], data[*pos + 3]]);
    *pos += 4;
    Some(v)
}

/// Read a 64-bit big endian value from a byte slice advancing the position.
pub fn read_u64(data: &[u8], pos: &mut usize) -> Option<u64> {
    if *pos + 8 > data.len() {
        return None;
    }
    let v = u64::from_be_bytes([
        data[*pos],
        data[*pos + 1],
        data[*pos + 2],
        data[*pos + 3],
        data[*pos + 4],
        data[*pos + 5],
        data[*pos + 6],
        data[*pos + 7],
    ]);
    *pos += 8;
    Some(v)
}
