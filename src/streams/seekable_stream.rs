use log::info;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// A seekable stream the box scanner can walk
pub trait SeekableStream: Read + Seek {
    fn print_stats(&self) {}
    fn read_call_count(&self) -> u64 {
        0
    }
    fn bytes_read(&self) -> u64 {
        0
    }
}

impl SeekableStream for File {}
impl<T: AsRef<[u8]>> SeekableStream for Cursor<T> {}
impl<R: Read + Seek> SeekableStream for BufReader<R> {}
impl<S: SeekableStream + ?Sized> SeekableStream for &mut S {
    fn print_stats(&self) {
        (**self).print_stats()
    }
    fn read_call_count(&self) -> u64 {
        (**self).read_call_count()
    }
    fn bytes_read(&self) -> u64 {
        (**self).bytes_read()
    }
}

/// Local file wrapper, opened read-only
pub struct LocalSeekableStream(File);
impl LocalSeekableStream {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(LocalSeekableStream(File::open(path)?))
    }
}
impl Read for LocalSeekableStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}
impl Seek for LocalSeekableStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.0.seek(pos)
    }
}
impl SeekableStream for LocalSeekableStream {}

/// Wrapper that counts the traffic going through an inner stream.
///
/// Used to check that a scan touches only box headers and the movie header,
/// whatever the size of the media payload it skips.
pub struct CountingStream<S> {
    inner: S,
    read_calls: u64,
    bytes_read: u64,
    seek_calls: u64,
}

impl<S: Read + Seek> CountingStream<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            read_calls: 0,
            bytes_read: 0,
            seek_calls: 0,
        }
    }

    /// Number of seeks issued.
    pub fn seek_call_count(&self) -> u64 {
        self.seek_calls
    }

    /// Unwrap the inner stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Read> Read for CountingStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls += 1;
        let n = self.inner.read(buf)?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

impl<S: Seek> Seek for CountingStream<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.seek_calls += 1;
        self.inner.seek(pos)
    }
}

impl<S: Read + Seek> SeekableStream for CountingStream<S> {
    fn print_stats(&self) {
        info!("Stream statistics:");
        info!("   read calls: {}", self.read_calls);
        info!("   bytes read: {}", self.bytes_read);
        info!("   seek calls: {}", self.seek_calls);
    }

    fn read_call_count(&self) -> u64 {
        self.read_calls
    }

    fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
