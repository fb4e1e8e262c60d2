use crate::error::{EntropyError, Result};
use std::io::{ErrorKind, Read};

/// Lazy splitter of a byte source into consecutive fixed-size chunks.
///
/// Every chunk has length `chunk_size` except possibly the last, which
/// holds the remainder. An empty source yields no chunks; a zero-length
/// chunk is never produced. The sequence is finite and non-restartable.
pub struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Create a chunk reader over `reader` with the given chunk size
    pub fn new(reader: R, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(EntropyError::InvalidChunkSize);
        }
        Ok(Self {
            reader,
            chunk_size,
            done: false,
        })
    }

    /// Read up to one full chunk, looping over short reads until the
    /// buffer is full or EOF is reached.
    fn fill_chunk(&mut self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut filled = 0;
        while filled < self.chunk_size {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        buf.truncate(filled);
        Ok(buf)
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.fill_chunk() {
            Ok(chunk) => {
                if chunk.is_empty() {
                    self.done = true;
                    None
                } else {
                    if chunk.len() < self.chunk_size {
                        // Short chunk means EOF; nothing follows it.
                        self.done = true;
                    }
                    Some(Ok(chunk))
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
