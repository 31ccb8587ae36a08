//! Whole-stream aggregation.
//!
//! The transform operates on the entire text at once, so the input stream is
//! consumed to completion before anything else happens. [`read_all_bytes`]
//! appends fixed-size chunks in arrival order until end-of-stream, which
//! reconstructs the input byte-for-byte no matter how the source splits it.
//! Any read error propagates immediately; no partial buffer escapes.

use std::io::{self, ErrorKind, Read};

/// Chunk size for the aggregation loop: 64 KiB.
const READ_CHUNK_SIZE: usize = 64 << 10;

/// Reads `src` to completion, returning one contiguous buffer.
///
/// Interrupted reads are retried; every other error aborts the aggregation
/// and is returned to the caller.
pub fn read_all_bytes(src: &mut dyn Read) -> io::Result<Vec<u8>> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        match src.read(&mut chunk) {
            Ok(0) => return Ok(buffer),
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A reader that hands out its payload at most `max` bytes per call,
    /// exercising arbitrary chunk boundaries.
    struct Dribble<'a> {
        data: &'a [u8],
        pos: usize,
        max: usize,
    }

    impl<'a> Read for Dribble<'a> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = (self.data.len() - self.pos).min(self.max).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    /// A reader that fails partway through.
    struct FailAfter {
        remaining: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(ErrorKind::Other, "injected fault"));
            }
            let n = self.remaining.min(buf.len());
            self.remaining -= n;
            for b in &mut buf[..n] {
                *b = 0x42;
            }
            Ok(n)
        }
    }

    #[test]
    fn empty_stream_yields_empty_buffer() {
        let mut src: &[u8] = &[];
        assert!(read_all_bytes(&mut src).unwrap().is_empty());
    }

    #[test]
    fn one_shot_read() {
        let mut src: &[u8] = b"hello world";
        assert_eq!(read_all_bytes(&mut src).unwrap(), b"hello world");
    }

    #[test]
    fn chunked_delivery_is_byte_identical() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        for max in [1usize, 7, 64, 4096] {
            let mut src = Dribble {
                data: &data,
                pos: 0,
                max,
            };
            assert_eq!(
                read_all_bytes(&mut src).unwrap(),
                data,
                "chunk size {max} must reconstruct the input exactly"
            );
        }
    }

    #[test]
    fn input_larger_than_chunk_buffer() {
        let data = vec![0x5Au8; READ_CHUNK_SIZE * 3 + 17];
        let mut src: &[u8] = &data;
        assert_eq!(read_all_bytes(&mut src).unwrap(), data);
    }

    #[test]
    fn read_error_propagates() {
        let mut src = FailAfter { remaining: 100 };
        let err = read_all_bytes(&mut src).unwrap_err();
        assert_eq!(err.to_string(), "injected fault");
    }
}
