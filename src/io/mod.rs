//! Byte-stream I/O for the transcoding pipeline.
//!
//! This module assembles the I/O sub-modules and re-exports the symbols
//! consumed by the pipeline and by integration tests:
//!
//! - [`stream`] — lazy descriptor-to-handle resolution for sources and sinks.
//! - [`aggregate`] — whole-stream aggregation into one contiguous buffer.
//! - [`emit`] — whole-buffer emission with flush/close discipline.

pub mod aggregate;
pub mod emit;
pub mod stream;

pub use aggregate::read_all_bytes;
pub use emit::write_buffer;
pub use stream::{open_dst_file, open_src_file, DstFile};
