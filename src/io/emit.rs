//! Whole-buffer emission.
//!
//! [`write_buffer`] pushes one buffer into a sink and does not return until
//! the sink has accepted every byte: `write_all` loops over short writes, so
//! a saturated sink simply blocks the call until it drains. The trailing
//! `flush` covers userspace buffering in the handle itself.
//!
//! End-of-run finalization (flush-to-disk and close for files, flush-only
//! for stdout) is a separate step, [`crate::io::stream::DstFile::finish`],
//! because the sink must outlive the write but still be finalized exactly
//! once before the process exits.

use std::io::{self, Write};

use crate::io::stream::DstFile;

/// Writes all of `data` to `dst`, honoring sink backpressure, then flushes.
pub fn write_buffer(dst: &mut DstFile, data: &[u8]) -> io::Result<()> {
    dst.write_all(data)?;
    dst.flush()
}
