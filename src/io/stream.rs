//! Source and sink resolution.
//!
//! Descriptors (the raw `-i`/`-o` values) are resolved to open handles here,
//! and only here — the pipeline calls [`open_src_file`] immediately before
//! its first read and [`open_dst_file`] immediately before its first write.
//! Argument parsing never opens anything, so a usage error later on the
//! command line cannot truncate a file named by an earlier `-o`.
//!
//! - [`open_src_file`] — resolves a descriptor to a `Box<dyn Read>`,
//!   handling the `"-"` stdin sentinel.
//! - [`open_dst_file`] — resolves a descriptor to a [`DstFile`], handling
//!   the `"-"` stdout sentinel; named paths are created with mode 0644,
//!   truncating existing content.
//!
//! Verbosity-gated diagnostics are emitted via stderr using the global
//! display level.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Stdout, Write};

use crate::cli::constants::{display_level, STDIO_MARK};

/// Permission bits for newly created output files: owner read/write,
/// group/other read.
#[cfg(unix)]
const DST_FILE_MODE: u32 = 0o644;

#[inline]
fn is_stdio(s: &str) -> bool {
    s == STDIO_MARK
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// Opens a source for reading, returning a boxed [`Read`].
///
/// - If `path` is the sentinel `"-"`, returns standard input.
/// - Otherwise opens the file and wraps it in a [`BufReader`] for efficient
///   sequential reads.
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if is_stdio(path) {
        crate::displaylevel!(4, "Using stdin for input\n");
        #[cfg(windows)]
        // SAFETY: calling _setmode on stdin (fd=0) is always valid.
        unsafe {
            libc::_setmode(0, libc::O_BINARY);
        }
        return Ok(Box::new(io::stdin()));
    }

    let f = File::open(path).map_err(|e| {
        if display_level() >= 1 {
            eprintln!("{}: {}", path, e);
        }
        e
    })?;
    Ok(Box::new(BufReader::new(f)))
}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// A write-capable destination produced by [`open_dst_file`].
///
/// The variant decides the end-of-run behaviour in
/// [`DstFile::finish`]: a regular file is flushed to disk and closed, while
/// stdout is only flushed — the pipeline never closes the process's standard
/// output.
pub enum DstFile {
    Stdout(Stdout),
    File(File),
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DstFile::Stdout(s) => s.write(buf),
            DstFile::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DstFile::Stdout(s) => s.flush(),
            DstFile::File(f) => f.flush(),
        }
    }
}

impl DstFile {
    /// `true` when the destination is the process's standard output.
    pub fn is_stdout(&self) -> bool {
        matches!(self, DstFile::Stdout(_))
    }

    /// Finalize the destination.
    ///
    /// For a regular file: flush, force the data to disk, and close the
    /// descriptor (consuming `self` drops the `File`). Errors from the final
    /// flush-to-disk are surfaced rather than lost in `Drop`. For stdout:
    /// flush only; the handle itself stays open for the rest of the process.
    pub fn finish(mut self) -> io::Result<()> {
        self.flush()?;
        if let DstFile::File(ref f) = self {
            f.sync_all()?;
        }
        Ok(())
    }
}

/// Opens a destination for writing, returning a [`DstFile`].
///
/// - If `path` is the sentinel `"-"`, returns standard output.
/// - Otherwise creates (or truncates) the file with permission bits 0644.
pub fn open_dst_file(path: &str) -> io::Result<DstFile> {
    if is_stdio(path) {
        crate::displaylevel!(4, "Using stdout for output\n");
        #[cfg(windows)]
        // SAFETY: calling _setmode on stdout (fd=1) is always valid.
        unsafe {
            libc::_setmode(1, libc::O_BINARY);
        }
        return Ok(DstFile::Stdout(io::stdout()));
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DST_FILE_MODE);
    }
    let f = options.open(path).map_err(|e| {
        if display_level() >= 1 {
            eprintln!("{}: {}", path, e);
        }
        e
    })?;
    Ok(DstFile::File(f))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
