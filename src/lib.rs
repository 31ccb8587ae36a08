// punyconv — command-line IDNA/Punycode transcoder

pub mod cli;
pub mod io;
pub mod pipeline;
pub mod transform;

// ── Version constants ─────────────────────────────────────────────────────────
pub const PUNYCONV_VERSION_MAJOR: u32 = 1;
pub const PUNYCONV_VERSION_MINOR: u32 = 1;
pub const PUNYCONV_VERSION_RELEASE: u32 = 0;
pub const PUNYCONV_VERSION_NUMBER: u32 = PUNYCONV_VERSION_MAJOR * 100 * 100
    + PUNYCONV_VERSION_MINOR * 100
    + PUNYCONV_VERSION_RELEASE;
pub const PUNYCONV_VERSION_STRING: &str = "1.1.0";

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    PUNYCONV_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    PUNYCONV_VERSION_STRING
}
