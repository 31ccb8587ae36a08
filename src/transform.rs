//! Transform invocation.
//!
//! Bridges the byte pipeline to the [`idna`] crate: the aggregated buffer is
//! decoded as UTF-8, the whole text goes through to-ASCII or to-Unicode in
//! one call, and the result is re-encoded as UTF-8 bytes. No per-line or
//! per-chunk splitting happens here, and no validation is added beyond the
//! charset conversion — malformed labels surface as the idna crate's own
//! errors.

use anyhow::{anyhow, Context};

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Text → ASCII-compatible encoding (`idna::domain_to_ascii`).
    #[default]
    Encode,
    /// ASCII-compatible encoding → text (`idna::domain_to_unicode`).
    Decode,
}

/// Applies the IDNA transform to `input` in the given `direction`.
///
/// To-Unicode produces a best-effort string even when it reports an error;
/// that partial output is discarded and the error propagated, so a failed
/// run never emits anything.
pub fn transform(input: Vec<u8>, direction: Direction) -> anyhow::Result<Vec<u8>> {
    let text = String::from_utf8(input).context("input is not valid UTF-8")?;
    let output = match direction {
        Direction::Encode => idna::domain_to_ascii(&text)
            .map_err(|e| anyhow!("to-ASCII conversion failed: {:?}", e))?,
        Direction::Decode => {
            let (unicode, result) = idna::domain_to_unicode(&text);
            result.map_err(|e| anyhow!("to-Unicode conversion failed: {:?}", e))?;
            unicode
        }
    };
    Ok(output.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(s: &str) -> String {
        String::from_utf8(transform(s.as_bytes().to_vec(), Direction::Encode).unwrap()).unwrap()
    }

    fn decode(s: &str) -> String {
        String::from_utf8(transform(s.as_bytes().to_vec(), Direction::Decode).unwrap()).unwrap()
    }

    #[test]
    fn encode_buecher() {
        assert_eq!(encode("bücher"), "xn--bcher-kva");
    }

    #[test]
    fn decode_buecher() {
        assert_eq!(decode("xn--bcher-kva"), "bücher");
    }

    #[test]
    fn encode_is_idempotent_on_ascii_labels() {
        assert_eq!(encode("xn--bcher-kva"), "xn--bcher-kva");
        assert_eq!(encode("example.com"), "example.com");
    }

    #[test]
    fn round_trip() {
        let ascii = encode("bücher.example");
        assert_eq!(decode(&ascii), "bücher.example");
        let unicode = decode("xn--mnchen-3ya.example");
        assert_eq!(encode(&unicode), "xn--mnchen-3ya.example");
    }

    #[test]
    fn multi_label_domain() {
        assert_eq!(encode("www.bücher.de"), "www.xn--bcher-kva.de");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = transform(vec![0xFF, 0xFE, 0xFD], Direction::Encode).unwrap_err();
        assert!(err.to_string().contains("UTF-8"), "{}", err);
    }
}
