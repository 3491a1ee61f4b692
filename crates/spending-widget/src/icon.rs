//! Icon image decoding seam.
//!
//! Snapshots carry icons as transport-encoded image strings. Decoding is
//! pluggable so hosts can bring their own image codec; without one every
//! icon falls back to the built-in default resource.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// A decoded icon bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIcon {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Unpremultiplied RGBA bytes, row-major
    pub rgba: Vec<u8>,
}

impl DecodedIcon {
    /// Whether the buffer length matches the dimensions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        u64::from(self.width) * u64::from(self.height) * 4 == self.rgba.len() as u64
    }
}

/// Why an icon could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    /// The decoder does not handle images
    #[error("icon decoding is not supported")]
    Unsupported,
    /// The encoded data is invalid
    #[error("malformed icon image: {0}")]
    Malformed(String),
}

/// Turns an encoded icon string into a bitmap.
pub trait IconDecoder: Send + Sync {
    /// Decode a non-blank encoded icon.
    ///
    /// # Errors
    ///
    /// Returns [`IconError`] if the icon cannot be decoded.
    fn decode(&self, encoded: &str) -> Result<DecodedIcon, IconError>;
}

/// Decoder that never decodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIconDecoder;

impl IconDecoder for NoopIconDecoder {
    fn decode(&self, _encoded: &str) -> Result<DecodedIcon, IconError> {
        Err(IconError::Unsupported)
    }
}

/// Decode an optional icon, logging and swallowing failures.
///
/// Blank or absent input never reaches the decoder.
pub(crate) fn decode_optional(
    decoder: &dyn IconDecoder,
    encoded: Option<&str>,
) -> Option<Arc<DecodedIcon>> {
    let encoded = encoded.map(str::trim).filter(|s| !s.is_empty())?;
    match decoder.decode(encoded) {
        Ok(icon) => Some(Arc::new(icon)),
        Err(IconError::Unsupported) => {
            debug!("icon decoder unsupported, using default icon");
            None
        }
        Err(error) => {
            warn!(%error, "icon decode failed, using default icon");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDecoder {
        calls: AtomicUsize,
        result: Result<DecodedIcon, IconError>,
    }

    impl IconDecoder for CountingDecoder {
        fn decode(&self, _encoded: &str) -> Result<DecodedIcon, IconError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn pixel() -> DecodedIcon {
        DecodedIcon {
            width: 1,
            height: 1,
            rgba: vec![255, 0, 0, 255],
        }
    }

    #[test]
    fn test_blank_never_reaches_decoder() {
        let decoder = CountingDecoder {
            calls: AtomicUsize::new(0),
            result: Ok(pixel()),
        };
        assert!(decode_optional(&decoder, None).is_none());
        assert!(decode_optional(&decoder, Some("")).is_none());
        assert!(decode_optional(&decoder, Some("  ")).is_none());
        assert_eq!(decoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_decoded_icon_is_shared() {
        let decoder = CountingDecoder {
            calls: AtomicUsize::new(0),
            result: Ok(pixel()),
        };
        let icon = decode_optional(&decoder, Some("aWNvbg==")).unwrap();
        assert_eq!(*icon, pixel());
        assert!(icon.is_consistent());
        assert_eq!(decoder.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_falls_back() {
        let decoder = CountingDecoder {
            calls: AtomicUsize::new(0),
            result: Err(IconError::Malformed("bad header".into())),
        };
        assert!(decode_optional(&decoder, Some("xx")).is_none());
        assert!(decode_optional(&NoopIconDecoder, Some("xx")).is_none());
    }
}
