//! Error types for the widget pipeline.
//!
//! Only [`PinError`] and config loading ever reach a caller. [`RenderError`]
//! is public for direct renderer use; entry errors stay inside the parser.

use thiserror::Error;

/// Why a single snapshot entry was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum EntryError {
    /// Entry is not a JSON object
    #[error("entry is not an object")]
    NotAnObject,
    /// Required field is absent or null
    #[error("missing required field '{0}'")]
    Missing(&'static str),
    /// Required field has a value that cannot be read as the expected type
    #[error("field '{field}' is not a {expected}")]
    Mistyped {
        /// Field name
        field: &'static str,
        /// Expected type name
        expected: &'static str,
    },
    /// Required field is outside its valid range
    #[error("field '{field}' is out of range: {value}")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value, as text
        value: String,
    },
}

/// Chart rasterization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Pixel buffer could not be allocated
    #[error("cannot allocate a {width}x{height} pixmap")]
    Allocation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Padding leaves no room for the pie
    #[error("chart of {size_px}px leaves no radius after {padding_px}px padding")]
    NoRadius {
        /// Requested edge in pixels
        size_px: u32,
        /// Configured padding, as text
        padding_px: String,
    },
    /// PNG encoding failed
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// Failure to request a pinned widget from the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    /// Platform is older than the first release that can pin widgets
    #[error("pinning widgets needs platform level {required} (running {actual})")]
    Unsupported {
        /// Minimum platform level
        required: u32,
        /// Running platform level
        actual: u32,
    },
    /// Widget manager service is not available
    #[error("widget manager unavailable")]
    ManagerUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_error_display() {
        assert_eq!(
            EntryError::Missing("name").to_string(),
            "missing required field 'name'"
        );
        assert_eq!(
            EntryError::Mistyped {
                field: "amount",
                expected: "number"
            }
            .to_string(),
            "field 'amount' is not a number"
        );
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::Allocation {
            width: 0,
            height: 0,
        };
        assert_eq!(err.to_string(), "cannot allocate a 0x0 pixmap");
    }

    #[test]
    fn test_pin_error_display() {
        let err = PinError::Unsupported {
            required: 26,
            actual: 24,
        };
        assert!(err.to_string().contains("level 26"));
        assert!(err.to_string().contains("running 24"));
    }
}
