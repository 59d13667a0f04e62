//! Error taxonomy for mask operations.
//!
//! No error is retried; every failure is surfaced to the caller with the
//! context needed to diagnose it (offending coordinates, dimensions,
//! backend detail). There is no partial output: a mask operation either
//! produces a complete encoded artifact or fails as a whole.

use std::fmt;

// ---------------------------------------------------------------------------
// Backend errors
// ---------------------------------------------------------------------------

/// Image acquisition failure: the source could not be loaded or decoded.
#[derive(Debug)]
pub struct AcquireError {
    pub source_ref: String,
    pub detail: String,
}

impl AcquireError {
    pub fn new(source_ref: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            source_ref: source_ref.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to acquire image {:?}: {}",
            self.source_ref, self.detail
        )
    }
}

impl std::error::Error for AcquireError {}

/// A rendering-surface primitive failed.
#[derive(Debug)]
pub struct SurfaceError {
    /// The primitive that failed (`"clear_rect"`, `"fill_text"`, ...).
    pub op: &'static str,
    pub detail: String,
}

impl SurfaceError {
    pub fn new(op: &'static str, detail: impl Into<String>) -> Self {
        Self {
            op,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface {} failed: {}", self.op, self.detail)
    }
}

impl std::error::Error for SurfaceError {}

/// Output encoding failure.
#[derive(Debug)]
pub struct EncodeError {
    pub detail: String,
}

impl EncodeError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to encode output: {}", self.detail)
    }
}

impl std::error::Error for EncodeError {}

// ---------------------------------------------------------------------------
// MaskError
// ---------------------------------------------------------------------------

/// Top-level error for a mask operation.
#[derive(Debug)]
pub enum MaskError {
    /// No image source reference was supplied at construction.
    MissingSource,
    /// The mask text is empty, so no characters can be cycled.
    InvalidText,
    /// The image failed to load or decode.
    Acquire(AcquireError),
    /// A computed sample anchor lies outside the pixel buffer.
    OutOfBoundsSample {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// The rendering surface rejected a drawing primitive.
    Surface(SurfaceError),
    /// The finished surface could not be encoded.
    Encode(EncodeError),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource => write!(f, "no image source reference was given"),
            Self::InvalidText => write!(f, "mask text is empty"),
            Self::Acquire(e) => e.fmt(f),
            Self::OutOfBoundsSample {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "sample anchor ({x}, {y}) lies outside the {width}x{height} pixel buffer"
            ),
            Self::Surface(e) => e.fmt(f),
            Self::Encode(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for MaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Acquire(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AcquireError> for MaskError {
    fn from(e: AcquireError) -> Self {
        Self::Acquire(e)
    }
}

impl From<SurfaceError> for MaskError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}

impl From<EncodeError> for MaskError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display_carries_context() {
        let e = MaskError::OutOfBoundsSample {
            x: 260,
            y: 0,
            width: 259,
            height: 194,
        };
        let msg = e.to_string();
        assert!(msg.contains("(260, 0)"));
        assert!(msg.contains("259x194"));
    }

    #[test]
    fn backend_errors_chain_as_source() {
        use std::error::Error as _;
        let e: MaskError = SurfaceError::new("fill_text", "device lost").into();
        assert!(e.source().is_some());
        assert!(e.to_string().contains("fill_text"));
        let e = MaskError::InvalidText;
        assert!(e.source().is_none());
    }
}
