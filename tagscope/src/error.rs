use tagscope_common::math::MathError;
use tagscope_common::value::RawValue;

/// Failure to interpret the value of a single tag
///
/// These errors never leave the interpreter. They are reported to the
/// diagnostics and the tag falls back to a generic rendering.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Expected {expected}, found '{found}'")]
    MalformedValue {
        expected: &'static str,
        found: String,
    },
    /// A rational with a zero denominator, treated like any malformed value
    #[error("Degenerate rational: {0}")]
    DegenerateRational(#[from] MathError),
}

impl DecodeError {
    pub fn malformed(expected: &'static str, found: &RawValue) -> Self {
        Self::MalformedValue {
            expected,
            found: found.to_string(),
        }
    }
}

/// The Exif extraction did not yield any tags
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("No EXIF data available: {0}")]
    NoExifData(MissingExif),
}

#[derive(Debug, thiserror::Error)]
pub enum MissingExif {
    #[error("Not a JPEG file: {0}")]
    NotJpeg(#[from] tagscope_jpeg::Error),
    #[error("No Exif segment found")]
    NoExifSegment,
    #[error("Invalid Exif data: {0}")]
    InvalidExif(#[from] tagscope_exif::Error),
}

impl From<MissingExif> for ExtractionError {
    fn from(value: MissingExif) -> Self {
        Self::NoExifData(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Place name lookup failed: {0}")]
    Geocoding(String),
    #[error("Map unavailable: {0}")]
    Map(String),
    #[error("Location outside of the map projection")]
    OutsideProjection,
    #[error("No provider configured")]
    Unavailable,
}
