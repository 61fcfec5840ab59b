//! Decoding of Exif tags into human readable reports
//!
//! ```no_run
//! let data = std::fs::read("photo.jpg").unwrap();
//!
//! let raw_tags = tagscope::extract_raw_tags(&data).unwrap();
//! let interpreter = tagscope::TagInterpreter::new();
//! let report = tagscope::report::build_report(&raw_tags, &interpreter);
//!
//! print!("{}", tagscope::report::render_text(&report, "photo.jpg"));
//! ```

pub mod catalog;
pub mod enrich;
pub mod error;
pub mod gps;
pub mod hexdump;
pub mod interpret;
pub mod report;

pub use error::{DecodeError, EnrichmentError, ExtractionError, MissingExif};
pub use gps::GpsFix;
pub use interpret::{
    DecodedTag, Diagnostics, InterpreterOptions, TagInterpreter, TracingDiagnostics,
};
pub use report::Report;
pub use tagscope_common::exif::Tag;
pub use tagscope_common::value::{Rational, RawTag, RawValue};

/// Raw tags of the first decodable Exif segment in JPEG data
pub fn extract_raw_tags(data: &[u8]) -> Result<Vec<RawTag>, ExtractionError> {
    let jpeg = tagscope_jpeg::Jpeg::new(data).map_err(MissingExif::from)?;

    let mut last_err = None;
    for exif_data in jpeg.exif_data() {
        match tagscope_exif::Exif::new(exif_data.to_vec()) {
            Ok(exif) => return Ok(exif.raw_tags()),
            Err(err) => {
                tracing::info!("Ignoring undecodable Exif segment: {err}");
                last_err = Some(err);
            }
        }
    }

    Err(last_err.map_or(MissingExif::NoExifSegment, MissingExif::InvalidExif).into())
}
