//! Interpretation of raw tags
//!
//! Every tag is handled by a [`Rule`]. Rules that fail to decode a value fall
//! back to a generic rendering, so a broken tag never affects other tags.

use std::fmt;

use tagscope_common::exif::Tag;
use tagscope_common::value::{RawTag, RawValue};

use crate::catalog::{component_name, describe_enum, name_for_tag};
use crate::error::DecodeError;
use crate::{gps, hexdump};

/// A tag prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedTag {
    pub tag: Tag,
    pub name: String,
    /// Always printable, binary data is replaced by a preview
    pub display: String,
    /// Additional lines explaining the value
    pub annotations: Vec<String>,
}

impl fmt::Display for DecodedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}: {}", self.tag, self.name, self.display)?;
        for line in &self.annotations {
            write!(f, "\n\t{line}")?;
        }
        Ok(())
    }
}

/// Receives tags that could not be fully decoded
pub trait Diagnostics {
    fn degraded(&self, tag: Tag, name: &str, error: &DecodeError);
}

/// Reports degraded tags as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn degraded(&self, tag: Tag, name: &str, error: &DecodeError) {
        tracing::warn!("Tag {tag} ({name}) shown undecoded: {error}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Bytes per line in hex dumps
    pub dump_line_width: usize,
    /// Output size after which hex dumps are cut off
    pub dump_byte_limit: usize,
    /// Bytes listed as hex in previews
    pub preview_line_width: usize,
    /// Characters of ASCII shown in previews
    pub preview_total_limit: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            dump_line_width: 16,
            dump_byte_limit: 10_000,
            preview_line_width: 16,
            preview_total_limit: 16,
        }
    }
}

impl InterpreterOptions {
    pub fn with_dump_line_width(mut self, dump_line_width: usize) -> Self {
        self.dump_line_width = dump_line_width;
        self
    }

    pub fn with_dump_byte_limit(mut self, dump_byte_limit: usize) -> Self {
        self.dump_byte_limit = dump_byte_limit;
        self
    }

    pub fn with_preview_line_width(mut self, preview_line_width: usize) -> Self {
        self.preview_line_width = preview_line_width;
        self
    }

    pub fn with_preview_total_limit(mut self, preview_total_limit: usize) -> Self {
        self.preview_total_limit = preview_total_limit;
        self
    }

    fn dump(&self, bytes: &[u8]) -> Vec<String> {
        hexdump::dump(bytes, self.dump_line_width, self.dump_byte_limit)
    }

    fn preview(&self, bytes: &[u8]) -> String {
        hexdump::preview(bytes, self.preview_line_width, self.preview_total_limit)
    }
}

/// Turns raw tags into [`DecodedTag`]s
///
/// The interpreter holds no state besides its configuration. Interpreting
/// the same tags again gives the same result.
///
/// ```
/// # use tagscope::interpret::TagInterpreter;
/// # use tagscope_common::prelude::*;
/// let interpreter = TagInterpreter::new();
/// let decoded = interpreter.interpret(&RawTag::new(Tag::FLASH, RawValue::Integer(0x10)));
///
/// assert_eq!(decoded.name, "Flash");
/// assert_eq!(decoded.display, "0b10000");
/// assert_eq!(
///     decoded.annotations,
///     [
///         "Flash did not fire.",
///         "No strobe return detection function.",
///         "Compulsory flash suppression."
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagInterpreter<D: Diagnostics = TracingDiagnostics> {
    options: InterpreterOptions,
    diagnostics: D,
}

impl TagInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: InterpreterOptions) -> Self {
        Self::with_diagnostics(options, TracingDiagnostics)
    }
}

impl<D: Diagnostics> TagInterpreter<D> {
    pub fn with_diagnostics(options: InterpreterOptions, diagnostics: D) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    pub fn options(&self) -> &InterpreterOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn interpret(&self, raw: &RawTag) -> DecodedTag {
        let name = name_for_tag(raw.tag).into_owned();
        let rule = Rule::for_tag(raw.tag);

        let Decoded {
            display,
            annotations,
        } = match rule.decode(&raw.value, &self.options) {
            Ok(decoded) => decoded,
            Err(err) => {
                self.diagnostics.degraded(raw.tag, &name, &err);
                rule.fallback(&raw.value, &self.options)
            }
        };

        DecodedTag {
            tag: raw.tag,
            name,
            display,
            annotations,
        }
    }

    pub fn interpret_all(&self, raw_tags: &[RawTag]) -> Vec<DecodedTag> {
        raw_tags.iter().map(|x| self.interpret(x)).collect()
    }
}

/// Display text and annotations of a tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    pub display: String,
    pub annotations: Vec<String>,
}

impl Decoded {
    fn new(display: impl Into<String>, annotations: Vec<String>) -> Self {
        Self {
            display: display.into(),
            annotations,
        }
    }
}

/// Decoding strategy for a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 274
    Orientation,
    /// 296
    ResolutionUnit,
    /// 34850
    ExposureProgram,
    /// 34853
    GpsInfo,
    /// 37121
    ComponentsConfiguration,
    /// 37383
    MeteringMode,
    /// 37384
    LightSource,
    /// 37385
    Flash,
    /// 37396
    SubjectLocation,
    /// 37500
    MakerNote,
    /// 41510
    UserComment,
    /// 41495
    SensingMethod,
    /// 41728
    FileSource,
    /// 41729
    SceneType,
    /// All other tags
    Default,
}

impl Rule {
    pub fn for_tag(tag: Tag) -> Self {
        match tag {
            Tag::ORIENTATION => Self::Orientation,
            Tag::RESOLUTION_UNIT => Self::ResolutionUnit,
            Tag::EXPOSURE_PROGRAM => Self::ExposureProgram,
            Tag::GPS_INFO_IFD_POINTER => Self::GpsInfo,
            Tag::COMPONENTS_CONFIGURATION => Self::ComponentsConfiguration,
            Tag::METERING_MODE => Self::MeteringMode,
            Tag::LIGHT_SOURCE => Self::LightSource,
            Tag::FLASH => Self::Flash,
            Tag::SUBJECT_LOCATION => Self::SubjectLocation,
            Tag::MAKER_NOTE => Self::MakerNote,
            Tag::USER_COMMENT => Self::UserComment,
            Tag::SENSING_METHOD => Self::SensingMethod,
            Tag::FILE_SOURCE => Self::FileSource,
            Tag::SCENE_TYPE => Self::SceneType,
            _ => Self::Default,
        }
    }

    /// Tag whose value table the rule uses
    fn table_tag(self) -> Option<Tag> {
        match self {
            Self::Orientation => Some(Tag::ORIENTATION),
            Self::ResolutionUnit => Some(Tag::RESOLUTION_UNIT),
            Self::ExposureProgram => Some(Tag::EXPOSURE_PROGRAM),
            Self::MeteringMode => Some(Tag::METERING_MODE),
            Self::LightSource => Some(Tag::LIGHT_SOURCE),
            Self::SensingMethod => Some(Tag::SENSING_METHOD),
            Self::FileSource => Some(Tag::FILE_SOURCE),
            Self::SceneType => Some(Tag::SCENE_TYPE),
            _ => None,
        }
    }

    pub fn decode(
        self,
        value: &RawValue,
        options: &InterpreterOptions,
    ) -> Result<Decoded, DecodeError> {
        match self {
            Self::Orientation
            | Self::ResolutionUnit
            | Self::ExposureProgram
            | Self::MeteringMode
            | Self::LightSource
            | Self::SensingMethod => {
                let code = integer(value)?;
                Ok(Decoded::new(value.to_string(), self.describe(code)))
            }
            Self::FileSource | Self::SceneType => {
                let code = integer(value)?;
                let bytes = value
                    .as_bytes()
                    .ok_or_else(|| DecodeError::malformed("a byte", value))?;
                Ok(Decoded::new(options.preview(&bytes), self.describe(code)))
            }
            Self::GpsInfo => {
                let sub_ifd = value
                    .as_directory()
                    .ok_or_else(|| DecodeError::malformed("the GPS directory", value))?;
                let fix = gps::decode(sub_ifd);
                Ok(Decoded::new("", fix.annotations()))
            }
            Self::ComponentsConfiguration => {
                let bytes = value
                    .as_bytes()
                    .filter(|x| x.len() == 4)
                    .ok_or_else(|| DecodeError::malformed("four bytes", value))?;
                let components = bytes
                    .iter()
                    .map(|x| component_name(*x))
                    .collect::<Vec<_>>()
                    .join(" ");
                Ok(Decoded::new(options.preview(&bytes), vec![components]))
            }
            Self::Flash => {
                let code = integer(value)?;
                if code < 0 {
                    return Err(DecodeError::malformed("a bit field", value));
                }
                Ok(Decoded::new(format!("{code:#b}"), flash(code)))
            }
            Self::SubjectLocation => {
                let coords = value
                    .as_integers()
                    .filter(|x| (2..=4).contains(&x.len()))
                    .ok_or_else(|| DecodeError::malformed("two to four integers", value))?;
                Ok(Decoded::new(value.to_string(), subject_location(coords)))
            }
            Self::MakerNote => {
                let bytes = value
                    .as_bytes()
                    .ok_or_else(|| DecodeError::malformed("binary data", value))?;
                Ok(Decoded::new("", options.dump(&bytes)))
            }
            Self::UserComment => {
                let bytes = value
                    .as_bytes()
                    .ok_or_else(|| DecodeError::malformed("binary data", value))?;
                Ok(Decoded::new(
                    display_text(value, options),
                    options.dump(&bytes),
                ))
            }
            Self::Default => default_rule(value, options),
        }
    }

    /// Rendering used if [`Self::decode`] fails
    pub fn fallback(self, value: &RawValue, options: &InterpreterOptions) -> Decoded {
        let annotations = match self {
            Self::Orientation | Self::MeteringMode | Self::LightSource | Self::SensingMethod => {
                vec!["Value unknown.".to_string()]
            }
            Self::ExposureProgram => vec!["Reserved value.".to_string()],
            Self::FileSource | Self::SceneType => vec!["Value unknown".to_string()],
            _ => Vec::new(),
        };

        Decoded::new(display_text(value, options), annotations)
    }

    fn describe(self, code: i64) -> Vec<String> {
        self.table_tag()
            .and_then(|tag| describe_enum(tag, code))
            .map(ToString::to_string)
            .into_iter()
            .collect()
    }
}

fn integer(value: &RawValue) -> Result<i64, DecodeError> {
    value
        .as_integer()
        .ok_or_else(|| DecodeError::malformed("an integer", value))
}

/// The value as text, or a preview for binary data
fn display_text(value: &RawValue, options: &InterpreterOptions) -> String {
    match value {
        RawValue::Bytes(bytes) if !value.is_printable() => options.preview(bytes),
        _ => value.to_string(),
    }
}

fn default_rule(value: &RawValue, options: &InterpreterOptions) -> Result<Decoded, DecodeError> {
    match value {
        RawValue::Rational(rational) => Ok(Decoded::new(
            format!("{:.4}", rational.to_f64()?),
            Vec::new(),
        )),
        RawValue::Bytes(bytes) if !value.is_printable() => Ok(Decoded::new(
            options.preview(bytes),
            options.dump(bytes),
        )),
        RawValue::Directory(entries) => Ok(Decoded::new(
            "",
            entries
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect(),
        )),
        _ => Ok(Decoded::new(value.to_string(), Vec::new())),
    }
}

fn flash(code: i64) -> Vec<String> {
    if code & 0b10_0000 != 0 {
        return vec!["No flash function.".to_string()];
    }

    let mut lines = Vec::new();

    if code & 0b1 == 0 {
        lines.push("Flash did not fire.");
    } else {
        lines.push("Flash fired.");
    }

    match code & 0b110 {
        0b000 => lines.push("No strobe return detection function."),
        0b100 => lines.push("Strobe return light not detected."),
        0b110 => lines.push("Strobe return light detected."),
        _ => {}
    }

    match code & 0b1_1000 {
        0b0_1000 => lines.push("Compulsory flash firing."),
        0b1_0000 => lines.push("Compulsory flash suppression."),
        0b1_1000 => lines.push("Flash in auto mode."),
        _ => {}
    }

    if code & 0b100_0000 != 0 {
        lines.push("Red eye reduction supported.");
    }

    lines.into_iter().map(ToString::to_string).collect()
}

fn subject_location(coords: &[i64]) -> Vec<String> {
    match coords {
        [x, y] => vec![main_subject(*x, *y)],
        [x, y, diameter] => vec![
            main_subject(*x, *y),
            format!("Main subject in a circle of diameter {diameter}"),
        ],
        [x, y, width, height] => vec![
            main_subject(*x, *y),
            format!("Main subject in a rectangle of width {width} and height {height}"),
        ],
        _ => Vec::new(),
    }
}

fn main_subject(x: i64, y: i64) -> String {
    format!("Main subject of the photo in X: {x} and Y: {y}")
}
