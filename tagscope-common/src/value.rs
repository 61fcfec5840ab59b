//! Raw tag values
//!
//! The value model shared between the Exif extraction and the tag
//! interpretation. Values are stored as they were found in the file, no
//! interpretation is applied.

use std::fmt;

use crate::exif::Tag;
use crate::math::{rational_to_f64, MathError};

/// Fraction as stored in Exif `RATIONAL` and `SRATIONAL` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    pub num: i64,
    pub denom: i64,
}

impl Rational {
    pub const fn new(num: i64, denom: i64) -> Self {
        Self { num, denom }
    }

    pub fn to_f64(self) -> Result<f64, MathError> {
        rational_to_f64(self.num, self.denom)
    }
}

impl From<(u32, u32)> for Rational {
    fn from((num, denom): (u32, u32)) -> Self {
        Self::new(num.into(), denom.into())
    }
}

impl From<(i32, i32)> for Rational {
    fn from((num, denom): (i32, i32)) -> Self {
        Self::new(num.into(), denom.into())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// Value of a single tag
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawValue {
    /// Single integer of any width and signedness
    Integer(i64),
    /// Multiple integers
    Integers(Vec<i64>),
    /// `ASCII` or `UTF-8` field with NULL bytes removed
    Text(String),
    /// `UNDEFINED` data
    Bytes(Vec<u8>),
    Rational(Rational),
    Rationals(Vec<Rational>),
    /// Nested directory like the GPS IFD, ordered as found in the file
    Directory(Vec<(String, RawValue)>),
}

impl RawValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(x) => Some(*x),
            Self::Integers(x) if x.len() == 1 => x.first().copied(),
            Self::Bytes(x) if x.len() == 1 => x.first().copied().map(Into::into),
            _ => None,
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            Self::Integers(x) => Some(x),
            Self::Integer(x) => Some(std::slice::from_ref(x)),
            _ => None,
        }
    }

    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Rational(x) => Some(*x),
            Self::Rationals(x) if x.len() == 1 => x.first().copied(),
            _ => None,
        }
    }

    pub fn as_rationals(&self) -> Option<&[Rational]> {
        match self {
            Self::Rationals(x) => Some(x),
            Self::Rational(x) => Some(std::slice::from_ref(x)),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(x) => Some(x),
            _ => None,
        }
    }

    /// Binary representation
    ///
    /// Text is returned as its UTF-8 bytes, integer sequences as bytes if all
    /// elements fit into a byte.
    pub fn as_bytes(&self) -> Option<std::borrow::Cow<'_, [u8]>> {
        match self {
            Self::Bytes(x) => Some(x.as_slice().into()),
            Self::Text(x) => Some(x.as_bytes().into()),
            Self::Integer(_) | Self::Integers(_) => self
                .as_integers()?
                .iter()
                .map(|x| u8::try_from(*x).ok())
                .collect::<Option<Vec<u8>>>()
                .map(Into::into),
            _ => None,
        }
    }

    pub fn as_directory(&self) -> Option<&[(String, RawValue)]> {
        match self {
            Self::Directory(x) => Some(x),
            _ => None,
        }
    }

    /// Returns `false` for binary data that can't be shown as text
    pub fn is_printable(&self) -> bool {
        match self {
            Self::Bytes(bytes) => is_printable(bytes),
            Self::Directory(entries) => entries.iter().all(|(_, v)| v.is_printable()),
            _ => true,
        }
    }
}

/// All bytes are printable ASCII, ignoring trailing NULL bytes
pub fn is_printable(bytes: &[u8]) -> bool {
    let end = bytes.iter().rposition(|x| *x != 0).map_or(0, |x| x.saturating_add(1));
    bytes
        .get(..end)
        .is_some_and(|x| x.iter().all(|b| b.is_ascii_graphic() || *b == b' '))
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, items: &[impl fmt::Display]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            Self::Integer(x) => write!(f, "{x}"),
            Self::Integers(x) => join(f, x),
            Self::Text(x) => f.write_str(x),
            Self::Bytes(x) => {
                let text = String::from_utf8_lossy(x);
                f.write_str(text.trim_end_matches('\0'))
            }
            Self::Rational(x) => write!(f, "{x}"),
            Self::Rationals(x) => join(f, x),
            Self::Directory(entries) => {
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// A tag with its value as found in the file
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTag {
    pub tag: Tag,
    pub value: RawValue,
}

impl RawTag {
    pub fn new(tag: impl Into<Tag>, value: RawValue) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }
}
