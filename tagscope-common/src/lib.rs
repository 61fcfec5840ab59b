//! Common types and helpers shared by the tagscope crates

pub mod exif;
pub mod field;
pub mod geography;
pub mod math;
pub mod orientation;
pub mod utils;
pub mod value;

pub mod prelude {
    pub use crate::exif::{Field, Tag};
    pub use crate::math::{SafeAdd, SafeMul, ToUsize};
    pub use crate::value::{Rational, RawTag, RawValue};
}
