//! Decoding of Exif data into raw tags
//!
//! ```
//! # use tagscope_exif::Exif;
//! # use tagscope_common::prelude::*;
//! // Little endian, one IFD with Orientation = 6
//! let data = vec![
//!     b'I', b'I', 42, 0, 8, 0, 0, 0, //
//!     1, 0, //
//!     0x12, 0x01, 3, 0, 1, 0, 0, 0, 6, 0, 0, 0, //
//!     0, 0, 0, 0,
//! ];
//!
//! let exif = Exif::new(data).unwrap();
//! assert_eq!(
//!     exif.raw_tags(),
//!     vec![RawTag::new(Tag::ORIENTATION, RawValue::Integer(6))]
//! );
//! ```

pub mod error;
mod high_level;
pub mod internal;

pub use error::{Error, Result};
pub use high_level::Exif;
