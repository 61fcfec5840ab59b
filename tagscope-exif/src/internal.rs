//! Low level access to the IFD structure

mod exif_raw;
mod raw;
mod type_;

pub use exif_raw::*;
pub use raw::Raw;
pub use type_::Type;
