use tagscope_common::value::RawTag;

use crate::error::Result;
use crate::internal::ExifRaw;

/// Decoded Exif data
#[derive(Debug, Clone)]
pub struct Exif {
    raw: ExifRaw,
}

impl Exif {
    pub fn new(data: Vec<u8>) -> Result<Self> {
        let mut raw = ExifRaw::new(data);
        raw.decode()?;

        Ok(Self { raw })
    }

    /// Tags of the main image
    ///
    /// See [`ExifRaw::raw_tags`].
    pub fn raw_tags(&self) -> Vec<RawTag> {
        self.raw.raw_tags()
    }

    pub fn debug_dump(&self) -> String {
        self.raw.debug_dump()
    }

    pub fn into_inner(self) -> ExifRaw {
        self.raw
    }
}
