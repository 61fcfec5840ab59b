mod debug;
mod decode;
mod lookup;
mod tags;

use std::collections::BTreeMap;

pub use tagscope_common::exif::{Ifd, Tag, TagIfd};
use tagscope_common::math::*;

pub use super::*;
use crate::error::{Error, Result, ResultExt};

/// Location and type of an IFD entry
#[derive(Debug, Clone, Copy)]
pub struct EntryRef {
    /// Position of the entry in the Exif data
    pub position: u32,
    pub data_type: Type,
    pub count: u32,
    pub value_offset: ValueOffset,
}

impl EntryRef {
    pub fn value_offset_position(&self) -> Result<u32> {
        Ok(self.position.safe_add(8)?)
    }

    /// Size of the value in bytes
    pub fn data_len(&self) -> Result<u32> {
        self.count
            .checked_mul(self.data_type.size())
            .e(Error::DataSizeTooLarge)
    }

    pub fn offset(&self) -> Result<u32> {
        if let ValueOffset::Offset(offset) = self.value_offset {
            Ok(offset)
        } else {
            Err(Error::ValueInsteadOfOffset)
        }
    }
}

/// Values of up to four bytes are stored inside the entry, larger values at an
/// offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOffset {
    /// Inline bytes, in the byte order of the file
    Value([u8; 4]),
    Offset(u32),
}

impl ValueOffset {
    fn new(data_type: Type, count: u32, bytes: [u8; 4], raw: &Raw) -> Result<Self> {
        let size = data_type
            .size()
            .checked_mul(count)
            .e(Error::DataSizeTooLarge)?;

        Ok(if size <= 4 {
            Self::Value(bytes)
        } else {
            Self::Offset(raw.u32_from(bytes))
        })
    }
}

#[derive(Debug, Clone)]
pub struct ExifRaw {
    pub raw: Raw,
    pub locations: BTreeMap<TagIfd, Vec<EntryRef>>,
    /// The locations where the offsets are stored
    pub ifd_locations: BTreeMap<Ifd, u32>,
}

impl ExifRaw {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            raw: Raw::new(data),
            locations: Default::default(),
            ifd_locations: Default::default(),
        }
    }

    pub fn raw(&self) -> Raw {
        self.raw.clone()
    }

    /// Entries of an IFD in tag order, first entry per tag
    pub fn ifd_entries(&self, ifd: Ifd) -> Vec<(Tag, EntryRef)> {
        self.locations
            .iter()
            .filter(|(tagifd, _)| tagifd.ifd == ifd)
            .filter_map(|(tagifd, _)| Some((tagifd.tag, self.lookup_entry(*tagifd)?)))
            .collect()
    }
}
