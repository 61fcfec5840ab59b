use tagscope_common::math::MathError;

use crate::internal::Ifd;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown byte order {0:?}")]
    UnknownByteOrder([u8; 2]),
    #[error("Magic bytes should be 42 but are {0}")]
    MagicBytesWrong(u16),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Data ended before the byte order")]
    ByteOrderEof,
    #[error("Data ended before the magic bytes")]
    MagicBytesEof,
    #[error("Data ended inside an IFD entry")]
    EntryEof,
    #[error("Data ended before the number of entries of IFD {0:?}")]
    IfdNumEntriesEof(Ifd),
    #[error("Value data lies outside of the Exif data")]
    LookupEof,
    #[error("Value size exceeds the addressable range")]
    DataSizeTooLarge,
    #[error("Offset exceeds the addressable range")]
    OffsetTooLarge,
    #[error("Expected an offset but the value is stored inline")]
    ValueInsteadOfOffset,
    #[error("Value length {len} is not a multiple of {size} for type {type_:?}")]
    IncompleteValue {
        type_: crate::internal::Type,
        len: usize,
        size: usize,
    },
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        self.ok_or(err)
    }
}
