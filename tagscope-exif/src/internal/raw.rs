use std::cell::RefCell;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::rc::Rc;

use tagscope_common::math::ToUsize;

use crate::error::{Error, Result, ResultExt};

/// Shared read handle on the Exif data
///
/// Clones refer to the same cursor.
#[derive(Debug, Clone)]
pub struct Raw {
    pub big_endian: bool,
    pub buffer: Rc<RefCell<Cursor<Vec<u8>>>>,
}

impl Raw {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            big_endian: false,
            buffer: Rc::new(RefCell::new(Cursor::new(data))),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.borrow().get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn position(&self) -> Result<u32> {
        self.buffer
            .borrow()
            .position()
            .try_into()
            .e(Error::OffsetTooLarge)
    }

    pub fn seek_start(&mut self, seek: u32) -> Result<()> {
        self.buffer
            .borrow_mut()
            .seek(SeekFrom::Start(seek.into()))?;

        Ok(())
    }

    pub fn read_exact<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes: [u8; N] = [0; N];
        self.buffer.borrow_mut().read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Read `len` bytes starting at `offset`
    ///
    /// Fails without allocating if the range is not inside the data.
    pub fn read_at(&mut self, offset: u32, len: u32) -> Result<Vec<u8>> {
        let start = offset.usize()?;
        let len = len.usize()?;
        let end = start.checked_add(len).e(Error::LookupEof)?;
        if end > self.len() {
            return Err(Error::LookupEof);
        }

        self.seek_start(offset)?;
        let mut buf = vec![0; len];
        self.buffer
            .borrow_mut()
            .read_exact(&mut buf)
            .e(Error::LookupEof)?;

        Ok(buf)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_exact()?;
        Ok(self.u16_from(bytes))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_exact()?;
        Ok(self.u32_from(bytes))
    }

    /// Interpret bytes in the byte order of the data
    pub fn u16_from(&self, bytes: [u8; 2]) -> u16 {
        if self.big_endian {
            u16::from_be_bytes(bytes)
        } else {
            u16::from_le_bytes(bytes)
        }
    }

    /// Interpret bytes in the byte order of the data
    pub fn u32_from(&self, bytes: [u8; 4]) -> u32 {
        if self.big_endian {
            u32::from_be_bytes(bytes)
        } else {
            u32::from_le_bytes(bytes)
        }
    }
}
