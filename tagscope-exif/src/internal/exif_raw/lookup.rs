use super::*;

impl super::ExifRaw {
    pub fn lookup_entry(&self, tagifd: impl Into<TagIfd>) -> Option<EntryRef> {
        self.locations.get(&tagifd.into())?.first().copied()
    }

    /// Bytes of the value as stored in the file
    pub fn entry_data(&self, entry: &EntryRef) -> Result<Vec<u8>> {
        let len = entry.data_len()?;

        match entry.value_offset {
            ValueOffset::Offset(offset) => self.raw().read_at(offset, len),
            ValueOffset::Value(bytes) => Ok(bytes
                .get(..len.usize()?)
                .e(Error::DataSizeTooLarge)?
                .to_vec()),
        }
    }

    /// Read a single entry from IFD
    pub fn read_entry(&mut self) -> Result<(Tag, EntryRef)> {
        let mut raw = self.raw();

        let position = raw.position()?;
        let tag_id = raw.read_u16().e(Error::EntryEof)?;
        let data_type = raw.read_u16().e(Error::EntryEof)?.into();
        let count = raw.read_u32().e(Error::EntryEof)?;
        let bytes = raw.read_exact().e(Error::EntryEof)?;
        let value_offset = ValueOffset::new(data_type, count, bytes, &raw)?;

        Ok((
            Tag(tag_id),
            EntryRef {
                position,
                data_type,
                count,
                value_offset,
            },
        ))
    }
}
