use tagscope_common::exif::lookup_tag_name;
use tagscope_common::value::{Rational, RawTag, RawValue};

use super::*;

impl super::ExifRaw {
    /// Tags of the primary and Exif IFD, ordered by tag
    ///
    /// The GPS and interoperability pointers are replaced by the content of
    /// their IFD. If a tag occurs more than once, the first occurrence is
    /// used.
    pub fn raw_tags(&self) -> Vec<RawTag> {
        let mut tags = BTreeMap::<Tag, RawValue>::new();

        for ifd in [Ifd::Primary, Ifd::Exif] {
            for (tag, entry) in self.ifd_entries(ifd) {
                if tags.contains_key(&tag) {
                    tracing::info!("Tag {tag} exists in more than one IFD");
                    continue;
                }

                let value = match tag.exif_specific_ifd() {
                    Some(sub_ifd @ (Ifd::Gps | Ifd::Interoperability)) => {
                        RawValue::Directory(self.directory(sub_ifd))
                    }
                    _ => match self.value(&entry) {
                        Ok(value) => value,
                        Err(err) => {
                            tracing::info!("Skipping tag {tag} in IFD '{ifd:?}': {err}");
                            continue;
                        }
                    },
                };

                tags.insert(tag, value);
            }
        }

        tags.into_iter()
            .map(|(tag, value)| RawTag::new(tag, value))
            .collect()
    }

    /// Named entries of a nested IFD
    ///
    /// Unknown tags are named by their decimal id.
    pub fn directory(&self, ifd: Ifd) -> Vec<(String, RawValue)> {
        self.ifd_entries(ifd)
            .into_iter()
            .filter_map(|(tag, entry)| {
                let name = lookup_tag_name(TagIfd::new(tag, ifd))
                    .map_or_else(|| tag.to_string(), ToString::to_string);

                match self.value(&entry) {
                    Ok(value) => Some((name, value)),
                    Err(err) => {
                        tracing::info!("Skipping {name} in IFD '{ifd:?}': {err}");
                        None
                    }
                }
            })
            .collect()
    }

    /// Decoded value of an entry
    pub fn value(&self, entry: &EntryRef) -> Result<RawValue> {
        let data = self.entry_data(entry)?;
        let raw = &self.raw;

        let value = match entry.data_type {
            Type::Ascii | Type::Utf8 => {
                // Many writers put NULL bytes at the start or in the middle as well
                let data = data.into_iter().filter(|x| *x != 0).collect::<Vec<_>>();
                RawValue::Text(String::from_utf8_lossy(&data).into_owned())
            }
            Type::Undefined | Type::Unknown(_) => RawValue::Bytes(data),
            Type::Byte => integers(data.into_iter().map(i64::from).collect()),
            Type::SByte => integers(
                data.into_iter()
                    .map(|x| i64::from(i8::from_ne_bytes([x])))
                    .collect(),
            ),
            Type::Short => integers(
                chunks::<2>(entry.data_type, &data)?
                    .map(|x| i64::from(raw.u16_from(x)))
                    .collect(),
            ),
            Type::SShort => integers(
                chunks::<2>(entry.data_type, &data)?
                    .map(|x| i64::from(i16::from_ne_bytes(raw.u16_from(x).to_ne_bytes())))
                    .collect(),
            ),
            Type::Long => integers(
                chunks::<4>(entry.data_type, &data)?
                    .map(|x| i64::from(raw.u32_from(x)))
                    .collect(),
            ),
            Type::SLong => integers(
                chunks::<4>(entry.data_type, &data)?
                    .map(|x| i64::from(i32::from_ne_bytes(raw.u32_from(x).to_ne_bytes())))
                    .collect(),
            ),
            Type::Rational => rationals(
                chunks::<8>(entry.data_type, &data)?
                    .map(|x| {
                        let [a, b, c, d, e, f, g, h] = x;
                        Rational::from((raw.u32_from([a, b, c, d]), raw.u32_from([e, f, g, h])))
                    })
                    .collect(),
            ),
            Type::SRational => rationals(
                chunks::<8>(entry.data_type, &data)?
                    .map(|x| {
                        let [a, b, c, d, e, f, g, h] = x;
                        let num = i32::from_ne_bytes(raw.u32_from([a, b, c, d]).to_ne_bytes());
                        let denom = i32::from_ne_bytes(raw.u32_from([e, f, g, h]).to_ne_bytes());
                        Rational::from((num, denom))
                    })
                    .collect(),
            ),
        };

        Ok(value)
    }
}

fn integers(mut values: Vec<i64>) -> RawValue {
    if values.len() == 1 {
        if let Some(value) = values.pop() {
            return RawValue::Integer(value);
        }
    }

    RawValue::Integers(values)
}

fn rationals(mut values: Vec<Rational>) -> RawValue {
    if values.len() == 1 {
        if let Some(value) = values.pop() {
            return RawValue::Rational(value);
        }
    }

    RawValue::Rationals(values)
}

fn chunks<const N: usize>(
    type_: Type,
    data: &[u8],
) -> Result<impl Iterator<Item = [u8; N]> + '_> {
    if !data.chunks_exact(N).remainder().is_empty() {
        return Err(Error::IncompleteValue {
            type_,
            len: data.len(),
            size: N,
        });
    }

    Ok(data
        .chunks_exact(N)
        .filter_map(|x| <[u8; N]>::try_from(x).ok()))
}
