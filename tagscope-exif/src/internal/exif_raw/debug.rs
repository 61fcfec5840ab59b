use std::fmt::Write;

use tagscope_common::exif::lookup_tag_name;

use super::*;

impl super::ExifRaw {
    /// Human readable listing of all IFDs and their entries
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();

        let mut ifds: BTreeMap<Ifd, Option<u32>> = self
            .ifd_locations
            .iter()
            .map(|(ifd, location)| (*ifd, Some(*location)))
            .collect();

        for tagifd in self.locations.keys() {
            ifds.entry(tagifd.ifd).or_default();
        }

        for (ifd, ifd_location) in ifds {
            let _ = writeln!(out, "\n{ifd:?} - Defined {ifd_location:?}");
            out.push_str("------------------------------\n");

            for (tagifd, entries) in self.locations.iter().filter(|(x, _)| x.ifd == ifd) {
                let tag = tagifd.tag.0;
                let name = lookup_tag_name(*tagifd)
                    .map_or_else(|| format!("0x{tag:X}"), ToString::to_string);

                for entry in entries {
                    let _ = writeln!(
                        out,
                        "{name} {:?}({}): {:?}",
                        entry.data_type, entry.count, entry.value_offset
                    );
                    out.push_str(&self.debug_dump_entry(entry));
                    out.push('\n');
                }
            }
        }

        out
    }

    pub fn debug_dump_entry(&self, entry: &EntryRef) -> String {
        match self.value(entry) {
            Ok(value) if value.is_printable() => value.to_string(),
            Ok(value) => format!("{value:?}"),
            Err(err) => format!("Error: {err}"),
        }
    }
}
