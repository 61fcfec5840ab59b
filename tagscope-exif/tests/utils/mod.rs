#![allow(dead_code)]

//! Builder for small TIFF structures as found in Exif segments

pub const BYTE: u16 = 1;
pub const ASCII: u16 = 2;
pub const SHORT: u16 = 3;
pub const LONG: u16 = 4;
pub const RATIONAL: u16 = 5;
pub const UNDEFINED: u16 = 7;
pub const SSHORT: u16 = 8;
pub const SRATIONAL: u16 = 10;

pub struct Entry {
    tag: u16,
    type_: u16,
    count: u32,
    data: Data,
}

enum Data {
    Bytes(Vec<u8>),
    /// Offset of the IFD with the given index
    Ifd(usize),
}

pub struct Tiff {
    pub big_endian: bool,
    /// First IFD is the primary IFD
    pub ifds: Vec<Vec<Entry>>,
    /// Index of the IFD linked from the primary IFD
    pub next: Option<usize>,
}

impl Tiff {
    pub fn new(big_endian: bool) -> Self {
        Self {
            big_endian,
            ifds: vec![Vec::new()],
            next: None,
        }
    }

    /// Adds an IFD and returns its index
    pub fn ifd(&mut self, entries: Vec<Entry>) -> usize {
        self.ifds.push(entries);
        self.ifds.len() - 1
    }

    pub fn primary(&mut self, entries: Vec<Entry>) {
        self.ifds[0] = entries;
    }

    pub fn short(&self, tag: u16, values: &[u16]) -> Entry {
        let data = values.iter().flat_map(|x| self.u16(*x)).collect();
        self.entry(tag, SHORT, values.len(), data)
    }

    pub fn sshort(&self, tag: u16, values: &[i16]) -> Entry {
        let data = values.iter().flat_map(|x| self.u16(*x as u16)).collect();
        self.entry(tag, SSHORT, values.len(), data)
    }

    pub fn long(&self, tag: u16, values: &[u32]) -> Entry {
        let data = values.iter().flat_map(|x| self.u32(*x)).collect();
        self.entry(tag, LONG, values.len(), data)
    }

    pub fn bytes(&self, tag: u16, values: &[u8]) -> Entry {
        self.entry(tag, BYTE, values.len(), values.to_vec())
    }

    pub fn undefined(&self, tag: u16, values: &[u8]) -> Entry {
        self.entry(tag, UNDEFINED, values.len(), values.to_vec())
    }

    /// Adds the terminating NULL byte
    pub fn ascii(&self, tag: u16, value: &str) -> Entry {
        let mut data = value.as_bytes().to_vec();
        data.push(0);
        self.entry(tag, ASCII, data.len(), data)
    }

    pub fn rational(&self, tag: u16, values: &[(u32, u32)]) -> Entry {
        let data = values
            .iter()
            .flat_map(|(n, d)| [self.u32(*n), self.u32(*d)].concat())
            .collect();
        self.entry(tag, RATIONAL, values.len(), data)
    }

    pub fn srational(&self, tag: u16, values: &[(i32, i32)]) -> Entry {
        let data = values
            .iter()
            .flat_map(|(n, d)| [self.u32(*n as u32), self.u32(*d as u32)].concat())
            .collect();
        self.entry(tag, SRATIONAL, values.len(), data)
    }

    pub fn pointer(&self, tag: u16, ifd: usize) -> Entry {
        Entry {
            tag,
            type_: LONG,
            count: 1,
            data: Data::Ifd(ifd),
        }
    }

    pub fn raw_entry(&self, tag: u16, type_: u16, count: u32, data: Vec<u8>) -> Entry {
        Entry {
            tag,
            type_,
            count,
            data: Data::Bytes(data),
        }
    }

    fn entry(&self, tag: u16, type_: u16, count: usize, data: Vec<u8>) -> Entry {
        self.raw_entry(tag, type_, count as u32, data)
    }

    fn u16(&self, v: u16) -> [u8; 2] {
        if self.big_endian {
            v.to_be_bytes()
        } else {
            v.to_le_bytes()
        }
    }

    fn u32(&self, v: u32) -> Vec<u8> {
        if self.big_endian {
            v.to_be_bytes().to_vec()
        } else {
            v.to_le_bytes().to_vec()
        }
    }

    fn ifd_size(entries: &[Entry]) -> usize {
        let extern_data: usize = entries
            .iter()
            .map(|e| match &e.data {
                Data::Bytes(b) if b.len() > 4 => b.len() + b.len() % 2,
                _ => 0,
            })
            .sum();
        2 + 12 * entries.len() + 4 + extern_data
    }

    pub fn build(&self) -> Vec<u8> {
        let mut offsets = Vec::new();
        let mut pos = 8;
        for ifd in &self.ifds {
            offsets.push(pos);
            pos += Self::ifd_size(ifd);
        }

        let mut out = Vec::new();
        out.extend_from_slice(if self.big_endian { b"MM" } else { b"II" });
        out.extend_from_slice(&self.u16(42));
        out.extend(self.u32(8));

        for (i, ifd) in self.ifds.iter().enumerate() {
            let mut data_pos = offsets[i] + 2 + 12 * ifd.len() + 4;
            let mut extern_data = Vec::new();

            out.extend_from_slice(&self.u16(ifd.len() as u16));
            for entry in ifd {
                out.extend_from_slice(&self.u16(entry.tag));
                out.extend_from_slice(&self.u16(entry.type_));
                out.extend(self.u32(entry.count));
                match &entry.data {
                    Data::Ifd(index) => out.extend(self.u32(offsets[*index] as u32)),
                    Data::Bytes(b) if b.len() <= 4 => {
                        let mut inline = b.clone();
                        inline.resize(4, 0);
                        out.extend(inline);
                    }
                    Data::Bytes(b) => {
                        out.extend(self.u32(data_pos as u32));
                        extern_data.extend_from_slice(b);
                        if b.len() % 2 == 1 {
                            extern_data.push(0);
                        }
                        data_pos += b.len() + b.len() % 2;
                    }
                }
            }

            let next = match self.next {
                Some(index) if i == 0 => offsets[index] as u32,
                _ => 0,
            };
            out.extend(self.u32(next));
            out.extend(extern_data);
        }

        out
    }
}
