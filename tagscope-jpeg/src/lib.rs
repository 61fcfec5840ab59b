use tagscope_common::math::{checked, MathError, ToUsize};

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";
pub const MAGIC_BYTES: &[u8] = &[0xFF, 0xD8];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Data does not start with the JPEG start of image marker")]
    NotJpeg,
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Expected marker start 0xFF at byte {0}")]
    MarkerExpected(usize),
    #[error("Segment length {0} is smaller than its own length field")]
    InvalidSegmentLength(u16),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

#[derive(Clone, Debug)]
pub struct Segment<'a> {
    marker: Marker,
    pos: usize,
    data: &'a [u8],
}

impl<'a> Segment<'a> {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the marker in the file
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

pub const MARKER_START: u8 = 0xFF;

#[derive(Debug)]
pub struct Jpeg<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Jpeg<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        let segments = Self::find_segments(data)?;
        Ok(Self { segments })
    }

    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// List all segments in their order of appearance
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// List all segments with the given marker
    pub fn segments_marker(&self, marker: Marker) -> impl Iterator<Item = &Segment<'a>> {
        self.segments.iter().filter(move |x| x.marker == marker)
    }

    pub fn exif(&self) -> impl Iterator<Item = &Segment<'a>> {
        self.segments_marker(Marker::APP1)
            .filter(|x| x.data().starts_with(EXIF_IDENTIFIER_STRING))
    }

    /// Exif payloads without the `Exif\0\0` identifier
    pub fn exif_data(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.exif()
            .filter_map(|x| x.data().get(EXIF_IDENTIFIER_STRING.len()..))
    }

    fn find_segments(data: &'a [u8]) -> Result<Vec<Segment<'a>>, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::NotJpeg);
        }

        let mut segments = Vec::new();
        let mut pos = MAGIC_BYTES.len();

        loop {
            let [start, marker] = read_array::<2>(data, pos)?;
            if start != MARKER_START {
                return Err(Error::MarkerExpected(pos));
            }

            // Fill bytes before a marker are allowed
            if marker == MARKER_START {
                pos = pos.checked_add(1).ok_or(Error::UnexpectedEof)?;
                continue;
            }

            let marker = Marker::from(marker);

            if marker == Marker::EOI {
                break;
            }

            let len_pos = pos.checked_add(2).ok_or(Error::UnexpectedEof)?;
            let len = u16::from_be_bytes(read_array::<2>(data, len_pos)?);
            if len < 2 {
                return Err(Error::InvalidSegmentLength(len));
            }

            tracing::debug!("Found segment {marker:?} at {pos} with length {len}");

            let len = len.usize()?;
            let start = len_pos;
            checked![start, len];
            let data_start = (start + 2_usize).check()?;
            let data_end = (start + len).check()?;

            let segment = Segment {
                marker,
                pos,
                data: data.get(data_start..data_end).ok_or(Error::UnexpectedEof)?,
            };

            segments.push(segment);

            if marker == Marker::SOS {
                break;
            }

            pos = data_end;
        }

        Ok(segments)
    }
}

fn read_array<const N: usize>(data: &[u8], pos: usize) -> Result<[u8; N], Error> {
    let end = pos.checked_add(N).ok_or(Error::UnexpectedEof)?;
    data.get(pos..end)
        .and_then(|x| x.try_into().ok())
        .ok_or(Error::UnexpectedEof)
}

tagscope_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Marker {
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        DQT = 0xDB,
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        /// Comment
        COM = 0xFE,
    }
);
