#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TagIfd {
    pub tag: Tag,
    pub ifd: Ifd,
}

impl TagIfd {
    pub fn new(tag: Tag, ifd: Ifd) -> Self {
        Self { tag, ifd }
    }
}

impl<T: Field> From<T> for TagIfd {
    fn from(_value: T) -> Self {
        TagIfd {
            tag: T::TAG,
            ifd: T::IFD,
        }
    }
}

pub trait Field {
    const NAME: &'static str;
    const TAG: Tag;
    const IFD: Ifd;
}

pub fn lookup_tag_name(tagifd: TagIfd) -> Option<&'static str> {
    crate::field::TAG_NAMES
        .get(&(tagifd.tag.0, tagifd.ifd))
        .copied()
}

/// Name of a tag in the main image directories
///
/// Tags are searched in the primary, Exif and interoperability IFDs, in that
/// order.
pub fn lookup_main_tag_name(tag: Tag) -> Option<&'static str> {
    [Ifd::Primary, Ifd::Exif, Ifd::Interoperability]
        .into_iter()
        .find_map(|ifd| lookup_tag_name(TagIfd::new(tag, ifd)))
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

impl Tag {
    pub const ORIENTATION: Self = Self(0x0112);
    pub const RESOLUTION_UNIT: Self = Self(0x0128);
    pub const EXPOSURE_PROGRAM: Self = Self(0x8822);
    pub const COMPONENTS_CONFIGURATION: Self = Self(0x9101);
    pub const METERING_MODE: Self = Self(0x9207);
    pub const LIGHT_SOURCE: Self = Self(0x9208);
    pub const FLASH: Self = Self(0x9209);
    pub const SUBJECT_LOCATION: Self = Self(0x9214);
    pub const MAKER_NOTE: Self = Self(0x927C);
    pub const USER_COMMENT: Self = Self(0x9286);
    pub const SENSING_METHOD: Self = Self(0xA217);
    pub const FILE_SOURCE: Self = Self(0xA300);
    pub const SCENE_TYPE: Self = Self(0xA301);

    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);

    /// See 4.6.3 in v3.0 standard
    pub fn exif_specific_ifd(&self) -> Option<Ifd> {
        match *self {
            Self::EXIF_IFD_POINTER => Some(Ifd::Exif),
            Self::GPS_INFO_IFD_POINTER => Some(Ifd::Gps),
            Self::INTEROPERABILITY_IFD_POINTER => Some(Ifd::Interoperability),
            _ => None,
        }
    }

    pub fn is_exif_specific_ifd(&self) -> bool {
        self.exif_specific_ifd().is_some()
    }
}

impl From<u16> for Tag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image file directory
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ifd {
    Primary,
    Thumbnail,
    Exif,
    Gps,
    Interoperability,
}
