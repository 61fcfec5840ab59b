//! Tag names and the value tables of enumerated tags

use std::borrow::Cow;

use tagscope_common::exif::{lookup_main_tag_name, Tag};
use tagscope_common::orientation::Orientation;

/// Name of a tag or its decimal id if unknown
pub fn name_for_tag(tag: Tag) -> Cow<'static, str> {
    match lookup_main_tag_name(tag) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(tag.to_string()),
    }
}

/// Description of an enumerated tag value
///
/// Returns `None` for tags without a value table. Codes missing from a table
/// are described by the table's generic text, if it has one.
///
/// ```
/// # use tagscope::catalog::describe_enum;
/// # use tagscope_common::exif::Tag;
/// assert_eq!(describe_enum(Tag::EXPOSURE_PROGRAM, 1), Some("Manual"));
/// assert_eq!(describe_enum(Tag::EXPOSURE_PROGRAM, 0), Some("Reserved value."));
/// assert_eq!(describe_enum(Tag::RESOLUTION_UNIT, 1), None);
/// ```
pub fn describe_enum(tag: Tag, code: i64) -> Option<&'static str> {
    if tag == Tag::ORIENTATION {
        return Some(
            u16::try_from(code)
                .ok()
                .and_then(|x| Orientation::try_from(x).ok())
                .map_or(VALUE_UNKNOWN, Orientation::description),
        );
    }

    let table = CodeTable::for_tag(tag)?;

    table
        .codes
        .iter()
        .find(|(x, _)| *x == code)
        .map(|(_, description)| *description)
        .or(table.unknown)
}

/// Letter of a color component in `ComponentsConfiguration`
pub fn component_name(code: u8) -> &'static str {
    match code {
        0 => "",
        1 => "Y",
        2 => "Cb",
        3 => "Cr",
        4 => "R",
        5 => "G",
        6 => "B",
        _ => "??",
    }
}

const VALUE_UNKNOWN: &str = "Value unknown.";

struct CodeTable {
    codes: &'static [(i64, &'static str)],
    /// Used for codes that are not listed
    unknown: Option<&'static str>,
}

impl CodeTable {
    fn for_tag(tag: Tag) -> Option<Self> {
        let (codes, unknown) = match tag {
            Tag::RESOLUTION_UNIT => (RESOLUTION_UNIT, None),
            Tag::EXPOSURE_PROGRAM => (EXPOSURE_PROGRAM, Some("Reserved value.")),
            Tag::METERING_MODE => (METERING_MODE, Some(VALUE_UNKNOWN)),
            Tag::LIGHT_SOURCE => (LIGHT_SOURCE, Some(VALUE_UNKNOWN)),
            Tag::SENSING_METHOD => (SENSING_METHOD, Some(VALUE_UNKNOWN)),
            Tag::FILE_SOURCE => (FILE_SOURCE, Some("Value unknown")),
            Tag::SCENE_TYPE => (SCENE_TYPE, Some("Value unknown")),
            _ => return None,
        };

        Some(Self { codes, unknown })
    }
}

const RESOLUTION_UNIT: &[(i64, &str)] = &[
    (2, "XResolution and YResolution measured in pixels/inch."),
    (3, "XResolution and YResolution measured in pixels/centimeter"),
];

const EXPOSURE_PROGRAM: &[(i64, &str)] = &[
    (1, "Manual"),
    (2, "Normal program"),
    (3, "Aperture priority"),
    (4, "Shutter priority"),
    (5, "Creative program (biased toward depth of field)"),
    (6, "Action program (biased toward fast shutter speed)"),
    (
        7,
        "Portrait mode (for closeup photos with the background out of focus)",
    ),
    (
        8,
        "Landscape mode (for landscape photos with the background in focus)",
    ),
];

const METERING_MODE: &[(i64, &str)] = &[
    (0, "Unknown"),
    (1, "Average"),
    (2, "CenterWeightedAverage"),
    (3, "Spot"),
    (4, "MultiSpot"),
    (5, "Pattern"),
    (6, "Partial"),
    (255, "Other"),
];

const LIGHT_SOURCE: &[(i64, &str)] = &[
    (0, "Unknown"),
    (1, "Daylight"),
    (2, "Fluorescent"),
    (3, "Tungsten (incandescent light)"),
    (4, "Flash"),
    (9, "Fine weather"),
    (10, "Cloudy weather"),
    (11, "Shade"),
    (12, "Daylight fluorescent (D 5700 - 7100K)"),
    (13, "Day white fluorescent (N 4600 - 5400K)"),
    (14, "Cool white fluorescent (W 3900 - 4500K)"),
    (15, "White fluorescent (WW 3200 - 3700K)"),
    (16, "Warm white fluorescent (L 2600 - 3250K)"),
    (17, "Standard light A"),
    (18, "Standard light B"),
    (19, "Standard light C"),
    (20, "D55"),
    (21, "D65"),
    (22, "D75"),
    (23, "D50"),
    (24, "ISO studio tungsten"),
    (255, "Other light source"),
];

const SENSING_METHOD: &[(i64, &str)] = &[
    (1, "Not defined"),
    (2, "One-chip color area sensor"),
    (3, "Two-chip color area sensor"),
    (4, "Three-chip color area sensor"),
    (5, "Color sequential area sensor"),
    (7, "Trilinear sensor"),
    (8, "Color sequential linear sensor"),
];

const FILE_SOURCE: &[(i64, &str)] = &[(3, "Digital Still Camera")];

const SCENE_TYPE: &[(i64, &str)] = &[(1, "A directly photographed image")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(name_for_tag(Tag::FLASH), "Flash");
        assert_eq!(name_for_tag(Tag::GPS_INFO_IFD_POINTER), "GPSInfo");
        assert_eq!(name_for_tag(Tag(0xC0DE)), "49374");
    }

    #[test]
    fn orientation() {
        assert_eq!(
            describe_enum(Tag::ORIENTATION, 1),
            Some("The 0th row is at the visual top of the image, and the 0th column is the visual left-hand side.")
        );
        assert_eq!(describe_enum(Tag::ORIENTATION, 9), Some("Value unknown."));
        assert_eq!(describe_enum(Tag::ORIENTATION, -1), Some("Value unknown."));
    }

    #[test]
    fn fallbacks() {
        assert_eq!(describe_enum(Tag::METERING_MODE, 255), Some("Other"));
        assert_eq!(describe_enum(Tag::METERING_MODE, 7), Some("Value unknown."));
        assert_eq!(describe_enum(Tag::LIGHT_SOURCE, 21), Some("D65"));
        assert_eq!(describe_enum(Tag::LIGHT_SOURCE, 5), Some("Value unknown."));
        assert_eq!(describe_enum(Tag::SENSING_METHOD, 6), Some("Value unknown."));
        assert_eq!(describe_enum(Tag::FILE_SOURCE, 3), Some("Digital Still Camera"));
        assert_eq!(describe_enum(Tag::SCENE_TYPE, 2), Some("Value unknown"));
        assert_eq!(
            describe_enum(Tag::RESOLUTION_UNIT, 3),
            Some("XResolution and YResolution measured in pixels/centimeter")
        );
        assert_eq!(describe_enum(Tag::FLASH, 1), None);
    }

    #[test]
    fn components() {
        let names = [1, 2, 3, 0].map(component_name);
        assert_eq!(names.join(" "), "Y Cb Cr ");
        assert_eq!(component_name(7), "??");
    }
}
