//! Decoding of the GPS IFD

use tagscope_common::exif::Tag;
use tagscope_common::geography::{LatRef, Location, LonRef};
use tagscope_common::math::dms_to_degrees;
use tagscope_common::value::{Rational, RawTag, RawValue};

use crate::error::DecodeError;

/// Position and time as recorded in the GPS IFD
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GpsFix {
    /// Signed degrees, negative in the southern hemisphere
    pub latitude: Option<f64>,
    /// Signed degrees, negative in the western hemisphere
    pub longitude: Option<f64>,
    pub image_direction: Option<f64>,
    pub image_direction_ref: Option<String>,
    /// Formatted as `H:M:S.ss`
    pub timestamp: Option<String>,
    /// Entries that are not decoded, in the order found in the file
    pub other_fields: Vec<(String, RawValue)>,
}

/// Entries of the GPS IFD if the image has one
pub fn extract_gps_sub_ifd(raw_tags: &[RawTag]) -> Option<&[(String, RawValue)]> {
    raw_tags
        .iter()
        .find(|x| x.tag == Tag::GPS_INFO_IFD_POINTER)?
        .value
        .as_directory()
}

/// Decode the GPS entries
///
/// Entries that can't be decoded are kept in [`GpsFix::other_fields`]. A
/// hemisphere reference is only used together with its coordinate.
pub fn decode(sub_ifd: &[(String, RawValue)]) -> GpsFix {
    let mut fields = Fields::new(sub_ifd);

    let latitude = fields.take("GPSLatitude", degrees).map(|lat| {
        match fields.take("GPSLatitudeRef", |x| text(x).and_then(lat_ref)) {
            Some(lat_ref) => lat * lat_ref.as_sign(),
            None => lat,
        }
    });

    let longitude = fields.take("GPSLongitude", degrees).map(|lon| {
        match fields.take("GPSLongitudeRef", |x| text(x).and_then(lon_ref)) {
            Some(lon_ref) => lon * lon_ref.as_sign(),
            None => lon,
        }
    });

    let image_direction = fields.take("GPSImgDirection", |x| {
        Ok(rational(x)?.to_f64()?)
    });
    let image_direction_ref =
        fields.take("GPSImgDirectionRef", |x| text(x).map(ToString::to_string));

    let timestamp = fields.take("GPSTimeStamp", timestamp);

    GpsFix {
        latitude,
        longitude,
        image_direction,
        image_direction_ref,
        timestamp,
        other_fields: fields.remaining(),
    }
}

impl GpsFix {
    /// Both coordinates if present
    pub fn location(&self) -> Option<Location> {
        Some(Location::new(self.latitude?, self.longitude?))
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// One line per decoded value followed by the other fields
    pub fn annotations(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(lat) = self.latitude {
            lines.push(format!("Latitude: {lat:.8}"));
        }
        if let Some(lon) = self.longitude {
            lines.push(format!("Longitude: {lon:.8}"));
        }
        if let Some(dir) = self.image_direction {
            match &self.image_direction_ref {
                Some(dir_ref) => lines.push(format!("Img dir: {dir:.2} {dir_ref}")),
                None => lines.push(format!("Img dir: {dir:.2}")),
            }
        }
        if let Some(timestamp) = &self.timestamp {
            lines.push(format!("Timestamp: {timestamp}"));
        }

        lines.extend(
            self.other_fields
                .iter()
                .map(|(name, value)| format!("{name}: {value}")),
        );

        lines
    }
}

/// Entries not yet taken
struct Fields<'a> {
    entries: Vec<Option<&'a (String, RawValue)>>,
}

impl<'a> Fields<'a> {
    fn new(entries: &'a [(String, RawValue)]) -> Self {
        Self {
            entries: entries.iter().map(Some).collect(),
        }
    }

    /// Decode and remove an entry
    ///
    /// The entry stays in place if decoding fails.
    fn take<T>(
        &mut self,
        name: &str,
        decode: impl FnOnce(&RawValue) -> Result<T, DecodeError>,
    ) -> Option<T> {
        let slot = self
            .entries
            .iter_mut()
            .find(|x| x.is_some_and(|(n, _)| n == name))?;
        let (_, value) = (*slot)?;

        let decoded = decode(value).ok()?;
        *slot = None;
        Some(decoded)
    }

    fn remaining(self) -> Vec<(String, RawValue)> {
        self.entries.into_iter().flatten().cloned().collect()
    }
}

fn degrees(value: &RawValue) -> Result<f64, DecodeError> {
    match value.as_rationals() {
        Some(&[deg, min, sec]) => Ok(dms_to_degrees(deg, min, sec)?),
        _ => Err(DecodeError::malformed("three rationals", value)),
    }
}

fn rational(value: &RawValue) -> Result<Rational, DecodeError> {
    value
        .as_rational()
        .ok_or_else(|| DecodeError::malformed("a rational", value))
}

fn text(value: &RawValue) -> Result<&str, DecodeError> {
    value
        .as_text()
        .ok_or_else(|| DecodeError::malformed("text", value))
}

fn lat_ref(value: &str) -> Result<LatRef, DecodeError> {
    LatRef::try_from(value).map_err(|_| DecodeError::MalformedValue {
        expected: "N or S",
        found: value.to_string(),
    })
}

fn lon_ref(value: &str) -> Result<LonRef, DecodeError> {
    LonRef::try_from(value).map_err(|_| DecodeError::MalformedValue {
        expected: "E or W",
        found: value.to_string(),
    })
}

/// Hours and minutes are truncated, seconds shown with two decimals
fn timestamp(value: &RawValue) -> Result<String, DecodeError> {
    let Some(&[h, m, s]) = value.as_rationals() else {
        return Err(DecodeError::malformed("three rationals", value));
    };

    let [h, m, s] = [h, m, s].map(|x| x.to_f64());
    let (h, m, s): (f64, f64, f64) = (h?, m?, s?);

    Ok(format!("{}:{}:{s:.2}", h.trunc(), m.trunc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(num: i64, denom: i64) -> Rational {
        Rational::new(num, denom)
    }

    fn entry(name: &str, value: RawValue) -> (String, RawValue) {
        (name.to_string(), value)
    }

    fn dms(d: i64, m: i64, s: i64) -> RawValue {
        RawValue::Rationals(vec![r(d, 1), r(m, 1), r(s, 1)])
    }

    #[test]
    fn hemispheres() {
        let fix = decode(&[
            entry("GPSLatitudeRef", RawValue::Text("S".into())),
            entry("GPSLatitude", dms(40, 26, 46)),
            entry("GPSLongitudeRef", RawValue::Text("E".into())),
            entry("GPSLongitude", dms(79, 58, 56)),
        ]);

        assert!((fix.latitude.unwrap() + 40.446111).abs() < 1e-5);
        assert!((fix.longitude.unwrap() - 79.982222).abs() < 1e-5);
        assert!(fix.other_fields.is_empty());
    }

    #[test]
    fn refs_are_independent() {
        let fix = decode(&[
            entry("GPSLatitude", dms(10, 0, 0)),
            entry("GPSLatitudeRef", RawValue::Text("N".into())),
            entry("GPSLongitude", dms(20, 0, 0)),
            entry("GPSLongitudeRef", RawValue::Text("W".into())),
        ]);

        assert_eq!(fix.latitude, Some(10.));
        assert_eq!(fix.longitude, Some(-20.));

        let fix = decode(&[entry("GPSLatitude", dms(10, 0, 0))]);
        assert_eq!(fix.latitude, Some(10.));
    }

    #[test]
    fn direction_and_timestamp() {
        let fix = decode(&[
            entry("GPSImgDirectionRef", RawValue::Text("T".into())),
            entry("GPSImgDirection", RawValue::Rational(r(27_150, 100))),
            entry(
                "GPSTimeStamp",
                RawValue::Rationals(vec![r(14, 1), r(7, 1), r(3_456, 100)]),
            ),
        ]);

        assert_eq!(fix.image_direction, Some(271.5));
        assert_eq!(fix.image_direction_ref.as_deref(), Some("T"));
        assert_eq!(fix.timestamp.as_deref(), Some("14:7:34.56"));
        assert_eq!(
            fix.annotations(),
            ["Img dir: 271.50 T", "Timestamp: 14:7:34.56"]
        );
    }

    #[test]
    fn direction_ref_without_direction() {
        let fix = decode(&[entry("GPSImgDirectionRef", RawValue::Text("T".into()))]);

        assert_eq!(fix.image_direction, None);
        assert_eq!(fix.image_direction_ref.as_deref(), Some("T"));
        assert!(fix.other_fields.is_empty());
        assert!(fix.annotations().is_empty());
    }

    #[test]
    fn south_ref_on_negative_latitude() {
        let fix = decode(&[
            entry("GPSLatitude", dms(-10, 0, 0)),
            entry("GPSLatitudeRef", RawValue::Text("S".into())),
        ]);

        assert_eq!(fix.latitude, Some(10.));
        assert!(fix.other_fields.is_empty());
    }

    #[test]
    fn other_fields_in_order() {
        let fix = decode(&[
            entry("GPSVersionID", RawValue::Integers(vec![2, 2, 0, 0])),
            entry("GPSLatitude", dms(1, 30, 0)),
            entry("GPSMapDatum", RawValue::Text("WGS-84".into())),
            // Without a longitude the reference is not used
            entry("GPSLongitudeRef", RawValue::Text("W".into())),
        ]);

        assert_eq!(
            fix.annotations(),
            [
                "Latitude: 1.50000000",
                "GPSVersionID: 2 2 0 0",
                "GPSMapDatum: WGS-84",
                "GPSLongitudeRef: W",
            ]
        );
    }

    #[test]
    fn malformed_fields_kept() {
        let fix = decode(&[
            entry("GPSLatitude", RawValue::Rationals(vec![r(1, 1), r(2, 1)])),
            entry("GPSLongitude", RawValue::Rationals(vec![r(1, 0), r(0, 1), r(0, 1)])),
            entry("GPSTimeStamp", RawValue::Text("noon".into())),
        ]);

        assert_eq!(fix.latitude, None);
        assert_eq!(fix.longitude, None);
        assert_eq!(fix.timestamp, None);
        assert_eq!(fix.other_fields.len(), 3);
        assert!(fix.location().is_none());
    }

    #[test]
    fn empty() {
        let fix = decode(&[]);
        assert!(fix.is_empty());
        assert!(fix.annotations().is_empty());
    }

    #[test]
    fn sub_ifd() {
        let tags = vec![
            RawTag::new(Tag::ORIENTATION, RawValue::Integer(1)),
            RawTag::new(
                Tag::GPS_INFO_IFD_POINTER,
                RawValue::Directory(vec![entry("GPSAltitudeRef", RawValue::Integer(0))]),
            ),
        ];

        assert_eq!(extract_gps_sub_ifd(&tags).map(<[_]>::len), Some(1));
        assert!(extract_gps_sub_ifd(&tags[..1]).is_none());
    }
}
