mod utils;

use tagscope_common::exif::Tag;
use tagscope_common::value::{Rational, RawTag, RawValue};
use tagscope_exif::error::Error;
use tagscope_exif::internal::*;
use tagscope_exif::Exif;
use utils::Tiff;

fn sample(big_endian: bool) -> Vec<u8> {
    let mut t = Tiff::new(big_endian);

    let interop = t.ifd(vec![t.ascii(0x1, "R98"), t.undefined(0x2, b"0100")]);
    let exif = t.ifd(vec![
        t.rational(0x829A, &[(1, 250)]),
        t.short(0x8822, &[2]),
        t.undefined(0x9101, &[1, 2, 3, 0]),
        t.srational(0x9204, &[(-1, 3)]),
        t.undefined(0x9286, b"ASCII\0\0\0Hello"),
        t.pointer(0xA005, interop),
    ]);
    let gps = t.ifd(vec![
        t.bytes(0x0, &[2, 3, 0, 0]),
        t.ascii(0x1, "N"),
        t.rational(0x2, &[(40, 1), (26, 1), (4600, 100)]),
        t.ascii(0x3, "W"),
        t.rational(0x4, &[(79, 1), (58, 1), (56, 1)]),
        t.short(0x7FFF, &[1]),
    ]);
    let thumbnail = t.ifd(vec![t.short(0x0112, &[3])]);

    t.primary(vec![
        t.ascii(0x010F, "Canon"),
        t.short(0x0112, &[6]),
        t.short(0x0128, &[2]),
        t.pointer(0x8769, exif),
        t.pointer(0x8825, gps),
    ]);
    t.next = Some(thumbnail);

    t.build()
}

fn tag(raw_tags: &[RawTag], tag: u16) -> &RawValue {
    &raw_tags.iter().find(|x| x.tag == Tag(tag)).unwrap().value
}

#[test]
fn both_byte_orders() {
    let le = Exif::new(sample(false)).unwrap().raw_tags();
    let be = Exif::new(sample(true)).unwrap().raw_tags();

    assert_eq!(le, be);
}

#[test]
fn raw_tags() {
    let tags = Exif::new(sample(true)).unwrap().raw_tags();

    let ids = tags.iter().map(|x| x.tag.0).collect::<Vec<_>>();
    assert_eq!(
        ids,
        [
            0x010F_u16, 0x0112, 0x0128, 0x829A, 0x8769, 0x8822, 0x8825, 0x9101, 0x9204, 0x9286,
            0xA005
        ]
    );

    assert_eq!(tag(&tags, 0x010F), &RawValue::Text("Canon".into()));
    // Thumbnail orientation does not replace the primary one
    assert_eq!(tag(&tags, 0x0112), &RawValue::Integer(6));
    assert_eq!(tag(&tags, 0x829A), &RawValue::Rational(Rational::new(1, 250)));
    assert_eq!(tag(&tags, 0x9101), &RawValue::Bytes(vec![1, 2, 3, 0]));
    assert_eq!(tag(&tags, 0x9204), &RawValue::Rational(Rational::new(-1, 3)));
    assert_eq!(
        tag(&tags, 0x9286),
        &RawValue::Bytes(b"ASCII\0\0\0Hello".to_vec())
    );
}

#[test]
fn gps_directory() {
    let tags = Exif::new(sample(false)).unwrap().raw_tags();

    let RawValue::Directory(gps) = tag(&tags, 0x8825) else {
        panic!("GPS is not a directory");
    };

    let names = gps.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "GPSVersionID",
            "GPSLatitudeRef",
            "GPSLatitude",
            "GPSLongitudeRef",
            "GPSLongitude",
            "32767"
        ]
    );

    assert_eq!(gps[0].1, RawValue::Integers(vec![2, 3, 0, 0]));
    assert_eq!(gps[1].1, RawValue::Text("N".into()));
    assert_eq!(
        gps[2].1,
        RawValue::Rationals(vec![
            Rational::new(40, 1),
            Rational::new(26, 1),
            Rational::new(4600, 100)
        ])
    );
}

#[test]
fn interop_directory() {
    let tags = Exif::new(sample(true)).unwrap().raw_tags();

    assert_eq!(
        tag(&tags, 0xA005),
        &RawValue::Directory(vec![
            ("InteroperabilityIndex".into(), RawValue::Text("R98".into())),
            (
                "InteroperabilityVersion".into(),
                RawValue::Bytes(b"0100".to_vec())
            ),
        ])
    );
}

#[test]
fn ifd_locations() {
    let mut exif = ExifRaw::new(sample(false));
    exif.decode().unwrap();

    for ifd in [
        Ifd::Primary,
        Ifd::Thumbnail,
        Ifd::Exif,
        Ifd::Gps,
        Ifd::Interoperability,
    ] {
        assert!(exif.ifd_locations.contains_key(&ifd), "{ifd:?} missing");
    }

    let entry = exif
        .lookup_entry(TagIfd::new(Tag::ORIENTATION, Ifd::Thumbnail))
        .unwrap();
    assert_eq!(exif.value(&entry).unwrap(), RawValue::Integer(3));

    let make = exif
        .lookup_entry(TagIfd::new(Tag(0x010F), Ifd::Primary))
        .unwrap();
    assert_eq!(exif.entry_data(&make).unwrap(), b"Canon\0".to_vec());
    assert!(exif
        .lookup_entry(TagIfd::new(Tag(0x010F), Ifd::Gps))
        .is_none());

    let dump = exif.debug_dump();
    assert!(dump.contains("Orientation Short(1)"));
    assert!(dump.contains("Canon"));
}

#[test]
fn signed_values() {
    let mut t = Tiff::new(true);
    t.primary(vec![
        t.sshort(0x9999, &[-2, 5]),
        t.raw_entry(0x999A, 6, 2, vec![0xFF, 0x01]),
        t.raw_entry(0x999B, 9, 1, (-7_i32).to_be_bytes().to_vec()),
    ]);

    let tags = Exif::new(t.build()).unwrap().raw_tags();
    assert_eq!(tag(&tags, 0x9999), &RawValue::Integers(vec![-2, 5]));
    assert_eq!(tag(&tags, 0x999A), &RawValue::Integers(vec![-1, 1]));
    assert_eq!(tag(&tags, 0x999B), &RawValue::Integer(-7));
}

#[test]
fn broken_values_skipped() {
    let mut t = Tiff::new(false);
    t.primary(vec![
        // Points far outside of the data
        t.raw_entry(0x010E, 2, 100, 0xFFFF_u32.to_le_bytes().to_vec()),
        t.short(0x0112, &[1]),
    ]);

    let tags = Exif::new(t.build()).unwrap().raw_tags();
    assert_eq!(tags, vec![RawTag::new(Tag::ORIENTATION, RawValue::Integer(1))]);
}

#[test]
fn broken_sub_ifd_silenced() {
    let mut t = Tiff::new(false);
    t.primary(vec![
        t.short(0x0112, &[8]),
        t.raw_entry(0x8825, 4, 1, 0xFFFF_u32.to_le_bytes().to_vec()),
    ]);

    let tags = Exif::new(t.build()).unwrap().raw_tags();
    assert_eq!(
        tags,
        vec![
            RawTag::new(Tag::ORIENTATION, RawValue::Integer(8)),
            RawTag::new(Tag::GPS_INFO_IFD_POINTER, RawValue::Directory(Vec::new())),
        ]
    );
}

#[test]
fn header_errors() {
    assert!(matches!(
        Exif::new(b"XX*\0".to_vec()),
        Err(Error::UnknownByteOrder(_))
    ));
    assert!(matches!(
        Exif::new(b"II\x2B\0\x08\0\0\0".to_vec()),
        Err(Error::MagicBytesWrong(43))
    ));
    assert!(matches!(Exif::new(b"M".to_vec()), Err(Error::ByteOrderEof)));
    assert!(Exif::new(b"II*\0\x08\0\0\0".to_vec()).is_err());
}
