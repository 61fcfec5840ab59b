use tagscope::report::{build_report, render_text};
use tagscope::*;

fn raw_tags() -> Vec<RawTag> {
    vec![
        RawTag::new(Tag::MAKER_NOTE, RawValue::Bytes(vec![0x01, 0x02, 0x41])),
        RawTag::new(271_u16, RawValue::Text("Canon".into())),
        RawTag::new(Tag::ORIENTATION, RawValue::Integer(1)),
        RawTag::new(
            Tag::GPS_INFO_IFD_POINTER,
            RawValue::Directory(vec![
                ("GPSLatitudeRef".into(), RawValue::Text("N".into())),
                (
                    "GPSLatitude".into(),
                    RawValue::Rationals(vec![
                        Rational::new(52, 1),
                        Rational::new(30, 1),
                        Rational::new(0, 1),
                    ]),
                ),
                ("GPSLongitudeRef".into(), RawValue::Text("E".into())),
                (
                    "GPSLongitude".into(),
                    RawValue::Rationals(vec![
                        Rational::new(13, 1),
                        Rational::new(15, 1),
                        Rational::new(0, 1),
                    ]),
                ),
            ]),
        ),
    ]
}

#[test]
fn sorted_with_gps() {
    let report = build_report(&raw_tags(), &TagInterpreter::new());

    assert_eq!(report.count(), 4);
    let ids = report.tags.iter().map(|x| x.tag.0).collect::<Vec<_>>();
    assert_eq!(ids, [271, 274, 34853, 37500]);

    let gps = report.gps.as_ref().unwrap();
    assert_eq!(gps.latitude, Some(52.5));
    assert_eq!(gps.longitude, Some(13.25));
    assert!(report.location().is_some());
    assert!(report.enrichment.is_empty());
}

#[test]
fn text() {
    let report = build_report(&raw_tags(), &TagInterpreter::new());
    let text = render_text(&report, "photo.jpg");

    assert!(text.starts_with("\nList of EXIF tags for \"photo.jpg\":\n\n271\tMake: Canon\n274\tOrientation: 1\n\tThe 0th row"));
    assert!(text.contains("34853\tGPSInfo: \n\tLatitude: 52.50000000\n\tLongitude: 13.25000000\n"));
    assert!(text.contains("\nMaker note:\n\n37500\tMakerNote: \n\t0000   01 02 41"));
    assert!(text.contains("Location: 52°30'00\"N 13°15'00\"E (geo:52.500000,13.250000)"));
    assert!(text.ends_with("\nFound 4 tags.\n\n"));

    // Maker note is only listed in its own section
    assert_eq!(text.matches("37500\t").count(), 1);
}

#[test]
fn empty_report_shell() {
    let report = build_report(&[], &TagInterpreter::new());

    assert_eq!(report.count(), 0);
    assert!(report.gps.is_none());
    assert_eq!(
        render_text(&report, "empty.jpg"),
        "\nList of EXIF tags for \"empty.jpg\":\n\n\nFound 0 tags.\n\n"
    );
}

#[test]
fn enrichment_rendered() {
    let mut report = build_report(&raw_tags(), &TagInterpreter::new());
    report.enrichment = enrich::enrich(
        report.gps.as_ref().unwrap(),
        &enrich::NoGeocoder,
        &enrich::OsmTileIndex,
        &enrich::EnrichmentRequest::default(),
    );

    let text = render_text(&report, "photo.jpg");
    assert_eq!(report.enrichment.maps.len(), 3);
    assert!(text.contains("Map at zoom level 10: https://tile.openstreetmap.org/10/"));
    assert!(!text.contains("shot in"));
}

#[test]
fn missing_exif() {
    assert!(matches!(
        extract_raw_tags(b"GIF89a"),
        Err(ExtractionError::NoExifData(MissingExif::NotJpeg(_)))
    ));

    let jpeg_without_exif = [0xFF, 0xD8, 0xFF, 0xFE, 0x00, 0x04, b'h', b'i', 0xFF, 0xD9];
    assert!(matches!(
        extract_raw_tags(&jpeg_without_exif),
        Err(ExtractionError::NoExifData(MissingExif::NoExifSegment))
    ));

    let mut broken_exif = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x0C];
    broken_exif.extend_from_slice(b"Exif\0\0XXXX");
    broken_exif.extend_from_slice(&[0xFF, 0xD9]);
    assert!(matches!(
        extract_raw_tags(&broken_exif),
        Err(ExtractionError::NoExifData(MissingExif::InvalidExif(_)))
    ));
}
