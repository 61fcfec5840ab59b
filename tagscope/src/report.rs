//! Reports over all tags of an image

use std::fmt::Write;

use tagscope_common::exif::Tag;
use tagscope_common::geography::Location;
use tagscope_common::value::RawTag;

use crate::enrich::Enrichment;
use crate::gps::{self, GpsFix};
use crate::interpret::{DecodedTag, Diagnostics, TagInterpreter};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Ordered by tag
    pub tags: Vec<DecodedTag>,
    pub gps: Option<GpsFix>,
    pub enrichment: Enrichment,
}

impl Report {
    /// Number of tags in the report
    pub fn count(&self) -> usize {
        self.tags.len()
    }

    pub fn location(&self) -> Option<Location> {
        self.gps.as_ref()?.location()
    }

    pub fn maker_note(&self) -> Option<&DecodedTag> {
        self.tags.iter().find(|x| x.tag == Tag::MAKER_NOTE)
    }
}

/// Interpret all tags
///
/// Tags are sorted by their id. Enrichment is left empty.
pub fn build_report<D: Diagnostics>(raw_tags: &[RawTag], interpreter: &TagInterpreter<D>) -> Report {
    let mut tags = interpreter.interpret_all(raw_tags);
    tags.sort_by_key(|x| x.tag);

    let gps = gps::extract_gps_sub_ifd(raw_tags).map(gps::decode);

    Report {
        tags,
        gps,
        enrichment: Enrichment::default(),
    }
}

/// Console rendering of a report
///
/// The maker note is listed in a separate section at the end since its dump
/// tends to be long.
pub fn render_text(report: &Report, source_name: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nList of EXIF tags for \"{source_name}\":\n");

    for tag in report.tags.iter().filter(|x| x.tag != Tag::MAKER_NOTE) {
        let _ = writeln!(out, "{}", tag.to_string().trim_matches('\n'));
    }

    if let Some(maker_note) = report.maker_note() {
        out.push_str("\nMaker note:\n\n");
        let _ = writeln!(out, "{}", maker_note.to_string().trim_matches('\n'));
    }

    if let Some(location) = report.location() {
        let _ = writeln!(out, "\nLocation: {} ({})", location.iso_6709(), location.geo_uri());
    }

    if let Some(place) = &report.enrichment.place {
        let _ = writeln!(out, "The photo seems to have been shot in: \"{place}\"");
    }

    for map in &report.enrichment.maps {
        let _ = writeln!(out, "Map at zoom level {}: {}", map.tile.zoom, map.url);
    }

    let _ = writeln!(out, "\nFound {} tags.\n", report.count());

    out
}
