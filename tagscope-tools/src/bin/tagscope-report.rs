use tagscope::enrich::{enrich, EnrichmentRequest, NoGeocoder, OsmTileIndex};
use tagscope::report::{build_report, render_text};
use tagscope::TagInterpreter;
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let mut path = None;
    let mut json = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => path = Some(arg),
        }
    }

    let Some(path) = path else {
        usage();
        std::process::exit(1);
    };

    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Unable to read \"{path}\": {err}");
            std::process::exit(1);
        }
    };

    let raw_tags = match tagscope::extract_raw_tags(&data) {
        Ok(raw_tags) => raw_tags,
        Err(err) => {
            eprintln!("Unable to init data file: {err}");
            std::process::exit(1);
        }
    };

    tracing::debug!("Extracted {} raw tags", raw_tags.len());

    let interpreter = TagInterpreter::new();
    let mut report = build_report(&raw_tags, &interpreter);

    if let Some(gps) = &report.gps {
        report.enrichment = enrich(
            gps,
            &NoGeocoder,
            &OsmTileIndex,
            &EnrichmentRequest::default(),
        );
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Unable to serialize report: {err}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_text(&report, &path));
    }
}

fn usage() {
    eprintln!("Usage: tagscope-report [--json] <file.jpg>");
    eprintln!();
    eprintln!("Lists the EXIF tags of a JPEG image with their interpretation.");
    eprintln!("Log output is controlled via RUST_LOG.");
}
