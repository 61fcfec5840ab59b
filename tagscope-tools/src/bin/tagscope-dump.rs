use tagscope_exif::internal::ExifRaw;
use tagscope_jpeg::Jpeg;
use tracing_subscriber::prelude::*;

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: tagscope-dump <file.jpg>");
        std::process::exit(1);
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let image_data = std::fs::read(path).unwrap();
    let image = Jpeg::new(&image_data).unwrap();

    for (n, exif_data) in image.exif_data().enumerate() {
        println!("Exif segment {n}");

        let mut decoder = ExifRaw::new(exif_data.to_vec());
        if let Err(err) = decoder.decode() {
            println!("Failed to decode: {err}");
        }

        println!("{}", decoder.debug_dump());
    }
}
