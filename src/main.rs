//! drawing-rs - render the shape gallery as an SVG document
//!
//! Usage: `drawing-rs [OUTPUT.svg]`
//!
//! Shapes, layout and colors come from the settings file
//! (`~/.config/drawing-rs/settings.json`), which is created with the
//! default gallery on first run. Without an output path the document
//! is written to stdout.

use std::path::PathBuf;

use drawing::export::{self, ExportError};
use drawing::settings::{self, AppSettings};
use drawing::PathGenerator;

fn main() -> Result<(), ExportError> {
    env_logger::init();
    log::info!("Starting drawing-rs");

    let settings = AppSettings::load();
    if !settings::settings_path().exists() {
        settings.save();
    }

    let output = std::env::args().nth(1).map(PathBuf::from);

    let generator = PathGenerator::new(settings.generator);
    let svg = export::gallery_svg(&settings.shapes, &generator, &settings.gallery_options());
    export::write_svg(&svg, output.as_deref())
}
