use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;
use crate::export::GalleryOptions;
use crate::generator::GeneratorConfig;
use crate::geometry::BoundingBox;
use crate::shapes::Shape;

/// Returns the path to the settings file: `~/.config/drawing-rs/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("drawing-rs");
    path.push("settings.json");
    path
}

/// Errors from reading or writing a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Layout
    pub cell: BoundingBox,
    pub columns: usize,
    pub padding: f64,

    // Stroke
    pub line_width: f64,

    // Color (stored as u8 triples)
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,

    // Generation
    pub generator: GeneratorConfig,

    // Shapes to draw, in order
    pub shapes: Vec<Shape>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            cell: BoundingBox::square(300.0),
            columns: 4,
            padding: 20.0,

            line_width: 2.0,

            color_r: 30,
            color_g: 90,
            color_b: 220,
            background_r: 255,
            background_g: 255,
            background_b: 255,

            generator: GeneratorConfig::default(),

            shapes: Shape::gallery(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::IoError(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Err(e) = self.save_to(&path) {
            log::warn!("Failed to write settings: {}", e);
        }
    }

    /// Write settings to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Layout and colors for the gallery export
    pub fn gallery_options(&self) -> GalleryOptions {
        GalleryOptions {
            cell: self.cell,
            columns: self.columns.max(1),
            padding: self.padding,
            line_width: self.line_width,
            stroke: Rgb::new(self.color_r, self.color_g, self.color_b),
            background: Rgb::new(self.background_r, self.background_g, self.background_b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Flower;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.columns = 2;
        settings.shapes = vec![Shape::from(Flower::new(10.0, 40.0))];
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "columns": 3 }"#).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded.columns, 3);
        assert_eq!(loaded.shapes, Shape::gallery());
        assert_eq!(loaded.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            AppSettings::load_from(&missing),
            Err(SettingsError::IoError(_))
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            AppSettings::load_from(&broken),
            Err(SettingsError::ParseError(_))
        ));
    }

    #[test]
    fn test_gallery_options_never_zero_columns() {
        let settings = AppSettings {
            columns: 0,
            ..AppSettings::default()
        };
        assert_eq!(settings.gallery_options().columns, 1);
    }
}
