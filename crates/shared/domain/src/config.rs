use crate::ids::Color;
use crate::mode::DisplayMode;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level zone map configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfigInner {
    pub mode: DisplayMode,
    pub data: DataConfig,
    pub style: StyleConfig,
    pub features: FeatureConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(flatten, default)]
    inner: Arc<MapConfigInner>,
}

impl Deref for MapConfig {
    type Target = MapConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for MapConfig {
    fn deref_mut(&mut self) -> &mut MapConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the reference tables and the area geometry live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub root: PathBuf,
    pub plz_to_zone: String,
    pub zones: String,
    pub areas: String,
}

/// Colours and strokes applied by the render driver.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Neutral fill for areas whose postal code does not resolve.
    pub fallback_color: Color,
    pub stroke: Stroke,
    pub hover_stroke: Stroke,
    /// Width of the SVG viewport in pixels; the height follows the data's aspect ratio.
    pub svg_width: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// How postal codes are pulled out of geographic features.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub postal_code_property: String,
    /// Prefix stripped from feature ids when the property is missing (`plz-1010`).
    pub id_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub filter: Option<String>,
}

// --- Default ---

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            plz_to_zone: "nos_plz_to_zone.json".to_owned(),
            zones: "nos_zones.json".to_owned(),
            areas: "plz_areas.geojson".to_owned(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fallback_color: Color::new("#ffffff"),
            stroke: Stroke { color: Color::new("#ccc"), width: 0.5 },
            hover_stroke: Stroke { color: Color::new("#000"), width: 2.0 },
            svg_width: 960,
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self { color: Color::new("#ccc"), width: 0.5 }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { postal_code_property: "plz".to_owned(), id_prefix: "plz-".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, directory: None, json: false, filter: None }
    }
}
