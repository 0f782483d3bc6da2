//! The subset of GeoJSON the map draws: a `FeatureCollection` of polygon areas.

use crate::error::{RenderError, RenderErrorExt};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Index of a feature inside its [`FeatureCollection`]. Surfaces address features by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureKey(pub usize);

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// `[lon, lat]`. Extra coordinates such as altitude are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl TryFrom<Vec<f64>> for Position {
    type Error = String;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Ok(Self { lon: *lon, lat: *lat }),
            [_, _, ..] => Err("position coordinates must be finite".to_owned()),
            _ => Err(format!("position needs at least two coordinates, got {}", value.len())),
        }
    }
}

pub type Ring = Vec<Position>;
pub type Polygon = Vec<Ring>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Every polygon of the geometry, outer ring first.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Self::Polygon(polygon) => std::slice::from_ref(polygon),
            Self::MultiPolygon(polygons) => polygons,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.polygons().iter().flatten().flatten()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AreaFeature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl AreaFeature {
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(name).filter(|v| !v.is_null())
    }

    /// The feature id as text; numeric ids are printed as integers.
    #[must_use]
    pub fn id_text(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<AreaFeature>,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    features: Vec<AreaFeature>,
}

impl FeatureCollection {
    #[must_use]
    pub const fn new(features: Vec<AreaFeature>) -> Self {
        Self { features }
    }

    /// Parses a GeoJSON `FeatureCollection`.
    ///
    /// # Errors
    /// [`RenderError::Parse`] for invalid JSON or geometry types other than `Polygon` and
    /// `MultiPolygon`, [`RenderError::Unsupported`] if the document is not a feature collection.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RenderError> {
        let raw: RawCollection = serde_json::from_slice(bytes).context("area collection")?;
        if raw.kind != "FeatureCollection" {
            return Err(RenderError::Unsupported {
                message: format!("expected a FeatureCollection, found {}", raw.kind).into(),
                context: None,
            });
        }
        Ok(Self { features: raw.features })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: FeatureKey) -> Option<&AreaFeature> {
        self.features.get(key.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &AreaFeature)> {
        self.features.iter().enumerate().map(|(i, f)| (FeatureKey(i), f))
    }
}
