//! # Render
//!
//! Drives a drawing surface from resolved zone attributes.
//!
//! [`FeatureCollection`] holds the GeoJSON postal code areas, [`RenderDriver`] resolves each area
//! through a [`ReferenceData`](plzmap_zones::ReferenceData) snapshot and hands fill colours,
//! labels, popups and the legend to a [`RenderSurface`]. [`RecordingSurface`] keeps the results
//! in memory; [`SvgSurface`] turns them into a standalone SVG document.

mod driver;
mod error;
mod extract;
mod geojson;
mod surface;
mod svg;

pub use crate::driver::{FeatureResolution, RenderDriver, RenderReport};
pub use crate::error::{RenderError, RenderErrorExt};
pub use crate::geojson::{AreaFeature, FeatureCollection, FeatureKey, Geometry, Polygon, Position, Ring};
pub use crate::surface::{RecordingSurface, RenderSurface, SurfaceStyle};
pub use crate::svg::SvgSurface;
