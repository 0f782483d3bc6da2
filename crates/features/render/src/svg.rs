//! Static SVG rendition of the map.
//!
//! Rings are projected equirectangularly (longitude scaled by the cosine of the mean latitude)
//! into a viewport of fixed width. The legend is stacked below the map.

use crate::geojson::{FeatureCollection, FeatureKey, Position};
use crate::surface::{RenderSurface, SurfaceStyle};
use htmlize::{escape_attribute, escape_text};
use plzmap_domain::Legend;
use plzmap_domain::config::Stroke;
use std::fmt;

const LEGEND_ROW: f64 = 22.0;
const LEGEND_SWATCH: f64 = 16.0;
const MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
struct Projection {
    min_lon: f64,
    max_lat: f64,
    x_scale: f64,
    y_scale: f64,
}

impl Projection {
    fn fit<'a>(positions: impl Iterator<Item = &'a Position>, width: f64) -> (Self, f64) {
        let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in positions {
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }
        if !min_lon.is_finite() {
            let empty = Self { min_lon: 0.0, max_lat: 0.0, x_scale: 1.0, y_scale: 1.0 };
            return (empty, 0.0);
        }

        let shrink = ((min_lat + max_lat) / 2.0).to_radians().cos().max(f64::EPSILON);
        let span = ((max_lon - min_lon) * shrink).max(max_lat - min_lat).max(f64::EPSILON);
        let scale = width / span;
        let projection = Self { min_lon, max_lat, x_scale: scale * shrink, y_scale: scale };

        (projection, (max_lat - min_lat) * scale)
    }

    fn project(self, p: Position) -> (f64, f64) {
        ((p.lon - self.min_lon) * self.x_scale, (self.max_lat - p.lat) * self.y_scale)
    }
}

#[derive(Debug, Clone, Default)]
struct Area {
    path: String,
    style: Option<SurfaceStyle>,
    popup: Option<String>,
    highlight: Option<Stroke>,
}

/// A [`RenderSurface`] that produces a standalone SVG document through its `Display` impl.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    map_height: f64,
    areas: Vec<Area>,
    legend: Option<Legend>,
    info: Option<String>,
}

impl SvgSurface {
    /// Projects every feature of `features` into a viewport `width` pixels wide.
    #[must_use]
    pub fn new(features: &FeatureCollection, width: u32) -> Self {
        let width = f64::from(width.max(1));
        let positions = features.iter().filter_map(|(_, f)| f.geometry.as_ref()).flat_map(|g| g.positions());
        let (projection, map_height) = Projection::fit(positions, width);

        let areas = features
            .iter()
            .map(|(_, feature)| {
                let mut path = String::new();
                for ring in feature.geometry.iter().flat_map(|g| g.polygons()).flatten() {
                    write_ring(&mut path, projection, ring);
                }
                Area { path, ..Area::default() }
            })
            .collect();

        Self { width, map_height, areas, legend: None, info: None }
    }

    fn height(&self) -> f64 {
        let rows = self.legend.as_ref().map_or(0, |l| l.len() + 1);
        #[allow(clippy::cast_precision_loss)]
        let legend_height = if rows == 0 { 0.0 } else { rows as f64 * LEGEND_ROW + MARGIN };
        self.map_height + legend_height
    }

    fn area_mut(&mut self, feature: FeatureKey) -> Option<&mut Area> {
        self.areas.get_mut(feature.0)
    }

    fn write_legend(&self, f: &mut fmt::Formatter<'_>, legend: &Legend) -> fmt::Result {
        let top = self.map_height + MARGIN;
        writeln!(f, r#"  <g class="legend" font-family="sans-serif" font-size="13">"#)?;
        writeln!(
            f,
            r#"    <text x="{MARGIN}" y="{:.1}" font-weight="bold">{}</text>"#,
            top + LEGEND_SWATCH,
            escape_text(legend.title.as_str())
        )?;
        for (row, entry) in legend.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let y = top + (row + 1) as f64 * LEGEND_ROW;
            writeln!(
                f,
                r##"    <rect x="{MARGIN}" y="{y:.1}" width="{LEGEND_SWATCH}" height="{LEGEND_SWATCH}" fill="{}" stroke="#999"/>"##,
                escape_attribute(entry.color.as_str())
            )?;
            writeln!(
                f,
                r#"    <text x="{:.1}" y="{:.1}">{}</text>"#,
                MARGIN + LEGEND_SWATCH + 6.0,
                y + LEGEND_SWATCH - 3.0,
                escape_text(entry.label.as_str())
            )?;
        }
        writeln!(f, "  </g>")
    }
}

fn write_ring(path: &mut String, projection: Projection, ring: &[Position]) {
    for (i, position) in ring.iter().enumerate() {
        let (x, y) = projection.project(*position);
        let command = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{command}{x:.2},{y:.2}"));
    }
    if !ring.is_empty() {
        path.push('Z');
    }
}

impl RenderSurface for SvgSurface {
    fn apply_style(&mut self, feature: FeatureKey, style: &SurfaceStyle) {
        if let Some(area) = self.area_mut(feature) {
            area.style = Some(style.clone());
            area.highlight = None;
        }
    }

    fn bind_popup(&mut self, feature: FeatureKey, text: Option<&str>) {
        if let Some(area) = self.area_mut(feature) {
            area.popup = text.map(str::to_owned);
        }
    }

    fn show_legend(&mut self, legend: &Legend) {
        self.legend = Some(legend.clone());
    }

    fn show_info(&mut self, text: &str) {
        self.info = Some(text.to_owned());
    }

    fn highlight(&mut self, feature: FeatureKey, stroke: &Stroke) {
        if let Some(area) = self.area_mut(feature) {
            area.highlight = Some(stroke.clone());
        }
    }
}

impl fmt::Display for SvgSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = (self.width, self.height());
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.2} {height:.2}">"#
        )?;
        if let Some(info) = &self.info {
            writeln!(f, "  <desc>{}</desc>", escape_text(info.as_str()))?;
        }

        writeln!(f, r#"  <g class="areas" fill-rule="evenodd">"#)?;
        for (index, area) in self.areas.iter().enumerate().filter(|(_, a)| !a.path.is_empty()) {
            let stroke = area.highlight.as_ref().or_else(|| area.style.as_ref().map(|s| &s.stroke));
            write!(f, r#"    <path id="area-{index}" d="{}""#, area.path)?;
            if let Some(style) = &area.style {
                write!(f, r#" fill="{}""#, escape_attribute(style.fill_color.as_str()))?;
            }
            if let Some(stroke) = stroke {
                write!(
                    f,
                    r#" stroke="{}" stroke-width="{}""#,
                    escape_attribute(stroke.color.as_str()),
                    stroke.width
                )?;
            }
            match &area.popup {
                Some(popup) => writeln!(f, "><title>{}</title></path>", escape_text(popup.as_str()))?,
                None => writeln!(f, "/>")?,
            }
        }
        writeln!(f, "  </g>")?;

        if let Some(legend) = &self.legend {
            self.write_legend(f, legend)?;
        }
        writeln!(f, "</svg>")
    }
}
