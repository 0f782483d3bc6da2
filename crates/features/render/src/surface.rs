use crate::geojson::FeatureKey;
use plzmap_domain::config::Stroke;
use plzmap_domain::{Color, Legend};
use std::collections::BTreeMap;

/// Paint applied to one area.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceStyle {
    pub fill_color: Color,
    pub stroke: Stroke,
    /// Permanent label; `None` for unresolved areas.
    pub label: Option<String>,
}

/// Whatever draws the map: a map widget, an SVG document, a test double.
///
/// The driver calls [`RenderSurface::apply_style`] and [`RenderSurface::bind_popup`] once per
/// feature and pass, then [`RenderSurface::show_legend`] once.
pub trait RenderSurface {
    fn apply_style(&mut self, feature: FeatureKey, style: &SurfaceStyle);

    /// `None` removes a popup bound in an earlier pass.
    fn bind_popup(&mut self, feature: FeatureKey, text: Option<&str>);

    /// Replaces the legend of the previous pass.
    fn show_legend(&mut self, legend: &Legend);

    /// Info box contents for the hovered area.
    fn show_info(&mut self, text: &str);

    /// Outline override for hover feedback.
    fn highlight(&mut self, feature: FeatureKey, stroke: &Stroke);
}

/// Keeps the latest state per feature.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    styles: BTreeMap<FeatureKey, SurfaceStyle>,
    popups: BTreeMap<FeatureKey, String>,
    highlights: BTreeMap<FeatureKey, Stroke>,
    legend: Option<Legend>,
    info: Option<String>,
    style_calls: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn style(&self, feature: FeatureKey) -> Option<&SurfaceStyle> {
        self.styles.get(&feature)
    }

    #[must_use]
    pub fn popup(&self, feature: FeatureKey) -> Option<&str> {
        self.popups.get(&feature).map(String::as_str)
    }

    #[must_use]
    pub fn highlight_of(&self, feature: FeatureKey) -> Option<&Stroke> {
        self.highlights.get(&feature)
    }

    #[must_use]
    pub const fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    #[must_use]
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Total `apply_style` calls across all passes.
    #[must_use]
    pub const fn style_calls(&self) -> usize {
        self.style_calls
    }
}

impl RenderSurface for RecordingSurface {
    fn apply_style(&mut self, feature: FeatureKey, style: &SurfaceStyle) {
        self.style_calls += 1;
        self.highlights.remove(&feature);
        self.styles.insert(feature, style.clone());
    }

    fn bind_popup(&mut self, feature: FeatureKey, text: Option<&str>) {
        match text {
            Some(text) => self.popups.insert(feature, text.to_owned()),
            None => self.popups.remove(&feature),
        };
    }

    fn show_legend(&mut self, legend: &Legend) {
        self.legend = Some(legend.clone());
    }

    fn show_info(&mut self, text: &str) {
        self.info = Some(text.to_owned());
    }

    fn highlight(&mut self, feature: FeatureKey, stroke: &Stroke) {
        self.highlights.insert(feature, stroke.clone());
    }
}
