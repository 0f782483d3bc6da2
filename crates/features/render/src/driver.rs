use crate::geojson::{AreaFeature, FeatureCollection, FeatureKey};
use crate::surface::{RenderSurface, SurfaceStyle};
use plzmap_domain::config::{FeatureConfig, StyleConfig};
use plzmap_domain::{DisplayMode, PostalCode, ResolvedAttributes};
use plzmap_zones::{NO_ZONE_INFO, ReferenceData};
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of resolving one area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureResolution {
    /// Every postal code found on the feature, in document order.
    pub codes: Vec<PostalCode>,
    /// The code whose attributes were used.
    pub matched: Option<PostalCode>,
    pub attributes: ResolvedAttributes,
}

impl FeatureResolution {
    /// Popup text; areas covering several postal codes list all of them.
    #[must_use]
    pub fn popup_text(&self) -> Option<String> {
        let popup = self.attributes.popup_text()?;
        if self.codes.len() < 2 {
            return Some(popup.to_owned());
        }
        let codes: Vec<&str> = self.codes.iter().map(PostalCode::as_str).collect();
        Some(format!("{popup}\nPLZ: {}", codes.join(", ")))
    }
}

/// Counters of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub mode: DisplayMode,
    pub generation: u64,
    pub features: usize,
    pub styled: usize,
    /// Areas painted with the fallback colour, including those without any postal code.
    pub fallback: usize,
    pub without_postal_code: usize,
}

/// Applies resolved attributes to a [`RenderSurface`].
///
/// Stateless between passes: every call resolves every feature again against the snapshot it
/// is handed, so a mode switch or reload is just another [`RenderDriver::render`].
#[derive(Debug, Clone, Default)]
pub struct RenderDriver {
    style: StyleConfig,
    features: FeatureConfig,
}

impl RenderDriver {
    #[must_use]
    pub const fn new(style: StyleConfig, features: FeatureConfig) -> Self {
        Self { style, features }
    }

    #[must_use]
    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Resolves a feature by trying its postal codes in order; the first that resolves wins.
    #[must_use]
    pub fn resolve_feature(
        &self,
        data: &ReferenceData,
        mode: DisplayMode,
        key: FeatureKey,
        feature: &AreaFeature,
    ) -> FeatureResolution {
        let codes = feature.postal_codes(&self.features);
        let mut matched: Option<PostalCode> = None;
        let mut attributes = ResolvedAttributes::NotFound;

        for code in &codes {
            let resolved = data.resolve(code, mode);
            if !resolved.is_found() {
                continue;
            }
            match &matched {
                None => {
                    matched = Some(code.clone());
                    attributes = resolved;
                },
                Some(kept) if resolved != attributes => {
                    debug!(feature = %key, %kept, other = %code, %mode, "Postal codes of one area resolve differently");
                },
                Some(_) => {},
            }
        }

        FeatureResolution { codes, matched, attributes }
    }

    /// Full pass: styles and popups for every feature, then the legend for `mode`.
    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        data: &ReferenceData,
        mode: DisplayMode,
        features: &FeatureCollection,
        surface: &mut S,
    ) -> RenderReport {
        let mut report = RenderReport { mode, generation: data.generation(), ..RenderReport::default() };

        for (key, feature) in features.iter() {
            let resolution = self.resolve_feature(data, mode, key, feature);
            let style = SurfaceStyle {
                fill_color: resolution.attributes.fill_or(&self.style.fallback_color).clone(),
                stroke: self.style.stroke.clone(),
                label: resolution.attributes.label_text().map(str::to_owned),
            };
            surface.apply_style(key, &style);
            surface.bind_popup(key, resolution.popup_text().as_deref());

            report.features += 1;
            if resolution.attributes.is_found() {
                report.styled += 1;
            } else {
                report.fallback += 1;
                if resolution.codes.is_empty() {
                    report.without_postal_code += 1;
                }
            }
        }

        surface.show_legend(&data.legend(mode));

        info!(
            %mode,
            generation = report.generation,
            features = report.features,
            styled = report.styled,
            fallback = report.fallback,
            "Map rendered"
        );
        report
    }

    /// Hover feedback: bold outline and info box on enter, resting outline on leave.
    ///
    /// The info box describes the same postal code [`RenderDriver::render`] coloured the area
    /// with under `mode`. Areas styled with the fallback colour describe their first code with a
    /// known zone, or simply their first code.
    pub fn hover<S: RenderSurface + ?Sized>(
        &self,
        data: &ReferenceData,
        mode: DisplayMode,
        key: FeatureKey,
        feature: &AreaFeature,
        entering: bool,
        surface: &mut S,
    ) {
        if !entering {
            surface.highlight(key, &self.style.stroke);
            return;
        }

        surface.highlight(key, &self.style.hover_stroke);
        let resolution = self.resolve_feature(data, mode, key, feature);
        let text = resolution
            .matched
            .as_ref()
            .or_else(|| resolution.codes.iter().find(|code| data.resolve(code, DisplayMode::Zone).is_found()))
            .or_else(|| resolution.codes.first())
            .map_or_else(|| NO_ZONE_INFO.to_owned(), |code| data.describe_hover(code));
        surface.show_info(&text);
    }
}
