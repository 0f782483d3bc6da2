use crate::ids::{Color, GebietId};
use crate::mode::DisplayMode;
use serde::{Deserialize, Serialize};

/// One row of the zone table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAttributes {
    pub name: String,
    pub color: Color,
    pub gebiet: GebietId,
}

/// One row of the Gebiet table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GebietAttributes {
    pub name: String,
    pub color: Color,
}

/// Visual attributes of a successfully classified area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    pub fill_color: Color,
    pub label_text: String,
    pub popup_text: String,
}

/// Result of resolving a postal code under a display mode.
///
/// Computed per feature per render pass and never cached, so attributes from one mode cannot
/// leak into the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ResolvedAttributes {
    Styled(AreaStyle),
    /// Any lookup miss. Rendered with the neutral fallback fill, no label and no popup.
    NotFound,
}

impl ResolvedAttributes {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Styled(_))
    }

    #[must_use]
    pub const fn style(&self) -> Option<&AreaStyle> {
        match self {
            Self::Styled(style) => Some(style),
            Self::NotFound => None,
        }
    }

    /// Fill colour to paint, substituting `fallback` for unresolved areas.
    #[must_use]
    pub fn fill_or<'a>(&'a self, fallback: &'a Color) -> &'a Color {
        self.style().map_or(fallback, |s| &s.fill_color)
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.style().map(|s| s.label_text.as_str())
    }

    #[must_use]
    pub fn popup_text(&self) -> Option<&str> {
        self.style().map(|s| s.popup_text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Ordered legend for one display mode. Always covers the full reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub mode: DisplayMode,
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LegendEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Legend {
    type Item = &'a LegendEntry;
    type IntoIter = std::slice::Iter<'a, LegendEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
