//! Facade crate for the zone map.
//! Re-exports domain/kernel primitives and the feature slices, and provides [`MapView`], the
//! context object that ties reference data, display mode and rendering together.
//! Keep this crate thin: it composes the slices, the lookup rules live in `plzmap-zones`.
//!
//! ## Usage
//! - Build a [`MapView`] from a [`DataSource`](zones::DataSource) and a feature collection, or
//!   with [`MapView::open`] from the configured files.
//! - `load().await` once, then `render` / `set_mode` against any
//!   [`RenderSurface`](render::RenderSurface).

mod error;
mod view;

pub use crate::error::{MapError, MapErrorExt};
pub use crate::view::MapView;
pub use plzmap_domain as domain;
pub use plzmap_kernel as kernel;

pub mod features {
    pub use plzmap_render as render;
    pub use plzmap_zones as zones;
}

pub use features::{render, zones};
