//! # Zones
//!
//! Classification of postal codes into delivery zones and Liefergebiete.
//!
//! * [`ReferenceStore`] fetches the PLZ→Zone and zone/Gebiet documents from a [`DataSource`]
//!   and publishes them as immutable [`ReferenceData`] snapshots.
//! * [`ReferenceData::resolve`] maps a postal code to its fill colour and label under the
//!   active [`DisplayMode`](plzmap_domain::DisplayMode).
//! * [`ReferenceData::legend`] and [`ReferenceData::describe_hover`] produce the legend and the
//!   info box text.
//! * [`ModeController`] owns the active display mode.
//!
//! ```rust
//! # use plzmap_zones::{Document, MemorySource, ReferenceStore};
//! # use plzmap_domain::{DisplayMode, PostalCode};
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let source = MemorySource::new()
//!     .with(Document::PlzToZone, r#"{"2020": "A"}"#)
//!     .with(Document::Zones, r##"{
//!         "zones": { "A": { "name": "Nord", "color": "#ff0000", "gebiet": "G1" } },
//!         "gebiet": { "G1": { "name": "Nord-Ost", "color": "#00ff00" } }
//!     }"##);
//!
//! let store = ReferenceStore::new(source);
//! store.load().await?;
//!
//! let resolved = store.snapshot()?.resolve(&PostalCode::from("2020"), DisplayMode::Zone);
//! assert_eq!(resolved.label_text(), Some("Zone A: Nord"));
//! # Ok(())
//! # }
//! ```

mod error;
mod hover;
mod legend;
mod mode;
mod resolver;
mod source;
mod store;
mod tables;

pub use crate::error::{DataLoadError, DataLoadErrorExt, ZonesError, ZonesErrorExt};
pub use crate::hover::{NO_ZONE_INFO, UNKNOWN_GEBIET};
pub use crate::legend::{GEBIET_LEGEND_TITLE, ZONE_LEGEND_TITLE};
pub use crate::mode::ModeController;
pub use crate::source::{DataSource, Document, FsSource, MemorySource};
pub use crate::store::ReferenceStore;
pub use crate::tables::{
    CollapsedKey, ConsistencyReport, GebietTable, PlzTable, ReferenceData, ZoneDocument, ZoneTable,
    parse_plz_table, parse_zone_document,
};
