//! Error types of the zones slice. Each enum lives in its own module because
//! `plzmap_error` emits a module-private `format_context` helper.

mod load;
mod zones;

pub use load::{DataLoadError, DataLoadErrorExt};
pub use zones::{ZonesError, ZonesErrorExt};
