use crate::error::DataLoadError;
use std::borrow::Cow;

/// Errors of the zones slice as seen by callers of the store.
#[plzmap_derive::plzmap_error]
pub enum ZonesError {
    /// Resolution was requested before the first successful load.
    #[error("Reference data not loaded{}: {message}", format_context(.context))]
    NotLoaded { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Reference data load failed{}: {source}", format_context(.context))]
    Load { source: DataLoadError, context: Option<Cow<'static, str>> },
}
