use std::borrow::Cow;

/// Failure to fetch, parse, or validate the reference tables.
///
/// A failed load never touches the tables already in the store.
#[plzmap_derive::plzmap_error]
pub enum DataLoadError {
    #[error("Failed to fetch reference document{}: {source}", format_context(.context))]
    Fetch { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed reference document{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Reference data rejected{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Another `load()` on the same store has not finished yet.
    #[error("Reference data load already in progress{}: {message}", format_context(.context))]
    LoadInProgress { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal load error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
