use plzmap_render::RenderError;
use plzmap_zones::ZonesError;
use std::borrow::Cow;

#[plzmap_derive::plzmap_error]
pub enum MapError {
    #[error("{source}{}", format_context(.context))]
    Zones { source: ZonesError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Render { source: RenderError, context: Option<Cow<'static, str>> },

    #[error("Failed to read area features{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal map error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
