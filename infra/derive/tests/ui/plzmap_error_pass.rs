use plzmap_derive::plzmap_error;
use std::borrow::Cow;

#[plzmap_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("boom")).context("reading tables")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading tables): boom");

    let internal: DemoError = "broken".into();
    assert!(matches!(internal, DemoError::Internal { .. }));
}
