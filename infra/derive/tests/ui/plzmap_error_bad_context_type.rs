use plzmap_derive::plzmap_error;

#[plzmap_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        context: Option<String>,
    },
}

fn main() {}
