use plzmap_derive::plzmap_error;

#[plzmap_error]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
