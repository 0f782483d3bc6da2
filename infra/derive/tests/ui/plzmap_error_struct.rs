use plzmap_derive::plzmap_error;

#[plzmap_error]
pub struct DemoError {
    message: String,
}

fn main() {}
