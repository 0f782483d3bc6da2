#![allow(dead_code)]

use plzmap_zones::{Document, MemorySource};

pub const PLZ_TO_ZONE: &str = r#"{ "2020": "A", "2000": "B", "3100": "C" }"#;

pub const ZONES: &str = r##"{
    "zones": {
        "A": { "name": "Nord", "color": "#ff0000", "gebiet": "G1" },
        "B": { "name": "Süd", "color": "#0000ff", "gebiet": "G9" }
    },
    "gebiet": {
        "G1": { "name": "Nord-Ost", "color": "#00ff00" },
        "G2": { "name": "West", "color": "#ffff00" }
    }
}"##;

pub fn source() -> MemorySource {
    MemorySource::new().with(Document::PlzToZone, PLZ_TO_ZONE).with(Document::Zones, ZONES)
}
