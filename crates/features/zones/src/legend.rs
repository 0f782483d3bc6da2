use crate::resolver::zone_label;
use crate::tables::ReferenceData;
use plzmap_domain::{DisplayMode, Legend, LegendEntry};

pub const ZONE_LEGEND_TITLE: &str = "Zonen";
pub const GEBIET_LEGEND_TITLE: &str = "Liefergebiete NOS";

impl ReferenceData {
    /// Builds the legend for `mode` from the full reference table, sorted by id.
    ///
    /// Unused zones and Gebiete still get an entry: the legend documents the classification,
    /// not what is currently visible.
    #[must_use]
    pub fn legend(&self, mode: DisplayMode) -> Legend {
        let (title, entries) = match mode {
            DisplayMode::Zone => (
                ZONE_LEGEND_TITLE,
                self.zones
                    .iter()
                    .map(|(id, zone)| LegendEntry { color: zone.color.clone(), label: zone_label(id, zone) })
                    .collect(),
            ),
            DisplayMode::Gebiet => (
                GEBIET_LEGEND_TITLE,
                self.gebiete
                    .values()
                    .map(|g| LegendEntry { color: g.color.clone(), label: g.name.clone() })
                    .collect(),
            ),
        };

        Legend { mode, title: title.to_owned(), entries }
    }
}

#[cfg(test)]
mod tests {
    use crate::tables::{ReferenceData, parse_plz_table, parse_zone_document};
    use plzmap_domain::DisplayMode;

    #[test]
    fn entries_follow_lexicographic_id_order() {
        let plz = parse_plz_table(br#"{"1010": "10"}"#).unwrap();
        let doc = parse_zone_document(
            br#"{
                "zones": {
                    "2":  { "name": "Zwei", "color": "blue", "gebiet": "b" },
                    "10": { "name": "Zehn", "color": "red", "gebiet": "a" },
                    "1":  { "name": "Eins", "color": "green", "gebiet": "a" }
                },
                "gebiet": {
                    "b": { "name": "Bergland", "color": "brown" },
                    "a": { "name": "Alpenvorland", "color": "olive" }
                }
            }"#,
        )
        .unwrap();
        let (data, _) = ReferenceData::from_tables(plz, doc.zones, doc.gebiet).unwrap();

        let zones = data.legend(DisplayMode::Zone);
        assert_eq!(zones.title, "Zonen");
        let labels: Vec<_> = zones.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Zone 1: Eins", "Zone 10: Zehn", "Zone 2: Zwei"]);

        let gebiete = data.legend(DisplayMode::Gebiet);
        assert_eq!(gebiete.title, "Liefergebiete NOS");
        let labels: Vec<_> = gebiete.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Alpenvorland", "Bergland"]);
        assert_eq!(gebiete.entries[0].color.as_str(), "olive");
    }
}
