use crate::tables::ReferenceData;
use plzmap_domain::PostalCode;

pub const NO_ZONE_INFO: &str = "Keine Zoneninformation verfügbar";
pub const UNKNOWN_GEBIET: &str = "unbekannt";

impl ReferenceData {
    /// Info-box text for a hovered area, independent of the display mode.
    ///
    /// ```text
    /// PLZ: 2020
    /// Zone: A - Nord
    /// Liefergebiet: Nord-Ost
    /// ```
    #[must_use]
    pub fn describe_hover(&self, plz: &PostalCode) -> String {
        let mut text = format!("PLZ: {plz}\n");

        match self.lookup_zone(plz) {
            Some((zone_id, zone)) => {
                let gebiet = self.gebiete.get(&zone.gebiet).map_or(UNKNOWN_GEBIET, |g| g.name.as_str());
                text.push_str(&format!("Zone: {zone_id} - {}\nLiefergebiet: {gebiet}", zone.name));
            },
            None => text.push_str(NO_ZONE_INFO),
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{parse_plz_table, parse_zone_document};

    fn data() -> ReferenceData {
        let plz = parse_plz_table(br#"{"2020": "A", "2000": "B", "3100": "C"}"#).unwrap();
        let doc = parse_zone_document(
            r##"{
                "zones": {
                    "A": { "name": "Nord", "color": "#ff0000", "gebiet": "G1" },
                    "B": { "name": "Süd", "color": "#0000ff", "gebiet": "G9" }
                },
                "gebiet": { "G1": { "name": "Nord-Ost", "color": "#00ff00" } }
            }"##
            .as_bytes(),
        )
        .unwrap();
        ReferenceData::from_tables(plz, doc.zones, doc.gebiet).unwrap().0
    }

    #[test]
    fn resolved_code_lists_zone_and_gebiet() {
        assert_eq!(
            data().describe_hover(&PostalCode::from("2020")),
            "PLZ: 2020\nZone: A - Nord\nLiefergebiet: Nord-Ost"
        );
    }

    #[test]
    fn dangling_gebiet_is_unknown() {
        assert_eq!(
            data().describe_hover(&PostalCode::from("2000")),
            "PLZ: 2000\nZone: B - Süd\nLiefergebiet: unbekannt"
        );
    }

    #[test]
    fn unassigned_and_dangling_zone_have_no_info() {
        let data = data();
        for plz in ["9999", "3100"] {
            assert_eq!(
                data.describe_hover(&PostalCode::from(plz)),
                format!("PLZ: {plz}\n{NO_ZONE_INFO}")
            );
        }
    }
}
