//! Postal code → display attributes.

use crate::tables::ReferenceData;
use plzmap_domain::{AreaStyle, DisplayMode, PostalCode, ResolvedAttributes, ZoneAttributes, ZoneId};
use tracing::trace;

/// Label of a zone in the map and the legend.
pub(crate) fn zone_label(id: &ZoneId, zone: &ZoneAttributes) -> String {
    format!("Zone {id}: {}", zone.name)
}

impl ReferenceData {
    /// Resolves the visual attributes of `plz` under `mode`.
    ///
    /// Pure with respect to this snapshot and never fails: a postal code without a zone, a zone
    /// missing from the zone table, and (in Gebiet mode) a Gebiet missing from the Gebiet table
    /// all yield [`ResolvedAttributes::NotFound`].
    #[must_use]
    pub fn resolve(&self, plz: &PostalCode, mode: DisplayMode) -> ResolvedAttributes {
        let Some((zone_id, zone)) = self.lookup_zone(plz) else {
            return ResolvedAttributes::NotFound;
        };

        match mode {
            DisplayMode::Zone => {
                let label = zone_label(zone_id, zone);
                ResolvedAttributes::Styled(AreaStyle {
                    fill_color: zone.color.clone(),
                    popup_text: label.clone(),
                    label_text: label,
                })
            },
            DisplayMode::Gebiet => {
                let Some(gebiet) = self.gebiete.get(&zone.gebiet) else {
                    trace!(%plz, zone = %zone_id, gebiet = %zone.gebiet, "Gebiet missing from table");
                    return ResolvedAttributes::NotFound;
                };
                ResolvedAttributes::Styled(AreaStyle {
                    fill_color: gebiet.color.clone(),
                    label_text: gebiet.name.clone(),
                    popup_text: gebiet.name.clone(),
                })
            },
        }
    }

    /// PLZ → (zone id, zone row); `None` on either miss.
    pub(crate) fn lookup_zone(&self, plz: &PostalCode) -> Option<(&ZoneId, &ZoneAttributes)> {
        let Some(zone_id) = self.plz_to_zone.get(plz) else {
            trace!(%plz, "Postal code not assigned to a zone");
            return None;
        };
        let Some(zone) = self.zones.get(zone_id) else {
            trace!(%plz, zone = %zone_id, "Zone missing from table");
            return None;
        };
        Some((zone_id, zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{PlzTable, ReferenceData};
    use plzmap_domain::{Color, GebietAttributes, GebietId};

    fn data() -> ReferenceData {
        let plz: PlzTable = [("2020", "A"), ("2000", "B"), ("3100", "C")]
            .into_iter()
            .map(|(p, z)| (PostalCode::from(p), ZoneId::from(z)))
            .collect();
        let zones = [
            ("A", "Nord", "#ff0000", "G1"),
            ("B", "Süd", "#0000ff", "G9"),
        ]
        .into_iter()
        .map(|(id, name, color, gebiet)| {
            let zone = ZoneAttributes {
                name: name.to_owned(),
                color: Color::from(color),
                gebiet: GebietId::from(gebiet),
            };
            (ZoneId::from(id), zone)
        })
        .collect();
        let gebiete = [(
            GebietId::from("G1"),
            GebietAttributes { name: "Nord-Ost".to_owned(), color: Color::from("#00ff00") },
        )]
        .into_iter()
        .collect();

        ReferenceData::from_tables(plz, zones, gebiete).unwrap().0
    }

    #[test]
    fn popup_mirrors_label() {
        let data = data();
        for mode in DisplayMode::ALL {
            let resolved = data.resolve(&PostalCode::from("2020"), mode);
            assert_eq!(resolved.label_text(), resolved.popup_text());
        }
    }

    #[test]
    fn missing_zone_row_is_not_found_in_both_modes() {
        let data = data();
        for mode in DisplayMode::ALL {
            assert_eq!(data.resolve(&PostalCode::from("3100"), mode), ResolvedAttributes::NotFound);
        }
    }

    #[test]
    fn missing_gebiet_only_affects_gebiet_mode() {
        let data = data();
        let plz = PostalCode::from("2000");
        assert_eq!(data.resolve(&plz, DisplayMode::Zone).label_text(), Some("Zone B: Süd"));
        assert_eq!(data.resolve(&plz, DisplayMode::Gebiet), ResolvedAttributes::NotFound);
    }
}
