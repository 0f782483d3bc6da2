//! Parse-and-validate step for the reference tables.
//!
//! Raw JSON is turned into a typed [`ReferenceData`] snapshot once per load. Structural problems
//! (empty tables, empty colours, empty postal codes) reject the load. Dangling references between
//! tables are only reported: the hand-maintained tables are often briefly out of sync, and the
//! resolver degrades those rows to `NotFound` instead of refusing to draw the map.

use crate::error::{DataLoadError, DataLoadErrorExt};
use fxhash::FxHashMap;
use plzmap_domain::{GebietAttributes, GebietId, PostalCode, ZoneAttributes, ZoneId};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

pub type PlzTable = FxHashMap<PostalCode, ZoneId>;
pub type ZoneTable = BTreeMap<ZoneId, ZoneAttributes>;
pub type GebietTable = BTreeMap<GebietId, GebietAttributes>;

/// The combined zone/Gebiet document.
#[derive(Debug, Default, Deserialize)]
pub struct ZoneDocument {
    #[serde(default)]
    pub zones: ZoneTable,
    #[serde(default)]
    pub gebiet: GebietTable,
}

/// Parses the PLZ→Zone document.
///
/// # Errors
/// [`DataLoadError::Parse`] if the bytes are not a JSON object of postal code to zone id.
pub fn parse_plz_table(bytes: &[u8]) -> Result<PlzTable, DataLoadError> {
    serde_json::from_slice(bytes).context("plz-to-zone table")
}

/// Parses the zone/Gebiet document.
///
/// # Errors
/// [`DataLoadError::Parse`] if the bytes do not match `{ zones: {...}, gebiet: {...} }`.
pub fn parse_zone_document(bytes: &[u8]) -> Result<ZoneDocument, DataLoadError> {
    serde_json::from_slice(bytes).context("zone/Gebiet table")
}

/// Object keys of one table that name the same identifier once trimmed. Only the last entry
/// survives the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedKey {
    pub table: &'static str,
    /// The identifier the spellings collapse onto.
    pub key: String,
    /// Every spelling as written, in document order.
    pub spellings: Vec<String>,
}

/// Cross-table references that do not resolve, plus keys merged by trimming. Never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Postal codes whose zone is missing from the zone table, sorted by postal code.
    pub unknown_zones: Vec<(PostalCode, ZoneId)>,
    /// Zones whose Gebiet is missing from the Gebiet table, in zone order.
    pub unknown_gebiete: Vec<(ZoneId, GebietId)>,
    /// Only filled by [`ReferenceData::from_documents`]; typed tables have already merged them.
    pub collapsed_keys: Vec<CollapsedKey>,
}

impl ConsistencyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.unknown_zones.len() + self.unknown_gebiete.len() + self.collapsed_keys.len()
    }
}

/// Key spellings of a JSON object as written; values are skipped.
#[derive(Debug, Default)]
struct RawKeys(Vec<String>);

impl<'de> Deserialize<'de> for RawKeys {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeysVisitor;

        impl<'de> Visitor<'de> for KeysVisitor {
            type Value = RawKeys;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut keys = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    map.next_value::<IgnoredAny>()?;
                    keys.push(key);
                }
                Ok(RawKeys(keys))
            }
        }

        deserializer.deserialize_map(KeysVisitor)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawZoneKeys {
    #[serde(default)]
    zones: RawKeys,
    #[serde(default)]
    gebiet: RawKeys,
}

impl RawKeys {
    fn collapsed(self, table: &'static str) -> impl Iterator<Item = CollapsedKey> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for spelling in self.0 {
            groups.entry(spelling.trim().to_owned()).or_default().push(spelling);
        }
        groups
            .into_iter()
            .filter(|(_, spellings)| spellings.len() > 1)
            .map(move |(key, spellings)| CollapsedKey { table, key, spellings })
    }
}

/// One immutable generation of the three reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub(crate) plz_to_zone: PlzTable,
    pub(crate) zones: ZoneTable,
    pub(crate) gebiete: GebietTable,
    generation: u64,
}

impl ReferenceData {
    /// Validates typed tables and builds a snapshot of generation `1`.
    ///
    /// # Errors
    /// [`DataLoadError::Validation`] when a table is empty, a postal code is blank, or a colour
    /// is blank.
    pub fn from_tables(
        plz_to_zone: PlzTable,
        zones: ZoneTable,
        gebiete: GebietTable,
    ) -> Result<(Self, ConsistencyReport), DataLoadError> {
        Self::build(plz_to_zone, zones, gebiete, 1)
    }

    /// Parses and validates both raw documents into a snapshot of generation `1`.
    ///
    /// # Errors
    /// [`DataLoadError::Parse`] or [`DataLoadError::Validation`].
    pub fn from_documents(
        plz_to_zone: &[u8],
        zones: &[u8],
    ) -> Result<(Self, ConsistencyReport), DataLoadError> {
        Self::build_documents(plz_to_zone, zones, 1)
    }

    pub(crate) fn build_documents(
        plz_to_zone: &[u8],
        zones: &[u8],
        generation: u64,
    ) -> Result<(Self, ConsistencyReport), DataLoadError> {
        let plz_table = parse_plz_table(plz_to_zone)?;
        let document = parse_zone_document(zones)?;
        let (data, mut report) = Self::build(plz_table, document.zones, document.gebiet, generation)?;

        let plz_keys: RawKeys = serde_json::from_slice(plz_to_zone).context("plz-to-zone table")?;
        let zone_keys: RawZoneKeys = serde_json::from_slice(zones).context("zone/Gebiet table")?;
        report.collapsed_keys = plz_keys
            .collapsed("plz-to-zone table")
            .chain(zone_keys.zones.collapsed("zone table"))
            .chain(zone_keys.gebiet.collapsed("Gebiet table"))
            .collect();

        Ok((data, report))
    }

    pub(crate) fn build(
        plz_to_zone: PlzTable,
        zones: ZoneTable,
        gebiete: GebietTable,
        generation: u64,
    ) -> Result<(Self, ConsistencyReport), DataLoadError> {
        ensure_not_empty(plz_to_zone.is_empty(), "plz-to-zone table")?;
        ensure_not_empty(zones.is_empty(), "zone table")?;
        ensure_not_empty(gebiete.is_empty(), "Gebiet table")?;

        if plz_to_zone.keys().any(PostalCode::is_empty) {
            return Err(DataLoadError::Validation {
                message: "blank postal code key".into(),
                context: Some("plz-to-zone table".into()),
            });
        }
        if let Some(id) = zones.iter().find_map(|(id, z)| z.color.is_empty().then_some(id)) {
            return Err(DataLoadError::Validation {
                message: format!("zone {id} has no colour").into(),
                context: Some("zone table".into()),
            });
        }
        if let Some(id) = gebiete.iter().find_map(|(id, g)| g.color.is_empty().then_some(id)) {
            return Err(DataLoadError::Validation {
                message: format!("Gebiet {id} has no colour").into(),
                context: Some("Gebiet table".into()),
            });
        }

        let data = Self { plz_to_zone, zones, gebiete, generation };
        let report = data.consistency();
        Ok((data, report))
    }

    fn consistency(&self) -> ConsistencyReport {
        let mut unknown_zones: Vec<_> = self
            .plz_to_zone
            .iter()
            .filter(|(_, zone)| !self.zones.contains_key(*zone))
            .map(|(plz, zone)| (plz.clone(), zone.clone()))
            .collect();
        unknown_zones.sort();

        let unknown_gebiete = self
            .zones
            .iter()
            .filter(|(_, zone)| !self.gebiete.contains_key(&zone.gebiet))
            .map(|(id, zone)| (id.clone(), zone.gebiet.clone()))
            .collect();

        ConsistencyReport { unknown_zones, unknown_gebiete, collapsed_keys: Vec::new() }
    }

    /// Load counter; increases by one with every successful load of the owning store.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn zone_of(&self, plz: &PostalCode) -> Option<&ZoneId> {
        self.plz_to_zone.get(plz)
    }

    #[must_use]
    pub fn zone(&self, id: &ZoneId) -> Option<&ZoneAttributes> {
        self.zones.get(id)
    }

    #[must_use]
    pub fn gebiet(&self, id: &GebietId) -> Option<&GebietAttributes> {
        self.gebiete.get(id)
    }

    #[must_use]
    pub fn postal_code_count(&self) -> usize {
        self.plz_to_zone.len()
    }

    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn gebiet_count(&self) -> usize {
        self.gebiete.len()
    }
}

fn ensure_not_empty(empty: bool, table: &'static str) -> Result<(), DataLoadError> {
    if empty {
        Err(DataLoadError::Validation { message: "table is empty".into(), context: Some(table.into()) })
    } else {
        Ok(())
    }
}
