//! Postal codes carried by an area feature.

use crate::geojson::AreaFeature;
use plzmap_domain::PostalCode;
use plzmap_domain::config::FeatureConfig;
use serde_json::Value;

const SEPARATORS: [char; 3] = [',', ';', '/'];

impl AreaFeature {
    /// All postal codes of this feature, in document order and without duplicates.
    ///
    /// The configured property may hold a string, a number, an array of those, or a single string
    /// listing several codes (`"1010, 1020"`, `"1010/1020"`). Without that property, an id such as
    /// `plz-1010` is used.
    #[must_use]
    pub fn postal_codes(&self, config: &FeatureConfig) -> Vec<PostalCode> {
        let mut codes = Vec::new();
        if let Some(value) = self.property(&config.postal_code_property) {
            collect(value, &mut codes);
        }

        if codes.is_empty()
            && let Some(id) = self.id_text()
            && let Some(code) = id.strip_prefix(config.id_prefix.as_str())
        {
            push_unique(PostalCode::new(code), &mut codes);
        }

        codes
    }
}

fn collect(value: &Value, codes: &mut Vec<PostalCode>) {
    match value {
        Value::String(text) => text
            .split(|c: char| SEPARATORS.contains(&c) || c.is_whitespace())
            .for_each(|part| push_unique(PostalCode::new(part), codes)),
        Value::Number(number) => push_unique(PostalCode::new(number.to_string()), codes),
        Value::Array(items) => items.iter().for_each(|item| collect(item, codes)),
        Value::Null | Value::Bool(_) | Value::Object(_) => {},
    }
}

fn push_unique(code: PostalCode, codes: &mut Vec<PostalCode>) {
    if !code.is_empty() && !codes.contains(&code) {
        codes.push(code);
    }
}
