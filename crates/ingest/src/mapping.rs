use crate::{error::MappingError, tokenizer::ParsedCsv};
use model::staging::{StagedRecord, StandardField};
use std::collections::{BTreeMap, HashMap};

const ATTRIBUTE_PREFIX: &str = "attribute:";
const FALLBACK_ATTRIBUTE_KEY: &str = "extra";

/// Destination of one CSV column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTarget {
    /// One of the fixed inventory columns.
    Standard(StandardField),
    /// Free-form key stored under the record's attribute bag.
    Attribute(String),
}

impl FieldTarget {
    /// Parses a wizard target string.
    ///
    /// `""` means unmapped (`Ok(None)`); `attribute:<key>` selects the bag,
    /// with an empty key falling back to `extra`; anything else must name a
    /// standard field.
    pub fn parse(column: &str, target: &str) -> Result<Option<FieldTarget>, MappingError> {
        if target.is_empty() {
            return Ok(None);
        }
        if let Some(rest) = target.strip_prefix(ATTRIBUTE_PREFIX) {
            let key = rest
                .split(':')
                .next()
                .filter(|key| !key.is_empty())
                .unwrap_or(FALLBACK_ATTRIBUTE_KEY);
            return Ok(Some(FieldTarget::Attribute(key.to_string())));
        }
        match target.parse::<StandardField>() {
            Ok(field) => Ok(Some(FieldTarget::Standard(field))),
            Err(_) => Err(MappingError::UnknownTarget {
                column: column.to_string(),
                target: target.to_string(),
            }),
        }
    }
}

/// Wizard-session mapping from CSV headers to destinations.
///
/// Exists only for the duration of one upload; it is never persisted as its
/// own entity.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    targets: HashMap<String, FieldTarget>,
    default_brand: Option<String>,
}

impl ColumnMap {
    pub fn new() -> Self {
        ColumnMap::default()
    }

    /// Substitute this brand whenever a row's mapped brand is empty.
    pub fn with_default_brand(mut self, brand: impl Into<String>) -> Self {
        self.default_brand = Some(brand.into());
        self
    }

    pub fn assign(&mut self, header: impl Into<String>, target: FieldTarget) {
        self.targets.insert(header.into(), target);
    }

    pub fn target(&self, header: &str) -> Option<&FieldTarget> {
        self.targets.get(header)
    }

    /// Builds a map from `(header, target-string)` pairs, rejecting unknown
    /// destinations before anything touches the network.
    pub fn from_spec<I, S>(entries: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut map = ColumnMap::new();
        for (header, target) in entries {
            if let Some(target) = FieldTarget::parse(header.as_ref(), target.as_ref())? {
                map.assign(header.as_ref().to_string(), target);
            }
        }
        Ok(map)
    }

    /// Parses a mapping file: a JSON object from header to target string.
    pub fn from_json(text: &str) -> Result<Self, MappingError> {
        let entries: BTreeMap<String, String> = serde_json::from_str(text)?;
        ColumnMap::from_spec(entries)
    }

    /// Builds one staged record from a data row.
    ///
    /// Each header contributes to at most one destination; unmapped headers
    /// are dropped. Cells missing from a short row read as empty strings.
    pub fn map_row(&self, headers: &[String], row: &[String]) -> StagedRecord {
        let mut record = StagedRecord::default();
        for (index, header) in headers.iter().enumerate() {
            let Some(target) = self.targets.get(header) else {
                continue;
            };
            let value = row.get(index).cloned().unwrap_or_default();
            match target {
                FieldTarget::Standard(field) => record.set(*field, value),
                FieldTarget::Attribute(key) => record.set_attribute(key.clone(), value),
            }
        }
        if let Some(brand) = &self.default_brand
            && record.brand_is_empty()
        {
            record.set(StandardField::Brand, brand.clone());
        }
        record
    }

    /// Maps every data row of a parsed CSV.
    pub fn map_rows(&self, csv: &ParsedCsv) -> Vec<StagedRecord> {
        csv.rows
            .iter()
            .map(|row| self.map_row(&csv.headers, row))
            .collect()
    }
}
