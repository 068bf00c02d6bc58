use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

/// Fixed destination columns the ingestion wizard can map a CSV column onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardField {
    Sku,
    Name,
    Size,
    Color,
    Gender,
    Brand,
    Category,
    Barcode,
    Location,
    Zone,
    Price,
    StockSala,
    StockAlmacen,
}

#[derive(Debug, Error)]
#[error("unknown standard field: '{0}'")]
pub struct UnknownField(pub String);

impl StandardField {
    pub const ALL: [StandardField; 13] = [
        StandardField::Sku,
        StandardField::Name,
        StandardField::Size,
        StandardField::Color,
        StandardField::Gender,
        StandardField::Brand,
        StandardField::Category,
        StandardField::Barcode,
        StandardField::Location,
        StandardField::Zone,
        StandardField::Price,
        StandardField::StockSala,
        StandardField::StockAlmacen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StandardField::Sku => "sku",
            StandardField::Name => "name",
            StandardField::Size => "size",
            StandardField::Color => "color",
            StandardField::Gender => "gender",
            StandardField::Brand => "brand",
            StandardField::Category => "category",
            StandardField::Barcode => "barcode",
            StandardField::Location => "location",
            StandardField::Zone => "zone",
            StandardField::Price => "price",
            StandardField::StockSala => "stock_sala",
            StandardField::StockAlmacen => "stock_almacen",
        }
    }
}

impl fmt::Display for StandardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StandardField::ALL
            .iter()
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// One mapped CSV row, staged as the `raw` payload of an ingestion item.
///
/// Every value stays the string the tokenizer produced; type coercion is the
/// remote processor's job. Columns the wizard left unmapped never reach this
/// type, so unknown shapes are unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_sala: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_almacen: Option<String>,
    /// Free-form extension area for columns without a standard destination.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl StagedRecord {
    pub fn set(&mut self, field: StandardField, value: String) {
        let slot = match field {
            StandardField::Sku => &mut self.sku,
            StandardField::Name => &mut self.name,
            StandardField::Size => &mut self.size,
            StandardField::Color => &mut self.color,
            StandardField::Gender => &mut self.gender,
            StandardField::Brand => &mut self.brand,
            StandardField::Category => &mut self.category,
            StandardField::Barcode => &mut self.barcode,
            StandardField::Location => &mut self.location,
            StandardField::Zone => &mut self.zone,
            StandardField::Price => &mut self.price,
            StandardField::StockSala => &mut self.stock_sala,
            StandardField::StockAlmacen => &mut self.stock_almacen,
        };
        *slot = Some(value);
    }

    pub fn get(&self, field: StandardField) -> Option<&str> {
        let slot = match field {
            StandardField::Sku => &self.sku,
            StandardField::Name => &self.name,
            StandardField::Size => &self.size,
            StandardField::Color => &self.color,
            StandardField::Gender => &self.gender,
            StandardField::Brand => &self.brand,
            StandardField::Category => &self.category,
            StandardField::Barcode => &self.barcode,
            StandardField::Location => &self.location,
            StandardField::Zone => &self.zone,
            StandardField::Price => &self.price,
            StandardField::StockSala => &self.stock_sala,
            StandardField::StockAlmacen => &self.stock_almacen,
        };
        slot.as_deref()
    }

    pub fn set_attribute(&mut self, key: String, value: String) {
        self.attributes.insert(key, value);
    }

    /// True when no column was mapped to brand, or the mapped cell was blank.
    pub fn brand_is_empty(&self) -> bool {
        self.brand.as_deref().is_none_or(|b| b.trim().is_empty())
    }

    /// xxh3-64 hex digest of the canonical JSON encoding.
    ///
    /// Field order is fixed by the struct and the attribute bag is sorted, so
    /// equal records always hash equal.
    pub fn row_hash(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        format!("{:016x}", xxh3_64(&bytes))
    }
}
