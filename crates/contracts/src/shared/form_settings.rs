use serde::{Deserialize, Serialize};

/// UI language of the merch tables
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Display settings shared by every merch table on the page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MerchTableSettings {
    /// Prepended to every money value, e.g. "$30"
    pub currency_prefix: String,
    /// Thousands separator for money values
    pub group_separator: String,
    pub locale: Locale,
}

impl Default for MerchTableSettings {
    fn default() -> Self {
        Self {
            currency_prefix: "$".to_string(),
            group_separator: ",".to_string(),
            locale: Locale::En,
        }
    }
}

impl MerchTableSettings {
    /// Read settings saved as JSON. Missing keys keep their defaults,
    /// an unreadable value yields the defaults altogether.
    pub fn from_json(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}
