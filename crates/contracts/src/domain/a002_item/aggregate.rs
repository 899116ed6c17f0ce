use serde::{Deserialize, Serialize};

/// Catalog entry with the unit price a product is expected to sell for
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,

    #[serde(default)]
    pub goal_price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, goal_price: f64) -> Self {
        Self {
            name: name.into(),
            goal_price,
        }
    }
}

/// First item whose name matches exactly. Names are not unique in the
/// catalog, later duplicates are never consulted.
pub fn find_by_name<'a>(items: &'a [Item], name: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.name == name)
}
