use super::error::MerchEditError;
use crate::domain::common::AggregateId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Largest amount a single merch row may carry
pub const MAX_AMOUNT: u32 = 9999;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// ID of a persisted merch record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchId(pub Uuid);

impl MerchId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for MerchId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MerchId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Editable columns of a merch row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MerchField {
    Description,
    ItemName,
    Price,
    Amount,
    Date,
}

impl MerchField {
    /// Stable field code, as sent to the parent
    pub fn code(&self) -> &'static str {
        match self {
            MerchField::Description => "description",
            MerchField::ItemName => "itemName",
            MerchField::Price => "price",
            MerchField::Amount => "amount",
            MerchField::Date => "date",
        }
    }

    /// Columns in display order
    pub fn all() -> [MerchField; 5] {
        [
            MerchField::Description,
            MerchField::ItemName,
            MerchField::Price,
            MerchField::Amount,
            MerchField::Date,
        ]
    }
}

impl fmt::Display for MerchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single cell edit: the raw input value for `field` of the row at `index`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchEdit {
    pub index: usize,
    pub value: String,
    pub field: MerchField,
}

impl MerchEdit {
    pub fn new(index: usize, value: impl Into<String>, field: MerchField) -> Self {
        Self {
            index,
            value: value.into(),
            field,
        }
    }
}

/// Stock moved in or out
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merch {
    /// Absent until the record has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MerchId>,

    #[serde(default)]
    pub description: String,

    /// Name of the catalog item (soft reference to `Item::name`)
    #[serde(default)]
    pub item_name: String,

    /// Unit price in whole currency units
    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub amount: u32,

    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Merch {
    /// Blank persisted record
    pub fn new(id: MerchId, date: NaiveDate) -> Self {
        Self {
            id: Some(id),
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.as_string())
    }

    /// price × amount
    pub fn spent(&self) -> f64 {
        self.price * f64::from(self.amount)
    }

    /// Current value of a column as it is shown in its input.
    /// Zero numbers and missing dates render empty.
    pub fn field_value(&self, field: MerchField) -> String {
        match field {
            MerchField::Description => self.description.clone(),
            MerchField::ItemName => self.item_name.clone(),
            MerchField::Price if self.price == 0.0 => String::new(),
            MerchField::Price => self.price.to_string(),
            MerchField::Amount if self.amount == 0 => String::new(),
            MerchField::Amount => self.amount.to_string(),
            MerchField::Date => self
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    /// Coerce a raw input value into `field`. The record is untouched on error.
    pub fn apply_edit(&mut self, field: MerchField, value: &str) -> Result<(), MerchEditError> {
        let trimmed = value.trim();
        match field {
            MerchField::Description => self.description = value.to_string(),
            MerchField::ItemName => self.item_name = value.to_string(),
            MerchField::Price => {
                self.price = if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|p| p.is_finite())
                        .ok_or_else(|| MerchEditError::InvalidNumber {
                            field,
                            value: value.to_string(),
                        })?
                };
            }
            MerchField::Amount => {
                self.amount = if trimmed.is_empty() {
                    0
                } else {
                    let parsed = trimmed.parse::<u64>().map_err(|_| {
                        MerchEditError::InvalidNumber {
                            field,
                            value: value.to_string(),
                        }
                    })?;
                    u32::try_from(parsed)
                        .ok()
                        .filter(|a| *a <= MAX_AMOUNT)
                        .ok_or(MerchEditError::AmountOutOfRange {
                            value: parsed,
                            max: MAX_AMOUNT,
                        })?
                };
            }
            MerchField::Date => {
                self.date = if trimmed.is_empty() {
                    None
                } else {
                    Some(NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
                        MerchEditError::InvalidDate {
                            value: value.to_string(),
                        }
                    })?)
                };
            }
        }
        Ok(())
    }
}

/// Apply a cell edit to the row it addresses
pub fn apply_edit(rows: &mut [Merch], edit: &MerchEdit) -> Result<(), MerchEditError> {
    rows.get_mut(edit.index)
        .ok_or(MerchEditError::RowNotFound { index: edit.index })?
        .apply_edit(edit.field, &edit.value)
}

/// Drop every row whose id is listed in `ids`, returning how many were removed.
/// Unknown ids and rows without an id are left alone.
pub fn remove_by_ids(rows: &mut Vec<Merch>, ids: &[String]) -> usize {
    let before = rows.len();
    rows.retain(|row| match row.id_string() {
        Some(id) => !ids.contains(&id),
        None => true,
    });
    before - rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: f64, amount: u32) -> Merch {
        Merch {
            id: Some(MerchId::generate()),
            price,
            amount,
            ..Merch::default()
        }
    }

    #[test]
    fn test_spent() {
        assert_eq!(row(10.0, 3).spent(), 30.0);
        assert_eq!(Merch::default().spent(), 0.0);
    }

    #[test]
    fn test_field_codes() {
        for field in MerchField::all() {
            assert_eq!(
                serde_json::to_string(&field).unwrap(),
                format!("\"{}\"", field.code())
            );
        }
        assert_eq!(MerchField::ItemName.code(), "itemName");
        assert_eq!(
            serde_json::to_string(&MerchField::ItemName).unwrap(),
            "\"itemName\""
        );
    }

    #[test]
    fn test_field_value() {
        let mut merch = row(0.0, 0);
        assert_eq!(merch.field_value(MerchField::Price), "");
        assert_eq!(merch.field_value(MerchField::Amount), "");
        assert_eq!(merch.field_value(MerchField::Date), "");

        merch.price = 15.0;
        merch.amount = 4;
        merch.date = NaiveDate::from_ymd_opt(2023, 5, 1);
        assert_eq!(merch.field_value(MerchField::Price), "15");
        assert_eq!(merch.field_value(MerchField::Amount), "4");
        assert_eq!(merch.field_value(MerchField::Date), "2023-05-01");
    }

    #[test]
    fn test_apply_edit_text_fields() {
        let mut merch = Merch::default();
        merch.apply_edit(MerchField::Description, " Spring batch").unwrap();
        merch.apply_edit(MerchField::ItemName, "Shirt").unwrap();
        assert_eq!(merch.description, " Spring batch");
        assert_eq!(merch.item_name, "Shirt");
    }

    #[test]
    fn test_apply_edit_numbers() {
        let mut merch = row(10.0, 3);
        merch.apply_edit(MerchField::Amount, "5").unwrap();
        merch.apply_edit(MerchField::Price, "1234").unwrap();
        assert_eq!(merch.amount, 5);
        assert_eq!(merch.price, 1234.0);

        merch.apply_edit(MerchField::Amount, "").unwrap();
        merch.apply_edit(MerchField::Price, "  ").unwrap();
        assert_eq!(merch.amount, 0);
        assert_eq!(merch.price, 0.0);
    }

    #[test]
    fn test_apply_edit_rejects_bad_input() {
        let mut merch = row(10.0, 3);
        let before = merch.clone();

        assert_eq!(
            merch.apply_edit(MerchField::Amount, "abc"),
            Err(MerchEditError::InvalidNumber {
                field: MerchField::Amount,
                value: "abc".to_string()
            })
        );
        assert!(matches!(
            merch.apply_edit(MerchField::Amount, "-1"),
            Err(MerchEditError::InvalidNumber { .. })
        ));
        assert_eq!(
            merch.apply_edit(MerchField::Amount, "10000"),
            Err(MerchEditError::AmountOutOfRange {
                value: 10000,
                max: MAX_AMOUNT
            })
        );
        assert!(merch.apply_edit(MerchField::Price, "NaN").is_err());
        assert!(matches!(
            merch.apply_edit(MerchField::Date, "01.05.2023"),
            Err(MerchEditError::InvalidDate { .. })
        ));
        assert_eq!(merch, before);
    }

    #[test]
    fn test_apply_edit_date() {
        let mut merch = Merch::default();
        merch.apply_edit(MerchField::Date, "2023-05-01").unwrap();
        assert_eq!(merch.date, NaiveDate::from_ymd_opt(2023, 5, 1));
        merch.apply_edit(MerchField::Date, "").unwrap();
        assert_eq!(merch.date, None);
    }

    #[test]
    fn test_apply_edit_by_index() {
        let mut rows = vec![row(1.0, 1), row(2.0, 2), row(3.0, 3)];
        apply_edit(&mut rows, &MerchEdit::new(2, "5", MerchField::Amount)).unwrap();
        assert_eq!(rows[2].amount, 5);
        assert_eq!(rows[0].amount, 1);

        assert_eq!(
            apply_edit(&mut rows, &MerchEdit::new(3, "5", MerchField::Amount)),
            Err(MerchEditError::RowNotFound { index: 3 })
        );
    }

    #[test]
    fn test_remove_by_ids() {
        let mut rows = vec![row(1.0, 1), row(2.0, 2), Merch::default(), row(3.0, 3)];
        let ids = vec![
            rows[0].id_string().unwrap(),
            rows[3].id_string().unwrap(),
            MerchId::generate().as_string(),
        ];

        assert_eq!(remove_by_ids(&mut rows, &ids), 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].price, 2.0);
        assert_eq!(rows[1].id, None);
    }

    #[test]
    fn test_merch_id_round_trip() {
        let id = MerchId::generate();
        assert_eq!(MerchId::from_string(&id.as_string()), Ok(id));
        assert!(MerchId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let merch: Merch = serde_json::from_str(r#"{"itemName":"Shirt","price":10}"#).unwrap();
        assert_eq!(merch.item_name, "Shirt");
        assert_eq!(merch.amount, 0);
        assert_eq!(merch.id, None);
    }
}
