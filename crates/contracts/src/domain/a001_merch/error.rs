use super::aggregate::MerchField;
use thiserror::Error;

/// Why a raw cell value could not be stored on a merch row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerchEditError {
    #[error("row {index} does not exist")]
    RowNotFound { index: usize },

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: MerchField, value: String },

    #[error("amount {value} is above the limit of {max}")]
    AmountOutOfRange { value: u64, max: u32 },

    #[error("not a date (expected YYYY-MM-DD): {value:?}")]
    InvalidDate { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MerchEditError::InvalidNumber {
            field: MerchField::Price,
            value: "1O".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a number: \"1O\"");

        let err = MerchEditError::AmountOutOfRange { value: 12000, max: 9999 };
        assert_eq!(err.to_string(), "amount 12000 is above the limit of 9999");
        assert_eq!(
            MerchEditError::RowNotFound { index: 4 }.to_string(),
            "row 4 does not exist"
        );
    }
}
