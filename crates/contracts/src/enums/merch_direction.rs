use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way the stock of a merch table moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchDirection {
    /// Purchases: the derived column shows total spent
    In,
    /// Sales: the derived column shows sales over expected sales
    Out,
}

impl MerchDirection {
    pub fn code(&self) -> &'static str {
        match self {
            MerchDirection::In => "in",
            MerchDirection::Out => "out",
        }
    }

    pub fn all() -> Vec<MerchDirection> {
        vec![MerchDirection::In, MerchDirection::Out]
    }
}

impl fmt::Display for MerchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for direction in MerchDirection::all() {
            assert_eq!(
                serde_json::to_string(&direction).unwrap(),
                format!("\"{}\"", direction.code())
            );
        }
        assert_eq!(MerchDirection::Out.to_string(), "out");
    }
}
