//! Payer's funding instrument

use crate::error::{require_non_empty, ApiError, Result};
use serde::{Deserialize, Serialize};

/// Identifier of the account balance money source
pub const WALLET_ID: &str = "wallet";

/// Money source selected by the payer to fund a payment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneySourceJson")]
pub struct MoneySource {
    id: String,
}

impl MoneySource {
    /// Create a money source from its identifier
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        require_non_empty("id", &id)?;
        Ok(Self { id })
    }

    /// The account balance
    pub fn wallet() -> Self {
        Self {
            id: WALLET_ID.to_string(),
        }
    }

    /// A card previously linked to the account
    pub fn card(id: impl Into<String>) -> Result<Self> {
        Self::new(id)
    }

    /// Identifier sent as the `money_source` parameter
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this is the account balance
    pub fn is_wallet(&self) -> bool {
        self.id == WALLET_ID
    }
}

#[derive(Deserialize)]
struct MoneySourceJson {
    id: String,
}

impl TryFrom<MoneySourceJson> for MoneySource {
    type Error = ApiError;

    fn try_from(json: MoneySourceJson) -> Result<Self> {
        MoneySource::new(json.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_money_source() {
        let wallet = MoneySource::wallet();
        assert_eq!(wallet.id(), "wallet");
        assert!(wallet.is_wallet());
    }

    #[test]
    fn test_card_money_source() {
        let card = MoneySource::card("card-385244400").unwrap();
        assert_eq!(card.id(), "card-385244400");
        assert!(!card.is_wallet());

        assert!(matches!(
            MoneySource::card(""),
            Err(ApiError::MissingField { field: "id" })
        ));
    }

    #[test]
    fn test_money_source_json() {
        let card: MoneySource = serde_json::from_str(r#"{"id":"card-1"}"#).unwrap();
        assert_eq!(card, MoneySource::card("card-1").unwrap());
        assert!(serde_json::from_str::<MoneySource>(r#"{"id":""}"#).is_err());
    }
}
