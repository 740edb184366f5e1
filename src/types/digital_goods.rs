//! Digital goods received with a completed payment

use crate::error::{require, require_non_empty, ApiError, Result};
use serde::{Deserialize, Serialize};

/// A single item: a voucher, PIN code or similar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GoodJson")]
pub struct Good {
    #[serde(rename = "merchantArticleId", skip_serializing_if = "Option::is_none")]
    merchant_article_id: Option<String>,
    serial: String,
    secret: String,
}

impl Good {
    /// Create a new item; `serial` and `secret` must be non-empty
    pub fn new(
        merchant_article_id: Option<String>,
        serial: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        let serial = serial.into();
        let secret = secret.into();
        require_non_empty("serial", &serial)?;
        require_non_empty("secret", &secret)?;
        Ok(Self {
            merchant_article_id,
            serial,
            secret,
        })
    }

    /// Merchant's article identifier
    pub fn merchant_article_id(&self) -> Option<&str> {
        self.merchant_article_id.as_deref()
    }

    /// Serial number of the item
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Secret (PIN, code) of the item
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

#[derive(Deserialize)]
struct GoodJson {
    #[serde(rename = "merchantArticleId")]
    merchant_article_id: Option<String>,
    serial: Option<String>,
    secret: Option<String>,
}

impl TryFrom<GoodJson> for Good {
    type Error = ApiError;

    fn try_from(json: GoodJson) -> Result<Self> {
        Good::new(
            json.merchant_article_id,
            require("serial", json.serial)?,
            require("secret", json.secret)?,
        )
    }
}

/// Purchased articles and bonus items
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitalGoods {
    #[serde(default)]
    article: Vec<Good>,
    #[serde(default)]
    bonus: Vec<Good>,
}

impl DigitalGoods {
    /// Create digital goods from articles and bonuses
    pub fn new(article: Vec<Good>, bonus: Vec<Good>) -> Self {
        Self { article, bonus }
    }

    /// Purchased articles
    pub fn article(&self) -> &[Good] {
        &self.article
    }

    /// Bonus items
    pub fn bonus(&self) -> &[Good] {
        &self.bonus
    }

    /// Whether nothing was received
    pub fn is_empty(&self) -> bool {
        self.article.is_empty() && self.bonus.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_good_validation() {
        let good = Good::new(Some("20873".to_string()), "1234567890", "12345").unwrap();
        assert_eq!(good.merchant_article_id(), Some("20873"));
        assert_eq!(good.serial(), "1234567890");
        assert_eq!(good.secret(), "12345");

        assert!(matches!(
            Good::new(None, "", "12345"),
            Err(ApiError::MissingField { field: "serial" })
        ));
        assert!(matches!(
            Good::new(None, "1234567890", ""),
            Err(ApiError::MissingField { field: "secret" })
        ));
    }

    #[test]
    fn test_digital_goods_from_json() {
        let goods: DigitalGoods = serde_json::from_value(json!({
            "article": [
                { "merchantArticleId": "20873", "serial": "37084024", "secret": "87a04a49d" }
            ],
            "bonus": [
                { "serial": "XXXX-XX-XX", "secret": "0000-1111-2222-3333-4444" }
            ]
        }))
        .unwrap();

        assert_eq!(goods.article().len(), 1);
        assert_eq!(goods.article()[0].merchant_article_id(), Some("20873"));
        assert_eq!(goods.bonus().len(), 1);
        assert_eq!(goods.bonus()[0].merchant_article_id(), None);
        assert!(!goods.is_empty());
    }

    #[test]
    fn test_digital_goods_missing_lists() {
        let goods: DigitalGoods = serde_json::from_value(json!({})).unwrap();
        assert!(goods.is_empty());
    }

    #[test]
    fn test_digital_goods_missing_secret() {
        let result = serde_json::from_value::<DigitalGoods>(json!({
            "article": [{ "serial": "37084024" }]
        }));
        assert!(result.unwrap_err().to_string().contains("secret"));
    }
}
