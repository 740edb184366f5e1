//! Account avatar

use crate::error::{require, require_non_empty, ApiError, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Avatar of an account: where the picture lives and when it last changed
///
/// Two avatars are equal when their URLs match exactly and their timestamps
/// denote the same instant, whatever UTC offset each one was recorded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AvatarJson")]
pub struct Avatar {
    url: String,
    #[serde(rename = "ts")]
    timestamp: DateTime<FixedOffset>,
}

impl Avatar {
    /// Create a new avatar, failing when the URL is empty
    pub fn new(url: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Result<Self> {
        let url = url.into();
        require_non_empty("url", &url)?;
        Ok(Self { url, timestamp })
    }

    /// URL of the picture
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Time of the last change
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}

impl PartialEq for Avatar {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.timestamp == other.timestamp
    }
}

impl Eq for Avatar {}

impl Hash for Avatar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
        // Offset-independent, so it agrees with `eq`
        self.timestamp.timestamp().hash(state);
        self.timestamp.timestamp_subsec_nanos().hash(state);
    }
}

/// Wire shape; every field optional so missing ones are reported by name
#[derive(Deserialize)]
struct AvatarJson {
    url: Option<String>,
    ts: Option<DateTime<FixedOffset>>,
}

impl TryFrom<AvatarJson> for Avatar {
    type Error = ApiError;

    fn try_from(json: AvatarJson) -> Result<Self> {
        let url = require("url", json.url)?;
        let timestamp = require("ts", json.ts)?;
        Avatar::new(url, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(avatar: &Avatar) -> u64 {
        let mut hasher = DefaultHasher::new();
        avatar.hash(&mut hasher);
        hasher.finish()
    }

    fn ts(value: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(value).unwrap()
    }

    #[test]
    fn test_avatar_creation() {
        let avatar = Avatar::new(
            "https://avatars.example.com/42.png",
            ts("2015-03-14T09:26:53+03:00"),
        )
        .unwrap();

        assert_eq!(avatar.url(), "https://avatars.example.com/42.png");
        assert_eq!(avatar.timestamp(), ts("2015-03-14T09:26:53+03:00"));
    }

    #[test]
    fn test_avatar_empty_url() {
        let result = Avatar::new("", ts("2015-03-14T09:26:53+03:00"));
        assert!(matches!(result, Err(ApiError::MissingField { field: "url" })));
    }

    #[test]
    fn test_avatar_temporal_equality() {
        let moscow = Avatar::new("https://a.example/1.png", ts("2015-03-14T09:26:53+03:00")).unwrap();
        let utc = Avatar::new("https://a.example/1.png", ts("2015-03-14T06:26:53Z")).unwrap();

        assert_eq!(moscow, utc);
        assert_eq!(hash_of(&moscow), hash_of(&utc));
    }

    #[test]
    fn test_avatar_inequality() {
        let first = Avatar::new("https://a.example/1.png", ts("2015-03-14T06:26:53Z")).unwrap();
        let later = Avatar::new("https://a.example/1.png", ts("2015-03-14T06:26:54Z")).unwrap();
        let other_url = Avatar::new("https://a.example/2.png", ts("2015-03-14T06:26:53Z")).unwrap();

        assert_ne!(first, later);
        assert_ne!(first, other_url);
    }

    #[test]
    fn test_avatar_from_json() {
        let avatar: Avatar = serde_json::from_value(json!({
            "url": "https://avatars.example.com/42.png",
            "ts": "2013-05-05T14:40:00.000+04:00"
        }))
        .unwrap();

        assert_eq!(avatar.url(), "https://avatars.example.com/42.png");
        assert_eq!(avatar.timestamp(), ts("2013-05-05T10:40:00Z"));
    }

    #[test]
    fn test_avatar_json_missing_fields() {
        let missing_ts = serde_json::from_value::<Avatar>(json!({
            "url": "https://avatars.example.com/42.png"
        }));
        assert!(missing_ts.unwrap_err().to_string().contains("ts"));

        let empty_url = serde_json::from_value::<Avatar>(json!({
            "url": "",
            "ts": "2013-05-05T14:40:00.000+04:00"
        }));
        assert!(empty_url.is_err());
    }

    #[test]
    fn test_avatar_to_json() {
        let avatar = Avatar::new("https://a.example/1.png", ts("2015-03-14T09:26:53+03:00")).unwrap();
        let value = serde_json::to_value(&avatar).unwrap();

        assert_eq!(value["url"], "https://a.example/1.png");
        assert_eq!(value["ts"], "2015-03-14T09:26:53+03:00");

        let parsed: Avatar = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, avatar);
    }
}
