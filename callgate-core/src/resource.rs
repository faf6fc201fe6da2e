//! Traits every downstream record implements so the forwarder can
//! authorize and project it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::tenant::CustomerId;

/// The ownership tuple: identifier, owning tenant, soft-delete marker.
pub trait Owned {
    fn id(&self) -> Uuid;

    fn customer_id(&self) -> CustomerId;

    /// `None` is the live sentinel; any timestamp means deleted.
    fn tm_delete(&self) -> Option<DateTime<Utc>>;

    fn is_deleted(&self) -> bool {
        self.tm_delete().is_some()
    }
}

/// Records assigned to a single agent ("my calls", "my chatrooms").
pub trait AgentOwned: Owned {
    fn owner_id(&self) -> Option<Uuid>;
}

/// Projection of an internal record to its externally visible shape.
///
/// Must be total: defined for every value the downstream can return.
pub trait IntoWebhook {
    type Message: Serialize + Send;

    fn to_webhook_message(&self) -> Self::Message;
}

/// Serde helpers for soft-delete markers.
///
/// Older records use the text sentinel `9999-01-01 00:00:00.000000` for
/// "not deleted"; it reads as `None` alongside `null` and a missing field.
pub mod soft_delete {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::clock::PAGE_TOKEN_FORMAT;

    pub const LEGACY_LIVE_SENTINEL: &str = "9999-01-01 00:00:00.000000";

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() || raw == LEGACY_LIVE_SENTINEL {
            return Ok(None);
        }

        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Some(at.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(raw, PAGE_TOKEN_FORMAT)
            .map(|t| Some(t.and_utc()))
            .map_err(serde::de::Error::custom)
    }
}
