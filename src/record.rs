//! The synthetic user record written to each CSV row.

use serde::{Deserialize, Serialize};

/// Column order of the CSV header.
pub const HEADER: [&str; 3] = ["username", "allowedServices", "defaultService"];

/// One generated user and its service entitlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Two capitalized words, unique within a batch.
    pub username: String,
    /// Services the user may access, in sampling order.
    #[serde(with = "comma_joined")]
    pub allowed_services: Vec<String>,
    /// Primary service; always one of `allowed_services`.
    pub default_service: String,
}

impl UserRecord {
    /// Returns `true` when the default service is among the allowed ones.
    #[must_use]
    pub fn default_is_allowed(&self) -> bool {
        self.allowed_services.iter().any(|s| *s == self.default_service)
    }

    /// Returns the first service listed more than once, if any.
    #[must_use]
    pub fn duplicate_service(&self) -> Option<&str> {
        self.allowed_services
            .iter()
            .enumerate()
            .find(|&(i, s)| self.allowed_services[..i].contains(s))
            .map(|(_, s)| s.as_str())
    }
}

/// Serializes a list of services as a single comma-joined field.
mod comma_joined {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(services: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&services.join(","))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let joined = String::deserialize(deserializer)?;
        if joined.is_empty() {
            return Ok(Vec::new());
        }
        Ok(joined.split(',').map(str::to_string).collect())
    }
}
