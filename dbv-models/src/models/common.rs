//! Small records shared by several resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bare reference to another entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySnippet {
    pub id: String,
}

/// Role attached to an admin account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleSnippet {
    pub name: String,
}

/// Platform administrator, recorded as creator/modifier on most resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub role: RoleSnippet,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_login: Option<String>,
    pub profile_picture: Option<String>,
    pub phone: Option<String>,
}
