//! Agent (field worker) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A field agent who receives dispatches and submits entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub groups: Vec<AgentGroup>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub location: Vec<AgentLocation>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Named group of agents, addressable as a dispatch recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentGroup {
    pub id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub colour: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Area an agent operates in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentLocation {
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zone: Option<String>,
}
