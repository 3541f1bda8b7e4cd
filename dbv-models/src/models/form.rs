//! Form entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Admin;

/// A form definition that agents fill in for a dispatch.
///
/// `form_data` holds the field definitions exactly as the server stores
/// them; their schema is owned by the platform's form builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub form_data: Option<Vec<serde_json::Map<String, serde_json::Value>>>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub dispatched: bool,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    pub sector: Option<String>,
    pub created_by: Option<Admin>,
    pub modified_by: Option<Admin>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
