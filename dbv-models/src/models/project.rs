//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Admin, EntitySnippet};

/// A project groups the dispatches sent out under one data-collection effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub dispatches: Vec<EntitySnippet>,
    pub created_by: Option<Admin>,
    pub modified_by: Option<Admin>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
