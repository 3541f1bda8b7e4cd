//! Entry (submission) entity models.
//!
//! Same split as dispatches: [`Entry`] carries relation ids and comes from
//! list endpoints, [`PopulatedEntry`] embeds the related records and comes
//! from id lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::dispatch::Dispatch;
use super::form::Form;
use super::project::Project;

/// Fields shared by both entry shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryBase {
    pub id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub location: EntryLocation,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub answers: Vec<EntryAnswer>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Where an entry was captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryLocation {
    pub address: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub lga: Option<String>,
    pub city: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// GPS position of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    // The API spells this key "lattitude".
    #[serde(rename = "lattitude", alias = "latitude")]
    pub latitude: f64,
}

/// One answered question. `answer` is free-form JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryAnswer {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub answer: serde_json::Value,
}

/// Entry with relations as ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(flatten)]
    pub base: EntryBase,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub dispatch: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub form: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub project: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub agent: String,
}

/// Entry with relations expanded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulatedEntry {
    #[serde(flatten)]
    pub base: EntryBase,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub dispatch: Dispatch,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub form: Form,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub project: Project,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub agent: Agent,
}
