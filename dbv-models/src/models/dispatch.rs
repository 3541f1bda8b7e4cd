//! Dispatch entity models.
//!
//! A dispatch sends a form to a set of agents under a project. List endpoints
//! return [`Dispatch`], whose relations are ids; singular lookups return
//! [`PopulatedDispatch`], whose relations are embedded records. Scalar fields
//! live in [`DispatchBase`] and are identical in both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::agent::{Agent, AgentGroup};
use super::common::{Admin, EntitySnippet};
use super::form::Form;
use super::project::Project;

/// Lifecycle state of a dispatch.
///
/// States this client does not know yet decode as `Unknown` instead of
/// failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Completed,
    Dispatched,
    Draft,
    Suspended,
    #[serde(other)]
    Unknown,
}

/// Fields shared by both dispatch shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatchBase {
    pub id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub dispatch_type: String,
    pub status: Option<DispatchStatus>,
    pub instructions: Option<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub colour: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub total_expected_entries: u64,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub amount_per_entry: f64,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub total_budget: f64,
    pub created_by: Option<Admin>,
    pub modified_by: Option<Admin>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Who a dispatch was sent to: individual agents and whole groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(deserialize = "A: Deserialize<'de> + Default, G: Deserialize<'de> + Default")
)]
pub struct Recipients<A, G> {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub agents: Vec<A>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub agent_groups: Vec<G>,
}

/// Dispatch with relations as ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dispatch {
    #[serde(flatten)]
    pub base: DispatchBase,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub form: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub project: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub recipients: Recipients<EntitySnippet, EntitySnippet>,
}

/// Dispatch with relations expanded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulatedDispatch {
    #[serde(flatten)]
    pub base: DispatchBase,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub form: Form,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub project: Project,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub recipients: Recipients<Agent, AgentGroup>,
}
