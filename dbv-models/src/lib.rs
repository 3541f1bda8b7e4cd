//! DataBeaver Models - Typed records for the DataBeaver REST API resources.
//!
//! Every type here is a read-only DTO deserialized from API responses. The
//! client never creates, mutates, or deletes these entities.
//!
//! Dispatches and entries come in two shapes: a reference form whose
//! relations are plain ids (returned by list endpoints) and a populated form
//! whose relations are embedded records (returned by singular lookups). Both
//! share a common base struct flattened into each variant.

mod de;
pub mod models;

// Re-export key types
pub use models::agent::{Agent, AgentGroup, AgentLocation};
pub use models::common::{Admin, EntitySnippet, RoleSnippet};
pub use models::dispatch::{Dispatch, DispatchBase, DispatchStatus, PopulatedDispatch, Recipients};
pub use models::entry::{Coordinates, Entry, EntryAnswer, EntryBase, EntryLocation, PopulatedEntry};
pub use models::form::Form;
pub use models::project::Project;
