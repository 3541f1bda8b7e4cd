//! Resource endpoint modules.
//!
//! Each module adds the typed methods for one REST resource to [`crate::Client`].

pub mod agents;
pub mod dispatches;
pub mod entries;
pub mod forms;
pub mod projects;
