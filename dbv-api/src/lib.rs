//! DataBeaver API - Typed HTTP client for the DataBeaver REST API.
//!
//! Two layers:
//! - [`ApiClient`] is the transport. It builds `/v1/` URLs, attaches bearer
//!   auth, issues the GET, and normalizes the `{ success, data, _metadata }`
//!   envelope into an entity-or-absence, a [`Page`], or the raw [`Envelope`].
//! - [`Client`] is the facade: one method per resource and access pattern,
//!   each delegating to the transport with a fixed path and lookup field.
//!
//! A 404 on a singular lookup and a `success: false` list response are
//! normal outcomes (`Ok(None)` and [`Page::empty`]). Every other failure is
//! returned as a [`DbvError`].

pub mod client;
pub mod endpoints;
pub mod facade;
pub mod query;
pub mod response;

// Re-export key types
pub use client::ApiClient;
pub use dbv_core::{ApiConfig, DbvError, DbvResult, Environment};
pub use facade::Client;
pub use query::{QueryParams, RequestOptions};
pub use response::{Envelope, Metadata, Page, PageLinks};
