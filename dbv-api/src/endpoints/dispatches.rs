//! Dispatch endpoints.
//!
//! Singular lookups return [`PopulatedDispatch`] with form, project, and
//! recipients embedded; the list endpoint returns [`Dispatch`] with ids only.
//! This mirrors what the server sends.

use dbv_core::constants::resources::DISPATCHES;
use dbv_core::error::DbvResult;
use dbv_models::{Dispatch, PopulatedDispatch};

use crate::facade::Client;
use crate::query::RequestOptions;
use crate::response::Page;

impl Client {
    /// Get a dispatch by id, relations expanded.
    pub async fn get_dispatch_by_id(&self, id: &str) -> DbvResult<Option<PopulatedDispatch>> {
        self.api().get_by_id(DISPATCHES, id).await
    }

    /// Get the first dispatch with this exact name, relations expanded.
    pub async fn get_dispatch_by_name(&self, name: &str) -> DbvResult<Option<PopulatedDispatch>> {
        self.api().get_one_by(DISPATCHES, "name", name).await
    }

    /// List dispatches, relations as ids.
    pub async fn get_dispatches(&self, options: &RequestOptions) -> DbvResult<Page<Dispatch>> {
        self.api().get_by(DISPATCHES, &options.to_params()).await
    }
}
