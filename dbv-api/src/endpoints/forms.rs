//! Form endpoints.

use dbv_core::constants::resources::FORMS;
use dbv_core::error::DbvResult;
use dbv_models::Form;

use crate::facade::Client;
use crate::query::RequestOptions;
use crate::response::Page;

impl Client {
    /// Get a form by id. `None` if it does not exist.
    pub async fn get_form_by_id(&self, id: &str) -> DbvResult<Option<Form>> {
        self.api().get_by_id(FORMS, id).await
    }

    /// Get the first form with this exact name.
    pub async fn get_form_by_name(&self, name: &str) -> DbvResult<Option<Form>> {
        self.api().get_one_by(FORMS, "name", name).await
    }

    /// List forms.
    pub async fn get_forms(&self, options: &RequestOptions) -> DbvResult<Page<Form>> {
        self.api().get_by(FORMS, &options.to_params()).await
    }
}
