//! Project endpoints.

use dbv_core::constants::resources::PROJECTS;
use dbv_core::error::DbvResult;
use dbv_models::Project;

use crate::facade::Client;
use crate::query::RequestOptions;
use crate::response::Page;

impl Client {
    /// Get a project by id. `None` if it does not exist.
    pub async fn get_project_by_id(&self, id: &str) -> DbvResult<Option<Project>> {
        self.api().get_by_id(PROJECTS, id).await
    }

    /// Get the first project with this exact name.
    pub async fn get_project_by_name(&self, name: &str) -> DbvResult<Option<Project>> {
        self.api().get_one_by(PROJECTS, "name", name).await
    }

    /// List projects.
    pub async fn get_projects(&self, options: &RequestOptions) -> DbvResult<Page<Project>> {
        self.api().get_by(PROJECTS, &options.to_params()).await
    }
}
