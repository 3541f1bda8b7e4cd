//! Agent endpoints.

use dbv_core::constants::resources::AGENTS;
use dbv_core::error::DbvResult;
use dbv_models::Agent;

use crate::facade::Client;
use crate::query::RequestOptions;
use crate::response::Page;

impl Client {
    pub async fn get_agent_by_id(&self, id: &str) -> DbvResult<Option<Agent>> {
        self.api().get_by_id(AGENTS, id).await
    }

    /// Agents are unique by email.
    pub async fn get_agent_by_email(&self, email: &str) -> DbvResult<Option<Agent>> {
        self.api().get_one_by(AGENTS, "email", email).await
    }

    pub async fn get_agents(&self, options: &RequestOptions) -> DbvResult<Page<Agent>> {
        self.api().get_by(AGENTS, &options.to_params()).await
    }
}
