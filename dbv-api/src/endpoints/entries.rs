//! Entry endpoints. Entries have no lookup by field.

use dbv_core::constants::resources::ENTRIES;
use dbv_core::error::DbvResult;
use dbv_models::{Entry, PopulatedEntry};

use crate::facade::Client;
use crate::query::RequestOptions;
use crate::response::Page;

impl Client {
    /// Get an entry by id, relations expanded.
    pub async fn get_entry_by_id(&self, id: &str) -> DbvResult<Option<PopulatedEntry>> {
        self.api().get_by_id(ENTRIES, id).await
    }

    /// List entries, relations as ids.
    pub async fn get_entries(&self, options: &RequestOptions) -> DbvResult<Page<Entry>> {
        self.api().get_by(ENTRIES, &options.to_params()).await
    }
}
