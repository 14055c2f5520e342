pub mod list;
pub mod record;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::effort_logs::{
    entities::EffortLogLineItem,
    requests::{CreateEffortLogLineItemRequest, UpdateEffortLogLineItemRequest},
};
use crate::storage::Storage;

pub struct EffortLogService {
    storage: Arc<dyn Storage>,
}

impl EffortLogService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn record_line_item(
        &self,
        req: CreateEffortLogLineItemRequest,
    ) -> Result<EffortLogLineItem> {
        record::record_line_item(self, req).await
    }

    pub async fn update_line_item(
        &self,
        line_item_id: i64,
        req: UpdateEffortLogLineItemRequest,
    ) -> Result<Option<EffortLogLineItem>> {
        record::update_line_item(self, line_item_id, req).await
    }

    pub async fn get_line_item(&self, line_item_id: i64) -> Result<Option<EffortLogLineItem>> {
        list::get_line_item(self, line_item_id).await
    }

    pub async fn list_line_items_for_log(
        &self,
        effort_log_id: i64,
    ) -> Result<Vec<EffortLogLineItem>> {
        list::list_line_items_for_log(self, effort_log_id).await
    }
}
