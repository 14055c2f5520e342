use super::EffortLogService;
use crate::errors::Result;
use crate::models::effort_logs::entities::EffortLogLineItem;

/// 通过 ID 获取条目
pub async fn get_line_item(
    service: &EffortLogService,
    line_item_id: i64,
) -> Result<Option<EffortLogLineItem>> {
    service
        .storage()
        .get_effort_log_line_item_by_id(line_item_id)
        .await
}

/// 周报下的全部条目
pub async fn list_line_items_for_log(
    service: &EffortLogService,
    effort_log_id: i64,
) -> Result<Vec<EffortLogLineItem>> {
    service
        .storage()
        .list_effort_log_line_items_by_log(effort_log_id)
        .await
}
