use super::EffortLogService;
use crate::errors::Result;
use crate::models::effort_logs::{
    entities::{EffortLogLineItem, total_effort},
    requests::{CreateEffortLogLineItemRequest, UpdateEffortLogLineItemRequest},
};

/// 记录一周工时
///
/// sum 不随字段变动自动维护，持久化前在这里显式重算一次。
pub async fn record_line_item(
    service: &EffortLogService,
    req: CreateEffortLogLineItemRequest,
) -> Result<EffortLogLineItem> {
    let sum = total_effort(&req.days());
    service.storage().create_effort_log_line_item(req, sum).await
}

/// 整周替换工时记录，同样在持久化前重算 sum
pub async fn update_line_item(
    service: &EffortLogService,
    line_item_id: i64,
    req: UpdateEffortLogLineItemRequest,
) -> Result<Option<EffortLogLineItem>> {
    let sum = total_effort(&req.days());
    service
        .storage()
        .update_effort_log_line_item(line_item_id, req, sum)
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::models::effort_logs::requests::{
        CreateEffortLogLineItemRequest, UpdateEffortLogLineItemRequest,
    };
    use crate::services::EffortLogService;
    use crate::storage::sea_orm_storage::test_support::*;

    #[tokio::test]
    async fn test_record_computes_sum_over_present_days() {
        let storage = Arc::new(memory_storage().await);
        let service = EffortLogService::new(storage);

        let created = service
            .record_line_item(CreateEffortLogLineItemRequest {
                effort_log_id: 1,
                day1: Some(2.0),
                day3: Some(5.0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.sum, 7.0);
    }

    #[tokio::test]
    async fn test_record_empty_week_sums_to_zero() {
        let storage = Arc::new(memory_storage().await);
        let service = EffortLogService::new(storage);

        let created = service
            .record_line_item(CreateEffortLogLineItemRequest {
                effort_log_id: 1,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.sum, 0.0);
    }

    #[tokio::test]
    async fn test_update_recomputes_sum() {
        let storage = Arc::new(memory_storage().await);
        let service = EffortLogService::new(storage);

        let created = service
            .record_line_item(CreateEffortLogLineItemRequest {
                effort_log_id: 1,
                day1: Some(2.0),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = service
            .update_line_item(
                created.id,
                UpdateEffortLogLineItemRequest {
                    day1: Some(1.5),
                    day2: Some(2.5),
                    day7: Some(4.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.sum, 8.0);
        // 持久化的 sum 与重新读取的一致
        let fetched = service.get_line_item(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.sum, 8.0);
    }
}
