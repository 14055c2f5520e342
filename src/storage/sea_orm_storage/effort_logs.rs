//! 工时日志条目存储操作
//!
//! sum 是派生列，这一层只负责原样写入调用方算好的值。

use super::SeaOrmStorage;
use crate::entity::effort_log_line_items::{ActiveModel, Column, Entity as EffortLogLineItems};
use crate::errors::{CourseFlowError, Result};
use crate::models::effort_logs::{
    entities::EffortLogLineItem,
    requests::{CreateEffortLogLineItemRequest, UpdateEffortLogLineItemRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建工时日志条目
    pub async fn create_effort_log_line_item_impl(
        &self,
        req: CreateEffortLogLineItemRequest,
        sum: f64,
    ) -> Result<EffortLogLineItem> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            effort_log_id: Set(req.effort_log_id),
            task_type_id: Set(req.task_type_id),
            project_id: Set(req.project_id),
            course_id: Set(req.course_id),
            day1: Set(req.day1),
            day2: Set(req.day2),
            day3: Set(req.day3),
            day4: Set(req.day4),
            day5: Set(req.day5),
            day6: Set(req.day6),
            day7: Set(req.day7),
            sum: Set(sum),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            CourseFlowError::database_operation(format!("创建工时日志条目失败: {e}"))
        })?;

        Ok(result.into_effort_log_line_item())
    }

    /// 通过 ID 获取工时日志条目
    pub async fn get_effort_log_line_item_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<EffortLogLineItem>> {
        let result = EffortLogLineItems::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                CourseFlowError::database_operation(format!("查询工时日志条目失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_effort_log_line_item()))
    }

    /// 整周替换 day 字段并写入新 sum
    pub async fn update_effort_log_line_item_impl(
        &self,
        id: i64,
        update: UpdateEffortLogLineItemRequest,
        sum: f64,
    ) -> Result<Option<EffortLogLineItem>> {
        // 先检查条目是否存在
        let existing = self.get_effort_log_line_item_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            day1: Set(update.day1),
            day2: Set(update.day2),
            day3: Set(update.day3),
            day4: Set(update.day4),
            day5: Set(update.day5),
            day6: Set(update.day6),
            day7: Set(update.day7),
            sum: Set(sum),
            updated_at: Set(now),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            CourseFlowError::database_operation(format!("更新工时日志条目失败: {e}"))
        })?;

        self.get_effort_log_line_item_by_id_impl(id).await
    }

    /// 周报下的全部条目
    pub async fn list_effort_log_line_items_by_log_impl(
        &self,
        effort_log_id: i64,
    ) -> Result<Vec<EffortLogLineItem>> {
        let results = EffortLogLineItems::find()
            .filter(Column::EffortLogId.eq(effort_log_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseFlowError::database_operation(format!("查询工时日志条目失败: {e}"))
            })?;

        Ok(results
            .into_iter()
            .map(|m| m.into_effort_log_line_item())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::models::effort_logs::requests::{
        CreateEffortLogLineItemRequest, UpdateEffortLogLineItemRequest,
    };

    #[tokio::test]
    async fn test_create_and_list_line_items() {
        let storage = memory_storage().await;

        let req = CreateEffortLogLineItemRequest {
            effort_log_id: 7,
            day1: Some(2.0),
            day3: Some(5.0),
            ..Default::default()
        };
        let created = storage
            .create_effort_log_line_item_impl(req, 7.0)
            .await
            .unwrap();
        assert_eq!(created.sum, 7.0);
        assert_eq!(created.day3, Some(5.0));
        assert_eq!(created.day2, None);

        let listed = storage
            .list_effort_log_line_items_by_log_impl(7)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        // 其他周报不可见
        assert!(
            storage
                .list_effort_log_line_items_by_log_impl(8)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_update_replaces_whole_week() {
        let storage = memory_storage().await;

        let req = CreateEffortLogLineItemRequest {
            effort_log_id: 7,
            day1: Some(2.0),
            day2: Some(3.0),
            ..Default::default()
        };
        let created = storage
            .create_effort_log_line_item_impl(req, 5.0)
            .await
            .unwrap();

        let update = UpdateEffortLogLineItemRequest {
            day5: Some(4.0),
            ..Default::default()
        };
        let updated = storage
            .update_effort_log_line_item_impl(created.id, update, 4.0)
            .await
            .unwrap()
            .unwrap();

        // 未给出的天被清空
        assert_eq!(updated.day1, None);
        assert_eq!(updated.day2, None);
        assert_eq!(updated.day5, Some(4.0));
        assert_eq!(updated.sum, 4.0);
    }

    #[tokio::test]
    async fn test_update_missing_line_item_returns_none() {
        let storage = memory_storage().await;
        let updated = storage
            .update_effort_log_line_item_impl(42, UpdateEffortLogLineItemRequest::default(), 0.0)
            .await
            .unwrap();
        assert!(updated.is_none());
    }
}
