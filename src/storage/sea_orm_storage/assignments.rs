//! 作业存储操作
//!
//! assignment_order 的两条维护路径都在这里：创建时在事务内取
//! 课程当前最大值加一追加；重排时在事务内按序列整体改写。

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{CourseFlowError, Result};
use crate::models::assignments::{
    entities::Assignment,
    requests::{NewAssignment, UpdateAssignmentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建作业，课程内追加到队尾
    pub async fn create_assignment_impl(&self, data: NewAssignment) -> Result<Assignment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("开启事务失败: {e}")))?;

        // 取课程内当前最大的 assignment_order
        let last = Assignments::find()
            .filter(Column::CourseId.eq(data.course_id))
            .order_by_desc(Column::AssignmentOrder)
            .one(&txn)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询作业顺序失败: {e}")))?;
        let next_order = last.map(|m| m.assignment_order).unwrap_or(0) + 1;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            course_id: Set(data.course_id),
            name: Set(data.name),
            short_name: Set(data.short_name),
            task_number: Set(data.task_number),
            maximum_score: Set(data.maximum_score),
            is_team_deliverable: Set(data.is_team_deliverable),
            is_submittable: Set(data.is_submittable),
            due_date: Set(data.due_date.map(|dt| dt.timestamp())),
            assignment_order: Set(next_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("创建作业失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        // 先检查作业是否存在
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(Some(name));
        }

        if let Some(short_name) = update.short_name {
            model.short_name = Set(Some(short_name));
        }

        if let Some(task_number) = update.task_number {
            model.task_number = Set(Some(task_number));
        }

        if let Some(maximum_score) = update.maximum_score {
            model.maximum_score = Set(maximum_score);
        }

        if let Some(is_team_deliverable) = update.is_team_deliverable {
            model.is_team_deliverable = Set(is_team_deliverable);
        }

        if let Some(is_submittable) = update.is_submittable {
            model.is_submittable = Set(is_submittable);
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(Some(due_date.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(id).await
    }

    /// 删除作业，存在提交物时拒绝
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("开启事务失败: {e}")))?;

        let deliverable_count = self.count_deliverables_on(&txn, id).await?;
        if deliverable_count > 0 {
            return Err(CourseFlowError::constraint_violation(format!(
                "作业 {id} 已有 {deliverable_count} 份提交物，不能删除"
            )));
        }

        let result = Assignments::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("删除作业失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量重排：assignment_order 改写为 ID 在序列中的位置（从 1 起）
    ///
    /// 不校验 ID 是否同属一门课程，调用方负责。全部改写在一个
    /// 事务内完成，任何一条失败整体回滚。
    pub async fn reposition_assignments_impl(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        for (position, id) in ids.iter().enumerate() {
            let model = ActiveModel {
                id: Set(*id),
                assignment_order: Set(position as i32 + 1),
                updated_at: Set(now),
                ..Default::default()
            };
            model.update(&txn).await.map_err(|e| {
                CourseFlowError::database_operation(format!("重排作业 {id} 失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 课程内作业列表，默认排序 (task_number, assignment_order)
    pub async fn list_assignments_by_course_impl(&self, course_id: i64) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::TaskNumber)
            .order_by_asc(Column::AssignmentOrder)
            .all(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 跨课程作业列表，按 (course_id, id) 排序，不走课程内默认排序
    pub async fn list_assignments_by_courses_impl(
        &self,
        course_ids: &[i64],
    ) -> Result<Vec<Assignment>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = Assignments::find()
            .filter(Column::CourseId.is_in(course_ids.to_vec()))
            .order_by_asc(Column::CourseId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 课程内需要提交的作业，按 id 排序
    pub async fn list_submittable_assignments_by_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::IsSubmittable.eq(true))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assignment()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::errors::CourseFlowError;
    use crate::models::assignments::requests::{NewAssignment, UpdateAssignmentRequest};

    fn new_assignment(course_id: i64, name: &str) -> NewAssignment {
        NewAssignment {
            course_id,
            name: Some(name.to_string()),
            short_name: None,
            task_number: None,
            maximum_score: 100.0,
            is_team_deliverable: false,
            is_submittable: true,
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_appends_order_within_course() {
        let storage = memory_storage().await;
        let course_a = seed_course(&storage, "Studio", 2026, "fall").await;
        let course_b = seed_course(&storage, "Seminar", 2026, "fall").await;

        let a1 = storage
            .create_assignment_impl(new_assignment(course_a, "A1"))
            .await
            .unwrap();
        let a2 = storage
            .create_assignment_impl(new_assignment(course_a, "A2"))
            .await
            .unwrap();
        // 另一门课程的序列独立
        let b1 = storage
            .create_assignment_impl(new_assignment(course_b, "B1"))
            .await
            .unwrap();
        let a3 = storage
            .create_assignment_impl(new_assignment(course_a, "A3"))
            .await
            .unwrap();

        assert_eq!(a1.assignment_order, 1);
        assert_eq!(a2.assignment_order, 2);
        assert_eq!(a3.assignment_order, 3);
        assert_eq!(b1.assignment_order, 1);
    }

    #[tokio::test]
    async fn test_reposition_rewrites_orders_to_sequence() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Studio", 2026, "fall").await;

        let a1 = storage
            .create_assignment_impl(new_assignment(course, "A1"))
            .await
            .unwrap();
        let a2 = storage
            .create_assignment_impl(new_assignment(course, "A2"))
            .await
            .unwrap();
        let a3 = storage
            .create_assignment_impl(new_assignment(course, "A3"))
            .await
            .unwrap();

        storage
            .reposition_assignments_impl(&[a3.id, a1.id, a2.id])
            .await
            .unwrap();

        let ordered = [a3.id, a1.id, a2.id];
        let mut last_order = 0;
        for id in ordered {
            let order = storage
                .get_assignment_by_id_impl(id)
                .await
                .unwrap()
                .unwrap()
                .assignment_order;
            assert!(order > last_order);
            last_order = order;
        }
    }

    #[tokio::test]
    async fn test_reposition_unknown_id_rolls_back() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Studio", 2026, "fall").await;

        let a1 = storage
            .create_assignment_impl(new_assignment(course, "A1"))
            .await
            .unwrap();
        let a2 = storage
            .create_assignment_impl(new_assignment(course, "A2"))
            .await
            .unwrap();

        let result = storage
            .reposition_assignments_impl(&[a2.id, 9999, a1.id])
            .await;
        assert!(result.is_err());

        // 整体回滚，原顺序保持不变
        let kept = storage
            .get_assignment_by_id_impl(a2.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kept.assignment_order, 2);
    }

    #[tokio::test]
    async fn test_delete_without_deliverables_succeeds() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        let assignment = storage
            .create_assignment_impl(new_assignment(course, "A1"))
            .await
            .unwrap();

        let deleted = storage.delete_assignment_impl(assignment.id).await.unwrap();
        assert!(deleted);
        assert!(
            storage
                .get_assignment_by_id_impl(assignment.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_with_deliverable_is_rejected() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        let student = seed_user(&storage, "alice").await;
        let assignment = storage
            .create_assignment_impl(new_assignment(course, "A1"))
            .await
            .unwrap();
        seed_deliverable(&storage, assignment.id, course, None, Some(student)).await;

        let result = storage.delete_assignment_impl(assignment.id).await;
        assert!(matches!(
            result,
            Err(CourseFlowError::ConstraintViolation(_))
        ));

        // 记录仍在
        assert!(
            storage
                .get_assignment_by_id_impl(assignment.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_course_listing_orders_by_task_then_order() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Studio", 2026, "fall").await;

        let mut first = new_assignment(course, "Late task");
        first.task_number = Some("2".to_string());
        let mut second = new_assignment(course, "Early task");
        second.task_number = Some("1".to_string());
        let mut third = new_assignment(course, "Early task follow-up");
        third.task_number = Some("1".to_string());

        storage.create_assignment_impl(first).await.unwrap();
        storage.create_assignment_impl(second).await.unwrap();
        storage.create_assignment_impl(third).await.unwrap();

        let listed = storage.list_assignments_by_course_impl(course).await.unwrap();
        let names: Vec<_> = listed.iter().map(|a| a.name.clone().unwrap()).collect();
        assert_eq!(
            names,
            vec!["Early task", "Early task follow-up", "Late task"]
        );
    }

    #[tokio::test]
    async fn test_cross_course_listing_orders_by_course_then_id() {
        let storage = memory_storage().await;
        let course_a = seed_course(&storage, "Studio", 2026, "fall").await;
        let course_b = seed_course(&storage, "Seminar", 2026, "fall").await;

        // 交错创建并加上会干扰默认排序的 task_number
        let mut b1 = new_assignment(course_b, "B1");
        b1.task_number = Some("9".to_string());
        let b1 = storage.create_assignment_impl(b1).await.unwrap();
        let a1 = storage
            .create_assignment_impl(new_assignment(course_a, "A1"))
            .await
            .unwrap();
        let b2 = storage
            .create_assignment_impl(new_assignment(course_b, "B2"))
            .await
            .unwrap();

        let listed = storage
            .list_assignments_by_courses_impl(&[course_b, course_a])
            .await
            .unwrap();
        let ids: Vec<_> = listed.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![a1.id, b1.id, b2.id]);
    }

    #[tokio::test]
    async fn test_submittable_listing_filters_and_orders_by_id() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Studio", 2026, "fall").await;

        let submittable = storage
            .create_assignment_impl(new_assignment(course, "Homework"))
            .await
            .unwrap();
        let mut participation = new_assignment(course, "Participation");
        participation.is_submittable = false;
        storage.create_assignment_impl(participation).await.unwrap();
        let submittable_2 = storage
            .create_assignment_impl(new_assignment(course, "Essay"))
            .await
            .unwrap();

        let listed = storage
            .list_submittable_assignments_by_course_impl(course)
            .await
            .unwrap();
        let ids: Vec<_> = listed.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![submittable.id, submittable_2.id]);
    }

    #[tokio::test]
    async fn test_update_patches_fields() {
        let storage = memory_storage().await;
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        let assignment = storage
            .create_assignment_impl(new_assignment(course, "A1"))
            .await
            .unwrap();

        let update = UpdateAssignmentRequest {
            name: Some("Renamed".to_string()),
            maximum_score: Some(50.0),
            ..Default::default()
        };
        let updated = storage
            .update_assignment_impl(assignment.id, update)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("Renamed"));
        assert_eq!(updated.maximum_score, 50.0);
        // 未提及的字段不变
        assert_eq!(updated.assignment_order, assignment.assignment_order);
        assert!(updated.is_submittable);
    }

    #[tokio::test]
    async fn test_update_missing_assignment_returns_none() {
        let storage = memory_storage().await;
        let updated = storage
            .update_assignment_impl(42, UpdateAssignmentRequest::default())
            .await
            .unwrap();
        assert!(updated.is_none());
    }
}
