//! 提交物存储操作

use super::SeaOrmStorage;
use crate::entity::deliverables::{Column, Entity as Deliverables};
use crate::errors::{CourseFlowError, Result};
use crate::models::deliverables::entities::Deliverable;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

impl SeaOrmStorage {
    /// 统计作业下的提交物数量
    pub async fn count_deliverables_for_assignment_impl(&self, assignment_id: i64) -> Result<u64> {
        self.count_deliverables_on(&self.db, assignment_id).await
    }

    /// 同上，但在给定连接/事务上执行
    pub(crate) async fn count_deliverables_on<C: ConnectionTrait>(
        &self,
        conn: &C,
        assignment_id: i64,
    ) -> Result<u64> {
        Deliverables::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .count(conn)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("统计提交物失败: {e}")))
    }

    /// 团队提交物
    ///
    /// 预期每个团队最多一份；若有多份，取 id 最小的一条。
    pub async fn get_deliverable_by_team_impl(
        &self,
        assignment_id: i64,
        team_id: i64,
    ) -> Result<Option<Deliverable>> {
        let result = Deliverables::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::TeamId.eq(team_id))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询提交物失败: {e}")))?;

        Ok(result.map(|m| m.into_deliverable()))
    }

    /// 个人提交物
    pub async fn get_deliverable_by_creator_impl(
        &self,
        assignment_id: i64,
        creator_id: i64,
    ) -> Result<Option<Deliverable>> {
        let result = Deliverables::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::CreatorId.eq(creator_id))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询提交物失败: {e}")))?;

        Ok(result.map(|m| m.into_deliverable()))
    }
}
