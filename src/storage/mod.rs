use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{NewAssignment, UpdateAssignmentRequest},
    },
    courses::entities::{Course, GradingRule},
    deliverables::entities::Deliverable,
    effort_logs::{
        entities::EffortLogLineItem,
        requests::{CreateEffortLogLineItemRequest, UpdateEffortLogLineItemRequest},
    },
    grades::entities::Grade,
    teams::entities::Team,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业管理方法
    // 创建作业，在同一事务内分配课程内的下一个 assignment_order
    async fn create_assignment(&self, data: NewAssignment) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 更新作业字段，assignment_order 不在可更新范围内
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业；存在提交物时以 ConstraintViolation 拒绝
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 批量重排：按给定序列改写 assignment_order，整体一个事务
    async fn reposition_assignments(&self, ids: &[i64]) -> Result<()>;
    // 课程内作业列表，默认排序 (task_number, assignment_order)
    async fn list_assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>>;
    // 跨课程作业列表，按 (course_id, id) 排序
    async fn list_assignments_by_courses(&self, course_ids: &[i64]) -> Result<Vec<Assignment>>;
    // 课程内可提交作业列表，按 id 排序
    async fn list_submittable_assignments_by_course(
        &self,
        course_id: i64,
    ) -> Result<Vec<Assignment>>;

    /// 提交物查询方法
    // 统计作业下的提交物数量
    async fn count_deliverables_for_assignment(&self, assignment_id: i64) -> Result<u64>;
    // 团队提交物（最多取一条）
    async fn get_deliverable_by_team(
        &self,
        assignment_id: i64,
        team_id: i64,
    ) -> Result<Option<Deliverable>>;
    // 个人提交物（最多取一条）
    async fn get_deliverable_by_creator(
        &self,
        assignment_id: i64,
        creator_id: i64,
    ) -> Result<Option<Deliverable>>;

    /// 课程/注册/团队协作方查询
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 课程评分规则，未配置时返回 None
    async fn get_grading_rule_by_course(&self, course_id: i64) -> Result<Option<GradingRule>>;
    // 学生注册过的全部课程
    async fn list_registered_courses(&self, student_id: i64) -> Result<Vec<Course>>;
    // 学生在某课程内所属的团队
    async fn get_student_team_in_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Team>>;

    /// 成绩查询
    // 按 (课程, 作业, 学生) 获取成绩
    async fn get_grade(
        &self,
        course_id: i64,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Grade>>;

    /// 工时日志条目方法
    // 创建条目，sum 由调用方算好传入
    async fn create_effort_log_line_item(
        &self,
        req: CreateEffortLogLineItemRequest,
        sum: f64,
    ) -> Result<EffortLogLineItem>;
    // 通过ID获取条目
    async fn get_effort_log_line_item_by_id(&self, id: i64) -> Result<Option<EffortLogLineItem>>;
    // 整周替换七个 day 字段并写入新 sum
    async fn update_effort_log_line_item(
        &self,
        id: i64,
        update: UpdateEffortLogLineItemRequest,
        sum: f64,
    ) -> Result<Option<EffortLogLineItem>>;
    // 周报下的全部条目
    async fn list_effort_log_line_items_by_log(
        &self,
        effort_log_id: i64,
    ) -> Result<Vec<EffortLogLineItem>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
