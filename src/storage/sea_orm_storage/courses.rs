//! 课程/评分规则/选课注册/团队存储操作
//!
//! 这些表由外部的课程与用户系统维护，这里只提供读取。

use super::SeaOrmStorage;
use crate::entity::course_registrations::{
    Column as RegistrationColumn, Entity as CourseRegistrations,
};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::grading_rules::{Column as GradingRuleColumn, Entity as GradingRules};
use crate::entity::team_members::{Column as TeamMemberColumn, Entity as TeamMembers};
use crate::entity::teams::{Column as TeamColumn, Entity as Teams};
use crate::errors::{CourseFlowError, Result};
use crate::models::courses::entities::{Course, GradingRule};
use crate::models::teams::entities::Team;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 课程评分规则，未配置时返回 None
    pub async fn get_grading_rule_by_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<GradingRule>> {
        let result = GradingRules::find()
            .filter(GradingRuleColumn::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询评分规则失败: {e}")))?;

        Ok(result.map(|m| m.into_grading_rule()))
    }

    /// 学生注册过的全部课程
    pub async fn list_registered_courses_impl(&self, student_id: i64) -> Result<Vec<Course>> {
        let registrations = CourseRegistrations::find()
            .filter(RegistrationColumn::UserId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询选课记录失败: {e}")))?;

        let course_ids: Vec<i64> = registrations.into_iter().map(|r| r.course_id).collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .order_by_asc(CourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 学生在某课程内所属的团队
    pub async fn get_student_team_in_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Team>> {
        let memberships = TeamMembers::find()
            .filter(TeamMemberColumn::UserId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询团队成员失败: {e}")))?;

        let team_ids: Vec<i64> = memberships.into_iter().map(|m| m.team_id).collect();
        if team_ids.is_empty() {
            return Ok(None);
        }

        let team = Teams::find()
            .filter(TeamColumn::Id.is_in(team_ids))
            .filter(TeamColumn::CourseId.eq(course_id))
            .order_by_asc(TeamColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询团队失败: {e}")))?;

        Ok(team.map(|m| m.into_team()))
    }
}
