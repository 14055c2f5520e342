//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{Column, Entity as Grades};
use crate::errors::{CourseFlowError, Result};
use crate::models::grades::entities::Grade;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

impl SeaOrmStorage {
    /// 按 (课程, 作业, 学生) 获取成绩
    pub async fn get_grade_impl(
        &self,
        course_id: i64,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }
}
