use super::AssignmentService;
use crate::errors::{CourseFlowError, Result};
use crate::models::deliverables::entities::Deliverable;
use crate::models::grades::entities::Grade;

/// 学生在该作业下的提交物
///
/// 团队作业先解析学生在作业所属课程内的团队，再取团队的提交物；
/// 学生没有团队时返回 None。个人作业直接按创建者取。
pub async fn get_student_deliverable(
    service: &AssignmentService,
    assignment_id: i64,
    student_id: i64,
) -> Result<Option<Deliverable>> {
    let assignment = service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| CourseFlowError::not_found(format!("作业不存在: {assignment_id}")))?;

    if assignment.is_team_deliverable {
        match service
            .storage()
            .get_student_team_in_course(student_id, assignment.course_id)
            .await?
        {
            Some(team) => {
                service
                    .storage()
                    .get_deliverable_by_team(assignment_id, team.id)
                    .await
            }
            None => Ok(None),
        }
    } else {
        service
            .storage()
            .get_deliverable_by_creator(assignment_id, student_id)
            .await
    }
}

/// 学生在该作业下的成绩，按 (课程, 作业, 学生) 查询
pub async fn get_student_grade(
    service: &AssignmentService,
    assignment_id: i64,
    student_id: i64,
) -> Result<Option<Grade>> {
    let assignment = service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| CourseFlowError::not_found(format!("作业不存在: {assignment_id}")))?;

    service
        .storage()
        .get_grade(assignment.course_id, assignment_id, student_id)
        .await
}
