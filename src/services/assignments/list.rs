use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::entities::{Assignment, AssignmentScope};
use crate::models::courses::entities::{AcademicTerm, Course};

/// 课程内作业列表，默认排序 (task_number, assignment_order)
pub async fn list_course_assignments(
    service: &AssignmentService,
    course_id: i64,
) -> Result<Vec<Assignment>> {
    service.storage().list_assignments_by_course(course_id).await
}

/// 课程内需要提交的作业，按 id 排序
pub async fn fetch_submittable_assignments_by_course(
    service: &AssignmentService,
    course_id: i64,
) -> Result<Vec<Assignment>> {
    service
        .storage()
        .list_submittable_assignments_by_course(course_id)
        .await
}

/// 学生视角的作业列表
///
/// 先按范围筛出学生注册的课程，再取这些课程的全部作业，
/// 按 (course_id, id) 排序而不是课程内默认排序。
pub async fn list_assignments_for_student(
    service: &AssignmentService,
    student_id: i64,
    scope: AssignmentScope,
) -> Result<Vec<Assignment>> {
    let courses = service.storage().list_registered_courses(student_id).await?;
    let course_ids = courses_in_scope(courses, scope, AcademicTerm::current());
    service
        .storage()
        .list_assignments_by_courses(&course_ids)
        .await
}

/// 按范围筛选课程：current 取与参照学期相同的课程，past 取更早的
pub(crate) fn courses_in_scope(
    courses: Vec<Course>,
    scope: AssignmentScope,
    reference: AcademicTerm,
) -> Vec<i64> {
    courses
        .into_iter()
        .filter(|course| match scope {
            AssignmentScope::All => true,
            AssignmentScope::Current => course.term() == reference,
            AssignmentScope::Past => course.term() < reference,
        })
        .map(|course| course.id)
        .collect()
}
