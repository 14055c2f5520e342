use tracing::info;

use super::AssignmentService;
use crate::errors::{CourseFlowError, Result};
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};

/// 创建作业
///
/// 字段校验失败直接报错；通过后由存储层在事务内分配课程内的
/// 下一个 assignment_order。
pub async fn create_assignment(
    service: &AssignmentService,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let data = req
        .into_validated()
        .map_err(CourseFlowError::validation)?;

    let assignment = service.storage().create_assignment(data).await?;
    info!(
        assignment_id = assignment.id,
        course_id = assignment.course_id,
        order = assignment.assignment_order,
        "作业已创建"
    );
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::errors::CourseFlowError;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::services::AssignmentService;
    use crate::storage::sea_orm_storage::test_support::*;

    fn request(course_id: i64) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            course_id: Some(course_id),
            name: Some("Essay".to_string()),
            maximum_score: Some(100.0),
            is_team_deliverable: Some(false),
            is_submittable: Some(true),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_order() {
        let storage = Arc::new(memory_storage().await);
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        let service = AssignmentService::new(storage);

        let first = service.create_assignment(request(course)).await.unwrap();
        let second = service.create_assignment(request(course)).await.unwrap();

        assert_eq!(first.assignment_order, 1);
        assert_eq!(second.assignment_order, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request() {
        let storage = Arc::new(memory_storage().await);
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        let service = AssignmentService::new(storage);

        let mut missing_score = request(course);
        missing_score.maximum_score = None;
        assert!(matches!(
            service.create_assignment(missing_score).await,
            Err(CourseFlowError::Validation(_))
        ));

        let mut negative_score = request(course);
        negative_score.maximum_score = Some(-10.0);
        assert!(matches!(
            service.create_assignment(negative_score).await,
            Err(CourseFlowError::Validation(_))
        ));

        let mut missing_flag = request(course);
        missing_flag.is_submittable = None;
        assert!(matches!(
            service.create_assignment(missing_flag).await,
            Err(CourseFlowError::Validation(_))
        ));
    }
}
