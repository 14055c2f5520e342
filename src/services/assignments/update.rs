use super::AssignmentService;
use crate::errors::{CourseFlowError, Result};
use crate::models::assignments::{entities::Assignment, requests::UpdateAssignmentRequest};

/// 更新作业字段
///
/// 给出的字段沿用创建时的校验规则；assignment_order 不在
/// 可更新范围内，重排走 reposition。
pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> Result<Option<Assignment>> {
    req.validate().map_err(CourseFlowError::validation)?;

    service
        .storage()
        .update_assignment(assignment_id, req)
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::errors::CourseFlowError;
    use crate::models::assignments::requests::{
        CreateAssignmentRequest, UpdateAssignmentRequest,
    };
    use crate::services::AssignmentService;
    use crate::storage::sea_orm_storage::test_support::*;

    #[tokio::test]
    async fn test_update_rejects_negative_score() {
        let storage = Arc::new(memory_storage().await);
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        let service = AssignmentService::new(storage);

        let assignment = service
            .create_assignment(CreateAssignmentRequest {
                course_id: Some(course),
                name: Some("Essay".to_string()),
                maximum_score: Some(100.0),
                is_team_deliverable: Some(false),
                is_submittable: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = service
            .update_assignment(
                assignment.id,
                UpdateAssignmentRequest {
                    maximum_score: Some(-1.0),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(CourseFlowError::Validation(_))));

        // 原值未被改动
        let unchanged = service
            .update_assignment(assignment.id, UpdateAssignmentRequest::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.maximum_score, 100.0);
    }
}
