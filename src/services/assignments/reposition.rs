use tracing::info;

use super::AssignmentService;
use crate::errors::Result;

/// 批量重排作业
///
/// 调用方给出受影响集合的完整目标顺序，按位置整体改写
/// assignment_order。不校验 ID 是否同属一门课程。
pub async fn reposition_assignments(service: &AssignmentService, ids: &[i64]) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }

    service.storage().reposition_assignments(ids).await?;
    info!(count = ids.len(), "作业顺序已重排");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::services::AssignmentService;
    use crate::storage::sea_orm_storage::test_support::*;

    fn request(course_id: i64, name: &str) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            course_id: Some(course_id),
            name: Some(name.to_string()),
            maximum_score: Some(100.0),
            is_team_deliverable: Some(false),
            is_submittable: Some(true),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_reposition_applies_supplied_sequence() {
        let storage = Arc::new(memory_storage().await);
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        let service = AssignmentService::new(storage);

        let a1 = service.create_assignment(request(course, "A1")).await.unwrap();
        let a2 = service.create_assignment(request(course, "A2")).await.unwrap();
        let a3 = service.create_assignment(request(course, "A3")).await.unwrap();

        service
            .reposition_assignments(&[a3.id, a1.id, a2.id])
            .await
            .unwrap();

        let listed = service.list_course_assignments(course).await.unwrap();
        let names: Vec<_> = listed.iter().map(|a| a.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["A3", "A1", "A2"]);
    }

    #[tokio::test]
    async fn test_reposition_empty_sequence_is_noop() {
        let storage = Arc::new(memory_storage().await);
        let service = AssignmentService::new(storage);
        service.reposition_assignments(&[]).await.unwrap();
    }
}
