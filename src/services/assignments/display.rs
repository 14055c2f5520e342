use super::AssignmentService;
use crate::errors::{CourseFlowError, Result};

/// 带类型的作业展示名称
///
/// 称谓取自课程评分规则，课程未配置时固定用 "deliverable"。
pub async fn name_with_type(service: &AssignmentService, assignment_id: i64) -> Result<String> {
    let assignment = service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| CourseFlowError::not_found(format!("作业不存在: {assignment_id}")))?;
    let grading_rule = service
        .storage()
        .get_grading_rule_by_course(assignment.course_id)
        .await?;

    Ok(assignment.name_with_type(grading_rule.as_ref()))
}

/// 展示用满分文本，非 points 评分方式统一折算为 "100"
pub async fn formatted_maximum_score(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<String> {
    let assignment = service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| CourseFlowError::not_found(format!("作业不存在: {assignment_id}")))?;
    let grading_rule = service
        .storage()
        .get_grading_rule_by_course(assignment.course_id)
        .await?;

    Ok(assignment.formatted_maximum_score(grading_rule.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::services::AssignmentService;
    use crate::storage::sea_orm_storage::test_support::*;

    fn essay(course_id: i64) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            course_id: Some(course_id),
            name: Some("Essay".to_string()),
            task_number: Some("2".to_string()),
            maximum_score: Some(85.0),
            is_team_deliverable: Some(true),
            is_submittable: Some(true),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_name_uses_course_nomenclature() {
        let storage = Arc::new(memory_storage().await);
        let course = seed_course(&storage, "Studio", 2026, "fall").await;
        seed_grading_rule(&storage, course, "points", "assignment").await;

        let service = AssignmentService::new(storage);
        let assignment = service.create_assignment(essay(course)).await.unwrap();

        assert_eq!(
            service.name_with_type(assignment.id).await.unwrap(),
            "Task 2. Essay (Team assignment)"
        );
    }

    #[tokio::test]
    async fn test_name_defaults_to_deliverable_without_rule() {
        let storage = Arc::new(memory_storage().await);
        let course = seed_course(&storage, "Studio", 2026, "fall").await;

        let service = AssignmentService::new(storage);
        let mut request = essay(course);
        request.task_number = None;
        request.is_team_deliverable = Some(false);
        let assignment = service.create_assignment(request).await.unwrap();

        assert_eq!(
            service.name_with_type(assignment.id).await.unwrap(),
            "Essay (Individual deliverable)"
        );
    }

    #[tokio::test]
    async fn test_maximum_score_normalized_under_letter_grading() {
        let storage = Arc::new(memory_storage().await);
        let letter_course = seed_course(&storage, "Studio", 2026, "fall").await;
        let points_course = seed_course(&storage, "Seminar", 2026, "fall").await;
        let plain_course = seed_course(&storage, "Lecture", 2026, "fall").await;
        seed_grading_rule(&storage, letter_course, "letter", "assignment").await;
        seed_grading_rule(&storage, points_course, "points", "assignment").await;

        let service = AssignmentService::new(storage);
        let letter = service.create_assignment(essay(letter_course)).await.unwrap();
        let points = service.create_assignment(essay(points_course)).await.unwrap();
        let plain = service.create_assignment(essay(plain_course)).await.unwrap();

        assert_eq!(
            service.formatted_maximum_score(letter.id).await.unwrap(),
            "100"
        );
        assert_eq!(
            service.formatted_maximum_score(points.id).await.unwrap(),
            "85"
        );
        // 未配置评分规则时同样返回原始满分
        assert_eq!(
            service.formatted_maximum_score(plain.id).await.unwrap(),
            "85"
        );
    }
}
