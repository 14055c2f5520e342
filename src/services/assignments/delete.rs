use tracing::info;

use super::AssignmentService;
use crate::errors::Result;

/// 删除作业
///
/// 已有提交物的作业不能删除，存储层会以 ConstraintViolation 拒绝
/// 并保持记录不变；这里原样上抛，不做静默忽略。
pub async fn delete_assignment(service: &AssignmentService, assignment_id: i64) -> Result<bool> {
    let deleted = service.storage().delete_assignment(assignment_id).await?;
    if deleted {
        info!(assignment_id, "作业已删除");
    }
    Ok(deleted)
}

/// 删除前置检查：作业名下没有任何提交物时返回 true
pub async fn verify_deliverables_submitted(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<bool> {
    let count = service
        .storage()
        .count_deliverables_for_assignment(assignment_id)
        .await?;
    Ok(count == 0)
}
