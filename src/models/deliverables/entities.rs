use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: i64,
    // 所属作业
    pub assignment_id: i64,
    // 冗余课程 ID，便于按课程清理
    pub course_id: i64,
    // 团队提交物携带 team_id
    pub team_id: Option<i64>,
    // 个人提交物携带 creator_id
    pub creator_id: Option<i64>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
