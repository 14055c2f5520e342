use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    // 团队所属课程
    pub course_id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
