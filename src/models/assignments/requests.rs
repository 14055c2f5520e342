use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 创建作业请求
///
/// 必填字段也用 Option 承载，以便区分"缺失"和"给了非法值"，
/// 校验失败直接报给调用方，不做静默修正。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAssignmentRequest {
    pub course_id: Option<i64>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub task_number: Option<String>,
    pub maximum_score: Option<f64>,
    pub is_team_deliverable: Option<bool>,
    pub is_submittable: Option<bool>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式
}

/// 校验通过后的创建数据，assignment_order 由存储层分配
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub course_id: i64,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub task_number: Option<String>,
    pub maximum_score: f64,
    pub is_team_deliverable: bool,
    pub is_submittable: bool,
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateAssignmentRequest {
    /// 字段校验
    ///
    /// - course_id 必填
    /// - maximum_score 必填且 >= 0
    /// - is_team_deliverable / is_submittable 必须显式给出 true/false
    pub fn into_validated(self) -> Result<NewAssignment, &'static str> {
        let course_id = self.course_id.ok_or("course_id is required")?;
        let maximum_score = self.maximum_score.ok_or("maximum_score is required")?;
        if maximum_score < 0.0 {
            return Err("maximum_score must be greater than or equal to 0");
        }
        let is_team_deliverable = self
            .is_team_deliverable
            .ok_or("is_team_deliverable must be true or false")?;
        let is_submittable = self
            .is_submittable
            .ok_or("is_submittable must be true or false")?;

        Ok(NewAssignment {
            course_id,
            name: self.name,
            short_name: self.short_name,
            task_number: self.task_number,
            maximum_score,
            is_team_deliverable,
            is_submittable,
            due_date: self.due_date,
        })
    }
}

/// 更新作业请求
///
/// None 表示不修改；course_id 和 assignment_order 不可更新。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub task_number: Option<String>,
    pub maximum_score: Option<f64>,
    pub is_team_deliverable: Option<bool>,
    pub is_submittable: Option<bool>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式
}

impl UpdateAssignmentRequest {
    /// 对给出的字段套用与创建相同的规则
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(maximum_score) = self.maximum_score
            && maximum_score < 0.0
        {
            return Err("maximum_score must be greater than or equal to 0");
        }
        Ok(())
    }
}
