use serde::{Deserialize, Serialize};

use crate::models::courses::entities::{GradeType, GradingRule, Nomenclature};

// 学生视角的课程范围
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentScope {
    All,     // 所有注册过的课程
    Current, // 仅当前学期
    Past,    // 仅往期学期
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 所属课程
    pub course_id: i64,
    // 名称，可为空
    pub name: Option<String>,
    // 短名称，可为空
    pub short_name: Option<String>,
    // 任务分组编号，可为空
    pub task_number: Option<String>,
    // 满分，必填且非负
    pub maximum_score: f64,
    // 团队作业还是个人作业
    pub is_team_deliverable: bool,
    // 是否需要提交（课堂参与、工时日志等不需要）
    pub is_submittable: bool,
    // 截止时间，可为空
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    // 课程内展示顺序，系统维护
    pub assignment_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    /// 带类型的展示名称，如 "Task 2. Essay (Team assignment)"
    ///
    /// 称谓取自课程评分规则；课程未配置评分方式时固定用 "deliverable"。
    pub fn name_with_type(&self, grading_rule: Option<&GradingRule>) -> String {
        let nomenclature = grading_rule
            .map(|rule| rule.nomenclature)
            .unwrap_or(Nomenclature::Deliverable);
        format_assignment_name(
            self.is_team_deliverable,
            nomenclature.as_str(),
            self.task_number.as_deref(),
            self.name.as_deref().unwrap_or(""),
        )
    }

    /// 展示用满分文本
    ///
    /// 非 points 评分方式下作业统一折算到 100 分制。
    pub fn formatted_maximum_score(&self, grading_rule: Option<&GradingRule>) -> String {
        format_maximum_score(self.maximum_score, grading_rule.map(|rule| rule.grade_type))
    }
}

/// 组装作业展示名称的纯函数
///
/// 格式：`"<Task N. ><name> (<Team|Individual> <nomenclature>)"`，
/// task_number 为空白时省略前缀。
pub fn format_assignment_name(
    is_team_deliverable: bool,
    nomenclature: &str,
    task_number: Option<&str>,
    name: &str,
) -> String {
    let task = match task_number {
        Some(number) if !number.trim().is_empty() => format!("Task {number}. "),
        _ => String::new(),
    };
    let kind = if is_team_deliverable {
        "Team"
    } else {
        "Individual"
    };
    format!("{task}{name} ({kind} {nomenclature})")
}

/// 展示用满分文本的纯函数
///
/// points 评分或课程未配置评分方式时返回满分本身，
/// 其余评分方式统一返回 "100"。
pub fn format_maximum_score(maximum_score: f64, grade_type: Option<GradeType>) -> String {
    match grade_type {
        None | Some(GradeType::Points) => maximum_score.to_string(),
        Some(_) => "100".to_string(),
    }
}
