use serde::{Deserialize, Serialize};

/// 一周内各天的投入工时合计，空缺的天按 0 计
pub fn total_effort(days: &[Option<f64>]) -> f64 {
    days.iter().flatten().sum()
}

/// 工时日志条目：一周最多七天的投入记录
///
/// sum 是派生值，只有显式调用 determine_total_effort 才会重算，
/// 修改 day 字段本身不会触发。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffortLogLineItem {
    pub id: i64,
    // 所属周报
    pub effort_log_id: i64,
    pub task_type_id: Option<i64>,
    pub project_id: Option<i64>,
    pub course_id: Option<i64>,
    pub day1: Option<f64>,
    pub day2: Option<f64>,
    pub day3: Option<f64>,
    pub day4: Option<f64>,
    pub day5: Option<f64>,
    pub day6: Option<f64>,
    pub day7: Option<f64>,
    // 七天合计，派生值
    pub sum: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EffortLogLineItem {
    /// 七个 day 字段按顺序展开
    pub fn days(&self) -> [Option<f64>; 7] {
        [
            self.day1, self.day2, self.day3, self.day4, self.day5, self.day6, self.day7,
        ]
    }

    /// 重算 sum
    ///
    /// 调用方必须在读取或持久化 sum 前显式触发，否则读到的是上次的旧值。
    pub fn determine_total_effort(&mut self) {
        self.sum = total_effort(&self.days());
    }
}
