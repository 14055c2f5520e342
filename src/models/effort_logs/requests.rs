use serde::Deserialize;

/// 创建工时日志条目请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEffortLogLineItemRequest {
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
}

impl CreateEffortLogLineItemRequest {
    pub fn days(&self) -> [Option<f64>; 7] {
        [
            self.day1, self.day2, self.day3, self.day4, self.day5, self.day6, self.day7,
        ]
    }
}

/// 更新工时日志条目请求
///
/// 学生重新提交整周数据：七个 day 字段整体替换，None 即清空当天。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEffortLogLineItemRequest {
    pub day1: Option<f64>,
    pub day2: Option<f64>,
    pub day3: Option<f64>,
    pub day4: Option<f64>,
    pub day5: Option<f64>,
    pub day6: Option<f64>,
    pub day7: Option<f64>,
}

impl UpdateEffortLogLineItemRequest {
    pub fn days(&self) -> [Option<f64>; 7] {
        [
            self.day1, self.day2, self.day3, self.day4, self.day5, self.day6, self.day7,
        ]
    }
}
