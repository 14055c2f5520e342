//! 工时日志条目实体
//!
//! effort_log_id / task_type_id / project_id 指向外部系统维护的表，
//! 这里只作普通外键列保存。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "effort_log_line_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
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
    pub sum: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_effort_log_line_item(
        self,
    ) -> crate::models::effort_logs::entities::EffortLogLineItem {
        use crate::models::effort_logs::entities::EffortLogLineItem;
        use chrono::{DateTime, Utc};

        EffortLogLineItem {
            id: self.id,
            effort_log_id: self.effort_log_id,
            task_type_id: self.task_type_id,
            project_id: self.project_id,
            course_id: self.course_id,
            day1: self.day1,
            day2: self.day2,
            day3: self.day3,
            day4: self.day4,
            day5: self.day5,
            day6: self.day6,
            day7: self.day7,
            sum: self.sum,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
