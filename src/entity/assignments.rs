//! 作业定义实体
//!
//! assignment_order 由系统维护：创建时追加，重排时批量改写，
//! 任何请求都不能直接写入该列。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub task_number: Option<String>,
    pub maximum_score: f64,
    pub is_team_deliverable: bool,
    pub is_submittable: bool,
    pub due_date: Option<i64>,
    pub assignment_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::deliverables::Entity")]
    Deliverables,
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::deliverables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliverables.def()
    }
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use crate::models::assignments::entities::Assignment;
        use chrono::{DateTime, Utc};

        Assignment {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            short_name: self.short_name,
            task_number: self.task_number,
            maximum_score: self.maximum_score,
            is_team_deliverable: self.is_team_deliverable,
            is_submittable: self.is_submittable,
            due_date: self
                .due_date
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            assignment_order: self.assignment_order,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
