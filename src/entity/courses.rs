//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub number: Option<String>,
    pub year: i32,
    pub semester: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::course_registrations::Entity")]
    CourseRegistrations,
    #[sea_orm(has_many = "super::teams::Entity")]
    Teams,
    #[sea_orm(has_one = "super::grading_rules::Entity")]
    GradingRule,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::course_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseRegistrations.def()
    }
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teams.def()
    }
}

impl Related<super::grading_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradingRule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, Semester};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            name: self.name,
            number: self.number,
            year: self.year,
            semester: self
                .semester
                .parse::<Semester>()
                .unwrap_or(Semester::Fall),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
