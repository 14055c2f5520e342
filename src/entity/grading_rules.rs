//! 评分规则实体
//!
//! 每门课程最多一条，缺失即视为课程未配置评分方式。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grading_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub grade_type: String,
    pub nomenclature: String,
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
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grading_rule(self) -> crate::models::courses::entities::GradingRule {
        use crate::models::courses::entities::{GradeType, GradingRule, Nomenclature};
        use chrono::{DateTime, Utc};

        GradingRule {
            id: self.id,
            course_id: self.course_id,
            grade_type: self
                .grade_type
                .parse::<GradeType>()
                .unwrap_or(GradeType::Points),
            nomenclature: self
                .nomenclature
                .parse::<Nomenclature>()
                .unwrap_or(Nomenclature::Deliverable),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
