use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Number).string().null())
                    .col(ColumnDef::new(Courses::Year).integer().not_null())
                    .col(ColumnDef::new(Courses::Semester).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建评分规则表（每门课程最多一条）
        manager
            .create_table(
                Table::create()
                    .table(GradingRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradingRules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GradingRules::CourseId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GradingRules::GradeType).string().not_null())
                    .col(
                        ColumnDef::new(GradingRules::Nomenclature)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GradingRules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GradingRules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GradingRules::Table, GradingRules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课注册表
        manager
            .create_table(
                Table::create()
                    .table(CourseRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseRegistrations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseRegistrations::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseRegistrations::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseRegistrations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseRegistrations::Table, CourseRegistrations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseRegistrations::Table, CourseRegistrations::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建团队表
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teams::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teams::Table, Teams::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建团队成员关联表
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeamMembers::TeamId).big_integer().not_null())
                    .col(ColumnDef::new(TeamMembers::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeamMembers::Table, TeamMembers::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeamMembers::Table, TeamMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业定义表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Name).string().null())
                    .col(ColumnDef::new(Assignments::ShortName).string().null())
                    .col(ColumnDef::new(Assignments::TaskNumber).string().null())
                    .col(
                        ColumnDef::new(Assignments::MaximumScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::IsTeamDeliverable)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::IsSubmittable)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::DueDate).big_integer().null())
                    .col(
                        ColumnDef::new(Assignments::AssignmentOrder)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交物表
        manager
            .create_table(
                Table::create()
                    .table(Deliverables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deliverables::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Deliverables::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deliverables::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deliverables::TeamId).big_integer().null())
                    .col(ColumnDef::new(Deliverables::CreatorId).big_integer().null())
                    .col(
                        ColumnDef::new(Deliverables::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deliverables::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Deliverables::Table, Deliverables::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Deliverables::Table, Deliverables::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::CourseId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Grades::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Grades::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::Score).double().not_null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建工时日志条目表
        manager
            .create_table(
                Table::create()
                    .table(EffortLogLineItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EffortLogLineItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EffortLogLineItems::EffortLogId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EffortLogLineItems::TaskTypeId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EffortLogLineItems::ProjectId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EffortLogLineItems::CourseId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(EffortLogLineItems::Day1).double().null())
                    .col(ColumnDef::new(EffortLogLineItems::Day2).double().null())
                    .col(ColumnDef::new(EffortLogLineItems::Day3).double().null())
                    .col(ColumnDef::new(EffortLogLineItems::Day4).double().null())
                    .col(ColumnDef::new(EffortLogLineItems::Day5).double().null())
                    .col(ColumnDef::new(EffortLogLineItems::Day6).double().null())
                    .col(ColumnDef::new(EffortLogLineItems::Day7).double().null())
                    .col(
                        ColumnDef::new(EffortLogLineItems::Sum)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(EffortLogLineItems::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EffortLogLineItems::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 作业表索引：课程内排序是热点查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_course_id")
                    .table(Assignments::Table)
                    .col(Assignments::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_course_order")
                    .table(Assignments::Table)
                    .col(Assignments::CourseId)
                    .col(Assignments::AssignmentOrder)
                    .to_owned(),
            )
            .await?;

        // 提交物表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deliverables_assignment_id")
                    .table(Deliverables::Table)
                    .col(Deliverables::AssignmentId)
                    .to_owned(),
            )
            .await?;

        // 成绩表索引：按 (课程, 作业, 学生) 查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_course_assignment_student")
                    .table(Grades::Table)
                    .col(Grades::CourseId)
                    .col(Grades::AssignmentId)
                    .col(Grades::StudentId)
                    .to_owned(),
            )
            .await?;

        // 选课注册表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_registrations_user_id")
                    .table(CourseRegistrations::Table)
                    .col(CourseRegistrations::UserId)
                    .to_owned(),
            )
            .await?;

        // 工时日志条目表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_effort_log_line_items_effort_log_id")
                    .table(EffortLogLineItems::Table)
                    .col(EffortLogLineItems::EffortLogId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EffortLogLineItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Deliverables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseRegistrations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GradingRules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Number,
    Year,
    Semester,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GradingRules {
    #[sea_orm(iden = "grading_rules")]
    Table,
    Id,
    CourseId,
    GradeType,
    Nomenclature,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseRegistrations {
    #[sea_orm(iden = "course_registrations")]
    Table,
    Id,
    UserId,
    CourseId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    CourseId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TeamMembers {
    #[sea_orm(iden = "team_members")]
    Table,
    Id,
    TeamId,
    UserId,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CourseId,
    Name,
    ShortName,
    TaskNumber,
    MaximumScore,
    IsTeamDeliverable,
    IsSubmittable,
    DueDate,
    AssignmentOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Deliverables {
    #[sea_orm(iden = "deliverables")]
    Table,
    Id,
    AssignmentId,
    CourseId,
    TeamId,
    CreatorId,
    SubmittedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    CourseId,
    AssignmentId,
    StudentId,
    Score,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EffortLogLineItems {
    #[sea_orm(iden = "effort_log_line_items")]
    Table,
    Id,
    EffortLogId,
    TaskTypeId,
    ProjectId,
    CourseId,
    Day1,
    Day2,
    Day3,
    Day4,
    Day5,
    Day6,
    Day7,
    Sum,
    CreatedAt,
    UpdatedAt,
}
