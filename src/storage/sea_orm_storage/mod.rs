//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod courses;
mod deliverables;
mod effort_logs;
mod grades;

use crate::config::AppConfig;
use crate::errors::{CourseFlowError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CourseFlowError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CourseFlowError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CourseFlowError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CourseFlowError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CourseFlowError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{NewAssignment, UpdateAssignmentRequest},
    },
    courses::entities::{Course, GradingRule},
    deliverables::entities::Deliverable,
    effort_logs::{
        entities::EffortLogLineItem,
        requests::{CreateEffortLogLineItemRequest, UpdateEffortLogLineItemRequest},
    },
    grades::entities::Grade,
    teams::entities::Team,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 作业模块
    async fn create_assignment(&self, data: NewAssignment) -> Result<Assignment> {
        self.create_assignment_impl(data).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn reposition_assignments(&self, ids: &[i64]) -> Result<()> {
        self.reposition_assignments_impl(ids).await
    }

    async fn list_assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_course_impl(course_id).await
    }

    async fn list_assignments_by_courses(&self, course_ids: &[i64]) -> Result<Vec<Assignment>> {
        self.list_assignments_by_courses_impl(course_ids).await
    }

    async fn list_submittable_assignments_by_course(
        &self,
        course_id: i64,
    ) -> Result<Vec<Assignment>> {
        self.list_submittable_assignments_by_course_impl(course_id)
            .await
    }

    // 提交物模块
    async fn count_deliverables_for_assignment(&self, assignment_id: i64) -> Result<u64> {
        self.count_deliverables_for_assignment_impl(assignment_id)
            .await
    }

    async fn get_deliverable_by_team(
        &self,
        assignment_id: i64,
        team_id: i64,
    ) -> Result<Option<Deliverable>> {
        self.get_deliverable_by_team_impl(assignment_id, team_id)
            .await
    }

    async fn get_deliverable_by_creator(
        &self,
        assignment_id: i64,
        creator_id: i64,
    ) -> Result<Option<Deliverable>> {
        self.get_deliverable_by_creator_impl(assignment_id, creator_id)
            .await
    }

    // 课程/注册/团队模块
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_grading_rule_by_course(&self, course_id: i64) -> Result<Option<GradingRule>> {
        self.get_grading_rule_by_course_impl(course_id).await
    }

    async fn list_registered_courses(&self, student_id: i64) -> Result<Vec<Course>> {
        self.list_registered_courses_impl(student_id).await
    }

    async fn get_student_team_in_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Team>> {
        self.get_student_team_in_course_impl(student_id, course_id)
            .await
    }

    // 成绩模块
    async fn get_grade(
        &self,
        course_id: i64,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Grade>> {
        self.get_grade_impl(course_id, assignment_id, student_id)
            .await
    }

    // 工时日志模块
    async fn create_effort_log_line_item(
        &self,
        req: CreateEffortLogLineItemRequest,
        sum: f64,
    ) -> Result<EffortLogLineItem> {
        self.create_effort_log_line_item_impl(req, sum).await
    }

    async fn get_effort_log_line_item_by_id(&self, id: i64) -> Result<Option<EffortLogLineItem>> {
        self.get_effort_log_line_item_by_id_impl(id).await
    }

    async fn update_effort_log_line_item(
        &self,
        id: i64,
        update: UpdateEffortLogLineItemRequest,
        sum: f64,
    ) -> Result<Option<EffortLogLineItem>> {
        self.update_effort_log_line_item_impl(id, update, sum).await
    }

    async fn list_effort_log_line_items_by_log(
        &self,
        effort_log_id: i64,
    ) -> Result<Vec<EffortLogLineItem>> {
        self.list_effort_log_line_items_by_log_impl(effort_log_id)
            .await
    }
}
