//! 业务数据模型
//!
//! 与 entity 模块的数据库实体分离，供 storage / services 层交换数据。

pub mod assignments;
pub mod courses;
pub mod deliverables;
pub mod effort_logs;
pub mod grades;
pub mod teams;
