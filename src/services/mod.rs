//! 业务逻辑层
//!
//! 每个领域一个服务结构体，操作按文件拆分。

pub mod assignments;
pub mod effort_logs;

pub use assignments::AssignmentService;
pub use effort_logs::EffortLogService;
