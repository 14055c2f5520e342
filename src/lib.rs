//! CourseFlow - 课程管理核心库
//!
//! 课程作业定义、成绩关联与每周工时记录的业务核心，
//! 供外部 Web 表现层调用。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
