//! USTC Catalog - 课程目录与排课数据服务
//!
//! 从静态 JSON 缓存导入教务数据到关系数据库，并提供只读 REST API。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `importer`: 静态缓存同步与导入
//! - `models`: API 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 日志与运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod importer;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
