//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 导入工具与 API 服务共用这里的连接逻辑。

mod courses;
mod overview;
mod sections;
mod semesters;
mod teachers;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{CatalogError, Result};
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
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按给定数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CatalogError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 包装一个已建立（且已迁移）的连接
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CatalogError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CatalogError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CatalogError::database_connection(format!("无法连接到数据库: {e}")))
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
            Err(CatalogError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    courses::CourseDetail,
    schedules::ScheduleItem,
    sections::{SectionDetail, SectionSummary},
    semesters::Semester,
    system::CatalogCounts,
    teachers::TeacherDetail,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 概览
    async fn count_catalog(&self) -> Result<CatalogCounts> {
        self.count_catalog_impl().await
    }

    async fn list_recent_semesters(&self, limit: u64) -> Result<Vec<Semester>> {
        self.list_recent_semesters_impl(limit).await
    }

    // 学期模块
    async fn list_semesters(&self) -> Result<Vec<Semester>> {
        self.list_semesters_impl().await
    }

    async fn get_semester_by_jw_id(&self, jw_id: i64) -> Result<Option<Semester>> {
        self.get_semester_by_jw_id_impl(jw_id).await
    }

    async fn list_semester_sections(&self, jw_id: i64) -> Result<Option<Vec<SectionSummary>>> {
        self.list_semester_sections_impl(jw_id).await
    }

    // 课程与教学班模块
    async fn get_course_by_jw_id(&self, jw_id: i64) -> Result<Option<CourseDetail>> {
        self.get_course_by_jw_id_impl(jw_id).await
    }

    async fn get_section_by_jw_id(&self, jw_id: i64) -> Result<Option<SectionDetail>> {
        self.get_section_by_jw_id_impl(jw_id).await
    }

    async fn list_section_schedules(&self, jw_id: i64) -> Result<Option<Vec<ScheduleItem>>> {
        self.list_section_schedules_impl(jw_id).await
    }

    // 教师模块
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<TeacherDetail>> {
        self.get_teacher_by_id_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("catalog.db").ok().as_deref(),
            Some("sqlite://catalog.db?mode=rwc")
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://localhost/catalog")
                .ok()
                .as_deref(),
            Some("postgres://localhost/catalog")
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("redis://localhost")
                .unwrap_err()
                .code(),
            "E001"
        );
    }
}
