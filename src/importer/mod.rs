//! 静态缓存导入
//!
//! 流程：学期列表 → 每个学期的教学班列表 → 每个教学班的课表数据。
//! 文件级、记录级问题只记录日志并跳过；学期列表缺失等致命问题中止整个导入。

pub mod fetch;
pub mod payload;
pub mod resolvers;
pub mod schedules;
pub mod sections;
pub mod semesters;

pub use fetch::fetch_static_cache;

use crate::errors::{CatalogError, Result};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 缓存目录中各类文件的位置
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn semester_list(&self) -> PathBuf {
        self.root.join("catalog/api/teach/semester/list.json")
    }

    pub fn section_list(&self, semester_jw_id: i64) -> PathBuf {
        self.root
            .join("catalog/api/teach/lesson/list-for-teach")
            .join(format!("{semester_jw_id}.json"))
    }

    pub fn schedule_datum(&self, section_jw_id: i64) -> PathBuf {
        self.root
            .join("jw/api/schedule-table/datum")
            .join(format!("{section_jw_id}.json"))
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::file_operation(format!("读取 {} 失败: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| CatalogError::serialization(format!("解析 {} 失败: {e}", path.display())))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionImportSummary {
    pub total: usize,
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleImportSummary {
    /// 本学期库中的教学班数
    pub sections: usize,
    pub imported: usize,
    pub missing_datum: usize,
    pub failed: usize,
    /// 写入的排课条数
    pub schedules: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SemesterReport {
    pub jw_id: i64,
    pub code: String,
    /// 教学班列表缺失时为 None
    pub sections: Option<SectionImportSummary>,
    pub schedules: Option<ScheduleImportSummary>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub semesters: Vec<SemesterReport>,
}

impl ImportReport {
    pub fn total_sections(&self) -> usize {
        self.semesters
            .iter()
            .filter_map(|s| s.sections.as_ref())
            .map(|s| s.created + s.updated)
            .sum()
    }

    pub fn total_schedules(&self) -> usize {
        self.semesters
            .iter()
            .filter_map(|s| s.schedules.as_ref())
            .map(|s| s.schedules)
            .sum()
    }
}

/// 从缓存根目录导入全部数据
///
/// 某个学期出错时记录日志并继续下一个学期，已提交的教学班保留。
pub async fn import_from_cache(db: &DatabaseConnection, cache_root: &Path) -> Result<ImportReport> {
    let layout = CacheLayout::new(cache_root);
    info!("开始从 {} 导入", layout.root().display());

    let semesters = semesters::load_semesters(db, &layout).await?;

    let mut report = ImportReport::default();
    for semester in &semesters {
        let mut semester_report = SemesterReport {
            jw_id: semester.jw_id,
            code: semester.code.clone(),
            ..Default::default()
        };

        match sections::load_sections(db, &layout, semester).await {
            Ok(summary) => semester_report.sections = summary,
            Err(e) => {
                error!("学期 {} 教学班导入中止: {}", semester.name, e);
                semester_report.error = Some(e.to_string());
                report.semesters.push(semester_report);
                continue;
            }
        }

        match schedules::load_schedules(db, &layout, semester).await {
            Ok(summary) => semester_report.schedules = Some(summary),
            Err(e) => {
                error!("学期 {} 课表导入中止: {}", semester.name, e);
                semester_report.error = Some(e.to_string());
            }
        }

        report.semesters.push(semester_report);
    }

    info!(
        "导入完成: {} 个学期，{} 个教学班，{} 条排课",
        report.semesters.len(),
        report.total_sections(),
        report.total_schedules()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_layout_paths() {
        let layout = CacheLayout::new("/tmp/cache");
        assert_eq!(
            layout.semester_list(),
            PathBuf::from("/tmp/cache/catalog/api/teach/semester/list.json")
        );
        assert_eq!(
            layout.section_list(2024001),
            PathBuf::from("/tmp/cache/catalog/api/teach/lesson/list-for-teach/2024001.json")
        );
        assert_eq!(
            layout.schedule_datum(1001),
            PathBuf::from("/tmp/cache/jw/api/schedule-table/datum/1001.json")
        );
    }

    #[test]
    fn test_read_json_missing_file() {
        let err = read_json::<Vec<i64>>(Path::new("/nonexistent/list.json")).unwrap_err();
        assert_eq!(err.code(), "E004");
    }
}
