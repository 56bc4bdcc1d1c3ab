//! 双语维度表解析
//!
//! 按中文名去重：已存在则刷新英文名，否则新建。
//! 调用方必须保证中文名非空，空名称意味着该维度缺失，外键留空。

use super::save_if_changed;
use crate::entity;
use crate::errors::{CatalogError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

/// 可按中文名解析的维度表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    EducationLevel,
    CourseGradation,
    CourseCategory,
    ClassType,
    CourseType,
    CourseClassify,
    ExamMode,
    TeachLanguage,
    Campus,
}

impl LookupTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            LookupTable::EducationLevel => "education_levels",
            LookupTable::CourseGradation => "course_gradations",
            LookupTable::CourseCategory => "course_categories",
            LookupTable::ClassType => "class_types",
            LookupTable::CourseType => "course_types",
            LookupTable::CourseClassify => "course_classifies",
            LookupTable::ExamMode => "exam_modes",
            LookupTable::TeachLanguage => "teach_languages",
            LookupTable::Campus => "campuses",
        }
    }
}

/// 解析结果，各维度表共用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    pub id: i64,
    pub name_cn: String,
    pub name_en: Option<String>,
}

macro_rules! upsert_by_name_cn {
    ($conn:expr, $module:ident, $name_cn:expr, $name_en:expr) => {{
        use entity::$module::{ActiveModel, Column, Entity, Model};

        let existing = Entity::find()
            .filter(Column::NameCn.eq($name_cn))
            .one($conn)
            .await?;

        let row = match existing {
            Some(row) => {
                let desired = Model {
                    name_en: Some($name_en.to_string()),
                    ..row.clone()
                };
                save_if_changed::<Entity, _, _>($conn, row, desired).await?
            }
            None => {
                ActiveModel {
                    name_cn: Set($name_cn.to_string()),
                    name_en: Set(Some($name_en.to_string())),
                    ..Default::default()
                }
                .insert($conn)
                .await?
            }
        };

        LookupRow {
            id: row.id,
            name_cn: row.name_cn,
            name_en: row.name_en,
        }
    }};
}

/// 按中文名获取或创建维度行，英文名缺失时记为空串
pub async fn resolve<C: ConnectionTrait>(
    conn: &C,
    table: LookupTable,
    name_cn: &str,
    name_en: Option<&str>,
) -> Result<LookupRow> {
    if name_cn.is_empty() {
        return Err(CatalogError::validation(format!(
            "{} 的中文名为空，无法作为唯一键",
            table.table_name()
        )));
    }

    let name_en = name_en.unwrap_or_default();

    let row = match table {
        LookupTable::EducationLevel => upsert_by_name_cn!(conn, education_levels, name_cn, name_en),
        LookupTable::CourseGradation => {
            upsert_by_name_cn!(conn, course_gradations, name_cn, name_en)
        }
        LookupTable::CourseCategory => {
            upsert_by_name_cn!(conn, course_categories, name_cn, name_en)
        }
        LookupTable::ClassType => upsert_by_name_cn!(conn, class_types, name_cn, name_en),
        LookupTable::CourseType => upsert_by_name_cn!(conn, course_types, name_cn, name_en),
        LookupTable::CourseClassify => {
            upsert_by_name_cn!(conn, course_classifies, name_cn, name_en)
        }
        LookupTable::ExamMode => upsert_by_name_cn!(conn, exam_modes, name_cn, name_en),
        LookupTable::TeachLanguage => upsert_by_name_cn!(conn, teach_languages, name_cn, name_en),
        LookupTable::Campus => upsert_by_name_cn!(conn, campuses, name_cn, name_en),
    };

    Ok(row)
}

/// 只有在中文名非空时才解析，返回行 ID
pub async fn resolve_optional<C: ConnectionTrait>(
    conn: &C,
    table: LookupTable,
    name_cn: Option<&str>,
    name_en: Option<&str>,
) -> Result<Option<i64>> {
    match name_cn.filter(|name| !name.is_empty()) {
        Some(name_cn) => Ok(Some(resolve(conn, table, name_cn, name_en).await?.id)),
        None => Ok(None),
    }
}
