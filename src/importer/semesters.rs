//! 学期导入

use super::CacheLayout;
use super::payload::SemesterRecord;
use super::resolvers::save_if_changed;
use crate::entity::semesters::{ActiveModel, Column, Entity as Semesters, Model};
use crate::errors::{CatalogError, Result};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use tracing::{info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

async fn upsert_semester<C: ConnectionTrait>(
    conn: &C,
    record: &SemesterRecord,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Model> {
    let existing = Semesters::find()
        .filter(Column::JwId.eq(record.id))
        .one(conn)
        .await?;

    match existing {
        Some(existing) => {
            let desired = Model {
                name: record.name_zh.clone(),
                code: record.code.clone(),
                start_date,
                end_date,
                ..existing.clone()
            };
            save_if_changed::<Semesters, _, _>(conn, existing, desired).await
        }
        None => Ok(ActiveModel {
            jw_id: Set(record.id),
            name: Set(record.name_zh.clone()),
            code: Set(record.code.clone()),
            start_date: Set(start_date),
            end_date: Set(end_date),
            ..Default::default()
        }
        .insert(conn)
        .await?),
    }
}

/// 读取学期列表并逐条更新或创建
///
/// 列表缺失或为空时返回 `MissingData`，后续导入无从进行。
pub async fn load_semesters<C: ConnectionTrait>(
    conn: &C,
    layout: &CacheLayout,
) -> Result<Vec<Model>> {
    let path = layout.semester_list();
    if !path.exists() {
        return Err(CatalogError::missing_data(format!(
            "学期列表不存在: {}",
            path.display()
        )));
    }

    let records: Vec<SemesterRecord> = super::read_json(&path)?;
    if records.is_empty() {
        return Err(CatalogError::missing_data("学期列表为空"));
    }

    let mut semesters = Vec::with_capacity(records.len());
    for record in &records {
        let (start_date, end_date) = match (parse_date(&record.start), parse_date(&record.end)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(e), _) | (_, Err(e)) => {
                warn!("学期 {} 日期无法解析，已跳过: {}", record.id, e);
                continue;
            }
        };

        if end_date < start_date {
            warn!(
                "学期 {} 的结束日期 {} 早于开始日期 {}，已跳过",
                record.id, end_date, start_date
            );
            continue;
        }

        semesters.push(upsert_semester(conn, record, start_date, end_date).await?);
    }

    if semesters.is_empty() {
        return Err(CatalogError::missing_data(format!(
            "{} 中没有可用的学期",
            path.display()
        )));
    }

    info!("已导入 {} 个学期", semesters.len());
    Ok(semesters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-09-01").ok(),
            NaiveDate::from_ymd_opt(2024, 9, 1)
        );
        assert_eq!(parse_date("2024/09/01").unwrap_err().code(), "E006");
    }
}
