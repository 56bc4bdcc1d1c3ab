//! 排课导入
//!
//! 排课记录没有跨导入稳定的标识，每个教学班的排课整体删除后按最新数据重建；
//! 排课分组按教务 ID 更新或创建并保留。

use super::payload::{free_text, DatumTeacherRecord, ScheduleDatum, ScheduleGroupRecord, ScheduleRecord};
use super::resolvers::teacher::{self, TeacherIdentity};
use super::resolvers::{room, save_if_changed};
use super::{CacheLayout, ScheduleImportSummary};
use crate::entity::{schedule_groups, schedules, sections, semesters, teachers};
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// 用课表中的教师 ID 回填教学班已关联的教师
///
/// 映射中找不到的教师保持不变。
async fn backfill_section_teachers<C: ConnectionTrait>(
    conn: &C,
    section: &sections::Model,
    datum: &ScheduleDatum,
) -> Result<()> {
    let mapping: HashMap<&str, &DatumTeacherRecord> = datum
        .result
        .lesson_list
        .iter()
        .flat_map(|lesson| lesson.teacher_assignment_list.iter())
        .filter_map(|assignment| assignment.name.as_deref().map(|name| (name, assignment)))
        .collect();

    let linked = section.find_related(teachers::Entity).all(conn).await?;
    for linked_teacher in linked {
        let Some(assignment) = mapping.get(linked_teacher.name_cn.as_str()) else {
            continue;
        };
        teacher::backfill_ids(conn, linked_teacher, assignment.person_id, assignment.teacher_id)
            .await?;
    }

    Ok(())
}

async fn upsert_schedule_group<C: ConnectionTrait>(
    conn: &C,
    section_id: i64,
    record: &ScheduleGroupRecord,
) -> Result<schedule_groups::Model> {
    let existing = schedule_groups::Entity::find()
        .filter(schedule_groups::Column::JwId.eq(record.id))
        .one(conn)
        .await?;

    match existing {
        Some(existing) => {
            let desired = schedule_groups::Model {
                section_id,
                no: record.no,
                limit_count: record.limit_count,
                std_count: record.std_count,
                actual_periods: record.actual_periods,
                is_default: record.is_default,
                ..existing.clone()
            };
            save_if_changed::<schedule_groups::Entity, _, _>(conn, existing, desired).await
        }
        None => Ok(schedule_groups::ActiveModel {
            jw_id: Set(record.id),
            section_id: Set(section_id),
            no: Set(record.no),
            limit_count: Set(record.limit_count),
            std_count: Set(record.std_count),
            actual_periods: Set(record.actual_periods),
            is_default: Set(record.is_default),
            ..Default::default()
        }
        .insert(conn)
        .await?),
    }
}

async fn insert_schedule<C: ConnectionTrait>(
    conn: &C,
    section_id: i64,
    record: &ScheduleRecord,
) -> Result<schedules::Model> {
    let room_id = match &record.room {
        Some(room_record) => Some(room::resolve(conn, room_record).await?.id),
        None => None,
    };

    let identity = TeacherIdentity::new(
        record.person_id,
        record.teacher_id,
        record.person_name.as_deref(),
    );
    let teacher = teacher::resolve(conn, &identity).await?;

    // 分组按教务 ID 全局查找，不限定教学班
    let schedule_group_id = match record.schedule_group_id {
        Some(jw_id) => schedule_groups::Entity::find()
            .filter(schedule_groups::Column::JwId.eq(jw_id))
            .one(conn)
            .await?
            .map(|group| group.id),
        None => None,
    };

    let model = schedules::ActiveModel {
        section_id: Set(section_id),
        schedule_group_id: Set(schedule_group_id),
        room_id: Set(room_id),
        teacher_id: Set(teacher.id),
        periods: Set(record.periods),
        date: Set(record.date),
        weekday: Set(record.weekday),
        start_time: Set(record.start_time),
        end_time: Set(record.end_time),
        experiment: Set(free_text(record.experiment.as_ref())),
        custom_place: Set(record.custom_place.clone()),
        lesson_type: Set(free_text(record.lesson_type.as_ref())),
        week_index: Set(record.week_index),
        exercise_class: Set(record.exercise_class.unwrap_or(false)),
        start_unit: Set(record.start_unit),
        end_unit: Set(record.end_unit),
        ..Default::default()
    };

    Ok(model.insert(conn).await?)
}

/// 导入一个教学班的课表数据，返回写入的排课条数
///
/// 教学班不在库中时返回 `None`。
pub async fn import_section_schedules<C: ConnectionTrait>(
    conn: &C,
    section_jw_id: i64,
    datum: &ScheduleDatum,
) -> Result<Option<usize>> {
    let Some(section) = sections::Entity::find()
        .filter(sections::Column::JwId.eq(section_jw_id))
        .one(conn)
        .await?
    else {
        debug!("教学班 {} 不在库中，跳过课表导入", section_jw_id);
        return Ok(None);
    };

    backfill_section_teachers(conn, &section, datum).await?;

    for group in datum
        .result
        .schedule_group_list
        .iter()
        .filter(|group| group.lesson_id == section_jw_id)
    {
        upsert_schedule_group(conn, section.id, group).await?;
    }

    schedules::Entity::delete_many()
        .filter(schedules::Column::SectionId.eq(section.id))
        .exec(conn)
        .await?;

    let mut inserted = 0;
    for record in datum
        .result
        .schedule_list
        .iter()
        .filter(|record| record.lesson_id == section_jw_id)
    {
        insert_schedule(conn, section.id, record).await?;
        inserted += 1;
    }

    Ok(Some(inserted))
}

async fn import_section_schedules_atomically(
    db: &DatabaseConnection,
    section_jw_id: i64,
    datum: &ScheduleDatum,
) -> Result<Option<usize>> {
    let txn = db.begin().await?;

    match import_section_schedules(&txn, section_jw_id, datum).await {
        Ok(inserted) => {
            txn.commit().await?;
            Ok(inserted)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("教学班 {} 课表回滚失败: {}", section_jw_id, rollback_err);
            }
            Err(e)
        }
    }
}

/// 按教务 ID 顺序导入某学期所有教学班的课表
pub async fn load_schedules(
    db: &DatabaseConnection,
    layout: &CacheLayout,
    semester: &semesters::Model,
) -> Result<ScheduleImportSummary> {
    let section_jw_ids: Vec<i64> = sections::Entity::find()
        .select_only()
        .column(sections::Column::JwId)
        .filter(sections::Column::SemesterId.eq(semester.id))
        .order_by_asc(sections::Column::JwId)
        .into_tuple()
        .all(db)
        .await?;

    let mut summary = ScheduleImportSummary {
        sections: section_jw_ids.len(),
        ..Default::default()
    };

    if section_jw_ids.is_empty() {
        warn!("学期 {} 没有教学班，跳过课表导入", semester.name);
        return Ok(summary);
    }

    for jw_id in section_jw_ids {
        let path = layout.schedule_datum(jw_id);
        if !path.exists() {
            debug!("教学班 {} 的课表数据不存在: {}", jw_id, path.display());
            summary.missing_datum += 1;
            continue;
        }

        let datum: ScheduleDatum = match super::read_json(&path) {
            Ok(datum) => datum,
            Err(e) => {
                error!("教学班 {} 的课表数据无法解析: {}", jw_id, e);
                summary.failed += 1;
                continue;
            }
        };

        match import_section_schedules_atomically(db, jw_id, &datum).await {
            Ok(Some(inserted)) => {
                summary.imported += 1;
                summary.schedules += inserted;
            }
            Ok(None) => {}
            Err(e) => {
                error!("教学班 {} 课表导入失败: {}", jw_id, e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "学期 {} 课表处理完成: 教学班 {} 个（导入 {}，缺少数据 {}，失败 {}），排课 {} 条",
        semester.name,
        summary.sections,
        summary.imported,
        summary.missing_datum,
        summary.failed,
        summary.schedules
    );

    Ok(summary)
}
