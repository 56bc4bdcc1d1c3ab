//! 课程与教学班导入
//!
//! 每个教学班在独立事务中处理：失败时整体回滚，不影响同批次的其它教学班。

use super::payload::{free_text, AdminClassRecord, BilingualName, SectionRecord};
use super::resolvers::lookup::{self, LookupTable};
use super::resolvers::teacher::UNKNOWN_TEACHER_NAME;
use super::resolvers::{department, save_if_changed, teacher};
use super::{CacheLayout, SectionImportSummary};
use crate::entity::{admin_classes, courses, section_admin_classes, section_teachers, sections, semesters};
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use serde_json::Value;
use tracing::{error, info, warn};

/// 单个教学班的导入结果
#[derive(Debug, Clone)]
pub struct SectionOutcome {
    pub section: sections::Model,
    pub created: bool,
}

fn name_cn(name: &Option<BilingualName>) -> Option<&str> {
    name.as_ref().and_then(BilingualName::name_cn)
}

fn name_en(name: &Option<BilingualName>) -> Option<&str> {
    name.as_ref().and_then(BilingualName::name_en)
}

async fn resolve_dimension<C: ConnectionTrait>(
    conn: &C,
    table: LookupTable,
    name: &Option<BilingualName>,
) -> Result<Option<i64>> {
    lookup::resolve_optional(conn, table, name_cn(name), name_en(name)).await
}

async fn upsert_course<C: ConnectionTrait>(conn: &C, record: &SectionRecord) -> Result<courses::Model> {
    let education_level_id =
        resolve_dimension(conn, LookupTable::EducationLevel, &record.education).await?;
    let gradation_id =
        resolve_dimension(conn, LookupTable::CourseGradation, &record.course_gradation).await?;
    let category_id =
        resolve_dimension(conn, LookupTable::CourseCategory, &record.course_category).await?;
    let class_type_id = resolve_dimension(conn, LookupTable::ClassType, &record.class_type).await?;
    let type_id = resolve_dimension(conn, LookupTable::CourseType, &record.course_type).await?;
    let classify_id =
        resolve_dimension(conn, LookupTable::CourseClassify, &record.course_classify).await?;

    let course = &record.course;
    let existing = courses::Entity::find()
        .filter(courses::Column::JwId.eq(course.id))
        .one(conn)
        .await?;

    match existing {
        Some(existing) => {
            let desired = courses::Model {
                code: course.code.clone(),
                name_cn: course.cn.clone(),
                name_en: course.en.clone(),
                education_level_id,
                gradation_id,
                category_id,
                class_type_id,
                type_id,
                classify_id,
                ..existing.clone()
            };
            save_if_changed::<courses::Entity, _, _>(conn, existing, desired).await
        }
        None => Ok(courses::ActiveModel {
            jw_id: Set(course.id),
            code: Set(course.code.clone()),
            name_cn: Set(course.cn.clone()),
            name_en: Set(course.en.clone()),
            education_level_id: Set(education_level_id),
            gradation_id: Set(gradation_id),
            category_id: Set(category_id),
            class_type_id: Set(class_type_id),
            type_id: Set(type_id),
            classify_id: Set(classify_id),
            ..Default::default()
        }
        .insert(conn)
        .await?),
    }
}

async fn upsert_section<C: ConnectionTrait>(
    conn: &C,
    record: &SectionRecord,
    semester: &semesters::Model,
    course: &courses::Model,
) -> Result<SectionOutcome> {
    let open_department_id = match record
        .open_department
        .as_ref()
        .filter(|dept| !dept.code.is_empty())
    {
        Some(dept) => Some(
            department::resolve_full(conn, &dept.code, &dept.cn, dept.en.as_deref(), dept.college)
                .await?
                .id,
        ),
        None => None,
    };
    let campus_id = resolve_dimension(conn, LookupTable::Campus, &record.campus).await?;
    let exam_mode_id = resolve_dimension(conn, LookupTable::ExamMode, &record.exam_mode).await?;
    let teach_language_id =
        resolve_dimension(conn, LookupTable::TeachLanguage, &record.teach_lang).await?;

    let desired = sections::Model {
        id: 0,
        jw_id: record.id,
        code: record.code.clone(),
        course_id: course.id,
        semester_id: semester.id,
        open_department_id,
        campus_id,
        exam_mode_id,
        teach_language_id,
        credits: record.credits,
        period: record.period,
        periods_per_week: record.periods_per_week,
        std_count: record.std_count,
        limit_count: record.limit_count,
        graduate_and_postgraduate: record.graduate_and_postgraduate.unwrap_or(false),
        date_time_place_text: free_text(record.date_time_place_text.as_ref()),
        date_time_place_person_text: free_text(record.date_time_place_person_text.as_ref()),
    };

    let existing = sections::Entity::find()
        .filter(sections::Column::JwId.eq(record.id))
        .one(conn)
        .await?;

    match existing {
        Some(existing) => {
            let desired = sections::Model {
                id: existing.id,
                ..desired
            };
            let section = save_if_changed::<sections::Entity, _, _>(conn, existing, desired).await?;
            Ok(SectionOutcome {
                section,
                created: false,
            })
        }
        None => {
            let section = sections::ActiveModel {
                jw_id: Set(desired.jw_id),
                code: Set(desired.code),
                course_id: Set(desired.course_id),
                semester_id: Set(desired.semester_id),
                open_department_id: Set(desired.open_department_id),
                campus_id: Set(desired.campus_id),
                exam_mode_id: Set(desired.exam_mode_id),
                teach_language_id: Set(desired.teach_language_id),
                credits: Set(desired.credits),
                period: Set(desired.period),
                periods_per_week: Set(desired.periods_per_week),
                std_count: Set(desired.std_count),
                limit_count: Set(desired.limit_count),
                graduate_and_postgraduate: Set(desired.graduate_and_postgraduate),
                date_time_place_text: Set(desired.date_time_place_text),
                date_time_place_person_text: Set(desired.date_time_place_person_text),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            Ok(SectionOutcome {
                section,
                created: true,
            })
        }
    }
}

async fn upsert_admin_class<C: ConnectionTrait>(
    conn: &C,
    record: &AdminClassRecord,
    name_cn: &str,
) -> Result<admin_classes::Model> {
    let existing = admin_classes::Entity::find()
        .filter(admin_classes::Column::NameCn.eq(name_cn))
        .one(conn)
        .await?;

    match existing {
        Some(existing) => {
            let desired = admin_classes::Model {
                name_en: record.en.clone(),
                ..existing.clone()
            };
            save_if_changed::<admin_classes::Entity, _, _>(conn, existing, desired).await
        }
        None => Ok(admin_classes::ActiveModel {
            name_cn: Set(name_cn.to_string()),
            name_en: Set(record.en.clone()),
            ..Default::default()
        }
        .insert(conn)
        .await?),
    }
}

/// 用本次解析出的教师集合整体替换教学班的教师关联
async fn replace_teachers<C: ConnectionTrait>(
    conn: &C,
    section_id: i64,
    record: &SectionRecord,
) -> Result<Vec<i64>> {
    let mut teacher_ids = Vec::with_capacity(record.teacher_assignment_list.len());
    for assignment in &record.teacher_assignment_list {
        let department_id = match assignment
            .department_code
            .as_deref()
            .filter(|code| !code.is_empty())
        {
            Some(code) => Some(department::resolve_by_code_only(conn, code).await?.id),
            None => None,
        };

        let name_cn = assignment
            .cn
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_TEACHER_NAME);

        let teacher = teacher::get_or_create_by_assignment(
            conn,
            name_cn,
            assignment.en.as_deref(),
            department_id,
        )
        .await?;

        if !teacher_ids.contains(&teacher.id) {
            teacher_ids.push(teacher.id);
        }
    }

    section_teachers::Entity::delete_many()
        .filter(section_teachers::Column::SectionId.eq(section_id))
        .exec(conn)
        .await?;

    for teacher_id in &teacher_ids {
        section_teachers::ActiveModel {
            section_id: Set(section_id),
            teacher_id: Set(*teacher_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(teacher_ids)
}

/// 用本次解析出的行政班集合整体替换教学班的行政班关联
async fn replace_admin_classes<C: ConnectionTrait>(
    conn: &C,
    section_id: i64,
    record: &SectionRecord,
) -> Result<Vec<i64>> {
    let mut admin_class_ids = Vec::with_capacity(record.admin_classes.len());
    for admin_class in &record.admin_classes {
        let Some(name_cn) = admin_class.cn.as_deref().filter(|name| !name.is_empty()) else {
            continue;
        };

        let row = upsert_admin_class(conn, admin_class, name_cn).await?;
        if !admin_class_ids.contains(&row.id) {
            admin_class_ids.push(row.id);
        }
    }

    section_admin_classes::Entity::delete_many()
        .filter(section_admin_classes::Column::SectionId.eq(section_id))
        .exec(conn)
        .await?;

    for admin_class_id in &admin_class_ids {
        section_admin_classes::ActiveModel {
            section_id: Set(section_id),
            admin_class_id: Set(*admin_class_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(admin_class_ids)
}

/// 导入一条教学班记录：课程 → 教学班 → 教师与行政班关联
pub async fn import_section<C: ConnectionTrait>(
    conn: &C,
    record: &SectionRecord,
    semester: &semesters::Model,
) -> Result<SectionOutcome> {
    let course = upsert_course(conn, record).await?;
    let outcome = upsert_section(conn, record, semester, &course).await?;

    replace_teachers(conn, outcome.section.id, record).await?;
    replace_admin_classes(conn, outcome.section.id, record).await?;

    Ok(outcome)
}

/// 在独立事务中导入一条教学班记录，失败时回滚
pub async fn import_section_atomically(
    db: &DatabaseConnection,
    record: &SectionRecord,
    semester: &semesters::Model,
) -> Result<SectionOutcome> {
    let txn = db.begin().await?;

    match import_section(&txn, record, semester).await {
        Ok(outcome) => {
            txn.commit().await?;
            Ok(outcome)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("教学班 {} 回滚失败: {}", record.id, rollback_err);
            }
            Err(e)
        }
    }
}

/// 导入某学期的教学班列表
///
/// 列表文件不存在时返回 `None`。单条记录失败只计数并记录日志。
pub async fn load_sections(
    db: &DatabaseConnection,
    layout: &CacheLayout,
    semester: &semesters::Model,
) -> Result<Option<SectionImportSummary>> {
    let path = layout.section_list(semester.jw_id);
    if !path.exists() {
        warn!("学期 {} 的教学班列表不存在: {}", semester.name, path.display());
        return Ok(None);
    }

    // 逐条解析，单条记录结构异常只影响它自己
    let raw_records: Vec<Value> = super::read_json(&path)?;
    let mut summary = SectionImportSummary {
        total: raw_records.len(),
        ..Default::default()
    };

    for (index, raw) in raw_records.into_iter().enumerate() {
        let record: SectionRecord = match serde_json::from_value(raw) {
            Ok(record) => record,
            Err(e) => {
                error!("第 {} 条教学班记录无法解析: {}", index, e);
                summary.failed += 1;
                continue;
            }
        };

        match import_section_atomically(db, &record, semester).await {
            Ok(outcome) if outcome.created => summary.created += 1,
            Ok(_) => summary.updated += 1,
            Err(e) => {
                error!("教学班 {} 导入失败: {}", record.id, e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "学期 {} 教学班处理完成: 共 {} 个（新建 {}，更新 {}，失败 {}）",
        semester.name, summary.total, summary.created, summary.updated, summary.failed
    );

    Ok(Some(summary))
}
