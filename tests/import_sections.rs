mod common;

use common::{SEMESTER_JW_ID, TestEnv, section_json, semester_json};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde_json::json;
use ustc_catalog::entity::{class_types, course_categories, education_levels};
use ustc_catalog::entity::{
    admin_classes, courses, departments, section_admin_classes, section_teachers, sections,
    semesters, teachers,
};
use ustc_catalog::importer::{import_from_cache, semesters::load_semesters, sections::load_sections};

async fn row_counts(env: &TestEnv) -> [u64; 7] {
    let db = env.db();
    [
        courses::Entity::find().count(db).await.unwrap(),
        sections::Entity::find().count(db).await.unwrap(),
        departments::Entity::find().count(db).await.unwrap(),
        teachers::Entity::find().count(db).await.unwrap(),
        course_categories::Entity::find().count(db).await.unwrap(),
        section_teachers::Entity::find().count(db).await.unwrap(),
        section_admin_classes::Entity::find().count(db).await.unwrap(),
    ]
}

#[tokio::test]
async fn test_section_import_is_idempotent() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(
        SEMESTER_JW_ID,
        json!([section_json(1001, 501), section_json(1002, 502)]),
    );

    let semester = load_semesters(env.db(), &env.layout).await.unwrap().remove(0);

    let first = load_sections(env.db(), &env.layout, &semester)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((first.total, first.created, first.updated, first.failed), (2, 2, 0, 0));
    let counts_after_first = row_counts(&env).await;
    let section_after_first = sections::Entity::find()
        .filter(sections::Column::JwId.eq(1001))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();

    let second = load_sections(env.db(), &env.layout, &semester)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((second.total, second.created, second.updated, second.failed), (2, 0, 2, 0));
    assert_eq!(row_counts(&env).await, counts_after_first);

    let section_after_second = sections::Entity::find()
        .filter(sections::Column::JwId.eq(1001))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(section_after_first, section_after_second);

    // 两次导入后院系只有一行，且保留完整信息
    assert_eq!(counts_after_first[2], 1);
    let department = departments::Entity::find().one(env.db()).await.unwrap().unwrap();
    assert_eq!(department.code, "CS01");
    assert_eq!(department.name_cn, "计算机科学与技术学院");
    assert!(department.is_college);
}

#[tokio::test]
async fn test_lookup_rows_are_shared_between_sections() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(
        SEMESTER_JW_ID,
        json!([section_json(1001, 501), section_json(1002, 502)]),
    );

    let semester = load_semesters(env.db(), &env.layout).await.unwrap().remove(0);
    load_sections(env.db(), &env.layout, &semester).await.unwrap();

    let categories = course_categories::Entity::find().all(env.db()).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name_cn, "本科计划内课程");
    assert_eq!(categories[0].name_en.as_deref(), Some("Undergrad Program"));

    let courses = courses::Entity::find().all(env.db()).await.unwrap();
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c.category_id == Some(categories[0].id)));

    // 缺失英文名的维度行记为空串
    let theory = class_types::Entity::find().all(env.db()).await.unwrap();
    assert_eq!(theory.len(), 1);
    assert_eq!(theory[0].name_en.as_deref(), Some(""));
}

#[tokio::test]
async fn test_end_to_end_with_empty_education_name() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());

    let mut section = section_json(1001, 501);
    section["education"] = json!({"cn": "", "en": ""});
    env.write_sections(SEMESTER_JW_ID, json!([section]));

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();
    assert_eq!(report.semesters.len(), 1);
    assert_eq!(report.semesters[0].code, "2024-2025-1");
    assert!(report.semesters[0].error.is_none());
    assert_eq!(report.total_sections(), 1);

    let semester = semesters::Entity::find()
        .filter(semesters::Column::JwId.eq(SEMESTER_JW_ID))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(semester.code, "2024-2025-1");

    let section = sections::Entity::find()
        .filter(sections::Column::JwId.eq(1001))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(section.semester_id, semester.id);

    let course = courses::Entity::find_by_id(section.course_id)
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(course.jw_id, 501);
    assert_eq!(course.education_level_id, None);
    assert_eq!(education_levels::Entity::find().count(env.db()).await.unwrap(), 0);

    // 非字符串的自由文本以 JSON 文本保存
    assert_eq!(
        section.date_time_place_person_text.as_deref(),
        Some(r#"{"cn":"张三"}"#)
    );
}

#[tokio::test]
async fn test_admin_classes_and_teachers_are_replaced() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(SEMESTER_JW_ID, json!([section_json(1001, 501)]));

    let semester = load_semesters(env.db(), &env.layout).await.unwrap().remove(0);
    load_sections(env.db(), &env.layout, &semester).await.unwrap();

    let mut section = section_json(1001, 501);
    section["teacherAssignmentList"] = json!([]);
    section["adminClasses"] = json!([
        {"cn": "计算机2402班", "en": null},
        {"cn": "", "en": "ignored"}
    ]);
    env.write_sections(SEMESTER_JW_ID, json!([section]));
    load_sections(env.db(), &env.layout, &semester).await.unwrap();

    assert_eq!(section_teachers::Entity::find().count(env.db()).await.unwrap(), 0);

    let links = section_admin_classes::Entity::find().all(env.db()).await.unwrap();
    assert_eq!(links.len(), 1);
    let linked = admin_classes::Entity::find_by_id(links[0].admin_class_id)
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(linked.name_cn, "计算机2402班");

    // 旧行政班保留在表中，只是不再关联
    assert_eq!(admin_classes::Entity::find().count(env.db()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_bad_record_does_not_abort_its_semester() {
    let env = TestEnv::new().await;
    env.write_semesters(json!([
        {"id": SEMESTER_JW_ID, "nameZh": "2024秋季学期", "code": "2024-2025-1", "start": "2024-09-01", "end": "2025-01-19"},
        {"id": 2024002, "nameZh": "2025春季学期", "code": "2024-2025-2", "start": "2025-02-24", "end": "2025-06-29"}
    ]));

    // null 标量按默认值处理；缺少 course 的记录单独计为失败
    let mut nullable = section_json(1002, 502);
    nullable["code"] = json!(null);
    nullable["course"]["code"] = json!(null);
    nullable["openDepartment"]["college"] = json!(null);
    env.write_sections(
        SEMESTER_JW_ID,
        json!([section_json(1001, 501), {"id": 1003}, nullable, section_json(1004, 504)]),
    );
    // 文件本身不是数组时整个学期中止
    env.write_sections(2024002, json!({"unexpected": true}));

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();

    let autumn = report
        .semesters
        .iter()
        .find(|s| s.jw_id == SEMESTER_JW_ID)
        .unwrap();
    assert!(autumn.error.is_none());
    let summary = autumn.sections.clone().unwrap();
    assert_eq!((summary.total, summary.created, summary.failed), (4, 3, 1));

    let spring = report
        .semesters
        .iter()
        .find(|s| s.jw_id == 2024002)
        .unwrap();
    assert!(spring.error.as_deref().unwrap().contains("Serialization"));

    let imported: Vec<i64> = sections::Entity::find()
        .order_by_asc(sections::Column::JwId)
        .all(env.db())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.jw_id)
        .collect();
    assert_eq!(imported, vec![1001, 1002, 1004]);

    let nullable_course = courses::Entity::find()
        .filter(courses::Column::JwId.eq(502))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(nullable_course.code, "");
}

#[tokio::test]
async fn test_failed_section_rolls_back_only_itself() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    let mut rejected = section_json(1002, 502);
    rejected["teacherAssignmentList"] = json!([
        {"cn": "李四", "en": "Si Li", "departmentCode": "EE02"}
    ]);
    env.write_sections(
        SEMESTER_JW_ID,
        json!([section_json(1001, 501), rejected, section_json(1003, 503)]),
    );

    // 课程、教学班、院系和教师写入之后，关联教师时失败
    env.db()
        .execute_unprepared(
            "CREATE TRIGGER reject_li_si BEFORE INSERT ON section_teachers \
             WHEN (SELECT name_cn FROM teachers WHERE id = NEW.teacher_id) = '李四' \
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .await
        .unwrap();

    let semester = load_semesters(env.db(), &env.layout).await.unwrap().remove(0);
    let summary = load_sections(env.db(), &env.layout, &semester)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((summary.total, summary.created, summary.failed), (3, 2, 1));

    let course_ids: Vec<i64> = courses::Entity::find()
        .order_by_asc(courses::Column::JwId)
        .all(env.db())
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.jw_id)
        .collect();
    assert_eq!(course_ids, vec![501, 503]);
    assert_eq!(sections::Entity::find().count(env.db()).await.unwrap(), 2);
    assert_eq!(section_teachers::Entity::find().count(env.db()).await.unwrap(), 2);

    // 失败记录写入的院系与教师随之回滚
    assert!(
        departments::Entity::find()
            .filter(departments::Column::Code.eq("EE02"))
            .one(env.db())
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        teachers::Entity::find()
            .filter(teachers::Column::NameCn.eq("李四"))
            .one(env.db())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_all_semesters_skipped_is_fatal() {
    let env = TestEnv::new().await;
    env.write_semesters(json!([
        {"id": 2024003, "nameZh": "日期错误", "code": "bad", "start": "2025-07-01", "end": "2025-06-01"},
        {"id": 2024004, "nameZh": "格式错误", "code": "bad", "start": "2025/07/01", "end": "2025/08/01"}
    ]));

    let err = import_from_cache(env.db(), env.layout.root()).await.unwrap_err();
    assert_eq!(err.code(), "E010");
    assert_eq!(semesters::Entity::find().count(env.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_semester_list_is_fatal() {
    let env = TestEnv::new().await;

    let err = import_from_cache(env.db(), env.layout.root()).await.unwrap_err();
    assert_eq!(err.code(), "E010");

    env.write_semesters(json!([]));
    let err = import_from_cache(env.db(), env.layout.root()).await.unwrap_err();
    assert_eq!(err.code(), "E010");
}

#[tokio::test]
async fn test_missing_section_list_is_skipped() {
    let env = TestEnv::new().await;
    env.write_semesters(json!([
        {"id": SEMESTER_JW_ID, "nameZh": "2024秋季学期", "code": "2024-2025-1", "start": "2024-09-01", "end": "2025-01-19"},
        {"id": 2024002, "nameZh": "2025春季学期", "code": "2024-2025-2", "start": "2025-02-24", "end": "2025-06-29"},
        {"id": 2024003, "nameZh": "日期错误", "code": "bad", "start": "2025-07-01", "end": "2025-06-01"}
    ]));
    env.write_sections(SEMESTER_JW_ID, json!([section_json(1001, 501)]));

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();

    // 结束早于开始的学期被跳过
    assert_eq!(report.semesters.len(), 2);
    assert_eq!(semesters::Entity::find().count(env.db()).await.unwrap(), 2);

    let spring = report
        .semesters
        .iter()
        .find(|s| s.jw_id == 2024002)
        .unwrap();
    assert!(spring.sections.is_none());
    assert!(spring.error.is_none());

    let autumn = report
        .semesters
        .iter()
        .find(|s| s.jw_id == SEMESTER_JW_ID)
        .unwrap();
    assert_eq!(autumn.sections.as_ref().map(|s| s.created), Some(1));
    // 没有课表数据的教学班只计数
    assert_eq!(autumn.schedules.as_ref().map(|s| s.missing_datum), Some(1));
}
