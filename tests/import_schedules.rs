mod common;

use common::{SEMESTER_JW_ID, TestEnv, datum_json, section_json, semester_json};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde_json::json;
use ustc_catalog::entity::{
    buildings, campuses, room_types, rooms, schedule_groups, schedules, sections, teachers,
};
use ustc_catalog::importer::import_from_cache;
use ustc_catalog::importer::payload::ScheduleDatum;
use ustc_catalog::importer::schedules::import_section_schedules;

async fn schedules_of(env: &TestEnv, section_jw_id: i64) -> Vec<schedules::Model> {
    let section = sections::Entity::find()
        .filter(sections::Column::JwId.eq(section_jw_id))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    schedules::Entity::find()
        .filter(schedules::Column::SectionId.eq(section.id))
        .order_by_asc(schedules::Column::Date)
        .all(env.db())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_schedules_are_replaced_on_reimport() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(
        SEMESTER_JW_ID,
        json!([section_json(1001, 501), section_json(1002, 502)]),
    );
    env.write_datum(
        1001,
        datum_json(1001, "张三", Some(123), None, &["2024-09-02", "2024-09-09", "2024-09-16"]),
    );
    env.write_datum(1002, datum_json(1002, "张三", Some(123), None, &["2024-09-03"]));

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();
    assert_eq!(report.total_schedules(), 4);
    assert_eq!(schedules_of(&env, 1001).await.len(), 3);

    env.write_datum(
        1001,
        datum_json(1001, "张三", Some(123), None, &["2024-10-07", "2024-10-14"]),
    );
    import_from_cache(env.db(), env.layout.root()).await.unwrap();

    let replaced = schedules_of(&env, 1001).await;
    assert_eq!(replaced.len(), 2);
    let dates: Vec<String> = replaced
        .iter()
        .map(|s| s.date.unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-10-07", "2024-10-14"]);

    // 其他教学班的排课不受影响
    assert_eq!(schedules_of(&env, 1002).await.len(), 1);
}

#[tokio::test]
async fn test_schedule_fields_and_room_chain() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(SEMESTER_JW_ID, json!([section_json(1001, 501)]));
    env.write_datum(
        1001,
        datum_json(1001, "张三", Some(123), None, &["2024-09-02", "2024-09-09"]),
    );

    import_from_cache(env.db(), env.layout.root()).await.unwrap();
    import_from_cache(env.db(), env.layout.root()).await.unwrap();

    let items = schedules_of(&env, 1001).await;
    assert_eq!(items.len(), 2);
    let first = &items[0];
    assert_eq!(first.start_time, Some(945));
    assert_eq!(first.end_time, Some(1120));
    assert_eq!(first.week_index, Some(1));
    assert_eq!(first.lesson_type.as_deref(), Some("理论"));
    assert!(!first.exercise_class);
    assert!(first.experiment.is_none());

    // 分组与教室链在重复导入后仍然各只有一行
    let groups = schedule_groups::Entity::find().all(env.db()).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].jw_id, 1901);
    assert!(groups[0].is_default);
    assert_eq!(first.schedule_group_id, Some(groups[0].id));

    let room = rooms::Entity::find().one(env.db()).await.unwrap().unwrap();
    assert_eq!(room.jw_id, 101);
    assert_eq!(room.seats_for_section, 100);
    assert_eq!(first.room_id, Some(room.id));
    assert_eq!(rooms::Entity::find().count(env.db()).await.unwrap(), 1);
    assert_eq!(buildings::Entity::find().count(env.db()).await.unwrap(), 1);
    assert_eq!(room_types::Entity::find().count(env.db()).await.unwrap(), 1);

    // 教学班的校区维度与教学楼的校区是同一行，并补上了教务 ID
    let campus_rows = campuses::Entity::find().all(env.db()).await.unwrap();
    assert_eq!(campus_rows.len(), 1);
    assert_eq!(campus_rows[0].name_cn, "东区");
    assert_eq!(campus_rows[0].jw_id, Some(1));
}

#[tokio::test]
async fn test_datum_entries_for_other_sections_are_ignored() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(SEMESTER_JW_ID, json!([section_json(1001, 501)]));

    let mut datum = datum_json(1001, "张三", None, None, &["2024-09-02"]);
    let foreign = datum_json(4242, "李四", None, None, &["2024-09-03"]);
    datum["result"]["scheduleList"]
        .as_array_mut()
        .unwrap()
        .extend(foreign["result"]["scheduleList"].as_array().unwrap().clone());
    env.write_datum(1001, datum);

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();
    assert_eq!(report.total_schedules(), 1);
    assert_eq!(schedules_of(&env, 1001).await.len(), 1);
}

#[tokio::test]
async fn test_unparsable_datum_is_counted_as_failed() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(
        SEMESTER_JW_ID,
        json!([section_json(1001, 501), section_json(1002, 502)]),
    );
    env.write_datum(1001, json!({"unexpected": true}));
    env.write_datum(1002, datum_json(1002, "张三", None, None, &["2024-09-03"]));

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();
    let summary = report.semesters[0].schedules.clone().unwrap();
    assert_eq!(summary.sections, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.missing_datum, 0);
    assert_eq!(summary.schedules, 1);
}

#[tokio::test]
async fn test_failed_schedule_insert_keeps_previous_rows() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(SEMESTER_JW_ID, json!([section_json(1001, 501)]));
    env.write_datum(1001, datum_json(1001, "张三", None, None, &["2024-09-02"]));
    import_from_cache(env.db(), env.layout.root()).await.unwrap();

    // 第二条排课写入失败，此前的删除也要回滚
    env.db()
        .execute_unprepared(
            "CREATE TRIGGER reject_second_week BEFORE INSERT ON schedules \
             WHEN NEW.week_index = 2 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .await
        .unwrap();
    env.write_datum(
        1001,
        datum_json(1001, "张三", Some(123), None, &["2024-10-07", "2024-10-14"]),
    );

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();
    let summary = report.semesters[0].schedules.clone().unwrap();
    assert_eq!((summary.imported, summary.failed), (0, 1));

    let kept = schedules_of(&env, 1001).await;
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].date.unwrap().to_string(), "2024-09-02");

    // 同一事务中的教师 ID 回填也被撤销
    let zhang = teachers::Entity::find().one(env.db()).await.unwrap().unwrap();
    assert_eq!(zhang.person_id, None);
}

#[tokio::test]
async fn test_datum_for_unknown_section_is_skipped() {
    let env = TestEnv::new().await;
    let datum: ScheduleDatum =
        serde_json::from_value(datum_json(4242, "张三", None, None, &["2024-09-02"])).unwrap();

    let inserted = import_section_schedules(env.db(), 4242, &datum).await.unwrap();
    assert_eq!(inserted, None);
    assert_eq!(schedules::Entity::find().count(env.db()).await.unwrap(), 0);
    assert_eq!(teachers::Entity::find().count(env.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_backfill_ignores_teachers_missing_from_lesson_list() {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(SEMESTER_JW_ID, json!([section_json(1001, 501)]));
    // 课表只列出李四，教学班关联的张三找不到对应条目
    env.write_datum(1001, datum_json(1001, "李四", Some(7), None, &["2024-09-02"]));

    let report = import_from_cache(env.db(), env.layout.root()).await.unwrap();
    let summary = report.semesters[0].schedules.clone().unwrap();
    assert_eq!((summary.imported, summary.failed), (1, 0));

    let zhang = teachers::Entity::find()
        .filter(teachers::Column::NameCn.eq("张三"))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(zhang.person_id, None);
    assert_eq!(zhang.teacher_id, None);

    let li = teachers::Entity::find()
        .filter(teachers::Column::NameCn.eq("李四"))
        .one(env.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(li.person_id, Some(7));
    assert_eq!(schedules_of(&env, 1001).await[0].teacher_id, li.id);
}
