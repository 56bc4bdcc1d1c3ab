#![allow(dead_code)]

use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use ustc_catalog::config::DatabaseConfig;
use ustc_catalog::importer::CacheLayout;
use ustc_catalog::storage::sea_orm_storage::SeaOrmStorage;

pub const SEMESTER_JW_ID: i64 = 2024001;

/// 临时目录中的 SQLite 库与缓存目录
pub struct TestEnv {
    _dir: TempDir,
    pub storage: SeaOrmStorage,
    pub layout: CacheLayout,
}

impl TestEnv {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("catalog.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", db_path.display()),
            pool_size: 4,
            timeout: 5,
        };
        let storage = SeaOrmStorage::connect(&config).await.unwrap();
        let layout = CacheLayout::new(dir.path().join("cache"));

        Self {
            _dir: dir,
            storage,
            layout,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.storage.connection()
    }

    pub fn write_semesters(&self, semesters: Value) {
        write_json(&self.layout.semester_list(), &semesters);
    }

    pub fn write_sections(&self, semester_jw_id: i64, sections: Value) {
        write_json(&self.layout.section_list(semester_jw_id), &sections);
    }

    pub fn write_datum(&self, section_jw_id: i64, datum: Value) {
        write_json(&self.layout.schedule_datum(section_jw_id), &datum);
    }
}

pub fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

pub fn semester_json() -> Value {
    json!([{
        "id": SEMESTER_JW_ID,
        "nameZh": "2024秋季学期",
        "code": "2024-2025-1",
        "start": "2024-09-01",
        "end": "2025-01-19"
    }])
}

/// 一条完整的教学班记录，教师为没有外部 ID 的 "张三"
pub fn section_json(jw_id: i64, course_jw_id: i64) -> Value {
    json!({
        "id": jw_id,
        "code": format!("CS1001.0{}", jw_id % 10),
        "course": {
            "id": course_jw_id,
            "code": "CS1001",
            "cn": "计算机程序设计",
            "en": "Computer Programming"
        },
        "education": {"cn": "本科", "en": "Undergraduate"},
        "courseCategory": {"cn": "本科计划内课程", "en": "Undergrad Program"},
        "classType": {"cn": "理论课", "en": null},
        "openDepartment": {
            "code": "CS01",
            "cn": "计算机科学与技术学院",
            "en": "School of Computer Science",
            "college": true
        },
        "campus": {"cn": "东区", "en": "East Campus"},
        "examMode": {"cn": "笔试", "en": "Written"},
        "teachLang": {"cn": "中文", "en": "Chinese"},
        "credits": 3.0,
        "period": 60,
        "periodsPerWeek": 4.0,
        "stdCount": 80,
        "limitCount": 120,
        "graduateAndPostgraduate": false,
        "dateTimePlaceText": "1-16周 周一 3-4节 3C101",
        "dateTimePlacePersonText": {"cn": "张三"},
        "teacherAssignmentList": [
            {"cn": "张三", "en": "San Zhang", "departmentCode": "CS01"}
        ],
        "adminClasses": [
            {"cn": "计算机2401班", "en": "CS 2401"}
        ]
    })
}

pub fn room_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "code": format!("3C{id}"),
        "nameZh": name,
        "nameEn": null,
        "floor": 1,
        "virtual": false,
        "seatsForLesson": 100,
        "remark": null,
        "seats": 120,
        "building": {
            "id": 31,
            "code": "3C",
            "nameZh": "第三教学楼",
            "nameEn": "Third Teaching Building",
            "campus": {"id": 1, "nameZh": "东区", "nameEn": "East Campus"}
        },
        "roomType": {"id": 2, "code": "DMT", "nameZh": "多媒体教室", "nameEn": "Multimedia"}
    })
}

/// 课表数据；`dates` 中每个日期生成一条排课
pub fn datum_json(
    section_jw_id: i64,
    teacher_name: &str,
    person_id: Option<i64>,
    teacher_id: Option<i64>,
    dates: &[&str],
) -> Value {
    let schedules: Vec<Value> = dates
        .iter()
        .enumerate()
        .map(|(index, date)| {
            json!({
                "lessonId": section_jw_id,
                "scheduleGroupId": 900 + section_jw_id,
                "room": room_json(101, "3C101"),
                "personId": person_id,
                "teacherId": teacher_id,
                "personName": teacher_name,
                "periods": 2,
                "date": date,
                "weekday": 1,
                "startTime": 945,
                "endTime": 1120,
                "experiment": null,
                "customPlace": null,
                "lessonType": "理论",
                "weekIndex": index as i32 + 1,
                "exerciseClass": null,
                "startUnit": 3,
                "endUnit": 4
            })
        })
        .collect();

    json!({
        "result": {
            "lessonList": [{
                "teacherAssignmentList": [{
                    "name": teacher_name,
                    "personId": person_id,
                    "teacherId": teacher_id
                }]
            }],
            "scheduleGroupList": [{
                "id": 900 + section_jw_id,
                "lessonId": section_jw_id,
                "no": 1,
                "limitCount": 120,
                "stdCount": 80,
                "actualPeriods": 60,
                "default": true
            }],
            "scheduleList": schedules
        }
    })
}
