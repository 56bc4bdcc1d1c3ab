//! 静态缓存 JSON 结构
//!
//! 教务数据并不规整：子对象可能为 null，中文名可能为空串，
//! 所以绝大多数字段都是可选的，由导入逻辑决定如何落库。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` 与缺失字段一样取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{cn, en}` 形式的双语名称
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BilingualName {
    #[serde(default)]
    pub cn: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

impl BilingualName {
    /// 非空的中文名；空串视同缺失
    pub fn name_cn(&self) -> Option<&str> {
        self.cn.as_deref().filter(|name| !name.is_empty())
    }

    pub fn name_en(&self) -> Option<&str> {
        self.en.as_deref()
    }
}

/// `catalog/api/teach/semester/list.json` 中的一项
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterRecord {
    pub id: i64,
    pub name_zh: String,
    pub code: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cn: String,
    #[serde(default)]
    pub en: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cn: String,
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub college: bool,
}

/// 教学班列表中的授课教师，只有姓名和院系代码
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTeacherRecord {
    #[serde(default)]
    pub cn: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub department_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminClassRecord {
    #[serde(default)]
    pub cn: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

/// `catalog/api/teach/lesson/list-for-teach/<semester>.json` 中的一项
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    pub course: CourseRecord,
    #[serde(default)]
    pub education: Option<BilingualName>,
    #[serde(default)]
    pub course_gradation: Option<BilingualName>,
    #[serde(default)]
    pub course_category: Option<BilingualName>,
    #[serde(default)]
    pub class_type: Option<BilingualName>,
    #[serde(default)]
    pub course_type: Option<BilingualName>,
    #[serde(default)]
    pub course_classify: Option<BilingualName>,
    #[serde(default)]
    pub open_department: Option<DepartmentRecord>,
    #[serde(default)]
    pub campus: Option<BilingualName>,
    #[serde(default)]
    pub exam_mode: Option<BilingualName>,
    #[serde(default)]
    pub teach_lang: Option<BilingualName>,
    #[serde(default)]
    pub credits: Option<f64>,
    #[serde(default)]
    pub period: Option<i32>,
    #[serde(default)]
    pub periods_per_week: Option<f64>,
    #[serde(default)]
    pub std_count: Option<i32>,
    #[serde(default)]
    pub limit_count: Option<i32>,
    #[serde(default)]
    pub graduate_and_postgraduate: Option<bool>,
    #[serde(default)]
    pub date_time_place_text: Option<Value>,
    #[serde(default)]
    pub date_time_place_person_text: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teacher_assignment_list: Vec<SectionTeacherRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin_classes: Vec<AdminClassRecord>,
}

/// `jw/api/schedule-table/datum/<section>.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDatum {
    pub result: ScheduleDatumResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDatumResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lesson_list: Vec<DatumLesson>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule_group_list: Vec<ScheduleGroupRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule_list: Vec<ScheduleRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatumLesson {
    #[serde(default, deserialize_with = "null_as_default")]
    pub teacher_assignment_list: Vec<DatumTeacherRecord>,
}

/// 课表数据中的授课教师，带教务系统的人员 ID
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatumTeacherRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub person_id: Option<i64>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGroupRecord {
    pub id: i64,
    pub lesson_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub no: i32,
    #[serde(default)]
    pub limit_count: Option<i32>,
    #[serde(default)]
    pub std_count: Option<i32>,
    #[serde(default)]
    pub actual_periods: Option<i32>,
    #[serde(default, rename = "default", deserialize_with = "null_as_default")]
    pub is_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub lesson_id: i64,
    #[serde(default)]
    pub schedule_group_id: Option<i64>,
    #[serde(default)]
    pub room: Option<RoomRecord>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub person_id: Option<i64>,
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub periods: Option<i32>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub weekday: Option<i32>,
    #[serde(default)]
    pub start_time: Option<i32>,
    #[serde(default)]
    pub end_time: Option<i32>,
    #[serde(default)]
    pub experiment: Option<Value>,
    #[serde(default)]
    pub custom_place: Option<String>,
    #[serde(default)]
    pub lesson_type: Option<Value>,
    #[serde(default)]
    pub week_index: Option<i32>,
    #[serde(default)]
    pub exercise_class: Option<bool>,
    #[serde(default)]
    pub start_unit: Option<i32>,
    #[serde(default)]
    pub end_unit: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default, rename = "virtual", deserialize_with = "null_as_default")]
    pub is_virtual: bool,
    #[serde(default)]
    pub seats_for_lesson: Option<i32>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub seats: Option<i32>,
    #[serde(default)]
    pub building: Option<BuildingRecord>,
    #[serde(default)]
    pub room_type: Option<RoomTypeRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub campus: Option<CampusRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: Option<String>,
}

/// 自由文本字段落库：字符串原样保存，其它 JSON 值保存其序列化文本
pub fn free_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chinese_name_is_absent() {
        let name: BilingualName = serde_json::from_str(r#"{"cn": "", "en": "Undergraduate"}"#)
            .expect("valid bilingual name");
        assert_eq!(name.name_cn(), None);
        assert_eq!(name.name_en(), Some("Undergraduate"));
    }

    #[test]
    fn test_section_record_tolerates_nulls() {
        let record: SectionRecord = serde_json::from_str(
            r#"{
                "id": 1001,
                "code": "CS1001.01",
                "course": {"id": 11, "code": "CS1001", "cn": "计算机程序设计", "en": null},
                "education": null,
                "openDepartment": null,
                "examMode": {"cn": "考试", "en": "Exam"},
                "credits": 3.5,
                "periodsPerWeek": 4,
                "dateTimePlacePersonText": {"cn": "1-16周", "en": null},
                "teacherAssignmentList": [{"cn": "张三", "en": "San Zhang", "departmentCode": "011"}]
            }"#,
        )
        .expect("section record should parse");

        assert!(record.education.is_none());
        assert!(record.open_department.is_none());
        assert_eq!(record.periods_per_week, Some(4.0));
        assert_eq!(record.teacher_assignment_list.len(), 1);
        assert!(record.admin_classes.is_empty());
        assert_eq!(
            free_text(record.date_time_place_person_text.as_ref()).as_deref(),
            Some(r#"{"cn":"1-16周","en":null}"#)
        );
    }

    #[test]
    fn test_null_scalars_fall_back_to_defaults() {
        let record: SectionRecord = serde_json::from_str(
            r#"{
                "id": 1002,
                "code": null,
                "course": {"id": 12, "code": null, "cn": null, "en": null},
                "openDepartment": {"code": null, "cn": null, "college": null},
                "teacherAssignmentList": null,
                "adminClasses": null
            }"#,
        )
        .expect("null scalars should parse");

        assert_eq!(record.code, "");
        assert_eq!(record.course.code, "");
        assert_eq!(record.course.cn, "");
        let department = record.open_department.expect("department present");
        assert_eq!(department.code, "");
        assert!(!department.college);
        assert!(record.teacher_assignment_list.is_empty());
        assert!(record.admin_classes.is_empty());

        let room: RoomRecord = serde_json::from_str(
            r#"{"id": 101, "code": null, "nameZh": null, "virtual": null, "building": null}"#,
        )
        .expect("room with null fields should parse");
        assert_eq!(room.code, "");
        assert!(!room.is_virtual);

        let group: ScheduleGroupRecord =
            serde_json::from_str(r#"{"id": 5, "lessonId": 1001, "no": null, "default": null}"#)
                .expect("group with null fields should parse");
        assert_eq!(group.no, 0);
        assert!(!group.is_default);
    }

    #[test]
    fn test_schedule_record_fields() {
        let record: ScheduleRecord = serde_json::from_str(
            r#"{
                "lessonId": 1001,
                "scheduleGroupId": 5,
                "room": null,
                "personId": 123,
                "personName": "张三",
                "date": "2024-09-09",
                "startTime": 1400,
                "exerciseClass": null,
                "lessonType": "理论"
            }"#,
        )
        .expect("schedule record should parse");

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 9, 9));
        assert_eq!(record.start_time, Some(1400));
        assert_eq!(record.exercise_class, None);
        assert_eq!(free_text(record.lesson_type.as_ref()).as_deref(), Some("理论"));
    }

    #[test]
    fn test_free_text_null() {
        assert_eq!(free_text(None), None);
        assert_eq!(free_text(Some(&Value::Null)), None);
        assert_eq!(free_text(Some(&Value::Bool(true))).as_deref(), Some("true"));
    }
}
