use serde::{Deserialize, Serialize};

/// 维度表、行政班等只有双语名称的引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupName {
    pub id: i64,
    pub name_cn: String,
    pub name_en: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub code: String,
    pub name_cn: String,
    pub name_en: Option<String>,
    pub is_college: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    // 教务系统人员 ID
    pub person_id: Option<i64>,
    // 教务系统教师 ID
    pub teacher_id: Option<i64>,
    pub name_cn: String,
    pub name_en: Option<String>,
    pub department_id: Option<i64>,
}
