//! 教师实体
//!
//! `person_id` / `teacher_id` 均可能缺失，只有中文名一定存在。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub person_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub name_cn: String,
    pub name_en: Option<String>,
    pub department_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::section_teachers::Entity")]
    SectionTeachers,
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::section_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SectionTeachers.def()
    }
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

// 多对多：教师 <-> 教学班
impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        super::section_teachers::Relation::Section.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::section_teachers::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 没有任何外部 ID 的教师，仅凭姓名识别
    pub fn is_anonymous(&self) -> bool {
        self.person_id.is_none() && self.teacher_id.is_none()
    }

    pub fn into_teacher(self) -> crate::models::common::Teacher {
        crate::models::common::Teacher {
            id: self.id,
            person_id: self.person_id,
            teacher_id: self.teacher_id,
            name_cn: self.name_cn,
            name_en: self.name_en,
            department_id: self.department_id,
        }
    }
}
