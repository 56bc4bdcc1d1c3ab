//! 教学班实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub jw_id: i64,
    pub code: String,
    pub course_id: i64,
    pub semester_id: i64,
    pub open_department_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub exam_mode_id: Option<i64>,
    pub teach_language_id: Option<i64>,
    pub credits: Option<f64>,
    pub period: Option<i32>,
    pub periods_per_week: Option<f64>,
    pub std_count: Option<i32>,
    pub limit_count: Option<i32>,
    pub graduate_and_postgraduate: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub date_time_place_text: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub date_time_place_person_text: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::semesters::Entity",
        from = "Column::SemesterId",
        to = "super::semesters::Column::Id"
    )]
    Semester,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::OpenDepartmentId",
        to = "super::departments::Column::Id"
    )]
    OpenDepartment,
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
    #[sea_orm(has_many = "super::schedule_groups::Entity")]
    ScheduleGroups,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpenDepartment.def()
    }
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::schedule_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleGroups.def()
    }
}

// 多对多：教学班 <-> 教师
impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        super::section_teachers::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::section_teachers::Relation::Section.def().rev())
    }
}

// 多对多：教学班 <-> 行政班
impl Related<super::admin_classes::Entity> for Entity {
    fn to() -> RelationDef {
        super::section_admin_classes::Relation::AdminClass.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::section_admin_classes::Relation::Section.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_summary(
        self,
        course: &super::courses::Model,
    ) -> crate::models::sections::SectionSummary {
        crate::models::sections::SectionSummary {
            id: self.id,
            jw_id: self.jw_id,
            code: self.code,
            course_jw_id: course.jw_id,
            course_name_cn: course.name_cn.clone(),
            course_name_en: course.name_en.clone(),
            credits: self.credits,
        }
    }
}
