//! 排课实体
//!
//! 每次导入都会整体删除并重建某教学班的排课记录，`id` 不跨导入保持稳定。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub section_id: i64,
    pub schedule_group_id: Option<i64>,
    pub room_id: Option<i64>,
    pub teacher_id: i64,
    pub periods: Option<i32>,
    pub date: Option<Date>,
    pub weekday: Option<i32>,
    pub start_time: Option<i32>,
    pub end_time: Option<i32>,
    pub experiment: Option<String>,
    pub custom_place: Option<String>,
    pub lesson_type: Option<String>,
    pub week_index: Option<i32>,
    pub exercise_class: bool,
    pub start_unit: Option<i32>,
    pub end_unit: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::schedule_groups::Entity",
        from = "Column::ScheduleGroupId",
        to = "super::schedule_groups::Column::Id"
    )]
    ScheduleGroup,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::schedule_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleGroup.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
