//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub jw_id: i64,
    pub code: String,
    pub name_cn: String,
    pub name_en: Option<String>,
    pub education_level_id: Option<i64>,
    pub gradation_id: Option<i64>,
    pub category_id: Option<i64>,
    pub class_type_id: Option<i64>,
    pub type_id: Option<i64>,
    pub classify_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sections::Entity")]
    Sections,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::Course {
        crate::models::courses::Course {
            id: self.id,
            jw_id: self.jw_id,
            code: self.code,
            name_cn: self.name_cn,
            name_en: self.name_en,
        }
    }
}
