//! 行政班实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name_cn: String,
    pub name_en: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::section_admin_classes::Entity")]
    SectionAdminClasses,
}

impl Related<super::section_admin_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SectionAdminClasses.def()
    }
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        super::section_admin_classes::Relation::Section.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::section_admin_classes::Relation::AdminClass.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::common::LookupName {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name_cn: model.name_cn,
            name_en: model.name_en,
        }
    }
}
