//! 校区实体
//!
//! 既作为教学班的维度（按中文名），也作为教学楼的上级（带教务系统 ID）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub jw_id: Option<i64>,
    #[sea_orm(unique)]
    pub name_cn: String,
    pub name_en: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::buildings::Entity")]
    Buildings,
}

impl Related<super::buildings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buildings.def()
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
