//! 院系实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 院系代码，稳定的业务主键
    #[sea_orm(unique)]
    pub code: String,
    pub name_cn: String,
    pub name_en: Option<String>,
    pub is_college: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teachers::Entity")]
    Teachers,
    #[sea_orm(has_many = "super::sections::Entity")]
    Sections,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teachers.def()
    }
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_department(self) -> crate::models::common::Department {
        crate::models::common::Department {
            id: self.id,
            code: self.code,
            name_cn: self.name_cn,
            name_en: self.name_en,
            is_college: self.is_college,
        }
    }
}
