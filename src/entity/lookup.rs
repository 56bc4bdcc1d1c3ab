//! 双语维度表实体
//!
//! 学历层次、课程类别等维度表结构完全一致（中文名唯一 + 可空英文名），
//! 由宏统一生成，每张表一个子模块。

macro_rules! define_lookup_entity {
    ($(
        $module:ident => $table:tt
    ),* $(,)?) => {
        $(
            pub mod $module {
                use sea_orm::entity::prelude::*;

                #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
                #[sea_orm(table_name = $table)]
                pub struct Model {
                    #[sea_orm(primary_key)]
                    pub id: i64,
                    #[sea_orm(unique)]
                    pub name_cn: String,
                    pub name_en: Option<String>,
                }

                #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
                pub enum Relation {}

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
            }
        )*
    };
}

define_lookup_entity! {
    education_levels => "education_levels",
    course_categories => "course_categories",
    course_classifies => "course_classifies",
    class_types => "class_types",
    course_types => "course_types",
    course_gradations => "course_gradations",
    exam_modes => "exam_modes",
    teach_languages => "teach_languages",
}
