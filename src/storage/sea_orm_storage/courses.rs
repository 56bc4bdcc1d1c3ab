//! 课程查询

use super::SeaOrmStorage;
use crate::entity::{
    class_types, course_categories, course_classifies, course_gradations, course_types,
    education_levels,
};
use crate::entity::courses::{Column, Entity as Courses};
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::errors::{CatalogError, Result};
use crate::models::{common::LookupName, courses::CourseDetail};
use sea_orm::{ColumnTrait, EntityTrait, PrimaryKeyTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 按主键读取维度行并转换为名称
    pub(super) async fn find_lookup_name<E>(&self, id: Option<i64>) -> Result<Option<LookupName>>
    where
        E: EntityTrait,
        E::Model: Into<LookupName>,
        i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let Some(id) = id else {
            return Ok(None);
        };

        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询维度数据失败: {e}")))?;

        Ok(result.map(Into::into))
    }

    /// 通过教务 ID 获取课程详情
    pub async fn get_course_by_jw_id_impl(&self, jw_id: i64) -> Result<Option<CourseDetail>> {
        let Some(course) = Courses::find()
            .filter(Column::JwId.eq(jw_id))
            .one(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let sections = Sections::find()
            .filter(SectionColumn::CourseId.eq(course.id))
            .order_by_asc(SectionColumn::JwId)
            .all(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询教学班失败: {e}")))?
            .into_iter()
            .map(|section| section.into_summary(&course))
            .collect();

        Ok(Some(CourseDetail {
            education_level: self
                .find_lookup_name::<education_levels::Entity>(course.education_level_id)
                .await?,
            gradation: self
                .find_lookup_name::<course_gradations::Entity>(course.gradation_id)
                .await?,
            category: self
                .find_lookup_name::<course_categories::Entity>(course.category_id)
                .await?,
            class_type: self
                .find_lookup_name::<class_types::Entity>(course.class_type_id)
                .await?,
            course_type: self
                .find_lookup_name::<course_types::Entity>(course.type_id)
                .await?,
            classify: self
                .find_lookup_name::<course_classifies::Entity>(course.classify_id)
                .await?,
            sections,
            course: course.into_course(),
        }))
    }
}
