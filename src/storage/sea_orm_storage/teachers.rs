//! 教师查询

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::prelude::{Departments, Sections, Teachers};
use crate::entity::sections::Column as SectionColumn;
use crate::errors::{CatalogError, Result};
use crate::models::teachers::TeacherDetail;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 获取教师详情及其授课的教学班
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<TeacherDetail>> {
        let map_err =
            |e: sea_orm::DbErr| CatalogError::database_operation(format!("查询教师失败: {e}"));

        let Some(teacher) = Teachers::find_by_id(id).one(&self.db).await.map_err(map_err)? else {
            return Ok(None);
        };

        let department = match teacher.department_id {
            Some(department_id) => Departments::find_by_id(department_id)
                .one(&self.db)
                .await
                .map_err(map_err)?
                .map(|m| m.into_department()),
            None => None,
        };

        let sections = teacher
            .find_related(Sections)
            .order_by_asc(SectionColumn::JwId)
            .all(&self.db)
            .await
            .map_err(map_err)?;

        let course_ids: Vec<i64> = sections.iter().map(|s| s.course_id).collect();
        let courses: HashMap<i64, _> = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(map_err)?
            .into_iter()
            .map(|course| (course.id, course))
            .collect();

        let sections = sections
            .into_iter()
            .filter_map(|section| {
                let course = courses.get(&section.course_id)?;
                Some(section.into_summary(course))
            })
            .collect();

        Ok(Some(TeacherDetail {
            teacher: teacher.into_teacher(),
            department,
            sections,
        }))
    }
}
