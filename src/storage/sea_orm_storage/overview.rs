//! 概览统计

use super::SeaOrmStorage;
use crate::entity::prelude::{Courses, Sections, Semesters, Teachers};
use crate::entity::semesters::Column as SemesterColumn;
use crate::errors::{CatalogError, Result};
use crate::models::{semesters::Semester, system::CatalogCounts};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 统计各主要实体的行数
    pub async fn count_catalog_impl(&self) -> Result<CatalogCounts> {
        let map_err =
            |e: sea_orm::DbErr| CatalogError::database_operation(format!("统计数据失败: {e}"));

        Ok(CatalogCounts {
            semesters: Semesters::find().count(&self.db).await.map_err(map_err)?,
            courses: Courses::find().count(&self.db).await.map_err(map_err)?,
            sections: Sections::find().count(&self.db).await.map_err(map_err)?,
            teachers: Teachers::find().count(&self.db).await.map_err(map_err)?,
        })
    }

    /// 最近的学期
    pub async fn list_recent_semesters_impl(&self, limit: u64) -> Result<Vec<Semester>> {
        let results = Semesters::find()
            .order_by_desc(SemesterColumn::StartDate)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询学期失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_semester()).collect())
    }
}
