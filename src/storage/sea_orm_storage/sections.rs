//! 教学班与排课查询

use super::SeaOrmStorage;
use crate::entity::prelude::{
    AdminClasses, Buildings, Courses, Departments, Rooms, ScheduleGroups, Schedules, Semesters,
    Teachers,
};
use crate::entity::{
    admin_classes, campuses, exam_modes, rooms, schedule_groups, schedules, sections,
    teach_languages, teachers,
};
use crate::errors::{CatalogError, Result};
use crate::models::{
    schedules::{ScheduleItem, ScheduleRoom},
    sections::SectionDetail,
};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

impl SeaOrmStorage {
    async fn find_section_by_jw_id(&self, jw_id: i64) -> Result<Option<sections::Model>> {
        sections::Entity::find()
            .filter(sections::Column::JwId.eq(jw_id))
            .one(&self.db)
            .await
            .map_err(|e| CatalogError::database_operation(format!("查询教学班失败: {e}")))
    }

    /// 通过教务 ID 获取教学班详情
    pub async fn get_section_by_jw_id_impl(&self, jw_id: i64) -> Result<Option<SectionDetail>> {
        let Some(section) = self.find_section_by_jw_id(jw_id).await? else {
            return Ok(None);
        };

        let map_err =
            |e: sea_orm::DbErr| CatalogError::database_operation(format!("查询关联数据失败: {e}"));

        let course = Courses::find_by_id(section.course_id)
            .one(&self.db)
            .await
            .map_err(map_err)?
            .ok_or_else(|| CatalogError::not_found(format!("教学班 {jw_id} 的课程不存在")))?;
        let semester = Semesters::find_by_id(section.semester_id)
            .one(&self.db)
            .await
            .map_err(map_err)?
            .ok_or_else(|| CatalogError::not_found(format!("教学班 {jw_id} 的学期不存在")))?;
        let open_department = match section.open_department_id {
            Some(id) => Departments::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(map_err)?
                .map(|m| m.into_department()),
            None => None,
        };

        let teachers = section
            .find_related(Teachers)
            .order_by_asc(teachers::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_err)?
            .into_iter()
            .map(|m| m.into_teacher())
            .collect();
        let admin_classes = section
            .find_related(AdminClasses)
            .order_by_asc(admin_classes::Column::NameCn)
            .all(&self.db)
            .await
            .map_err(map_err)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Some(SectionDetail {
            id: section.id,
            jw_id: section.jw_id,
            code: section.code,
            semester: semester.into_semester(),
            course: course.into_course(),
            open_department,
            campus: self
                .find_lookup_name::<campuses::Entity>(section.campus_id)
                .await?,
            exam_mode: self
                .find_lookup_name::<exam_modes::Entity>(section.exam_mode_id)
                .await?,
            teach_language: self
                .find_lookup_name::<teach_languages::Entity>(section.teach_language_id)
                .await?,
            credits: section.credits,
            period: section.period,
            periods_per_week: section.periods_per_week,
            std_count: section.std_count,
            limit_count: section.limit_count,
            graduate_and_postgraduate: section.graduate_and_postgraduate,
            date_time_place_text: section.date_time_place_text,
            date_time_place_person_text: section.date_time_place_person_text,
            teachers,
            admin_classes,
        }))
    }

    /// 列出教学班的排课，按日期、开始时间排序
    pub async fn list_section_schedules_impl(
        &self,
        jw_id: i64,
    ) -> Result<Option<Vec<ScheduleItem>>> {
        let Some(section) = self.find_section_by_jw_id(jw_id).await? else {
            return Ok(None);
        };

        let map_err =
            |e: sea_orm::DbErr| CatalogError::database_operation(format!("查询排课失败: {e}"));

        let results = Schedules::find()
            .find_also_related(Teachers)
            .filter(schedules::Column::SectionId.eq(section.id))
            .order_by_asc(schedules::Column::Date)
            .order_by_asc(schedules::Column::StartTime)
            .order_by_asc(schedules::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_err)?;

        // 教室与分组批量加载
        let room_ids: Vec<i64> = results.iter().filter_map(|(s, _)| s.room_id).collect();
        let rooms: HashMap<i64, ScheduleRoom> = Rooms::find()
            .find_also_related(Buildings)
            .filter(rooms::Column::Id.is_in(room_ids))
            .all(&self.db)
            .await
            .map_err(map_err)?
            .into_iter()
            .map(|(room, building)| {
                (
                    room.id,
                    ScheduleRoom {
                        id: room.id,
                        jw_id: room.jw_id,
                        name_cn: room.name_cn,
                        name_en: room.name_en,
                        building_name_cn: building.map(|b| b.name_cn),
                    },
                )
            })
            .collect();

        let group_ids: Vec<i64> = results
            .iter()
            .filter_map(|(s, _)| s.schedule_group_id)
            .collect();
        let group_numbers: HashMap<i64, i32> = ScheduleGroups::find()
            .filter(schedule_groups::Column::Id.is_in(group_ids))
            .all(&self.db)
            .await
            .map_err(map_err)?
            .into_iter()
            .map(|group| (group.id, group.no))
            .collect();

        let items = results
            .into_iter()
            .map(|(schedule, teacher)| ScheduleItem {
                id: schedule.id,
                date: schedule.date,
                weekday: schedule.weekday,
                start_time: schedule.start_time,
                end_time: schedule.end_time,
                start_unit: schedule.start_unit,
                end_unit: schedule.end_unit,
                periods: schedule.periods,
                week_index: schedule.week_index,
                schedule_group_no: schedule
                    .schedule_group_id
                    .and_then(|id| group_numbers.get(&id).copied()),
                room: schedule.room_id.and_then(|id| rooms.get(&id).cloned()),
                teacher_id: schedule.teacher_id,
                teacher_name_cn: teacher.map(|t| t.name_cn).unwrap_or_default(),
                custom_place: schedule.custom_place,
                lesson_type: schedule.lesson_type,
                experiment: schedule.experiment,
                exercise_class: schedule.exercise_class,
            })
            .collect();

        Ok(Some(items))
    }
}
