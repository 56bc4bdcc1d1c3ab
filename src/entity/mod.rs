//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的 API 响应结构分离。
//! 导入流水线直接操作这些实体，Storage 层查询后再转换为 models 中的结构。

pub mod prelude;

mod lookup;

pub mod admin_classes;
pub mod buildings;
pub mod campuses;
pub mod courses;
pub mod departments;
pub mod room_types;
pub mod rooms;
pub mod schedule_groups;
pub mod schedules;
pub mod section_admin_classes;
pub mod section_teachers;
pub mod sections;
pub mod semesters;
pub mod teachers;

pub use lookup::{
    class_types, course_categories, course_classifies, course_gradations, course_types,
    education_levels, exam_modes, teach_languages,
};
