//! 预导入模块，方便使用

pub use super::admin_classes::{Entity as AdminClasses, Model as AdminClassModel};
pub use super::buildings::{Entity as Buildings, Model as BuildingModel};
pub use super::campuses::{Entity as Campuses, Model as CampusModel};
pub use super::courses::{Entity as Courses, Model as CourseModel};
pub use super::departments::{Entity as Departments, Model as DepartmentModel};
pub use super::room_types::{Entity as RoomTypes, Model as RoomTypeModel};
pub use super::rooms::{Entity as Rooms, Model as RoomModel};
pub use super::schedule_groups::{Entity as ScheduleGroups, Model as ScheduleGroupModel};
pub use super::schedules::{Entity as Schedules, Model as ScheduleModel};
pub use super::section_admin_classes::Entity as SectionAdminClasses;
pub use super::section_teachers::Entity as SectionTeachers;
pub use super::sections::{Entity as Sections, Model as SectionModel};
pub use super::semesters::{Entity as Semesters, Model as SemesterModel};
pub use super::teachers::{Entity as Teachers, Model as TeacherModel};
