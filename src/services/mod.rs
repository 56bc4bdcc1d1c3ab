pub mod courses;
pub mod sections;
pub mod semesters;
pub mod system;
pub mod teachers;

pub use courses::CourseService;
pub use sections::SectionService;
pub use semesters::SemesterService;
pub use system::SystemService;
pub use teachers::TeacherService;
