pub mod courses;

pub mod sections;

pub mod semesters;

pub mod system;

pub mod teachers;

pub use courses::configure_courses_routes;
pub use sections::configure_sections_routes;
pub use semesters::configure_semesters_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teachers_routes;
