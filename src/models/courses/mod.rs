pub mod entities;

pub use entities::{Course, CourseDetail};
