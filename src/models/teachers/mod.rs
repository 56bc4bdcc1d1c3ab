pub mod responses;

pub use responses::TeacherDetail;
