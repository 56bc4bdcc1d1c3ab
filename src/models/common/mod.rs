mod entities;
pub mod error_code;
pub mod response;

pub use entities::{Department, LookupName, Teacher};
