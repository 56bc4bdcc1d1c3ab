pub mod entities;

pub use entities::{SectionDetail, SectionSummary};
