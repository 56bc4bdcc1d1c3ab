pub mod responses;

pub use responses::{CatalogCounts, OverviewResponse};
