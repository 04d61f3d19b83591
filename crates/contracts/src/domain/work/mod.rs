pub mod catalog;
pub mod filter;

pub use catalog::{ProjectRecord, PROJECTS};
pub use filter::{filter_by_focus, gallery_summary};
