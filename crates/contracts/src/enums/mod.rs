pub mod opportunity_type;
pub mod project_focus;

pub use opportunity_type::OpportunityType;
pub use project_focus::{normalize_focus, ProjectFocus};
