pub mod nav_footer;
pub mod sidebar;

pub use nav_footer::NavFooter;
pub use sidebar::Sidebar;
