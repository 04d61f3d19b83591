pub mod resolver;
pub mod tree;

pub use resolver::{
    header_link_is_active, header_links, resolve_active_state, ComputedNavChild, ComputedNavNode,
};
pub use tree::{NavChild, NavIcon, NavNode, NavPriority, NAV_ITEMS};
