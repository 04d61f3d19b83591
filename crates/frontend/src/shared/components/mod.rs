pub mod badge;
pub mod card_animated;
pub mod page_header;

pub use badge::{Badge, BadgeVariant, TagList};
pub use card_animated::CardAnimated;
pub use page_header::PageHeader;
