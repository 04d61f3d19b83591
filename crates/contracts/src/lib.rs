//! Domain types, static content and pure operations of the portfolio site.
//!
//! Nothing here touches the browser, so the whole crate is tested natively.

pub mod domain;
pub mod enums;
pub mod shared;
