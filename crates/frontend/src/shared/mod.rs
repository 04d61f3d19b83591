pub mod browser_state;
pub mod clipboard;
pub mod components;
pub mod email;
pub mod icons;
pub mod modal;
pub mod notify;
pub mod storage;
pub mod theme;
