pub mod about;
pub mod experience;
pub mod expertise;
pub mod hire_me;
pub mod navigation;
pub mod work;
