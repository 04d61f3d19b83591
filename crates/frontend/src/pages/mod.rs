pub mod about;
pub mod experience;
pub mod expertise;
pub mod hire_me;
pub mod home;
pub mod not_found;
pub mod work;
