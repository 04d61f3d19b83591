use crate::enums::ProjectFocus;

/// Ambient UI state supplied by the hosting shell.
///
/// Built fresh from the router location and browser listeners; logic reads it
/// instead of reaching for globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellContext {
    /// Path without query string or fragment
    pub current_path: String,
    pub current_focus: ProjectFocus,
    pub is_online: bool,
    pub is_idle: bool,
    pub reduce_motion: bool,
}

impl Default for ShellContext {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            current_focus: ProjectFocus::All,
            is_online: true,
            is_idle: false,
            reduce_motion: false,
        }
    }
}
