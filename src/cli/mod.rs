//! Interactive text menus
//!
//! This module drives the register/login/exit menu and the per-user session
//! menu, bridging line-based input with the service layer.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::run_main_menu;
pub use prompt::Prompter;
pub use session::{run_session, SessionEnd};

use crate::audit::AuditLogger;
use crate::config::Settings;

/// Shared, read-only state the menus need
pub struct MenuContext<'a> {
    pub settings: &'a Settings,
    /// Audit log to record changes in, when enabled
    pub audit: Option<&'a AuditLogger>,
}
