//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Revert-to-saved shortcut display
#[cfg(target_os = "macos")]
pub const RELOAD_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RELOAD_SHORTCUT: &str = "Ctrl+R";

/// Forget saved data shortcut display
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+K";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "Ctrl+K";
