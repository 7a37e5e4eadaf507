//! Platform-specific key hints

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Enter also submits)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Ctrl+C";

/// Key that switches between the two forms
pub const SWITCH_FORM_KEY: &str = "F2";

/// Help line shown under a form
pub fn form_help() -> String {
    format!(
        "Tab/Shift+Tab: move | \u{2190}/\u{2192}: choose | Enter/{SUBMIT_SHORTCUT}: submit | {SWITCH_FORM_KEY}: switch form | {QUIT_SHORTCUT}: quit"
    )
}

/// Help line shown on the result page
pub fn submitted_help() -> String {
    format!("Esc: back | n: new entry | q/{QUIT_SHORTCUT}: quit")
}
