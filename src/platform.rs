//! Keyboard shortcut labels shown in help text

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password visibility shortcut display
pub const REVEAL_SHORTCUT: &str = "Ctrl+P";
