//! Constants used throughout larder

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["larder.json", "larder.yaml", "larder.yml"];

/// Prompt kind names, used in logs and errors
pub mod kinds {
    pub const CONFIRM: &str = "confirm";
    pub const SCOPE: &str = "global-or-specific";
    pub const RESTORE: &str = "restore-choice";
}

/// Label keys understood by the label lookup, with their English defaults
pub mod labels {
    pub const SAVE: (&str, &str) = ("save", "Save");
    pub const DELETE: (&str, &str) = ("delete", "Delete");
    pub const CANCEL: (&str, &str) = ("cancel", "Cancel");
    pub const GLOBAL: (&str, &str) = ("global", "Everywhere");
    pub const SPECIFIC: (&str, &str) = ("specific", "Only this preparation");
    pub const REPLACE: (&str, &str) = ("replace", "Replace current data");
    pub const ADD_NEW: (&str, &str) = ("add_new", "Add as new entries");
    pub const RESTORE_QUESTION: (&str, &str) =
        ("restore_question", "How should the backup be restored?");
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
