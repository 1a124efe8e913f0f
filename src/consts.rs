// src/consts.rs
//! Shared constants: store layout and export defaults

/// Default password-store location, before `~` expansion
pub const DEFAULT_STORE_DIR: &str = "~/.password-store";

/// Suffix of every encrypted entry in the store
pub const DEFAULT_SECRET_SUFFIX: &str = ".gpg";

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "bitwarden_smart_import.csv";

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pass-export.toml";

/// Env var naming an alternative config file
pub const CONFIG_ENV_VAR: &str = "PASS_EXPORT_CONFIG";

/// Env var `pass` itself uses for the store location
pub const STORE_DIR_ENV_VAR: &str = "PASSWORD_STORE_DIR";

/// Folder label used by the flat strategy
pub const DEFAULT_FLAT_FOLDER: &str = "Imported";

// Add more TLDs as needed: |app|cloud|local
pub const DEFAULT_URL_PATTERN: &str = r".*\.(com|org|net|io|dev|co|edu|gov)$";

/// Separator used for nested Bitwarden folders and path-qualified names
pub const FOLDER_SEPARATOR: &str = "/";

/// Bitwarden CSV header, in column order
pub const CSV_HEADER: [&str; 6] = [
    "folder",
    "name",
    "login_username",
    "login_password",
    "login_uri",
    "notes",
];
