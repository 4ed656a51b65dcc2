/// Constants module to avoid magic numbers in the codebase

// Converter defaults
pub const DEFAULT_VENV_DIR: &str = "venv";
pub const DEFAULT_CONVERTER_SCRIPT: &str = "pdf_to_svg.py";

// Configuration
pub const CONFIG_APP_NAME: &str = "pdf2svg";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_PATH: &str = ".pdf2svg/config.toml";
pub const ENV_PREFIX: &str = "PDF2SVG_";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Exit codes (shell conventions)
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_CANNOT_EXECUTE: i32 = 126;
pub const EXIT_NOT_FOUND: i32 = 127;
pub const EXIT_SIGNAL_BASE: i32 = 128;

// Virtual environment layout
#[cfg(windows)]
pub const VENV_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const VENV_BIN_DIR: &str = "bin";

#[cfg(windows)]
pub const VENV_PYTHON: &str = "python.exe";
#[cfg(not(windows))]
pub const VENV_PYTHON: &str = "python";
