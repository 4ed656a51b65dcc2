use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_APP_NAME, CONFIG_FILE_NAME, DEFAULT_CONVERTER_SCRIPT, DEFAULT_VENV_DIR, ENV_PREFIX,
    LOCAL_CONFIG_PATH,
};
use crate::utils::Pdf2SvgError;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory relative paths are resolved against (defaults to the working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// Virtual environment root
    #[serde(default = "default_venv_dir")]
    pub venv_dir: PathBuf,

    /// Converter script handed to the interpreter
    #[serde(default = "default_script")]
    pub script: PathBuf,

    /// Interpreter override; skips virtual environment activation when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<PathBuf>,
}

fn default_venv_dir() -> PathBuf {
    PathBuf::from(DEFAULT_VENV_DIR)
}

fn default_script() -> PathBuf {
    PathBuf::from(DEFAULT_CONVERTER_SCRIPT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: None,
            venv_dir: default_venv_dir(),
            script: default_script(),
            interpreter: None,
        }
    }
}

impl Config {
    /// Directory the venv and script are looked up in
    pub fn resolve_base_dir(&self) -> Result<PathBuf, Pdf2SvgError> {
        match &self.base_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(std::env::current_dir()?.join(dir)),
            None => Ok(std::env::current_dir()?),
        }
    }

    pub fn venv_root(&self, base: &Path) -> PathBuf {
        resolve_against(base, &self.venv_dir)
    }

    pub fn script_path(&self, base: &Path) -> PathBuf {
        resolve_against(base, &self.script)
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config, Pdf2SvgError> {
    let global_config = get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME));
    load_config_from(global_config.as_deref(), Path::new(LOCAL_CONFIG_PATH))
}

/// Layer defaults, the global file, the project file and `PDF2SVG_*` variables
pub fn load_config_from(global: Option<&Path>, local: &Path) -> Result<Config, Pdf2SvgError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(global) = global.filter(|p| p.exists()) {
        figment = figment.merge(Toml::file(global));
    }

    if local.exists() {
        figment = figment.merge(Toml::file(local));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX));

    Ok(figment.extract()?)
}

/// Get the global configuration directory, if the platform has one
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", CONFIG_APP_NAME) {
        return Some(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to home directory
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join(CONFIG_APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_files() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let config = load_config_from(Some(missing.as_path()), &missing).unwrap();
        assert_eq!(config.venv_dir, PathBuf::from("venv"));
        assert_eq!(config.script, PathBuf::from("pdf_to_svg.py"));
        assert_eq!(config.interpreter, None);
    }

    #[test]
    fn test_local_overrides_global() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let local = temp_dir.path().join("local.toml");
        std::fs::write(&global, "venv_dir = \".venv\"\nscript = \"tools/convert.py\"\n").unwrap();
        std::fs::write(&local, "venv_dir = \"env\"\n").unwrap();

        let config = load_config_from(Some(global.as_path()), &local).unwrap();
        assert_eq!(config.venv_dir, PathBuf::from("env"));
        assert_eq!(config.script, PathBuf::from("tools/convert.py"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("config.toml");
        std::fs::write(&local, "venv_dir = [").unwrap();

        let err = load_config_from(None, &local).unwrap_err();
        assert!(matches!(err, Pdf2SvgError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_paths_resolve_against_base() {
        let config = Config {
            base_dir: Some(PathBuf::from("/opt/stitch")),
            script: PathBuf::from("/usr/share/pdf_to_svg.py"),
            ..Config::default()
        };
        let base = config.resolve_base_dir().unwrap();

        assert_eq!(base, PathBuf::from("/opt/stitch"));
        assert_eq!(config.venv_root(&base), PathBuf::from("/opt/stitch/venv"));
        assert_eq!(config.script_path(&base), PathBuf::from("/usr/share/pdf_to_svg.py"));
    }
}
