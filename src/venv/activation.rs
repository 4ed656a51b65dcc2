use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use super::detector;
use crate::app::Config;
use crate::utils::Pdf2SvgError;

/// Process-local equivalent of sourcing `venv/bin/activate`.
///
/// Nothing here touches the wrapper's own environment; the changes are
/// applied to the child command only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedEnvironment {
    pub interpreter: PathBuf,
    pub venv_root: Option<PathBuf>,
    pub set_vars: Vec<(OsString, OsString)>,
    pub removed_vars: Vec<OsString>,
}

impl ActivatedEnvironment {
    /// Activate according to the configuration, relative to `base`
    pub fn activate(config: &Config, base: &Path) -> Result<Self, Pdf2SvgError> {
        Self::activate_with_path(config, base, std::env::var_os("PATH"))
    }

    /// Same as [`activate`](Self::activate) with an explicit inherited `PATH`
    pub fn activate_with_path(
        config: &Config,
        base: &Path,
        inherited_path: Option<OsString>,
    ) -> Result<Self, Pdf2SvgError> {
        if let Some(spec) = &config.interpreter {
            let interpreter = detector::resolve_interpreter(spec, base)?;
            return Ok(Self {
                interpreter,
                venv_root: None,
                set_vars: Vec::new(),
                removed_vars: Vec::new(),
            });
        }

        let venv_root = config.venv_root(base);
        let interpreter = detector::locate_interpreter(&venv_root)?;

        let bin = detector::bin_dir(&venv_root);
        let mut entries = vec![bin];
        if let Some(path) = inherited_path.as_ref() {
            entries.extend(std::env::split_paths(path));
        }
        let path = std::env::join_paths(entries)
            .map_err(|e| Pdf2SvgError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))?;

        Ok(Self {
            interpreter,
            set_vars: vec![
                (OsString::from("VIRTUAL_ENV"), venv_root.clone().into_os_string()),
                (OsString::from("PATH"), path),
            ],
            removed_vars: vec![OsString::from("PYTHONHOME")],
            venv_root: Some(venv_root),
        })
    }

    /// Apply the environment changes to a child command
    pub fn apply(&self, cmd: &mut Command) {
        for key in &self.removed_vars {
            cmd.env_remove(key);
        }
        cmd.envs(self.set_vars.iter().map(|(k, v)| (k, v)));
    }
}
