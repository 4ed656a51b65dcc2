use std::path::{Path, PathBuf};

use crate::constants::{VENV_BIN_DIR, VENV_PYTHON};
use crate::utils::Pdf2SvgError;

/// Executable directory inside a virtual environment
pub fn bin_dir(venv_root: &Path) -> PathBuf {
    venv_root.join(VENV_BIN_DIR)
}

/// Interpreter inside a virtual environment
pub fn interpreter_path(venv_root: &Path) -> PathBuf {
    bin_dir(venv_root).join(VENV_PYTHON)
}

/// Check that the venv exists and hand back its interpreter
pub fn locate_interpreter(venv_root: &Path) -> Result<PathBuf, Pdf2SvgError> {
    if !venv_root.is_dir() {
        return Err(Pdf2SvgError::EnvironmentMissing {
            path: venv_root.to_path_buf(),
        });
    }

    let python = interpreter_path(venv_root);
    if !python.is_file() {
        return Err(Pdf2SvgError::InterpreterNotFound { path: python });
    }

    Ok(python)
}

/// Resolve an explicitly configured interpreter.
///
/// Bare names (`python3`) are looked up on `PATH`; anything with a directory
/// component is resolved against `base`.
pub fn resolve_interpreter(spec: &Path, base: &Path) -> Result<PathBuf, Pdf2SvgError> {
    let has_dir = spec.components().count() > 1 || spec.is_absolute();

    if has_dir {
        let path = if spec.is_absolute() { spec.to_path_buf() } else { base.join(spec) };
        if path.is_file() {
            Ok(path)
        } else {
            Err(Pdf2SvgError::InterpreterNotFound { path })
        }
    } else {
        which::which(spec).map_err(|_| Pdf2SvgError::InterpreterNotFound {
            path: spec.to_path_buf(),
        })
    }
}
