use std::ffi::OsString;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

use super::signals::ForegroundSignals;
use crate::{
    app::Config,
    cli::ConverterArgs,
    constants::{EXIT_FAILURE, EXIT_SIGNAL_BASE},
    utils::Pdf2SvgError,
    venv::ActivatedEnvironment,
};

/// Runs the external converter inside its prepared environment
pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Activate the environment, run the converter with `args` and wait for it.
    ///
    /// Returns the converter's exit status as the wrapper's exit code. Only
    /// failures before the converter starts are errors.
    pub async fn dispatch(&self, args: &[OsString]) -> Result<i32, Pdf2SvgError> {
        let base = self.config.resolve_base_dir()?;
        let env = ActivatedEnvironment::activate(&self.config, &base)?;
        let script = self.config.script_path(&base);

        debug!(
            interpreter = %env.interpreter.display(),
            venv = ?env.venv_root,
            script = %script.display(),
            args = ?args,
            "dispatching to converter"
        );
        if let Some(flags) = ConverterArgs::inspect(args) {
            debug!(
                pdf = %flags.pdf_file.display(),
                output = ?flags.output,
                merge = flags.merge,
                interactive = flags.interactive,
                "converter request"
            );
        }

        let mut cmd = Command::new(&env.interpreter);
        cmd.arg(&script)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        env.apply(&mut cmd);

        let mut signals = ForegroundSignals::install()?;
        let mut child = cmd.spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Pdf2SvgError::InterpreterNotFound {
                    path: env.interpreter.clone(),
                }
            } else {
                Pdf2SvgError::Spawn {
                    program: env.interpreter.clone(),
                    source,
                }
            }
        })?;

        let status = signals.wait(&mut child).await?;
        debug!(%status, "converter finished");
        Ok(exit_code(status))
    }
}

/// Map a child's exit status to the code the wrapper exits with
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return EXIT_SIGNAL_BASE + signal;
        }
    }

    EXIT_FAILURE
}
