use std::path::PathBuf;
use thiserror::Error;

use crate::constants::{EXIT_CANNOT_EXECUTE, EXIT_CONFIG, EXIT_FAILURE, EXIT_NOT_FOUND};

/// Main error type for pdf2svg
#[derive(Error, Debug)]
pub enum Pdf2SvgError {
    #[error("虚拟环境不存在: {}", path.display())]
    EnvironmentMissing { path: PathBuf },

    #[error("找不到Python解释器: {}", path.display())]
    InterpreterNotFound { path: PathBuf },

    #[error("无法启动 {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置错误: {0}")]
    Config(String),

    #[error("输入输出错误: {0}")]
    Io(#[from] std::io::Error),
}

impl Pdf2SvgError {
    /// Exit status the wrapper terminates with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EnvironmentMissing { .. } | Self::InterpreterNotFound { .. } => EXIT_NOT_FOUND,
            Self::Spawn { .. } => EXIT_CANNOT_EXECUTE,
            Self::Config(_) => EXIT_CONFIG,
            Self::Io(_) => EXIT_FAILURE,
        }
    }
}

impl From<figment::Error> for Pdf2SvgError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}
