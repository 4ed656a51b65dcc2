use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::DEFAULT_CONVERTER_SCRIPT;

/// What the wrapper was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments at all: show usage and fail
    Usage,
    /// Forward these arguments, untouched, to the converter
    Convert(Vec<OsString>),
}

impl Invocation {
    /// Gate on the argument count. The program name must already be stripped.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        if args.is_empty() {
            Self::Usage
        } else {
            Self::Convert(args)
        }
    }

    /// Gate on the current process arguments
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os().skip(1))
    }
}

/// Flags understood by the converter itself.
///
/// The wrapper never acts on these; they are parsed only so that dispatch can
/// be logged in readable form. The forwarded argument list stays the source of
/// truth.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pdf_to_svg.py")]
#[command(about = "将Cross Stitch PDF转换为SVG格式", long_about = None)]
#[command(disable_version_flag = true)]
pub struct ConverterArgs {
    /// 输入的PDF文件路径
    pub pdf_file: PathBuf,

    /// 输出目录（默认为PDF所在目录）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 合并所有页面为单个SVG文件
    #[arg(long)]
    pub merge: bool,

    /// 添加交互特性（悬停效果、点击标记等）
    #[arg(long)]
    pub interactive: bool,
}

impl ConverterArgs {
    /// Best-effort view of forwarded arguments; `None` when the converter would reject them
    pub fn inspect(args: &[OsString]) -> Option<Self> {
        let argv = std::iter::once(OsString::from(DEFAULT_CONVERTER_SCRIPT)).chain(args.iter().cloned());
        match Self::try_parse_from(argv) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!("converter flags not recognised: {:?}", e.kind());
                None
            }
        }
    }
}
