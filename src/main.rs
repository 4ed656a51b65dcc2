use anyhow::Result;
use colored::Colorize;
use std::ffi::OsString;

use pdf2svg::{
    app::load_config,
    cli::{print_usage, Invocation},
    constants::EXIT_USAGE,
    runtime::Dispatcher,
    utils::{init_logger, Pdf2SvgError},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Gate before anything else: no arguments means no side effects beyond the usage text
    let args = match Invocation::from_env() {
        Invocation::Usage => {
            print_usage()?;
            std::process::exit(EXIT_USAGE);
        }
        Invocation::Convert(args) => args,
    };

    init_logger();

    let code = match run(&args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "错误:".red(), e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}

/// Load configuration and hand the arguments to the converter
async fn run(args: &[OsString]) -> Result<i32, Pdf2SvgError> {
    let config = load_config()?;
    Dispatcher::new(config).dispatch(args).await
}
