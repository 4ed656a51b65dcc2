pub mod app;
pub mod cli;
pub mod constants;
pub mod runtime;
pub mod utils;
pub mod venv;

pub use app::{load_config, Config};
pub use cli::Invocation;
pub use runtime::Dispatcher;
pub use utils::Pdf2SvgError;
