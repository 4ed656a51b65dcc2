/// Converter dispatch - Gateway
mod dispatcher;
mod signals;

pub use dispatcher::{exit_code, Dispatcher};
