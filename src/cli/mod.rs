/// Argument gate and usage text - Gateway
mod args;
mod usage;

pub use args::{ConverterArgs, Invocation};
pub use usage::{print_usage, write_usage, USAGE};
