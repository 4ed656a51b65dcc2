/// Virtual environment activation - Gateway
mod activation;
mod detector;

pub use activation::ActivatedEnvironment;
pub use detector::{bin_dir, interpreter_path, locate_interpreter, resolve_interpreter};
