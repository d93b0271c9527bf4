pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::copy::CopyCommand;
pub use domain::model::{output_path_for, CopyPlan};
pub use utils::error::{ProcessorError, Result};
