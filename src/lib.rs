pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::generator::CsvGenerator;
pub use domain::model::{Column, ColumnType, Value};
pub use utils::error::{GenError, Result};
