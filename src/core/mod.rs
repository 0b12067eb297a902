pub mod generator;

pub use crate::domain::model::{Column, ColumnType, Value};
pub use crate::utils::error::Result;
