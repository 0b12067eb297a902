use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "csvgen")]
#[command(about = "Generates a CSV file filled with random typed data")]
pub struct CliConfig {
    /// Path of the CSV file to create (overwritten if it exists)
    #[arg(long, default_value = "random_data.csv")]
    pub output: String,

    /// Number of columns, each assigned a random type
    #[arg(long, default_value = "5")]
    pub columns: usize,

    /// Number of data rows to write after the header
    #[arg(long, default_value = "10000")]
    pub rows: usize,

    /// Seed for deterministic output; omit for fresh randomness per run
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("output", &self.output)?;
        validate_positive_number("columns", self.columns, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(output: &str, columns: usize) -> CliConfig {
        CliConfig {
            output: output.to_string(),
            columns,
            rows: 10,
            seed: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(config("random_data.csv", 5).validate().is_ok());
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(config("random_data.csv", 0).validate().is_err());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        assert!(config("", 5).validate().is_err());
    }
}
