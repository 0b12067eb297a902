use crate::core::{Column, ColumnType, Result, Value};
use rand::Rng;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a CSV file whose columns each carry a randomly chosen primitive
/// type. The schema is drawn once at construction and stays fixed; every
/// row then matches it column for column.
pub struct CsvGenerator {
    columns: Vec<Column>,
}

impl CsvGenerator {
    /// Draws a random type for each of `num_columns` columns. Building a new
    /// generator re-randomizes the schema independently.
    pub fn random<R: Rng + ?Sized>(num_columns: usize, rng: &mut R) -> Self {
        let columns: Vec<Column> = (0..num_columns)
            .map(|index| Column::new(index, ColumnType::random(rng)))
            .collect();

        for column in &columns {
            tracing::debug!("Column {} typed as {}", column.header, column.column_type);
        }

        Self { columns }
    }

    /// Uses a caller-supplied schema instead of a random one.
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Samples one value per column, in column-index order.
    pub fn sample_row<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Value> {
        self.columns
            .iter()
            .map(|column| column.column_type.sample(rng))
            .collect()
    }

    /// Writes the header row followed by `num_rows` data rows. Quoting and
    /// escaping follow standard CSV rules via the `csv` writer.
    pub fn write_to<W: Write, R: Rng + ?Sized>(
        &self,
        writer: W,
        num_rows: usize,
        rng: &mut R,
    ) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(self.columns.iter().map(|column| column.header.as_str()))?;

        for _ in 0..num_rows {
            let row = self.sample_row(rng);
            wtr.write_record(row.iter().map(|value| value.to_string()))?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Creates (or overwrites) the file at `path` and streams the rows into
    /// it. The handle is flushed and closed before this returns; on failure
    /// a truncated file may remain.
    pub fn generate<P: AsRef<Path>, R: Rng + ?Sized>(
        &self,
        path: P,
        num_rows: usize,
        rng: &mut R,
    ) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(
            "Writing {} rows x {} columns to {}",
            num_rows,
            self.columns.len(),
            path.display()
        );

        let file = File::create(path)?;
        self.write_to(file, num_rows, rng)
    }
}
