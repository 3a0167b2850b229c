use super::load_errors::LoadError;
use crate::config::plot::ColumnNames;
use crate::models::Trajectory;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Reads trajectory samples from CSV tables with a header row.
pub struct TrajectoryLoader {
    columns: ColumnNames,
}

impl TrajectoryLoader {
    pub fn new(columns: ColumnNames) -> Self {
        Self { columns }
    }

    /// Reads the whole file into memory and parses it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Trajectory, LoadError> {
        let path = path.as_ref();
        debug!("Reading trajectory data from {}", path.display());
        let data = fs::read(path)?;
        let trajectory = self.load_from_bytes(&data)?;
        info!(
            "Loaded {} trajectory samples from {}",
            trajectory.len(),
            path.display()
        );
        Ok(trajectory)
    }

    /// Parses in-memory CSV data.
    pub fn load_from_bytes(&self, data: &[u8]) -> Result<Trajectory, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(data);

        let indices = self.column_indices(rdr.headers()?)?;
        let mut columns: [Vec<f64>; 3] = Default::default();

        for (row, result) in rdr.records().enumerate() {
            let record = result?;
            for (axis, &index) in indices.iter().enumerate() {
                columns[axis].push(self.parse_value(&record, index, axis, row + 1)?);
            }
        }

        let [xs, ys, zs] = &columns;
        let trajectory =
            Trajectory::from_columns(xs, ys, zs).ok_or(LoadError::UnequalColumns {
                x: xs.len(),
                y: ys.len(),
                z: zs.len(),
            })?;

        if trajectory.is_empty() {
            warn!("Trajectory data contains no samples");
        }

        Ok(trajectory)
    }

    fn column_indices(&self, headers: &StringRecord) -> Result<[usize; 3], LoadError> {
        let mut indices = [0; 3];
        for (axis, name) in self.columns.as_array().into_iter().enumerate() {
            indices[axis] = headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))?;
        }
        Ok(indices)
    }

    fn parse_value(
        &self,
        record: &StringRecord,
        index: usize,
        axis: usize,
        row: usize,
    ) -> Result<f64, LoadError> {
        // Records have the header's width, csv rejects ragged rows before this point
        let value = &record[index];
        // "inf" and "NaN" parse as f64 but are not positions
        match value.parse::<f64>() {
            Ok(coordinate) if coordinate.is_finite() => Ok(coordinate),
            _ => Err(LoadError::InvalidValue {
                row,
                column: self.columns.as_array()[axis].to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl Default for TrajectoryLoader {
    fn default() -> Self {
        Self::new(ColumnNames::default())
    }
}
