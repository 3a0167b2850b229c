use crate::constants::{
    DEFAULT_DATA_PATH, DEFAULT_X_COLUMN, DEFAULT_Y_COLUMN, DEFAULT_Z_COLUMN, WINDOW_TITLE,
};
use std::path::PathBuf;

/// Header names of the three coordinate columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl ColumnNames {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn as_array(&self) -> [&str; 3] {
        [&self.x, &self.y, &self.z]
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::new(DEFAULT_X_COLUMN, DEFAULT_Y_COLUMN, DEFAULT_Z_COLUMN)
    }
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub data_path: PathBuf,
    pub columns: ColumnNames,
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            columns: ColumnNames::default(),
            title: WINDOW_TITLE.to_string(),
        }
    }
}
