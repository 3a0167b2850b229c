use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum LoadError {
    IoError(io::Error),
    CsvError(csv::Error),
    MissingColumn(String),
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    UnequalColumns {
        x: usize,
        y: usize,
        z: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(e) => write!(f, "I/O error: {}", e),
            LoadError::CsvError(e) => write!(f, "CSV parsing error: {}", e),
            LoadError::MissingColumn(name) => write!(f, "Missing required column '{}'", name),
            LoadError::InvalidValue { row, column, value } => write!(
                f,
                "Non-numeric value '{}' in column '{}' at row {}",
                value, column, row
            ),
            LoadError::UnequalColumns { x, y, z } => write!(
                f,
                "Coordinate columns differ in length (x: {}, y: {}, z: {})",
                x, y, z
            ),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::IoError(e) => Some(e),
            LoadError::CsvError(e) => Some(e),
            _ => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::IoError(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::CsvError(err)
    }
}
