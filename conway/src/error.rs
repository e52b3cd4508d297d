// error.rs - Board loading errors

/// Why a board could not be loaded. No partial grid is ever returned.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    MissingLine { what: String },
    InvalidDimension { name: &'static str, line: String },
    DimensionOutOfRange { name: &'static str, value: i64 },
    RowLength { row: usize, expected: usize, found: usize },
    InvalidCell { row: usize, column: usize, found: char },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::MissingLine { what } => write!(f, "Unexpected end of input: missing {}", what),
            Self::InvalidDimension { name, line } => {
                write!(f, "Invalid {}: {:?} is not an integer", name, line)
            }
            Self::DimensionOutOfRange { name, value } => write!(
                f,
                "{} {} out of range {}..={}",
                name,
                value,
                crate::grid::MIN_DIMENSION,
                crate::grid::MAX_DIMENSION
            ),
            Self::RowLength { row, expected, found } => {
                write!(f, "Row {}: expected {} cells, found {}", row, expected, found)
            }
            Self::InvalidCell { row, column, found } => {
                write!(f, "Row {}, column {}: invalid cell {:?} (expected '0' or '1')", row, column, found)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
