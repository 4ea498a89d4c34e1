use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong between the raw file and a composed panel.
///
/// Propagation is fail-fast throughout: no component substitutes a default
/// or renders a partial result on error.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The source file is missing, unreadable, or structurally invalid.
    #[error("failed to load dataset from {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A projector or extractor referenced a column the table does not have.
    #[error("column not found: {0:?}")]
    ColumnNotFound(String),

    /// A numeric operation hit a text or boolean cell.
    #[error("column {column:?} is not numeric: row {row} holds {value:?}")]
    NonNumericColumn {
        column: String,
        row: usize,
        value: String,
    },

    /// A sample/window size exceeds the number of available rows.
    #[error("requested {requested} rows but the table only has {available}")]
    InsufficientRows { requested: usize, available: usize },
}
