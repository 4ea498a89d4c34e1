use crate::data::model::Table;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// RelationSeries – (x, y) pairs sharing a common x column
// ---------------------------------------------------------------------------

/// One scatter series: a legend label and row-aligned (x, y) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl RelationSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pair each y column with the shared x column, row by row. Pairing is
/// strictly index-aligned: point i of every series comes from table row i.
/// Output order follows `y_columns`.
pub fn extract(
    table: &Table,
    x_column: &str,
    y_columns: &[&str],
) -> Result<Vec<RelationSeries>, DashboardError> {
    let xs = table.numeric_column(x_column)?;

    y_columns
        .iter()
        .map(|&y_column| {
            let ys = table.numeric_column(y_column)?;
            Ok(RelationSeries {
                label: series_label(y_column),
                points: xs.iter().copied().zip(ys).collect(),
            })
        })
        .collect()
}

/// Legend label for a dose column: the product name without the
/// "(Doses Administered)" suffix.
fn series_label(column: &str) -> String {
    column
        .trim()
        .trim_end_matches("(Doses Administered)")
        .trim()
        .to_string()
}
