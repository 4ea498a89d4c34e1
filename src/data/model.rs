use std::collections::BTreeMap;
use std::fmt;

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric projections.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The missingness sentinel: a null cell, or a float that parsed to NaN.
    pub fn is_absent(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the table
// ---------------------------------------------------------------------------

/// Dynamic cells of one record: column_name → value.
pub type Row = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Never mutated after load; every derived view
/// is a new structure.
#[derive(Debug, Clone)]
pub struct Table {
    /// Ordered column names, in header order.
    columns: Vec<String>,
    /// All records. Each row carries exactly the header's column set.
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from header and rows. Cells missing from a row are
    /// filled with `Null` so every row matches the header's column set.
    pub fn from_rows(columns: Vec<String>, mut rows: Vec<Row>) -> Self {
        for row in &mut rows {
            for col in &columns {
                row.entry(col.clone()).or_insert(CellValue::Null);
            }
            row.retain(|col, _| columns.iter().any(|c| c == col));
        }
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records, in load order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// One cell per row for the named column.
    pub fn column_values(&self, name: &str) -> Result<Vec<&CellValue>, DashboardError> {
        if !self.has_column(name) {
            return Err(DashboardError::ColumnNotFound(name.to_string()));
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(name).unwrap_or(&CellValue::Null))
            .collect())
    }

    /// The named column as `f64`s. Null cells become NaN (the absent
    /// sentinel survives into downstream math); text or bool cells fail.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, DashboardError> {
        self.column_values(name)?
            .into_iter()
            .enumerate()
            .map(|(row, cell)| {
                if cell.is_absent() {
                    return Ok(f64::NAN);
                }
                cell.as_f64().ok_or_else(|| DashboardError::NonNumericColumn {
                    column: name.to_string(),
                    row,
                    value: cell.to_string(),
                })
            })
            .collect()
    }

    /// The named column coerced to text via `Display`.
    pub fn text_column(&self, name: &str) -> Result<Vec<String>, DashboardError> {
        Ok(self
            .column_values(name)?
            .into_iter()
            .map(|cell| cell.to_string())
            .collect())
    }

    /// A new table with rows sorted ascending (lexicographically) by the
    /// named column's text form. Stable, so ties keep load order.
    pub fn sorted_by(&self, name: &str) -> Result<Table, DashboardError> {
        let keys = self.text_column(name)?;
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        Ok(Table {
            columns: self.columns.clone(),
            rows: order.iter().map(|&i| self.rows[i].clone()).collect(),
        })
    }
}
