use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Missingness matrix – one bit per (row, column)
// ---------------------------------------------------------------------------

/// Presence/absence view of the table: `cells[row][col]` is true iff the
/// corresponding table cell is absent. Same shape as the table.
#[derive(Debug, Clone)]
pub struct MissingnessMatrix {
    /// Column labels, in the table's header order.
    pub columns: Vec<String>,
    /// Row-major missingness bits.
    pub cells: Vec<Vec<bool>>,
}

impl MissingnessMatrix {
    pub fn n_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }
}

/// Derive the missingness matrix from the table. Pure; an empty table
/// yields an empty matrix.
pub fn project(table: &Table) -> MissingnessMatrix {
    let columns: Vec<String> = table.columns().to_vec();
    let cells = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|col| row.get(col).map_or(true, |cell| cell.is_absent()))
                .collect()
        })
        .collect();
    MissingnessMatrix { columns, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Row};

    #[test]
    fn matrix_matches_table_shape_and_sentinels() {
        let columns = vec!["region".to_string(), "Confirmed".to_string()];
        let rows = vec![
            Row::from([
                ("region".to_string(), CellValue::String("A".to_string())),
                ("Confirmed".to_string(), CellValue::Null),
            ]),
            Row::from([
                ("region".to_string(), CellValue::String("B".to_string())),
                ("Confirmed".to_string(), CellValue::Integer(4)),
            ]),
        ];
        let table = Table::from_rows(columns, rows);

        let matrix = project(&table);
        assert_eq!(matrix.n_rows(), 2);
        assert_eq!(matrix.n_cols(), 2);
        assert_eq!(matrix.cells[0], [false, true]);
        assert_eq!(matrix.cells[1], [false, false]);
    }

    #[test]
    fn empty_table_yields_empty_matrix() {
        let table = Table::from_rows(vec!["a".to_string()], Vec::new());
        let matrix = project(&table);
        assert_eq!(matrix.n_rows(), 0);
        assert_eq!(matrix.n_cols(), 1);
    }
}
