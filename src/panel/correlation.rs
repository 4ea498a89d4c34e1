use crate::data::model::Table;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// CorrelationMatrix – pairwise Pearson over a column subset
// ---------------------------------------------------------------------------

/// Square correlation matrix indexed by the selected columns.
/// Symmetric by construction; undefined entries are NaN.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    /// Selected column labels, in the caller's order.
    pub columns: Vec<String>,
    /// `values[i][j]` = Pearson r between columns i and j.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Compute the pairwise Pearson correlation of the named numeric columns.
/// Only the upper triangle is computed; the lower is mirrored.
pub fn project(table: &Table, columns: &[&str]) -> Result<CorrelationMatrix, DashboardError> {
    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|&col| table.numeric_column(col))
        .collect::<Result<_, _>>()?;

    let k = columns.len();
    let mut values = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        for j in i..k {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|s| s.to_string()).collect(),
        values,
    })
}

/// Pearson correlation coefficient. Fewer than two observations or a
/// zero-variance input yield NaN (the undefined sentinel), never a panic.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..x.len() {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}
