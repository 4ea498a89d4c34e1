use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::model::Table;
use crate::error::DashboardError;
use crate::schema;

// ---------------------------------------------------------------------------
// Metric and selection policy
// ---------------------------------------------------------------------------

/// Which case-count column to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Confirmed,
    Cured,
    Deaths,
}

impl Metric {
    /// The dataset column holding this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Confirmed => schema::CONFIRMED,
            Metric::Cured => schema::CURED,
            Metric::Deaths => schema::DEATHS,
        }
    }
}

/// How rows are picked out of the region-sorted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// The first `window` rows after sorting ascending by region name.
    DeterministicHead,
    /// `window` rows drawn uniformly without replacement.
    RandomSample,
}

// ---------------------------------------------------------------------------
// RegionSeries – ordered (region, value) pairs
// ---------------------------------------------------------------------------

/// One bar-chart series: region label paired with its metric value.
/// Length always equals the requested window size.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries {
    pub points: Vec<(String, f64)>,
}

impl RegionSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract a labeled series of `metric` per region, using the ambient RNG
/// for the sampling policy.
pub fn extract(
    table: &Table,
    metric: Metric,
    policy: SelectionPolicy,
    window: usize,
) -> Result<RegionSeries, DashboardError> {
    extract_with(table, metric, policy, window, &mut rand::thread_rng())
}

/// Like [`extract`], with a caller-supplied RNG so sampling is seedable.
pub fn extract_with<R: Rng>(
    table: &Table,
    metric: Metric,
    policy: SelectionPolicy,
    window: usize,
    rng: &mut R,
) -> Result<RegionSeries, DashboardError> {
    let sorted = table.sorted_by(schema::REGION)?;
    let regions = sorted.text_column(schema::REGION)?;
    let values = sorted.numeric_column(metric.column())?;

    if sorted.len() < window {
        return Err(DashboardError::InsufficientRows {
            requested: window,
            available: sorted.len(),
        });
    }

    let indices: Vec<usize> = match policy {
        SelectionPolicy::DeterministicHead => (0..window).collect(),
        // One index draw shared by both columns, so each label stays paired
        // with the value from its own row.
        SelectionPolicy::RandomSample => {
            rand::seq::index::sample(rng, sorted.len(), window).into_vec()
        }
    };

    let points = indices
        .into_iter()
        .map(|i| (regions[i].clone(), values[i]))
        .collect();
    Ok(RegionSeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Row};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mk_table(rows: &[(&str, i64, i64, i64)]) -> Table {
        let columns = vec![
            schema::REGION.to_string(),
            schema::CONFIRMED.to_string(),
            schema::CURED.to_string(),
            schema::DEATHS.to_string(),
        ];
        let rows = rows
            .iter()
            .map(|&(region, confirmed, cured, deaths)| {
                Row::from([
                    (
                        schema::REGION.to_string(),
                        CellValue::String(region.to_string()),
                    ),
                    (schema::CONFIRMED.to_string(), CellValue::Integer(confirmed)),
                    (schema::CURED.to_string(), CellValue::Integer(cured)),
                    (schema::DEATHS.to_string(), CellValue::Integer(deaths)),
                ])
            })
            .collect();
        Table::from_rows(columns, rows)
    }

    #[test]
    fn head_on_sorted_table_returns_rows_in_order() {
        let table = mk_table(&[("A", 10, 1, 0), ("B", 20, 2, 0), ("C", 30, 3, 0)]);
        let series = extract(&table, Metric::Confirmed, SelectionPolicy::DeterministicHead, 3)
            .unwrap();
        assert_eq!(
            series.points,
            vec![
                ("A".to_string(), 10.0),
                ("B".to_string(), 20.0),
                ("C".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn head_sorts_by_region_first() {
        let table = mk_table(&[("C", 30, 3, 0), ("A", 10, 1, 0), ("B", 20, 2, 0)]);
        let series =
            extract(&table, Metric::Cured, SelectionPolicy::DeterministicHead, 2).unwrap();
        assert_eq!(
            series.points,
            vec![("A".to_string(), 1.0), ("B".to_string(), 2.0)]
        );
    }

    #[test]
    fn head_is_idempotent_across_calls() {
        let table = mk_table(&[("B", 20, 2, 5), ("A", 10, 1, 4), ("C", 30, 3, 6)]);
        let first =
            extract(&table, Metric::Deaths, SelectionPolicy::DeterministicHead, 3).unwrap();
        let second =
            extract(&table, Metric::Deaths, SelectionPolicy::DeterministicHead, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_metric_column_fails() {
        let columns = vec![schema::REGION.to_string(), schema::CONFIRMED.to_string()];
        let rows = vec![Row::from([
            (
                schema::REGION.to_string(),
                CellValue::String("A".to_string()),
            ),
            (schema::CONFIRMED.to_string(), CellValue::Integer(1)),
        ])];
        let table = Table::from_rows(columns, rows);

        let err = extract(&table, Metric::Deaths, SelectionPolicy::DeterministicHead, 1)
            .unwrap_err();
        assert!(matches!(err, DashboardError::ColumnNotFound(c) if c == schema::DEATHS));
    }

    #[test]
    fn missing_region_column_fails() {
        let columns = vec![schema::CONFIRMED.to_string()];
        let rows = vec![Row::from([(
            schema::CONFIRMED.to_string(),
            CellValue::Integer(1),
        )])];
        let table = Table::from_rows(columns, rows);

        let err = extract(&table, Metric::Confirmed, SelectionPolicy::DeterministicHead, 1)
            .unwrap_err();
        assert!(matches!(err, DashboardError::ColumnNotFound(c) if c == schema::REGION));
    }

    #[test]
    fn window_larger_than_table_fails() {
        let table = mk_table(&[("A", 10, 1, 0), ("B", 20, 2, 0)]);
        let err = extract(&table, Metric::Confirmed, SelectionPolicy::DeterministicHead, 20)
            .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::InsufficientRows {
                requested: 20,
                available: 2,
            }
        ));
    }

    #[test]
    fn random_sample_keeps_region_value_pairing() {
        let source: Vec<(String, f64)> = (0..60)
            .map(|i| (format!("R{i:02}"), (i * 7) as f64))
            .collect();
        let rows: Vec<(&str, i64, i64, i64)> = source
            .iter()
            .enumerate()
            .map(|(i, (r, _))| (r.as_str(), (i * 7) as i64, 0, 0))
            .collect();
        let table = mk_table(&rows);

        let mut rng = StdRng::seed_from_u64(7);
        let series = extract_with(
            &table,
            Metric::Confirmed,
            SelectionPolicy::RandomSample,
            50,
            &mut rng,
        )
        .unwrap();

        assert_eq!(series.len(), 50);
        // Every sampled point is an actual row of the table.
        for (region, value) in &series.points {
            assert!(source.iter().any(|(r, v)| r == region && v == value));
        }
        // Without replacement: regions are unique, so no row was drawn twice.
        let mut regions: Vec<&String> = series.points.iter().map(|(r, _)| r).collect();
        regions.sort();
        regions.dedup();
        assert_eq!(regions.len(), 50);
    }
}
