use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Row, Table};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – delimited file with a header row (the published dataset)
/// * `.json`    – `[{ "column": value, ... }, ...]`
/// * `.parquet` – flat scalar columns
pub fn load_file(path: &Path) -> Result<Table, DashboardError> {
    let table = load_any(path).map_err(|source| DashboardError::Load {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    log::info!(
        "Loaded {} rows with columns {:?}",
        table.len(),
        table.columns()
    );
    Ok(table)
}

fn load_any(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    if table.columns().is_empty() {
        bail!("dataset has zero columns");
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per region/date.
/// Cell types are guessed per value (int, float, bool, text); empty cells
/// become `Null`.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut row = Row::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                bail!("CSV row {row_no} has more fields than the header");
            };
            row.insert(col_name.clone(), guess_cell_type(value));
        }
        rows.push(row);
    }

    Ok(Table::from_rows(headers, rows))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "State/UnionTerritory": "Kerala", "Confirmed": 812, ... },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
            row.insert(key.clone(), json_to_cell(val));
        }
        rows.push(row);
    }

    Ok(Table::from_rows(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns (strings, ints, floats,
/// bools).  Works with files written by both **Pandas** (`df.to_parquet()`)
/// and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();

    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row_idx in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, col_name) in columns.iter().enumerate() {
                let value = extract_cell_value(batch.column(col_idx), row_idx);
                row.insert(col_name.clone(), value);
            }
            rows.push(row);
        }
    }

    Ok(Table::from_rows(columns, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell_value(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                CellValue::String(s.value(row).to_string())
            } else {
                // LargeStringArray
                let s = col.as_string::<i64>();
                CellValue::String(s.value(row).to_string())
            }
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            CellValue::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            CellValue::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            CellValue::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            CellValue::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            CellValue::Bool(arr.value(row))
        }
        _ => CellValue::String(format!("{:?}", col.data_type())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use std::io::Write;

    #[test]
    fn csv_round_trip_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "region,Confirmed,rate").unwrap();
        writeln!(f, "Kerala,812,1.5").unwrap();
        writeln!(f, "Goa,,0.2").unwrap();
        drop(f);

        let table = load_file(&path).unwrap();
        assert_eq!(table.columns(), ["region", "Confirmed", "rate"]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows()[0].get("Confirmed"),
            Some(&CellValue::Integer(812))
        );
        assert_eq!(table.rows()[0].get("rate"), Some(&CellValue::Float(1.5)));
        assert_eq!(table.rows()[1].get("Confirmed"), Some(&CellValue::Null));
    }

    #[test]
    fn json_records_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"[{"region":"Kerala","Confirmed":812},{"region":"Goa","Confirmed":null}]"#,
        )
        .unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows()[0].get("region"),
            Some(&CellValue::String("Kerala".to_string()))
        );
        assert_eq!(table.rows()[1].get("Confirmed"), Some(&CellValue::Null));
    }

    #[test]
    fn parquet_flat_columns_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("region", DataType::Utf8, false),
            Field::new("Confirmed", DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Kerala", "Goa"])),
                Arc::new(Int64Array::from(vec![812, 55])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.columns(), ["region", "Confirmed"]);
        assert_eq!(
            table.rows()[1].get("Confirmed"),
            Some(&CellValue::Integer(55))
        );
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_file(Path::new("no_such_file.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::Load { .. }));
    }

    #[test]
    fn unsupported_extension_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        std::fs::write(&path, b"whatever").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DashboardError::Load { .. }));
    }
}
