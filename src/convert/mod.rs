// src/convert/mod.rs

use anyhow::Result;
use arrow::{
    array::{ArrayRef, Float64Array, Int64Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Outcome of an all-or-nothing numeric conversion of one column.
#[derive(Debug, Clone)]
pub enum Coerced {
    Int64(Int64Array),
    Float64(Float64Array),
    /// At least one field failed to parse; the column is handed back
    /// exactly as it came in.
    Unchanged(Vec<String>),
}

impl Coerced {
    pub fn len(&self) -> usize {
        match self {
            Coerced::Int64(a) => a.len(),
            Coerced::Float64(a) => a.len(),
            Coerced::Unchanged(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Coerced::Unchanged(_))
    }

    /// Arrow dtype this column resolved to.
    pub fn data_type(&self) -> DataType {
        match self {
            Coerced::Int64(_) => DataType::Int64,
            Coerced::Float64(_) => DataType::Float64,
            Coerced::Unchanged(_) => DataType::Utf8,
        }
    }

    pub fn into_array(self) -> ArrayRef {
        match self {
            Coerced::Int64(a) => Arc::new(a),
            Coerced::Float64(a) => Arc::new(a),
            Coerced::Unchanged(v) => Arc::new(StringArray::from(v)),
        }
    }
}

/// Trim whitespace + strip outer quotes if present.
fn clean_field(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Convert a whole column to numeric, or leave it alone.
///
/// Every field must parse for the conversion to take: all `i64` gives
/// `Coerced::Int64`, otherwise all `f64` gives `Coerced::Float64`, otherwise
/// the original strings come back in `Coerced::Unchanged`. Parse failures
/// never surface to the caller.
pub fn safe_to_numeric(column: Vec<String>) -> Coerced {
    if let Some(ints) = column
        .iter()
        .map(|raw| clean_field(raw).parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()
    {
        return Coerced::Int64(Int64Array::from(ints));
    }

    match column
        .iter()
        .map(|raw| clean_field(raw).parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()
    {
        Some(floats) => Coerced::Float64(Float64Array::from(floats)),
        None => Coerced::Unchanged(column),
    }
}

/// Assemble named columns into a typed `RecordBatch`, coercing each column
/// independently. Columns that stay non-numeric land as `Utf8`.
///
/// `names` and `columns` are paired positionally and must have equal length;
/// every column must carry the same number of rows.
pub fn to_record_batch(names: &[String], columns: Vec<Vec<String>>) -> Result<RecordBatch> {
    anyhow::ensure!(
        names.len() == columns.len(),
        "{} column names for {} columns",
        names.len(),
        columns.len()
    );

    let mut fields = Vec::with_capacity(columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(columns.len());
    for (name, column) in names.iter().zip(columns) {
        let coerced = safe_to_numeric(column);
        fields.push(Field::new(name.as_str(), coerced.data_type(), false));
        arrays.push(coerced.into_array());
    }

    let schema = Arc::new(Schema::new(fields));
    RecordBatch::try_new(schema, arrays).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_integers_coerce_to_int64() {
        let coerced = safe_to_numeric(col(&["1", "2", "3"]));
        match coerced {
            Coerced::Int64(a) => assert_eq!(a, Int64Array::from(vec![1, 2, 3])),
            other => panic!("expected Int64, got {other:?}"),
        }
    }

    #[test]
    fn decimals_widen_to_float64() {
        let coerced = safe_to_numeric(col(&["1", "2.5", "-3"]));
        match coerced {
            Coerced::Float64(a) => assert_eq!(a, Float64Array::from(vec![1.0, 2.5, -3.0])),
            other => panic!("expected Float64, got {other:?}"),
        }
    }

    #[test]
    fn one_bad_field_leaves_column_untouched() {
        let original = col(&["1", "abc", "3"]);
        let coerced = safe_to_numeric(original.clone());
        match coerced {
            Coerced::Unchanged(v) => assert_eq!(v, original),
            other => panic!("expected Unchanged, got {other:?}"),
        }
    }

    #[test]
    fn empty_column_coerces_without_error() {
        let coerced = safe_to_numeric(Vec::new());
        assert!(coerced.is_numeric());
        assert!(coerced.is_empty());
    }

    #[test]
    fn fields_are_cleaned_before_parsing() {
        let coerced = safe_to_numeric(col(&[" 1 ", "\"2\"", "3"]));
        match coerced {
            Coerced::Int64(a) => assert_eq!(a, Int64Array::from(vec![1, 2, 3])),
            other => panic!("expected Int64, got {other:?}"),
        }
    }

    #[test]
    fn unchanged_keeps_original_uncleaned_strings() {
        let original = col(&[" 1 ", "abc"]);
        let coerced = safe_to_numeric(original.clone());
        match coerced {
            Coerced::Unchanged(v) => assert_eq!(v, original),
            other => panic!("expected Unchanged, got {other:?}"),
        }
    }

    #[test]
    fn batch_carries_per_column_dtypes() {
        let names = vec!["id".to_string(), "price".to_string(), "label".to_string()];
        let columns = vec![
            col(&["1", "2"]),
            col(&["1.5", "2.5"]),
            col(&["a", "b"]),
        ];
        let batch = to_record_batch(&names, columns).unwrap();

        assert_eq!(batch.num_rows(), 2);
        let schema = batch.schema();
        assert_eq!(schema.field(0).data_type(), &DataType::Int64);
        assert_eq!(schema.field(1).data_type(), &DataType::Float64);
        assert_eq!(schema.field(2).data_type(), &DataType::Utf8);
    }

    #[test]
    fn batch_rejects_mismatched_name_count() {
        let names = vec!["only".to_string()];
        let columns = vec![col(&["1"]), col(&["2"])];
        assert!(to_record_batch(&names, columns).is_err());
    }
}
