//! Decoding of arbitrary SQLite rows into JSON objects.
//!
//! Used where the shape of a row is not known at compile time, such as the
//! whole-database dump.

use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Convert every column of `row` into a JSON value keyed by column name.
pub fn row_to_json(row: &SqliteRow) -> Result<Map<String, Value>, sqlx::Error> {
    let mut object = Map::new();
    for (idx, column) in row.columns().iter().enumerate() {
        object.insert(column.name().to_string(), column_value(row, idx)?);
    }
    Ok(object)
}

fn column_value(row: &SqliteRow, idx: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    // SQLite reports the storage class of the value itself, not the declared
    // column type.
    let storage_class = raw.type_info().name().to_string();

    let value = match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(idx)?),
        "REAL" => Number::from_f64(row.try_get::<f64, _>(idx)?).map_or(Value::Null, Value::Number),
        "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(idx)?),
        _ => Value::String(row.try_get::<String, _>(idx)?),
    };
    Ok(value)
}
