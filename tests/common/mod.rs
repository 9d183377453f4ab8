use serde_json::{Value, json};
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn order(id: &str, value: &str, promotions: &[&str]) -> Value {
    json!({"id": id, "value": value, "promotions": promotions})
}

pub fn method(id: &str, discount: &str, limit: &str) -> Value {
    json!({"id": id, "discount": discount, "limit": limit})
}

pub fn write_json(path: &Path, entries: &[Value]) -> Result<(), Error> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &Value::Array(entries.to_vec()))?;
    Ok(())
}
