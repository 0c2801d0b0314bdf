//! JSON snapshots: arrays of objects identified by one of their fields.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use delta_types::{DeltaItem, DeltaSection};
use serde_json::{Map, Value};

/// A JSON object identified by the canonical text of one of its fields.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonItem {
    id: String,
    value: Value,
}

impl JsonItem {
    /// The object as read from the snapshot.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl DeltaItem for JsonItem {
    type Identifier = String;

    fn delta_identifier(&self) -> String {
        self.id.clone()
    }
}

/// A JSON object holding an array of [`JsonItem`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonSection {
    id: String,
    value: Value,
    items: Vec<JsonItem>,
}

impl JsonSection {
    /// The object as read from the snapshot, items included.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl DeltaItem for JsonSection {
    type Identifier = String;

    fn delta_identifier(&self) -> String {
        self.id.clone()
    }
}

impl DeltaSection for JsonSection {
    type Item = JsonItem;

    fn items(&self) -> &[JsonItem] {
        &self.items
    }
}

/// Read and parse a JSON file.
pub fn load(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing snapshot {}", path.display()))
}

/// Interpret `value` as an array of items.
pub fn items(value: &Value, id_field: &str) -> anyhow::Result<Vec<JsonItem>> {
    array(value, "snapshot")?
        .iter()
        .enumerate()
        .map(|(position, element)| item(element, id_field, position))
        .collect()
}

/// Interpret `value` as an array of sections, each holding an array of items
/// under `items_field`.
pub fn sections(value: &Value, id_field: &str, items_field: &str) -> anyhow::Result<Vec<JsonSection>> {
    array(value, "snapshot")?
        .iter()
        .enumerate()
        .map(|(position, element)| {
            let object = object(element, position)?;
            let id = identifier(object, id_field, position)?;
            let children = match object.get(items_field) {
                Some(list) => items(list, id_field)
                    .with_context(|| format!("section {position} ({id})"))?,
                None => Vec::new(),
            };
            Ok(JsonSection {
                id,
                value: element.clone(),
                items: children,
            })
        })
        .collect()
}

fn item(element: &Value, id_field: &str, position: usize) -> anyhow::Result<JsonItem> {
    let object = object(element, position)?;
    Ok(JsonItem {
        id: identifier(object, id_field, position)?,
        value: element.clone(),
    })
}

fn array<'a>(value: &'a Value, what: &str) -> anyhow::Result<&'a Vec<Value>> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => bail!("{what} must be a JSON array, found {}", kind(other)),
    }
}

fn object(value: &Value, position: usize) -> anyhow::Result<&Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("element {position} must be an object, found {}", kind(other)),
    }
}

fn identifier(object: &Map<String, Value>, id_field: &str, position: usize) -> anyhow::Result<String> {
    match object.get(id_field) {
        Some(Value::Null) | None => bail!("element {position} has no `{id_field}` field"),
        Some(id @ (Value::Array(_) | Value::Object(_))) => {
            bail!("element {position} has a non-scalar `{id_field}`: {id}")
        }
        Some(id) => Ok(id.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
