//! Name-addressed access to draft fields, so one generic form can edit every
//! resource.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::api::AssetKind;
use crate::common::ManagerError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
    Url,
    Number,
    Select(&'static [&'static str]),
    /// URL filled by uploading an asset to the media host.
    Asset(AssetKind),
    /// Shown but never edited.
    ReadOnly,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

fn to_object<T: Serialize>(item: &T) -> Result<Map<String, Value>, ManagerError> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ManagerError::Field("item is not a JSON object".into())),
        Err(e) => Err(ManagerError::Field(e.to_string())),
    }
}

fn from_object<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, ManagerError> {
    serde_json::from_value(Value::Object(map)).map_err(|e| ManagerError::Field(e.to_string()))
}

/// Current value of `name` as form text. Unset fields read as "".
pub fn read<T: Serialize>(item: &T, name: &str) -> Result<String, ManagerError> {
    let map = to_object(item)?;

    Ok(match map.get(name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    })
}

/// Returns a copy of `item` with `spec`'s field set from form text.
pub fn write<T>(item: &T, spec: &FieldSpec, raw: &str) -> Result<T, ManagerError>
where
    T: Serialize + DeserializeOwned,
{
    let value = match spec.kind {
        FieldKind::ReadOnly => {
            return Err(ManagerError::Field(format!("{} is read-only", spec.name)));
        }
        FieldKind::Number => {
            let trimmed = raw.trim();
            let n: i64 = if trimmed.is_empty() {
                0
            } else {
                trimmed
                    .parse()
                    .map_err(|_| ManagerError::Field(format!("{} must be a whole number", spec.label)))?
            };
            Value::from(n)
        }
        FieldKind::Select(options) if !options.contains(&raw) && !raw.is_empty() => {
            return Err(ManagerError::Field(format!(
                "{:?} is not a valid {}",
                raw, spec.label
            )));
        }
        _ => Value::String(raw.to_string()),
    };

    let mut map = to_object(item)?;
    map.insert(spec.name.to_string(), value);
    from_object(map)
}

/// Lays `item` over `template`: fields the item leaves unset keep the
/// template's defaults.
pub fn merge_over<T>(template: &T, item: &T) -> Result<T, ManagerError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = to_object(template)?;
    for (key, value) in to_object(item)? {
        if !value.is_null() {
            merged.insert(key, value);
        }
    }
    from_object(merged)
}
