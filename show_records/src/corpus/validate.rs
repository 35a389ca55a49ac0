//! Ingest validation - turns raw JSON records into typed shows.
//!
//! Validation walks the raw `serde_json::Value` by hand instead of relying on
//! derive errors so that a failure names the exact JSON path at fault.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::entities::{Match, Participant, ParticipantRole, Promotion, Show};
use crate::error::SchemaValidationError;

type Result<T> = std::result::Result<T, SchemaValidationError>;

/// Date format of the ingest schema.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate one raw record and convert it into a [`Show`].
pub fn validate_record(value: &Value) -> Result<Show> {
    let obj = as_object(value, "")?;

    // Scraped records name the list `id`.
    let (ids_key, ids_value) = match (obj.get("ids"), obj.get("id")) {
        (Some(value), _) => ("ids", value),
        (None, Some(value)) => ("id", value),
        (None, None) => return Err(SchemaValidationError::new("ids", "required field is missing")),
    };
    let ids = as_array(ids_value, ids_key)?
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let path = format!("{ids_key}[{i}]");
            let id = as_str(id, &path)?;
            check_show_id(id, &path)?;
            Ok(id.to_string())
        })
        .collect::<Result<Vec<_>>>()?;
    if ids.is_empty() {
        return Err(SchemaValidationError::new(ids_key, "must contain at least one id"));
    }

    let name = required_str(obj, "", "name")?;
    let promotion = validate_promotion(required(obj, "", "promotion")?)?;
    let arena = required_str(obj, "", "arena")?;

    let date_text = required_str(obj, "", "date")?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|e| {
        SchemaValidationError::new("date", format!("`{date_text}` is not a YYYY-MM-DD date: {e}"))
    })?;

    let matches = as_array(required(obj, "", "matches")?, "matches")?
        .iter()
        .enumerate()
        .map(|(i, m)| validate_match(m, &format!("matches[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Show {
        ids,
        name,
        promotion,
        arena,
        date,
        matches,
        partial: optional_bool(obj, "", "partial")?,
        exclude: optional_bool(obj, "", "exclude")?,
    })
}

/// Check the invariants of an already-typed show.
pub fn validate_show(show: &Show) -> Result<()> {
    if show.ids.is_empty() {
        return Err(SchemaValidationError::new("ids", "must contain at least one id"));
    }
    for (i, id) in show.ids.iter().enumerate() {
        check_show_id(id, &format!("ids[{i}]"))?;
    }
    Ok(())
}

/// Check if a string can be used as a show id.
///
/// Ids end up inside `[a,b]` route tokens and are joined with `-` into page
/// file names, so brackets, commas, dashes and whitespace are rejected.
pub fn is_valid_show_id(id: &str) -> bool {
    !id.is_empty()
        && !id
            .chars()
            .any(|c| matches!(c, ',' | '[' | ']' | '-') || c.is_whitespace())
}

fn check_show_id(id: &str, path: &str) -> Result<()> {
    if is_valid_show_id(id) {
        Ok(())
    } else {
        Err(SchemaValidationError::new(
            path,
            format!("`{id}` is not a valid show id (empty, or contains `,`, `[`, `]`, `-` or whitespace)"),
        ))
    }
}

fn validate_promotion(value: &Value) -> Result<Promotion> {
    let obj = as_object(value, "promotion")?;
    let id = as_integer(required(obj, "promotion", "id")?, "promotion.id")?;
    let name = required_str(obj, "promotion", "name")?;
    Ok(Promotion::new(id, name))
}

fn validate_match(value: &Value, path: &str) -> Result<Match> {
    let obj = as_object(value, path)?;

    let mut m = Match::new(
        required_str(obj, path, "type")?,
        required_str(obj, path, "result")?,
    );
    m.won = optional_number(obj, path, "won")?;
    m.cagematch = optional_number(obj, path, "cagematch")?;
    m.wrestlers = participants(obj, path, ParticipantRole::Wrestler)?;
    m.teams = participants(obj, path, ParticipantRole::Team)?;
    m.appearances = participants(obj, path, ParticipantRole::Appearance)?;
    Ok(m)
}

fn participants(
    obj: &Map<String, Value>,
    parent: &str,
    role: ParticipantRole,
) -> Result<Vec<Participant>> {
    let key = role.field_name();
    let list_path = join(parent, key);
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => as_array(value, &list_path)?
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let path = format!("{list_path}[{i}]");
                let p = as_object(p, &path)?;
                let id = as_integer(required(p, &path, "id")?, &join(&path, "id"))?;
                let text = required_str(p, &path, "text")?;
                Ok(Participant::new(id, text))
            })
            .collect(),
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn mismatch(path: &str, expected: &str, value: &Value) -> SchemaValidationError {
    let path = if path.is_empty() { "<record>" } else { path };
    SchemaValidationError::new(path, format!("expected {expected}, found {}", type_name(value)))
}

fn required<'a>(obj: &'a Map<String, Value>, parent: &str, key: &str) -> Result<&'a Value> {
    obj.get(key)
        .ok_or_else(|| SchemaValidationError::new(join(parent, key), "required field is missing"))
}

fn required_str(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<String> {
    let value = required(obj, parent, key)?;
    as_str(value, &join(parent, key)).map(str::to_string)
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| mismatch(path, "an object", value))
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| mismatch(path, "an array", value))
}

fn as_str<'a>(value: &'a Value, path: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| mismatch(path, "a string", value))
}

/// Integers may arrive as JSON numbers or as decimal strings (ids scraped
/// out of URL query strings).
fn as_integer(value: &Value, path: &str) -> Result<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| SchemaValidationError::new(path, format!("`{n}` is not a 64-bit integer"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| SchemaValidationError::new(path, format!("`{s}` is not an integer"))),
        other => Err(mismatch(path, "an integer", other)),
    }
}

fn optional_number(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<Option<f64>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(other) => Err(mismatch(&join(parent, key), "a number or null", other)),
    }
}

fn optional_bool(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<bool> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(mismatch(&join(parent, key), "a boolean", other)),
    }
}
