use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// A JSON document kept in its own named collection, stamped by the server
/// when it is created.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Client payload accepted by the create endpoint.
    type Draft: DeserializeOwned + Default + Send;

    const COLLECTION: &'static str;

    fn from_draft(draft: Self::Draft, created_at: OffsetDateTime) -> Self;

    fn created_at(&self) -> OffsetDateTime;
}

/// Current UTC instant truncated to milliseconds, the resolution the
/// document store keeps.
pub fn utc_now() -> OffsetDateTime {
    truncate_to_millis(OffsetDateTime::now_utc())
}

pub fn truncate_to_millis(at: OffsetDateTime) -> OffsetDateTime {
    let nanos = u32::from(at.millisecond()) * 1_000_000;
    at.replace_nanosecond(nanos).unwrap_or(at)
}

/// Decodes a create payload.
///
/// A `null` body yields the default draft and any other non-object is
/// rejected. Keys match draft fields case-insensitively, with an exact
/// match taking precedence over a folded one. Draft field names are all
/// lowercase.
pub fn decode_draft<D>(body: &[u8]) -> Result<D, serde_json::Error>
where
    D: DeserializeOwned + Default,
{
    let object = match serde_json::from_slice::<Value>(body)? {
        Value::Null => return Ok(D::default()),
        Value::Object(object) => object,
        other => {
            return Err(serde_json::Error::invalid_type(
                unexpected(&other),
                &"a JSON object",
            ))
        }
    };

    let mut folded = Map::with_capacity(object.len());
    let mut exact = Vec::new();
    for (key, value) in object {
        let lower = key.to_lowercase();
        if lower == key {
            exact.push((key, value));
        } else {
            folded.insert(lower, value);
        }
    }
    folded.extend(exact);

    serde_json::from_value(Value::Object(folded))
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Null => Unexpected::Unit,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Reads a string field, treating `null` as the empty string.
pub(crate) fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
