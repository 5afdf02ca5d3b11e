use schemars::schema_for;
use serde_json::Value;

use crate::data::OfferDraft;

/// JSON Schema describing the draft fields accepted by the form, including
/// the per-field minimum lengths.
pub fn generate() -> Value {
    serde_json::to_value(schema_for!(OfferDraft)).unwrap_or(Value::Null)
}
