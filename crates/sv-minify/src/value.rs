//! Value minifier — dispatches on kind.

use crate::{array::minify_array, object::minify_object};
use sv_core::Value;

/// Minify a single slot. `None` means "omit this position from its parent".
///
/// Unset and `Null` inputs give `None`. Objects and arrays are minified
/// recursively and give `None` once nothing survives inside them. Scalars pass
/// through unchanged, so `false`, `0` and `""` are kept.
pub fn minify_value(value: Option<&Value>) -> Option<Value> {
    let value = value?;
    match value {
        Value::Null => None,
        Value::Object(object) => minify_object(Some(object)).map(Value::Object),
        Value::Array(array) => minify_array(Some(array)).map(Value::Array),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(value.clone()),
    }
}
