//! Object minifier.

use crate::value::minify_value;
use sv_core::Object;

/// Minify every field of `object` into a new object, dropping fields that
/// minify to nothing. An object left without fields is itself dropped.
pub fn minify_object(object: Option<&Object>) -> Option<Object> {
    let object = object.filter(|o| !o.is_empty())?;

    let mut output = Object::new();
    for (key, value) in object.iter() {
        if let Some(value) = minify_value(value) {
            output.insert(key.clone(), value);
        }
    }

    if output.is_empty() {
        return None;
    }
    Some(output)
}
