//! Array minifier.

use crate::value::minify_value;
use sv_core::Array;

/// Minify every element of `array` in order. Void elements are removed rather
/// than left as holes; an array with no survivors is itself dropped.
pub fn minify_array(array: Option<&Array>) -> Option<Array> {
    let array = array.filter(|a| !a.is_empty())?;

    let mut output = Array::with_capacity(array.len());
    for value in array.iter().filter_map(minify_value) {
        output.push(value);
    }

    (!output.is_empty()).then_some(output)
}
