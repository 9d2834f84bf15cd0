//! Struct-value minifier — strips nulls and emptied containers from a value tree.
//!
//! Entry points:
//! 1. `minify_value`: kind dispatch, root of the recursion
//! 2. `minify_object`: key/value mappings
//! 3. `minify_array`: ordered sequences, holes compacted out
//! 4. `Minifier`: JSON / JSON Lines text pipeline with a nesting limit

pub mod array;
pub mod object;
pub mod pipeline;
pub mod value;

pub use array::minify_array;
pub use object::minify_object;
pub use pipeline::{MinifyResult, Minifier};
pub use sv_core::{Array, Kind, MinifyConfig, MinifyError, Object, Result, Value};
pub use value::minify_value;

#[cfg(test)]
mod tests;
