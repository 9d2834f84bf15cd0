pub mod config;
pub mod error;
pub mod value;

pub use config::{MinifyConfig, DEFAULT_MAX_DEPTH};
pub use error::{MinifyError, Result};
pub use value::{Array, Kind, Object, Value};
