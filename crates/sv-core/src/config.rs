use serde::{Deserialize, Serialize};

/// Nesting limit applied when none is configured explicitly.
///
/// Guards in-memory trees handed to the minifier directly. Text input is
/// already capped by the `serde_json` parser, which fails with a
/// serialization error before this limit can be reached.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    /// Reject trees nested deeper than this. `None` disables the check.
    pub max_depth: Option<usize>,
    /// Render documents with indentation. JSON Lines output is always compact.
    pub pretty: bool,
}

impl MinifyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            pretty: false,
        }
    }
}
