//! Minifier pipeline — JSON text in, minified JSON text out.

use crate::value::minify_value;
use serde::Serialize;
use sv_core::{MinifyConfig, MinifyError, Result, Value};
use tracing::{debug, trace};

/// Minification result with statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinifyResult {
    /// Rendered output. `None` when everything minified away and there is
    /// nothing to emit.
    pub output: Option<String>,
    pub original_len: usize,
    pub minified_len: usize,
    /// Present nodes parsed from the input.
    pub nodes_in: usize,
    /// Present nodes remaining after minification.
    pub nodes_out: usize,
}

impl MinifyResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.minified_len as f64 / self.original_len as f64
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        (1.0 - self.ratio()) * 100.0
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_none()
    }
}

/// Minifier with a configurable nesting limit and output style.
#[derive(Debug, Clone, Default)]
pub struct Minifier {
    pub config: MinifyConfig,
}

impl Minifier {
    pub fn new(config: MinifyConfig) -> Self {
        Self { config }
    }

    /// Minifier with no nesting limit.
    pub fn unbounded() -> Self {
        Self::new(MinifyConfig::default().unbounded())
    }

    /// Minify a value tree, rejecting it first if it is nested deeper than
    /// `config.max_depth`.
    pub fn minify(&self, value: &Value) -> Result<Option<Value>> {
        self.check_depth(value)?;
        Ok(minify_value(Some(value)))
    }

    fn check_depth(&self, value: &Value) -> Result<()> {
        let Some(limit) = self.config.max_depth else {
            return Ok(());
        };
        let depth = value.depth();
        if depth > limit {
            debug!(depth, limit, "rejecting value nested past the limit");
            return Err(MinifyError::DepthExceeded { depth, limit });
        }
        Ok(())
    }

    /// Render a value as JSON text, pretty or compact per config.
    pub fn render(&self, value: &Value) -> Result<String> {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }

    /// Parse a JSON document, minify it and render the result.
    pub fn minify_str(&self, text: &str) -> Result<MinifyResult> {
        let value: Value = serde_json::from_str(text)?;
        let nodes_in = value.node_count();

        let minified = self.minify(&value)?;
        let nodes_out = minified.as_ref().map_or(0, Value::node_count);
        let output = minified.as_ref().map(|v| self.render(v)).transpose()?;
        let minified_len = output.as_ref().map_or(0, String::len);

        debug!(
            kind = %value.kind(),
            original_len = text.len(),
            minified_len,
            nodes_in,
            nodes_out,
            "minified document"
        );

        Ok(MinifyResult {
            output,
            original_len: text.len(),
            minified_len,
            nodes_in,
            nodes_out,
        })
    }

    /// Minify JSON Lines: every non-blank line is an independent document.
    /// Lines that minify to nothing are dropped. Output lines are always
    /// compact.
    pub fn minify_lines(&self, text: &str) -> Result<MinifyResult> {
        let mut lines = Vec::new();
        let mut nodes_in = 0;
        let mut nodes_out = 0;

        for (idx, raw) in text.lines().enumerate() {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let line_no = idx + 1;

            let value: Value = serde_json::from_str(raw)
                .map_err(|e| MinifyError::from(e).at_line(line_no))?;
            nodes_in += value.node_count();

            match self.minify(&value).map_err(|e| e.at_line(line_no))? {
                Some(minified) => {
                    nodes_out += minified.node_count();
                    lines.push(serde_json::to_string(&minified)?);
                }
                None => trace!(line = line_no, "dropping line that minified to nothing"),
            }
        }

        let output = (!lines.is_empty()).then(|| lines.join("\n"));
        let minified_len = output.as_ref().map_or(0, String::len);

        debug!(
            original_len = text.len(),
            minified_len,
            kept_lines = lines.len(),
            nodes_in,
            nodes_out,
            "minified json lines"
        );

        Ok(MinifyResult {
            output,
            original_len: text.len(),
            minified_len,
            nodes_in,
            nodes_out,
        })
    }
}
