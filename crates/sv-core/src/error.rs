use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Value nested {depth} levels deep exceeds limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },
    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<MinifyError>,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MinifyError {
    /// Attach a 1-based line number.
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
