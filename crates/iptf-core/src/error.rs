//! Error types for iptf-core.
//!
//! Extraction, matching and formatting cannot fail; only the rule table and
//! the surrounding I/O can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse rule table: {0}")]
    Parse(#[from] config::ConfigError),
    #[error("ignore rule #{index} has no fields and would discard every line")]
    EmptyRule { index: usize },
    #[error("ignore rule #{index} accepts no values for field `{field}`")]
    EmptyValueSet { index: usize, field: String },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl PipelineError {
    /// True when the reader of our output went away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, PipelineError::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
