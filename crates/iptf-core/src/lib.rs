//! iptf-core: field extraction and ignore-rule filtering for iptables logs.
//!
//! # Architecture
//!
//! ```text
//! line ──► extractor ──► rules ──┬──► discarded
//!                                └──► format ──► output
//! ```
//!
//! [`pipeline::Pipeline`] drives the sequence one line at a time over any
//! `BufRead`. Only the rule table lives longer than a single line.

pub mod config;
pub mod error;
pub mod extractor;
pub mod format;
pub mod pipeline;
pub mod rules;
pub mod types;

pub use crate::config::Config;
pub use error::{ConfigError, PipelineError};
pub use extractor::extract;
pub use format::{format_line, Summary};
pub use pipeline::{Pipeline, PipelineStats, Verdict};
pub use rules::{first_match, should_discard, IgnoreRule, MatchSpec, Scalar};
pub use types::FieldMap;
