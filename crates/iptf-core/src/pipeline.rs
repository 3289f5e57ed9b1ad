//! Line pipeline: read, extract, filter, emit.
//!
//! The pipeline holds only the immutable rule table. Each line is read into a
//! single reused buffer, turned into a [`FieldMap`], checked against the
//! rules and, if it survives, written and flushed before the next read. No
//! line content outlives its own iteration, so memory stays flat on an
//! unbounded stream.

use crate::error::PipelineError;
use crate::extractor::extract;
use crate::format::Summary;
use crate::rules::{first_match, IgnoreRule};
use crate::types::FieldMap;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub lines_read: u64,
    pub discarded: u64,
    pub emitted: u64,
    /// Lines that were not valid UTF-8 and were converted lossily.
    pub lossy: u64,
}

/// Outcome of processing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<'r> {
    Discarded(&'r IgnoreRule),
    Emit(FieldMap),
}

pub struct Pipeline<'r> {
    rules: &'r [IgnoreRule],
}

impl<'r> Pipeline<'r> {
    pub fn new(rules: &'r [IgnoreRule]) -> Self {
        Self { rules }
    }

    /// Classify a single line (without its terminator).
    pub fn classify(&self, line: &str) -> Verdict<'r> {
        let fields = extract(line);
        match first_match(&fields, self.rules) {
            Some(rule) => Verdict::Discarded(rule),
            None => Verdict::Emit(fields),
        }
    }

    /// Formatted summary for `line`, or `None` when a rule discards it.
    pub fn process_line(&self, line: &str) -> Option<String> {
        match self.classify(line) {
            Verdict::Discarded(_) => None,
            Verdict::Emit(fields) => Some(Summary(&fields).to_string()),
        }
    }

    /// Run until `input` is exhausted, writing one flushed line per survivor.
    ///
    /// Returns at EOF. Blocks for as long as `input` blocks, which is what a
    /// followed log needs. Any read or write failure ends the run.
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> Result<PipelineStats, PipelineError>
    where
        R: BufRead,
        W: Write,
    {
        let mut stats = PipelineStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = input
                .read_until(b'\n', &mut buf)
                .map_err(PipelineError::Read)?;
            if n == 0 {
                break;
            }
            stats.lines_read += 1;

            let raw = strip_terminator(&buf);
            let line = String::from_utf8_lossy(raw);
            if matches!(line, Cow::Owned(_)) {
                stats.lossy += 1;
                tracing::warn!(line = stats.lines_read, "invalid UTF-8 replaced");
            }

            match self.classify(&line) {
                Verdict::Discarded(rule) => {
                    stats.discarded += 1;
                    tracing::trace!(line = stats.lines_read, rule = rule.label(), "discarded");
                }
                Verdict::Emit(fields) => {
                    writeln!(output, "{}", Summary(&fields)).map_err(PipelineError::Write)?;
                    output.flush().map_err(PipelineError::Write)?;
                    stats.emitted += 1;
                }
            }
        }

        tracing::debug!(
            lines_read = stats.lines_read,
            discarded = stats.discarded,
            emitted = stats.emitted,
            "input exhausted"
        );
        Ok(stats)
    }
}

fn strip_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
