//! Field extractor: turns one raw log line into a [`FieldMap`].
//!
//! Every `KEY=value` token whose key is a run of upper-case ASCII letters is
//! collected with its key lower-cased. The value is the maximal run of
//! non-whitespace characters after `=` and may be empty. Any other text on the
//! line is ignored, so the extractor is defined for every input.

use crate::types::{FieldMap, DESTINATION_KEY, SOURCE_KEY, TIMESTAMP_KEY};
use regex::Regex;
use std::sync::OnceLock;

/// Number of leading characters copied verbatim into [`TIMESTAMP_KEY`].
/// Matches the syslog `Mmm dd hh:mm:ss` prefix.
pub const TIMESTAMP_LEN: usize = 15;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"([A-Z]+?)=(\S*)").expect("token pattern is valid"))
}

/// Extract all field tokens plus the synthetic timestamp and endpoints.
///
/// Never fails. A line with no tokens yields a map holding only the three
/// synthetic keys.
pub fn extract(raw: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    for caps in token_regex().captures_iter(raw) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str());
        fields.insert(key.to_ascii_lowercase(), value);
    }

    fields.insert(TIMESTAMP_KEY, timestamp_prefix(raw));
    let src = endpoint(fields.get("src"), fields.get("spt"));
    let dest = endpoint(fields.get("dst"), fields.get("dpt"));
    fields.insert(SOURCE_KEY, src);
    fields.insert(DESTINATION_KEY, dest);

    fields
}

/// First [`TIMESTAMP_LEN`] characters of `raw`, or all of it when shorter.
pub fn timestamp_prefix(raw: &str) -> &str {
    match raw.char_indices().nth(TIMESTAMP_LEN) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}

/// Compose an `address:port` display string. Empty parts count as missing.
pub fn endpoint(addr: Option<&str>, port: Option<&str>) -> String {
    let addr = addr.filter(|s| !s.is_empty());
    let port = port.filter(|s| !s.is_empty());
    match (addr, port) {
        (Some(a), Some(p)) => format!("{a}:{p}"),
        (Some(a), None) => a.to_string(),
        (None, Some(p)) => format!(":{p}"),
        (None, None) => String::new(),
    }
}
