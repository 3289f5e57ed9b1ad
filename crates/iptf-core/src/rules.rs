//! Ignore rules: declarative predicates over a [`FieldMap`].
//!
//! A rule is plain data: a table of field name → [`MatchSpec`]. The rule
//! matches when every named field is present and its value is one of the
//! accepted values. A line is discarded when any rule in the table matches.
//!
//! Comparison is always textual. Integer targets are rendered in decimal
//! before comparing, so `dpt = 137` matches the token `DPT=137`. A
//! two-element list such as `[137, 138]` is a set of two exact values, not a
//! numeric range.

use crate::types::FieldMap;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single acceptable value in a rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Text(String),
}

impl Scalar {
    /// Textual form used for comparison against field values.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Scalar::Integer(n) => Cow::Owned(n.to_string()),
            Scalar::Text(s) => Cow::Borrowed(s),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Scalar::Text(s) => s == value,
            Scalar::Integer(_) => self.as_text() == value,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

/// What a field's value must be for a rule to match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MatchSpec {
    /// Field must equal this value.
    One(Scalar),
    /// Field must equal any of these values.
    AnyOf(Vec<Scalar>),
}

impl MatchSpec {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            MatchSpec::One(target) => target.matches(value),
            MatchSpec::AnyOf(targets) => targets.iter().any(|t| t.matches(value)),
        }
    }

    /// True for an `AnyOf` with no values, which can never match.
    pub fn is_empty(&self) -> bool {
        matches!(self, MatchSpec::AnyOf(v) if v.is_empty())
    }
}

/// One entry of the ignore table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IgnoreRule {
    /// Label shown in trace logs when the rule discards a line.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "match", default)]
    pub fields: BTreeMap<String, MatchSpec>,
}

impl IgnoreRule {
    pub fn new() -> Self {
        Self {
            name: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require `field` to equal `value`.
    pub fn equals(mut self, field: &str, value: impl Into<Scalar>) -> Self {
        self.fields
            .insert(field.to_ascii_lowercase(), MatchSpec::One(value.into()));
        self
    }

    /// Require `field` to equal one of `values`.
    pub fn any_of<S: Into<Scalar>>(
        mut self,
        field: &str,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.fields
            .insert(field.to_ascii_lowercase(), MatchSpec::AnyOf(values));
        self
    }

    /// True when every field named by the rule is present and accepted.
    pub fn matches(&self, fields: &FieldMap) -> bool {
        self.fields.iter().all(|(name, spec)| match fields.get(name) {
            Some(value) => spec.accepts(value),
            None => false,
        })
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

impl Default for IgnoreRule {
    fn default() -> Self {
        Self::new()
    }
}

/// First rule in `rules` that matches `fields`, if any.
pub fn first_match<'r>(fields: &FieldMap, rules: &'r [IgnoreRule]) -> Option<&'r IgnoreRule> {
    rules.iter().find(|rule| rule.matches(fields))
}

/// True when any rule matches. An empty table never discards.
pub fn should_discard(fields: &FieldMap, rules: &[IgnoreRule]) -> bool {
    first_match(fields, rules).is_some()
}
