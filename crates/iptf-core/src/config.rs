//! Configuration types for iptf.
//!
//! The ignore-rule table is compiled into the binary as TOML and parsed once
//! at startup. [`Config::builtin`] returns that table; [`Config::from_toml`]
//! parses any other TOML text with the same schema (useful in tests). Nothing
//! here reads from disk.

use crate::error::ConfigError;
use crate::rules::IgnoreRule;
use serde::Deserialize;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Broadcast chatter seen on a typical home gateway.
pub const DEFAULT_RULES: &str = r#"
[[ignore]]
name  = "netbios-in-eth0"
match = { proto = "UDP", in = "eth0", dpt = [137, 138] }

[[ignore]]
name  = "netbios-out-eth0"
match = { proto = "UDP", out = "eth0", dpt = [137, 138] }

[[ignore]]
name  = "dhcp-in-eth0"
match = { proto = "UDP", in = "eth0", dpt = [67, 68] }

[[ignore]]
name  = "dhcp-out-eth0"
match = { proto = "UDP", out = "eth0", dpt = [67, 68] }

[[ignore]]
name  = "dhcp-in-wlan1"
match = { proto = "UDP", in = "wlan1", dpt = [67, 68] }

[[ignore]]
name  = "dhcp-out-wlan1"
match = { proto = "UDP", out = "wlan1", dpt = [67, 68] }
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration: the ordered ignore table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ignore: Vec<IgnoreRule>,
}

impl Config {
    /// The compiled-in rule table, validated.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_RULES)
    }

    /// Parse and validate a rule table from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.normalized().validate()
    }

    /// Lower-case every field name so rules line up with extracted keys.
    fn normalized(mut self) -> Self {
        for rule in &mut self.ignore {
            rule.fields = std::mem::take(&mut rule.fields)
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .collect::<BTreeMap<_, _>>();
        }
        self
    }

    /// Reject rules that would discard everything or nothing.
    fn validate(self) -> Result<Self, ConfigError> {
        for (index, rule) in self.ignore.iter().enumerate() {
            if rule.fields.is_empty() {
                return Err(ConfigError::EmptyRule { index });
            }
            if let Some((field, _)) = rule.fields.iter().find(|(_, spec)| spec.is_empty()) {
                return Err(ConfigError::EmptyValueSet {
                    index,
                    field: field.clone(),
                });
            }
        }
        Ok(self)
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.ignore
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
