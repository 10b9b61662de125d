//! Domain and tag types for the closed taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::TaxonomyError;

/// Top-level subject domain. The taxonomy is closed: exactly four domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Domain {
    /// English language.
    #[serde(rename = "ENG")]
    Eng,
    /// Mathematics.
    #[serde(rename = "MATH")]
    Math,
    /// General Intelligence / Reasoning.
    #[serde(rename = "GI")]
    Gi,
    /// General Knowledge.
    #[serde(rename = "GK")]
    Gk,
}

impl Domain {
    /// All domains in canonical order.
    pub const ALL: [Domain; 4] = [Domain::Eng, Domain::Math, Domain::Gi, Domain::Gk];

    /// Wire form of the domain (`ENG`, `MATH`, `GI`, `GK`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Eng => "ENG",
            Domain::Math => "MATH",
            Domain::Gi => "GI",
            Domain::Gk => "GK",
        }
    }

    /// Parse the wire form. Case-sensitive: `eng` is not a domain.
    pub fn parse(s: &str) -> Option<Domain> {
        match s {
            "ENG" => Some(Domain::Eng),
            "MATH" => Some(Domain::Math),
            "GI" => Some(Domain::Gi),
            "GK" => Some(Domain::Gk),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name of the per-domain fallback leaf.
pub const UNDEFINED_LEAF: &str = "Undefined";

/// A single taxonomy leaf tag in `DOMAIN::Name` form.
///
/// Construction validates the format on every path, deserialization
/// included; a `Tag` value always carries a valid domain prefix and a
/// non-empty leaf name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Tag(String);

impl TryFrom<String> for Tag {
    type Error = TaxonomyError;

    fn try_from(s: String) -> Result<Tag, TaxonomyError> {
        Tag::parse(&s)
    }
}

impl Tag {
    /// Build a tag from a domain and a leaf name. The name must be a valid
    /// leaf name (non-empty, no `::`, no whitespace).
    pub fn new(domain: Domain, name: &str) -> Result<Tag, TaxonomyError> {
        if !is_valid_leaf_name(name) {
            return Err(TaxonomyError::InvalidTagFormat {
                tag: format!("{}::{}", domain.as_str(), name),
            });
        }
        Ok(Tag(format!("{}::{}", domain.as_str(), name)))
    }

    /// Parse a `DOMAIN::Name` string into a tag.
    ///
    /// Strings whose prefix is not one of the four domains (e.g. source/year
    /// labels like `WBCS::Prelims::2023`) are rejected with
    /// `TaxonomyError::InvalidTagFormat`.
    pub fn parse(s: &str) -> Result<Tag, TaxonomyError> {
        let (prefix, name) = s.split_once("::").ok_or_else(|| {
            TaxonomyError::InvalidTagFormat { tag: s.to_string() }
        })?;
        let domain = Domain::parse(prefix).ok_or_else(|| TaxonomyError::InvalidTagFormat {
            tag: s.to_string(),
        })?;
        Tag::new(domain, name)
    }

    /// The domain prefix of this tag.
    pub fn domain(&self) -> Domain {
        // Invariant: constructed via new/parse, prefix is always valid.
        let prefix = self.0.split_once("::").map(|(p, _)| p).unwrap_or_default();
        Domain::parse(prefix).expect("tag carries a valid domain prefix")
    }

    /// The leaf name (the part after `::`).
    pub fn name(&self) -> &str {
        self.0.split_once("::").map(|(_, n)| n).unwrap_or_default()
    }

    /// The full `DOMAIN::Name` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this is a per-domain `Undefined` fallback leaf.
    pub fn is_undefined(&self) -> bool {
        self.name() == UNDEFINED_LEAF
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Leaf names must be non-empty, contain no `::` separator, and no whitespace.
pub(crate) fn is_valid_leaf_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("::") && !name.chars().any(char::is_whitespace)
}
