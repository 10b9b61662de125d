//! Taxonomy registry — the closed set of valid domains and leaf tags.
//!
//! The registry is built once from versioned TOML data (domain → ordered leaf
//! list) and is read-only afterwards, so it can be shared freely across
//! threads. Construction fails fast on malformed tag data or a domain missing
//! its `Undefined` fallback leaf.

mod types;

pub use types::{Domain, Tag, UNDEFINED_LEAF};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::errors::TaxonomyError;

/// Built-in taxonomy data, compiled into the binary.
const DEFAULT_TAXONOMY: &str = include_str!("default_taxonomy.toml");

/// TOML shape of taxonomy data.
#[derive(Debug, Deserialize)]
struct TaxonomyData {
    version: String,
    domains: DomainLists,
}

#[derive(Debug, Deserialize)]
struct DomainLists {
    #[serde(rename = "ENG")]
    eng: Vec<String>,
    #[serde(rename = "MATH")]
    math: Vec<String>,
    #[serde(rename = "GI")]
    gi: Vec<String>,
    #[serde(rename = "GK")]
    gk: Vec<String>,
}

/// Immutable registry of all valid taxonomy tags.
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    version: String,
    /// Ordered leaf tags per domain.
    by_domain: FxHashMap<Domain, Vec<Tag>>,
    /// Full tag string → owning domain.
    index: FxHashMap<String, Domain>,
}

impl TaxonomyRegistry {
    /// Build the registry from TOML taxonomy data.
    ///
    /// Fails when a leaf name is malformed, a leaf is duplicated within a
    /// domain, or a domain lacks an `Undefined` entry.
    pub fn from_toml(data: &str) -> Result<Self, TaxonomyError> {
        let data: TaxonomyData =
            toml::from_str(data).map_err(|e| TaxonomyError::DataError {
                message: e.to_string(),
            })?;

        let lists = [
            (Domain::Eng, &data.domains.eng),
            (Domain::Math, &data.domains.math),
            (Domain::Gi, &data.domains.gi),
            (Domain::Gk, &data.domains.gk),
        ];

        let mut by_domain: FxHashMap<Domain, Vec<Tag>> = FxHashMap::default();
        let mut index: FxHashMap<String, Domain> = FxHashMap::default();

        for (domain, names) in lists {
            let mut tags = Vec::with_capacity(names.len());
            for name in names {
                let tag = Tag::new(domain, name)?;
                if index.contains_key(tag.as_str()) {
                    return Err(TaxonomyError::DuplicateTag {
                        tag: tag.as_str().to_string(),
                    });
                }
                index.insert(tag.as_str().to_string(), domain);
                tags.push(tag);
            }
            if !tags.iter().any(|t| t.is_undefined()) {
                return Err(TaxonomyError::MissingUndefined { domain });
            }
            by_domain.insert(domain, tags);
        }

        Ok(Self {
            version: data.version,
            by_domain,
            index,
        })
    }

    /// The built-in taxonomy shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_toml(DEFAULT_TAXONOMY).expect("built-in taxonomy data is valid")
    }

    /// Taxonomy data version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up the owning domain of a tag string. `None` for anything that is
    /// not a registry member (including well-formed but unknown tags).
    pub fn lookup(&self, tag: &str) -> Option<Domain> {
        self.index.get(tag).copied()
    }

    /// True when the tag is a registry member.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.index.contains_key(tag.as_str())
    }

    /// The ordered leaf tags of a domain.
    pub fn domain_tags(&self, domain: Domain) -> &[Tag] {
        self.by_domain
            .get(&domain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The `Undefined` fallback leaf of a domain.
    pub fn undefined_tag(&self, domain: Domain) -> Tag {
        self.domain_tags(domain)
            .iter()
            .find(|t| t.is_undefined())
            .cloned()
            .expect("every domain has an Undefined leaf after construction")
    }

    /// Total number of leaf tags across all domains.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the registry holds no tags.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for TaxonomyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
