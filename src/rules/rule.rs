//! Rule records.
//!
//! Two shapes exist:
//! - [AugmentationRule] matches a dependency edge and rewrites the child or the head to another fine tag,
//!   asking a [crate::forms::FormResolver] for the new surface form.
//! - [SubstitutionRule] matches an exact surface form and replaces it with a literal.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::conllu::TagMap;
use crate::error::Error;

/// Which side of the matched edge gets rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Child,
    Head,
}

fn check_probability(p: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidRule(format!(
            "probability {} is not in [0, 1]",
            p
        )))
    }
}

fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// Structural rule.
///
/// A token qualifies when its relation is `relation`, its coarse tag is in `child_tags`,
/// it has a governor whose coarse tag is in `head_tags`, and a draw with `probability` succeeds.
/// The rewrite target (see [Target]) must then carry one of the `accepted_tags` fine tags,
/// and gets rewritten to `replacement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentationRule {
    relation: String,
    child_tags: BTreeSet<String>,
    head_tags: BTreeSet<String>,
    accepted_tags: BTreeSet<String>,
    replacement: String,
    target: Target,
    probability: f64,
}

impl AugmentationRule {
    pub fn new(
        relation: &str,
        child_tags: &[&str],
        head_tags: &[&str],
        accepted_tags: &[&str],
        replacement: &str,
        target: Target,
        probability: f64,
    ) -> Self {
        Self {
            relation: relation.to_string(),
            child_tags: tag_set(child_tags),
            head_tags: tag_set(head_tags),
            accepted_tags: tag_set(accepted_tags),
            replacement: replacement.to_string(),
            target,
            probability,
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn child_tags(&self) -> &BTreeSet<String> {
        &self.child_tags
    }

    pub fn head_tags(&self) -> &BTreeSet<String> {
        &self.head_tags
    }

    pub fn accepted_tags(&self) -> &BTreeSet<String> {
        &self.accepted_tags
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Checks probability bounds and that `replacement` has a coarse tag.
    pub fn validate(&self, tags: &TagMap) -> Result<(), Error> {
        check_probability(self.probability)?;
        if !tags.contains(&self.replacement) {
            return Err(Error::InvalidRule(format!(
                "replacement tag {:?} of {:?} rule has no coarse tag",
                self.replacement, self.relation
            )));
        }
        Ok(())
    }
}

/// Literal rule: `source` (case-sensitive) becomes `target`, with new tags.
///
/// An empty `features` leaves the token features untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    source: String,
    target: String,
    coarse: String,
    fine: String,
    #[serde(default)]
    features: String,
    probability: f64,
}

impl SubstitutionRule {
    pub fn new(
        source: &str,
        target: &str,
        coarse: &str,
        fine: &str,
        features: &str,
        probability: f64,
    ) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            coarse: coarse.to_string(),
            fine: fine.to_string(),
            features: features.to_string(),
            probability,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn coarse(&self) -> &str {
        &self.coarse
    }

    pub fn fine(&self) -> &str {
        &self.fine
    }

    /// Replacement features, [None] when they should be kept.
    pub fn features(&self) -> Option<&str> {
        match self.features.as_str() {
            "" => None,
            f => Some(f),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn validate(&self) -> Result<(), Error> {
        check_probability(self.probability)?;
        if self.source.is_empty() || self.target.is_empty() {
            return Err(Error::InvalidRule(format!(
                "empty source or target in {:?} -> {:?}",
                self.source, self.target
            )));
        }
        // the output only holds sentences that differ from their source
        if self.source == self.target {
            return Err(Error::InvalidRule(format!(
                "{:?} is replaced by itself",
                self.source
            )));
        }
        Ok(())
    }
}
