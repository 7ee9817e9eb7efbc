//! Named rule sets and rule books.
//!
//! A rule book is loaded from JSON:
//!
//! ```json
//! {
//!   "rule_sets": [
//!     {"name": "modals", "kind": "structural", "rules": [
//!       {"relation": "aux", "child_tags": ["AUX"], "head_tags": ["VERB"],
//!        "accepted_tags": ["VB"], "replacement": "VBG", "target": "head", "probability": 0.1}
//!     ]},
//!     {"name": "homophones", "kind": "literal", "rules": [
//!       {"source": "there", "target": "their", "coarse": "PRON", "fine": "PRP$", "probability": 0.2}
//!     ]}
//!   ]
//! }
//! ```
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{AugmentationRule, SubstitutionRule, Target};
use crate::conllu::TagMap;
use crate::error::Error;

/// Homogeneous, ordered list of rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Rules {
    Structural(Vec<AugmentationRule>),
    Literal(Vec<SubstitutionRule>),
}

impl Rules {
    pub fn len(&self) -> usize {
        match self {
            Rules::Structural(r) => r.len(),
            Rules::Literal(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Rules::Structural(_) => "structural",
            Rules::Literal(_) => "literal",
        }
    }
}

/// On-disk form of a [RuleSet], tagged by `kind`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RuleSetRepr {
    Structural {
        name: String,
        rules: Vec<AugmentationRule>,
    },
    Literal {
        name: String,
        rules: Vec<SubstitutionRule>,
    },
}

/// A named collection of rules of a single kind.
///
/// Duplicate rules are dropped on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RuleSetRepr", into = "RuleSetRepr")]
pub struct RuleSet {
    name: String,
    rules: Rules,
}

impl RuleSet {
    pub fn structural(name: &str, rules: Vec<AugmentationRule>) -> Self {
        let mut rs = Self {
            name: name.to_string(),
            rules: Rules::Structural(Vec::with_capacity(rules.len())),
        };
        for rule in rules {
            rs.add_structural(rule);
        }
        rs
    }

    pub fn literal(name: &str, rules: Vec<SubstitutionRule>) -> Self {
        let mut rs = Self {
            name: name.to_string(),
            rules: Rules::Literal(Vec::with_capacity(rules.len())),
        };
        for rule in rules {
            rs.add_literal(rule);
        }
        rs
    }

    /// Add a structural rule.
    ///
    /// Returns `false` if the rule was already present or if the set holds literal rules.
    pub fn add_structural(&mut self, rule: AugmentationRule) -> bool {
        match &mut self.rules {
            Rules::Structural(rules) if !rules.contains(&rule) => {
                rules.push(rule);
                true
            }
            _ => false,
        }
    }

    /// Add a literal rule. Same semantics as [RuleSet::add_structural].
    pub fn add_literal(&mut self, rule: SubstitutionRule) -> bool {
        match &mut self.rules {
            Rules::Literal(rules) if !rules.contains(&rule) => {
                rules.push(rule);
                true
            }
            _ => false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fails with [Error::NoRuleSet] on an empty set, or on the first invalid rule.
    ///
    /// The name ends up in output file names and is restricted to alphanumerics, `-` and `_`.
    pub fn validate(&self, tags: &TagMap) -> Result<(), Error> {
        if self.name.is_empty()
            || !self
                .name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidRule(format!(
                "invalid rule set name: {:?}",
                self.name
            )));
        }
        if self.is_empty() {
            return Err(Error::NoRuleSet(self.name.clone()));
        }
        match &self.rules {
            Rules::Structural(rules) => rules.iter().try_for_each(|r| r.validate(tags)),
            Rules::Literal(rules) => rules.iter().try_for_each(SubstitutionRule::validate),
        }
    }

    /// Default structural rules:
    /// 1. adverbs modifying verbs become adjectives,
    /// 1. base form verbs after auxiliaries become gerunds,
    /// 1. base form verbs after auxiliaries become past tense verbs,
    /// 1. gerunds after prepositions become base form verbs.
    pub fn default_structural() -> Self {
        Self::structural(
            "structural",
            vec![
                AugmentationRule::new("advmod", &["ADV"], &["VERB"], &["RB"], "JJ", Target::Child, 0.3),
                AugmentationRule::new("aux", &["AUX"], &["VERB"], &["VB"], "VBG", Target::Head, 0.1),
                AugmentationRule::new("aux", &["AUX"], &["VERB"], &["VB"], "VBD", Target::Head, 0.1),
                AugmentationRule::new("case", &["ADP"], &["VERB"], &["VBG"], "VB", Target::Head, 0.5),
            ],
        )
    }

    /// Default literal rules: homophones and subject/object pronoun swaps.
    pub fn default_literal() -> Self {
        let r = SubstitutionRule::new;
        Self::literal(
            "exact",
            vec![
                r("there", "their", "PRON", "PRP$", "Case=Gen|Number=Plur|Person=3|Poss=Yes|PronType=Prs", 0.2),
                r("their", "there", "ADV", "RB", "", 0.2),
                r("I", "me", "PRON", "PRP", "Case=Acc|Number=Sing|Person=1|PronType=Prs", 0.2),
                r("me", "I", "PRON", "PRP", "Case=Nom|Number=Sing|Person=1|PronType=Prs", 0.2),
                r("he", "him", "PRON", "PRP", "Case=Acc|Gender=Masc|Number=Sing|Person=3|PronType=Prs", 0.2),
                r("him", "he", "PRON", "PRP", "Case=Nom|Gender=Masc|Number=Sing|Person=3|PronType=Prs", 0.2),
                r("she", "her", "PRON", "PRP", "Case=Acc|Gender=Fem|Number=Sing|Person=3|PronType=Prs", 0.2),
                r("her", "she", "PRON", "PRP", "Case=Nom|Gender=Fem|Number=Sing|Person=3|PronType=Prs", 0.2),
                r("we", "us", "PRON", "PRP", "Case=Acc|Number=Plur|Person=1|PronType=Prs", 0.2),
                r("us", "we", "PRON", "PRP", "Case=Nom|Number=Plur|Person=1|PronType=Prs", 0.2),
                r("they", "them", "PRON", "PRP", "Case=Acc|Number=Plur|Person=3|PronType=Prs", 0.2),
                r("them", "they", "PRON", "PRP", "Case=Nom|Number=Plur|Person=3|PronType=Prs", 0.2),
                r("affect", "effect", "NOUN", "NN", "Number=Sing", 0.2),
                r("effect", "affect", "VERB", "VB", "", 0.2),
                r("than", "then", "ADV", "RB", "", 0.2),
                r("then", "than", "ADP", "IN", "", 0.2),
                r("to", "too", "ADV", "RB", "", 0.2),
                r("too", "to", "PART", "TO", "", 0.2),
                r("to", "two", "NUM", "CD", "NumForm=Word|NumType=Card", 0.2),
                r("two", "to", "PART", "TO", "", 0.2),
            ],
        )
    }
}

impl From<RuleSetRepr> for RuleSet {
    fn from(repr: RuleSetRepr) -> Self {
        match repr {
            RuleSetRepr::Structural { name, rules } => RuleSet::structural(&name, rules),
            RuleSetRepr::Literal { name, rules } => RuleSet::literal(&name, rules),
        }
    }
}

impl From<RuleSet> for RuleSetRepr {
    fn from(rs: RuleSet) -> Self {
        match rs.rules {
            Rules::Structural(rules) => RuleSetRepr::Structural {
                name: rs.name,
                rules,
            },
            Rules::Literal(rules) => RuleSetRepr::Literal {
                name: rs.name,
                rules,
            },
        }
    }
}

/// Every rule set available for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBook {
    rule_sets: Vec<RuleSet>,
}

impl RuleBook {
    pub fn new(rule_sets: Vec<RuleSet>) -> Self {
        Self { rule_sets }
    }

    pub fn from_reader<R: Read>(r: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(r)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.rule_sets.iter().find(|rs| rs.name() == name)
    }

    /// Get the named rule sets, or all of them if `names` is empty.
    ///
    /// A name given twice selects its set once.
    pub fn select(&self, names: &[String]) -> Result<Vec<&RuleSet>, Error> {
        if names.is_empty() {
            return Ok(self.rule_sets.iter().collect());
        }
        names
            .iter()
            .unique()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| Error::UnknownRuleSet(name.clone()))
            })
            .collect()
    }

    /// Checks that the book is not empty, that names are unique and that every set is valid.
    pub fn validate(&self, tags: &TagMap) -> Result<(), Error> {
        if self.rule_sets.is_empty() {
            return Err(Error::NoRuleSet("<rule book>".to_string()));
        }
        let mut names = HashSet::new();
        for rs in &self.rule_sets {
            if !names.insert(rs.name()) {
                return Err(Error::InvalidRule(format!(
                    "rule set {:?} is defined twice",
                    rs.name()
                )));
            }
            rs.validate(tags)?;
        }
        Ok(())
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::new(vec![
            RuleSet::default_structural(),
            RuleSet::default_literal(),
        ])
    }
}
