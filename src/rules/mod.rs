/*! Augmentation rules.

Rules are plain data here, matching and rewriting lives in [crate::augment].
!*/
mod rule;
mod ruleset;

pub use rule::{AugmentationRule, SubstitutionRule, Target};
pub use ruleset::{RuleBook, RuleSet, Rules};
