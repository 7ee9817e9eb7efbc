//! Matcher trait and mutation types.
use crate::conllu::{Sentence, TagMap, Token};
use crate::forms::FormResolver;

/// Read-only collaborators of a mutation.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub tags: &'a TagMap,
    pub resolver: &'a dyn FormResolver,
}

/// New values for one token.
///
/// `feats` is [None] when features are kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub index: usize,
    pub form: String,
    pub upos: String,
    pub xpos: String,
    pub feats: Option<String>,
}

impl Edit {
    /// Apply the edit on a copy of `sentence`.
    ///
    /// Returns [None] if `index` is not a token of `sentence`.
    pub fn apply(&self, sentence: &Sentence) -> Option<Sentence> {
        let mut mutated = sentence.clone();
        let token = mutated.token_mut(self.index)?;
        token.set_form(self.form.clone());
        token.set_upos(self.upos.clone());
        token.set_xpos(self.xpos.clone());
        if let Some(feats) = &self.feats {
            token.set_feats(feats.clone());
        }
        Some(mutated)
    }
}

/// Outcome of a rule on a qualifying token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// The rule does not fire here, scanning goes on.
    Skip,
    /// The rule fires.
    Apply(Edit),
    /// The rule fires but cannot be applied: the sentence is dropped.
    Abort,
}

/// Shared interface of every rule kind.
pub trait Matcher: Sync {
    /// Probability of firing on a matching token.
    fn probability(&self) -> f64;

    /// Deterministic part of qualification.
    fn matches(&self, sentence: &Sentence, token: &Token) -> bool;

    /// Compute the rewrite for a qualifying `token`.
    fn mutate(&self, sentence: &Sentence, token: &Token, ctx: Context<'_>) -> Mutation;
}
