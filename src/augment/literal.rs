use super::{Context, Edit, Matcher, Mutation};
use crate::conllu::{Sentence, Token};
use crate::rules::SubstitutionRule;

impl Matcher for SubstitutionRule {
    fn probability(&self) -> f64 {
        self.probability()
    }

    /// Case-sensitive surface form equality.
    fn matches(&self, _sentence: &Sentence, token: &Token) -> bool {
        token.form() == self.source()
    }

    fn mutate(&self, _sentence: &Sentence, token: &Token, _ctx: Context<'_>) -> Mutation {
        Mutation::Apply(Edit {
            index: token.index(),
            form: self.target().to_string(),
            upos: self.coarse().to_string(),
            xpos: self.fine().to_string(),
            feats: self.features().map(str::to_string),
        })
    }
}
