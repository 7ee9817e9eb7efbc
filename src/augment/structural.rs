use super::{Context, Edit, Matcher, Mutation};
use crate::conllu::{Sentence, Token};
use crate::rules::{AugmentationRule, Target};

impl Matcher for AugmentationRule {
    fn probability(&self) -> f64 {
        self.probability()
    }

    /// Root tokens never match: the head tag constraint needs a governor.
    fn matches(&self, sentence: &Sentence, token: &Token) -> bool {
        token.deprel() == self.relation()
            && self.child_tags().contains(token.upos())
            && sentence
                .governor_of(token)
                .map_or(false, |governor| self.head_tags().contains(governor.upos()))
    }

    fn mutate(&self, sentence: &Sentence, token: &Token, ctx: Context<'_>) -> Mutation {
        let target = match self.target() {
            Target::Child => Some(token),
            Target::Head => sentence.governor_of(token),
        };
        let target = match target {
            Some(t) if self.accepted_tags().contains(t.xpos()) => t,
            _ => return Mutation::Skip,
        };

        // replacement tags are checked against the table when the rule set is loaded
        let upos = match ctx.tags.coarse(self.replacement()) {
            Some(upos) => upos.to_string(),
            None => return Mutation::Skip,
        };

        match ctx
            .resolver
            .resolve(target.form(), target.lemma(), self.replacement())
        {
            Some(form) => Mutation::Apply(Edit {
                index: target.index(),
                form,
                upos,
                xpos: self.replacement().to_string(),
                feats: None,
            }),
            None => Mutation::Abort,
        }
    }
}
