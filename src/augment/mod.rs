/*! Matching and mutation engine.

Both rule shapes are [Matcher]s: a deterministic predicate over a token in its sentence,
then a mutation of one token of that sentence.
[Augmentor::try_augment] drives them:

1. the rules are shuffled,
1. for each rule, tokens are scanned in sentence order,
1. a token qualifies if the rule [Matcher::matches] it *and* a draw with the rule probability succeeds,
1. the first [Mutation::Apply] wins and produces a mutated copy of the sentence,
1. a [Mutation::Abort] (the resolver has no form) drops the sentence altogether.

At most one token is rewritten per sentence.
!*/
mod augmentor;
mod literal;
mod matcher;
mod structural;

pub use augmentor::Augmentor;
pub use matcher::{Context, Edit, Matcher, Mutation};
