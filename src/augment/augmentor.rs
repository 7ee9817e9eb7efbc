//! Rule driver.
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{Context, Matcher, Mutation};
use crate::conllu::{Sentence, TagMap};
use crate::error::Error;
use crate::forms::FormResolver;
use crate::rules::{RuleSet, Rules};

/// Applies a rule set to sentences.
///
/// Holds no mutable state and can be shared between threads,
/// randomness comes from the caller.
pub struct Augmentor<'a> {
    name: &'a str,
    matchers: Vec<&'a dyn Matcher>,
    ctx: Context<'a>,
}

impl<'a> Augmentor<'a> {
    /// Validates `rule_set` against `tags`.
    ///
    /// Fails with [Error::NoRuleSet] if the set is empty.
    pub fn new(
        rule_set: &'a RuleSet,
        tags: &'a TagMap,
        resolver: &'a dyn FormResolver,
    ) -> Result<Self, Error> {
        rule_set.validate(tags)?;

        let matchers: Vec<&dyn Matcher> = match rule_set.rules() {
            Rules::Structural(rules) => rules.iter().map(|r| r as &dyn Matcher).collect(),
            Rules::Literal(rules) => rules.iter().map(|r| r as &dyn Matcher).collect(),
        };

        Ok(Self {
            name: rule_set.name(),
            matchers,
            ctx: Context { tags, resolver },
        })
    }

    /// Name of the underlying rule set.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Try to inject one error into `sentence`.
    ///
    /// Returns a mutated copy on success. [None] means the sentence is to be dropped,
    /// either because no rule fired or because the first firing rule could not find a form.
    pub fn try_augment<R: Rng>(&self, sentence: &Sentence, rng: &mut R) -> Option<Sentence> {
        let mut order = self.matchers.clone();
        order.shuffle(rng);

        for matcher in order {
            for token in sentence.tokens() {
                if !matcher.matches(sentence, token) || !rng.gen_bool(matcher.probability()) {
                    continue;
                }

                match matcher.mutate(sentence, token, self.ctx) {
                    Mutation::Skip => continue,
                    Mutation::Apply(edit) => {
                        debug!(
                            "[{}] token {}: {}/{} -> {}/{}",
                            self.name,
                            edit.index,
                            sentence.token(edit.index).map_or("", |t| t.form()),
                            sentence.token(edit.index).map_or("", |t| t.xpos()),
                            edit.form,
                            edit.xpos
                        );
                        return edit.apply(sentence);
                    }
                    Mutation::Abort => return None,
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::conllu::parse;
    use crate::forms::Forms;
    use crate::rules::{AugmentationRule, SubstitutionRule, Target};

    /// "They can learning fast", with learning attached to can as aux.
    const CAN_LEARNING: &str = "1\tThey\tthey\tPRON\tPRP\tCase=Nom\t2\tnsubj\t_\t_
2\tcan\tcan\tVERB\tMD\tVerbForm=Fin\t0\troot\t_\t_
3\tlearning\tlearn\tVERB\tVBG\tVerbForm=Ger\t2\taux\t_\t_
4\tfast\tfast\tADV\tRB\t_\t2\tadvmod\t_\t_
";

    const THERE_BAGS: &str = "1\tThey\tthey\tPRON\tPRP\tCase=Nom\t2\tnsubj\t_\t_
2\tleft\tleave\tVERB\tVBD\tMood=Ind|Tense=Past\t0\troot\t_\t_
3\tthere\tthere\tADV\tRB\tPronType=Dem\t4\tadvmod\t_\t_
4\tbags\tbag\tNOUN\tNNS\tNumber=Plur\t2\tobj\t_\tSpaceAfter=No
";

    /// "You can learn quickly"
    const CAN_LEARN: &str = "1\tYou\tyou\tPRON\tPRP\t_\t3\tnsubj\t_\t_
2\tcan\tcan\tAUX\tMD\t_\t3\taux\t_\t_
3\tlearn\tlearn\tVERB\tVB\t_\t0\troot\t_\t_
4\tquickly\tquickly\tADV\tRB\t_\t3\tadvmod\t_\t_
";

    fn sentence(text: &str) -> Sentence {
        parse(text).next().unwrap().unwrap()
    }

    fn differing(a: &Sentence, b: &Sentence) -> Vec<usize> {
        a.tokens()
            .iter()
            .zip(b.tokens())
            .filter(|(x, y)| x != y)
            .map(|(x, _)| x.index())
            .collect()
    }

    #[test]
    fn governor_tag_not_accepted() {
        let s = sentence(CAN_LEARNING);
        let rs = RuleSet::structural(
            "modals",
            vec![AugmentationRule::new("aux", &["VERB"], &["VERB"], &["VB"], "VBG", Target::Head, 1.0)],
        );
        let tags = TagMap::default();
        let forms = Forms::default();
        let aug = Augmentor::new(&rs, &tags, &forms).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(aug.try_augment(&s, &mut rng), None);
    }

    #[test]
    fn literal_there_their() {
        let s = sentence(THERE_BAGS);
        let rs = RuleSet::literal(
            "homophones",
            vec![SubstitutionRule::new(
                "there",
                "their",
                "PRON",
                "PRP$",
                "Case=Gen|Number=Plur|Person=3|Poss=Yes|PronType=Prs",
                1.0,
            )],
        );
        let tags = TagMap::default();
        let forms = Forms::default();
        let aug = Augmentor::new(&rs, &tags, &forms).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let mutated = aug.try_augment(&s, &mut rng).unwrap();
        let their = &mutated.tokens()[2];
        assert_eq!(their.form(), "their");
        assert_eq!(their.upos(), "PRON");
        assert_eq!(their.xpos(), "PRP$");
        assert_eq!(their.feats(), "Case=Gen|Number=Plur|Person=3|Poss=Yes|PronType=Prs");
        assert_eq!(their.lemma(), "there");
        assert_eq!(their.head(), 4);

        assert_eq!(differing(&s, &mutated), vec![3]);
        for i in [0, 1, 3] {
            assert_eq!(
                mutated.tokens()[i].to_string(),
                s.tokens()[i].to_string()
            );
        }
    }

    #[test]
    fn one_token_and_fresh_coarse_tag() {
        let s = sentence(CAN_LEARN);
        let rs = RuleSet::default_structural();
        let tags = TagMap::default();
        let forms = Forms::default();
        let aug = Augmentor::new(&rs, &tags, &forms).unwrap();

        let mut hits = 0;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(mutated) = aug.try_augment(&s, &mut rng) {
                hits += 1;
                let changed = differing(&s, &mutated);
                assert_eq!(changed.len(), 1);
                let token = mutated.token(changed[0]).unwrap();
                assert_eq!(Some(token.upos()), tags.coarse(token.xpos()));
                assert_eq!(token.feats(), s.token(changed[0]).unwrap().feats());
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn adverb_becomes_adjective() {
        let s = sentence(CAN_LEARN);
        let rs = RuleSet::structural(
            "adv",
            vec![AugmentationRule::new("advmod", &["ADV"], &["VERB"], &["RB"], "JJ", Target::Child, 1.0)],
        );
        let tags = TagMap::default();
        let forms = Forms::default();
        let aug = Augmentor::new(&rs, &tags, &forms).unwrap();

        let mutated = aug
            .try_augment(&s, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let quick = mutated.token(4).unwrap();
        assert_eq!(quick.form(), "quick");
        assert_eq!(quick.xpos(), "JJ");
        assert_eq!(quick.upos(), "ADJ");
    }

    #[test]
    fn root_never_qualifies() {
        let s = sentence(CAN_LEARN);
        // only the root has deprel "root"
        let rs = RuleSet::structural(
            "root",
            vec![AugmentationRule::new(
                "root",
                &["VERB", "AUX", "PRON", "ADV"],
                &["VERB", "AUX", "PRON", "ADV"],
                &["VB"],
                "VBD",
                Target::Child,
                1.0,
            )],
        );
        let tags = TagMap::default();
        let forms = Forms::default();
        let aug = Augmentor::new(&rs, &tags, &forms).unwrap();
        for seed in 0..20 {
            assert_eq!(aug.try_augment(&s, &mut StdRng::seed_from_u64(seed)), None);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let s = sentence(CAN_LEARN);
        let rs = RuleSet::default_structural();
        let tags = TagMap::default();
        let forms = Forms::default();
        let aug = Augmentor::new(&rs, &tags, &forms).unwrap();

        for seed in 0..50 {
            let a = aug.try_augment(&s, &mut StdRng::seed_from_u64(seed));
            let b = aug.try_augment(&s, &mut StdRng::seed_from_u64(seed));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn zero_probability_never_fires() {
        let s = sentence(THERE_BAGS);
        let rs = RuleSet::literal(
            "never",
            vec![SubstitutionRule::new("there", "their", "PRON", "PRP$", "", 0.0)],
        );
        let tags = TagMap::default();
        let forms = Forms::default();
        let aug = Augmentor::new(&rs, &tags, &forms).unwrap();
        assert_eq!(aug.try_augment(&s, &mut StdRng::seed_from_u64(9)), None);
    }

    /// Resolves gerunds only, counting calls.
    struct GerundsOnly(AtomicUsize);

    impl FormResolver for GerundsOnly {
        fn resolve(&self, _form: &str, lemma: &str, tag: &str) -> Option<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            match tag {
                "VBG" => Some(format!("{}ing", lemma)),
                _ => None,
            }
        }
    }

    #[test]
    fn resolution_miss_drops_the_sentence() {
        let s = sentence(CAN_LEARN);
        let rs = RuleSet::structural(
            "modals",
            vec![
                AugmentationRule::new("aux", &["AUX"], &["VERB"], &["VB"], "VBG", Target::Head, 1.0),
                AugmentationRule::new("aux", &["AUX"], &["VERB"], &["VB"], "VBD", Target::Head, 1.0),
            ],
        );
        let tags = TagMap::default();
        let resolver = GerundsOnly(AtomicUsize::new(0));
        let aug = Augmentor::new(&rs, &tags, &resolver).unwrap();

        let (mut applied, mut dropped) = (0, 0);
        for seed in 0..100 {
            resolver.0.store(0, Ordering::SeqCst);
            match aug.try_augment(&s, &mut StdRng::seed_from_u64(seed)) {
                Some(mutated) => {
                    applied += 1;
                    assert_eq!(mutated.token(3).unwrap().form(), "learning");
                }
                None => {
                    dropped += 1;
                    // no fallback on the other rule
                    assert_eq!(resolver.0.load(Ordering::SeqCst), 1);
                }
            }
        }
        assert!(applied > 0 && dropped > 0);
    }

    #[test]
    fn empty_rule_set() {
        let rs = RuleSet::literal("empty", vec![]);
        let tags = TagMap::default();
        let forms = Forms::default();
        assert!(matches!(
            Augmentor::new(&rs, &tags, &forms),
            Err(Error::NoRuleSet(_))
        ));
    }
}
