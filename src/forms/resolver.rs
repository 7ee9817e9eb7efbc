//! Default form resolver.
use log::debug;

use super::{DerivationTable, FormResolver, Inflector};

/// Combines the derivation tables and the inflector.
#[derive(Debug, Clone, Default)]
pub struct Forms {
    derivation: DerivationTable,
    inflector: Inflector,
}

impl Forms {
    pub fn new(derivation: DerivationTable) -> Self {
        Self {
            derivation,
            inflector: Inflector,
        }
    }

    /// Uppercase the first letter of `candidate` if `original` starts with one.
    fn match_case(original: &str, candidate: &str) -> String {
        match (original.chars().next(), candidate.chars().next()) {
            (Some(o), Some(c)) if o.is_uppercase() => {
                c.to_uppercase().chain(candidate.chars().skip(1)).collect()
            }
            _ => candidate.to_string(),
        }
    }
}

impl FormResolver for Forms {
    fn resolve(&self, form: &str, lemma: &str, tag: &str) -> Option<String> {
        let word = form.to_lowercase();
        let candidate = match tag {
            "RB" | "RBR" | "RBS" => self.derivation.adverb_of(&word).map(str::to_string),
            "JJ" | "JJR" | "JJS" => self.derivation.adjective_of(&word).map(str::to_string),
            _ => {
                let lemma = match lemma {
                    "" | "_" => word.as_str(),
                    l => l,
                };
                self.inflector.inflect(lemma, tag)
            }
        };

        match candidate {
            Some(c) if c.to_lowercase() != word => {
                debug!("found {} form for {}: {}", tag, form, c);
                Some(Self::match_case(form, &c))
            }
            _ => {
                debug!("could not find {} form for {}", tag, form);
                None
            }
        }
    }
}
