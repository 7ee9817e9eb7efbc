/*! Form resolution.

Given a surface form, its lemma and a target fine tag, a [FormResolver] returns the
surface form expressing that lemma with that tag.

[Forms] is the default resolver:
- adjective/adverb crossings (`RB*`, `JJ*` targets) go through a curated [DerivationTable],
- every other target goes through the rule-based [Inflector].

A candidate equal (case-insensitively) to the input is no candidate at all.
!*/
mod derivation;
mod inflect;
mod resolver;

pub use derivation::DerivationTable;
pub use inflect::Inflector;
pub use resolver::Forms;

/// Resolves inflected/derived forms.
///
/// Implementations are shared between worker threads and must not need `&mut self`.
pub trait FormResolver: Sync {
    /// Returns [None] if `lemma` has no `tag` form, or if the only one is `form` itself.
    fn resolve(&self, form: &str, lemma: &str, tag: &str) -> Option<String>;
}

impl<F: FormResolver + ?Sized> FormResolver for &F {
    fn resolve(&self, form: &str, lemma: &str, tag: &str) -> Option<String> {
        (**self).resolve(form, lemma, tag)
    }
}
