/*! Synthetic grammatical error injection for CoNLL-U corpora.

Sentences are read from dependency-parsed files, rewritten by at most one rule each,
and written back as CoNLL-U.

- [conllu] parses and writes sentences,
- [rules] holds rule definitions and rule books,
- [forms] finds inflected and derived word forms,
- [augment] applies rules to sentences,
- [pipelines] run augmentation over a whole corpus.
!*/
pub mod augment;
pub mod conllu;
pub mod error;
pub mod forms;
pub mod io;
pub mod pipelines;
pub mod rules;
