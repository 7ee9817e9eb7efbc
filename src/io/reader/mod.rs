/*! Corpus reading utilities
!*/
mod conllu_file;

pub use conllu_file::ConlluFile;
