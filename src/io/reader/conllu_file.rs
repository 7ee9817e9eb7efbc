/*! Reader for a single CoNLL-U file.
!*/
use std::path::{Path, PathBuf};

use crate::conllu::{parse, Sentences};
use crate::error::Error;

/// In-memory content of an input file.
#[derive(Debug)]
pub struct ConlluFile {
    path: PathBuf,
    content: String,
}

impl ConlluFile {
    /// Read the whole file.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate over sentences. Malformed sentences are yielded as errors.
    pub fn sentences(&self) -> Sentences<'_> {
        parse(&self.content)
    }
}
