//! Token (one CoNLL-U line).
use std::fmt;

use crate::error::{FormatError, FormatErrorKind};

const NB_FIELDS: usize = 10;

/// One annotated word.
///
/// `index` is 1-based. A `head` of 0 means that the token has no governor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    index: usize,
    form: String,
    lemma: String,
    upos: String,
    xpos: String,
    feats: String,
    head: usize,
    deprel: String,
    deps: String,
    misc: String,
}

impl Token {
    /// Parse a single tab-separated token line.
    ///
    /// `line_number` is only used for error reporting.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, FormatError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != NB_FIELDS {
            return Err(FormatError::new(
                line_number,
                FormatErrorKind::FieldCount(fields.len()),
            ));
        }

        let integer = |s: &str| {
            s.trim().parse::<usize>().map_err(|_| {
                FormatError::new(line_number, FormatErrorKind::BadInteger(s.to_string()))
            })
        };

        Ok(Self {
            index: integer(fields[0])?,
            form: fields[1].to_string(),
            lemma: fields[2].to_string(),
            upos: fields[3].to_string(),
            xpos: fields[4].to_string(),
            feats: fields[5].to_string(),
            head: integer(fields[6])?,
            deprel: fields[7].to_string(),
            deps: fields[8].to_string(),
            misc: fields[9].to_string(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Coarse part-of-speech class.
    pub fn upos(&self) -> &str {
        &self.upos
    }

    /// Fine-grained tag.
    pub fn xpos(&self) -> &str {
        &self.xpos
    }

    pub fn feats(&self) -> &str {
        &self.feats
    }

    /// Raw governor index, 0 for root.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Governor index, [None] for root tokens.
    pub fn governor(&self) -> Option<usize> {
        match self.head {
            0 => None,
            h => Some(h),
        }
    }

    pub fn deprel(&self) -> &str {
        &self.deprel
    }

    pub fn deps(&self) -> &str {
        &self.deps
    }

    pub fn misc(&self) -> &str {
        &self.misc
    }

    pub(crate) fn set_form(&mut self, form: String) {
        self.form = form;
    }

    pub(crate) fn set_upos(&mut self, upos: String) {
        self.upos = upos;
    }

    pub(crate) fn set_xpos(&mut self, xpos: String) {
        self.xpos = xpos;
    }

    pub(crate) fn set_feats(&mut self, feats: String) {
        self.feats = feats;
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.index,
            self.form,
            self.lemma,
            self.upos,
            self.xpos,
            self.feats,
            self.head,
            self.deprel,
            self.deps,
            self.misc
        )
    }
}
