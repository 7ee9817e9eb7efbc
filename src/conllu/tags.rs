//! Fine-grained tag → coarse part-of-speech table.
//!
//! Used to keep `upos` consistent with `xpos` after a rewrite.
//! This is not a true 1-1 mapping (`MD` can be `AUX` or `VERB`, `RB` can be `ADV` or `PART`),
//! but a rewrite only needs one sensible class per tag.
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;

use crate::error::Error;

lazy_static! {
    /// Penn Treebank tags to Universal POS tags.
    /// Punctuation, symbols and affixes are left out.
    static ref PENN_TO_UPOS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("JJ", "ADJ");
        m.insert("JJR", "ADJ");
        m.insert("JJS", "ADJ");
        m.insert("RB", "ADV");
        m.insert("RBR", "ADV");
        m.insert("RBS", "ADV");
        m.insert("WRB", "ADV");
        m.insert("IN", "ADP");
        m.insert("RP", "ADP");
        m.insert("VB", "VERB");
        m.insert("VBD", "VERB");
        m.insert("VBG", "VERB");
        m.insert("VBN", "VERB");
        m.insert("VBP", "VERB");
        m.insert("VBZ", "VERB");
        m.insert("MD", "VERB");
        m.insert("CC", "CCONJ");
        m.insert("CD", "NUM");
        m.insert("DT", "DET");
        m.insert("PDT", "DET");
        m.insert("PRP$", "DET");
        m.insert("WDT", "DET");
        m.insert("WP$", "DET");
        m.insert("PRP", "PRON");
        m.insert("WP", "PRON");
        m.insert("EX", "PRON");
        m.insert("UH", "INTJ");
        m.insert("NN", "NOUN");
        m.insert("NNS", "NOUN");
        m.insert("POS", "PART");
        m.insert("TO", "PART");
        m.insert("NNP", "PROPN");
        m.insert("NNPS", "PROPN");
        m
    };
}

/// Read-only fine → coarse tag table.
///
/// Built once per run and passed explicitly to whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMap {
    inner: HashMap<String, String>,
}

impl TagMap {
    /// Coarse tag of `fine`, if known.
    pub fn coarse(&self, fine: &str) -> Option<&str> {
        self.inner.get(fine).map(String::as_str)
    }

    pub fn contains(&self, fine: &str) -> bool {
        self.inner.contains_key(fine)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Load a table from a JSON object (`{"JJ": "ADJ", ...}`).
    pub fn from_reader<R: Read>(r: R) -> Result<Self, Error> {
        let inner: HashMap<String, String> = serde_json::from_reader(r)?;
        Ok(Self { inner })
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }
}

impl Default for TagMap {
    /// Penn Treebank → UPOS table.
    fn default() -> Self {
        let inner = PENN_TO_UPOS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { inner }
    }
}

impl FromIterator<(String, String)> for TagMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let t = TagMap::default();
        assert_eq!(t.coarse("VBG"), Some("VERB"));
        assert_eq!(t.coarse("RB"), Some("ADV"));
        assert_eq!(t.coarse("JJ"), Some("ADJ"));
        assert_eq!(t.coarse("PRP$"), Some("DET"));
        assert_eq!(t.coarse("."), None);
    }

    #[test]
    fn from_json() {
        let t = TagMap::from_reader(r#"{"VB": "AUX", "XX": "X"}"#.as_bytes()).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.coarse("VB"), Some("AUX"));
        assert!(!t.contains("JJ"));
    }
}
