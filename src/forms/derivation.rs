//! Curated adjective ↔ adverb tables.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Error;

/// Built-in pairs, used when no table file is provided.
/// Some entries map a word onto itself on purpose (`fast`, `hard`):
/// the resolver discards them as no-op substitutions.
const ADJECTIVE_ADVERB: &[(&str, &str)] = &[
    ("angry", "angrily"),
    ("anxious", "anxiously"),
    ("bad", "badly"),
    ("beautiful", "beautifully"),
    ("careful", "carefully"),
    ("certain", "certainly"),
    ("clear", "clearly"),
    ("complete", "completely"),
    ("easy", "easily"),
    ("fast", "fast"),
    ("final", "finally"),
    ("gentle", "gently"),
    ("good", "well"),
    ("happy", "happily"),
    ("hard", "hard"),
    ("honest", "honestly"),
    ("loud", "loudly"),
    ("nervous", "nervously"),
    ("perfect", "perfectly"),
    ("proper", "properly"),
    ("quick", "quickly"),
    ("quiet", "quietly"),
    ("rapid", "rapidly"),
    ("real", "really"),
    ("recent", "recently"),
    ("sad", "sadly"),
    ("serious", "seriously"),
    ("simple", "simply"),
    ("slow", "slowly"),
    ("strong", "strongly"),
    ("sudden", "suddenly"),
    ("usual", "usually"),
];

/// Adjective → adverb and adverb → adjective lookups, keyed by lowercase word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationTable {
    adj_to_adv: HashMap<String, String>,
    adv_to_adj: HashMap<String, String>,
}

impl DerivationTable {
    pub fn new(adj_to_adv: HashMap<String, String>, adv_to_adj: HashMap<String, String>) -> Self {
        let lower = |m: HashMap<String, String>| -> HashMap<String, String> {
            m.into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect()
        };
        Self {
            adj_to_adv: lower(adj_to_adv),
            adv_to_adj: lower(adv_to_adj),
        }
    }

    /// Build both directions from an adjective → adverb table.
    pub fn with_inverse(adj_to_adv: HashMap<String, String>) -> Self {
        let adv_to_adj = adj_to_adv
            .iter()
            .map(|(adj, adv)| (adv.clone(), adj.clone()))
            .collect();
        Self::new(adj_to_adv, adv_to_adj)
    }

    fn read_map<R: Read>(r: R) -> Result<HashMap<String, String>, Error> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Load tables from two JSON objects.
    /// A missing adverb → adjective table is derived from the adjective → adverb one.
    pub fn from_paths(adj_to_adv: &Path, adv_to_adj: Option<&Path>) -> Result<Self, Error> {
        let forward = Self::read_map(BufReader::new(File::open(adj_to_adv)?))?;
        match adv_to_adj {
            Some(path) => {
                let backward = Self::read_map(BufReader::new(File::open(path)?))?;
                Ok(Self::new(forward, backward))
            }
            None => Ok(Self::with_inverse(forward)),
        }
    }

    pub fn adverb_of(&self, adjective: &str) -> Option<&str> {
        self.adj_to_adv.get(adjective).map(String::as_str)
    }

    pub fn adjective_of(&self, adverb: &str) -> Option<&str> {
        self.adv_to_adj.get(adverb).map(String::as_str)
    }
}

impl Default for DerivationTable {
    fn default() -> Self {
        Self::with_inverse(
            ADJECTIVE_ADVERB
                .iter()
                .map(|(adj, adv)| (adj.to_string(), adv.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_both_ways() {
        let t = DerivationTable::default();
        assert_eq!(t.adverb_of("quick"), Some("quickly"));
        assert_eq!(t.adjective_of("well"), Some("good"));
        assert_eq!(t.adverb_of("quickly"), None);
    }

    #[test]
    fn from_files() {
        let dir = tempfile::tempdir().unwrap();
        let forward = dir.path().join("adj_to_adv.json");
        let backward = dir.path().join("adv_to_adj.json");
        File::create(&forward)
            .unwrap()
            .write_all(br#"{"Calm": "Calmly"}"#)
            .unwrap();
        File::create(&backward)
            .unwrap()
            .write_all(br#"{"soon": "early"}"#)
            .unwrap();

        let t = DerivationTable::from_paths(&forward, Some(&backward)).unwrap();
        assert_eq!(t.adverb_of("calm"), Some("calmly"));
        assert_eq!(t.adjective_of("soon"), Some("early"));
        assert_eq!(t.adjective_of("calmly"), None);

        let t = DerivationTable::from_paths(&forward, None).unwrap();
        assert_eq!(t.adjective_of("calmly"), Some("calm"));
    }
}
