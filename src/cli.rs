//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "errata", about = "grammatical error injection for CoNLL-U corpora.")]
/// Holds every command that is callable by the `errata` command.
pub enum Errata {
    #[structopt(about = "Augment a corpus with synthetic errors")]
    Augment(Augment),
    #[structopt(about = "Validate and list rule sets")]
    Rules(Rules),
    #[structopt(about = "Parse a corpus and report malformed sentences")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
pub struct Augment {
    #[structopt(parse(from_os_str), help = "corpus root directory")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "rules",
        help = "rule book (JSON). Built-in rule sets are used if omitted."
    )]
    pub rules: Option<PathBuf>,
    #[structopt(
        long = "rule-set",
        help = "rule set to apply, can be repeated. Every rule set of the book is applied if omitted."
    )]
    pub rule_sets: Vec<String>,
    #[structopt(
        short = "b",
        long = "batch-size",
        default_value = "20",
        help = "maximum number of files per batch"
    )]
    pub batch_size: usize,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of concurrent batches. Default is one per core."
    )]
    pub workers: Option<usize>,
    #[structopt(long = "seed", help = "seed for reproducible runs")]
    pub seed: Option<u64>,
    #[structopt(
        long = "extension",
        default_value = "conllu",
        help = "extension of input files"
    )]
    pub extension: String,
    #[structopt(flatten)]
    pub tables: Tables,
}

#[derive(Debug, StructOpt)]
pub struct Rules {
    #[structopt(
        parse(from_os_str),
        long = "rules",
        help = "rule book (JSON). Built-in rule sets are listed if omitted."
    )]
    pub rules: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "tags",
        help = "fine to coarse tag table (JSON object)"
    )]
    pub tags: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Check {
    #[structopt(parse(from_os_str), help = "corpus root directory")]
    pub src: PathBuf,
    #[structopt(
        long = "extension",
        default_value = "conllu",
        help = "extension of input files"
    )]
    pub extension: String,
}

/// Lookup tables overriding the built-in ones.
#[derive(Debug, StructOpt)]
pub struct Tables {
    #[structopt(
        parse(from_os_str),
        long = "tags",
        help = "fine to coarse tag table (JSON object)"
    )]
    pub tags: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "adj-to-adv",
        help = "adjective to adverb table (JSON object)"
    )]
    pub adj_to_adv: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "adv-to-adj",
        help = "adverb to adjective table. Inverted from --adj-to-adv if omitted."
    )]
    pub adv_to_adj: Option<PathBuf>,
}
