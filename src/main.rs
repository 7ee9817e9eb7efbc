//! # Errata
//!
//! Errata injects synthetic grammatical errors into dependency-parsed (CoNLL-U) corpora,
//! producing training data for grammatical error correction.
//!
//! ## Getting started
//!
//! ```sh
//! errata 0.1.0
//! grammatical error injection for CoNLL-U corpora.
//!
//! USAGE:
//!     errata <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     augment    Augment a corpus with synthetic errors
//!     check      Parse a corpus and report malformed sentences
//!     help       Prints this message or the help of the given subcommand(s)
//!     rules      Validate and list rule sets
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=errata=info`).
use std::path::Path;

use structopt::StructOpt;

use errata::conllu::TagMap;
use errata::error::Error;
use errata::forms::{DerivationTable, Forms};
use errata::pipelines::{AugmentPipeline, Check, Pipeline};
use errata::rules::{RuleBook, RuleSet};

#[macro_use]
extern crate log;

mod cli;

fn load_book(path: Option<&Path>) -> Result<RuleBook, Error> {
    match path {
        Some(path) => {
            info!("loading rule book {:?}", path);
            RuleBook::from_path(path)
        }
        None => {
            info!("using built-in rule sets");
            Ok(RuleBook::default())
        }
    }
}

fn load_tags(path: Option<&Path>) -> Result<TagMap, Error> {
    match path {
        Some(path) => TagMap::from_path(path),
        None => Ok(TagMap::default()),
    }
}

fn load_forms(tables: &cli::Tables) -> Result<Forms, Error> {
    let derivation = match (&tables.adj_to_adv, &tables.adv_to_adj) {
        (Some(forward), backward) => DerivationTable::from_paths(forward, backward.as_deref())?,
        (None, Some(_)) => {
            warn!("--adv-to-adj is ignored without --adj-to-adv");
            DerivationTable::default()
        }
        (None, None) => DerivationTable::default(),
    };
    Ok(Forms::new(derivation))
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Errata::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Errata::Augment(a) => {
            let book = load_book(a.rules.as_deref())?;
            let tags = load_tags(a.tables.tags.as_deref())?;
            book.validate(&tags)?;
            let rule_sets: Vec<RuleSet> = book
                .select(&a.rule_sets)?
                .into_iter()
                .cloned()
                .collect();
            let forms = load_forms(&a.tables)?;

            info!(
                "augmentation pipeline v{} on {:?}",
                AugmentPipeline::<Forms>::version(),
                a.src
            );
            let p = AugmentPipeline::new(a.src, rule_sets, tags, forms)
                .with_batch_size(a.batch_size)
                .with_workers(a.workers)
                .with_seed(a.seed)
                .with_extension(a.extension);
            let report = p.run()?;
            println!("{}", report);
        }

        cli::Errata::Rules(r) => {
            let book = load_book(r.rules.as_deref())?;
            let tags = load_tags(r.tags.as_deref())?;
            book.validate(&tags)?;
            for rule_set in book.rule_sets() {
                println!(
                    "{}\t{}\t{} rules",
                    rule_set.name(),
                    rule_set.rules().kind(),
                    rule_set.len()
                );
            }
        }

        cli::Errata::Check(c) => {
            let report = Check::new(c.src).with_extension(c.extension).run()?;
            println!("{}", report);
        }
    };
    Ok(())
}
