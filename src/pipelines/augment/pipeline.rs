//! Corpus augmentation pipeline
//!
//! Every CoNLL-U file under the source directory goes through each selected rule set,
//! and the resulting sentences are written next to their sources.
//!
//! # Processing
//! 1. Rule sets are validated. Nothing is read before they all pass.
//! 1. Files are batched per directory (see [super::batch]).
//! 1. Batches run concurrently on a thread pool, and each file of a batch gets its own thread.
//! 1. Every sentence of a file gets at most one error. Sentences where no rule fired are dropped.
//! 1. Mutated sentences of a batch are appended to a single output file, with fresh sequential ids.
use std::collections::HashSet;
use std::hash::Hasher;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use twox_hash::XxHash64;

use super::batch::{collect_batches, Batch};
use crate::augment::Augmentor;
use crate::conllu::TagMap;
use crate::error::Error;
use crate::forms::{FormResolver, Forms};
use crate::io::{BatchWriter, ConlluFile};
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::summary::{Report, RunSummary};
use crate::rules::RuleSet;

pub const DEFAULT_BATCH_SIZE: usize = 20;
pub const DEFAULT_EXTENSION: &str = "conllu";

pub struct AugmentPipeline<R = Forms> {
    src: PathBuf,
    rule_sets: Vec<RuleSet>,
    tags: TagMap,
    resolver: R,
    batch_size: usize,
    workers: Option<usize>,
    seed: Option<u64>,
    extension: String,
}

impl<R: FormResolver> AugmentPipeline<R> {
    pub fn new(src: PathBuf, rule_sets: Vec<RuleSet>, tags: TagMap, resolver: R) -> Self {
        Self {
            src,
            rule_sets,
            tags,
            resolver,
            batch_size: DEFAULT_BATCH_SIZE,
            workers: None,
            seed: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Maximum number of files per batch.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Number of concurrent batches. [None] uses one per core.
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Makes runs reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Extension of input files, without the leading dot.
    pub fn with_extension(mut self, extension: String) -> Self {
        self.extension = extension;
        self
    }

    /// Random source for one file and one rule set.
    ///
    /// With a seed, the stream only depends on the seed, the rule set name
    /// and the file path relative to the source directory.
    fn rng_for(&self, rule_set: &str, path: &Path) -> StdRng {
        match self.seed {
            Some(seed) => {
                let relative = path.strip_prefix(&self.src).unwrap_or(path);
                let mut hasher = XxHash64::with_seed(seed);
                hasher.write(rule_set.as_bytes());
                hasher.write(relative.to_string_lossy().as_bytes());
                StdRng::seed_from_u64(hasher.finish())
            }
            None => StdRng::from_entropy(),
        }
    }

    /// Augment a single file, appending results to `writer`.
    ///
    /// Malformed sentences are skipped.
    fn augment_file(
        &self,
        augmentor: &Augmentor,
        path: &Path,
        writer: &BatchWriter,
        summary: &RunSummary,
    ) -> Result<(), Error> {
        debug!("[{}] augmenting {:?}", augmentor.name(), path);
        let file = ConlluFile::open(path)?;
        let mut rng = self.rng_for(augmentor.name(), path);

        let (mut read, mut produced) = (0, 0);
        for sentence in file.sentences() {
            match sentence {
                Ok(sentence) => {
                    read += 1;
                    summary.sentence_read();
                    if let Some(mutated) = augmentor.try_augment(&sentence, &mut rng) {
                        writer.append(&mutated)?;
                        produced += 1;
                        summary.produced();
                    }
                }
                Err(e) => {
                    warn!("{:?}: skipping malformed sentence: {}", path, e);
                    summary.malformed();
                }
            }
        }

        info!(
            "[{}] {:?}: {} sentences, {} augmented",
            augmentor.name(),
            path,
            read,
            produced
        );
        Ok(())
    }

    /// Run every file of `batch` on its own thread, sharing one output file.
    fn run_batch(&self, augmentor: &Augmentor, batch: &Batch, summary: &RunSummary) {
        let start = Instant::now();
        let writer = BatchWriter::new(batch.output_path(augmentor.name(), &self.extension));
        info!(
            "[{}] batch {}: {} files in {:?}",
            augmentor.name(),
            batch.number(),
            batch.files().len(),
            batch.dir()
        );

        thread::scope(|s| {
            let writer = &writer;
            let handles: Vec<_> = batch
                .files()
                .iter()
                .map(|path| {
                    let handle =
                        s.spawn(move || self.augment_file(augmentor, path, writer, summary));
                    (path, handle)
                })
                .collect();

            for (path, handle) in handles {
                match handle.join() {
                    Ok(Ok(())) => summary.file_done(),
                    Ok(Err(e)) => {
                        error!("{:?}: {}", path, e);
                        summary.file_failed();
                    }
                    Err(_) => {
                        error!("{}", Error::Worker(format!("{:?} panicked", path)));
                        summary.worker_failure();
                    }
                }
            }
        });

        match writer.count() {
            Ok(count) => info!(
                "[{}] batch {} done in {:?}: {} sentences in {:?}",
                augmentor.name(),
                batch.number(),
                start.elapsed(),
                count,
                writer.path()
            ),
            Err(e) => error!("[{}] batch {}: {}", augmentor.name(), batch.number(), e),
        }
    }
}

impl<R: FormResolver> Pipeline<Report> for AugmentPipeline<R> {
    fn version() -> &'static str {
        "1.0.0"
    }

    fn run(&self) -> Result<Report, Error> {
        if self.rule_sets.is_empty() {
            return Err(Error::NoRuleSet("no rule set selected".to_string()));
        }

        // validation happens here, before any file is touched
        let mut names = HashSet::new();
        for rule_set in &self.rule_sets {
            // same name means same output files
            if !names.insert(rule_set.name()) {
                return Err(Error::InvalidRule(format!(
                    "rule set {:?} is selected twice",
                    rule_set.name()
                )));
            }
        }
        let augmentors = self
            .rule_sets
            .iter()
            .map(|rule_set| Augmentor::new(rule_set, &self.tags, &self.resolver))
            .collect::<Result<Vec<_>, Error>>()?;

        let start = Instant::now();
        let batches = collect_batches(&self.src, &self.extension, self.batch_size)?;
        info!(
            "batching done in {:?}: {} batches",
            start.elapsed(),
            batches.len()
        );

        // 0 lets rayon pick one thread per core
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers.unwrap_or(0))
            .build()?;

        let summary = RunSummary::default();
        for augmentor in &augmentors {
            let start = Instant::now();
            pool.install(|| {
                batches.par_iter().for_each(|batch| {
                    let result = panic::catch_unwind(AssertUnwindSafe(|| {
                        self.run_batch(augmentor, batch, &summary)
                    }));
                    if result.is_err() {
                        error!(
                            "{}",
                            Error::Worker(format!(
                                "batch {} in {:?} panicked",
                                batch.number(),
                                batch.dir()
                            ))
                        );
                        summary.worker_failure();
                    }
                })
            });
            info!(
                "[{}] augmentation done in {:?}",
                augmentor.name(),
                start.elapsed()
            );
        }

        let report = summary.report();
        info!("{}", report);
        Ok(report)
    }
}
