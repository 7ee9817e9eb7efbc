//! Corpus validation pipeline.
//!
//! Parses every eligible file under a directory and reports malformed sentences,
//! without writing anything.
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::ConlluFile;
use crate::pipelines::augment::batch::eligible_files;
use crate::pipelines::augment::DEFAULT_EXTENSION;
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::summary::{Report, RunSummary};

pub struct Check {
    src: PathBuf,
    extension: String,
}

impl Check {
    pub fn new(src: PathBuf) -> Self {
        Self {
            src,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: String) -> Self {
        self.extension = extension;
        self
    }

    fn check_file(path: &Path, summary: &RunSummary) -> Result<(), Error> {
        let file = ConlluFile::open(path)?;
        for sentence in file.sentences() {
            match sentence {
                Ok(_) => summary.sentence_read(),
                Err(e) => {
                    warn!("{:?}: {}", path, e);
                    summary.malformed();
                }
            }
        }
        Ok(())
    }
}

impl Pipeline<Report> for Check {
    fn version() -> &'static str {
        "1.0.0"
    }

    fn run(&self) -> Result<Report, Error> {
        let start = Instant::now();
        let files: Vec<PathBuf> = eligible_files(&self.src, &self.extension)?
            .into_values()
            .flatten()
            .collect();
        info!("checking {} files", files.len());

        let summary = RunSummary::default();
        files
            .par_iter()
            .for_each(|path| match Self::check_file(path, &summary) {
                Ok(()) => summary.file_done(),
                Err(e) => {
                    error!("{:?}: {}", path, e);
                    summary.file_failed();
                }
            });

        let report = summary.report();
        info!("check done in {:?}: {}", start.elapsed(), report);
        Ok(report)
    }
}
