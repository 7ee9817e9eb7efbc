//! Run counters.
//!
//! Workers bump a shared [RunSummary] while the run goes on,
//! and a [Report] is taken at the end.
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct RunSummary {
    files: AtomicUsize,
    failed_files: AtomicUsize,
    sentences: AtomicUsize,
    malformed: AtomicUsize,
    produced: AtomicUsize,
    worker_failures: AtomicUsize,
}

impl RunSummary {
    pub fn file_done(&self) {
        self.files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn file_failed(&self) {
        self.failed_files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn sentence_read(&self) {
        self.sentences.fetch_add(1, Ordering::Relaxed);
    }

    pub fn malformed(&self) {
        self.malformed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn produced(&self) {
        self.produced.fetch_add(1, Ordering::Relaxed);
    }

    pub fn worker_failure(&self) {
        self.worker_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) -> Report {
        Report {
            files: self.files.load(Ordering::Relaxed),
            failed_files: self.failed_files.load(Ordering::Relaxed),
            sentences: self.sentences.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
            produced: self.produced.load(Ordering::Relaxed),
            worker_failures: self.worker_failures.load(Ordering::Relaxed),
        }
    }
}

/// Counters at the end of a run.
///
/// File and sentence counts are summed over rule sets:
/// a file augmented with two rule sets counts twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub files: usize,
    pub failed_files: usize,
    pub sentences: usize,
    pub malformed: usize,
    pub produced: usize,
    pub worker_failures: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "files: {} processed, {} failed | sentences: {} read, {} malformed, {} produced | worker failures: {}",
            self.files,
            self.failed_files,
            self.sentences,
            self.malformed,
            self.produced,
            self.worker_failures
        )
    }
}
