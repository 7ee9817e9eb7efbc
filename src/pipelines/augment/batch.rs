//! Directory walk and batching.
//!
//! Input files are grouped by parent directory, then cut in batches of at most `batch_size` files.
//! A batch never spans two directories, so that its output file lands beside its sources.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;

use crate::error::Error;

/// Every output file name starts with this prefix.
/// Files carrying it are never picked up as input.
pub const OUTPUT_PREFIX: &str = "zbatch_";

/// A numbered group of files from a single directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    number: usize,
    dir: PathBuf,
    files: Vec<PathBuf>,
}

impl Batch {
    pub fn new(number: usize, dir: PathBuf, files: Vec<PathBuf>) -> Self {
        Self { number, dir, files }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// `<dir>/zbatch_<rule set>_<number>_aug.<extension>`
    pub fn output_path(&self, rule_set: &str, extension: &str) -> PathBuf {
        self.dir.join(format!(
            "{}{}_{}_aug.{}",
            OUTPUT_PREFIX, rule_set, self.number, extension
        ))
    }
}

/// `true` if `path` has the right extension and is not a previous output.
pub fn is_eligible(path: &Path, extension: &str) -> bool {
    let name_ok = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| !name.starts_with(OUTPUT_PREFIX));
    let extension_ok = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext == extension);

    name_ok && extension_ok
}

/// List eligible files under `src`, recursively, grouped by parent directory.
pub fn eligible_files(
    src: &Path,
    extension: &str,
) -> Result<BTreeMap<PathBuf, Vec<PathBuf>>, Error> {
    if !src.is_dir() {
        return Err(Error::Custom(format!(
            "source has to be a directory: {:?}",
            src
        )));
    }

    let root = src
        .to_str()
        .ok_or_else(|| Error::Custom(format!("non UTF-8 source path: {:?}", src)))?;
    let pattern = format!(
        "{}/**/*.{}",
        Pattern::escape(root),
        Pattern::escape(extension)
    );
    debug!("walking {}", pattern);

    let mut by_dir: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if !path.is_file() || !is_eligible(&path, extension) {
            continue;
        }
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        by_dir.entry(dir).or_default().push(path);
    }

    for files in by_dir.values_mut() {
        files.sort();
    }

    Ok(by_dir)
}

/// Walk `src` and build batches of at most `batch_size` files.
///
/// Batches are numbered from 0, in directory order.
pub fn collect_batches(src: &Path, extension: &str, batch_size: usize) -> Result<Vec<Batch>, Error> {
    if batch_size == 0 {
        return Err(Error::Custom("batch size has to be positive".to_string()));
    }

    let mut batches = Vec::new();
    for (dir, files) in eligible_files(src, extension)? {
        for chunk in files.chunks(batch_size) {
            batches.push(Batch::new(batches.len(), dir.clone(), chunk.to_vec()));
        }
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, File};

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    #[test]
    fn eligibility() {
        assert!(is_eligible(Path::new("a/b.conllu"), "conllu"));
        assert!(!is_eligible(Path::new("a/b.txt"), "conllu"));
        assert!(!is_eligible(Path::new("a/zbatch_exact_0_aug.conllu"), "conllu"));
        assert!(!is_eligible(Path::new("a/conllu"), "conllu"));
    }

    #[test]
    fn output_path() {
        let b = Batch::new(3, PathBuf::from("corpus/gum"), vec![]);
        assert_eq!(
            b.output_path("exact", "conllu"),
            PathBuf::from("corpus/gum/zbatch_exact_3_aug.conllu")
        );
        assert!(!is_eligible(&b.output_path("exact", "conllu"), "conllu"));
    }

    #[test]
    fn batches_stay_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for name in ["a.conllu", "b.conllu", "c.conllu", "notes.txt", "zbatch_s_0_aug.conllu"] {
            touch(&root.join(name));
        }
        for name in ["d.conllu", "e.conllu"] {
            touch(&root.join("sub").join(name));
        }
        touch(&root.join("sub/deeper/f.conllu"));

        let batches = collect_batches(root, "conllu", 2).unwrap();
        let shape: Vec<(usize, usize)> = batches
            .iter()
            .map(|b| (b.number(), b.files().len()))
            .collect();
        assert_eq!(shape, vec![(0, 2), (1, 1), (2, 2), (3, 1)]);

        for batch in &batches {
            assert!(batch.files().iter().all(|f| f.parent() == Some(batch.dir())));
            assert!(batch
                .files()
                .iter()
                .all(|f| !f.to_string_lossy().contains(OUTPUT_PREFIX)));
        }
        assert_eq!(batches[0].dir(), root);
        assert_eq!(batches[3].dir(), root.join("sub/deeper"));
    }

    #[test]
    fn zero_batch_size() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_batches(dir.path(), "conllu", 0).is_err());
    }

    #[test]
    fn no_folder() {
        assert!(collect_batches(Path::new("svdkjljlkmjlmdsfljkf"), "conllu", 2).is_err());
    }
}
