/*! Thread-safe batch output file.

Every file of a batch appends its augmented sentences to the same output file.
Assigning a sentence id, writing the record and advancing the counter happen under a single lock,
so ids are unique and increasing within a file whatever the number of writers.

The file is created (or truncated) on the first append: a batch that produces nothing leaves no file.
A failed write is rolled back to the end of the last complete record. If that fails too,
the writer refuses any further append rather than write after a partial record.
!*/
use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::conllu::Sentence;
use crate::error::Error;

#[derive(Debug, Default)]
struct Sink {
    next_id: usize,
    /// bytes of complete records
    len: u64,
    file: Option<File>,
    broken: bool,
}

#[derive(Debug)]
pub struct BatchWriter {
    path: PathBuf,
    sink: Mutex<Sink>,
}

impl BatchWriter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            sink: Mutex::new(Sink::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `sentence` with the next id, returning that id.
    ///
    /// On error the id is not consumed.
    pub fn append(&self, sentence: &Sentence) -> Result<usize, Error> {
        let mut guard = self
            .sink
            .lock()
            .map_err(|_| Error::Worker(format!("poisoned lock on {:?}", self.path)))?;
        let sink = &mut *guard;

        if sink.broken {
            return Err(Error::Worker(format!(
                "{:?} holds a partial record, no further append",
                self.path
            )));
        }
        if sink.file.is_none() {
            sink.file = Some(File::create(&self.path)?);
        }

        let id = sink.next_id;
        let record = sentence.to_conllu(id);
        if let Some(file) = sink.file.as_mut() {
            if let Err(e) = file.write_all(record.as_bytes()) {
                if Self::rollback(file, sink.len).is_err() {
                    sink.broken = true;
                }
                return Err(e.into());
            }
        }
        sink.len += record.len() as u64;
        sink.next_id += 1;

        Ok(id)
    }

    /// Cut `file` back to `len` bytes and write from there.
    fn rollback(file: &mut File, len: u64) -> io::Result<()> {
        file.set_len(len)?;
        file.seek(SeekFrom::Start(len))?;
        Ok(())
    }

    /// Number of sentences written so far.
    pub fn count(&self) -> Result<usize, Error> {
        self.sink
            .lock()
            .map(|sink| sink.next_id)
            .map_err(|_| Error::Worker(format!("poisoned lock on {:?}", self.path)))
    }
}
