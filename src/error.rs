//! Error enum
use std::fmt;

/// Reasons a single CoNLL-U record or sentence is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// A token line does not have exactly ten tab-separated fields.
    FieldCount(usize),
    /// An index or governor field is not an integer.
    BadInteger(String),
    /// A governor points past the end of the sentence.
    GovernorOutOfRange { governor: usize, len: usize },
    /// Token indices are not `1..=n` in order.
    NonSequentialIndex { expected: usize, found: usize },
    /// A block with a boundary comment but no tokens.
    Empty,
}

/// Malformed record inside a sentence.
///
/// `line` is 1-based, relative to the start of the parsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FormatErrorKind::FieldCount(n) => {
                write!(f, "line {}: expected 10 fields, got {}", self.line, n)
            }
            FormatErrorKind::BadInteger(s) => {
                write!(f, "line {}: {:?} is not an integer", self.line, s)
            }
            FormatErrorKind::GovernorOutOfRange { governor, len } => write!(
                f,
                "line {}: governor {} outside of a {} token sentence",
                self.line, governor, len
            ),
            FormatErrorKind::NonSequentialIndex { expected, found } => write!(
                f,
                "line {}: expected token index {}, found {}",
                self.line, expected, found
            ),
            FormatErrorKind::Empty => write!(f, "line {}: sentence has no tokens", self.line),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    ThreadPool(rayon::ThreadPoolBuildError),
    Format(FormatError),
    /// A rule set with no rules, or no rule set at all.
    NoRuleSet(String),
    UnknownRuleSet(String),
    InvalidRule(String),
    /// A worker thread panicked or a lock got poisoned.
    Worker(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {}", e),
            Error::ThreadPool(e) => write!(f, "thread pool error: {}", e),
            Error::Format(e) => write!(f, "format error: {}", e),
            Error::NoRuleSet(name) => write!(f, "no rules configured for rule set {:?}", name),
            Error::UnknownRuleSet(name) => write!(f, "unknown rule set {:?}", name),
            Error::InvalidRule(msg) => write!(f, "invalid rule: {}", msg),
            Error::Worker(msg) => write!(f, "worker failure: {}", msg),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Error {
        Error::ThreadPool(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Error {
        Error::Format(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
