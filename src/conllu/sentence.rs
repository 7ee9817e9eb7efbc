//! Sentences and the line-oriented codec.
use std::io::Write;
use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use itertools::Itertools;

use super::{Token, SENT_ID_MARKER};
use crate::error::{FormatError, FormatErrorKind};

/// An ordered sequence of tokens.
///
/// Token order defines governor references: token `i` (1-based) lives at `tokens[i - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    id: Option<String>,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence from already parsed tokens, checking indices and governors.
    ///
    /// `line` is the line of the first token, used for error reporting.
    pub fn new(id: Option<String>, tokens: Vec<Token>, line: usize) -> Result<Self, FormatError> {
        if tokens.is_empty() {
            return Err(FormatError::new(line, FormatErrorKind::Empty));
        }

        let len = tokens.len();
        for (offset, token) in tokens.iter().enumerate() {
            if token.index() != offset + 1 {
                return Err(FormatError::new(
                    line + offset,
                    FormatErrorKind::NonSequentialIndex {
                        expected: offset + 1,
                        found: token.index(),
                    },
                ));
            }
            if token.head() > len {
                return Err(FormatError::new(
                    line + offset,
                    FormatErrorKind::GovernorOutOfRange {
                        governor: token.head(),
                        len,
                    },
                ));
            }
        }

        Ok(Self { id, tokens })
    }

    /// Identifier found in the source file, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by its 1-based index. Index 0 is never dereferenced.
    pub fn token(&self, index: usize) -> Option<&Token> {
        match index {
            0 => None,
            i => self.tokens.get(i - 1),
        }
    }

    /// Governor of `token`, [None] if `token` is a root.
    pub fn governor_of(&self, token: &Token) -> Option<&Token> {
        token.governor().and_then(|g| self.token(g))
    }

    pub(crate) fn token_mut(&mut self, index: usize) -> Option<&mut Token> {
        match index {
            0 => None,
            i => self.tokens.get_mut(i - 1),
        }
    }

    /// Serialize the sentence with a new identifier.
    ///
    /// The output ends with the blank line separating sentences.
    pub fn to_conllu(&self, sent_id: usize) -> String {
        format!(
            "{} {}\n{}\n\n",
            SENT_ID_MARKER,
            sent_id,
            self.tokens.iter().join("\n")
        )
    }

    /// Same as [Sentence::to_conllu], writing into `w`.
    pub fn write_conllu<W: Write>(&self, w: &mut W, sent_id: usize) -> std::io::Result<()> {
        w.write_all(self.to_conllu(sent_id).as_bytes())
    }
}

/// Lazy sentence iterator over CoNLL-U text.
///
/// Yields one item per sentence block. A malformed block yields an error and
/// iteration continues with the next block.
pub struct Sentences<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
        }
    }

    /// extracts the identifier of a `# sent_id = x` line.
    fn sent_id(line: &str) -> Option<String> {
        line.trim_start()
            .strip_prefix(SENT_ID_MARKER)
            .map(|id| id.trim().to_string())
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Result<Sentence, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut id = None;
        let mut first_line = None;
        let mut records: Vec<(usize, &str)> = Vec::new();

        while let Some((idx, line)) = self.lines.peek().copied() {
            let line_number = idx + 1;

            if line.trim().is_empty() {
                self.lines.next();
                if first_line.is_some() {
                    break;
                }
                continue;
            }

            if let Some(sent_id) = Self::sent_id(line) {
                // a boundary marker closes a sentence even without a blank line
                if !records.is_empty() {
                    break;
                }
                self.lines.next();
                id = Some(sent_id);
                first_line.get_or_insert(line_number);
                continue;
            }

            self.lines.next();
            if line.starts_with('#') {
                first_line.get_or_insert(line_number);
                continue;
            }

            first_line.get_or_insert(line_number);
            records.push((line_number, line));
        }

        let first_line = first_line?;
        let tokens: Result<Vec<Token>, FormatError> = records
            .iter()
            .map(|(line_number, line)| Token::parse(line, *line_number))
            .collect();

        let start = records.first().map(|(n, _)| *n).unwrap_or(first_line);
        Some(tokens.and_then(|tokens| Sentence::new(id, tokens, start)))
    }
}

/// Parse CoNLL-U text. See [Sentences].
pub fn parse(text: &str) -> Sentences<'_> {
    Sentences::new(text)
}
