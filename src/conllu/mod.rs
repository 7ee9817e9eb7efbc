/*! CoNLL-U data model and codec.

A file is a sequence of sentences separated by blank lines.
Each sentence may start with a `# sent_id = <id>` boundary comment and holds one
token per line, each token having ten tab-separated fields:

```text
# sent_id = 0
1	They	they	PRON	PRP	Case=Nom|Number=Plur	2	nsubj	_	_
2	left	leave	VERB	VBD	Mood=Ind|Tense=Past	0	root	_	_
```

Only the first eight fields are ever looked at,
`deps` and `misc` are kept verbatim.
!*/
mod sentence;
mod tags;
mod token;

pub use sentence::{parse, Sentence, Sentences};
pub use tags::TagMap;
pub use token::Token;

/// Comment introducing a sentence identifier.
pub const SENT_ID_MARKER: &str = "# sent_id =";
