/*!
# IO utilities

Reading of input CoNLL-U files and writing of augmented batch files.
!*/
pub mod reader;
pub mod writer;

pub use reader::ConlluFile;
pub use writer::BatchWriter;
