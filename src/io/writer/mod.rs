/*!
# Output writing

Augmented sentences of a batch go to a single [BatchWriter], shared by reference between the batch's worker threads.
!*/
mod batch_writer;

pub use batch_writer::BatchWriter;
