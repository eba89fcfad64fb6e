pub mod input;
pub mod output;

pub use input::{discover_transcripts, read_transcript_lines};
pub use output::FileSinkProvider;
