use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Write;

use crate::classify::{classify_line, Classification};
use crate::error::BucketError;

/// Where bucket sinks come from. The writer asks for one sink per distinct
/// speaker, on the first line attributed to them; file naming and directory
/// creation live behind this seam.
pub trait SinkProvider {
    type Sink: Write;

    fn open(&mut self, speaker: &str) -> Result<Self::Sink, BucketError>;
}

/// A continuation line that appeared before any speaker was established
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub line_number: usize,
    pub text: String,
}

/// Outcome of processing one transcript
#[derive(Debug)]
pub struct TranscriptReport {
    /// Number of distinct speaker buckets created
    pub buckets_created: usize,
    /// Continuation lines that had no speaker to belong to
    pub warnings: Vec<Warning>,
}

/// Route each line of a transcript to its speaker's bucket.
///
/// Lines are classified one at a time; the current speaker persists across
/// continuation lines and changes only when a line names a new speaker.
/// Each written line is terminated with `\r\n`, matching the transcript
/// convention. All sinks are owned by this call and closed when it returns,
/// on the error path included.
///
/// A write failure aborts the transcript; an unattributed continuation line
/// is dropped and reported in the returned warnings.
pub fn process_transcript<P, I, S>(lines: I, sinks: &mut P) -> Result<TranscriptReport, BucketError>
where
    P: SinkProvider,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut open: HashMap<String, P::Sink> = HashMap::new();
    let mut current_speaker: Option<String> = None;
    let mut buckets_created = 0;
    let mut warnings = Vec::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let line_number = index + 1;

        match classify_line(raw.as_ref()) {
            Classification::Discard => {}
            Classification::NewSpeaker { name, text } => {
                let sink = match open.entry(name.clone()) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        buckets_created += 1;
                        entry.insert(sinks.open(&name)?)
                    }
                };
                if !text.is_empty() {
                    write_bucket_line(sink, &name, line_number, &text)?;
                }
                current_speaker = Some(name);
            }
            Classification::Continuation(text) => match &current_speaker {
                Some(name) => {
                    // A sink always exists for the current speaker
                    if let Some(sink) = open.get_mut(name) {
                        write_bucket_line(sink, name, line_number, &text)?;
                    }
                }
                None => warnings.push(Warning { line_number, text }),
            },
        }
    }

    Ok(TranscriptReport {
        buckets_created,
        warnings,
    })
}

fn write_bucket_line<W: Write>(
    sink: &mut W,
    speaker: &str,
    line_number: usize,
    text: &str,
) -> Result<(), BucketError> {
    write!(sink, "{}\r\n", text).map_err(|source| BucketError::SinkWrite {
        speaker: speaker.to_string(),
        line_number,
        source,
    })
}
