use std::path::{Path, PathBuf};

use crate::error::BucketError;

/// Read a transcript into lines. Line terminators are stripped, so `\n`
/// and `\r\n` transcripts read identically.
pub fn read_transcript_lines(path: &Path) -> Result<Vec<String>, BucketError> {
    let content = std::fs::read_to_string(path).map_err(|source| BucketError::TranscriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Resolve the input target to the list of transcript files to process.
///
/// A file target is the single transcript; a directory target yields every
/// plain file directly inside it, sorted by name so repeated runs process
/// in the same order. Returns `SourceNotFound` if the target does not exist.
pub fn discover_transcripts(target: &Path) -> Result<Vec<PathBuf>, BucketError> {
    if !target.exists() {
        return Err(BucketError::SourceNotFound(target.to_path_buf()));
    }

    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }

    let entries = std::fs::read_dir(target).map_err(|source| BucketError::TranscriptRead {
        path: target.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    Ok(files)
}
