/// Outcome of classifying one raw transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A new speaker takes over; `text` is their spoken content (may be empty)
    NewSpeaker { name: String, text: String },
    /// The previous speaker keeps talking
    Continuation(String),
    /// Blank line or a full-line stage direction; carries no speech
    Discard,
}

/// Classify one line of transcript text.
///
/// Transcripts follow the convention `SPEAKER: spoken words`, with plain
/// lines continuing the previous speaker and full-line `[actions]` or
/// `(actions)` marking stage directions. Classification is total: every
/// possible line maps to exactly one variant and nothing here can fail.
///
/// Known limitation: spoken text containing a literal `": "` (e.g.
/// "Remember this: always be kind") stays attributed to the previous
/// speaker, and an all-caps word before one (e.g. "WARNING: stand back")
/// reads as a new speaker. Best-effort heuristic over free-form text,
/// not NLP.
pub fn classify_line(raw: &str) -> Classification {
    let line = raw.trim();

    if line.is_empty() || is_action(line) {
        return Classification::Discard;
    }

    let Some(colon_index) = line.find(": ") else {
        return Classification::Continuation(line.to_string());
    };

    let speaker_part = &line[..colon_index];
    let spoken_part = &line[colon_index + 2..];

    if is_speaker_name(speaker_part) {
        return Classification::NewSpeaker {
            name: speaker_part.to_string(),
            text: spoken_part.to_string(),
        };
    }

    // The candidate may carry an annotation, e.g. "SMITH [shouting]: Get back!"
    if let Some(space_index) = line.find(' ') {
        if space_index < colon_index && is_annotated_speaker(speaker_part) {
            let short_name = &line[..space_index];
            if is_speaker_name(short_name) {
                return Classification::NewSpeaker {
                    name: short_name.to_string(),
                    text: spoken_part.to_string(),
                };
            }
        }
    }

    // The colon was incidental punctuation, not a speaker marker
    Classification::Continuation(line.to_string())
}

/// Check whether a token is a speaker name in the standard transcription
/// format: all upper-case, purely alphabetic except for at most one
/// apostrophe (ex: SMITH, O'BRIEN).
pub fn is_speaker_name(token: &str) -> bool {
    if token.chars().filter(|&c| c == '\'').count() > 1 {
        return false;
    }
    let mut letters = token.chars().filter(|&c| c != '\'').peekable();
    letters.peek().is_some() && letters.all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// Check whether a candidate speaker token carries a bracketed annotation
/// after the name (ex: "SMITH [shouting]").
fn is_annotated_speaker(token: &str) -> bool {
    let Some(space_index) = token.find(' ') else {
        return false;
    };
    let after_space = &token[space_index + 1..];
    matches!(
        (after_space.chars().next(), token.chars().last()),
        (Some('('), Some(')')) | (Some('['), Some(']'))
    )
}

/// A full-line stage direction: the whole trimmed line sits inside one
/// matching pair of brackets or parentheses.
fn is_action(line: &str) -> bool {
    let first = line.chars().next();
    let last = line.chars().last();
    matches!((first, last), (Some('('), Some(')')) | (Some('['), Some(']')))
}
