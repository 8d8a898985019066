use serde::{Deserialize, Serialize};

/// One timed caption decoded from an SRT document
///
/// `start` and `end` are passed through as `HH:MM:SS,mmm` strings; they are
/// never parsed into numeric time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub start: String,
    pub end: String,
    pub text: String,
}

/// A blank-line delimited chunk of the input, alive only while decoding
#[derive(Debug)]
pub(crate) struct RawBlock<'a> {
    pub lines: Vec<&'a str>,
}

impl<'a> RawBlock<'a> {
    /// Index line, timestamp line and at least one text line
    pub const MIN_LINES: usize = 3;

    pub fn new(block: &'a str) -> Self {
        Self {
            lines: block.trim().split('\n').collect(),
        }
    }

    pub fn is_too_short(&self) -> bool {
        self.lines.len() < Self::MIN_LINES
    }
}
