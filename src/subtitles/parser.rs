use super::types::{RawBlock, SubtitleEntry};
use super::utils::{clean_caption_text, normalize_line_endings, normalize_timestamp};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `00:00:20,000 --> 00:00:24,400`, accepting `.` as the millisecond separator
static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2}[,.]\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2}[,.]\d{3})")
        .expect("srt timestamp regex should compile")
});

const BLOCK_SEPARATOR: &str = "\n\n";

/// Parse a whole SRT document into timed entries.
///
/// Never fails: blocks without a timestamp line, with fewer than three lines,
/// or whose text cleans down to nothing are skipped. An empty result means
/// nothing in the document was usable. Entries keep the order of their
/// blocks in the input.
pub fn parse_srt(content: &str) -> Vec<SubtitleEntry> {
    let normalized = normalize_line_endings(content);

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for block in normalized.trim().split(BLOCK_SEPARATOR) {
        match parse_block(&RawBlock::new(block)) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    debug!(
        "Parsed {} subtitle entries ({} blocks skipped)",
        entries.len(),
        skipped
    );
    entries
}

fn parse_block(block: &RawBlock<'_>) -> Option<SubtitleEntry> {
    if block.is_too_short() {
        debug!("Skipping block with {} lines", block.lines.len());
        return None;
    }

    // The index line may be missing or garbled, so take the first line that
    // looks like a timing line rather than insisting on line two.
    let (position, captures) = find_timestamp_line(&block.lines)?;
    let text_lines = &block.lines[position + 1..];

    let text = clean_caption_text(text_lines);
    if text.is_empty() {
        debug!("Skipping block whose text is empty after cleanup");
        return None;
    }

    Some(SubtitleEntry {
        start: normalize_timestamp(&captures[1]),
        end: normalize_timestamp(&captures[2]),
        text,
    })
}

fn find_timestamp_line<'a>(lines: &[&'a str]) -> Option<(usize, Captures<'a>)> {
    let found = lines
        .iter()
        .copied()
        .enumerate()
        .find_map(|(i, line)| TIMESTAMP_PATTERN.captures(line).map(|caps| (i, caps)));

    if found.is_none() {
        debug!("Skipping block without a timestamp line");
    }
    found
}
