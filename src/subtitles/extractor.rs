use super::parser::parse_srt;
use super::types::SubtitleEntry;
use super::utils::decode_subtitle_bytes;
use crate::errors::QuoteResult;
use log::info;
use std::path::Path;

/// Decode and parse subtitle bytes as received from an upload or download
pub fn extract_subtitle_entries(data: &[u8]) -> Vec<SubtitleEntry> {
    parse_srt(&decode_subtitle_bytes(data))
}

/// Read an SRT file from disk and parse it
pub fn extract_local_subtitle_entries<P: AsRef<Path>>(path: P) -> QuoteResult<Vec<SubtitleEntry>> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    info!("Read {} ({} bytes)", path.display(), data.len());

    let entries = extract_subtitle_entries(&data);
    info!("Extracted {} subtitle entries", entries.len());
    Ok(entries)
}
