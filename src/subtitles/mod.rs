mod extractor;
mod parser;
mod types;
mod utils;

pub use extractor::{extract_local_subtitle_entries, extract_subtitle_entries};
pub use parser::parse_srt;
pub use types::SubtitleEntry;
pub use utils::{
    clean_caption_text, decode_subtitle_bytes, normalize_line_endings, normalize_timestamp,
    strip_html_tags,
};
