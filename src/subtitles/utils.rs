use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("html tag regex should compile"));

/// Dialogue dash left over by many rippers. Removed wherever it occurs,
/// including mid-line ("Hello- there" becomes "Hellothere").
const DIALOGUE_DASH: &str = "- ";

/// Rewrite CRLF and lone CR line endings to LF
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Force the millisecond separator of an SRT timestamp to a comma
pub fn normalize_timestamp(raw: &str) -> String {
    raw.replace('.', ",")
}

/// Remove anything shaped like `<...>` without checking that it is a real tag
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG_PATTERN.replace_all(text, "").into_owned()
}

/// Join caption lines with single spaces, then strip markup and dialogue dashes
pub fn clean_caption_text(lines: &[&str]) -> String {
    let joined = lines.join(" ");
    let stripped = strip_html_tags(&joined);
    stripped.trim().replace(DIALOGUE_DASH, "").trim().to_string()
}

/// Decode raw subtitle bytes as UTF-8, falling back to Latin-1
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail.
pub fn decode_subtitle_bytes(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(_) => data.iter().map(|&b| b as char).collect(),
    }
}
