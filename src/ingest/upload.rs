use super::types::{ImportBatch, MovieRef, Resolution, ResolutionStatus};
use crate::errors::{ImportError, QuoteResult};
use crate::providers::MovieMetadata;
use crate::subtitles::extract_subtitle_entries;
use log::{info, warn};

const SRT_EXTENSION: &str = ".srt";

/// Parse a year typed by a user
pub fn parse_year(raw: &str) -> QuoteResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ImportError::InvalidYear(raw.to_string()).into())
}

/// Settle on the movie an upload belongs to.
///
/// A metadata match wins over the user's input; it counts as a correction
/// when the title differs ignoring case or the year differs.
pub fn resolve_movie(
    user_title: &str,
    user_year: i32,
    verified: Option<MovieMetadata>,
) -> Resolution {
    let user_title = user_title.trim();

    let Some(meta) = verified else {
        warn!(
            "No metadata match for '{}' ({}), using input as entered",
            user_title, user_year
        );
        return Resolution {
            movie: MovieRef::new(user_title, user_year),
            status: ResolutionStatus::Unverified,
        };
    };

    let year = meta.year.unwrap_or(user_year);
    let corrected = meta.title.to_lowercase() != user_title.to_lowercase() || year != user_year;

    Resolution {
        movie: MovieRef {
            title: meta.title,
            year,
            imdb_id: meta.imdb_id,
        },
        status: if corrected {
            ResolutionStatus::AutoCorrected
        } else {
            ResolutionStatus::Verified
        },
    }
}

/// Validate and parse an uploaded subtitle file.
///
/// The raw bytes are decoded as UTF-8 with a Latin-1 fallback. A file that
/// yields no entries is rejected with [`ImportError::NoEntries`] rather than
/// producing an empty batch.
pub fn prepare_upload(movie: MovieRef, filename: &str, data: &[u8]) -> QuoteResult<ImportBatch> {
    if movie.title.trim().is_empty() {
        return Err(ImportError::EmptyTitle.into());
    }
    if filename.is_empty() {
        return Err(ImportError::NoFileSelected.into());
    }
    if !filename.to_lowercase().ends_with(SRT_EXTENSION) {
        return Err(ImportError::InvalidExtension(filename.to_string()).into());
    }

    let entries = extract_subtitle_entries(data);
    if entries.is_empty() {
        warn!("Upload {} for '{}' produced no entries", filename, movie.title);
        return Err(ImportError::NoEntries.into());
    }

    info!(
        "Prepared {} entries from {} for '{}' ({})",
        entries.len(),
        filename,
        movie.title,
        movie.year
    );
    Ok(ImportBatch { movie, entries })
}
