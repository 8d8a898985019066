use super::types::{ImportBatch, MovieRef};
use crate::errors::{ImportError, QuoteResult};
use crate::subtitles::parse_srt;
use async_trait::async_trait;
use log::{debug, info};

/// A remote source of SRT documents keyed by IMDb id
#[async_trait]
pub trait SubtitleProvider: Send + Sync {
    /// Fetch the best available English subtitle, `None` if there is none
    async fn fetch_srt(&self, imdb_id: &str) -> QuoteResult<Option<String>>;
}

/// Fetch and parse subtitles for one movie.
///
/// Returns `Ok(None)` when the provider has nothing for the movie or the
/// document parses to zero entries; the caller skips the movie in both cases.
pub async fn fetch_movie_batch<P: SubtitleProvider + ?Sized>(
    provider: &P,
    movie: &MovieRef,
) -> QuoteResult<Option<ImportBatch>> {
    let imdb_id = movie
        .imdb_id
        .as_deref()
        .ok_or_else(|| ImportError::MissingImdbId(movie.title.clone()))?;

    info!("Processing: {} ({})", movie.title, movie.year);

    let Some(content) = provider.fetch_srt(imdb_id).await? else {
        debug!("No subtitle available for {}", imdb_id);
        return Ok(None);
    };

    let entries = parse_srt(&content);
    if entries.is_empty() {
        debug!("Subtitle for {} parsed to zero entries", imdb_id);
        return Ok(None);
    }

    info!("Fetched {} lines for {}", entries.len(), movie.title);
    Ok(Some(ImportBatch {
        movie: movie.clone(),
        entries,
    }))
}
