pub mod subtitles;
pub use subtitles::{parse_srt, SubtitleEntry};

pub mod ingest;
pub use ingest::{ImportBatch, MovieRef, SubtitleProvider};

pub mod providers;
pub use providers::{MovieMetadata, OpenSubtitlesClient, TmdbClient};

pub mod errors;
pub use errors::{ConfigError, ImportError, ProviderError, QuoteError, QuoteResult};

/// Validate an uploaded file and parse it into a batch for `movie`
pub fn import_upload(movie: MovieRef, filename: &str, data: &[u8]) -> QuoteResult<ImportBatch> {
    ingest::prepare_upload(movie, filename, data)
}

/// Fetch the best English subtitle for `movie` from a provider and parse it
pub async fn import_from_provider<P: SubtitleProvider + ?Sized>(
    provider: &P,
    movie: &MovieRef,
) -> QuoteResult<Option<ImportBatch>> {
    ingest::fetch_movie_batch(provider, movie).await
}
