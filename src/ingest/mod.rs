mod fetch;
mod types;
mod upload;

pub use fetch::{fetch_movie_batch, SubtitleProvider};
pub use types::{ImportBatch, MovieRef, Resolution, ResolutionStatus};
pub use upload::{parse_year, prepare_upload, resolve_movie};
