use serde::{Deserialize, Serialize};

/// Movie details confirmed by the metadata service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MovieMetadata {
    pub tmdb_id: u64,
    pub title: String,
    pub year: Option<i32>,
    pub imdb_id: Option<String>,
    pub poster_url: Option<String>,
}

/// A popular movie found by discovery, already resolved to its IMDb id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredMovie {
    pub imdb_id: String,
    pub title: String,
    pub year: i32,
}

/// Search-page links used when no direct streaming link is known
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchLinks {
    pub justwatch: String,
    pub google: String,
}

// OpenSubtitles wire shapes

#[derive(Deserialize, Debug)]
pub(crate) struct LoginResponse {
    pub token: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SubtitleSearchResponse {
    #[serde(default)]
    pub data: Vec<SubtitleRecord>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SubtitleRecord {
    #[serde(default)]
    pub attributes: SubtitleAttributes,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SubtitleAttributes {
    pub ai_translated: Option<bool>,
    pub download_count: Option<u64>,
    #[serde(default)]
    pub files: Vec<SubtitleFile>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SubtitleFile {
    pub file_id: u64,
}

#[derive(Serialize, Debug)]
pub(crate) struct DownloadRequest {
    pub file_id: u64,
}

#[derive(Deserialize, Debug)]
pub(crate) struct DownloadResponse {
    pub link: Option<String>,
}

// TMDB wire shapes

#[derive(Deserialize, Debug, Default)]
pub(crate) struct TmdbResultPage {
    #[serde(default)]
    pub results: Vec<TmdbMovieResult>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct TmdbMovieResult {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TmdbMovieDetails {
    pub imdb_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct TmdbWatchProviders {
    #[serde(default)]
    pub results: serde_json::Map<String, serde_json::Value>,
}
