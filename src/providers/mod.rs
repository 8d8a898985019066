mod config;
mod opensubtitles;
mod tmdb;
mod types;

pub use config::{
    OpenSubtitlesConfig, TmdbConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, OPENSUBTITLES_BASE_URL,
    TMDB_BASE_URL, TMDB_IMAGE_BASE_URL,
};
pub use opensubtitles::{find_best_subtitle, OpenSubtitlesClient};
pub use tmdb::{poster_url, search_links, TmdbClient};
pub use types::{
    DiscoveredMovie, MovieMetadata, SearchLinks, SubtitleAttributes, SubtitleFile, SubtitleRecord,
};
