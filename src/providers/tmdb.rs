use super::config::TmdbConfig;
use super::types::{
    DiscoveredMovie, MovieMetadata, SearchLinks, TmdbMovieDetails, TmdbMovieResult,
    TmdbResultPage, TmdbWatchProviders,
};
use crate::errors::{ProviderError, QuoteResult};
use log::{debug, error, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

const FALLBACK_COUNTRY: &str = "US";
const MIN_VOTE_COUNT: &str = "100";

/// Build the full poster URL from a TMDB image path
pub fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path.map(|path| format!("{}{}", image_base_url, path))
}

/// JustWatch and Google search pages for a title
pub fn search_links(title: &str, year: Option<i32>) -> SearchLinks {
    let google_query = match year {
        Some(year) => format!("{} {} movie", title, year),
        None => format!("{} movie", title),
    };

    SearchLinks {
        justwatch: format!(
            "https://www.justwatch.com/us/search?q={}",
            title.replace(' ', "+")
        ),
        google: format!(
            "https://www.google.com/search?q={}",
            google_query.replace(' ', "+")
        ),
    }
}

/// Year component of a TMDB `YYYY-MM-DD` release date
pub(crate) fn release_year(release_date: Option<&str>) -> Option<i32> {
    release_date?.split('-').next()?.parse().ok()
}

/// Client for The Movie Database API.
///
/// Lookups are best effort: failures are logged and surface as "no data".
pub struct TmdbClient {
    config: TmdbConfig,
    client: Client,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> QuoteResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::new(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> QuoteResult<T> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::http(status.as_u16(), path).into());
        }
        Ok(response.json().await?)
    }

    async fn imdb_id_for(&self, tmdb_id: u64) -> QuoteResult<Option<String>> {
        let details: TmdbMovieDetails = self.get_json(&format!("/movie/{}", tmdb_id), &[]).await?;
        Ok(details.imdb_id.filter(|id| !id.is_empty()))
    }

    async fn first_search_result(
        &self,
        query: &str,
        year: Option<i32>,
    ) -> QuoteResult<Option<TmdbMovieResult>> {
        let mut params = vec![("query", query.to_string())];
        if let Some(year) = year {
            params.push(("year", year.to_string()));
        }
        let page: TmdbResultPage = self.get_json("/search/movie", &params).await?;
        Ok(page.results.into_iter().next())
    }

    /// Look a movie up by title, trying with the year first and then without.
    ///
    /// An attempt whose first result lacks an id falls through to the next.
    pub async fn search_movie_metadata(
        &self,
        query: &str,
        year: Option<i32>,
    ) -> Option<MovieMetadata> {
        let mut attempts = vec![None];
        if year.is_some() {
            attempts.insert(0, year);
        }

        for attempt in attempts {
            match self.first_search_result(query, attempt).await {
                Ok(Some(result)) => match self.metadata_from(result).await {
                    Some(meta) => return Some(meta),
                    None => debug!("First TMDB match for '{}' has no id", query),
                },
                Ok(None) => debug!("No TMDB match for '{}' (year {:?})", query, attempt),
                Err(e) => error!("Error searching '{}' (year {:?}): {}", query, attempt, e),
            }
        }
        None
    }

    async fn metadata_from(&self, result: TmdbMovieResult) -> Option<MovieMetadata> {
        let tmdb_id = result.id?;
        let imdb_id = match self.imdb_id_for(tmdb_id).await {
            Ok(id) => id,
            Err(e) => {
                warn!("Could not fetch IMDb id for {}: {}", tmdb_id, e);
                None
            }
        };

        Some(MovieMetadata {
            tmdb_id,
            title: result.title.unwrap_or_default(),
            year: release_year(result.release_date.as_deref()),
            imdb_id,
            poster_url: poster_url(&self.config.image_base_url, result.poster_path.as_deref()),
        })
    }

    /// Streaming link for a movie, preferring the given country, then the US,
    /// then whichever country is listed first.
    pub async fn watch_link(&self, tmdb_id: u64, country_code: &str) -> Option<String> {
        let path = format!("/movie/{}/watch/providers", tmdb_id);
        let providers: TmdbWatchProviders = match self.get_json(&path, &[]).await {
            Ok(providers) => providers,
            Err(e) => {
                error!("Error finding providers for {}: {}", tmdb_id, e);
                return None;
            }
        };

        let results = &providers.results;
        let region = results
            .get(country_code)
            .or_else(|| results.get(FALLBACK_COUNTRY))
            .or_else(|| results.values().next())?;

        region.get("link")?.as_str().map(str::to_string)
    }

    /// Popular movies released in `year`, resolved to IMDb ids.
    ///
    /// Movies without an IMDb id are left out.
    pub async fn discover_popular_movies(&self, year: i32, page: u32) -> Vec<DiscoveredMovie> {
        let params = [
            ("primary_release_year", year.to_string()),
            ("sort_by", "popularity.desc".to_string()),
            ("page", page.to_string()),
            ("include_adult", "false".to_string()),
            ("include_video", "false".to_string()),
            ("language", "en-US".to_string()),
            ("vote_count.gte", MIN_VOTE_COUNT.to_string()),
        ];
        let page: TmdbResultPage = match self.get_json("/discover/movie", &params).await {
            Ok(page) => page,
            Err(e) => {
                error!("Error discovering movies for year {}: {}", year, e);
                return Vec::new();
            }
        };

        let mut movies = Vec::new();
        for result in page.results {
            let Some(tmdb_id) = result.id else {
                continue;
            };
            match self.imdb_id_for(tmdb_id).await {
                Ok(Some(imdb_id)) => movies.push(DiscoveredMovie {
                    imdb_id,
                    title: result.title.unwrap_or_default(),
                    year,
                }),
                Ok(None) => debug!("Movie {} has no IMDb id", tmdb_id),
                Err(e) => error!("Error fetching details for movie {}: {}", tmdb_id, e),
            }
        }
        movies
    }
}
