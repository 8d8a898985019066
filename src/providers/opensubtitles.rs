use super::config::OpenSubtitlesConfig;
use super::types::{
    DownloadRequest, DownloadResponse, LoginResponse, SubtitleRecord, SubtitleSearchResponse,
};
use crate::errors::{ProviderError, QuoteResult};
use crate::ingest::SubtitleProvider;
use crate::subtitles::decode_subtitle_bytes;
use async_trait::async_trait;
use log::{debug, error, info};
use once_cell::sync::OnceCell;
use reqwest::{Client, Response};
use std::sync::atomic::{AtomicU64, Ordering};

const API_KEY_HEADER: &str = "Api-Key";
const SUBTITLE_LANGUAGE: &str = "en";

/// Pick the file to download from a subtitle search.
///
/// Machine-translated subtitles and records without files are ignored; the
/// most downloaded of the rest wins, keeping the earlier record on a tie.
pub fn find_best_subtitle(records: &[SubtitleRecord]) -> Option<u64> {
    let mut best: Option<(u64, u64)> = None;

    for attrs in records.iter().map(|r| &r.attributes) {
        if attrs.ai_translated == Some(true) {
            continue;
        }
        let Some(file) = attrs.files.first() else {
            continue;
        };
        let downloads = attrs.download_count.unwrap_or(0);
        if best.map_or(true, |(top, _)| downloads > top) {
            best = Some((downloads, file.file_id));
        }
    }

    best.map(|(_, file_id)| file_id)
}

/// Client for the OpenSubtitles REST API
pub struct OpenSubtitlesClient {
    config: OpenSubtitlesConfig,
    client: Client,
    token: OnceCell<String>,
    http_request_count: AtomicU64,
}

impl OpenSubtitlesClient {
    pub fn new(config: OpenSubtitlesConfig) -> QuoteResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ProviderError::new(e.to_string()))?;

        Ok(Self {
            config,
            client,
            token: OnceCell::new(),
            http_request_count: AtomicU64::new(0),
        })
    }

    /// Number of HTTP requests sent so far.
    pub fn http_request_count(&self) -> u64 {
        self.http_request_count.load(Ordering::Relaxed)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn count_request(&self) {
        self.http_request_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Exchange the configured credentials for a bearer token
    pub async fn login(&self) -> QuoteResult<String> {
        let response = self
            .client
            .post(self.url("/login"))
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&serde_json::json!({
                "username": self.config.username,
                "password": self.config.password,
            }))
            .send()
            .await?;
        self.count_request();

        let body: LoginResponse = ensure_success(response, "Login")?.json().await?;
        body.token.ok_or_else(|| {
            error!("Login succeeded without a token");
            ProviderError::new("Login failed: no token in response").into()
        })
    }

    async fn token(&self) -> QuoteResult<String> {
        if let Some(token) = self.token.get() {
            return Ok(token.clone());
        }
        let token = self.login().await?;
        let _ = self.token.set(token.clone());
        Ok(token)
    }

    /// List English subtitles available for a movie
    pub async fn search_subtitles(
        &self,
        token: &str,
        imdb_id: &str,
    ) -> QuoteResult<Vec<SubtitleRecord>> {
        let response = self
            .client
            .get(self.url("/subtitles"))
            .bearer_auth(token)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(&[("imdb_id", imdb_id), ("languages", SUBTITLE_LANGUAGE)])
            .send()
            .await?;
        self.count_request();

        let body: SubtitleSearchResponse = ensure_success(response, "Subtitle search")?
            .json()
            .await?;
        debug!("Search for {} returned {} records", imdb_id, body.data.len());
        Ok(body.data)
    }

    /// Ask for a temporary download link for one subtitle file
    pub async fn request_download_link(&self, token: &str, file_id: u64) -> QuoteResult<String> {
        let response = self
            .client
            .post(self.url("/download"))
            .bearer_auth(token)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&DownloadRequest { file_id })
            .send()
            .await?;
        self.count_request();

        let body: DownloadResponse = ensure_success(response, "Download request")?
            .json()
            .await?;
        body.link.ok_or_else(|| {
            ProviderError::new(format!("No download link for file {}", file_id)).into()
        })
    }

    /// Fetch the subtitle document behind a download link
    pub async fn download_srt(&self, link: &str) -> QuoteResult<String> {
        let response = self.client.get(link).send().await?;
        self.count_request();

        let bytes = ensure_success(response, "Subtitle download")?
            .bytes()
            .await?;
        info!("Downloaded subtitle: {} bytes", bytes.len());
        Ok(decode_subtitle_bytes(&bytes))
    }
}

#[async_trait]
impl SubtitleProvider for OpenSubtitlesClient {
    async fn fetch_srt(&self, imdb_id: &str) -> QuoteResult<Option<String>> {
        let token = self.token().await?;
        let records = self.search_subtitles(&token, imdb_id).await?;

        let Some(file_id) = find_best_subtitle(&records) else {
            info!("No usable subtitle for {}", imdb_id);
            return Ok(None);
        };

        let link = self.request_download_link(&token, file_id).await?;
        self.download_srt(&link).await.map(Some)
    }
}

fn ensure_success(response: Response, context: &str) -> QuoteResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    error!("{} failed: HTTP {}", context, status);
    Err(ProviderError::http(status.as_u16(), context).into())
}
