use moviequote::providers::{OpenSubtitlesConfig, TmdbConfig};
use moviequote::{
    import_from_provider, MovieRef, OpenSubtitlesClient, QuoteError, SubtitleProvider, TmdbClient,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const SAMPLE_SRT: &str =
    "1\r\n00:00:01,000 --> 00:00:04,000\r\n<i>Hello world</i>\r\n\r\n2\r\n00:00:05.000 --> 00:00:07.000\r\nGoodbye\r\n";

fn opensubtitles_client(server: &MockServer) -> OpenSubtitlesClient {
    let config = OpenSubtitlesConfig::new("test-key", "neo", "redpill").with_base_url(server.uri());
    OpenSubtitlesClient::new(config).expect("client should build")
}

fn tmdb_client(server: &MockServer) -> TmdbClient {
    TmdbClient::new(TmdbConfig::new("tmdb-key").with_base_url(server.uri()))
        .expect("client should build")
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("Api-Key", "test-key"))
        .and(body_json(json!({"username": "neo", "password": "redpill"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-123"})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_opensubtitles_full_fetch_flow() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/subtitles"))
        .and(query_param("imdb_id", "tt0133093"))
        .and(query_param("languages", "en"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"attributes": {"ai_translated": true, "download_count": 99999, "files": [{"file_id": 1}]}},
                {"attributes": {"ai_translated": false, "download_count": 10, "files": [{"file_id": 2}]}},
                {"attributes": {"ai_translated": false, "download_count": 250, "files": [{"file_id": 3}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let link = format!("{}/files/matrix.srt", server.uri());
    Mock::given(method("POST"))
        .and(path("/download"))
        .and(body_json(json!({"file_id": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"link": link})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/matrix.srt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(SAMPLE_SRT.as_bytes()))
        .expect(1)
        .mount(&server)
        .await;

    let client = opensubtitles_client(&server);
    let movie = MovieRef::new("The Matrix", 1999).with_imdb_id("tt0133093");
    let batch = import_from_provider(&client, &movie)
        .await
        .expect("fetch should succeed")
        .expect("a batch should be produced");

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.entries[0].text, "Hello world");
    assert_eq!(batch.entries[1].start, "00:00:05,000");
    assert_eq!(client.http_request_count(), 4);
}

#[tokio::test]
async fn test_opensubtitles_token_is_reused() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/subtitles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = opensubtitles_client(&server);
    assert!(client.fetch_srt("tt0000001").await.unwrap().is_none());
    assert!(client.fetch_srt("tt0000002").await.unwrap().is_none());
    assert_eq!(client.http_request_count(), 3);
}

#[tokio::test]
async fn test_opensubtitles_login_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = opensubtitles_client(&server);
    match client.fetch_srt("tt0133093").await {
        Err(QuoteError::Provider(err)) => assert_eq!(err.status, Some(401)),
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_download_decodes_latin1() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/latin1.srt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"Caf\xE9".to_vec()))
        .mount(&server)
        .await;

    let client = opensubtitles_client(&server);
    let text = client
        .download_srt(&format!("{}/files/latin1.srt", server.uri()))
        .await
        .unwrap();
    assert_eq!(text, "Café");
}

#[tokio::test]
async fn test_tmdb_search_falls_back_to_query_without_year() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("year", "1998"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "matrix"))
        .and(query_param("api_key", "tmdb-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-30", "poster_path": "/poster.jpg"},
                {"id": 604, "title": "The Matrix Reloaded", "release_date": "2003-05-15"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"imdb_id": "tt0133093"})))
        .mount(&server)
        .await;

    let meta = tmdb_client(&server)
        .search_movie_metadata("matrix", Some(1998))
        .await
        .expect("metadata should be found");

    assert_eq!(meta.tmdb_id, 603);
    assert_eq!(meta.title, "The Matrix");
    assert_eq!(meta.year, Some(1999));
    assert_eq!(meta.imdb_id.as_deref(), Some("tt0133093"));
    assert_eq!(
        meta.poster_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/poster.jpg")
    );
}

#[tokio::test]
async fn test_tmdb_search_errors_mean_no_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    assert!(tmdb_client(&server)
        .search_movie_metadata("anything", Some(2000))
        .await
        .is_none());
}

#[tokio::test]
async fn test_tmdb_watch_link_country_fallbacks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603/watch/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "GB": {"link": "https://tmdb/gb"},
                "US": {"link": "https://tmdb/us"}
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/604/watch/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "FR": {"link": "https://tmdb/fr"},
                "DE": {"link": "https://tmdb/de"}
            }
        })))
        .mount(&server)
        .await;

    let client = tmdb_client(&server);
    assert_eq!(
        client.watch_link(603, "GB").await.as_deref(),
        Some("https://tmdb/gb")
    );
    assert_eq!(
        client.watch_link(603, "NG").await.as_deref(),
        Some("https://tmdb/us")
    );
    assert_eq!(
        client.watch_link(604, "NG").await.as_deref(),
        Some("https://tmdb/fr")
    );
    assert_eq!(client.watch_link(605, "NG").await, None);
}

#[tokio::test]
async fn test_tmdb_discover_skips_movies_without_imdb_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("primary_release_year", "1999"))
        .and(query_param("page", "2"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param("vote_count.gte", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": 603, "title": "The Matrix"},
                {"id": 700, "title": "Obscure Short"},
                {"title": "No Id"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"imdb_id": "tt0133093"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/700"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"imdb_id": null})))
        .mount(&server)
        .await;

    let movies = tmdb_client(&server).discover_popular_movies(1999, 2).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].imdb_id, "tt0133093");
    assert_eq!(movies[0].title, "The Matrix");
    assert_eq!(movies[0].year, 1999);
}

#[tokio::test]
async fn test_tmdb_search_skips_result_without_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("year", "1998"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": [{"title": "bogus"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 603, "title": "The Matrix", "release_date": "1999-03-30"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"imdb_id": "tt0133093"})))
        .mount(&server)
        .await;

    let meta = tmdb_client(&server)
        .search_movie_metadata("matrix", Some(1998))
        .await
        .expect("the search without a year should be used");
    assert_eq!(meta.tmdb_id, 603);
    assert_eq!(meta.title, "The Matrix");
    assert_eq!(meta.imdb_id.as_deref(), Some("tt0133093"));
}
