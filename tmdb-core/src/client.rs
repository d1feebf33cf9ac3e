use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    error::{Result, TmdbError},
    model::{ListQuery, MovieDetail, MoviePage},
};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The read operations the CLI exposes, kept behind a trait so the command
/// dispatcher can run against a stub in tests.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage>;
    async fn movie_detail(&self, movie_id: u64) -> Result<MovieDetail>;
    async fn popular_movies(&self, query: &ListQuery) -> Result<MoviePage>;
    async fn upcoming_movies(&self, query: &ListQuery) -> Result<MoviePage>;
}

/// HTTP client for The Movie Database v3 API.
///
/// Holds the credential for the whole run; it is merged into every outgoing
/// query. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, TMDB_BASE_URL.to_string())
    }

    /// Like [`TmdbClient::new`], but pointing at a different server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, api_key, base_url })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = res.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

/// Query pairs for the listing endpoints. `language` and `region` are present
/// only when the caller supplied them, never as empty strings.
fn list_params(query: &ListQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", query.page.to_string())];

    if let Some(language) = &query.language {
        params.push(("language", language.clone()));
    }
    if let Some(region) = &query.region {
        params.push(("region", region.clone()));
    }

    params
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage> {
        let params = [("query", query.to_string()), ("page", page.to_string())];
        self.get("/search/movie", &params).await
    }

    async fn movie_detail(&self, movie_id: u64) -> Result<MovieDetail> {
        self.get(&format!("/movie/{movie_id}"), &[]).await
    }

    async fn popular_movies(&self, query: &ListQuery) -> Result<MoviePage> {
        self.get("/movie/popular", &list_params(query)).await
    }

    async fn upcoming_movies(&self, query: &ListQuery) -> Result<MoviePage> {
        self.get("/movie/upcoming", &list_params(query)).await
    }
}
