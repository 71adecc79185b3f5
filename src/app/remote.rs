// src/app/remote.rs: blocking client for the movie collection resource
use reqwest::blocking::{Client, RequestBuilder, Response};
use thiserror::Error;
use tracing::{debug, error, warn};

use super::data::{Movie, MovieDraft};
use crate::config::AppConfig;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/movies";

/// Any failed exchange with the movie service: network error, non-2xx status
/// or an undecodable body. Deliberately not sub-classified.
#[derive(Clone, Debug, Error)]
#[error("{operation} {url}: {reason}")]
pub struct TransportError {
    pub operation: &'static str,
    pub url: String,
    pub reason: String,
}

impl TransportError {
    pub fn new(operation: &'static str, url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            operation,
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// The four calls the controllers need from the movie service.
pub trait MovieApi: Send + Sync {
    fn list_movies(&self) -> Result<Vec<Movie>, TransportError>;
    fn get_movie(&self, id: i64) -> Result<Movie, TransportError>;
    fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, TransportError>;
    fn delete_movie(&self, id: i64) -> Result<bool, TransportError>;
}

pub struct RemoteMovieClient {
    client: Client,
    base_url: String,
}

impl RemoteMovieClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_user_agent(base_url, &AppConfig::default().user_agent)
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::with_user_agent(&cfg.api_base_url, &cfg.user_agent)
    }

    pub fn with_user_agent(base_url: impl Into<String>, user_agent: &str) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|err| {
                    warn!("HTTP client setup failed ({err}); using reqwest defaults");
                    Client::new()
                }),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn send(
        &self,
        operation: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, TransportError> {
        debug!("{operation}: {url}");
        let resp = request
            .send()
            .map_err(|e| TransportError::new(operation, url, e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::new(operation, url, format!("HTTP {status}")));
        }
        Ok(resp)
    }

    fn fetch_all(&self) -> Result<Vec<Movie>, TransportError> {
        const OP: &str = "GET";
        let url = self.base_url.as_str();
        self.send(OP, url, self.client.get(url))?
            .json()
            .map_err(|e| TransportError::new(OP, url, format!("decode body: {e}")))
    }

    fn fetch_one(&self, id: i64) -> Result<Movie, TransportError> {
        const OP: &str = "GET";
        let url = self.item_url(id);
        self.send(OP, &url, self.client.get(&url))?
            .json()
            .map_err(|e| TransportError::new(OP, &url, format!("decode body: {e}")))
    }

    fn post(&self, draft: &MovieDraft) -> Result<Movie, TransportError> {
        const OP: &str = "POST";
        let url = self.base_url.as_str();
        let request = self.client.post(url).json(&draft.to_request());
        self.send(OP, url, request)?
            .json()
            .map_err(|e| TransportError::new(OP, url, format!("decode body: {e}")))
    }

    fn remove(&self, id: i64) -> Result<bool, TransportError> {
        let url = self.item_url(id);
        self.send("DELETE", &url, self.client.delete(&url))?;
        Ok(true)
    }
}

impl MovieApi for RemoteMovieClient {
    fn list_movies(&self) -> Result<Vec<Movie>, TransportError> {
        self.fetch_all()
            .inspect_err(|e| error!("Error fetching movies: {e}"))
    }

    fn get_movie(&self, id: i64) -> Result<Movie, TransportError> {
        self.fetch_one(id)
            .inspect_err(|e| error!("Error fetching movie with id {id}: {e}"))
    }

    fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, TransportError> {
        self.post(draft)
            .inspect_err(|e| error!("Error creating movie: {e}"))
    }

    fn delete_movie(&self, id: i64) -> Result<bool, TransportError> {
        self.remove(id)
            .inspect_err(|e| error!("Error deleting movie with id {id}: {e}"))
    }
}
