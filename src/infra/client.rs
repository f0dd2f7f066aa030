//! Thin asynchronous client for the ChainPulse backend.
//!
//! - `get` issues one GET against `<base>/api/<path>` and classifies every failure.
//! - `fetch` is the collapsing boundary: failures are logged and surface as `None`.

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use crate::infra::config::ApiConfig;
use crate::util::version::user_agent;

/// Outcome of one remote call once failures are collapsed: payload or unavailable.
pub type QueryResult = Option<Value>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: Url, status: StatusCode },
    #[error("malformed JSON from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(user_agent())
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Performs `GET <base>/api/<path>` and returns the body parsed as JSON, verbatim.
    pub async fn get(&self, path: &[&str], query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = self.endpoint(path, query);
        log::debug!("GET {url}");

        let response = match self.http.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => return Err(ApiError::Network { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(ApiError::Network { url, source }),
        };
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// Same request as [`ApiClient::get`], with every failure logged and reported as `None`.
    /// Callers only ever branch on presence of data.
    pub async fn fetch(&self, path: &[&str], query: &[(&str, &str)]) -> QueryResult {
        match self.get(path, query).await {
            Ok(payload) => Some(payload),
            Err(err) => {
                log::warn!("backend data unavailable: {err}");
                None
            }
        }
    }

    fn endpoint(&self, path: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        let segments = path
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        url.set_path(&format!("{prefix}/api/{segments}"));

        if query.is_empty() {
            url.set_query(None);
        } else {
            let encoded = query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&encoded));
        }
        url
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Closed local port: every request fails at the transport level.
    pub(crate) const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:1";

    pub(crate) fn client_for(base: &str) -> ApiClient {
        let config = ApiConfig::new(base).unwrap();
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn endpoint_percent_encodes_path_segments() {
        let client = client_for("http://localhost:8000");
        let url = client.endpoint(&["location", "New York"], &[]);
        assert_eq!(url.as_str(), "http://localhost:8000/api/location/New%20York");

        let url = client.endpoint(&["weather", "Austin/Round Rock"], &[]);
        assert_eq!(url.path(), "/api/weather/Austin%2FRound%20Rock");
    }

    #[test]
    fn endpoint_percent_encodes_query_values() {
        let client = client_for("http://localhost:8000");
        let url = client.endpoint(&["route"], &[("origin", "San Jose"), ("destination", "A&B")]);
        assert_eq!(url.query(), Some("origin=San%20Jose&destination=A%26B"));
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = client_for("https://backend.example.com/chainpulse/");
        let url = client.endpoint(&["news"], &[]);
        assert_eq!(url.as_str(), "https://backend.example.com/chainpulse/api/news");
    }

    #[tokio::test]
    async fn success_returns_payload_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"distance":450,"nested":{"list":[1,2,3]},"extra":null}"#;
        let mock = server
            .mock("GET", "/api/news")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let payload = client.get(&["news"], &[]).await.unwrap();
        assert_eq!(payload, serde_json::from_str::<Value>(body).unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_classified_and_collapsed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/news")
            .with_status(503)
            .with_body(r#"{"detail":"down"}"#)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.get(&["news"], &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(client.fetch(&["news"], &[]).await, None);
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/news")
            .with_status(200)
            .with_body("<html>not json</html>")
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.get(&["news"], &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(client.fetch(&["news"], &[]).await, None);
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_failure() {
        let client = client_for(UNREACHABLE_BACKEND);
        let err = client.get(&["news"], &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Network { .. }));
        assert_eq!(client.fetch(&["news"], &[]).await, None);
    }
}
