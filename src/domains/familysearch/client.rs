//! FamilySearch API gateway.
//!
//! One authenticated GET per call against the search, portraits and ancestry
//! endpoints. No retries, no timeout, no caching: a non-success status is
//! turned into [`FamilySearchError::Status`] without reading the body as JSON,
//! and network failures are passed through unchanged. A `204 No Content` or
//! an empty body decodes to the empty result, which the formatters render as
//! their "nothing found" sentence.

use std::fmt;

use reqwest::{RequestBuilder, StatusCode, Url, header::ACCEPT};
use schemars::JsonSchema;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, error, instrument};

use super::error::{FamilySearchError, FamilySearchResult};
use super::models::{AncestryResults, PortraitResults, SearchResults};
use super::query::SearchQuery;
use crate::core::config::FamilySearchConfig;

/// Accept header for the search and portraits endpoints.
pub const JSON_ACCEPT: &str = "application/json, text/event-stream";

/// Accept header for the ancestry endpoint.
pub const GEDCOMX_ACCEPT: &str = "application/x-gedcomx-v1+json, text/event-stream";

/// Ancestry depth used when the caller does not ask for one.
pub const DEFAULT_GENERATIONS: u8 = 4;

/// Smallest ancestry depth accepted by the tools.
pub const MIN_GENERATIONS: u8 = 1;

/// Largest ancestry depth accepted by the tools.
pub const MAX_GENERATIONS: u8 = 8;

/// Caller-supplied OAuth access token.
///
/// Forwarded as a bearer token on each call and never stored or logged.
#[derive(Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Gateway to the FamilySearch Family Tree API.
///
/// Cheap to clone; holds no per-request state.
#[derive(Debug, Clone)]
pub struct FamilySearchClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FamilySearchClient {
    /// Create a client from configuration.
    pub fn new(config: &FamilySearchConfig) -> FamilySearchResult<Self> {
        Self::with_base_url(&config.base_url)
    }

    /// Create a client against an arbitrary base URL (mock servers in tests).
    pub fn with_base_url(base_url: &str) -> FamilySearchResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FamilySearchError::invalid_url(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FamilySearchError::invalid_url(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("familysearch-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Search the tree: `GET /platform/tree/search?q.*=...`.
    #[instrument(skip_all)]
    pub async fn search(
        &self,
        token: &AccessToken,
        query: &SearchQuery,
    ) -> FamilySearchResult<SearchResults> {
        let url = self.endpoint(&["platform", "tree", "search"])?;
        let request = self.http.get(url).query(&query.to_params());
        self.get_json(request, token, JSON_ACCEPT).await
    }

    /// Portraits of a person: `GET /platform/tree/persons/{id}/portraits`.
    #[instrument(skip(self, token))]
    pub async fn get_portraits(
        &self,
        token: &AccessToken,
        person_id: &str,
    ) -> FamilySearchResult<PortraitResults> {
        let url = self.endpoint(&["platform", "tree", "persons", person_id, "portraits"])?;
        self.get_json(self.http.get(url), token, JSON_ACCEPT).await
    }

    /// Ancestry of a person: `GET /platform/tree/ancestry?person=..&generations=..`.
    ///
    /// `generations` is sent as given; range checks belong to the caller.
    #[instrument(skip(self, token))]
    pub async fn get_ancestry(
        &self,
        token: &AccessToken,
        person_id: &str,
        generations: u8,
    ) -> FamilySearchResult<AncestryResults> {
        let url = self.endpoint(&["platform", "tree", "ancestry"])?;
        let request = self
            .http
            .get(url)
            .query(&[("person", person_id.to_string()), ("generations", generations.to_string())]);
        self.get_json(request, token, GEDCOMX_ACCEPT).await
    }

    /// Resolve path segments against the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> FamilySearchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FamilySearchError::invalid_url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned + Default>(
        &self,
        request: RequestBuilder,
        token: &AccessToken,
        accept: &str,
    ) -> FamilySearchResult<T> {
        let response = request
            .bearer_auth(token.secret())
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| {
                error!("FamilySearch request failed: {}", e);
                FamilySearchError::from(e)
            })?;

        debug!("GET {} -> {}", response.url(), response.status());

        let status = response.status();
        if !status.is_success() {
            let err = FamilySearchError::status(status);
            error!("Error response from FamilySearch API: {}", err);
            if let Ok(body) = response.text().await {
                debug!("Response body: {}", body);
            }
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(T::default());
        }

        let body = response.bytes().await?;
        if body.trim_ascii().is_empty() {
            debug!("Empty response body, using empty result");
            return Ok(T::default());
        }

        serde_json::from_slice(&body).map_err(|e| {
            error!("Undecodable FamilySearch response: {}", e);
            FamilySearchError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn token() -> AccessToken {
        AccessToken::new("test-token")
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let debug = format!("{:?}", AccessToken::new("super-secret"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FamilySearchClient::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, FamilySearchError::InvalidUrl(_)));
    }

    #[test]
    fn test_endpoint_handles_trailing_slash_and_encoding() {
        let client = FamilySearchClient::with_base_url("https://api.example.org/").unwrap();
        let url = client
            .endpoint(&["platform", "tree", "persons", "KW/1", "portraits"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.org/platform/tree/persons/KW%2F1/portraits"
        );
    }

    #[tokio::test]
    async fn test_search_sends_query_and_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/platform/tree/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q.givenName".into(), "John".into()),
                Matcher::UrlEncoded("q.birthLikeDate.from".into(), "1900".into()),
                Matcher::UrlEncoded("q.birthLikeDate.to".into(), "1901".into()),
            ]))
            .match_header("authorization", "Bearer test-token")
            .match_header("accept", JSON_ACCEPT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"entries": []}"#)
            .create_async()
            .await;

        let client = FamilySearchClient::with_base_url(&server.url()).unwrap();
        let query = SearchQuery {
            given_name: Some("John".to_string()),
            birth_year: Some(1900),
            ..Default::default()
        };
        let results = client.search(&token(), &query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.entries.map(|e| e.len()), Some(0));
    }

    #[tokio::test]
    async fn test_get_portraits_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/platform/tree/persons/KWCB-123/portraits")
            .match_header("accept", JSON_ACCEPT)
            .with_status(200)
            .with_body(r#"{"portraits": [{"description": "Wedding"}]}"#)
            .create_async()
            .await;

        let client = FamilySearchClient::with_base_url(&server.url()).unwrap();
        let results = client.get_portraits(&token(), "KWCB-123").await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.portraits.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_ancestry_query_and_accept() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/platform/tree/ancestry")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("person".into(), "KWCB-123".into()),
                Matcher::UrlEncoded("generations".into(), "6".into()),
            ]))
            .match_header("accept", GEDCOMX_ACCEPT)
            .with_status(200)
            .with_body(r#"{"persons": [{"id": "KWCB-123"}]}"#)
            .create_async()
            .await;

        let client = FamilySearchClient::with_base_url(&server.url()).unwrap();
        let results = client.get_ancestry(&token(), "KWCB-123", 6).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.persons.unwrap()[0].id(), "KWCB-123");
    }

    #[tokio::test]
    async fn test_error_status_is_not_parsed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/platform/tree/search")
            .with_status(401)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = FamilySearchClient::with_base_url(&server.url()).unwrap();
        let err = client
            .search(&token(), &SearchQuery::default())
            .await
            .unwrap_err();

        match err {
            FamilySearchError::Status { status, ref status_text } => {
                assert_eq!(status, 401);
                assert_eq!(status_text, "Unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_content_is_empty_result() {
        let mut server = Server::new_async().await;
        let _search = server
            .mock("GET", "/platform/tree/search")
            .match_query(Matcher::Any)
            .with_status(204)
            .create_async()
            .await;
        let _portraits = server
            .mock("GET", "/platform/tree/persons/KWCB-123/portraits")
            .with_status(204)
            .create_async()
            .await;
        let _ancestry = server
            .mock("GET", "/platform/tree/ancestry")
            .match_query(Matcher::Any)
            .with_status(204)
            .create_async()
            .await;

        let client = FamilySearchClient::with_base_url(&server.url()).unwrap();
        let query = SearchQuery {
            surname: Some("Nobody".to_string()),
            ..Default::default()
        };

        let search = client.search(&token(), &query).await.unwrap();
        assert!(search.entries.is_none());

        let portraits = client.get_portraits(&token(), "KWCB-123").await.unwrap();
        assert!(portraits.portraits.is_none());

        let ancestry = client.get_ancestry(&token(), "KWCB-123", 4).await.unwrap();
        assert!(ancestry.persons.is_none());
    }

    #[tokio::test]
    async fn test_blank_success_body_is_empty_result() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/platform/tree/persons/KWCB-123/portraits")
            .with_status(200)
            .with_body("  \n")
            .create_async()
            .await;

        let client = FamilySearchClient::with_base_url(&server.url()).unwrap();
        let results = client.get_portraits(&token(), "KWCB-123").await.unwrap();
        assert!(results.portraits.is_none());
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/platform/tree/persons/KWCB-123/portraits")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = FamilySearchClient::with_base_url(&server.url()).unwrap();
        let err = client
            .get_portraits(&token(), "KWCB-123")
            .await
            .unwrap_err();
        assert!(matches!(err, FamilySearchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        // Nothing listens on port 9 (discard) on test hosts.
        let client = FamilySearchClient::with_base_url("http://127.0.0.1:9").unwrap();
        let err = client
            .get_portraits(&token(), "KWCB-123")
            .await
            .unwrap_err();
        assert!(matches!(err, FamilySearchError::Network(_)));
    }
}
