use crate::error::ApiError;
use crate::models::{Identifier, Metrics, PullRequest, Review, ReviewResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Operations offered by the review backend
///
/// The dashboard talks to the backend only through this trait so tests can
/// substitute scripted implementations.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// `GET /api/prs`
    async fn list_pull_requests(&self) -> Result<Vec<PullRequest>, ApiError>;

    /// `GET /api/reviews`
    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError>;

    /// `GET /api/metrics`
    async fn metrics(&self) -> Result<Metrics, ApiError>;

    /// `GET /api/prs/{id}/diff`, returned verbatim
    async fn pull_request_diff(&self, id: &Identifier) -> Result<String, ApiError>;

    /// `GET /api/prs/{id}/review`
    ///
    /// Triggers the AI review on the backend and waits for its answer.
    async fn run_review(&self, id: &Identifier) -> Result<ReviewResponse, ApiError>;
}

/// [`ReviewApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpReviewApi {
    base_url: Url,
    client: Client,
}

impl HttpReviewApi {
    /// Create a client for the backend at `base_url`
    ///
    /// `timeout` bounds each request; `None` leaves it to the transport defaults.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| ApiError::Transport {
            url: base_url.to_string(),
            source,
        })?;

        Self::with_client(base_url, client)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL; every segment is percent-encoded, `/` included
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> Result<String, ApiError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let body = self.get_text(url.clone()).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ReviewApi for HttpReviewApi {
    async fn list_pull_requests(&self) -> Result<Vec<PullRequest>, ApiError> {
        self.get_json(self.endpoint(&["api", "prs"])?).await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get_json(self.endpoint(&["api", "reviews"])?).await
    }

    async fn metrics(&self) -> Result<Metrics, ApiError> {
        self.get_json(self.endpoint(&["api", "metrics"])?).await
    }

    async fn pull_request_diff(&self, id: &Identifier) -> Result<String, ApiError> {
        self.get_text(self.endpoint(&["api", "prs", id.as_str(), "diff"])?)
            .await
    }

    async fn run_review(&self, id: &Identifier) -> Result<ReviewResponse, ApiError> {
        self.get_json(self.endpoint(&["api", "prs", id.as_str(), "review"])?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn api_for(server: &MockServer) -> HttpReviewApi {
        HttpReviewApi::new(&server.uri(), None).unwrap()
    }

    #[test]
    fn test_endpoint_encodes_identifier() {
        let api = HttpReviewApi::new("http://localhost:5000", None).unwrap();
        let url = api
            .endpoint(&["api", "prs", "octocat/hello world/7", "diff"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/prs/octocat%2Fhello%20world%2F7/diff"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = HttpReviewApi::new("http://localhost:5000/dashboard/", None).unwrap();
        let url = api.endpoint(&["api", "metrics"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:5000/dashboard/api/metrics");
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = HttpReviewApi::new("mailto:someone@example.com", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_list_pull_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prs"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"id":"1","number":1,"title":"Fix bug","author":"ana","repo":"x"}]"#,
            ))
            .mount(&server)
            .await;

        let prs = api_for(&server).await.list_pull_requests().await.unwrap();

        assert_eq!(prs, vec![PullRequest::new("1", 1, "Fix bug", "ana", "x")]);
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reviews"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).await.list_reviews().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_diff_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prs/1/diff"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .await
            .pull_request_diff(&Identifier::new("1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_diff_body_is_returned_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prs/octo%2Fx%2F2/diff"))
            .respond_with(ResponseTemplate::new(200).set_body_string("--- a.rs ---\n+fn a() {}"))
            .mount(&server)
            .await;

        let diff = api_for(&server)
            .await
            .pull_request_diff(&Identifier::new("octo/x/2"))
            .await
            .unwrap();

        assert_eq!(diff, "--- a.rs ---\n+fn a() {}");
    }

    #[tokio::test]
    async fn test_run_review() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/prs/1/review"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"status":"ok","review":""}"#),
            )
            .mount(&server)
            .await;

        let response = api_for(&server)
            .await
            .run_review(&Identifier::new("1"))
            .await
            .unwrap();

        assert_eq!(response.review_text(), None);
        assert_eq!(response.status.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_metrics() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/metrics"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"total":4,"issues":1,"recent":[{"id":0},{"id":1}]}"#),
            )
            .mount(&server)
            .await;

        let metrics = api_for(&server).await.metrics().await.unwrap();

        assert_eq!(metrics.total, 4);
        assert_eq!(metrics.issues, 1);
        assert_eq!(metrics.recent.len(), 2);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // A port that was just free; nothing listens once the listener is dropped
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let api = HttpReviewApi::new(
            &format!("http://127.0.0.1:{port}"),
            Some(Duration::from_secs(2)),
        )
        .unwrap();

        let err = api.metrics().await.unwrap_err();

        assert!(matches!(err, ApiError::Transport { .. }));
    }
}
