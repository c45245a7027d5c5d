//! Fakes and helpers shared by the middleware tests

use crate::store::Store;
use async_trait::async_trait;
use pr_review_client::{
    ApiError, Identifier, Metrics, PullRequest, Review, ReviewApi, ReviewResponse,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type Canned<T> = (Duration, Result<T, u16>);

/// In-memory [`ReviewApi`] with canned responses and optional delays
pub struct FakeApi {
    pull_requests: Mutex<Result<Vec<PullRequest>, u16>>,
    diffs: Mutex<HashMap<String, Canned<String>>>,
    review: Mutex<Canned<ReviewResponse>>,
    pub pull_request_calls: AtomicUsize,
    pub diff_calls: AtomicUsize,
    pub review_calls: AtomicUsize,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            pull_requests: Mutex::new(Ok(Vec::new())),
            diffs: Mutex::new(HashMap::new()),
            review: Mutex::new((Duration::ZERO, Ok(ReviewResponse::default()))),
            pull_request_calls: AtomicUsize::new(0),
            diff_calls: AtomicUsize::new(0),
            review_calls: AtomicUsize::new(0),
        }
    }
}

impl FakeApi {
    pub fn set_pull_requests(&self, result: Result<Vec<PullRequest>, u16>) {
        *self.pull_requests.lock().unwrap() = result;
    }

    pub fn set_diff(&self, id: &str, delay: Duration, result: Result<&str, u16>) {
        self.diffs
            .lock()
            .unwrap()
            .insert(id.to_string(), (delay, result.map(str::to_string)));
    }

    pub fn set_review(&self, delay: Duration, result: Result<Option<&str>, u16>) {
        let result = result.map(|text| ReviewResponse {
            review: text.map(str::to_string),
            status: None,
        });
        *self.review.lock().unwrap() = (delay, result);
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn status_error(status: u16, url: String) -> ApiError {
    ApiError::Status { status, url }
}

#[async_trait]
impl ReviewApi for FakeApi {
    async fn list_pull_requests(&self) -> Result<Vec<PullRequest>, ApiError> {
        self.pull_request_calls.fetch_add(1, Ordering::SeqCst);
        let result = self.pull_requests.lock().unwrap().clone();
        result.map_err(|status| status_error(status, "/api/prs".to_string()))
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        Ok(Vec::new())
    }

    async fn metrics(&self) -> Result<Metrics, ApiError> {
        Ok(Metrics::default())
    }

    async fn pull_request_diff(&self, id: &Identifier) -> Result<String, ApiError> {
        self.diff_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, result) = self
            .diffs
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .unwrap_or((Duration::ZERO, Ok(String::new())));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result.map_err(|status| status_error(status, format!("/api/prs/{}/diff", id)))
    }

    async fn run_review(&self, id: &Identifier) -> Result<ReviewResponse, ApiError> {
        self.review_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, result) = self.review.lock().unwrap().clone();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result.map_err(|status| status_error(status, format!("/api/prs/{}/review", id)))
    }
}

pub fn pr(id: &str) -> PullRequest {
    PullRequest::new(id, 1, format!("PR {}", id), "ana", "octo/app")
}

/// Let spawned tasks run and feed their actions back through the store
pub async fn settle(store: &mut Store) {
    for _ in 0..20 {
        tokio::task::yield_now().await;
        store.drain();
    }
}

/// Advance (paused) time by `duration`, then settle
pub async fn advance(store: &mut Store, duration: Duration) {
    tokio::time::sleep(duration).await;
    settle(store).await;
}
