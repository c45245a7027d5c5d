//! Client for the AI code review backend
//!
//! Provides the wire models served by the backend and the [`ReviewApi`] trait
//! with an HTTP implementation ([`HttpReviewApi`]) covering the five endpoints
//! the dashboard consumes:
//!
//! - `GET /api/prs` - open pull requests
//! - `GET /api/reviews` - reviews produced so far
//! - `GET /api/metrics` - aggregate counters
//! - `GET /api/prs/{id}/diff` - raw diff text
//! - `GET /api/prs/{id}/review` - trigger a review and return its text

mod client;
mod error;
mod models;

pub use client::{HttpReviewApi, ReviewApi};
pub use error::ApiError;
pub use models::{Identifier, Metrics, PullRequest, Review, ReviewResponse, ReviewedPullRequest};
