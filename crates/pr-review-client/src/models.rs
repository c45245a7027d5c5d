//! Wire models
//!
//! Every payload is decoded into an explicit type at the boundary. Fields the
//! backend may omit (or send as `null`) fall back to their defaults here, so
//! nothing downstream has to second-guess the shape of a response.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier as sent by the backend
///
/// The backend is free to use strings (`"octocat/hello/7"`) or numbers (`3`);
/// both are kept as text and only ever compared or echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Integer(n) => Self(n.to_string()),
            Raw::Float(n) => Self(n.to_string()),
        })
    }
}

/// An open pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: Identifier,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// Repository name, e.g. `octocat/hello-world`
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: String,
    #[serde(default)]
    status: Option<String>,
    /// Link to the pull request on the forge
    #[serde(default)]
    pub url: Option<String>,
}

impl PullRequest {
    pub fn new(
        id: impl Into<Identifier>,
        number: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            title: title.into(),
            author: author.into(),
            repo: repo.into(),
            status: None,
            url: None,
        }
    }

    /// Free-text status, `"open"` when the backend sent none
    pub fn status(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => "open",
        }
    }
}

/// The part of a pull request embedded in a [`Review`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewedPullRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub number: Option<Identifier>,
}

/// A review produced by the AI review engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Identifier,
    #[serde(default)]
    pub pr_id: Option<Identifier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pr: ReviewedPullRequest,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    /// Naive local time as written by the backend; unparseable values are dropped
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}

/// Aggregate counters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Total number of pull requests known to the backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    /// Number of reviews that flagged issues
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: u64,
    /// Recent items; opaque, only the count is shown
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent: Vec<serde_json::Value>,
}

/// Body of `GET /api/prs/{id}/review`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewResponse {
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ReviewResponse {
    /// The review text, if the backend produced a non-empty one
    pub fn review_text(&self) -> Option<&str> {
        self.review.as_deref().filter(|text| !text.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|text| text.parse::<NaiveDateTime>().ok()))
}
