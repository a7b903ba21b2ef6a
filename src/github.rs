//! GitHub REST API client and response models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "issue-browser";

/// Fixed page size for issue listings.
pub const PER_PAGE: u32 = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub owner: Owner,
}

/// A user account, both as repository owner and as issue reporter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    pub user: Owner,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Label {
    pub id: u64,
    pub name: String,
}

/// Which issues to list, matching the API's `state` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IssueFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl IssueFilter {
    pub const VARIANTS: [IssueFilter; 3] =
        [IssueFilter::Open, IssueFilter::Closed, IssueFilter::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueFilter::Open => "open",
            IssueFilter::Closed => "closed",
            IssueFilter::All => "all",
        }
    }

    /// Button caption for this filter.
    pub fn label(&self) -> &'static str {
        match self {
            IssueFilter::Open => "Open",
            IssueFilter::Closed => "Closed",
            IssueFilter::All => "All",
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GithubError {
    #[error("Repository not found.")]
    NotFound,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("GitHub API error: {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Decode the URL-escaped `owner/name` route parameter. Input that cannot be
/// decoded is passed through unchanged.
pub fn decode_repo_name(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

pub fn issues_url(name: &str, filter: IssueFilter, page: u32) -> String {
    format!(
        "{}/repos/{}/issues?state={}&per_page={}&page={}",
        API_BASE,
        name,
        filter.as_str(),
        PER_PAGE,
        page
    )
}

async fn get(url: &str) -> Result<reqwasm::http::Response, GithubError> {
    let response = reqwasm::http::Request::get(url)
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|e| GithubError::Network(format!("{:?}", e)))?;

    match response.status() {
        404 => Err(GithubError::NotFound),
        403 => Err(GithubError::RateLimited),
        _ if !response.ok() => Err(GithubError::Status(response.status())),
        _ => Ok(response),
    }
}

pub async fn fetch_repository(name: &str) -> Result<Repository, GithubError> {
    let response = get(&format!("{}/repos/{}", API_BASE, name)).await?;

    response
        .json::<Repository>()
        .await
        .map_err(|e| GithubError::Decode(format!("{:?}", e)))
}

pub async fn fetch_issues(
    name: &str,
    filter: IssueFilter,
    page: u32,
) -> Result<Vec<Issue>, GithubError> {
    let response = get(&issues_url(name, filter, page)).await?;

    response
        .json::<Vec<Issue>>()
        .await
        .map_err(|e| GithubError::Decode(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_url_carries_state_page_size_and_page() {
        assert_eq!(
            issues_url("facebook/react", IssueFilter::Open, 1),
            "https://api.github.com/repos/facebook/react/issues?state=open&per_page=5&page=1"
        );
    }

    #[test]
    fn issues_url_reflects_filter_and_page() {
        assert_eq!(
            issues_url("rust-lang/rust", IssueFilter::Closed, 3),
            "https://api.github.com/repos/rust-lang/rust/issues?state=closed&per_page=5&page=3"
        );
    }

    #[test]
    fn filter_wire_values_match_the_api() {
        assert_eq!(IssueFilter::Open.as_str(), "open");
        assert_eq!(IssueFilter::Closed.as_str(), "closed");
        assert_eq!(IssueFilter::All.as_str(), "all");
    }

    #[test]
    fn escaped_repo_name_is_decoded() {
        assert_eq!(decode_repo_name("facebook%2Freact"), "facebook/react");
    }

    #[test]
    fn unescaped_repo_name_passes_through() {
        assert_eq!(decode_repo_name("tokio-rs/tokio"), "tokio-rs/tokio");
    }

    #[test]
    fn issue_payload_deserializes() {
        let payload = r#"{
            "id": 42,
            "title": "Panic on empty input",
            "html_url": "https://github.com/rust-lang/rust/issues/42",
            "state": "open",
            "user": { "login": "octocat", "avatar_url": "https://avatars.example/1" },
            "labels": [ { "id": 7, "name": "bug" } ]
        }"#;

        let issue: Issue = serde_json::from_str(payload).unwrap();
        assert_eq!(issue.id, 42);
        assert_eq!(issue.state, "open");
        assert_eq!(issue.labels.len(), 1);
        assert_eq!(issue.labels[0].name, "bug");
    }

    #[test]
    fn issue_without_labels_deserializes_to_empty_list() {
        let payload = r#"{
            "id": 7,
            "title": "Docs typo",
            "html_url": "https://github.com/rust-lang/rust/issues/7",
            "state": "closed",
            "user": { "login": "octocat", "avatar_url": "https://avatars.example/1" }
        }"#;

        let issue: Issue = serde_json::from_str(payload).unwrap();
        assert!(issue.labels.is_empty());
    }
}
