use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repositories requested per run. Only the first page is ever fetched.
pub const REPOS_PER_PAGE: u32 = 100;

/// The subset of `/users/{username}` the page consumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub followers: u64,
    pub public_repos: u64,
}

/// The subset of a `/users/{username}/repos` entry the page consumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// Unauthenticated client for the public GitHub REST API.
#[derive(Clone)]
pub struct GithubClient {
    api_base: Arc<String>,
    http: Arc<Client>,
}

impl GithubClient {
    /// Create a client rooted at `api_base` (normally [`DEFAULT_API_BASE`]).
    pub fn new(api_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("portfolio-page"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_base: Arc::new(api_base.trim_end_matches('/').to_string()),
            http: Arc::new(http),
        })
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{username}", self.api_base)
    }

    pub fn repositories_url(&self, username: &str) -> String {
        format!(
            "{}/users/{username}/repos?per_page={REPOS_PER_PAGE}&sort=updated",
            self.api_base
        )
    }

    /// Single GET with no retry. Transport errors, non-2xx statuses and
    /// undecodable bodies each produce their own error message.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Network error requesting {url}"))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("Network error reading body of {url}"))?;

        if !status.is_success() {
            anyhow::bail!("GitHub API returned HTTP {} for {url}: {body}", status.as_u16());
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse JSON from GitHub for {url}"))
    }

    /// Follower and public repository counts for `username`.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        let url = self.profile_url(username);
        self.get_json(&url)
            .await
            .context("Failed to fetch profile")
    }

    /// Up to [`REPOS_PER_PAGE`] repositories, most recently updated first,
    /// in the order GitHub returns them.
    pub async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = self.repositories_url(username);
        self.get_json(&url)
            .await
            .context("Failed to fetch repositories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_request_urls() {
        let client = GithubClient::new("https://api.github.com/").unwrap();
        assert_eq!(
            client.profile_url("octocat"),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client.repositories_url("octocat"),
            "https://api.github.com/users/octocat/repos?per_page=100&sort=updated"
        );
    }

    #[test]
    fn profile_ignores_unknown_fields() {
        let body = r#"{
            "login": "octocat",
            "id": 583231,
            "followers": 42,
            "following": 9,
            "public_repos": 7,
            "bio": null
        }"#;
        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(
            profile,
            Profile {
                followers: 42,
                public_repos: 7
            }
        );
    }

    #[test]
    fn repositories_keep_upstream_order() {
        let body = r#"[
            {"id": 9, "name": "zeta", "html_url": "https://github.com/o/zeta",
             "stargazers_count": 1, "forks_count": 0, "language": "Rust"},
            {"id": 2, "name": "alpha", "html_url": "https://github.com/o/alpha",
             "stargazers_count": 0, "forks_count": 4, "fork": true}
        ]"#;
        let repos: Vec<Repository> = serde_json::from_str(body).unwrap();
        let ids: Vec<u64> = repos.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2]);
        assert_eq!(repos[1].forks_count, 4);
    }

    #[test]
    fn profile_missing_counts_is_rejected() {
        let err = serde_json::from_str::<Profile>(r#"{"message": "Not Found"}"#);
        assert!(err.is_err());
    }
}
