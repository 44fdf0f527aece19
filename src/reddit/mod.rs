//! Reddit content source
//!
//! Fetches hot submissions and their top-level comments from a subreddit
//! through the OAuth API (client-credentials grant, script-style app).
//! The pipeline only depends on the [`ContentSource`] trait; this client is
//! the production implementation.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::RedditConfig;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const OAUTH_BASE_URL: &str = "https://oauth.reddit.com";

/// Construction-time misconfiguration of the Reddit client.
#[derive(Debug, Error)]
pub enum RedditError {
    #[error("Reddit credential {0} is not set (check .env / config)")]
    MissingCredential(&'static str),
}

/// One submission with its top-level comments.
#[derive(Debug, Clone, Default)]
pub struct Post {
    pub title: String,
    pub url: String,
    /// Self-text body; empty for link posts
    pub text: String,
    pub comments: Vec<Comment>,
}

/// One top-level comment body.
#[derive(Debug, Clone)]
pub struct Comment {
    pub text: String,
}

/// External collaborator producing the raw text batch.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch up to `limit` hot posts with their top-level comments.
    async fn fetch_hot_posts(&self, limit: usize) -> Result<Vec<Post>>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<Thing<T>>,
}

#[derive(Debug, Deserialize)]
struct Thing<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct SubmissionData {
    id: String,
    title: String,
    url: String,
    #[serde(default)]
    selftext: String,
}

/// OAuth client for the subreddit hot listing.
pub struct RedditClient {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    subreddit: String,
    base_url: String,
    token_url: String,
}

impl RedditClient {
    /// Build a client from config, refusing missing or placeholder
    /// credentials up front.
    pub fn new(cfg: &RedditConfig) -> Result<Self> {
        if cfg.client_id.is_empty() || cfg.client_id.starts_with("your_") {
            return Err(RedditError::MissingCredential("client_id").into());
        }
        if cfg.client_secret.is_empty() || cfg.client_secret.starts_with("your_") {
            return Err(RedditError::MissingCredential("client_secret").into());
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(cfg.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            client_id: cfg.client_id.clone(),
            client_secret: cfg.client_secret.clone(),
            subreddit: cfg.subreddit.clone(),
            base_url: OAUTH_BASE_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
        })
    }

    async fn access_token(&self) -> Result<String> {
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context("Failed to request Reddit access token")?;

        if !response.status().is_success() {
            bail!("Reddit token endpoint returned error: {}", response.status());
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("Failed to parse Reddit token response")?;
        Ok(token.access_token)
    }

    async fn fetch_hot(&self, token: &str, limit: usize) -> Result<Vec<SubmissionData>> {
        let url = format!("{}/r/{}/hot?limit={}", self.base_url, self.subreddit, limit);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to fetch hot listing")?;

        if !response.status().is_success() {
            bail!("Reddit listing returned error: {}", response.status());
        }

        let listing: Listing<SubmissionData> = response
            .json()
            .await
            .context("Failed to parse hot listing")?;
        Ok(listing.data.children.into_iter().map(|t| t.data).collect())
    }

    /// Fetch top-level comment bodies for one submission. Nested replies
    /// and "load more" stubs are ignored.
    async fn fetch_top_level_comments(&self, token: &str, id: &str) -> Result<Vec<Comment>> {
        let url = format!(
            "{}/r/{}/comments/{}?depth=1&limit=100",
            self.base_url, self.subreddit, id
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .with_context(|| format!("Failed to fetch comments for {}", id))?;

        if !response.status().is_success() {
            bail!("Reddit comments returned error: {}", response.status());
        }

        // Response is [submission listing, comment listing]; comments of
        // kind "t1" carry a body, "more" stubs do not.
        let body: serde_json::Value = response
            .json()
            .await
            .with_context(|| format!("Failed to parse comments for {}", id))?;

        let children = body
            .pointer("/1/data/children")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();

        let comments = children
            .iter()
            .filter(|child| child.get("kind").and_then(|k| k.as_str()) == Some("t1"))
            .filter_map(|child| child.pointer("/data/body").and_then(|b| b.as_str()))
            .map(|text| Comment {
                text: text.to_string(),
            })
            .collect();
        Ok(comments)
    }
}

#[async_trait]
impl ContentSource for RedditClient {
    async fn fetch_hot_posts(&self, limit: usize) -> Result<Vec<Post>> {
        let token = self.access_token().await?;
        let submissions = self.fetch_hot(&token, limit).await?;
        debug!(
            subreddit = %self.subreddit,
            count = submissions.len(),
            "hot listing fetched"
        );

        let mut posts = Vec::with_capacity(submissions.len());
        for submission in submissions {
            // A comment fetch failing for one post should not sink the
            // batch; the post still contributes its title and self-text.
            let comments = match self.fetch_top_level_comments(&token, &submission.id).await {
                Ok(comments) => comments,
                Err(err) => {
                    warn!(post = %submission.id, error = %err, "comment fetch failed");
                    Vec::new()
                }
            };
            posts.push(Post {
                title: submission.title,
                url: submission.url,
                text: submission.selftext,
                comments,
            });
        }
        Ok(posts)
    }
}
