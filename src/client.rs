use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::model::{Post, PostBody};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode the response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

/// A decoded response from one of the mutating endpoints. The status is kept as-is, callers
/// decide whether it matters.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET /posts`. Any non-2xx status is an error.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// `POST /posts/create`
    async fn create_post(&self, token: Option<&str>, body: &PostBody) -> Result<Reply>;

    /// `PUT /posts/edit/:id`
    async fn update_post(&self, token: Option<&str>, id: i64, body: &PostBody) -> Result<Reply>;

    /// `DELETE /posts/delete/:id`
    async fn delete_post(&self, token: Option<&str>, id: i64) -> Result<Reply>;
}

#[derive(Clone, Debug)]
pub struct HttpPostsClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPostsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Requests wait indefinitely unless a timeout is given.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("postdeck/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: String) -> Result<Reply> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("{url} responded with {status}");

        let body = serde_json::from_str(&text).map_err(|source| Error::Decode { url, source })?;

        Ok(Reply { status, body })
    }
}

#[async_trait]
impl PostsApi for HttpPostsClient {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let url = self.url("/posts");
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url,
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| Error::Decode { url, source })
    }

    async fn create_post(&self, token: Option<&str>, body: &PostBody) -> Result<Reply> {
        let url = self.url("/posts/create");
        let request = Self::authorize(self.http.post(&url), token).json(body);

        self.send(request, url).await
    }

    async fn update_post(&self, token: Option<&str>, id: i64, body: &PostBody) -> Result<Reply> {
        let url = self.url(&format!("/posts/edit/{id}"));
        let request = Self::authorize(self.http.put(&url), token).json(body);

        self.send(request, url).await
    }

    async fn delete_post(&self, token: Option<&str>, id: i64) -> Result<Reply> {
        let url = self.url(&format!("/posts/delete/{id}"));
        let request = Self::authorize(self.http.delete(&url), token);

        self.send(request, url).await
    }
}
