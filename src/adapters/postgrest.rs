//! Row API adapter for the hosted ConnectSphere backend.
//!
//! The backend exposes its tables over a PostgREST-style row API: each table
//! is a resource under `/rest/v1/`, filters ride in the query string as
//! `column=eq.value`, inserts are JSON POSTs, and the unique index on
//! `(post_id, user_id)` answers a duplicate insert with HTTP 409.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{ActivityItem, Post, PostCounters, Profile};
use crate::traits::{DashboardReader, RelationKind, RowStore, StoreError};

/// Connection settings for the row API. Hosts typically deserialize this
/// from their own configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL, without the `/rest/v1` suffix
    pub base_url: String,
    /// Project API key, sent with every request
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Row API client implementing [`RowStore`] and [`DashboardReader`].
///
/// # Example
///
/// ```ignore
/// use connectsphere::adapters::{PostgrestStore, StoreConfig};
///
/// let store = PostgrestStore::new(StoreConfig::new(
///     "https://project.example.com",
///     "public-anon-key",
/// ))
/// .with_auth("viewer-access-token");
/// ```
pub struct PostgrestStore {
    config: StoreConfig,
    /// Reusable HTTP client
    client: Client,
    /// Viewer bearer token; the API key is used as bearer until one is set
    auth_token: Option<String>,
}

impl PostgrestStore {
    /// Create a new store client from connection settings.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            auth_token: None,
        }
    }

    /// Set the viewer's bearer token.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Set or clear the viewer's bearer token on an existing client.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    /// Get the current bearer token, if set.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    /// Helper to add the API key and bearer headers to a request builder.
    fn add_auth_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self.auth_token.as_deref().unwrap_or(&self.config.api_key);
        builder
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }

    /// Convert a reqwest transport error to a store error.
    fn convert_error(err: reqwest::Error) -> StoreError {
        if err.is_timeout() {
            StoreError::unavailable(format!("request timed out: {}", err))
        } else if err.is_connect() {
            StoreError::unavailable(format!("connection failed: {}", err))
        } else {
            StoreError::unavailable(err.to_string())
        }
    }

    /// GET `url` and decode the JSON array the row API answers reads with.
    async fn fetch_rows<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>, StoreError> {
        let builder = self.client.get(&url);
        let response = self
            .add_auth_headers(builder)
            .send()
            .await
            .map_err(Self::convert_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::unavailable(format!(
                "status {}: {}",
                status, message
            )));
        }

        response.json().await.map_err(Self::convert_error)
    }
}

#[async_trait]
impl RowStore for PostgrestStore {
    async fn exists_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<bool, StoreError> {
        let url = format!(
            "{}?select=id&post_id=eq.{}&user_id=eq.{}&limit=1",
            self.table_url(kind.table()),
            urlencoding::encode(post_id),
            urlencoding::encode(viewer_id),
        );

        let rows: Vec<serde_json::Value> = self.fetch_rows(url).await?;
        Ok(!rows.is_empty())
    }

    async fn create_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<(), StoreError> {
        let url = self.table_url(kind.table());
        let body = json!({
            "post_id": post_id,
            "user_id": viewer_id,
        });

        let builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(&body);
        let response = self
            .add_auth_headers(builder)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status();
        // 409 is the unique index on (post_id, user_id) speaking.
        if status.as_u16() == 409 {
            return Err(StoreError::Conflict);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::unavailable(format!(
                "status {}: {}",
                status.as_u16(),
                message
            )));
        }
        Ok(())
    }

    async fn delete_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<(), StoreError> {
        let url = format!(
            "{}?post_id=eq.{}&user_id=eq.{}",
            self.table_url(kind.table()),
            urlencoding::encode(post_id),
            urlencoding::encode(viewer_id),
        );

        let builder = self.client.delete(&url);
        let response = self
            .add_auth_headers(builder)
            .send()
            .await
            .map_err(Self::convert_error)?;

        // The row API answers 204 whether or not a row matched the filter,
        // which is exactly the delete-absent-is-success contract.
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::unavailable(format!(
                "status {}: {}",
                status, message
            )));
        }
        Ok(())
    }

    async fn get_post_counters(&self, post_id: &str) -> Result<PostCounters, StoreError> {
        let url = format!(
            "{}?select=like_count,comment_count,share_count,save_count&id=eq.{}",
            self.table_url("posts"),
            urlencoding::encode(post_id),
        );

        let rows: Vec<PostCounters> = self.fetch_rows(url).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::unavailable(format!("no post row for {}", post_id)))
    }
}

#[async_trait]
impl DashboardReader for PostgrestStore {
    async fn fetch_profile(&self, user_id: &str) -> Result<Profile, StoreError> {
        let url = format!(
            "{}?select=*&id=eq.{}",
            self.table_url("profiles"),
            urlencoding::encode(user_id),
        );

        let rows: Vec<Profile> = self.fetch_rows(url).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::unavailable(format!("no profile row for {}", user_id)))
    }

    async fn fetch_posts_by_author(&self, user_id: &str) -> Result<Vec<Post>, StoreError> {
        let url = format!(
            "{}?select=*&user_id=eq.{}",
            self.table_url("posts"),
            urlencoding::encode(user_id),
        );

        self.fetch_rows(url).await
    }

    async fn fetch_top_posts(&self, user_id: &str, limit: usize) -> Result<Vec<Post>, StoreError> {
        let url = format!(
            "{}?select=*&user_id=eq.{}&order=like_count.desc&limit={}",
            self.table_url("posts"),
            urlencoding::encode(user_id),
            limit,
        );

        self.fetch_rows(url).await
    }

    async fn fetch_recent_activity(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityItem>, StoreError> {
        let url = format!(
            "{}?select=*&user_id=eq.{}&order=created_at.desc&limit={}",
            self.table_url("notifications"),
            urlencoding::encode(user_id),
            limit,
        );

        self.fetch_rows(url).await
    }
}
