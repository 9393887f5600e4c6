//! HTTP client for the remote record store.
//!
//! The remote is a record-oriented REST service (Supabase-flavored): the
//! `resellers` collection supports select-all, insert-one, update-by-id and
//! delete-by-id, with writes returning the affected row under
//! `Prefer: return=representation`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};

use crate::error::StoreError;
use crate::wire::{NewResellerRow, PatchRow, ResellerRow};

const COLLECTION_PATH: &str = "rest/v1/resellers";

/// Client for the `resellers` collection.
///
/// Use [`RecordClient::new`] with the configured remote base URL; point it at
/// a mock server in tests.
pub struct RecordClient {
    client: Client,
    collection_url: Url,
    api_key: Option<String>,
}

impl RecordClient {
    /// Creates a client for the given remote base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`StoreError::InvalidBaseUrl`] if `base_url` is not
    /// a valid URL.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent.to_owned())
            .build()?;

        // Normalise: a trailing slash makes join() append instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let collection_url = Url::parse(&normalised)
            .and_then(|base| base.join(COLLECTION_PATH))
            .map_err(|e| StoreError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            collection_url,
            api_key: api_key.map(str::to_owned),
        })
    }

    /// Fetches every row of the collection.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Http`] on network failure.
    /// - [`StoreError::UnexpectedStatus`] on a non-2xx response.
    /// - [`StoreError::Deserialize`] if the body does not match the row shape.
    pub async fn select_all(&self) -> Result<Vec<ResellerRow>, StoreError> {
        let mut url = self.collection_url.clone();
        url.query_pairs_mut().append_pair("select", "*");
        let body = self.send(self.client.get(url.clone()), &url).await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Inserts one row and returns the server representation, including the
    /// generated id.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`RecordClient::select_all`], plus
    /// [`StoreError::EmptyResponse`] if the remote returns no row.
    pub async fn insert_one(&self, row: &NewResellerRow) -> Result<ResellerRow, StoreError> {
        let url = self.collection_url.clone();
        let builder = self
            .client
            .post(url.clone())
            .header("Prefer", "return=representation")
            .json(&[row]);
        let body = self.send(builder, &url).await?;
        Self::first_row(&body, &url, "insert")
    }

    /// Applies a partial update to the row with the given id and returns the
    /// updated representation.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`RecordClient::insert_one`];
    /// [`StoreError::EmptyResponse`] in particular means no row matched `id`.
    pub async fn update_by_id(&self, id: i64, patch: &PatchRow) -> Result<ResellerRow, StoreError> {
        let url = self.id_filter_url(id);
        let builder = self
            .client
            .patch(url.clone())
            .header("Prefer", "return=representation")
            .json(patch);
        let body = self.send(builder, &url).await?;
        Self::first_row(&body, &url, "update")
    }

    /// Deletes the row with the given id.
    ///
    /// A filter that matches nothing still succeeds on the remote side; that
    /// outcome is reported as `Ok` here, mirroring what the remote reports.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Http`] on network failure.
    /// - [`StoreError::UnexpectedStatus`] on a non-2xx response.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let url = self.id_filter_url(id);
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }

    fn id_filter_url(&self, id: i64) -> Url {
        let mut url = self.collection_url.clone();
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
        url
    }

    /// Attaches auth headers, sends, and asserts a 2xx status.
    async fn send(&self, builder: RequestBuilder, url: &Url) -> Result<String, StoreError> {
        let builder = match &self.api_key {
            Some(key) => builder.header("apikey", key).bearer_auth(key),
            None => builder,
        };
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }

    /// Writes return the affected rows as an array; callers want exactly one.
    fn first_row(body: &str, url: &Url, operation: &str) -> Result<ResellerRow, StoreError> {
        let rows: Vec<ResellerRow> =
            serde_json::from_str(body).map_err(|e| StoreError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::EmptyResponse {
                context: format!("{operation} at {url}"),
            })
    }
}
