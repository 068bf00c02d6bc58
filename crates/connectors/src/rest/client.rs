use crate::{config::BackendConfig, error::BackendError};
use reqwest::{
    Client, Response,
    header::{AUTHORIZATION, CONTENT_RANGE, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

const APPLICATION_NAME: &str = "stockflow";

/// Thin PostgREST-dialect client for the hosted database service.
///
/// Built once per process and injected as an explicit dependency into every
/// flow that talks to the backend. Failures are returned to the caller
/// unmodified; nothing here retries.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base: String,
}

/// Error body shape returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl RestClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|err| BackendError::Credentials(err.to_string()))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|err| BackendError::Credentials(err.to_string()))?;
        bearer.set_sensitive(true);
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("x-application-name", HeaderValue::from_static(APPLICATION_NAME));

        let http = Client::builder().default_headers(headers).build()?;
        Ok(RestClient {
            http,
            base: config.url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base, function)
    }

    /// POST returning the inserted row (`Prefer: return=representation`).
    pub async fn insert_one<B, T>(&self, table: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("insert into {table}");
        let resp = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let mut rows: Vec<T> = check(resp).await?.json().await?;
        if rows.is_empty() {
            return Err(BackendError::NotFound(table.to_string()));
        }
        Ok(rows.remove(0))
    }

    /// Bulk POST with `Prefer: count=exact`. Returns the exact count the
    /// backend reports in `Content-Range`, falling back to the payload
    /// length when the header is absent or unparseable.
    pub async fn insert_bulk<B: Serialize>(
        &self,
        table: &str,
        body: &[B],
    ) -> Result<u64, BackendError> {
        debug!("bulk insert of {} rows into {table}", body.len());
        let resp = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "count=exact")
            .json(&body)
            .send()
            .await?;
        let resp = check(resp).await?;
        let reported = resp
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(content_range_total);
        Ok(reported.unwrap_or(body.len() as u64))
    }

    /// GET with PostgREST query-string filters.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, BackendError> {
        let resp = self
            .http
            .get(self.table_url(table))
            .query(query)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// GET expecting exactly one row; an empty result is a not-found error.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let mut rows: Vec<T> = self.select(table, query).await?;
        if rows.is_empty() {
            return Err(BackendError::NotFound(table.to_string()));
        }
        Ok(rows.remove(0))
    }

    /// PATCH every row matching the filters.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        table: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<(), BackendError> {
        let resp = self
            .http
            .patch(self.table_url(table))
            .query(query)
            .json(body)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// DELETE every row matching the filters.
    pub async fn delete(&self, table: &str, query: &[(&str, String)]) -> Result<(), BackendError> {
        let resp = self
            .http
            .delete(self.table_url(table))
            .query(query)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Invokes a named remote procedure with JSON arguments.
    pub async fn rpc<A, T>(&self, function: &str, args: &A) -> Result<T, BackendError>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("rpc {function}");
        let resp = self
            .http
            .post(self.rpc_url(function))
            .json(args)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

/// Converts a non-2xx response into `BackendError::Api`, using the message
/// from the backend's error body when one can be decoded.
async fn check(resp: Response) -> Result<Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    Err(api_error(status.as_u16(), text))
}

fn api_error(status: u16, body: String) -> BackendError {
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|body| body.message)
        .unwrap_or(body);
    BackendError::Api { status, message }
}

/// Total row count out of a `Content-Range` value like `0-41/42` or `*/2`.
fn content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}
