use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::Settings;
use crate::error::ShopbyError;
use crate::http_client::{
    HttpAuth, HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

/// API version sent when an endpoint does not pin its own.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Ordered query parameters. Absent values are skipped rather than sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.0.push((key.to_owned(), value.to_string()));
        self
    }

    pub fn push_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Comma-joins `values`; nothing is pushed for an empty slice.
    pub fn push_list<V: Display>(&mut self, key: &str, values: &[V]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.push(key, joined);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

/// Authenticated client for the shopby server API.
///
/// Every request carries `Authorization: Bearer <token>`, `systemKey` and a
/// per-endpoint `version` header. Responses pass through
/// [`ServerApiClient::handle_response`], which logs failures before returning
/// them as [`ShopbyError`].
#[derive(Clone)]
pub struct ServerApiClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    auth: HttpAuth,
    system_key: String,
    timeout_ms: u64,
}

impl ServerApiClient {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        system_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http_client,
            base_url,
            auth: HttpAuth::BearerToken(access_token.into()),
            system_key: system_key.into(),
            timeout_ms: crate::config::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Builds a client backed by reqwest.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::from_settings_with_http_client(settings, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn from_settings_with_http_client(
        settings: &Settings,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self::new(
            http_client,
            settings.base_url.as_str(),
            settings.access_token.as_str(),
            settings.system_key.as_str(),
        )
        .with_timeout_ms(settings.timeout_ms)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request for `path` with the common headers applied.
    pub fn request(&self, method: HttpMethod, path: &str, version: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{path}", self.base_url))
            .with_auth(&self.auth)
            .with_header("systemKey", &self.system_key)
            .with_header("version", version)
            .with_timeout_ms(self.timeout_ms)
    }

    pub async fn get<T>(&self, path: &str, version: &str, query: QueryParams) -> Result<T, ShopbyError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .request(HttpMethod::Get, path, version)
            .with_query(query.into_pairs());
        self.send(request).await
    }

    pub async fn post<B, T>(&self, path: &str, version: &str, body: &B) -> Result<T, ShopbyError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(HttpMethod::Post, path, version)
            .with_json_body(serde_json::to_string(body)?);
        self.send(request).await
    }

    pub async fn patch<B>(&self, path: &str, version: &str, body: &B) -> Result<(), ShopbyError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .request(HttpMethod::Patch, path, version)
            .with_json_body(serde_json::to_string(body)?);
        self.send_expect_empty(request).await
    }

    pub async fn delete(&self, path: &str, version: &str, query: QueryParams) -> Result<(), ShopbyError> {
        let request = self
            .request(HttpMethod::Delete, path, version)
            .with_query(query.into_pairs());
        self.send_expect_empty(request).await
    }

    /// Executes `request` and decodes the body as `T`.
    pub async fn send<T>(&self, request: HttpRequest) -> Result<T, ShopbyError>
    where
        T: DeserializeOwned,
    {
        let method = request.method;
        let url = request.full_url();
        let response = self.execute(request).await?;
        Self::handle_response(method, &url, &response)
    }

    /// Executes `request`, checks the status and ignores the body.
    pub async fn send_expect_empty(&self, request: HttpRequest) -> Result<(), ShopbyError> {
        let method = request.method;
        let url = request.full_url();
        let response = self.execute(request).await?;
        Self::check_status(method, &url, &response)
    }

    /// Status check plus schema validation of a success body.
    pub fn handle_response<T>(
        method: HttpMethod,
        url: &str,
        response: &HttpResponse,
    ) -> Result<T, ShopbyError>
    where
        T: DeserializeOwned,
    {
        Self::check_status(method, url, response)?;

        serde_json::from_str(&response.body).map_err(|source| {
            error!(
                url = %url,
                error = %source,
                body = %response.body,
                "shopby response failed validation"
            );
            ShopbyError::Decode {
                url: url.to_owned(),
                message: source.to_string(),
                body: response.body.clone(),
            }
        })
    }

    fn check_status(method: HttpMethod, url: &str, response: &HttpResponse) -> Result<(), ShopbyError> {
        if response.is_success() {
            return Ok(());
        }

        error!(
            status = response.status,
            method = %method,
            url = %url,
            body = %render_body(&response.body),
            "shopby API request failed"
        );
        Err(ShopbyError::Status {
            status: response.status,
            method,
            url: url.to_owned(),
            body: response.body.clone(),
        })
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ShopbyError> {
        debug!(
            method = %request.method,
            url = %request.url,
            version = request.header("version").unwrap_or(DEFAULT_API_VERSION),
            "sending shopby request"
        );
        let response = self.http_client.execute(request).await?;
        debug!(status = response.status, "received shopby response");
        Ok(response)
    }
}

impl Debug for ServerApiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerApiClient")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .field("system_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Pretty JSON when the body parses, raw text otherwise.
fn render_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_owned())
}
