//! Generic HTTP data-access service.

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use super::error::{ApiError, ApiResult};
use super::paging::{ListEnvelope, PagedEnvelope, PagedResult};
use super::params::{ApiParams, BodyEncoding};
use crate::cookie::CookieStore;
use crate::events::{EventBus, GlobalEvent};

/// Default bound for the PUT form of `upload_paged`
pub const UPLOAD_TIMEOUT_SECS: u64 = 60;

/// Locale sent when no `lang` cookie is set
pub const DEFAULT_LOCALE: &str = "ja";

/// Configuration for [`ApiService`]
#[derive(Debug, Clone)]
pub struct ApiServiceConfig {
    /// Base URL every path is appended to (e.g., "http://localhost:3000/api")
    pub base_url: String,
    /// Send the cookie jar with every request
    pub with_credentials: bool,
    /// Locale used when the `lang` cookie is empty
    pub default_locale: String,
    /// Bound on the PUT form of `upload_paged`, in seconds
    pub upload_timeout_secs: u64,
}

impl Default for ApiServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            with_credentials: true,
            default_locale: DEFAULT_LOCALE.to_string(),
            upload_timeout_secs: UPLOAD_TIMEOUT_SECS,
        }
    }
}

impl ApiServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Which method an upload uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadMethod {
    #[default]
    Post,
    Put,
}

impl UploadMethod {
    fn method(self) -> Method {
        match self {
            UploadMethod::Post => Method::POST,
            UploadMethod::Put => Method::PUT,
        }
    }
}

/// Typed access to the statistics API
///
/// Every call injects the `lang` parameter from the cookie jar, and every
/// failure goes through one handler: a 401 publishes
/// [`GlobalEvent::AuthFailed`] on the event bus, anything else is returned
/// with its parsed error body.
pub struct ApiService {
    client: Client,
    config: ApiServiceConfig,
    cookies: Arc<CookieStore>,
    events: Arc<EventBus>,
}

impl ApiService {
    pub fn new(config: ApiServiceConfig, cookies: Arc<CookieStore>, events: Arc<EventBus>) -> Self {
        Self::with_client(Client::new(), config, cookies, events)
    }

    /// Use a preconfigured `reqwest` client
    pub fn with_client(
        client: Client,
        config: ApiServiceConfig,
        cookies: Arc<CookieStore>,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            client,
            config,
            cookies,
            events,
        }
    }

    pub fn config(&self) -> &ApiServiceConfig {
        &self.config
    }

    pub fn cookies(&self) -> &Arc<CookieStore> {
        &self.cookies
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    // ============ Reads ============

    /// GET a single object
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: ApiParams) -> ApiResult<T> {
        let text = self.send_query(Method::GET, path, params).await?;
        decode(path, &text)
    }

    /// GET a `{data: [...]}` list
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
    ) -> ApiResult<Vec<T>> {
        let text = self.send_query(Method::GET, path, params).await?;
        decode::<ListEnvelope<T>>(path, &text).map(ListEnvelope::into_items)
    }

    /// GET a `{data: [...], totalRecords: N}` page
    pub async fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
    ) -> ApiResult<PagedResult<T>> {
        let text = self.send_query(Method::GET, path, params).await?;
        decode_paged(path, &text)
    }

    /// GET untyped JSON
    pub async fn get_dynamic(&self, path: &str, params: ApiParams) -> ApiResult<Value> {
        let text = self.send_query(Method::GET, path, params).await?;
        decode(path, &text)
    }

    // ============ Writes ============

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
        encoding: BodyEncoding,
    ) -> ApiResult<T> {
        let text = self.send_body(Method::POST, path, params, encoding).await?;
        decode(path, &text)
    }

    pub async fn post_all<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
        encoding: BodyEncoding,
    ) -> ApiResult<Vec<T>> {
        let text = self.send_body(Method::POST, path, params, encoding).await?;
        decode::<ListEnvelope<T>>(path, &text).map(ListEnvelope::into_items)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
        encoding: BodyEncoding,
    ) -> ApiResult<T> {
        let text = self.send_body(Method::PUT, path, params, encoding).await?;
        decode(path, &text)
    }

    pub async fn put_all<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
        encoding: BodyEncoding,
    ) -> ApiResult<Vec<T>> {
        let text = self.send_body(Method::PUT, path, params, encoding).await?;
        decode::<ListEnvelope<T>>(path, &text).map(ListEnvelope::into_items)
    }

    /// DELETE with the parameters as a JSON body
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, params: ApiParams) -> ApiResult<T> {
        let text = self
            .send_body(Method::DELETE, path, params, BodyEncoding::Json)
            .await?;
        decode(path, &text)
    }

    // ============ Uploads ============

    /// Multipart upload of the parameters and attached files
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
        method: UploadMethod,
    ) -> ApiResult<T> {
        let text = self.send_multipart(method, path, params, None).await?;
        decode(path, &text)
    }

    /// Multipart upload answered with a page. The PUT form is bounded by
    /// `upload_timeout_secs` ([`UPLOAD_TIMEOUT_SECS`] unless configured).
    pub async fn upload_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        params: ApiParams,
        method: UploadMethod,
    ) -> ApiResult<PagedResult<T>> {
        let timeout = match method {
            UploadMethod::Put => Some(Duration::from_secs(self.config.upload_timeout_secs)),
            UploadMethod::Post => None,
        };
        let text = self.send_multipart(method, path, params, timeout).await?;
        decode_paged(path, &text)
    }

    // ============ Request building ============

    fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Add `lang` from the cookie jar, falling back to the default locale
    fn localize(&self, mut params: ApiParams) -> ApiParams {
        let lang = self.cookies.language();
        let lang = if lang.is_empty() {
            self.config.default_locale.clone()
        } else {
            lang
        };
        params.insert("lang", lang);
        params
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if self.config.with_credentials {
            if let Some(cookie) = self.cookies.request_header() {
                builder = builder.header(COOKIE, cookie);
            }
        }
        builder
    }

    async fn send_query(&self, method: Method, path: &str, params: ApiParams) -> ApiResult<String> {
        let params = self.localize(params);
        let builder = self.request(method.clone(), path).query(&params.query_pairs());
        self.execute(&method, path, builder, None).await
    }

    async fn send_body(
        &self,
        method: Method,
        path: &str,
        params: ApiParams,
        encoding: BodyEncoding,
    ) -> ApiResult<String> {
        let params = self.localize(params);
        let mut builder = self
            .request(method.clone(), path)
            .header(CONTENT_TYPE, encoding.content_type())
            .body(params.encode_body(encoding));
        // POST and PUT repeat the parameters in the query string; DELETE does not.
        if method != Method::DELETE {
            builder = builder.query(&params.query_pairs());
        }
        self.execute(&method, path, builder, None).await
    }

    async fn send_multipart(
        &self,
        method: UploadMethod,
        path: &str,
        params: ApiParams,
        timeout: Option<Duration>,
    ) -> ApiResult<String> {
        let params = self.localize(params);
        let form = params.to_multipart()?;

        // No explicit Content-Type: the multipart boundary is set by the client.
        let method = method.method();
        let mut builder = self
            .request(method.clone(), path)
            .query(&params.query_pairs())
            .multipart(form);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        self.execute(&method, path, builder, timeout).await
    }

    /// Send and return the body of a 2xx response; everything else is
    /// routed through [`Self::handle_error`].
    async fn execute(
        &self,
        method: &Method,
        path: &str,
        builder: RequestBuilder,
        timeout: Option<Duration>,
    ) -> ApiResult<String> {
        tracing::debug!(method = %method, path = %path, "API request");

        let outcome = async {
            let response = builder.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        }
        .await;

        match outcome {
            Ok((status, text)) if status.is_success() => {
                tracing::debug!(method = %method, path = %path, status = status.as_u16(), "API response");
                Ok(text)
            }
            Ok((status, text)) => Err(self.handle_error(path, status.as_u16(), &text)),
            Err(e) if e.is_timeout() => {
                let secs = timeout.map(|t| t.as_secs()).unwrap_or_default();
                tracing::warn!(path = %path, timeout_secs = secs, "API request timed out");
                Err(ApiError::Timeout(secs))
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "API request failed");
                Err(ApiError::Transport(e))
            }
        }
    }

    /// Single funnel for non-2xx responses
    fn handle_error(&self, path: &str, status: u16, text: &str) -> ApiError {
        let body = serde_json::from_str::<Value>(text).unwrap_or_else(|_| {
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text.to_string())
            }
        });

        if status == 401 {
            // The session is gone; listeners take care of the sign-in redirect.
            tracing::warn!(path = %path, "API rejected credentials");
            self.events
                .publish_forced(GlobalEvent::AuthFailed, body.clone());
            ApiError::Unauthorized { body }
        } else {
            tracing::warn!(path = %path, status = status, body = %body, "API error response");
            ApiError::Status { status, body }
        }
    }
}

fn decode<T: DeserializeOwned>(path: &str, text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn decode_paged<T: DeserializeOwned>(path: &str, text: &str) -> ApiResult<PagedResult<T>> {
    decode::<PagedEnvelope<T>>(path, text)?
        .into_result()
        .map_err(|message| ApiError::Decode {
            path: path.to_string(),
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FilePart;
    use axum::{
        http::{header, HeaderMap, StatusCode, Uri},
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Profile {
        name: String,
        followers: u64,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct YearCount {
        year: i32,
        count: u64,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Echo {
        method: String,
        content_type: Option<String>,
        cookie: Option<String>,
        query: Option<String>,
        body: String,
    }

    async fn echo(method: axum::http::Method, headers: HeaderMap, uri: Uri, body: String) -> Json<Value> {
        let header_value = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        Json(json!({
            "method": method.as_str(),
            "contentType": header_value(header::CONTENT_TYPE),
            "cookie": header_value(header::COOKIE),
            "query": uri.query(),
            "body": body,
        }))
    }

    async fn echo_page(headers: HeaderMap, body: String) -> Json<Value> {
        Json(json!({
            "data": [{
                "method": "upload",
                "contentType": headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
                "cookie": null,
                "query": null,
                "body": body,
            }],
            "totalRecords": 1,
        }))
    }

    /// Answers with a one-item page after two seconds
    async fn slow_page() -> Json<Value> {
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
        Json(json!({"data": [{"year": 2018, "count": 3567}], "totalRecords": 1}))
    }

    fn backend() -> Router {
        Router::new()
            .route(
                "/profile",
                get(|| async { Json(json!({"name": "realDonaldTrump", "followers": 55000000})) }),
            )
            .route(
                "/annual",
                get(|| async {
                    Json(json!({"data": [
                        {"year": 2016, "count": 4225},
                        {"year": 2017, "count": 2605},
                    ]}))
                }),
            )
            .route(
                "/annual-paged",
                get(|| async {
                    Json(json!({
                        "data": [{"year": 2016, "count": 4225}, {"year": 2017, "count": 2605}],
                        "totalRecords": 10,
                    }))
                }),
            )
            .route(
                "/overfull",
                get(|| async { Json(json!({"data": [{"year": 2016, "count": 1}], "totalRecords": 0})) }),
            )
            .route("/empty", get(|| async { Json(json!({})) }))
            .route("/echo", get(echo).post(echo).put(echo).delete(echo))
            .route("/upload", post(echo).put(echo))
            .route("/upload-paged", post(echo_page).put(echo_page))
            .route("/slow-upload", post(slow_page).put(slow_page))
            .route(
                "/secure",
                get(|| async {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"reason": "token expired"})),
                    )
                        .into_response()
                }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
            )
            .route(
                "/invalid",
                post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"reason": "bad year"}))).into_response() }),
            )
    }

    async fn spawn_backend() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, backend()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    struct Harness {
        api: ApiService,
        cookies: Arc<CookieStore>,
        auth_failures: Arc<AtomicUsize>,
    }

    async fn harness() -> Harness {
        harness_with(|_| {}).await
    }

    async fn harness_with(configure: impl FnOnce(&mut ApiServiceConfig)) -> Harness {
        let base = spawn_backend().await;
        let mut config = ApiServiceConfig::new(base);
        configure(&mut config);
        let cookies = Arc::new(CookieStore::in_memory());
        let events = Arc::new(EventBus::new());

        let auth_failures = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&auth_failures);
        events.subscribe(GlobalEvent::AuthFailed, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let api = ApiService::new(config, Arc::clone(&cookies), events);

        Harness {
            api,
            cookies,
            auth_failures,
        }
    }

    #[tokio::test]
    async fn test_get_single_object() {
        let h = harness().await;
        let profile: Profile = h.api.get("/profile", ApiParams::new()).await.unwrap();
        assert_eq!(
            profile,
            Profile {
                name: "realDonaldTrump".to_string(),
                followers: 55_000_000,
            }
        );
    }

    #[tokio::test]
    async fn test_get_all_list() {
        let h = harness().await;
        let rows: Vec<YearCount> = h.api.get_all("/annual", ApiParams::new()).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], YearCount { year: 2017, count: 2605 });
    }

    #[tokio::test]
    async fn test_get_all_without_data_is_empty() {
        let h = harness().await;
        let rows: Vec<YearCount> = h.api.get_all("/empty", ApiParams::new()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_get_paged_partial_page() {
        let h = harness().await;
        let page: PagedResult<YearCount> = h
            .api
            .get_paged("/annual-paged", ApiParams::new())
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_records, 10);
    }

    #[tokio::test]
    async fn test_get_paged_rejects_overfull_page() {
        let h = harness().await;
        let result: ApiResult<PagedResult<YearCount>> =
            h.api.get_paged("/overfull", ApiParams::new()).await;
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_decode_mismatch() {
        let h = harness().await;
        let result: ApiResult<Profile> = h.api.get("/annual", ApiParams::new()).await;
        match result {
            Err(ApiError::Decode { path, .. }) => assert_eq!(path, "/annual"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_dynamic() {
        let h = harness().await;
        let value = h.api.get_dynamic("/profile", ApiParams::new()).await.unwrap();
        assert_eq!(value["followers"], json!(55000000));
    }

    #[tokio::test]
    async fn test_locale_injected_from_cookie() {
        let h = harness().await;

        let echo: Echo = h.api.get("/echo", ApiParams::new().with("category", "noun")).await.unwrap();
        assert_eq!(echo.query.as_deref(), Some("category=noun&lang=ja"));
        assert_eq!(echo.content_type, None);

        h.cookies.set_language("en").unwrap();
        let echo: Echo = h.api.get("/echo", ApiParams::new()).await.unwrap();
        assert_eq!(echo.query.as_deref(), Some("lang=en"));
    }

    #[tokio::test]
    async fn test_credentials_send_cookie_jar() {
        let h = harness().await;
        h.cookies.set_auth_token("abc").unwrap();

        let echo: Echo = h.api.get("/echo", ApiParams::new()).await.unwrap();
        assert_eq!(echo.cookie.as_deref(), Some("XSRF-TOKEN=abc"));
    }

    #[tokio::test]
    async fn test_post_form_body() {
        let h = harness().await;
        let echo: Echo = h
            .api
            .post("/echo", ApiParams::new().with("word", "fake news"), BodyEncoding::Form)
            .await
            .unwrap();

        assert_eq!(echo.method, "POST");
        assert_eq!(
            echo.content_type.as_deref(),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(echo.body, "lang=ja&word=fake%20news");
    }

    #[tokio::test]
    async fn test_put_json_body() {
        let h = harness().await;
        let echo: Echo = h
            .api
            .put("/echo", ApiParams::new().with("year", 2018), BodyEncoding::Json)
            .await
            .unwrap();

        assert_eq!(echo.method, "PUT");
        assert_eq!(echo.content_type.as_deref(), Some("application/json"));
        assert_eq!(echo.query.as_deref(), Some("lang=ja&year=2018"));
        let body: Value = serde_json::from_str(&echo.body).unwrap();
        assert_eq!(body, json!({"lang": "ja", "year": 2018}));
    }

    #[tokio::test]
    async fn test_delete_sends_json_body() {
        let h = harness().await;
        let echo: Echo = h
            .api
            .delete("/echo", ApiParams::new().with("id", 7))
            .await
            .unwrap();

        assert_eq!(echo.method, "DELETE");
        assert_eq!(echo.query, None);
        let body: Value = serde_json::from_str(&echo.body).unwrap();
        assert_eq!(body, json!({"id": 7, "lang": "ja"}));
    }

    #[tokio::test]
    async fn test_upload_multipart() {
        let h = harness().await;
        let params = ApiParams::new()
            .with("title", "archive")
            .attach("file", FilePart::new("tweets.csv", b"id,text\n1,hello".to_vec()));

        let echo: Echo = h.api.upload("/upload", params, UploadMethod::Put).await.unwrap();

        assert_eq!(echo.method, "PUT");
        assert_eq!(echo.query.as_deref(), Some("lang=ja&title=archive"));
        assert!(echo
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("multipart/form-data; boundary="));
        assert!(echo.body.contains("name=\"title\""));
        assert!(echo.body.contains("filename=\"tweets.csv\""));
        assert!(echo.body.contains("1,hello"));
    }

    #[tokio::test]
    async fn test_upload_paged() {
        let h = harness().await;
        let page: PagedResult<Echo> = h
            .api
            .upload_paged("/upload-paged", ApiParams::new(), UploadMethod::Put)
            .await
            .unwrap();

        assert_eq!(page.total_records, 1);
        assert!(page.items[0].body.contains("name=\"lang\""));
    }

    #[test]
    fn test_upload_timeout_defaults_to_sixty_seconds() {
        assert_eq!(ApiServiceConfig::default().upload_timeout_secs, UPLOAD_TIMEOUT_SECS);
        assert_eq!(UPLOAD_TIMEOUT_SECS, 60);
    }

    #[tokio::test]
    async fn test_upload_paged_put_times_out() {
        let h = harness_with(|config| config.upload_timeout_secs = 1).await;

        let result: ApiResult<PagedResult<YearCount>> = h
            .api
            .upload_paged("/slow-upload", ApiParams::new(), UploadMethod::Put)
            .await;
        assert!(matches!(result, Err(ApiError::Timeout(1))));
    }

    #[tokio::test]
    async fn test_upload_paged_post_is_unbounded() {
        let h = harness_with(|config| config.upload_timeout_secs = 1).await;

        let page: PagedResult<YearCount> = h
            .api
            .upload_paged("/slow-upload", ApiParams::new(), UploadMethod::Post)
            .await
            .unwrap();
        assert_eq!(page.items, vec![YearCount { year: 2018, count: 3567 }]);
    }

    #[tokio::test]
    async fn test_unauthorized_publishes_once_per_call() {
        let h = harness().await;

        for expected in 1..=2 {
            let result: ApiResult<Profile> = h.api.get("/secure", ApiParams::new()).await;
            match result {
                Err(ApiError::Unauthorized { body }) => {
                    assert_eq!(body, json!({"reason": "token expired"}))
                }
                other => panic!("expected unauthorized, got {:?}", other),
            }
            assert_eq!(h.auth_failures.load(Ordering::SeqCst), expected);
        }
    }

    #[tokio::test]
    async fn test_other_status_carries_body() {
        let h = harness().await;

        let result: ApiResult<Value> = h.api.get_dynamic("/broken", ApiParams::new()).await;
        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, json!("boom"));
            }
            other => panic!("expected status error, got {:?}", other),
        }

        let result: ApiResult<Value> = h
            .api
            .post("/invalid", ApiParams::new(), BodyEncoding::Json)
            .await;
        assert_eq!(result.unwrap_err().body(), Some(&json!({"reason": "bad year"})));
        assert_eq!(h.auth_failures.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let events = Arc::new(EventBus::new());
        let api = ApiService::new(
            ApiServiceConfig::new("http://127.0.0.1:1"),
            Arc::new(CookieStore::in_memory()),
            Arc::clone(&events),
        );

        let result: ApiResult<Value> = api.get_dynamic("/profile", ApiParams::new()).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
        assert_eq!(events.current(GlobalEvent::AuthFailed), None);
    }

    #[test]
    fn test_url_joining() {
        let api = ApiService::new(
            ApiServiceConfig::new("http://localhost:3000/api/"),
            Arc::new(CookieStore::in_memory()),
            Arc::new(EventBus::new()),
        );
        assert_eq!(api.url("/word-cloud"), "http://localhost:3000/api/word-cloud");
        assert_eq!(api.url("emotion"), "http://localhost:3000/api/emotion");
    }
}
