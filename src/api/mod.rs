//! Data-Access Layer
//!
//! Typed HTTP access to the statistics API, built on `reqwest`.
//!
//! # Operations
//!
//! - `get` / `get_all` / `get_paged` / `get_dynamic` - query-string reads
//! - `post` / `post_all` / `put` / `put_all` - JSON or form bodies
//! - `delete` - JSON body
//! - `upload` / `upload_paged` - multipart bodies
//!
//! Results are decoded with serde into the caller's type, a `{data: [...]}`
//! list, or a `{data: [...], totalRecords: N}` page. A body that does not
//! fit is reported as [`ApiError::Decode`] rather than passed through.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tweetboard::api::{ApiParams, ApiService, ApiServiceConfig};
//! use tweetboard::cookie::CookieStore;
//! use tweetboard::events::EventBus;
//!
//! # async fn run() -> Result<(), tweetboard::api::ApiError> {
//! let api = ApiService::new(
//!     ApiServiceConfig::new("http://localhost:3000/api"),
//!     Arc::new(CookieStore::in_memory()),
//!     Arc::new(EventBus::new()),
//! );
//!
//! let words: Vec<serde_json::Value> = api
//!     .get_all("/word-cloud", ApiParams::new().with("category", "noun"))
//!     .await?;
//! println!("{} words", words.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod paging;
mod params;

pub use client::{ApiService, ApiServiceConfig, UploadMethod, DEFAULT_LOCALE, UPLOAD_TIMEOUT_SECS};
pub use error::{ApiError, ApiResult};
pub use paging::PagedResult;
pub use params::{ApiParams, BodyEncoding, FilePart, ParamValue};
