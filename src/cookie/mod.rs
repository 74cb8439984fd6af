//! Cookie Store
//!
//! Client-side key-value jar for the session token, company id, privacy
//! mask flag and locale. Entries carry browser cookie attributes (expiry,
//! path, domain, secure) and the jar can be persisted to a JSON file so
//! that values survive between runs the way browser cookies do.
//!
//! There is no encryption or signing; values are stored as plain text.

mod entry;
mod store;

pub use entry::{CookieEntry, CookieOptions, Expiry};
pub use store::CookieStore;

use std::path::PathBuf;
use thiserror::Error;

/// Key for the authentication token
pub const TOKEN_NAME: &str = "XSRF-TOKEN";
/// Key for the selected company
pub const COMPANY_ID: &str = "CompanyID";
/// Key for the private data masking flag
pub const MASK_PRIVATE_DATA_FLAG: &str = "MaskPrivateData";
/// Key for the UI/API locale
pub const LANGUAGE: &str = "lang";

/// Errors from loading or persisting the cookie jar
#[derive(Error, Debug)]
pub enum CookieError {
    #[error("Failed to access cookie file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse cookie file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for cookie jar operations
pub type CookieResult<T> = Result<T, CookieError>;
