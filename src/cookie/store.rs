//! Cookie jar with optional JSON file persistence.

use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{
    CookieEntry, CookieError, CookieOptions, CookieResult, Expiry, COMPANY_ID, LANGUAGE,
    MASK_PRIVATE_DATA_FLAG, TOKEN_NAME,
};

/// Lifetime of the locale cookie, in hours
const LANGUAGE_EXPIRY_HOURS: i64 = 999_999;
/// Lifetime of session-related cookies, in hours
const SESSION_EXPIRY_HOURS: i64 = 8;

/// Named string values with cookie attributes
///
/// Lookups treat expired entries as absent. When opened with a file path,
/// every mutation rewrites the file with the persistent (non-session,
/// unexpired) entries. The rewrite happens under the write lock and lands
/// through a rename, so readers of the file never see a partial jar.
pub struct CookieStore {
    entries: RwLock<HashMap<String, CookieEntry>>,
    path: Option<PathBuf>,
}

impl CookieStore {
    /// Jar that lives only in memory
    pub fn in_memory() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            path: None,
        }
    }

    /// Open a jar backed by `path`, loading existing entries if the file exists
    pub fn open(path: impl Into<PathBuf>) -> CookieResult<Self> {
        let path = path.into();
        let mut entries = HashMap::new();

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| CookieError::Io {
                path: path.clone(),
                source,
            })?;

            if !content.trim().is_empty() {
                let stored: Vec<CookieEntry> =
                    serde_json::from_str(&content).map_err(|source| CookieError::Parse {
                        path: path.clone(),
                        source,
                    })?;

                let now = Utc::now();
                for entry in stored.into_iter().filter(|e| !e.is_expired(now)) {
                    entries.insert(entry.name.clone(), entry);
                }
            }
        }

        tracing::debug!(path = ?path, count = entries.len(), "Opened cookie jar");

        Ok(Self {
            entries: RwLock::new(entries),
            path: Some(path),
        })
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether a live cookie with this name exists
    pub fn check(&self, name: &str) -> bool {
        let now = Utc::now();
        self.read()
            .get(name)
            .map(|e| !e.is_expired(now))
            .unwrap_or(false)
    }

    /// Value of the named cookie, or the empty string when absent or expired
    pub fn get(&self, name: &str) -> String {
        let now = Utc::now();
        self.read()
            .get(name)
            .filter(|e| !e.is_expired(now))
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    /// Full entry for the named cookie
    pub fn entry(&self, name: &str) -> Option<CookieEntry> {
        let now = Utc::now();
        self.read()
            .get(name)
            .filter(|e| !e.is_expired(now))
            .cloned()
    }

    /// All live cookies by name
    pub fn get_all(&self) -> BTreeMap<String, String> {
        let now = Utc::now();
        self.read()
            .values()
            .filter(|e| !e.is_expired(now))
            .map(|e| (e.name.clone(), e.value.clone()))
            .collect()
    }

    /// Store a cookie. An expiry in the past removes it.
    pub fn set(
        &self,
        name: &str,
        value: &str,
        options: impl Into<CookieOptions>,
    ) -> CookieResult<()> {
        let now = Utc::now();
        let entry = CookieEntry::new(name, value, &options.into(), now);

        let mut entries = self.write();
        if entry.is_expired(now) {
            entries.remove(name);
        } else {
            entries.insert(name.to_string(), entry);
        }

        tracing::debug!(cookie = %name, "Cookie updated");
        self.persist(&entries)
    }

    /// Remove a cookie by expiring it
    pub fn delete(&self, name: &str) -> CookieResult<()> {
        self.set(name, "", Expiry::Hours(-1))
    }

    /// Remove every cookie
    pub fn delete_all(&self) -> CookieResult<()> {
        let mut entries = self.write();
        let count = entries.len();
        entries.clear();

        tracing::debug!(count, "Cookies cleared");
        self.persist(&entries)
    }

    /// `name=value; ...` for an outgoing request, or `None` when the jar is empty
    pub fn request_header(&self) -> Option<String> {
        let cookies = self.get_all();
        if cookies.is_empty() {
            return None;
        }

        let header = cookies
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("; ");

        Some(header)
    }

    // ============ Named accessors ============

    pub fn language(&self) -> String {
        self.get(LANGUAGE)
    }

    pub fn set_language(&self, lang: &str) -> CookieResult<()> {
        self.set(LANGUAGE, lang, Expiry::Hours(LANGUAGE_EXPIRY_HOURS))
    }

    pub fn auth_token(&self) -> String {
        self.get(TOKEN_NAME)
    }

    pub fn set_auth_token(&self, token: &str) -> CookieResult<()> {
        self.set(TOKEN_NAME, token, Expiry::Hours(SESSION_EXPIRY_HOURS))
    }

    pub fn remove_auth_token(&self) -> CookieResult<()> {
        self.delete(TOKEN_NAME)
    }

    pub fn exists_auth_token(&self) -> bool {
        self.check(TOKEN_NAME)
    }

    pub fn company_id(&self) -> String {
        self.get(COMPANY_ID)
    }

    pub fn set_company_id(&self, company_id: &str) -> CookieResult<()> {
        self.set(COMPANY_ID, company_id, Expiry::Hours(SESSION_EXPIRY_HOURS))
    }

    pub fn remove_company_id(&self) -> CookieResult<()> {
        self.delete(COMPANY_ID)
    }

    /// Whether private data should be masked in rendered output
    pub fn mask_private_data(&self) -> bool {
        self.get(MASK_PRIVATE_DATA_FLAG) == "true"
    }

    pub fn set_mask_private_data(&self, mask: bool) -> CookieResult<()> {
        self.set(
            MASK_PRIVATE_DATA_FLAG,
            if mask { "true" } else { "false" },
            Expiry::Hours(SESSION_EXPIRY_HOURS),
        )
    }

    // ============ Internals ============

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CookieEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CookieEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Rewrite the backing file from `entries`; callers hold the write guard
    fn persist(&self, entries: &HashMap<String, CookieEntry>) -> CookieResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let now = Utc::now();
        let mut stored: Vec<CookieEntry> = entries
            .values()
            .filter(|e| !e.is_session() && !e.is_expired(now))
            .cloned()
            .collect();
        stored.sort_by(|a, b| a.name.cmp(&b.name));

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| CookieError::Io {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(&stored).map_err(|source| {
            CookieError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        let staging = staging_path(path);
        let io_error = |source| CookieError::Io {
            path: path.clone(),
            source,
        };
        if let Err(e) = std::fs::write(&staging, content) {
            let _ = std::fs::remove_file(&staging);
            return Err(io_error(e));
        }
        std::fs::rename(&staging, path).map_err(|e| {
            let _ = std::fs::remove_file(&staging);
            io_error(e)
        })
    }
}

/// Sibling of `path` that is renamed over it once fully written
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cookies".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

impl Default for CookieStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
