//! Cookie entries and their attributes.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// When a cookie stops being valid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Relative to now, in hours
    Hours(i64),
    /// Relative to now, in days
    Days(i64),
    /// Absolute point in time
    At(DateTime<Utc>),
}

impl Expiry {
    /// Absolute instant relative to `now`, or `None` past the last
    /// representable cookie date (end of year 9999)
    pub fn checked_resolve(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let at = match self {
            Expiry::Hours(hours) => {
                Duration::try_hours(hours).and_then(|d| now.checked_add_signed(d))?
            }
            Expiry::Days(days) => Duration::try_days(days).and_then(|d| now.checked_add_signed(d))?,
            Expiry::At(at) => at,
        };
        (at <= latest_expiry()).then_some(at)
    }

    /// Resolve to an absolute instant relative to `now`, clamping periods
    /// that overflow to the end of year 9999 or the earliest instant
    pub fn resolve(self, now: DateTime<Utc>) -> DateTime<Utc> {
        if let Some(at) = self.checked_resolve(now) {
            return at;
        }
        let forward = match self {
            Expiry::Hours(n) | Expiry::Days(n) => n >= 0,
            Expiry::At(_) => true,
        };
        if forward {
            latest_expiry()
        } else {
            DateTime::<Utc>::MIN_UTC
        }
    }
}

fn latest_expiry() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|t| t.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Attributes applied when setting a cookie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    /// `None` makes a session cookie
    pub expires: Option<Expiry>,
    /// Defaults to `/`
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
}

impl CookieOptions {
    /// Session cookie with default attributes
    pub fn session() -> Self {
        Self::default()
    }

    /// Cookie expiring after the given period
    pub fn expiring(expires: Expiry) -> Self {
        Self {
            expires: Some(expires),
            ..Default::default()
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

impl From<Expiry> for CookieOptions {
    fn from(expires: Expiry) -> Self {
        Self::expiring(expires)
    }
}

/// A single stored cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieEntry {
    pub name: String,
    pub value: String,
    /// `None` for session cookies
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    pub path: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub secure: bool,
}

impl CookieEntry {
    /// Build an entry from a name, value and attributes
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        options: &CookieOptions,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires: options.expires.map(|e| e.resolve(now)),
            path: options.path.clone().unwrap_or_else(|| "/".to_string()),
            domain: options.domain.clone(),
            secure: options.secure,
        }
    }

    /// Whether the entry has expired at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.map(|at| at <= now).unwrap_or(false)
    }

    /// Session cookies have no expiry and are not persisted
    pub fn is_session(&self) -> bool {
        self.expires.is_none()
    }

    /// Render in `Set-Cookie` form with percent-encoded name and value
    pub fn to_set_cookie(&self) -> String {
        let mut out = format!(
            "{}={};",
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.value)
        );

        if let Some(expires) = self.expires {
            out.push_str(&format!(
                "expires={};",
                expires.format("%a, %d %b %Y %H:%M:%S GMT")
            ));
        }
        out.push_str(&format!("path={};", self.path));
        if let Some(domain) = &self.domain {
            out.push_str(&format!("domain={};", domain));
        }
        if self.secure {
            out.push_str("secure;");
        }

        out
    }
}
