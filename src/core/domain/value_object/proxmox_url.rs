use crate::core::domain::error::ValidationError;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost:8006/";

/// Path of the JSON API below the server root.
pub const API_PATH: &str = "api2/json/";

/// Constraints applied to a configured base URL.
///
/// Follows RFC 3986 for syntax and RFC 7230 for the maximum length.
#[derive(Debug, Clone)]
pub struct ProxmoxUrlConfig {
    allowed_schemes: HashSet<String>,
    max_length: usize,
}

impl ProxmoxUrlConfig {
    fn validate_url(&self, url: &str) -> Result<Url, ValidationError> {
        if url.len() > self.max_length {
            return Err(ValidationError::Format(format!(
                "URL exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        let parsed = Url::parse(url)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

        if !self.allowed_schemes.contains(parsed.scheme()) {
            let mut schemes: Vec<&str> = self.allowed_schemes.iter().map(String::as_str).collect();
            schemes.sort_unstable();
            return Err(ValidationError::ConstraintViolation(format!(
                "Invalid scheme '{}'. Must be one of: {}",
                parsed.scheme(),
                schemes.join(", ")
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::field(
                "base_url",
                "URL must contain a host",
            ));
        }

        Ok(parsed)
    }
}

impl Default for ProxmoxUrlConfig {
    fn default() -> Self {
        let allowed_schemes = ["https", "http"].iter().map(|s| s.to_string()).collect();

        Self {
            allowed_schemes,
            max_length: 2083,
        }
    }
}

/// The normalized API root of a Proxmox server, e.g.
/// `https://pve.example.com:8006/api2/json/`.
///
/// A trailing slash is added when missing and [`API_PATH`] is appended
/// unless the path already ends with it, so reverse-proxy prefixes such as
/// `https://gw.example.com/pve/` are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxUrl(Url);

impl ProxmoxUrl {
    /// Validates and normalizes a base URL.
    pub fn new(url: &str) -> Result<Self, ValidationError> {
        let mut with_slash = url.trim().to_string();
        if with_slash.is_empty() {
            return Err(ValidationError::field("base_url", "URL cannot be empty"));
        }
        if !with_slash.ends_with('/') {
            with_slash.push('/');
        }

        let mut parsed = ProxmoxUrlConfig::default().validate_url(&with_slash)?;
        if !parsed.path().ends_with(API_PATH) {
            let path = format!("{}{}", parsed.path(), API_PATH);
            parsed.set_path(&path);
        }
        Ok(Self(parsed))
    }

    /// Returns the normalized URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the normalized URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolves API path segments against this base, percent-encoding each
    /// segment on its own.
    ///
    /// `.` and `..` are rejected: the URL parser would collapse them and the
    /// request would reach a different resource.
    pub fn resolve<I, S>(&self, segments: I) -> Result<Url, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<S> = segments.into_iter().collect();
        if let Some(dot) = segments
            .iter()
            .map(|segment| segment.as_ref())
            .find(|segment| matches!(*segment, "." | ".."))
        {
            return Err(ValidationError::Format(format!(
                "Path segment '{dot}' is not allowed"
            )));
        }

        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ValidationError::Format(format!("URL '{}' cannot be used as a base", self.0))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ProxmoxUrl {
    fn default() -> Self {
        Self(
            Url::parse(DEFAULT_BASE_URL)
                .and_then(|base| base.join(API_PATH))
                .unwrap_or_else(|_| unreachable!("default base URL is valid")),
        )
    }
}

impl fmt::Display for ProxmoxUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
