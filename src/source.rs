//! Theme source dispatch and loading.
//!
//! A source argument is either a local path or a URL. Anything without a
//! URL scheme (or with a one-letter scheme, i.e. a Windows drive) is read
//! from disk; `http`/`https` URLs are fetched with a plain GET; `file` URLs
//! are mapped back to local paths.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::Url;
use tracing::{debug, info};

use crate::config::NetworkConfig;
use crate::error::SourceError;
use crate::theme::Theme;

/// Maximum characters of an error response body kept in the error message.
const MAX_STATUS_BODY_CHARS: usize = 200;

/// Where a theme document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    File(PathBuf),
    Url(Url),
}

impl ThemeSource {
    /// Classify a CLI source argument.
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        if raw.trim().is_empty() {
            return Err(SourceError::InvalidSource("empty source".to_string()));
        }
        let Some(scheme) = url_scheme(raw) else {
            return Ok(Self::File(PathBuf::from(raw)));
        };
        if scheme.len() == 1 {
            return Ok(Self::File(PathBuf::from(raw)));
        }

        let url =
            Url::parse(raw).map_err(|e| SourceError::InvalidSource(format!("`{raw}`: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(Self::Url(url)),
            "file" => url.to_file_path().map(Self::File).map_err(|()| {
                SourceError::InvalidSource(format!("`{raw}` is not a local file URL"))
            }),
            other => Err(SourceError::UnsupportedScheme(other.to_string())),
        }
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Leading `scheme:` of `raw`, if it has one.
fn url_scheme(raw: &str) -> Option<&str> {
    let (scheme, _) = raw.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Reads theme documents from disk or over HTTP.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    http: reqwest::Client,
}

impl ThemeLoader {
    /// Build a loader honoring the configured request timeout.
    pub fn new(network: &NetworkConfig) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = network.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?))
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Load and decode the theme at `source`.
    pub async fn load(&self, source: &ThemeSource) -> Result<Theme, SourceError> {
        let text = match source {
            ThemeSource::File(path) => read_file(path).await?,
            ThemeSource::Url(url) => self.fetch(url).await?,
        };
        let theme = Theme::from_json_str(&text)?;
        info!(%source, colors = theme.len(), "loaded theme");
        Ok(theme)
    }

    async fn fetch(&self, url: &Url) -> Result<String, SourceError> {
        debug!(%url, "fetching theme");
        let response = self.http.get(url.clone()).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status(status, body_excerpt(&body)));
        }
        Ok(response.text().await?)
    }
}

async fn read_file(path: &Path) -> Result<String, SourceError> {
    debug!(path = %path.display(), "reading theme file");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn body_excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_STATUS_BODY_CHARS {
        return trimmed.to_string();
    }
    let prefix: String = trimmed.chars().take(MAX_STATUS_BODY_CHARS).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{serve_once, TestTempDir};

    fn test_loader() -> ThemeLoader {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client");
        ThemeLoader::with_client(http)
    }

    #[test]
    fn plain_paths_are_files() {
        assert_eq!(
            ThemeSource::parse("themes/dark.json").expect("parse"),
            ThemeSource::File(PathBuf::from("themes/dark.json"))
        );
        assert_eq!(
            ThemeSource::parse("./odd:name.json").expect("parse"),
            ThemeSource::File(PathBuf::from("./odd:name.json"))
        );
    }

    #[test]
    fn drive_letters_are_files() {
        assert_eq!(
            ThemeSource::parse(r"C:\themes\dark.json").expect("parse"),
            ThemeSource::File(PathBuf::from(r"C:\themes\dark.json"))
        );
    }

    #[test]
    fn http_urls_are_fetched() {
        let source = ThemeSource::parse("https://example.com/themes/dark.json").expect("parse");
        let ThemeSource::Url(url) = source else {
            panic!("expected url source");
        };
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/themes/dark.json");
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_map_to_paths() {
        assert_eq!(
            ThemeSource::parse("file:///tmp/dark.json").expect("parse"),
            ThemeSource::File(PathBuf::from("/tmp/dark.json"))
        );
    }

    #[test]
    fn other_schemes_are_rejected() {
        let err = ThemeSource::parse("ftp://example.com/dark.json").expect_err("must fail");
        assert!(matches!(err, SourceError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[test]
    fn malformed_urls_are_rejected() {
        let err = ThemeSource::parse("http://exa mple.com/").expect_err("must fail");
        assert!(err.to_string().starts_with("failed to parse source"), "got: {err}");
        assert!(ThemeSource::parse("").is_err());
    }

    #[test]
    fn body_excerpt_truncates_long_bodies() {
        let long = "x".repeat(500);
        let excerpt = body_excerpt(&long);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), MAX_STATUS_BODY_CHARS + 3);
        assert_eq!(body_excerpt("  short \n"), "short");
    }

    #[tokio::test]
    async fn loads_theme_from_file() {
        let dir = TestTempDir::new("source-file");
        let path = dir.write_text(
            "dark.json",
            r##"{"colors": {"terminal.ansiRed": "#ff0000"}}"##,
        );
        let theme = test_loader()
            .load(&ThemeSource::File(path))
            .await
            .expect("load");
        assert_eq!(theme.get("terminal.ansiRed"), Some("#ff0000"));
    }

    #[tokio::test]
    async fn missing_file_reports_open_error() {
        let dir = TestTempDir::new("source-missing");
        let err = test_loader()
            .load(&ThemeSource::File(dir.child("absent.json")))
            .await
            .expect_err("must fail");
        assert!(err.to_string().starts_with("failed to open"), "got: {err}");
    }

    #[tokio::test]
    async fn invalid_json_reports_decode_error() {
        let dir = TestTempDir::new("source-bad-json");
        let path = dir.write_text("broken.json", "{\"colors\": ");
        let err = test_loader()
            .load(&ThemeSource::File(path))
            .await
            .expect_err("must fail");
        assert!(matches!(err, SourceError::Decode(_)), "got: {err}");
    }

    #[tokio::test]
    async fn loads_theme_over_http() {
        let url = serve_once(
            "200 OK",
            r##"{"colors": {"terminal.background": "#1e1e1e"}}"##,
        )
        .await;
        let source = ThemeSource::parse(&url).expect("parse");
        let theme = test_loader().load(&source).await.expect("load");
        assert_eq!(theme.get("terminal.background"), Some("#1e1e1e"));
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let url = serve_once("404 Not Found", "no such theme").await;
        let source = ThemeSource::parse(&url).expect("parse");
        let err = test_loader().load(&source).await.expect_err("must fail");
        assert!(
            matches!(err, SourceError::Status(404, ref body) if body == "no such theme"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn unreachable_host_reports_http_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let source =
            ThemeSource::parse(&format!("http://127.0.0.1:{port}/theme.json")).expect("parse");
        let err = test_loader().load(&source).await.expect_err("must fail");
        assert!(matches!(err, SourceError::Http(_)), "got: {err}");
    }
}
