//! Translation loader: one retrieval of the translation table at startup.
//!
//! There is no retry and no timeout. Any failure is terminal for the page.

use crate::i18n::TranslationTable;
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Where the translation table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationSource {
    /// Fetched with an HTTP GET.
    Http(String),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl TranslationSource {
    /// Resolve a configured source string.
    ///
    /// Absolute `http(s)://` URLs are used as-is. A relative path is joined
    /// against `base_url` when one is given (as a browser resolves it against
    /// the page URL), otherwise it names a local file.
    pub fn resolve(source: &str, base_url: Option<&str>) -> Result<Self> {
        if source.starts_with("http://") || source.starts_with("https://") {
            return Ok(Self::Http(source.to_string()));
        }

        match base_url {
            Some(base) => {
                let base = reqwest::Url::parse(base)
                    .with_context(|| format!("Invalid base URL: {}", base))?;
                let url = base
                    .join(source)
                    .with_context(|| format!("Cannot resolve '{}' against {}", source, base))?;
                Ok(Self::Http(url.to_string()))
            }
            None => Ok(Self::File(PathBuf::from(source))),
        }
    }
}

impl fmt::Display for TranslationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Why the translation table could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed translation data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fetches the translation table from a [`TranslationSource`].
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    client: reqwest::Client,
    source: TranslationSource,
}

impl TranslationLoader {
    pub fn new(source: TranslationSource) -> Self {
        Self::with_client(reqwest::Client::new(), source)
    }

    pub fn with_client(client: reqwest::Client, source: TranslationSource) -> Self {
        Self { client, source }
    }

    /// Retrieve and parse the translation table.
    pub async fn load(&self) -> Result<TranslationTable, LoadError> {
        let body = match &self.source {
            TranslationSource::Http(url) => self.fetch(url).await?,
            TranslationSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
        };

        let table = TranslationTable::from_json(&body)?;
        info!(
            "Loaded translations for {:?} from {}",
            table.languages(),
            self.source
        );

        Ok(table)
    }

    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let request_error = |source| LoadError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(request_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TABLE_JSON: &str = r#"{"zh": {"greeting": "你好"}, "en": {"greeting": "Hello"}}"#;

    // ==================== TranslationSource Tests ====================

    #[test]
    fn test_resolve_absolute_url() {
        let source = TranslationSource::resolve("https://cdn.example.com/t.json", None).unwrap();
        assert_eq!(
            source,
            TranslationSource::Http("https://cdn.example.com/t.json".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_url_ignores_base() {
        let source = TranslationSource::resolve(
            "http://other.example.com/t.json",
            Some("https://site.example.com/"),
        )
        .unwrap();
        assert_eq!(
            source,
            TranslationSource::Http("http://other.example.com/t.json".to_string())
        );
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let source = TranslationSource::resolve(
            "data/translations.json",
            Some("https://site.example.com/index.html"),
        )
        .unwrap();
        assert_eq!(
            source,
            TranslationSource::Http("https://site.example.com/data/translations.json".to_string())
        );
    }

    #[test]
    fn test_resolve_relative_without_base_is_file() {
        let source = TranslationSource::resolve("data/translations.json", None).unwrap();
        assert_eq!(
            source,
            TranslationSource::File(PathBuf::from("data/translations.json"))
        );
    }

    #[test]
    fn test_resolve_invalid_base() {
        assert!(TranslationSource::resolve("data/t.json", Some("not a url")).is_err());
    }

    // ==================== HTTP Loading Tests ====================

    #[tokio::test]
    async fn test_load_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/translations.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TABLE_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let loader = TranslationLoader::new(TranslationSource::Http(format!(
            "{}/data/translations.json",
            server.uri()
        )));
        let table = loader.load().await.expect("Should load");

        assert_eq!(table.bundle("en").unwrap().text("greeting"), Some("Hello"));
    }

    #[tokio::test]
    async fn test_load_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let loader = TranslationLoader::new(TranslationSource::Http(format!(
            "{}/missing.json",
            server.uri()
        )));
        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, LoadError::Status { status: 404, .. }));
        assert!(err.to_string().starts_with("HTTP error! status: 404"));
    }

    #[tokio::test]
    async fn test_load_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let loader = TranslationLoader::new(TranslationSource::Http(server.uri()));
        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_load_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let loader = TranslationLoader::new(TranslationSource::Http(format!(
            "http://127.0.0.1:{}/t.json",
            port
        )));
        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, LoadError::Request { .. }));
    }

    // ==================== File Loading Tests ====================

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE_JSON.as_bytes()).unwrap();

        let loader = TranslationLoader::new(TranslationSource::File(file.path().to_path_buf()));
        let table = loader.load().await.expect("Should load");

        assert_eq!(table.languages(), vec!["en", "zh"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader =
            TranslationLoader::new(TranslationSource::File(dir.path().join("absent.json")));

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            TranslationSource::Http("http://x/t.json".to_string()).to_string(),
            "http://x/t.json"
        );
        assert_eq!(
            TranslationSource::File(PathBuf::from("data/t.json")).to_string(),
            "data/t.json"
        );
    }
}
