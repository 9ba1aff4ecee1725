use crate::constants::{ABSENT_HTTP_STATUSES, DEFAULT_HTTP_TIMEOUT_SECS, URL_SCHEMES};
use crate::error::{Error, Result};
use crate::ext::TemplatePathExt;
use crate::reader::interface::SourceReader;
use crate::source::Resource;
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::LAST_MODIFIED;
use std::io::ErrorKind;
use std::time::Duration;
use url::Url;

/// Reader for templates served over HTTP(S) or addressed by `file://` URLs.
///
/// A path that is itself an absolute URL is fetched as-is; anything else is
/// joined onto the base URL, with a leading `/` taken relative to the base
/// rather than to the host root.
#[derive(Debug, Clone)]
pub struct UrlReader {
    base: Url,
    client: Client,
}

impl UrlReader {
    /// Creates a reader for `base` with the default request timeout.
    pub fn new(base: &str) -> Result<Self> {
        Self::with_timeout(base, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ConfigError(format!("cannot build HTTP client: {e}")))?;
        Self::with_client(base, client)
    }

    pub fn with_client(base: &str, client: Client) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if !is_supported_scheme(&base) {
            return Err(Error::ConfigError(format!(
                "unsupported URL scheme '{}', expected one of {}",
                base.scheme(),
                URL_SCHEMES.join(", ")
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, client })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Computes the URL a store path is fetched from.
    ///
    /// Only a path that is itself a URL with a supported scheme bypasses the
    /// base; every other path is joined as `./<path>`, so a `:` in its first
    /// segment is never read as a scheme.
    pub fn locate(&self, path: &str) -> Result<Url> {
        if let Ok(url) = Url::parse(path) {
            if is_supported_scheme(&url) {
                return Ok(url);
            }
        }
        let relative = format!("./{}", path.trim_root());
        self.base.join(&relative).map_err(|e| Error::InvalidTemplateUrlError {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn read_file(&self, url: &Url) -> Result<Option<Resource>> {
        let file_path = url
            .to_file_path()
            .map_err(|_| Error::Other(anyhow::anyhow!("'{url}' is not a local file URL")))?;
        if file_path.is_dir() {
            return Ok(None);
        }
        match std::fs::read(&file_path) {
            Ok(bytes) => {
                let last_modified = std::fs::metadata(&file_path)
                    .and_then(|m| m.modified())
                    .ok()
                    .map(DateTime::<Utc>::from);
                Ok(Some(Resource::new(bytes).with_last_modified(last_modified)))
            }
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn read_http(&self, url: &Url) -> Result<Option<Resource>> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        log::debug!("GET {url} -> {status}");

        if ABSENT_HTTP_STATUSES.contains(&status.as_u16()) {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::HttpStatusError { url: url.to_string(), status: status.as_u16() });
        }

        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_http_date);
        let bytes = response.bytes()?;
        Ok(Some(Resource::new(bytes.to_vec()).with_last_modified(last_modified)))
    }
}

fn is_supported_scheme(url: &Url) -> bool {
    URL_SCHEMES.contains(&url.scheme())
}

fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value).ok().map(|date| date.with_timezone(&Utc))
}

impl SourceReader for UrlReader {
    fn read(&self, path: &str) -> Result<Option<Resource>> {
        let url = self.locate(path)?;
        match url.scheme() {
            "file" => self.read_file(&url),
            _ => self.read_http(&url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn joins_paths_below_base() {
        let reader = UrlReader::new("http://localhost:8080/templates").unwrap();
        assert_eq!(reader.base().as_str(), "http://localhost:8080/templates/");
        assert_eq!(
            reader.locate("/home.hbs").unwrap().as_str(),
            "http://localhost:8080/templates/home.hbs"
        );
        assert_eq!(
            reader.locate("partials/header.hbs").unwrap().as_str(),
            "http://localhost:8080/templates/partials/header.hbs"
        );
    }

    #[test]
    fn colon_in_first_segment_stays_below_base() {
        let reader = UrlReader::new("http://127.0.0.1:9/templates/").unwrap();
        assert_eq!(
            reader.locate("/a:b.hbs").unwrap().as_str(),
            "http://127.0.0.1:9/templates/a:b.hbs"
        );
        assert_eq!(
            reader.locate("mailto:x.hbs").unwrap().as_str(),
            "http://127.0.0.1:9/templates/mailto:x.hbs"
        );
    }

    #[test]
    fn url_like_segments_are_joined_not_parsed() {
        let reader = UrlReader::new("http://127.0.0.1:9/templates/").unwrap();
        for path in ["/http://[bad.hbs", "http://[bad.hbs"] {
            let url = reader.locate(path).unwrap();
            assert!(url.as_str().starts_with("http://127.0.0.1:9/templates/"), "{url}");
        }
    }

    #[test]
    fn absolute_urls_are_used_as_is() {
        let reader = UrlReader::new("http://localhost:8080/templates/").unwrap();
        assert_eq!(
            reader.locate("https://cdn.example.com/x.hbs").unwrap().as_str(),
            "https://cdn.example.com/x.hbs"
        );
    }

    #[test]
    fn rejects_unsupported_scheme() {
        assert!(matches!(UrlReader::new("ftp://example.com/"), Err(Error::ConfigError(_))));
        assert!(matches!(UrlReader::new("not a url"), Err(Error::UrlParseError(_))));
    }

    #[test]
    fn parses_last_modified_header() {
        let expected = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
        assert_eq!(parse_http_date("Wed, 21 Oct 2015 07:28:00 GMT"), Some(expected));
        assert_eq!(parse_http_date("yesterday"), None);
    }

    #[test]
    fn reads_file_urls() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("home.hbs"), "home").unwrap();
        let base = Url::from_directory_path(dir.path()).unwrap();
        let reader = UrlReader::new(base.as_str()).unwrap();

        assert_eq!(reader.read("/home.hbs").unwrap().unwrap().bytes, b"home");
        assert!(reader.read("/away.hbs").unwrap().is_none());
    }
}
