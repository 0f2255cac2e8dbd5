use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::dataset::store::DatasetError;
use crate::utils::validation::is_http_url;

/// Default location of the disease table
pub const DEFAULT_DISEASE_SOURCE: &str = "dataset.csv";

/// Default location of the description table
pub const DEFAULT_DESCRIPTION_SOURCE: &str = "symptom_Description.csv";

/// Timeout applied to each HTTP fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where one dataset table is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Local file; `.gz` files are decompressed
    File(PathBuf),
    /// `http://` or `https://` URL
    Url(String),
}

impl DatasetSource {
    /// Classify a user-supplied location as a URL or a file path
    pub fn parse(s: &str) -> Self {
        if is_http_url(s) {
            Self::Url(s.trim().to_string())
        } else {
            Self::File(PathBuf::from(s))
        }
    }

    /// Read the full text of this source
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Io` if a file cannot be read or decompressed, or
    /// `DatasetError::Fetch` on a network failure or non-success HTTP status.
    pub async fn fetch_text(&self, client: &reqwest::Client) -> Result<String, DatasetError> {
        match self {
            Self::File(path) => read_file_text(path).await,
            Self::Url(url) => fetch_url_text(client, url).await,
        }
    }
}

impl std::str::FromStr for DatasetSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

impl Serialize for DatasetSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The pair of tables that make up a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSources {
    pub diseases: DatasetSource,
    pub descriptions: DatasetSource,
}

impl DatasetSources {
    pub fn new(diseases: DatasetSource, descriptions: DatasetSource) -> Self {
        Self {
            diseases,
            descriptions,
        }
    }
}

impl Default for DatasetSources {
    fn default() -> Self {
        Self {
            diseases: DatasetSource::parse(DEFAULT_DISEASE_SOURCE),
            descriptions: DatasetSource::parse(DEFAULT_DESCRIPTION_SOURCE),
        }
    }
}

/// Build the HTTP client used for dataset fetches
///
/// # Errors
///
/// Returns `DatasetError::Client` if the TLS backend cannot be initialized.
pub fn build_client() -> Result<reqwest::Client, DatasetError> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(DatasetError::Client)
}

async fn read_file_text(path: &Path) -> Result<String, DatasetError> {
    let io_error = |source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    };

    let bytes = tokio::fs::read(path).await.map_err(io_error)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read dataset file");

    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    let bytes = if is_gzip {
        let mut decoded = Vec::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_end(&mut decoded)
            .map_err(io_error)?;
        decoded
    } else {
        bytes
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn fetch_url_text(client: &reqwest::Client, url: &str) -> Result<String, DatasetError> {
    let fetch_error = |source| DatasetError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(fetch_error)?;
    debug!(url, status = %response.status(), "Dataset response");

    response
        .error_for_status()
        .map_err(fetch_error)?
        .text()
        .await
        .map_err(fetch_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            DatasetSource::parse("https://example.org/dataset.csv"),
            DatasetSource::Url("https://example.org/dataset.csv".to_string())
        );
        assert_eq!(
            DatasetSource::parse("data/dataset.csv"),
            DatasetSource::File(PathBuf::from("data/dataset.csv"))
        );
    }

    #[test]
    fn test_default_sources() {
        let sources = DatasetSources::default();
        assert_eq!(sources.diseases.to_string(), DEFAULT_DISEASE_SOURCE);
        assert_eq!(sources.descriptions.to_string(), DEFAULT_DESCRIPTION_SOURCE);
    }

    #[tokio::test]
    async fn test_read_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        std::fs::write(&path, "Disease,Symptom_1\nFlu,fever\n").unwrap();

        let client = build_client().unwrap();
        let text = DatasetSource::File(path).fetch_text(&client).await.unwrap();
        assert!(text.contains("Flu,fever"));
    }

    #[tokio::test]
    async fn test_read_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"Disease,Symptom_1\nFlu,fever\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let client = build_client().unwrap();
        let text = DatasetSource::File(path).fetch_text(&client).await.unwrap();
        assert_eq!(text, "Disease,Symptom_1\nFlu,fever\n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_decoded_alike_in_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let raw: &[u8] = b"Disease,Symptom_1\nFlu,fev\xffer\n";

        let plain = dir.path().join("dataset.csv");
        std::fs::write(&plain, raw).unwrap();

        let gzipped = dir.path().join("dataset.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(raw).unwrap();
        std::fs::write(&gzipped, encoder.finish().unwrap()).unwrap();

        let client = build_client().unwrap();
        let plain_text = DatasetSource::File(plain).fetch_text(&client).await.unwrap();
        let gzip_text = DatasetSource::File(gzipped).fetch_text(&client).await.unwrap();
        assert_eq!(plain_text, gzip_text);
        assert!(gzip_text.contains("Flu,fev\u{fffd}er"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let client = build_client().unwrap();
        let result = DatasetSource::File(PathBuf::from("/nonexistent/dataset.csv"))
            .fetch_text(&client)
            .await;
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
