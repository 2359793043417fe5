use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::dataset::{DatasetError, DatasetResource};

/// somewhere the six dataset resources can be read from as JSON text.
pub trait DatasetSource: Send + Sync {
    fn fetch(&self, resource: DatasetResource) -> Result<String, DatasetError>;

    /// human-readable location, used in log messages.
    fn describe(&self) -> String;
}

/// reads resources from files in a local directory.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> DirectorySource {
        DirectorySource {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl DatasetSource for DirectorySource {
    fn fetch(&self, resource: DatasetResource) -> Result<String, DatasetError> {
        let filepath = self.root.join(resource.file_name());
        std::fs::read_to_string(&filepath).map_err(|source| DatasetError::ReadError {
            resource,
            filepath: filepath.to_string_lossy().to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("directory '{}'", self.root.display())
    }
}

/// fetches resources with a GET per file below a base URL. no retry.
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<HttpSource, DatasetError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DatasetError::SourceBuildError(format!("http client: {e}")))?;
        Ok(HttpSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, resource: DatasetResource) -> String {
        format!("{}/{}", self.base_url, resource.file_name())
    }
}

impl DatasetSource for HttpSource {
    fn fetch(&self, resource: DatasetResource) -> Result<String, DatasetError> {
        let url = self.url(resource);
        self.client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| DatasetError::FetchError {
                resource,
                url,
                source,
            })
    }

    fn describe(&self) -> String {
        format!("url '{}'", self.base_url)
    }
}
