use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetError, DatasetSource, DirectorySource, HttpSource};

/// configures where the dataset is read from.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DatasetSourceConfig {
    Directory {
        path: String,
    },
    Http {
        base_url: String,
        /// request timeout in seconds, none for the client default
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
}

impl Default for DatasetSourceConfig {
    fn default() -> Self {
        DatasetSourceConfig::Directory {
            path: String::from("data"),
        }
    }
}

impl DatasetSourceConfig {
    pub fn build(&self) -> Result<Box<dyn DatasetSource>, DatasetError> {
        match self {
            DatasetSourceConfig::Directory { path } => Ok(Box::new(DirectorySource::new(path))),
            DatasetSourceConfig::Http {
                base_url,
                timeout_secs,
            } => {
                let source = HttpSource::new(base_url, timeout_secs.map(Duration::from_secs))?;
                Ok(Box::new(source))
            }
        }
    }
}
