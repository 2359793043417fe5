use crate::dataset::DatasetResource;

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("failed reading '{filepath}' for {resource}: {source}")]
    ReadError {
        resource: DatasetResource,
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed fetching '{url}' for {resource}: {source}")]
    FetchError {
        resource: DatasetResource,
        url: String,
        source: reqwest::Error,
    },
    #[error("failed parsing {resource} JSON: {source}")]
    ParseError {
        resource: DatasetResource,
        source: serde_json::Error,
    },
    #[error("malformed {resource} data: {msg}")]
    MalformedData {
        resource: DatasetResource,
        msg: String,
    },
    #[error("failed to build dataset source: {0}")]
    SourceBuildError(String),
    #[error("dataset load already failed: {0}")]
    LoadFailed(String),
}
