use kmetro_core::dataset::DatasetError;

#[derive(thiserror::Error, Debug)]
pub enum KmetroAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    DatasetError(#[from] DatasetError),
    #[error("unknown station '{0}'")]
    UnknownStation(String),
    #[error("unknown trip '{0}'")]
    UnknownTrip(String),
    #[error("failure building async runtime: {0}")]
    RuntimeError(String),
    #[error("failure writing output: {source}")]
    OutputError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing output: {source}")]
    WriteError {
        #[from]
        source: std::io::Error,
    },
}
