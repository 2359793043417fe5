#[allow(clippy::module_inception)]
mod dataset;
mod dataset_error;
mod dataset_resource;
mod dataset_source;
mod dataset_source_config;
mod loader;
mod raw;

pub use dataset::Dataset;
pub use dataset_error::DatasetError;
pub use dataset_resource::DatasetResource;
pub use dataset_source::{DatasetSource, DirectorySource, HttpSource};
pub use dataset_source_config::DatasetSourceConfig;
pub use loader::DatasetLoader;
