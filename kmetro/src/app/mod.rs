mod app_config;
mod app_error;
mod cli_ops;
mod kmetro_app;
mod operation;

pub use app_config::{ClockConfig, DeparturesConfig, KmetroConfig, PositionsConfig};
pub use app_error::KmetroAppError;
pub use kmetro_app::KmetroApp;
pub use operation::KmetroOperation;
