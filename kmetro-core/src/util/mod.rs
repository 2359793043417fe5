pub mod geo_codec;
pub mod geo_ops;
mod service_time;
pub mod time_ops;

pub use service_time::{ServiceTime, ServiceTimeError};
