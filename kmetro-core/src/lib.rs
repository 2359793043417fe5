//! static dataset model and loader for the Kochi Metro schedule engine.
//!
//! the dataset is six JSON files (stops, shapes, stop times, trips, service
//! calendar, fares). [`dataset::DatasetLoader`] reads them once from a
//! [`dataset::DatasetSource`] and produces an immutable [`dataset::Dataset`]
//! that the query engines in the `kmetro` crate share.
pub mod dataset;
pub mod model;
pub mod util;
