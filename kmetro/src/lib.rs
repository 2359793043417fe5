//! departure queries, station boards and schedule-based train positions for the
//! Kochi Metro line, built over the immutable dataset loaded by `kmetro-core`.
pub mod app;
pub mod position;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_fixture;
