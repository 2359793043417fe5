use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;

use crate::dataset::{
    raw::RawDataset, Dataset, DatasetError, DatasetResource, DatasetSource, DatasetSourceConfig,
};

/// loads the six dataset resources from a source at most once and caches the
/// outcome for the lifetime of the loader.
///
/// a failed load is cached too: later calls to [`DatasetLoader::snapshot`]
/// report [`DatasetError::LoadFailed`] without touching the source again.
pub struct DatasetLoader {
    source: Box<dyn DatasetSource>,
    outcome: OnceLock<Result<Arc<Dataset>, String>>,
}

impl DatasetLoader {
    pub fn new(source: Box<dyn DatasetSource>) -> DatasetLoader {
        DatasetLoader {
            source,
            outcome: OnceLock::new(),
        }
    }

    pub fn from_config(config: &DatasetSourceConfig) -> Result<DatasetLoader, DatasetError> {
        Ok(DatasetLoader::new(config.build()?))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome.get(), Some(Ok(_)))
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.outcome.get(), Some(Err(_)))
    }

    /// the cached dataset, loading it on first use. every resource must load
    /// and validate, otherwise the whole load fails. the first failing call
    /// returns the underlying error.
    pub fn snapshot(&self) -> Result<Arc<Dataset>, DatasetError> {
        let mut first_error = None;
        let outcome = self.outcome.get_or_init(|| match self.load() {
            Ok(dataset) => Ok(Arc::new(dataset)),
            Err(e) => {
                let msg = e.to_string();
                first_error = Some(e);
                Err(msg)
            }
        });
        match (outcome, first_error) {
            (Ok(dataset), _) => Ok(dataset.clone()),
            (Err(_), Some(e)) => Err(e),
            (Err(msg), None) => Err(DatasetError::LoadFailed(msg.clone())),
        }
    }

    fn load(&self) -> Result<Dataset, DatasetError> {
        log::info!("loading dataset from {}", self.source.describe());
        let raw = RawDataset {
            stops: self.read(DatasetResource::Stops)?,
            shapes: self.read(DatasetResource::Shapes)?,
            stop_times: self.read(DatasetResource::StopTimes)?,
            trips: self.read(DatasetResource::Trips)?,
            calendar: self.read(DatasetResource::Calendar)?,
            fares: self.read(DatasetResource::Fares)?,
        };
        Dataset::try_from(raw)
    }

    fn read<T: DeserializeOwned>(&self, resource: DatasetResource) -> Result<T, DatasetError> {
        let text = self.source.fetch(resource)?;
        log::debug!("read {} ({} bytes)", resource, text.len());
        serde_json::from_str(&text).map_err(|source| DatasetError::ParseError { resource, source })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dataset::DirectorySource;
    use chrono::Weekday;
    use std::{
        path::PathBuf,
        sync::atomic::{AtomicUsize, Ordering},
    };

    fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("kochi_mini")
    }

    /// wraps the fixture directory and counts fetches, optionally failing one resource.
    struct CountingSource {
        inner: DirectorySource,
        fetches: Arc<AtomicUsize>,
        fail_on: Option<DatasetResource>,
    }

    impl DatasetSource for CountingSource {
        fn fetch(&self, resource: DatasetResource) -> Result<String, DatasetError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_on == Some(resource) {
                return Err(DatasetError::SourceBuildError(format!("{resource} unavailable")));
            }
            self.inner.fetch(resource)
        }

        fn describe(&self) -> String {
            String::from("counting fixture")
        }
    }

    fn counting_loader(fail_on: Option<DatasetResource>) -> (DatasetLoader, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            inner: DirectorySource::new(fixture_dir()),
            fetches: fetches.clone(),
            fail_on,
        };
        (DatasetLoader::new(Box::new(source)), fetches)
    }

    #[test]
    fn test_load_fixture() {
        let loader = DatasetLoader::new(Box::new(DirectorySource::new(fixture_dir())));
        let dataset = loader.snapshot().expect("fixture should load");

        let ids = dataset
            .stations()
            .iter()
            .map(|s| s.stop_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["ALVA", "KLMT", "EDAP", "MGRD"]);

        let aluva = dataset.station("ALVA").unwrap();
        assert_eq!(aluva.name, "Aluva");
        assert!(aluva.wheelchair_accessible);
        assert_eq!(aluva.translated_names(), "ആലുവ");
        assert!(!dataset.station("MGRD").unwrap().wheelchair_accessible);

        // WK_A03 is published twice
        assert_eq!(dataset.schedules().len(), 7);
        assert_eq!(dataset.schedule("WK_T01").unwrap().stop_times.len(), 4);
        assert_eq!(dataset.primary_shape().unwrap().points().len(), 7);
        assert_eq!(dataset.fare("ALVA", "MGRD"), Some(30));
    }

    #[test]
    fn test_service_calendar_is_authoritative() {
        let loader = DatasetLoader::new(Box::new(DirectorySource::new(fixture_dir())));
        let dataset = loader.snapshot().unwrap();
        assert!(dataset.trip_runs_on("WK_A01", Weekday::Mon));
        assert!(!dataset.trip_runs_on("WK_A01", Weekday::Sun));
        assert!(dataset.trip_runs_on("WE_A01", Weekday::Sun));
        assert!(!dataset.trip_runs_on("WE_A01", Weekday::Sat));
        assert!(!dataset.trip_runs_on("NO_SUCH_TRIP", Weekday::Mon));
    }

    #[test]
    fn test_shape_for_trip_falls_back_to_primary() {
        let loader = DatasetLoader::new(Box::new(DirectorySource::new(fixture_dir())));
        let dataset = loader.snapshot().unwrap();
        let primary = dataset.primary_shape().unwrap().shape_id.clone();
        assert_eq!(dataset.shape_for_trip("WK_A03").unwrap().shape_id, primary);
        assert_eq!(dataset.shape_for_trip("WK_T01").unwrap().shape_id, "KMRL_MAIN");
        assert!(dataset.shape_for_trip("NO_SUCH_TRIP").is_none());
    }

    #[test]
    fn test_snapshot_is_cached() {
        let (loader, fetches) = counting_loader(None);
        assert!(!loader.is_loaded());
        let first = loader.snapshot().unwrap();
        let second = loader.snapshot().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(loader.is_loaded());
        assert_eq!(fetches.load(Ordering::SeqCst), DatasetResource::ALL.len());
    }

    /// serves the fixture with one resource replaced by `text`.
    struct PatchedSource {
        inner: DirectorySource,
        resource: DatasetResource,
        text: String,
    }

    impl DatasetSource for PatchedSource {
        fn fetch(&self, resource: DatasetResource) -> Result<String, DatasetError> {
            if resource == self.resource {
                return Ok(self.text.clone());
            }
            self.inner.fetch(resource)
        }

        fn describe(&self) -> String {
            String::from("patched fixture")
        }
    }

    #[test]
    fn test_overflowing_stop_time_is_malformed() {
        let text = r#"{"trips": [{"trip": {"id": "WK_T01", "stops": [
            ["ALVA", "4000000:00:00", "4000000:00:30", 0],
            ["KLMT", "08:08:00", "08:08:30", 6100]
        ]}}]}"#;
        let source = PatchedSource {
            inner: DirectorySource::new(fixture_dir()),
            resource: DatasetResource::StopTimes,
            text: String::from(text),
        };
        let loader = DatasetLoader::new(Box::new(source));
        let result = loader.snapshot();
        assert!(matches!(
            result,
            Err(DatasetError::MalformedData {
                resource: DatasetResource::StopTimes,
                ..
            })
        ));
    }

    #[test]
    fn test_single_resource_failure_fails_whole_load() {
        let (loader, _) = counting_loader(Some(DatasetResource::Fares));
        assert!(loader.snapshot().is_err());
        assert!(!loader.is_loaded());
        assert!(loader.has_failed());
    }

    #[test]
    fn test_failed_load_is_not_retried() {
        let (loader, fetches) = counting_loader(Some(DatasetResource::Fares));
        let first = loader.snapshot();
        assert!(matches!(first, Err(DatasetError::SourceBuildError(_))));
        assert_eq!(fetches.load(Ordering::SeqCst), DatasetResource::ALL.len());

        let second = loader.snapshot();
        assert!(
            matches!(second, Err(DatasetError::LoadFailed(msg)) if msg.contains("fare.json"))
        );
        assert_eq!(fetches.load(Ordering::SeqCst), DatasetResource::ALL.len());
        assert!(!loader.is_loaded());
    }
}
