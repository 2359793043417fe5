use std::{io::Write, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{value_parser, Subcommand};
use geo::LineString;
use kmetro_core::dataset::{Dataset, DatasetLoader};
use kmetro_core::model::{PathOrientation, Station};
use kmetro_core::util::geo_codec::serialize_lat_lon_path;
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;

use super::cli_ops::{self, parse_time};
use super::{KmetroAppError, KmetroConfig};
use crate::position::{Clock, InterpolationPolicy, PositionEstimator, PositionTicker};
use crate::schedule::{Departure, DepartureQuery, ItineraryStop, ScheduleEngine};

#[derive(Debug, Clone, Subcommand)]
pub enum KmetroOperation {
    /// list all stations in line order
    Stations,
    /// next trains between two stations
    Departures {
        /// origin stop id, e.g. EDAP
        #[arg(long)]
        from: String,
        /// destination stop id, e.g. ALVA
        #[arg(long)]
        to: String,
        /// service date, defaults to today
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        date: Option<NaiveDate>,
        /// reference time as HH:MM or HH:MM:SS, defaults to now
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// overrides departures.limit
        #[arg(long)]
        limit: Option<usize>,
    },
    /// next trains leaving one station, per direction
    Board {
        #[arg(long)]
        station: String,
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
    },
    /// stops of one trip between two stations
    Itinerary {
        #[arg(long)]
        trip: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// ticket price between two stations
    Fare {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// estimated positions of all running trains
    Positions {
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// trip id to highlight
        #[arg(long)]
        selected: Option<String>,
        /// overrides positions.interpolation
        #[arg(long, value_enum)]
        interpolation: Option<InterpolationPolicy>,
    },
    /// route geometry between two stations
    SubPath {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// `travel` (from first) or `ascending` (shape order)
        #[arg(long, default_value = "travel")]
        orientation: PathOrientation,
        /// shape id, defaults to the primary shape
        #[arg(long)]
        shape: Option<String>,
    },
    /// print a position snapshot on every tick of the wall clock
    Watch {
        /// stop after this many snapshots
        #[arg(long)]
        ticks: Option<usize>,
        #[arg(long)]
        selected: Option<String>,
        #[arg(long, value_enum)]
        interpolation: Option<InterpolationPolicy>,
    },
}

#[derive(Serialize)]
struct DeparturesReport<'a> {
    origin: &'a str,
    destination: &'a str,
    reference: NaiveDateTime,
    fare: Option<u32>,
    departures: Vec<Departure>,
}

#[derive(Serialize)]
struct ItineraryReport<'a> {
    trip_id: &'a str,
    stops: Vec<ItineraryStop>,
}

#[derive(Serialize)]
struct FareReport<'a> {
    origin: &'a str,
    destination: &'a str,
    fare: Option<u32>,
}

#[derive(Serialize)]
struct SubPathReport<'a> {
    shape_id: Option<&'a str>,
    origin: &'a str,
    destination: &'a str,
    orientation: PathOrientation,
    #[serde(serialize_with = "serialize_lat_lon_path")]
    path: LineString<f64>,
}

impl KmetroOperation {
    /// loads the configured dataset and runs this operation, writing JSON to `out`.
    pub fn run<W: Write>(&self, config: &KmetroConfig, out: &mut W) -> Result<(), KmetroAppError> {
        let loader = DatasetLoader::from_config(&config.dataset)?;
        let dataset = loader.snapshot()?;
        self.run_with_dataset(dataset, config, out)
    }

    pub fn run_with_dataset<W: Write>(
        &self,
        dataset: Arc<Dataset>,
        config: &KmetroConfig,
        out: &mut W,
    ) -> Result<(), KmetroAppError> {
        let clock = config.clock.system_clock()?;
        match self {
            KmetroOperation::Stations => cli_ops::write_json(out, &dataset.stations()),
            KmetroOperation::Departures {
                from,
                to,
                date,
                time,
                limit,
            } => {
                require_station(&dataset, from)?;
                require_station(&dataset, to)?;
                let reference = cli_ops::reference_instant(*date, *time, &clock);
                let query = DepartureQuery::new(from, to, reference)
                    .with_limit(limit.unwrap_or(config.departures.limit));
                let engine = ScheduleEngine::new(dataset);
                let report = DeparturesReport {
                    origin: from,
                    destination: to,
                    reference,
                    fare: engine.fare(from, to),
                    departures: engine.next_departures(&query),
                };
                cli_ops::write_json(out, &report)
            }
            KmetroOperation::Board {
                station,
                date,
                time,
            } => {
                let reference = cli_ops::reference_instant(*date, *time, &clock);
                let engine = ScheduleEngine::new(dataset);
                let board = engine
                    .station_board(station, reference, config.departures.board_limit)
                    .ok_or_else(|| KmetroAppError::UnknownStation(station.clone()))?;
                cli_ops::write_json(out, &board)
            }
            KmetroOperation::Itinerary { trip, from, to } => {
                require_station(&dataset, from)?;
                require_station(&dataset, to)?;
                if dataset.schedule(trip).is_none() {
                    return Err(KmetroAppError::UnknownTrip(trip.clone()));
                }
                let engine = ScheduleEngine::new(dataset);
                let report = ItineraryReport {
                    trip_id: trip,
                    stops: engine.itinerary(trip, from, to),
                };
                cli_ops::write_json(out, &report)
            }
            KmetroOperation::Fare { from, to } => {
                require_station(&dataset, from)?;
                require_station(&dataset, to)?;
                let report = FareReport {
                    origin: from,
                    destination: to,
                    fare: dataset.fare(from, to),
                };
                cli_ops::write_json(out, &report)
            }
            KmetroOperation::Positions {
                date,
                time,
                selected,
                interpolation,
            } => {
                let at = cli_ops::reference_instant(*date, *time, &clock);
                let policy = interpolation.unwrap_or(config.positions.interpolation);
                let estimator = PositionEstimator::new(dataset, policy);
                let snapshot = estimator.positions_at(at, selected.as_deref());
                cli_ops::write_json(out, &snapshot)
            }
            KmetroOperation::SubPath {
                from,
                to,
                orientation,
                shape,
            } => {
                let origin = require_station(&dataset, from)?;
                let destination = require_station(&dataset, to)?;
                let shape = match shape {
                    Some(shape_id) => dataset.shape(shape_id),
                    None => dataset.primary_shape(),
                };
                let path = shape
                    .and_then(|s| s.sub_path(&origin.location, &destination.location, *orientation))
                    .unwrap_or_else(|| LineString::new(vec![]));
                let report = SubPathReport {
                    shape_id: shape.map(|s| s.shape_id.as_str()),
                    origin: from,
                    destination: to,
                    orientation: *orientation,
                    path,
                };
                cli_ops::write_json(out, &report)
            }
            KmetroOperation::Watch {
                ticks,
                selected,
                interpolation,
            } => {
                let policy = interpolation.unwrap_or(config.positions.interpolation);
                let estimator = Arc::new(PositionEstimator::new(dataset, policy));
                let clock: Arc<dyn Clock> = Arc::new(clock);
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| {
                        KmetroAppError::RuntimeError(format!(
                            "failure creating async rust tokio runtime: {e}"
                        ))
                    })?;
                runtime.block_on(async {
                    let ticker =
                        PositionTicker::spawn(estimator, clock, config.positions.tick_interval());
                    ticker.select(selected.clone());
                    let mut snapshots = ticker.subscribe();
                    let mut printed = 0;
                    loop {
                        if ticks.is_some_and(|limit| printed >= limit) {
                            break;
                        }
                        match snapshots.recv().await {
                            Ok(snapshot) => {
                                cli_ops::write_json_line(out, snapshot.as_ref())?;
                                printed += 1;
                            }
                            Err(RecvError::Lagged(skipped)) => {
                                log::warn!("output fell behind, skipped {skipped} snapshots")
                            }
                            Err(RecvError::Closed) => break,
                        }
                    }
                    ticker.shutdown();
                    Ok::<(), KmetroAppError>(())
                })
            }
        }
    }
}

fn require_station<'a>(dataset: &'a Dataset, stop_id: &str) -> Result<&'a Station, KmetroAppError> {
    dataset
        .station(stop_id)
        .ok_or_else(|| KmetroAppError::UnknownStation(stop_id.to_string()))
}
