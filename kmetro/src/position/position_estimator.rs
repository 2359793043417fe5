use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};
use geo::Point;
use itertools::Itertools;
use kmetro_core::dataset::Dataset;
use kmetro_core::model::{Station, TripSchedule};
use kmetro_core::util::ServiceTime;

use super::segment_ops::{self, SegmentState};
use super::{InterpolationPolicy, MarkerStyle, PositionSnapshot, TrainPosition, TrainStatus};

/// places every running train on the line from its timetable alone.
#[derive(Debug, Clone)]
pub struct PositionEstimator {
    dataset: Arc<Dataset>,
    policy: InterpolationPolicy,
}

impl PositionEstimator {
    pub fn new(dataset: Arc<Dataset>, policy: InterpolationPolicy) -> PositionEstimator {
        PositionEstimator { dataset, policy }
    }

    pub fn policy(&self) -> InterpolationPolicy {
        self.policy
    }

    /// positions of all trains running at `at`. a `selected` trip keeps its
    /// status and location and is only drawn differently.
    pub fn positions_at(&self, at: NaiveDateTime, selected: Option<&str>) -> PositionSnapshot {
        let now = ServiceTime::from_naive_time(&at.time());
        let weekday = at.weekday();
        let trains = self
            .dataset
            .schedules()
            .iter()
            .unique_by(|schedule| schedule.trip_id.clone())
            .filter(|schedule| self.dataset.trip_runs_on(&schedule.trip_id, weekday))
            .filter_map(|schedule| {
                let is_selected = selected == Some(schedule.trip_id.as_str());
                self.trip_position(schedule, &now, is_selected)
            })
            .collect_vec();
        log::debug!("{} trains active at {at} ({})", trains.len(), self.policy);
        PositionSnapshot {
            at,
            selected: selected.map(String::from),
            trains,
        }
    }

    /// the position of one trip at `now`. the first stop pair whose time
    /// window contains `now` decides; `None` when the trip is not running.
    pub fn trip_position(
        &self,
        schedule: &TripSchedule,
        now: &ServiceTime,
        selected: bool,
    ) -> Option<TrainPosition> {
        let trip = self.dataset.trip(&schedule.trip_id)?;
        schedule.segments().find_map(|(a, b)| {
            let state = segment_ops::segment_state(a, b, now)?;
            let station_a = self.dataset.station(&a.stop_id)?;
            let station_b = self.dataset.station(&b.stop_id)?;
            let (status, location, progress) = match state {
                SegmentState::AtStation => (TrainStatus::AtStation, station_a.location, None),
                SegmentState::InTransit { progress } => (
                    TrainStatus::InTransit,
                    self.locate(&schedule.trip_id, station_a, station_b, progress),
                    Some(progress),
                ),
            };
            Some(TrainPosition {
                trip_id: schedule.trip_id.clone(),
                status,
                location,
                direction: trip.direction,
                from_stop: a.stop_id.clone(),
                to_stop: b.stop_id.clone(),
                progress,
                marker: MarkerStyle::new(trip.direction, status, selected),
            })
        })
    }

    fn locate(&self, trip_id: &str, a: &Station, b: &Station, progress: f64) -> Point<f64> {
        let linear = || segment_ops::linear_position(&a.location, &b.location, progress);
        match self.policy {
            InterpolationPolicy::Linear => linear(),
            InterpolationPolicy::RouteFollowing => self
                .dataset
                .shape_for_trip(trip_id)
                .and_then(|shape| {
                    segment_ops::route_following_position(shape, &a.location, &b.location, progress)
                })
                .unwrap_or_else(linear),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_fixture::{kochi_mini, sunday_at, weekday_at};
    use geo::BoundingRect;

    fn estimator(policy: InterpolationPolicy) -> PositionEstimator {
        PositionEstimator::new(kochi_mini(), policy)
    }

    fn station_location(estimator: &PositionEstimator, stop_id: &str) -> Point<f64> {
        estimator
            .dataset
            .station(stop_id)
            .map(|s| s.location)
            .expect("fixture station")
    }

    const POLICIES: [InterpolationPolicy; 2] =
        [InterpolationPolicy::Linear, InterpolationPolicy::RouteFollowing];

    #[test]
    fn test_inactive_before_first_departure_and_after_last_arrival() {
        let est = estimator(InterpolationPolicy::RouteFollowing);
        assert!(est.positions_at(weekday_at(7, 59, 59), None).trains.is_empty());
        let late = est.positions_at(weekday_at(8, 22, 1), None);
        assert!(late.train("WK_T01").is_none());
    }

    #[test]
    fn test_dwelling_at_origin() {
        let est = estimator(InterpolationPolicy::RouteFollowing);
        let snapshot = est.positions_at(weekday_at(8, 0, 0), None);
        let train = snapshot.train("WK_T01").expect("WK_T01 is at Aluva");
        assert_eq!(train.status, TrainStatus::AtStation);
        assert_eq!(train.location, station_location(&est, "ALVA"));
        assert_eq!(train.progress, None);
        assert_eq!(train.marker.outline, "#FFD700");
    }

    #[test]
    fn test_positions_match_stations_at_hop_ends() {
        for policy in POLICIES {
            let est = estimator(policy);
            let leaving = est.positions_at(weekday_at(8, 0, 30), None);
            let train = leaving.train("WK_T01").expect("WK_T01 is running");
            assert_eq!(train.status, TrainStatus::InTransit);
            assert_eq!(train.progress, Some(0.0));
            assert_eq!(train.location, station_location(&est, "ALVA"));

            let arriving = est.positions_at(weekday_at(8, 8, 0), None);
            let train = arriving.train("WK_T01").expect("WK_T01 is running");
            assert_eq!(train.status, TrainStatus::InTransit);
            assert_eq!(train.progress, Some(1.0));
            assert_eq!(train.location, station_location(&est, "KLMT"));
            assert_eq!(train.to_stop, "KLMT");
        }
    }

    #[test]
    fn test_midway_linear_and_route_following_differ() {
        let at = weekday_at(8, 4, 15);

        let linear = estimator(InterpolationPolicy::Linear).positions_at(at, None);
        let train = linear.train("WK_T01").expect("running");
        assert_eq!(train.progress, Some(0.5));
        assert!((train.location.x() - 76.335).abs() < 1e-9);
        assert!((train.location.y() - 10.085).abs() < 1e-9);

        // target distance 3050 lies just past the shape point at 2900
        let routed = estimator(InterpolationPolicy::RouteFollowing).positions_at(at, None);
        let train = routed.train("WK_T01").expect("running");
        assert!((train.location.x() - 76.3390625).abs() < 1e-9);
        assert!((train.location.y() - 10.083828125).abs() < 1e-9);
    }

    #[test]
    fn test_route_following_stays_on_shape_bounds() {
        let est = estimator(InterpolationPolicy::RouteFollowing);
        let bounds = est
            .dataset
            .primary_shape()
            .and_then(|s| s.line_string().bounding_rect())
            .expect("fixture shape has points");
        let eps = 1e-12;
        for second in (8 * 3600)..=(9 * 3600 + 45 * 60) {
            let at = weekday_at(second / 3600, (second / 60) % 60, second % 60);
            for train in est.positions_at(at, None).trains {
                let p = train.location;
                assert!(p.x() >= bounds.min().x - eps && p.x() <= bounds.max().x + eps);
                assert!(p.y() >= bounds.min().y - eps && p.y() <= bounds.max().y + eps);
            }
        }
    }

    #[test]
    fn test_trip_without_shape_id_follows_primary_shape() {
        let est = estimator(InterpolationPolicy::RouteFollowing);
        // WK_A03 has no shape_id and is published twice
        let snapshot = est.positions_at(weekday_at(9, 24, 0), None);
        let trains = snapshot
            .trains
            .iter()
            .filter(|t| t.trip_id == "WK_A03")
            .collect_vec();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].from_stop, "MGRD");
        assert_eq!(trains[0].progress, Some(0.5));
        // halfway by shape distance between MGRD (16000) and EDAP (10200) is 13100,
        // just short of the shape point at 13300
        let expected_x = 76.295 * (1.0 - 200.0 / 3100.0) + 76.308 * (200.0 / 3100.0);
        assert!((trains[0].location.x() - expected_x).abs() < 1e-9);
    }

    #[test]
    fn test_calendar_filters_trains() {
        let est = estimator(InterpolationPolicy::RouteFollowing);
        let sunday = est.positions_at(sunday_at(8, 4, 15), None);
        assert!(sunday.train("WK_T01").is_none());
        let sunday = est.positions_at(sunday_at(9, 20, 0), None);
        assert!(sunday.train("WE_A01").is_some());
        let weekday = est.positions_at(weekday_at(9, 20, 0), None);
        assert!(weekday.train("WE_A01").is_none());
    }

    #[test]
    fn test_selection_only_changes_marker() {
        let est = estimator(InterpolationPolicy::RouteFollowing);
        let at = weekday_at(9, 10, 0);
        let plain = est.positions_at(at, None);
        let highlighted = est.positions_at(at, Some("WK_T02"));
        assert_eq!(highlighted.selected.as_deref(), Some("WK_T02"));
        assert_eq!(plain.trains.len(), highlighted.trains.len());
        for (a, b) in plain.trains.iter().zip(highlighted.trains.iter()) {
            assert_eq!(a.trip_id, b.trip_id);
            assert_eq!(a.status, b.status);
            assert_eq!(a.location, b.location);
            if b.trip_id == "WK_T02" {
                assert_eq!(b.marker.fill, "#32cd32");
            } else {
                assert_eq!(a.marker, b.marker);
            }
        }
        assert_eq!(
            plain.train("WK_A02").map(|t| t.marker.fill),
            Some("#F44336")
        );
    }
}
