use geo::Point;
use kmetro_core::model::{Shape, StopTime};
use kmetro_core::util::{geo_ops, ServiceTime};

/// where a train is relative to one stop pair `(A, B)` of its trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentState {
    /// `arrival(A) <= now < departure(A)`
    AtStation,
    /// `departure(A) <= now <= arrival(B)`, with the fraction of the hop covered
    InTransit { progress: f64 },
}

/// the state of a train on the hop from `a` to `b` at `now`, or `None` when
/// `now` falls outside `[arrival(a), arrival(b)]`.
pub fn segment_state(a: &StopTime, b: &StopTime, now: &ServiceTime) -> Option<SegmentState> {
    if a.arrival <= *now && *now < a.departure {
        Some(SegmentState::AtStation)
    } else if a.departure <= *now && *now <= b.arrival {
        Some(SegmentState::InTransit {
            progress: progress(&a.departure, &b.arrival, now),
        })
    } else {
        None
    }
}

/// fraction of the hop from `departure` to `arrival` elapsed at `now`.
/// a hop with no running time counts as complete.
pub fn progress(departure: &ServiceTime, arrival: &ServiceTime, now: &ServiceTime) -> f64 {
    let span = departure.seconds_until(arrival);
    if span <= 0 {
        return 1.0;
    }
    departure.seconds_until(now) as f64 / span as f64
}

pub fn linear_position(a: &Point<f64>, b: &Point<f64>, progress: f64) -> Point<f64> {
    geo_ops::interpolate(a, b, progress)
}

/// position along `shape` for a train `progress` of the way from `a` to `b`.
///
/// both stations are snapped to their nearest shape point and the target is
/// interpolated on the cumulative distances of those points. `None` when the
/// shape has no points.
pub fn route_following_position(
    shape: &Shape,
    a: &Point<f64>,
    b: &Point<f64>,
    progress: f64,
) -> Option<Point<f64>> {
    let points = shape.points();
    let dist_a = points.get(shape.nearest_point_index(a)?)?.distance_traveled;
    let dist_b = points.get(shape.nearest_point_index(b)?)?.distance_traveled;
    let target = dist_a * (1.0 - progress) + dist_b * progress;
    shape.point_at_distance(target)
}
