use std::str::FromStr;

use geo::{LineString, Point};
use serde::{Deserialize, Serialize};

use crate::util::{
    geo_codec::serialize_lat_lon,
    geo_ops::{interpolate, planar_distance},
};

/// one vertex of a route shape.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ShapePoint {
    #[serde(serialize_with = "serialize_lat_lon")]
    pub location: Point<f64>,
    /// cumulative distance from the first point of the shape
    pub distance_traveled: f64,
}

/// order of the points returned by [`Shape::sub_path`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathOrientation {
    /// shape order, from the lower matched index to the higher one
    Ascending,
    /// origin first, destination last, reversing shape order when needed
    #[default]
    Travel,
}

impl FromStr for PathOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" => Ok(PathOrientation::Ascending),
            "travel" => Ok(PathOrientation::Travel),
            other => Err(format!(
                "unknown path orientation '{other}', expected 'ascending' or 'travel'"
            )),
        }
    }
}

/// the polyline a route follows. distances along the shape are
/// non-decreasing, which is checked when the dataset is built.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Shape {
    pub shape_id: String,
    points: Vec<ShapePoint>,
}

impl Shape {
    /// builds a shape, returning an error message naming the first point
    /// whose distance decreases.
    pub fn new(shape_id: String, points: Vec<ShapePoint>) -> Result<Shape, String> {
        if let Some(idx) = points
            .windows(2)
            .position(|w| w[1].distance_traveled < w[0].distance_traveled)
        {
            return Err(format!(
                "shape '{shape_id}' has decreasing distance_traveled at point {}",
                idx + 1
            ));
        }
        Ok(Shape { shape_id, points })
    }

    pub fn points(&self) -> &[ShapePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn line_string(&self) -> LineString<f64> {
        self.points.iter().map(|p| p.location).collect()
    }

    /// index of the shape point closest to `location` by planar distance.
    /// ties resolve to the earliest point.
    pub fn nearest_point_index(&self, location: &Point<f64>) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(idx, p)| (idx, planar_distance(&p.location, location)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(idx, _)| idx)
    }

    /// the inclusive run of shape points between the points nearest to `from`
    /// and `to`. empty shapes produce `None`.
    pub fn sub_path(
        &self,
        from: &Point<f64>,
        to: &Point<f64>,
        orientation: PathOrientation,
    ) -> Option<LineString<f64>> {
        let from_idx = self.nearest_point_index(from)?;
        let to_idx = self.nearest_point_index(to)?;
        let (lo, hi) = (from_idx.min(to_idx), from_idx.max(to_idx));
        let slice = self.points[lo..=hi].iter().map(|p| p.location);
        let path = match orientation {
            PathOrientation::Travel if from_idx > to_idx => slice.rev().collect(),
            _ => slice.collect(),
        };
        Some(path)
    }

    /// location at a cumulative distance along the shape.
    ///
    /// finds the first pair of consecutive points whose distances straddle
    /// `distance` and interpolates between them. when no such pair exists the
    /// last point is returned.
    pub fn point_at_distance(&self, distance: f64) -> Option<Point<f64>> {
        let bracket = self
            .points
            .windows(2)
            .find(|w| w[0].distance_traveled <= distance && distance <= w[1].distance_traveled);
        match bracket {
            Some(w) => {
                let span = w[1].distance_traveled - w[0].distance_traveled;
                let fraction = if span > 0.0 {
                    (distance - w[0].distance_traveled) / span
                } else {
                    0.0
                };
                Some(interpolate(&w[0].location, &w[1].location, fraction))
            }
            None => self.points.last().map(|p| p.location),
        }
    }
}
