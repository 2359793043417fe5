use geo::{Distance, Euclidean, Point};

/// point at `fraction` of the way from `a` to `b`, computed on raw lon/lat.
/// fractions of exactly 0 and 1 return the endpoints unchanged.
pub fn interpolate(a: &Point<f64>, b: &Point<f64>, fraction: f64) -> Point<f64> {
    Point::from(a.0 * (1.0 - fraction) + b.0 * fraction)
}

/// planar distance in degrees. acceptable at the scale of a single city line.
pub fn planar_distance(a: &Point<f64>, b: &Point<f64>) -> f64 {
    Euclidean.distance(*a, *b)
}
