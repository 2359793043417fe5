use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how a train between two stations is placed on the map.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationPolicy {
    /// straight line between the two station coordinates
    Linear,
    /// along the route shape, by cumulative shape distance
    #[default]
    RouteFollowing,
}

impl Display for InterpolationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolationPolicy::Linear => write!(f, "linear"),
            InterpolationPolicy::RouteFollowing => write!(f, "route_following"),
        }
    }
}
