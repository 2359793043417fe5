mod clock;
mod interpolation_policy;
mod marker_style;
mod position_estimator;
mod position_ticker;
mod segment_ops;
mod train_position;
mod train_status;

pub use clock::{Clock, FixedClock, SystemClock, KOCHI_UTC_OFFSET_MINUTES};
pub use interpolation_policy::InterpolationPolicy;
pub use marker_style::MarkerStyle;
pub use position_estimator::PositionEstimator;
pub use position_ticker::{PositionTicker, DEFAULT_TICK_INTERVAL};
pub use segment_ops::SegmentState;
pub use train_position::{PositionSnapshot, TrainPosition};
pub use train_status::TrainStatus;
