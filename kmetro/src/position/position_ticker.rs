use std::{sync::Arc, time::Duration};

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{Clock, PositionEstimator, PositionSnapshot};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// snapshots buffered per subscriber before it starts lagging.
const SNAPSHOT_BUFFER: usize = 16;

/// recomputes train positions on a fixed period and broadcasts each snapshot.
///
/// the timer runs as a single task on the current tokio runtime. subscribers
/// each receive every snapshot published after they subscribed. dropping the
/// ticker stops the task.
pub struct PositionTicker {
    snapshots: broadcast::Sender<Arc<PositionSnapshot>>,
    selection: watch::Sender<Option<String>>,
    task: JoinHandle<()>,
}

impl PositionTicker {
    /// starts the timer task. must be called from within a tokio runtime.
    pub fn spawn(
        estimator: Arc<PositionEstimator>,
        clock: Arc<dyn Clock>,
        period: Duration,
    ) -> PositionTicker {
        let (snapshots, _) = broadcast::channel(SNAPSHOT_BUFFER);
        let (selection, selection_rx) = watch::channel(None::<String>);
        let publisher = snapshots.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let selected = selection_rx.borrow().clone();
                let snapshot = estimator.positions_at(clock.now(), selected.as_deref());
                // only fails while nobody is subscribed
                if publisher.send(Arc::new(snapshot)).is_err() {
                    log::trace!("position snapshot dropped, no subscribers");
                }
            }
        });
        log::debug!("position ticker started with period {period:?}");
        PositionTicker {
            snapshots,
            selection,
            task,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<PositionSnapshot>> {
        self.snapshots.subscribe()
    }

    /// highlights `trip_id` from the next snapshot on, or clears the highlight.
    pub fn select(&self, trip_id: Option<String>) {
        self.selection.send_replace(trip_id);
    }

    pub fn shutdown(self) {}
}

impl Drop for PositionTicker {
    fn drop(&mut self) {
        self.task.abort();
        log::debug!("position ticker stopped");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::position::{FixedClock, InterpolationPolicy};
    use crate::test_fixture::{kochi_mini, weekday_at};
    use tokio::sync::broadcast::error::RecvError;

    fn ticker() -> PositionTicker {
        let estimator = Arc::new(PositionEstimator::new(
            kochi_mini(),
            InterpolationPolicy::RouteFollowing,
        ));
        let clock = Arc::new(FixedClock::new(weekday_at(8, 4, 15)));
        PositionTicker::spawn(estimator, clock, Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_every_subscriber_receives_snapshots() {
        let ticker = ticker();
        let mut first = ticker.subscribe();
        let mut second = ticker.subscribe();
        let a = first.recv().await.expect("snapshot");
        let b = second.recv().await.expect("snapshot");
        assert_eq!(a, b);
        assert!(a.train("WK_T01").is_some());
        ticker.shutdown();
    }

    #[tokio::test]
    async fn test_selection_reaches_later_snapshots() {
        let ticker = ticker();
        let mut rx = ticker.subscribe();
        ticker.select(Some(String::from("WK_T01")));
        let mut highlighted = None;
        for _ in 0..20 {
            match rx.recv().await {
                Ok(snapshot) if snapshot.selected.is_some() => {
                    highlighted = Some(snapshot);
                    break;
                }
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
        let snapshot = highlighted.expect("a snapshot with the selection");
        let train = snapshot.train("WK_T01").expect("WK_T01 is running");
        assert_eq!(train.marker.fill, "#32cd32");
    }

    #[tokio::test]
    async fn test_drop_closes_the_channel() {
        let ticker = ticker();
        let mut rx = ticker.subscribe();
        drop(ticker);
        loop {
            match rx.recv().await {
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    }
}
