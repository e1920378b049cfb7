//! Periodic greeting refresh
//!
//! The only recurring background work in the dashboard: once per interval
//! the time of day is re-evaluated and published through a watch channel.
//! The task is owned by the ticker handle and aborted on stop or drop, so
//! a torn-down view cannot leak it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use fitness_dashboard_engine::greeting::TimeOfDay;

use crate::clock::Clock;
use crate::error::AppResult;

/// Owned handle around the greeting refresh task
pub struct GreetingTicker {
    clock: Arc<dyn Clock>,
    interval: Duration,
    sender: watch::Sender<TimeOfDay>,
    task: Option<JoinHandle<()>>,
}

impl GreetingTicker {
    /// Create a stopped ticker seeded with the clock's current time of day
    pub fn new(clock: Arc<dyn Clock>, interval: Duration) -> AppResult<Self> {
        let initial = TimeOfDay::from_hour(clock.current_hour())?;
        let (sender, _) = watch::channel(initial);
        Ok(Self {
            clock,
            interval,
            sender,
            task: None,
        })
    }

    /// Subscribe to time-of-day updates
    pub fn subscribe(&self) -> watch::Receiver<TimeOfDay> {
        self.sender.subscribe()
    }

    /// Latest published time of day
    pub fn current(&self) -> TimeOfDay {
        *self.sender.borrow()
    }

    /// Whether the refresh task is running
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start the refresh task; starting an already-running ticker is a
    /// no-op
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let clock = Arc::clone(&self.clock);
        let sender = self.sender.clone();
        let period = self.interval;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; the channel is already
            // seeded at construction, so skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match TimeOfDay::from_hour(clock.current_hour()) {
                    Ok(time_of_day) => {
                        let changed = sender.send_if_modified(|current| {
                            if *current == time_of_day {
                                false
                            } else {
                                *current = time_of_day;
                                true
                            }
                        });
                        if changed {
                            debug!(?time_of_day, "greeting updated");
                        }
                    }
                    Err(err) => warn!(error = %err, "clock produced an invalid hour"),
                }
            }
        }));
    }

    /// Stop the refresh task
    ///
    /// Must be called when the owning view is torn down; drop does the
    /// same as a backstop.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for GreetingTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn fixed(hour: u32) -> Arc<dyn Clock> {
        Arc::new(FixedClock {
            hour,
            month: 3,
            year: 2026,
        })
    }

    #[tokio::test]
    async fn test_ticker_seeds_from_clock() {
        let ticker = GreetingTicker::new(fixed(9), Duration::from_secs(60)).unwrap();
        assert_eq!(ticker.current(), TimeOfDay::Morning);
        assert!(!ticker.is_running());
    }

    #[tokio::test]
    async fn test_invalid_clock_hour_is_rejected() {
        assert!(GreetingTicker::new(fixed(99), Duration::from_secs(60)).is_err());
    }

    #[tokio::test]
    async fn test_start_and_stop() {
        let mut ticker = GreetingTicker::new(fixed(13), Duration::from_millis(5)).unwrap();
        ticker.start();
        assert!(ticker.is_running());

        // A second start must not replace the running task
        ticker.start();
        assert!(ticker.is_running());

        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[tokio::test]
    async fn test_ticker_publishes_current_time_of_day() {
        let mut ticker = GreetingTicker::new(fixed(18), Duration::from_millis(5)).unwrap();
        let mut updates = ticker.subscribe();
        ticker.start();

        // The seeded value is already Evening; ticks keep it stable
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert_eq!(*updates.borrow_and_update(), TimeOfDay::Evening);

        ticker.stop();
    }

    #[tokio::test]
    async fn test_drop_aborts_the_task() {
        let mut ticker = GreetingTicker::new(fixed(9), Duration::from_millis(5)).unwrap();
        ticker.start();
        drop(ticker);
        // Dropping must not leave the task running or hang the runtime;
        // reaching this point is the assertion.
    }
}
