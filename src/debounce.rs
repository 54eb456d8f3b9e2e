use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tracing::debug;

/// Default quiet window before a pending query propagates.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

enum Msg {
    Value(String),
    Cancel,
}

/// Collapses rapid successive values into a single downstream call.
///
/// Every [`call`](Self::call) restarts the quiet window; only when no new
/// value arrives for the full window does the latest value reach the
/// downstream function, exactly once. [`cancel`](Self::cancel) (or dropping
/// the debouncer) discards whatever is pending, so nothing fires after the
/// consumer is gone.
///
/// Runs a dedicated thread with `recv_timeout` as the timer, matching the
/// channel-driven loop the dashboard is built on.
pub struct Debouncer {
    tx: Sender<Msg>,
}

impl Debouncer {
    pub fn new<F>(delay: Duration, downstream: F) -> Self
    where
        F: Fn(String) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Msg>();
        thread::spawn(move || {
            let mut pending: Option<String> = None;
            loop {
                let msg = if pending.is_some() {
                    match rx.recv_timeout(delay) {
                        Ok(msg) => msg,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(value) = pending.take() {
                                debug!(value = %value, "debounce window elapsed");
                                downstream(value);
                            }
                            continue;
                        }
                        // Sender gone: drop the pending value, never fire late.
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(msg) => msg,
                        Err(_) => break,
                    }
                };
                match msg {
                    Msg::Value(value) => pending = Some(value),
                    Msg::Cancel => pending = None,
                }
            }
        });
        Debouncer { tx }
    }

    /// Schedules `value` for propagation, restarting the quiet window and
    /// replacing any value still pending.
    pub fn call(&self, value: impl Into<String>) {
        let _ = self.tx.send(Msg::Value(value.into()));
    }

    /// Discards the pending value, if any. The next `call` starts fresh.
    pub fn cancel(&self) {
        let _ = self.tx.send(Msg::Cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn collecting(delay: Duration) -> (Debouncer, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let debouncer = Debouncer::new(delay, move |value| {
            sink.lock().unwrap().push(value);
        });
        (debouncer, seen)
    }

    #[test]
    fn test_rapid_calls_collapse_to_last_value() {
        let (debouncer, seen) = collecting(Duration::from_millis(50));
        for value in ["r", "re", "rea", "reac", "react"] {
            debouncer.call(value);
        }
        thread::sleep(Duration::from_millis(250));
        assert_eq!(*seen.lock().unwrap(), vec!["react".to_string()]);
    }

    #[test]
    fn test_each_call_restarts_the_window() {
        let (debouncer, seen) = collecting(Duration::from_millis(200));
        debouncer.call("a");
        thread::sleep(Duration::from_millis(50));
        debouncer.call("ab");
        thread::sleep(Duration::from_millis(50));
        debouncer.call("abc");
        thread::sleep(Duration::from_millis(600));
        // Each call restarted the window, so only the last value fired.
        assert_eq!(*seen.lock().unwrap(), vec!["abc".to_string()]);
    }

    #[test]
    fn test_cancel_discards_pending_value() {
        let (debouncer, seen) = collecting(Duration::from_millis(50));
        debouncer.call("doomed");
        debouncer.cancel();
        thread::sleep(Duration::from_millis(200));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_drop_never_fires_late() {
        let (debouncer, seen) = collecting(Duration::from_millis(50));
        debouncer.call("late");
        drop(debouncer);
        thread::sleep(Duration::from_millis(200));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_separate_windows_fire_separately() {
        let (debouncer, seen) = collecting(Duration::from_millis(30));
        debouncer.call("first");
        thread::sleep(Duration::from_millis(150));
        debouncer.call("second");
        thread::sleep(Duration::from_millis(150));
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}
