//! Cancelable delayed task used to coalesce bursts of text changes.
//!
//! [`DebounceGate`] keeps at most one pending task. Scheduling a new one aborts
//! the previous, so only the last task of a burst runs, once the window has
//! elapsed without further scheduling. Tasks are spawned with
//! [`tokio::task::spawn_local`] and therefore need a current [`tokio::task::LocalSet`].

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Owner of the single pending debounced task.
#[derive(Debug)]
pub struct DebounceGate {
    window: Duration,
    pending: RefCell<Option<JoinHandle<()>>>,
}

impl DebounceGate {
    /// Creates an idle gate with the given quiescence window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: RefCell::new(None),
        }
    }

    /// Delay between the last schedule and the task running.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Runs `task` after the window, replacing any pending task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a `LocalSet`.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let superseded = self.cancel();
        let window = self.window;
        let handle = tokio::task::spawn_local(async move {
            tokio::time::sleep(window).await;
            task.await;
        });
        tracing::trace!(
            window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX),
            superseded,
            "debounced task scheduled"
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Aborts the pending task.
    ///
    /// Returns whether a task was still waiting to run.
    pub fn cancel(&self) -> bool {
        self.pending.borrow_mut().take().is_some_and(|handle| {
            let waiting = !handle.is_finished();
            handle.abort();
            waiting
        })
    }

    /// Whether a scheduled task has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .borrow()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceGate {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    #[tokio::test(start_paused = true)]
    async fn burst_runs_only_last_task() {
        LocalSet::new()
            .run_until(async {
                let gate = DebounceGate::new(Duration::from_millis(300));
                let fired = Rc::new(Cell::new(0));

                for value in 1..=3 {
                    let fired = Rc::clone(&fired);
                    gate.schedule(async move { fired.set(value) });
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
                assert_eq!(fired.get(), 0);
                assert!(gate.is_pending());

                tokio::time::sleep(Duration::from_millis(250)).await;
                assert_eq!(fired.get(), 3);
                assert!(!gate.is_pending());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_never_runs() {
        LocalSet::new()
            .run_until(async {
                let gate = DebounceGate::new(Duration::from_millis(300));
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                gate.schedule(async move { flag.set(true) });

                assert!(gate.cancel());
                assert!(!gate.cancel());

                tokio::time::sleep(Duration::from_secs(1)).await;
                assert!(!fired.get());
            })
            .await;
    }
}
