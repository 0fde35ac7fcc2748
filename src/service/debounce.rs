use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Trailing-edge debouncer: collapses a burst of calls into one
/// invocation of the wrapped function, carrying the last call's
/// argument. At most one timer is pending at any time.
pub struct Debouncer<T> {
    delay: Duration,
    func: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, func: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            func: Arc::new(func),
            pending: Mutex::new(None),
        }
    }

    /// Start (or restart) the quiet-window timer with `arg`. A pending
    /// invocation that has not fired yet is superseded; once the window
    /// elapses undisturbed the wrapped function runs exactly once.
    pub fn call(&self, arg: T) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let func = Arc::clone(&self.func);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            func(arg);
        }));
    }
}
