//! Fixed-interval resource poller
//!
//! A [`Poller`] repeatedly fetches one resource and keeps the latest
//! successfully decoded value as a shared, read-only snapshot.
//!
//! ```text
//! start() ──► fetch ──► fetch ──► fetch ──► ... ──► stop() / drop
//!   gen N      │ ok      │ err     │ ok
//!              ▼         ▼         ▼
//!          snapshot   (kept)    snapshot
//! ```
//!
//! - The first fetch is issued immediately, then one per `interval` on a fixed
//!   schedule, whether or not the previous fetch has resolved.
//! - Failures are soft: logged, snapshot untouched, schedule continues.
//! - Every activation gets a new generation. A response is committed only if
//!   its generation is still current, so nothing from a stopped (or
//!   restarted) activation ever reaches the snapshot or the subscriber.
//! - Dropping the poller stops it.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// BoxFuture type alias for the type-erased fetch operation
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type Fetch<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, String>> + Send + Sync>;
type Subscriber<T> = Box<dyn Fn(Arc<T>) + Send>;

/// State shared between the poller handle and its in-flight fetches
struct Shared<T> {
    generation: u64,
    active: bool,
    snapshot: Option<Arc<T>>,
    subscriber: Option<Subscriber<T>>,
}

impl<T> Shared<T> {
    /// Commit a fetched value if it belongs to the current activation
    fn commit(&mut self, generation: u64, value: T) -> bool {
        if !self.active || self.generation != generation {
            return false;
        }

        let snapshot = Arc::new(value);
        self.snapshot = Some(snapshot.clone());
        if let Some(subscriber) = &self.subscriber {
            subscriber(snapshot);
        }
        true
    }
}

/// Polls one resource at a fixed interval
pub struct Poller<T> {
    name: String,
    interval: Duration,
    fetch: Fetch<T>,
    shared: Arc<Mutex<Shared<T>>>,
    schedule: Option<JoinHandle<()>>,
}

impl<T> fmt::Debug for Poller<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poller")
            .field("name", &self.name)
            .field("interval", &self.interval)
            .field("active", &self.is_active())
            .field("generation", &self.generation())
            .finish()
    }
}

impl<T: Send + Sync + 'static> Poller<T> {
    /// Create an inactive poller
    ///
    /// `name` identifies the resource in logs. `fetch` is called once per tick;
    /// its error only needs to be displayable since failures are never
    /// propagated. A zero `interval` is raised to one millisecond.
    pub fn new<F, Fut, E>(name: impl Into<String>, interval: Duration, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: fmt::Display + Send + 'static,
    {
        let fetch: Fetch<T> = Arc::new(move || {
            let fut = fetch();
            Box::pin(async move { fut.await.map_err(|e| e.to_string()) })
        });

        Self {
            name: name.into(),
            interval: interval.max(Duration::from_millis(1)),
            fetch,
            shared: Arc::new(Mutex::new(Shared {
                generation: 0,
                active: false,
                snapshot: None,
                subscriber: None,
            })),
            schedule: None,
        }
    }

    /// Activate polling on `runtime`
    ///
    /// `subscriber` receives every committed snapshot. It is called while the
    /// snapshot lock is held, so it must not call back into this poller.
    /// Starting an active poller stops the previous activation first.
    pub fn start<S>(&mut self, runtime: &Handle, subscriber: S)
    where
        S: Fn(Arc<T>) + Send + 'static,
    {
        self.stop();

        let generation = {
            let mut shared = lock(&self.shared);
            shared.generation += 1;
            shared.active = true;
            shared.subscriber = Some(Box::new(subscriber));
            shared.generation
        };

        log::info!(
            "{}: polling every {:?} (generation {})",
            self.name,
            self.interval,
            generation
        );

        self.schedule = Some(runtime.spawn(run_schedule(
            self.name.clone(),
            self.interval,
            self.fetch.clone(),
            self.shared.clone(),
            generation,
        )));
    }

    /// Latest committed value, `None` until the first successful fetch
    pub fn snapshot(&self) -> Option<Arc<T>> {
        lock(&self.shared).snapshot.clone()
    }
}

impl<T> Poller<T> {
    /// Deactivate polling
    ///
    /// Cancels the schedule and invalidates every outstanding fetch. Once this
    /// returns, neither the snapshot nor the subscriber is touched again until
    /// the next [`Poller::start`].
    pub fn stop(&mut self) {
        let was_active = {
            let mut shared = lock(&self.shared);
            let was_active = shared.active;
            shared.active = false;
            shared.generation += 1;
            shared.subscriber = None;
            was_active
        };

        if let Some(schedule) = self.schedule.take() {
            schedule.abort();
        }

        if was_active {
            log::info!("{}: polling stopped", self.name);
        }
    }

    pub fn is_active(&self) -> bool {
        lock(&self.shared).active
    }

    /// Current activation generation
    pub fn generation(&self) -> u64 {
        lock(&self.shared).generation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock<T>(shared: &Mutex<Shared<T>>) -> MutexGuard<'_, Shared<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Issue one fetch per tick until aborted
async fn run_schedule<T: Send + Sync + 'static>(
    name: String,
    interval: Duration,
    fetch: Fetch<T>,
    shared: Arc<Mutex<Shared<T>>>,
    generation: u64,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        // Fetches are detached: stopping invalidates them, it does not abort them
        tokio::spawn(fetch_once(
            name.clone(),
            fetch.clone(),
            shared.clone(),
            generation,
        ));
    }
}

async fn fetch_once<T: Send + Sync + 'static>(
    name: String,
    fetch: Fetch<T>,
    shared: Arc<Mutex<Shared<T>>>,
    generation: u64,
) {
    match fetch().await {
        Ok(value) => {
            if lock(&shared).commit(generation, value) {
                log::trace!("{}: snapshot updated", name);
            } else {
                log::debug!(
                    "{}: discarding response from stale generation {}",
                    name,
                    generation
                );
            }
        }
        Err(e) => {
            log::warn!("{}: poll failed, keeping previous snapshot: {}", name, e);
        }
    }
}
