//! Keyed in-memory request cache with stale-while-revalidate semantics.
//!
//! Each key holds at most one value and at most one in-flight load. Callers
//! asking for a key that is already loading wait on that load instead of
//! starting their own. A failing load is retried with capped exponential
//! backoff before its error reaches the waiters.
//!
//! # Usage
//!
//! ```rust,ignore
//! let cache = QueryCache::new(Duration::from_secs(300), Duration::from_secs(600));
//!
//! // Show whatever we have, even if stale
//! if let Some(cached) = cache.peek(&key).await { render(cached.value); }
//!
//! // Then make sure it is fresh
//! let value = cache.fetch(&key, || source.load(&key)).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{OnceCell, RwLock};

/// Time source for freshness decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Waits between retry attempts.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Timer of the host runtime: tokio natively, the browser's `setTimeout` on
/// wasm.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSleeper;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Sleeper for SystemSleeper {
    async fn sleep(&self, duration: Duration) {
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;

        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
    }
}

/// How often a failed load is retried and how long to wait in between.
///
/// Attempt `n` (0-based) waits `min(base_delay * 2^n, max_delay)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Fail on the first error.
    pub fn none() -> Self {
        Self {
            retries: 0,
            ..Self::default()
        }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

impl Default for RetryPolicy {
    /// 3 retries after 1s, 2s and 4s; no wait ever exceeds 30s.
    fn default() -> Self {
        Self {
            retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

/// A cached value and whether it is past its freshness window.
#[derive(Debug)]
pub struct Cached<V> {
    pub value: Arc<V>,
    pub fetched_at: DateTime<Utc>,
    pub stale: bool,
}

struct Entry<V> {
    value: Arc<V>,
    fetched_at: DateTime<Utc>,
    last_used: DateTime<Utc>,
}

fn elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    // Negative spans (clock moved backwards) count as zero.
    (now - since).to_std().unwrap_or_default()
}

type Load<V, E> = Arc<OnceCell<Result<Arc<V>, E>>>;

struct CacheState<K, V, E> {
    entries: HashMap<K, Entry<V>>,
    in_flight: HashMap<K, Load<V, E>>,
}

/// Generic request cache.
///
/// Cloneable handle; clones share the same entries.
pub struct QueryCache<K, V, E> {
    state: Arc<RwLock<CacheState<K, V, E>>>,
    stale_time: Duration,
    gc_time: Duration,
    retry: RetryPolicy,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
}

impl<K, V, E> Clone for QueryCache<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            stale_time: self.stale_time,
            gc_time: self.gc_time,
            retry: self.retry,
            clock: Arc::clone(&self.clock),
            sleeper: Arc::clone(&self.sleeper),
        }
    }
}

impl<K, V, E> QueryCache<K, V, E>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    E: Clone,
{
    /// Values are fresh for `stale_time` and dropped after `gc_time` unused.
    /// Failed loads are retried per [`RetryPolicy::default`].
    pub fn new(stale_time: Duration, gc_time: Duration) -> Self {
        Self::with_clock(stale_time, gc_time, Arc::new(SystemClock))
    }

    pub fn with_clock(stale_time: Duration, gc_time: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState {
                entries: HashMap::new(),
                in_flight: HashMap::new(),
            })),
            stale_time,
            gc_time,
            retry: RetryPolicy::default(),
            clock,
            sleeper: Arc::new(SystemSleeper),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Return a fresh value for `key`, loading it if needed.
    ///
    /// Concurrent calls for the same key share one `load` sequence,
    /// retries included. The final failure is returned to every waiter but
    /// never stored.
    pub async fn fetch<F, Fut>(&self, key: &K, load: F) -> Result<Arc<V>, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = {
            let now = self.clock.now();
            let mut state = self.state.write().await;
            self.sweep(&mut state, now);

            if let Some(entry) = state.entries.get_mut(key) {
                if elapsed(entry.fetched_at, now) < self.stale_time {
                    entry.last_used = now;
                    tracing::debug!(?key, "Cache hit");
                    return Ok(Arc::clone(&entry.value));
                }
            }

            match state.in_flight.get(key) {
                Some(cell) => {
                    tracing::debug!(?key, "Joining in-flight load");
                    Arc::clone(cell)
                }
                None => {
                    tracing::debug!(?key, "Cache miss, loading");
                    let cell: Load<V, E> = Arc::new(OnceCell::new());
                    state.in_flight.insert(key.clone(), Arc::clone(&cell));
                    cell
                }
            }
        };

        let retry = self.retry;
        let sleeper = Arc::clone(&self.sleeper);
        let result = cell
            .get_or_init(move || async move {
                let mut attempt = 0;
                loop {
                    match load().await {
                        Ok(value) => return Ok(Arc::new(value)),
                        Err(_) if attempt < retry.retries => {
                            let delay = retry.delay(attempt);
                            attempt += 1;
                            tracing::debug!(?key, attempt, ?delay, "Load failed, retrying");
                            sleeper.sleep(delay).await;
                        }
                        Err(e) => return Err(e),
                    }
                }
            })
            .await
            .clone();

        let mut state = self.state.write().await;
        let owns_load = state
            .in_flight
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, &cell));
        if owns_load {
            state.in_flight.remove(key);
            if let Ok(value) = &result {
                let now = self.clock.now();
                state.entries.insert(
                    key.clone(),
                    Entry {
                        value: Arc::clone(value),
                        fetched_at: now,
                        last_used: now,
                    },
                );
            }
        }

        result
    }

    /// Whatever is cached for `key`, fresh or not. Does not trigger a load.
    pub async fn peek(&self, key: &K) -> Option<Cached<V>> {
        let now = self.clock.now();
        let mut state = self.state.write().await;
        let entry = state.entries.get_mut(key)?;
        entry.last_used = now;
        Some(Cached {
            value: Arc::clone(&entry.value),
            fetched_at: entry.fetched_at,
            stale: elapsed(entry.fetched_at, now) >= self.stale_time,
        })
    }

    /// Forget the value for `key`; the next fetch reloads it.
    pub async fn invalidate(&self, key: &K) {
        self.state.write().await.entries.remove(key);
    }

    /// Drop all values. In-flight loads still complete for their waiters.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.entries.clear();
        state.in_flight.clear();
    }

    /// Evict entries unused for longer than the retention window.
    pub async fn collect_garbage(&self) -> usize {
        let now = self.clock.now();
        let mut state = self.state.write().await;
        self.sweep(&mut state, now)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn sweep(&self, state: &mut CacheState<K, V, E>, now: DateTime<Utc>) -> usize {
        let before = state.entries.len();
        state
            .entries
            .retain(|_, entry| elapsed(entry.last_used, now) <= self.gc_time);
        let evicted = before - state.entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted unused cache entries");
        }
        evicted
    }
}
