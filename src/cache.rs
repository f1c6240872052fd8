//! Per-key single-flight resolution cache.
//!
//! [`FlightCache`] backs both enrichment lookups (image URLs and staking
//! points). It guarantees that concurrent requests for the same key share
//! one producer invocation and observe the identical outcome, and that a
//! settled outcome is served from memory for the life of the process.
//!
//! The cache is intentionally unbounded: entries are never evicted or
//! expired for the session, and a fallback value is cached exactly like a
//! real answer.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use parking_lot::Mutex;
use tokio::sync::broadcast;

struct Inner<K, V> {
    /// Settled outcomes, kept for the life of the process.
    done: HashMap<K, V>,
    /// One sender per outstanding resolution. An entry exists only while
    /// its producer is running and is removed unconditionally when the
    /// producer settles.
    in_flight: HashMap<K, broadcast::Sender<V>>,
}

/// Single-flight cache: `resolve` returns the cached outcome, joins an
/// in-flight resolution, or runs the producer - whichever applies.
pub struct FlightCache<K, V> {
    inner: Mutex<Inner<K, V>>,
}

enum Role<V> {
    Hit(V),
    Follower(broadcast::Receiver<V>),
    Leader,
}

impl<K, V> FlightCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                done: HashMap::new(),
                in_flight: HashMap::new(),
            }),
        }
    }

    /// Resolve `key`, invoking `producer` only if no outcome is cached and
    /// no resolution is already in flight.
    ///
    /// The producer is infallible by contract: lookup failures are folded
    /// into fallback values before they reach the cache, so whatever the
    /// producer yields is recorded as the key's outcome and shared with
    /// every concurrent caller.
    pub async fn resolve<F, Fut>(&self, key: K, producer: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        loop {
            let role = {
                let mut inner = self.inner.lock();
                if let Some(value) = inner.done.get(&key) {
                    Role::Hit(value.clone())
                } else if let Some(tx) = inner.in_flight.get(&key) {
                    Role::Follower(tx.subscribe())
                } else {
                    let (tx, _rx) = broadcast::channel(1);
                    inner.in_flight.insert(key.clone(), tx);
                    Role::Leader
                }
            };

            match role {
                Role::Hit(value) => return value,
                Role::Follower(mut rx) => {
                    if let Ok(value) = rx.recv().await {
                        return value;
                    }
                    // The leader went away without publishing; retry, and
                    // take over the flight if nobody else has.
                }
                Role::Leader => break,
            }
        }

        let flight = Flight {
            inner: &self.inner,
            key: Some(key),
        };
        let value = producer().await;
        flight.publish(value.clone());
        value
    }

    /// Peek at a settled outcome without joining or starting a resolution.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().done.get(key).cloned()
    }

    /// Number of settled outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().done.len()
    }

    /// Returns true if no outcome has settled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for FlightCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the in-flight registration when the leader settles or is dropped
/// mid-flight, so waiters are never stranded on a flight with no producer.
struct Flight<'a, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    inner: &'a Mutex<Inner<K, V>>,
    key: Option<K>,
}

impl<K, V> Flight<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Record the outcome, wake every follower, and clear the registration
    /// in one critical section.
    fn publish(mut self, value: V) {
        if let Some(key) = self.key.take() {
            let mut inner = self.inner.lock();
            if let Some(tx) = inner.in_flight.remove(&key) {
                let _ = tx.send(value.clone());
            }
            inner.done.insert(key, value);
        }
    }
}

impl<K, V> Drop for Flight<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.inner.lock().in_flight.remove(&key);
        }
    }
}
