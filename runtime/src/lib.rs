//! # Activity Tracker Runtime
//!
//! The Store runtime that coordinates reducer execution and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: owns the state, runs the reducer, executes effects
//! - **`EffectHandle`**: lets a caller wait for the effects of one action
//! - **Action broadcast**: every reduced action is published to subscribers
//!
//! ## Example
//!
//! ```ignore
//! use activity_tracker_runtime::Store;
//!
//! let store = Store::new(initial_state, reducer, environment);
//!
//! // Send an action
//! let mut handle = store.send(Action::DoSomething).await?;
//! handle.wait().await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use activity_tracker_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Waiting for effects took longer than allowed
        #[error("Timed out with {0} effects still running")]
        Timeout(usize),
    }
}

pub use error::StoreError;

/// Configuration for a [`Store`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Capacity of the action broadcast channel
    ///
    /// Slow subscribers that fall further behind than this skip actions.
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Set the broadcast channel capacity (minimum 1)
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
        }
    }
}

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`]. Waiting on it returns once every effect
/// started by that action has finished. Actions fed back by those effects
/// get their own handles and are not waited on.
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };
        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    #[must_use]
    pub fn completed() -> Self {
        let (handle, _tracking) = Self::new();
        handle
    }

    /// Number of effects still running
    #[must_use]
    pub fn pending(&self) -> usize {
        self.effects.load(Ordering::SeqCst)
    }

    /// Wait for all effects to complete
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            if self.completion.changed().await.is_err() {
                break;
            }
        }
    }

    /// Wait for all effects to complete with a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires before all
    /// effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        match tokio::time::timeout(timeout, self.wait()).await {
            Ok(()) => Ok(()),
            Err(_) => Err(StoreError::Timeout(self.pending())),
        }
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.pending())
            .finish_non_exhaustive()
    }
}

/// Internal: completion counter shared by the effects of one action
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: decrements the effect counter on drop, even if the effect panics
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Internal: decrements the store-wide pending counter on drop
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store module - the runtime for reducers
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicUsize, DecrementGuard, Duration, Effect, EffectHandle,
        EffectTracking, Ordering, PendingGuard, Reducer, RwLock, StoreConfig, StoreError,
    };
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, the single source of truth)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Actions are reduced one at a time: each `send` holds the write lock
    /// for the duration of the reducer call, so handlers run to completion
    /// in the order they are dispatched.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with an explicit configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Publishes the action to subscribers, still under the lock
        /// 4. Releases the lock and starts the returned effects
        ///
        /// The state change is visible to every reader once this returns.
        /// Effects may still be running; use the returned handle to wait.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError>
        where
            R: Clone,
            E: Clone,
        {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("tracker.store.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("tracker.store.actions.total").increment(1);

            let (handle, tracking) = EffectHandle::new();

            let effects = {
                let mut state = self.state.write().await;
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();
                let effects = self
                    .reducer
                    .reduce(&mut *state, action.clone(), &self.environment);

                // Published under the write lock so subscribers see reduction order.
                // No receivers is not an error.
                let _ = self.action_broadcast.send(action);
                effects
            };

            tracing::trace!("Executing {} effects", effects.len());
            for effect in effects {
                self.execute_effect(effect, tracking.clone());
            }

            Ok(handle)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.tasks.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to every action this store reduces
        ///
        /// Includes actions sent directly and actions fed back by effects.
        /// A receiver that lags behind the configured capacity skips old
        /// actions and observes `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of effects currently running across all actions
        #[must_use]
        pub fn pending_effects(&self) -> usize {
            self.pending_effects.load(Ordering::Acquire)
        }

        /// Stop accepting actions and wait for running effects
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Timeout`] if effects are still running when
        /// the timeout expires.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating shutdown");
            self.shutdown.store(true, Ordering::Release);

            let start = std::time::Instant::now();
            let poll_interval = Duration::from_millis(10);

            loop {
                let pending = self.pending_effects();
                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    return Ok(());
                }
                if start.elapsed() >= timeout {
                    tracing::error!(pending_effects = pending, "Shutdown timed out");
                    return Err(StoreError::Timeout(pending));
                }
                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Execute an effect with tracking
        ///
        /// - `None`: no-op
        /// - `Future`: spawned; a produced action is sent back to the store
        /// - `Parallel`: every child starts immediately
        /// - `Sequential`: children run in order, each awaited before the next
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned into spawned tasks
        fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking)
        where
            R: Clone,
            E: Clone,
        {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("tracker.store.effects.executed", "type" => "future")
                        .increment(1);
                    tracking.increment();
                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = PendingGuard(Arc::clone(&self.pending_effects));
                    let guard = DecrementGuard(tracking.clone());
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = guard;
                        let _pending_guard = pending_guard;

                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            if let Err(error) = store.send(action).await {
                                tracing::warn!(%error, "Dropped feedback action");
                            }
                        }
                    });
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    metrics::counter!("tracker.store.effects.executed", "type" => "parallel")
                        .increment(1);
                    for effect in effects {
                        self.execute_effect(effect, tracking.clone());
                    }
                },
                Effect::Sequential(effects) => {
                    let effect_count = effects.len();
                    tracing::trace!("Executing Effect::Sequential with {} effects", effect_count);
                    metrics::counter!("tracker.store.effects.executed", "type" => "sequential")
                        .increment(1);
                    tracking.increment();
                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = PendingGuard(Arc::clone(&self.pending_effects));
                    let guard = DecrementGuard(tracking.clone());
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = guard;
                        let _pending_guard = pending_guard;

                        for (idx, effect) in effects.into_iter().enumerate() {
                            tracing::trace!(
                                "Executing sequential effect {} of {}",
                                idx + 1,
                                effect_count
                            );

                            let (sub_tx, sub_rx) = watch::channel(());
                            let sub_tracking = EffectTracking {
                                counter: Arc::new(AtomicUsize::new(0)),
                                notifier: sub_tx,
                            };
                            let mut sub_handle = EffectHandle {
                                effects: Arc::clone(&sub_tracking.counter),
                                completion: sub_rx,
                            };

                            store.execute_effect(effect, sub_tracking);
                            sub_handle.wait().await;
                        }
                    });
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;
    use activity_tracker_core::{SmallVec, smallvec};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default)]
    struct TestState {
        value: i32,
        log: Vec<&'static str>,
        tags: Vec<usize>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Increment,
        ProduceFeedback,
        Record(&'static str),
        Tag(usize),
        ProduceSequence,
        ProduceParallel,
        Stall,
    }

    #[derive(Clone, Default)]
    struct TestEnv {
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    #[derive(Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut TestState,
            action: TestAction,
            env: &TestEnv,
        ) -> SmallVec<[Effect<TestAction>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    SmallVec::new()
                },
                TestAction::ProduceFeedback => {
                    smallvec![Effect::future(async { Some(TestAction::Increment) })]
                },
                TestAction::Record(label) => {
                    state.log.push(label);
                    SmallVec::new()
                },
                TestAction::Tag(tag) => {
                    state.tags.push(tag);
                    SmallVec::new()
                },
                TestAction::Stall => smallvec![Effect::future(async {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    None
                })],
                TestAction::ProduceSequence => {
                    let first = Arc::clone(&env.seen);
                    let second = Arc::clone(&env.seen);
                    smallvec![Effect::chain(vec![
                        Effect::future(async move {
                            tokio::time::sleep(Duration::from_millis(20)).await;
                            first.lock().unwrap().push("first");
                            None
                        }),
                        Effect::fire_and_forget(move || second.lock().unwrap().push("second")),
                    ])]
                },
                TestAction::ProduceParallel => {
                    smallvec![Effect::merge(vec![
                        Effect::future(async { Some(TestAction::Record("a")) }),
                        Effect::future(async { Some(TestAction::Record("b")) }),
                    ])]
                },
            }
        }
    }

    fn store() -> Store<TestState, TestAction, TestEnv, TestReducer> {
        Store::new(TestState::default(), TestReducer, TestEnv::default())
    }

    #[tokio::test]
    async fn send_updates_state_before_returning() {
        let store = store();
        store.send(TestAction::Increment).await.unwrap();
        assert_eq!(store.state(|s| s.value).await, 1);
    }

    #[tokio::test]
    async fn handle_without_effects_is_complete() {
        let store = store();
        let handle = store.send(TestAction::Increment).await.unwrap();
        assert_eq!(handle.pending(), 0);
        assert_eq!(EffectHandle::completed().pending(), 0);
    }

    #[tokio::test]
    async fn future_effect_feeds_action_back() {
        let store = store();
        let mut rx = store.subscribe_actions();

        let mut handle = store.send(TestAction::ProduceFeedback).await.unwrap();
        handle.wait_with_timeout(Duration::from_secs(1)).await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), TestAction::ProduceFeedback);
        assert_eq!(rx.recv().await.unwrap(), TestAction::Increment);
        assert_eq!(store.state(|s| s.value).await, 1);
    }

    #[tokio::test]
    async fn sequential_effects_run_in_order() {
        let env = TestEnv::default();
        let seen = Arc::clone(&env.seen);
        let store = Store::new(TestState::default(), TestReducer, env);

        let mut handle = store.send(TestAction::ProduceSequence).await.unwrap();
        handle.wait_with_timeout(Duration::from_secs(1)).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn parallel_effects_all_complete() {
        let store = store();
        let mut rx = store.subscribe_actions();

        let mut handle = store.send(TestAction::ProduceParallel).await.unwrap();
        handle.wait_with_timeout(Duration::from_secs(1)).await.unwrap();

        // The root action plus one feedback action per child
        for _ in 0..3 {
            rx.recv().await.unwrap();
        }
        let mut log = store.state(|s| s.log.clone()).await;
        log.sort_unstable();
        assert_eq!(log, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn shutdown_rejects_new_actions() {
        let store = store();
        store.shutdown(Duration::from_secs(1)).await.unwrap();

        let result = store.send(TestAction::Increment).await;
        assert_eq!(result.unwrap_err(), StoreError::ShutdownInProgress);
        assert_eq!(store.state(|s| s.value).await, 0);
    }

    #[tokio::test]
    async fn wait_with_timeout_reports_running_effects() {
        let store = store();
        let mut handle = store.send(TestAction::Stall).await.unwrap();

        let result = handle.wait_with_timeout(Duration::from_millis(10)).await;
        assert_eq!(result, Err(StoreError::Timeout(1)));
        assert_eq!(handle.pending(), 1);
    }

    #[tokio::test]
    async fn shutdown_times_out_on_running_effects() {
        let store = store();
        store.send(TestAction::Stall).await.unwrap();

        let result = store.shutdown(Duration::from_millis(10)).await;
        assert_eq!(result, Err(StoreError::Timeout(1)));
        assert_eq!(store.pending_effects(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_sends_broadcast_in_reduction_order() {
        const SENDS: usize = 64;
        let store = Store::with_config(
            TestState::default(),
            TestReducer,
            TestEnv::default(),
            StoreConfig::default().with_broadcast_capacity(SENDS * 2),
        );
        let mut rx = store.subscribe_actions();

        let tasks: Vec<_> = (0..SENDS)
            .map(|tag| {
                let store = store.clone();
                tokio::spawn(async move { store.send(TestAction::Tag(tag)).await.unwrap() })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let mut broadcast = Vec::with_capacity(SENDS);
        for _ in 0..SENDS {
            match rx.recv().await.unwrap() {
                TestAction::Tag(tag) => broadcast.push(tag),
                other => panic!("unexpected action {other:?}"),
            }
        }
        assert_eq!(broadcast, store.state(|s| s.tags.clone()).await);
    }

    #[test]
    fn config_capacity_never_zero() {
        let config = StoreConfig::default().with_broadcast_capacity(0);
        assert_eq!(config.broadcast_capacity, 1);
        assert_eq!(StoreConfig::default().broadcast_capacity, 16);
    }
}
