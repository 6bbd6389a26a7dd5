//! # Far Away Runtime
//!
//! The Store runtime that owns application state, runs the reducer and
//! executes the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: owns state, reducer and environment; the only place state is mutated
//! - **Feedback loop**: actions produced by `Effect::Send` are processed in the same turn
//! - **Subscribers**: listeners notified with the new state after every `send`
//!
//! Everything runs synchronously on the caller's thread. A `send` returns only
//! after the action and every action it caused have been reduced.
//!
//! ## Example
//!
//! ```ignore
//! use far_away_runtime::Store;
//!
//! let mut store = Store::new(PackingState::default(), PackingReducer::new(), env);
//!
//! store.send(PackingAction::SetDescription { text: "Socks".into() })?;
//! store.send(PackingAction::SubmitForm)?;
//!
//! let count = store.state(|s| s.list.len());
//! ```

use far_away_core::{action::Action, reducer::Reducer};
use std::collections::VecDeque;

/// Metric names and registration
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept dispatching actions past the configured limit
        ///
        /// State changes made before the limit was hit are kept.
        #[error("Action '{action}' produced more than {limit} feedback actions")]
        FeedbackLimitExceeded {
            /// Action originally passed to `send`
            action: &'static str,
            /// Configured maximum
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions effects may feed back during one `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Listener called with the latest state after every `send`
type Listener<S> = Box<dyn FnMut(&S)>;

/// The Store - runtime for reducers
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
    config: StoreConfig,
    listeners: Vec<Listener<S>>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: Action,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new Store with custom configuration
    #[must_use]
    pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            config,
            listeners: Vec::new(),
        }
    }

    /// Send an action to the store
    ///
    /// Runs the reducer, then executes the returned effects. Actions produced
    /// by `Effect::Send` are queued and reduced in FIFO order before this call
    /// returns. Subscribers are notified once, after the queue drains.
    ///
    /// Returns the number of actions reduced (the action itself plus feedback).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FeedbackLimitExceeded`] when effects dispatch more
    /// than [`StoreConfig::max_feedback_actions`] actions. Remaining queued
    /// actions are dropped; subscribers are still notified.
    #[tracing::instrument(skip_all, name = "store_send", fields(action = action.name()))]
    pub fn send(&mut self, action: A) -> Result<usize, StoreError> {
        let origin = action.name();
        let mut queue = VecDeque::from([action]);
        let mut processed = 0usize;
        let mut feedback = 0usize;
        let mut result = Ok(());

        while let Some(action) = queue.pop_front() {
            let name = action.name();
            tracing::debug!(action = name, "Processing action");
            metrics::counter!(metrics::ACTIONS_TOTAL, "action" => name).increment(1);

            let effects = {
                let span = tracing::debug_span!("reducer_execution", action = name);
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                metrics::histogram!(metrics::REDUCER_DURATION_SECONDS)
                    .record(start.elapsed().as_secs_f64());

                effects
            };
            processed += 1;

            for effect in effects {
                for next in effect.into_actions() {
                    tracing::trace!(action = next.name(), "Effect dispatched feedback action");
                    queue.push_back(next);
                    feedback += 1;
                }
            }

            if feedback > self.config.max_feedback_actions {
                tracing::warn!(
                    action = origin,
                    limit = self.config.max_feedback_actions,
                    dropped = queue.len(),
                    "Feedback limit exceeded, dropping queued actions"
                );
                metrics::counter!(metrics::FEEDBACK_LIMIT_EXCEEDED_TOTAL).increment(1);
                result = Err(StoreError::FeedbackLimitExceeded {
                    action: origin,
                    limit: self.config.max_feedback_actions,
                });
                break;
            }
        }

        if feedback > 0 {
            metrics::counter!(metrics::FEEDBACK_ACTIONS_TOTAL).increment(feedback as u64);
        }

        self.notify();
        tracing::debug!(processed, "Action processing completed");

        result.map(|()| processed)
    }

    /// Send several actions in order, stopping at the first error
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] produced by [`Store::send`].
    pub fn send_all<I>(&mut self, actions: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = A>,
    {
        actions
            .into_iter()
            .try_fold(0, |total, action| Ok(total + self.send(action)?))
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let packed = store.state(|s| s.list.packed_count());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state)
    }

    /// Register a listener called with the state after every `send`
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&S) + 'static,
    {
        self.listeners.push(Box::new(listener));
        tracing::debug!(listeners = self.listeners.len(), "Subscriber registered");
    }

    /// Number of registered listeners
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> StoreConfig {
        self.config
    }

    /// Environment injected into the reducer
    #[must_use]
    pub const fn environment(&self) -> &E {
        &self.environment
    }

    /// Consume the store and return its state
    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
