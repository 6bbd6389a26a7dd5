//! # Far Away Core
//!
//! Core traits and types for the Far Away packing list.
//!
//! The application follows a unidirectional data flow:
//!
//! - **State**: the packing list, the draft form and the active sort mode
//! - **Action**: every input the UI can produce (add, delete, toggle, clear, sort, form edits)
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: description of follow-up work, executed by the runtime
//! - **Environment**: injected dependencies (clock, id generator)
//!
//! Derived views (sorted list, statistics) are never stored in state. They are
//! recomputed from the current state every time they are read.
//!
//! ## Example
//!
//! ```ignore
//! use far_away_core::{Effect, Reducer, SmallVec};
//!
//! impl Reducer for ListReducer {
//!     type State = PackingList;
//!     type Action = PackingAction;
//!     type Environment = PackingEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         list: &mut PackingList,
//!         action: PackingAction,
//!         _env: &PackingEnvironment,
//!     ) -> SmallVec<[Effect<PackingAction>; 4]> {
//!         if let PackingAction::ClearList = action {
//!             list.clear();
//!         }
//!         SmallVec::new()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

pub use action::Action;
pub use effect::Effect;
pub use reducer::Reducer;

/// Reducer composition (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Action module - common behavior of action enums
///
/// Action enums are usually annotated with `#[derive(Action)]` from
/// `far-away-macros`, which implements [`Action`](action::Action) and adds
/// classification helpers.
pub mod action {
    /// Behavior shared by every action type handled by a store
    pub trait Action {
        /// Stable, human readable name of the action variant
        ///
        /// Used for log fields and metric labels.
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// Actions a reducer does not handle must leave state untouched and
        /// return no effects.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects are values, not execution. The store interprets them after the
/// reducer returns.
pub mod effect {
    /// Effect type - describes follow-up work to be executed by the store
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Dispatch an action back into the store within the same turn
        Send(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Feed `action` back into the store
        #[must_use]
        pub fn send(action: Action) -> Self {
            Self::Send(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Send(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Flattens the effect tree into the actions it dispatches, in order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_actions(&mut actions);
            actions
        }

        fn collect_actions(self, out: &mut Vec<Action>) {
            match self {
                Self::None => {},
                Self::Send(action) => out.push(*action),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_actions(out);
                    }
                },
            }
        }
    }
}

/// Environment module - dependency injection traits
///
/// All sources of non-determinism (current time, fresh ids) are abstracted
/// behind traits and injected via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Source of fresh item identifiers
    pub trait IdGenerator: Send + Sync {
        /// Returns an identifier never returned before by this generator
        fn next_id(&self) -> u64;
    }

    /// Time-derived ids: Unix milliseconds of the injected clock
    ///
    /// Ids are strictly increasing. When the clock has not advanced since the
    /// previous call (two submissions within the same millisecond, or a clock
    /// that went backwards) the previous id plus one is used instead.
    pub struct ClockIds {
        clock: Arc<dyn Clock>,
        last: AtomicU64,
    }

    impl ClockIds {
        /// Creates a generator reading time from `clock`
        #[must_use]
        pub fn new(clock: Arc<dyn Clock>) -> Self {
            Self {
                clock,
                last: AtomicU64::new(0),
            }
        }
    }

    impl std::fmt::Debug for ClockIds {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ClockIds")
                .field("last", &self.last.load(Ordering::Relaxed))
                .finish_non_exhaustive()
        }
    }

    impl IdGenerator for ClockIds {
        fn next_id(&self) -> u64 {
            let now = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
            let next = |last: u64| now.max(last.saturating_add(1));

            match self
                .last
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(next(last)))
            {
                Ok(previous) | Err(previous) => next(previous),
            }
        }
    }
}
