//! Reducer composition utilities
//!
//! The packing list is built from small reducers, each owning one slice of
//! state:
//! - **`combine_reducers`**: run several reducers on the same state/action
//! - **`scope_reducer`**: focus a reducer on a field of a larger state
//!
//! # Example
//!
//! ```
//! use far_away_core::composition::{combine_reducers, scope_reducer};
//! use far_away_core::{Effect, Reducer, SmallVec};
//!
//! #[derive(Default)]
//! struct Screen {
//!     items: Vec<String>,
//!     sort: &'static str,
//! }
//!
//! #[derive(Clone)]
//! enum ScreenAction {
//!     Add(String),
//!     Sort(&'static str),
//! }
//!
//! struct ItemsReducer;
//! struct SortReducer;
//!
//! impl Reducer for ItemsReducer {
//!     type State = Vec<String>;
//!     type Action = ScreenAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, items: &mut Vec<String>, action: ScreenAction, _env: &()) -> SmallVec<[Effect<ScreenAction>; 4]> {
//!         if let ScreenAction::Add(item) = action {
//!             items.push(item);
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! impl Reducer for SortReducer {
//!     type State = Screen;
//!     type Action = ScreenAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, screen: &mut Screen, action: ScreenAction, _env: &()) -> SmallVec<[Effect<ScreenAction>; 4]> {
//!         if let ScreenAction::Sort(mode) = action {
//!             screen.sort = mode;
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! let screen = combine_reducers(vec![
//!     Box::new(scope_reducer(ItemsReducer, |s: &mut Screen| &mut s.items)),
//!     Box::new(SortReducer),
//! ]);
//!
//! let mut state = Screen::default();
//! let _ = screen.reduce(&mut state, ScreenAction::Add("Socks".into()), &());
//! let _ = screen.reduce(&mut state, ScreenAction::Sort("description"), &());
//! assert_eq!(state.items, vec!["Socks".to_string()]);
//! assert_eq!(state.sort, "description");
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Boxed reducer over a shared state, action and environment
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E>>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence with a clone of the action, and all effects
/// are concatenated in reducer order.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E> {
    /// Number of reducers combined
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no reducer was combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    A: Clone,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a reducer to operate on a field of a larger state.
///
/// `focus` borrows the child state out of the parent; the child reducer
/// mutates it in place.
pub fn scope_reducer<S, SubS, A, E, R>(reducer: R, focus: fn(&mut S) -> &mut SubS) -> ScopedReducer<S, SubS, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer { reducer, focus }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, R> {
    reducer: R,
    focus: fn(&mut S) -> &mut SubS,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        self.reducer.reduce((self.focus)(state), action, env)
    }
}
