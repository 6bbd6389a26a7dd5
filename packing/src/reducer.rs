//! Reducers for the packing list.
//!
//! Each reducer owns one slice of [`PackingState`]; [`PackingReducer`]
//! combines them. A form submission never touches the list directly: the
//! form reducer emits `AddItem` and the store feeds it to the list reducer in
//! the same `send`.

use crate::actions::PackingAction;
use crate::form::DraftForm;
use crate::list::PackingList;
use crate::state::PackingState;
use crate::types::ItemId;
use far_away_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use far_away_core::environment::{ClockIds, IdGenerator, SystemClock};
use far_away_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use far_away_runtime::Store;
use std::sync::Arc;

/// Store type of the packing list
pub type PackingStore = Store<PackingState, PackingAction, PackingEnvironment, PackingReducer>;

/// Environment dependencies for the packing reducers
#[derive(Clone)]
pub struct PackingEnvironment {
    /// Source of fresh item ids
    pub ids: Arc<dyn IdGenerator>,
    /// Whether the form may submit an empty description
    pub allow_blank_descriptions: bool,
}

impl PackingEnvironment {
    /// Creates an environment allowing blank descriptions
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            allow_blank_descriptions: true,
        }
    }

    /// Time-derived ids from the system clock
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(ClockIds::new(Arc::new(SystemClock))))
    }

    /// Sets whether blank descriptions are accepted
    #[must_use]
    pub const fn with_blank_descriptions(mut self, allow: bool) -> Self {
        self.allow_blank_descriptions = allow;
        self
    }

    fn next_item_id(&self) -> ItemId {
        ItemId::new(self.ids.next_id())
    }
}

impl std::fmt::Debug for PackingEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackingEnvironment")
            .field("allow_blank_descriptions", &self.allow_blank_descriptions)
            .finish_non_exhaustive()
    }
}

/// Applies list actions to the [`PackingList`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = PackingList;
    type Action = PackingAction;
    type Environment = PackingEnvironment;

    fn reduce(
        &self,
        list: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            PackingAction::AddItem { item } => {
                tracing::debug!(id = %item.id, quantity = %item.quantity, "Item added");
                list.add(item);
            },
            PackingAction::DeleteItem { id } => {
                if !list.remove(id) {
                    tracing::debug!(%id, "Delete ignored, no such item");
                }
            },
            PackingAction::TogglePacked { id } => match list.toggle_packed(id) {
                Some(packed) => tracing::debug!(%id, packed, "Item toggled"),
                None => tracing::debug!(%id, "Toggle ignored, no such item"),
            },
            PackingAction::ClearList => {
                tracing::debug!(removed = list.len(), "List cleared");
                list.clear();
            },
            PackingAction::SetDescription { .. }
            | PackingAction::SetQuantity { .. }
            | PackingAction::SubmitForm
            | PackingAction::SetSortMode { .. } => {},
        }

        SmallVec::new()
    }
}

/// Handles the draft form
///
/// Rejected edits and submissions are not errors of the store: they are
/// recorded in [`DraftForm::last_error`] for the UI to show.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = DraftForm;
    type Action = PackingAction;
    type Environment = PackingEnvironment;

    fn reduce(
        &self,
        form: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            PackingAction::SetDescription { text } => {
                form.set_description(text);
                SmallVec::new()
            },
            PackingAction::SetQuantity { raw } => {
                if let Err(error) = form.set_quantity(&raw) {
                    tracing::info!(%error, "Quantity rejected");
                }
                SmallVec::new()
            },
            PackingAction::SubmitForm => {
                match form.submit(|| env.next_item_id(), env.allow_blank_descriptions) {
                    Ok(item) => smallvec![Effect::send(PackingAction::AddItem { item })],
                    Err(error) => {
                        tracing::info!(%error, "Submission rejected");
                        SmallVec::new()
                    },
                }
            },
            PackingAction::AddItem { .. }
            | PackingAction::DeleteItem { .. }
            | PackingAction::TogglePacked { .. }
            | PackingAction::ClearList
            | PackingAction::SetSortMode { .. } => SmallVec::new(),
        }
    }
}

/// Handles how the list is displayed
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = PackingState;
    type Action = PackingAction;
    type Environment = PackingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if let PackingAction::SetSortMode { mode } = action {
            tracing::debug!(%mode, "Sort mode changed");
            state.sort = mode;
        }
        SmallVec::new()
    }
}

/// The whole packing list: list, form and view reducers combined
pub struct PackingReducer {
    inner: CombinedReducer<PackingState, PackingAction, PackingEnvironment>,
}

impl PackingReducer {
    /// Combines the list, form and view reducers
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: combine_reducers(vec![
                Box::new(scope_reducer(ListReducer, |s: &mut PackingState| &mut s.list)),
                Box::new(scope_reducer(FormReducer, |s: &mut PackingState| &mut s.form)),
                Box::new(ViewReducer),
            ]),
        }
    }
}

impl Default for PackingReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PackingReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackingReducer")
            .field("reducers", &self.inner.len())
            .finish()
    }
}

impl Reducer for PackingReducer {
    type State = PackingState;
    type Action = PackingAction;
    type Environment = PackingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        self.inner.reduce(state, action, env)
    }
}
