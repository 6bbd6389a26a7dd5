//! Far Away: a packing list for your next trip.
//!
//! Add items with a quantity, tick them off as they go in the bag, sort the
//! list three ways and keep an eye on the progress line. It demonstrates:
//!
//! - A list store with total operations (add, delete, toggle, clear)
//! - Derived views recomputed on every read (sorted list, statistics)
//! - A draft form whose submission reaches the list through `Effect::Send`
//! - Reducers composed with `combine_reducers` and `scope_reducer`
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```no_run
//! use far_away::{PackingAction, PackingEnvironment, PackingReducer, PackingState, PackingStore};
//!
//! # fn example() -> Result<(), far_away_runtime::StoreError> {
//! let mut store = PackingStore::new(
//!     PackingState::new(),
//!     PackingReducer::new(),
//!     PackingEnvironment::production(),
//! );
//!
//! store.send(PackingAction::SetDescription { text: "Passports".to_string() })?;
//! store.send(PackingAction::SetQuantity { raw: "2".to_string() })?;
//! store.send(PackingAction::SubmitForm)?;
//!
//! println!("{}", store.state(|s| s.stats()));
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod form;
pub mod list;
pub mod reducer;
pub mod shell;
pub mod state;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use actions::PackingAction;
pub use config::{Config, LogFormat};
pub use form::{DraftForm, FormError};
pub use list::PackingList;
pub use reducer::{FormReducer, ListReducer, PackingEnvironment, PackingReducer, PackingStore, ViewReducer};
pub use state::PackingState;
pub use types::{Item, ItemId, Quantity, QuantityError, SortMode, SortModeError};
pub use views::Stats;
