//! Metric names recorded by the store.
//!
//! The store records through the `metrics` facade only. Without an installed
//! recorder every call is a no-op, so embedding applications decide whether
//! (and where) metrics are exported.

use metrics::{describe_counter, describe_histogram};

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Actions processed by the store, labelled by `action` name
pub const ACTIONS_TOTAL: &str = "store_actions_total";

/// Actions fed back into the store by effects
pub const FEEDBACK_ACTIONS_TOTAL: &str = "store_feedback_actions_total";

/// `send` calls rejected because effects kept producing actions
pub const FEEDBACK_LIMIT_EXCEEDED_TOTAL: &str = "store_feedback_limit_exceeded_total";

/// Time spent inside reducers for one action
pub const REDUCER_DURATION_SECONDS: &str = "store_reducer_duration_seconds";

/// Register all metric descriptions with the installed recorder.
///
/// Call once after installing a recorder; calling it without one is harmless.
pub fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions processed by the store");
    describe_counter!(
        FEEDBACK_ACTIONS_TOTAL,
        "Total number of actions dispatched by effects"
    );
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED_TOTAL,
        "Total number of sends aborted by the feedback limit"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time taken to run the reducer for one action"
    );
}
