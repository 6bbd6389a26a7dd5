//! The "what do you need for the trip?" form.
//!
//! Holds the draft description and quantity until the user submits, then
//! turns them into a new [`Item`] and resets itself.

use crate::types::{Item, ItemId, Quantity, QuantityError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the draft form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The quantity selection could not be used
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    /// Submission with a blank description while blanks are disallowed
    #[error("Description cannot be empty")]
    BlankDescription,
}

/// Draft state of the add-item form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftForm {
    description: String,
    quantity: Quantity,
    last_error: Option<String>,
}

impl DraftForm {
    /// Empty description, quantity 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current draft quantity
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Error of the last rejected edit or submission, if the form has not
    /// been successfully edited since
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the draft description
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
        self.last_error = None;
    }

    /// Sets the draft quantity from the raw selection value
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Quantity`] if `raw` is not an integer in the
    /// selectable range. The previous quantity is kept and the error is
    /// recorded in [`DraftForm::last_error`].
    pub fn set_quantity(&mut self, raw: &str) -> Result<Quantity, FormError> {
        match raw.parse::<Quantity>() {
            Ok(quantity) => {
                self.quantity = quantity;
                self.last_error = None;
                Ok(quantity)
            },
            Err(error) => Err(self.reject(error.into())),
        }
    }

    /// Turns the draft into a new unpacked item and resets the form
    ///
    /// `next_id` is only called when the submission is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::BlankDescription`] when `allow_blank` is false
    /// and the description is empty or whitespace. The draft is kept and the
    /// error is recorded in [`DraftForm::last_error`].
    pub fn submit<F>(&mut self, next_id: F, allow_blank: bool) -> Result<Item, FormError>
    where
        F: FnOnce() -> ItemId,
    {
        if !allow_blank && self.description.trim().is_empty() {
            return Err(self.reject(FormError::BlankDescription));
        }

        let item = Item::new(next_id(), std::mem::take(&mut self.description), self.quantity);
        self.reset();
        Ok(item)
    }

    /// Back to an empty description and quantity 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn reject(&mut self, error: FormError) -> FormError {
        self.last_error = Some(error.to_string());
        error
    }
}
