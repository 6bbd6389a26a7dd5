//! Domain types for the packing list.
//!
//! An [`Item`] is a single entry: what to bring, how many, and whether it is
//! already in the bag. Items are immutable once created except for `packed`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for an item
///
/// Assigned once at creation. Production ids are time derived (Unix
/// milliseconds, kept strictly increasing by the id generator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wraps a raw identifier
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// Errors produced when reading a quantity from the selection control
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input is not an integer
    #[error("Quantity '{input}' is not a number")]
    NotANumber {
        /// Raw input as received
        input: String,
    },

    /// The integer is outside the selectable range
    #[error("Quantity {value} is out of range ({min}-{max})", min = Quantity::MIN, max = Quantity::MAX)]
    OutOfRange {
        /// Parsed value
        value: i64,
    },
}

/// How many of an item to pack, between [`Quantity::MIN`] and [`Quantity::MAX`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    /// Smallest selectable quantity
    pub const MIN: u8 = 1;

    /// Largest selectable quantity
    pub const MAX: u8 = 20;

    /// Quantity of a freshly reset form
    pub const ONE: Self = Self(1);

    /// Validates `value` against the selectable range
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::OutOfRange`] outside `MIN..=MAX`.
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(QuantityError::OutOfRange { value })
    }

    /// Returns the quantity as an integer
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every value offered by the selection control, ascending
    pub fn options() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| QuantityError::NotANumber {
            input: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<u8> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Quantity> for u8 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

/// A single packing list entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What to bring; may be empty
    pub description: String,
    /// How many to bring
    pub quantity: Quantity,
    /// Whether the item is already packed
    pub packed: bool,
}

impl Item {
    /// Creates a new, unpacked item
    #[must_use]
    pub fn new(id: ItemId, description: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Same item, already packed
    #[must_use]
    pub fn into_packed(mut self) -> Self {
        self.packed = true;
        self
    }
}

/// Error returned when parsing an unknown sort mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort mode '{0}' (expected input, description or packed)")]
pub struct SortModeError(pub String);

/// Ordering of the displayed list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order
    #[default]
    Input,
    /// Alphabetical by description
    Description,
    /// Unpacked items first
    Packed,
}

impl SortMode {
    /// Every sort mode, in the order offered to the user
    pub const ALL: [Self; 3] = [Self::Input, Self::Description, Self::Packed];

    /// Lowercase name, as accepted by `FromStr`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Description => "description",
            Self::Packed => "packed",
        }
    }

    /// Label shown next to the selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "sort by input order",
            Self::Description => "sort by description",
            Self::Packed => "sort by packed status",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = SortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SortModeError(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_accepts_selectable_range() {
        assert_eq!(Quantity::new(1).map(Quantity::get), Ok(1));
        assert_eq!(Quantity::new(20).map(Quantity::get), Ok(20));
        assert_eq!(Quantity::options().count(), 20);
    }

    #[test]
    fn quantity_rejects_out_of_range() {
        assert_eq!(Quantity::new(0), Err(QuantityError::OutOfRange { value: 0 }));
        assert_eq!(Quantity::new(21), Err(QuantityError::OutOfRange { value: 21 }));
        assert_eq!(
            "-3".parse::<Quantity>(),
            Err(QuantityError::OutOfRange { value: -3 })
        );
        assert_eq!(
            Quantity::new(300),
            Err(QuantityError::OutOfRange { value: 300 })
        );
    }

    #[test]
    fn quantity_parses_select_values() {
        assert_eq!(" 12 ".parse::<Quantity>().map(Quantity::get), Ok(12));
        assert_eq!(
            "twelve".parse::<Quantity>(),
            Err(QuantityError::NotANumber {
                input: "twelve".to_string()
            })
        );
        assert!(matches!("".parse::<Quantity>(), Err(QuantityError::NotANumber { .. })));
        assert!(matches!("2.5".parse::<Quantity>(), Err(QuantityError::NotANumber { .. })));
    }

    #[test]
    fn quantity_error_messages() {
        let err = Quantity::new(42).unwrap_err();
        assert_eq!(err.to_string(), "Quantity 42 is out of range (1-20)");
    }

    #[test]
    fn quantity_serde_validates() {
        assert_eq!(serde_json::to_string(&Quantity::ONE).unwrap(), "1");
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("7").unwrap().get(), 7);
    }

    #[test]
    fn item_new_is_unpacked() {
        let item = Item::new(ItemId::new(1), "Passports", Quantity::new(2).unwrap());
        assert!(!item.packed);
        assert!(item.clone().into_packed().packed);
        assert_eq!(item.description, "Passports");
    }

    #[test]
    fn item_id_parses_with_optional_hash() {
        assert_eq!("#17".parse::<ItemId>().unwrap(), ItemId::new(17));
        assert_eq!(" 17".parse::<ItemId>().unwrap().get(), 17);
        assert!("abc".parse::<ItemId>().is_err());
    }

    #[test]
    fn sort_mode_round_trips_names() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>(), Ok(mode));
        }
        assert_eq!("Packed".parse::<SortMode>(), Ok(SortMode::Packed));
        assert_eq!(
            "size".parse::<SortMode>(),
            Err(SortModeError("size".to_string()))
        );
        assert_eq!(SortMode::default(), SortMode::Input);
        assert_eq!(
            serde_json::to_string(&SortMode::Description).unwrap(),
            "\"description\""
        );
    }
}
