//! Line item quantities.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is below the minimum of one.
    #[error("quantity must be at least 1 (got {0})")]
    BelowMinimum(i64),
    /// The value does not fit in a `u32`.
    #[error("quantity {0} is too large")]
    TooLarge(i64),
}

/// A positive item count.
///
/// A cart line can never hold fewer than one unit, so the type makes that
/// state unrepresentable instead of checking for it everywhere.
///
/// ## Examples
///
/// ```
/// use shopfront_core::Quantity;
///
/// assert_eq!(Quantity::new(3).unwrap().get(), 3);
/// assert!(Quantity::new(0).is_err());
/// assert!(Quantity::from_signed(-5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity from an unsigned count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::BelowMinimum`] if `count` is zero.
    pub fn new(count: u32) -> Result<Self, QuantityError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(QuantityError::BelowMinimum(0))
    }

    /// Create a quantity from any integer, returning `None` below one.
    ///
    /// Values above `u32::MAX` are also rejected.
    #[must_use]
    pub fn from_signed(count: i64) -> Option<Self> {
        Self::try_from(count).ok()
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add two quantities, clamping at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.get()))
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

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        if count < 1 {
            return Err(QuantityError::BelowMinimum(count));
        }
        let count = u32::try_from(count).map_err(|_| QuantityError::TooLarge(count))?;
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}
