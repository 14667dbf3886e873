//! Line-item quantity with a floor of one.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// How many units of a product a line item holds.
///
/// A cart never contains a line with zero units - removing a line is an
/// explicit operation, never a side effect of decrementing. `Quantity`
/// makes that floor structural: the constructor clamps zero up to one,
/// and deserializing a stored `0` is a parse failure rather than an
/// invalid in-memory state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A quantity of exactly one unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, clamping `count` to the floor of one.
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self(NonZeroU32::new(count).unwrap_or(NonZeroU32::MIN))
    }

    /// Get the unit count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add another quantity, saturating at `u32::MAX`.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.checked_add(other.get()).unwrap_or(NonZeroU32::MAX))
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

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_clamps_to_one() {
        assert_eq!(Quantity::new(0), Quantity::ONE);
        assert_eq!(Quantity::new(0).get(), 1);
    }

    #[test]
    fn test_positive_preserved() {
        assert_eq!(Quantity::new(5).get(), 5);
    }

    #[test]
    fn test_saturating_add() {
        let total = Quantity::new(2).saturating_add(Quantity::new(3));
        assert_eq!(total.get(), 5);

        let capped = Quantity::new(u32::MAX).saturating_add(Quantity::ONE);
        assert_eq!(capped.get(), u32::MAX);
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        let result: Result<Quantity, _> = serde_json::from_str("0");
        assert!(result.is_err());

        let ok: Quantity = serde_json::from_str("3").expect("valid quantity");
        assert_eq!(ok.get(), 3);
    }
}
