//! Identifiers and small value types chosen during the planning wizard.
//!
//! Themes and companion categories are opaque integers owned by the content
//! catalogue; the engine only needs equality and ordering for them.
//!
//! # Examples
//! ```
//! use tourmate_core::TransportMode;
//!
//! assert_eq!(TransportMode::Car.as_str(), "car");
//! assert_eq!("public-transit".parse(), Ok(TransportMode::PublicTransit));
//! ```

use thiserror::Error;

/// Identifier of a place theme (e.g. markets, palaces, night views).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThemeId(pub u32);

/// Identifier of a travel companion category (e.g. family, friends, partner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompanionId(pub u32);

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "theme #{}", self.0)
    }
}

impl std::fmt::Display for CompanionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "companion #{}", self.0)
    }
}

/// How the traveller intends to move between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TransportMode {
    /// Buses, subway and trains.
    PublicTransit,
    /// Private or rented car.
    Car,
}

impl TransportMode {
    /// Return the mode as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use tourmate_core::TransportMode;
    ///
    /// assert_eq!(TransportMode::PublicTransit.as_str(), "public-transit");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PublicTransit => "public-transit",
            Self::Car => "car",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public-transit" | "public_transit" | "transit" | "public" => Ok(Self::PublicTransit),
            "car" => Ok(Self::Car),
            _ => Err(format!("unknown transport mode '{s}'")),
        }
    }
}

/// Per-person spending range in Korean won.
///
/// # Examples
/// ```
/// use tourmate_core::Budget;
///
/// # fn main() -> Result<(), tourmate_core::BudgetError> {
/// let budget = Budget::new(100_000, 300_000)?;
/// assert_eq!(budget.max_krw(), 300_000);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Budget {
    min_krw: u32,
    max_krw: u32,
}

/// Errors returned by [`Budget::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// The lower bound exceeded the upper bound.
    #[error("budget minimum {min_krw} exceeds maximum {max_krw}")]
    Inverted {
        /// Requested lower bound.
        min_krw: u32,
        /// Requested upper bound.
        max_krw: u32,
    },
}

impl Budget {
    /// Validates and constructs a [`Budget`].
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Inverted`] when `min_krw > max_krw`.
    pub const fn new(min_krw: u32, max_krw: u32) -> Result<Self, BudgetError> {
        if min_krw > max_krw {
            return Err(BudgetError::Inverted { min_krw, max_krw });
        }
        Ok(Self { min_krw, max_krw })
    }

    /// Lower bound of the range.
    #[must_use]
    pub const fn min_krw(&self) -> u32 {
        self.min_krw
    }

    /// Upper bound of the range.
    #[must_use]
    pub const fn max_krw(&self) -> u32 {
        self.max_krw
    }

    /// Whether `amount` falls inside the range, inclusive.
    #[must_use]
    pub const fn contains(&self, amount: u32) -> bool {
        amount >= self.min_krw && amount <= self.max_krw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(TransportMode::Car.to_string(), TransportMode::Car.as_str());
    }

    #[rstest]
    #[case("car", TransportMode::Car)]
    #[case("CAR", TransportMode::Car)]
    #[case("public-transit", TransportMode::PublicTransit)]
    #[case("public_transit", TransportMode::PublicTransit)]
    #[case("Transit", TransportMode::PublicTransit)]
    fn parses_transport_aliases(#[case] raw: &str, #[case] expected: TransportMode) {
        assert_eq!(TransportMode::from_str(raw), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown_mode() {
        let err = TransportMode::from_str("bicycle").expect_err("bicycle is not supported");
        assert!(err.contains("unknown transport mode"));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(50_000, 50_001)]
    fn budget_accepts_ordered_bounds(#[case] min: u32, #[case] max: u32) {
        assert!(Budget::new(min, max).is_ok());
    }

    #[test]
    fn budget_rejects_inverted_bounds() {
        let err = Budget::new(10, 5).expect_err("inverted budget");
        assert_eq!(
            err,
            BudgetError::Inverted {
                min_krw: 10,
                max_krw: 5
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn transport_mode_serialises_kebab_case() {
        let json = serde_json::to_string(&TransportMode::PublicTransit).expect("serialise");
        assert_eq!(json, "\"public-transit\"");
    }

    #[test]
    fn budget_contains_is_inclusive() {
        let budget = Budget::new(10, 20).expect("valid budget");
        assert!(budget.contains(10));
        assert!(budget.contains(20));
        assert!(!budget.contains(21));
    }
}
