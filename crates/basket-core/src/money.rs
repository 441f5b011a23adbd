//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    32.95 / 2 = 16.474999999999998  → round(2) may give 16.47  ❌       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3295 cents / 2 = 1647.5 → half rounds away from zero → 1648 cents   │
//! │    Every 2-decimal rounding point is exact by construction             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price = Money::from_cents(3295); // $32.95
//! let pair = price * 2;               // $65.90
//! assert_eq!(pair.cents(), 6590);
//! assert_eq!(price.halve_rounded().cents(), 1648);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Discounts are subtracted, intermediate values may dip
///   below zero in custom rule sets
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: Serializes as a plain integer number of cents
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► Basket.subtotal ──► − Offer discounts               │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                     Discounted subtotal ──► DeliveryRule.cost           │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                                        Basket.total                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(795); // Represents $7.95
    /// assert_eq!(price.cents(), 795);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Halves the amount, rounding to whole cents with halves going away
    /// from zero.
    ///
    /// This is `round(amount / 2, 2)` on a decimal amount: the half-price
    /// value of one unit, fixed to the cent *before* any multiplication by a
    /// pair count.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// // $32.95 / 2 = $16.475 → $16.48
    /// assert_eq!(Money::from_cents(3295).halve_rounded().cents(), 1648);
    /// // $24.90 / 2 = $12.45 exactly
    /// assert_eq!(Money::from_cents(2490).halve_rounded().cents(), 1245);
    /// ```
    #[inline]
    pub const fn halve_rounded(&self) -> Self {
        Money((self.0 + self.0.signum()) / 2)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$12.34` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (pair counts, quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
