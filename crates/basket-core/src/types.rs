//! # Domain Types
//!
//! Core domain types used by the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  DeliveryRule   │   │     Offer       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (key)     │   │  threshold      │   │  product_code   │       │
//! │  │  name           │   │  cost           │   │  kind           │       │
//! │  │  price_cents    │   │                 │   │  min_quantity   │       │
//! │  └─────────────────┘   └─────────────────┘   └────────┬────────┘       │
//! │                                                       │                │
//! │                                              ┌────────▼────────┐       │
//! │                                              │   OfferKind     │       │
//! │                                              │  SecondHalfPrice│       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three records are immutable once built into
//! [`PricingRules`](crate::rules::PricingRules).

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog, identified by `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, e.g. `R01`.
    pub code: String,

    /// Display name, e.g. `Red Widget`.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    /// Creates a product record.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Delivery Rule
// =============================================================================

/// One band of the delivery charge table.
///
/// A rule applies when the discounted subtotal is at or above `threshold`.
/// Rules are evaluated from the highest threshold down and the first match
/// wins, so a `0.00` threshold acts as the catch-all.
///
/// ```text
///  discounted subtotal   0 ──────── 50 ──────── 90 ────────►
///  delivery cost            $4.95      $2.95       $0.00
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRule {
    /// Lowest discounted subtotal (inclusive) this band covers, in cents.
    pub threshold_cents: i64,

    /// Delivery charge for this band, in cents.
    pub cost_cents: i64,
}

impl DeliveryRule {
    /// Creates a delivery band.
    pub const fn new(threshold_cents: i64, cost_cents: i64) -> Self {
        DeliveryRule {
            threshold_cents,
            cost_cents,
        }
    }

    #[inline]
    pub fn threshold(&self) -> Money {
        Money::from_cents(self.threshold_cents)
    }

    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// True when `amount` reaches this band's threshold.
    #[inline]
    pub fn applies_to(&self, amount: Money) -> bool {
        amount >= self.threshold()
    }
}

// =============================================================================
// Offer
// =============================================================================

/// The kind of promotion an offer applies.
///
/// New promotions are added as variants here; the discount loop in
/// [`Basket`](crate::basket::Basket) only ever calls [`OfferKind::discount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferKind {
    /// For every 2 units bought, one unit is half price.
    SecondHalfPrice,
}

impl OfferKind {
    /// Discount for `count` units priced at `unit_price`.
    ///
    /// ## SecondHalfPrice
    /// ```text
    /// pairs    = floor(count / 2)
    /// discount = pairs × round(unit_price / 2, 2)
    /// ```
    /// The half price is rounded to the cent *before* multiplying.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use basket_core::types::OfferKind;
    ///
    /// let red = Money::from_cents(3295);
    /// assert_eq!(OfferKind::SecondHalfPrice.discount(red, 2).cents(), 1648);
    /// assert_eq!(OfferKind::SecondHalfPrice.discount(red, 3).cents(), 1648);
    /// assert_eq!(OfferKind::SecondHalfPrice.discount(red, 4).cents(), 3296);
    /// ```
    pub fn discount(&self, unit_price: Money, count: u32) -> Money {
        match self {
            OfferKind::SecondHalfPrice => {
                let pairs = i64::from(count / 2);
                unit_price.halve_rounded() * pairs
            }
        }
    }
}

/// A promotion keyed by product code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Product this offer discounts.
    pub product_code: String,

    /// Which promotion to apply.
    pub kind: OfferKind,

    /// Units of the product needed before the offer applies.
    pub min_quantity: u32,
}

impl Offer {
    /// Creates an offer.
    pub fn new(product_code: impl Into<String>, kind: OfferKind, min_quantity: u32) -> Self {
        Offer {
            product_code: product_code.into(),
            kind,
            min_quantity,
        }
    }

    /// True when `count` units meet the minimum quantity.
    #[inline]
    pub fn is_triggered(&self, count: u32) -> bool {
        count >= self.min_quantity
    }

    /// Discount contributed by `count` units, zero below `min_quantity`.
    pub fn discount(&self, unit_price: Money, count: u32) -> Money {
        if !self.is_triggered(count) {
            return Money::zero();
        }
        self.kind.discount(unit_price, count)
    }
}

// =============================================================================
// Basket Totals
// =============================================================================

/// Full pricing breakdown of a basket.
///
/// `total = discounted_subtotal + delivery` and
/// `discounted_subtotal = subtotal - discount` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketTotals {
    pub item_count: usize,
    pub subtotal: Money,
    pub discount: Money,
    pub discounted_subtotal: Money,
    pub delivery: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
