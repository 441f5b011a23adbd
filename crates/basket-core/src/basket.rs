//! # Basket
//!
//! The Basket Pricing Engine: collects product codes and prices them
//! against a [`PricingRules`] set.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  items ──► 1. subtotal      Σ catalog[code].price                       │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            2. discount      Σ offer.discount(price, count)  per offer   │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            3. discounted    subtotal − discount   (never clamped)       │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            4. delivery      first band with threshold ≤ discounted      │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            5. total         discounted + delivery                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every amount is whole cents, so the final `round(.., 2)` is exact.
//! Pricing is recomputed from the item list on every call; nothing is cached.
//!
//! ## Example
//! ```rust
//! use basket_core::Basket;
//!
//! let mut basket = Basket::new();
//! basket.add("R01").unwrap();
//! basket.add("R01").unwrap();
//! assert_eq!(basket.total().to_string(), "$54.37");
//!
//! assert!(basket.add("X99").is_err());
//! assert_eq!(basket.len(), 2);
//! ```

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::PricingRules;
use crate::types::BasketTotals;
use crate::MAX_BASKET_ITEMS;

/// A shopping basket priced against borrowed, read-only rules.
///
/// ## Ownership
/// The basket owns its item list and borrows the rules, so many baskets can
/// share one [`PricingRules`]. A single basket is single-writer: `add` takes
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct Basket<'r> {
    rules: &'r PricingRules,
    items: Vec<String>,
}

impl Basket<'static> {
    /// Creates an empty basket priced with [`PricingRules::standard`].
    pub fn new() -> Self {
        Basket::with_rules(PricingRules::standard())
    }
}

impl Default for Basket<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Basket<'r> {
    /// Creates an empty basket priced with `rules`.
    pub fn with_rules(rules: &'r PricingRules) -> Self {
        Basket {
            rules,
            items: Vec::new(),
        }
    }

    /// Creates a basket and adds each code in order.
    ///
    /// Stops at the first unknown code and returns its error.
    pub fn from_codes<I, S>(rules: &'r PricingRules, codes: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut basket = Basket::with_rules(rules);
        for code in codes {
            basket.add(code.as_ref())?;
        }
        Ok(basket)
    }

    /// Adds one unit of `code` to the basket.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidProductCode`] when the code is not in the catalog
    /// - [`CoreError::BasketFull`] when the basket already holds
    ///   [`MAX_BASKET_ITEMS`] units
    ///
    /// The basket is left unchanged on error.
    pub fn add(&mut self, code: &str) -> CoreResult<()> {
        if !self.rules.contains(code) {
            warn!(code, "Rejected unknown product code");
            return Err(CoreError::InvalidProductCode(code.to_string()));
        }

        if self.items.len() >= MAX_BASKET_ITEMS {
            warn!(code, max = MAX_BASKET_ITEMS, "Rejected item, basket full");
            return Err(CoreError::BasketFull {
                max: MAX_BASKET_ITEMS,
            });
        }

        self.items.push(code.to_string());
        debug!(code, items = self.items.len(), "Item added to basket");
        Ok(())
    }

    /// Product codes in the order they were added.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of units in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Units of `code` in the basket.
    pub fn quantity_of(&self, code: &str) -> u32 {
        self.counts().get(code).copied().unwrap_or(0)
    }

    fn counts(&self) -> BTreeMap<&str, u32> {
        let mut counts = BTreeMap::new();
        for code in &self.items {
            *counts.entry(code.as_str()).or_insert(0) += 1;
        }
        counts
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Sum of unit prices, zero for an empty basket.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .filter_map(|code| self.rules.product(code))
            .map(|product| product.price())
            .sum()
    }

    /// Sum of every offer's contribution.
    ///
    /// Offers are independent and keyed by product code; each sees only the
    /// count of its own product.
    pub fn discount(&self) -> Money {
        let counts = self.counts();
        self.rules
            .offers()
            .iter()
            .filter_map(|offer| {
                let product = self.rules.product(&offer.product_code)?;
                let count = counts.get(offer.product_code.as_str()).copied().unwrap_or(0);
                Some(offer.discount(product.price(), count))
            })
            .sum()
    }

    /// Delivery charge for the current discounted subtotal.
    pub fn delivery(&self) -> Money {
        self.rules.delivery_cost(self.subtotal() - self.discount())
    }

    /// Total payable: discounted subtotal plus delivery.
    pub fn total(&self) -> Money {
        self.totals().total
    }

    /// Full pricing breakdown.
    pub fn totals(&self) -> BasketTotals {
        let subtotal = self.subtotal();
        let discount = self.discount();
        let discounted_subtotal = subtotal - discount;
        let delivery = self.rules.delivery_cost(discounted_subtotal);
        let total = discounted_subtotal + delivery;

        debug!(
            items = self.items.len(),
            subtotal = subtotal.cents(),
            discount = discount.cents(),
            delivery = delivery.cents(),
            total = total.cents(),
            "Basket priced"
        );

        BasketTotals {
            item_count: self.items.len(),
            subtotal,
            discount,
            discounted_subtotal,
            delivery,
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
