//! # basket-core: Checkout Pricing for a Shopping Basket
//!
//! This crate prices a basket at checkout: item prices, minus promotional
//! discounts, plus a tiered delivery charge. Pure functions, zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 basket-cli (demo harness)                       │   │
//! │  │     args/env ──► Basket::add ──► Basket::total ──► stdout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │   rules   │  │  basket   │  │   │
//! │  │   │   Money   │  │  Product  │  │  catalog  │  │  add()    │  │   │
//! │  │   │  (cents)  │  │  Offer    │  │  delivery │  │  total()  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL MUTABLE STATE • DETERMINISTIC              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Product, DeliveryRule, Offer, BasketTotals
//! - [`rules`] - Validated, read-only pricing configuration
//! - [`basket`] - The basket and its pricing pipeline
//! - [`error`] - Domain error types
//! - [`validation`] - Field validators for rule data
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{Basket, CoreError};
//!
//! let mut basket = Basket::new();
//! basket.add("B01")?;
//! basket.add("G01")?;
//!
//! let totals = basket.totals();
//! assert_eq!(totals.subtotal.cents(), 3290);
//! assert_eq!(totals.delivery.cents(), 495);
//! assert_eq!(basket.total().to_string(), "$37.85");
//! # Ok::<(), CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::Basket;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rules::{PricingRules, RulesDocument};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest accepted price, delivery threshold or delivery cost, in cents
/// ($10,000,000.00).
///
/// ## Why a bound?
/// Together with [`MAX_BASKET_ITEMS`] it keeps every sum the pricing
/// pipeline can form (at most 10^14 cents) far inside `i64`, so pricing a
/// basket of valid items never overflows.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Maximum units a single basket may hold.
pub const MAX_BASKET_ITEMS: usize = 100_000;
