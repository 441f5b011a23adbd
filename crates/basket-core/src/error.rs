//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Basket and pricing-rule errors                 │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  basket-cli errors (app)                                               │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, threshold, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// Only [`CoreError::InvalidProductCode`] and [`CoreError::BasketFull`] can
/// come out of a basket, both from `add`. The remaining variants reject
/// malformed pricing rules at construction time, so a built
/// [`PricingRules`](crate::rules::PricingRules) always prices.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product code is not in the catalog.
    ///
    /// ## When This Occurs
    /// ```text
    /// basket.add("X99")
    ///      │
    ///      ▼
    /// catalog lookup: miss
    ///      │
    ///      ▼
    /// InvalidProductCode("X99"), basket unchanged
    /// ```
    ///
    /// This is a caller bug, not a transient condition. Never retry it.
    #[error("Invalid product code: {0}")]
    InvalidProductCode(String),

    /// Basket already holds the maximum number of units.
    #[error("Basket cannot hold more than {max} items")]
    BasketFull { max: usize },

    /// The same product code appears twice in a catalog.
    #[error("Duplicate product code in catalog: {0}")]
    DuplicateProduct(String),

    /// An offer refers to a product that is not in the catalog.
    #[error("Offer refers to unknown product code: {0}")]
    UnknownOfferProduct(String),

    /// More than one offer is keyed on the same product code.
    #[error("More than one offer for product code: {0}")]
    DuplicateOffer(String),

    /// No delivery rule with a zero threshold, so some subtotals would
    /// match nothing.
    #[error("Delivery rules need a catch-all rule with threshold $0.00")]
    MissingCatchAllDeliveryRule,

    /// Two delivery rules share a threshold.
    #[error("Duplicate delivery threshold: {0}")]
    DuplicateDeliveryThreshold(Money),

    /// A rules document could not be parsed.
    #[error("Invalid rules document: {reason}")]
    InvalidRulesDocument { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::InvalidRulesDocument {
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors for catalog and rule data.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., product code with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
