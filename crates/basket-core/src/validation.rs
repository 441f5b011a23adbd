//! # Validation Module
//!
//! Field validators for catalog and offer data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape and types of a rules document                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Per-field rules: codes, names, prices, quantities                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: PricingRules::new                                            │
//! │  └── Cross-record rules: duplicates, catch-all delivery, offer links   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_PRICE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product code.
pub const MAX_PRODUCT_CODE_LEN: usize = 16;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - At most 16 characters
/// - ASCII letters and digits only (`R01`, `G01`, `B01`)
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_product_code;
///
/// assert!(validate_product_code("R01").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("R 01").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_PRODUCT_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_PRODUCT_CODE_LEN,
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only ASCII letters and digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: non-blank, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an amount in cents for `field`.
///
/// Zero is allowed (free delivery, free items); negatives and amounts above
/// [`MAX_PRICE_CENTS`] are not.
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("price", 3295).is_ok());
/// assert!(validate_price_cents("cost", 0).is_ok());
/// assert!(validate_price_cents("price", -1).is_err());
/// assert!(validate_price_cents("price", i64::MAX).is_err());
/// ```
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates an offer's minimum quantity (must be at least 1).
pub fn validate_min_quantity(min_quantity: u32) -> ValidationResult<()> {
    if min_quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "min_quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
