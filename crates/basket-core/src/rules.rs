//! # Pricing Rules
//!
//! The read-only configuration a basket is priced against: catalog,
//! delivery charge table and offers.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  PricingRules::standard()  ──┐                                         │
//! │  (built once, 'static)       │                                         │
//! │                              ├──► &PricingRules ──► Basket (many)       │
//! │  PricingRules::new(..)     ──┤    shared, never mutated                 │
//! │  PricingRules::from_json(..)─┘                                         │
//! │  (validated on construction)                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `PricingRules` has no interior mutability, so one instance can back any
//! number of baskets on any number of threads without locking.

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DeliveryRule, Offer, OfferKind, Product};
use crate::validation::{
    validate_min_quantity, validate_price_cents, validate_product_code, validate_product_name,
};

// =============================================================================
// Standard Tables
// =============================================================================

/// Catalog: code, name, price in cents.
const STANDARD_PRODUCTS: &[(&str, &str, i64)] = &[
    ("R01", "Red Widget", 3295),
    ("G01", "Green Widget", 2495),
    ("B01", "Blue Widget", 795),
];

/// Delivery bands, highest threshold first.
const STANDARD_DELIVERY: &[DeliveryRule] = &[
    DeliveryRule::new(9000, 0),
    DeliveryRule::new(5000, 295),
    DeliveryRule::new(0, 495),
];

/// Offers: product code, kind, minimum quantity.
const STANDARD_OFFERS: &[(&str, OfferKind, u32)] = &[("R01", OfferKind::SecondHalfPrice, 2)];

// =============================================================================
// Rules Document
// =============================================================================

/// Serialized form of a rule set.
///
/// ```json
/// {
///   "products": [{ "code": "R01", "name": "Red Widget", "price_cents": 3295 }],
///   "delivery_rules": [{ "threshold_cents": 0, "cost_cents": 495 }],
///   "offers": [{ "product_code": "R01", "kind": "second_half_price", "min_quantity": 2 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesDocument {
    pub products: Vec<Product>,
    pub delivery_rules: Vec<DeliveryRule>,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// Catalog, delivery table and offers, validated and frozen.
#[derive(Debug, Clone)]
pub struct PricingRules {
    catalog: BTreeMap<String, Product>,
    /// Sorted by descending threshold; the last entry is the catch-all.
    delivery_rules: Vec<DeliveryRule>,
    offers: Vec<Offer>,
}

impl PricingRules {
    /// The process-wide standard rules.
    ///
    /// | Code | Name         | Price  |
    /// |------|--------------|--------|
    /// | R01  | Red Widget   | $32.95 |
    /// | G01  | Green Widget | $24.95 |
    /// | B01  | Blue Widget  | $7.95  |
    ///
    /// Delivery: $4.95 under $50, $2.95 under $90, free from $90.
    /// Offer: R01 second-half-price from 2 units.
    pub fn standard() -> &'static PricingRules {
        static STANDARD: OnceLock<PricingRules> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let products = STANDARD_PRODUCTS
                .iter()
                .map(|&(code, name, price)| Product::new(code, name, price))
                .collect();
            let offers = STANDARD_OFFERS
                .iter()
                .map(|&(code, kind, min)| Offer::new(code, kind, min))
                .collect();
            PricingRules::assemble(products, STANDARD_DELIVERY.to_vec(), offers)
        })
    }

    /// Builds a validated rule set.
    ///
    /// ## Rejected
    /// - invalid product codes or names
    /// - prices, delivery thresholds or costs outside `0..=MAX_PRICE_CENTS`
    /// - duplicate product codes or delivery thresholds
    /// - no `0.00` catch-all delivery rule
    /// - offers on unknown products, two offers on one product,
    ///   `min_quantity` of zero
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::rules::PricingRules;
    /// use basket_core::types::{DeliveryRule, Product};
    ///
    /// let rules = PricingRules::new(
    ///     vec![Product::new("T01", "Teapot", 1999)],
    ///     vec![DeliveryRule::new(0, 300)],
    ///     vec![],
    /// )
    /// .unwrap();
    /// assert!(rules.contains("T01"));
    /// ```
    pub fn new(
        products: Vec<Product>,
        delivery_rules: Vec<DeliveryRule>,
        offers: Vec<Offer>,
    ) -> CoreResult<Self> {
        let mut seen_codes = HashSet::new();
        for product in &products {
            validate_product_code(&product.code)?;
            validate_product_name(&product.name)?;
            validate_price_cents("price", product.price_cents)?;
            if !seen_codes.insert(product.code.as_str()) {
                return Err(CoreError::DuplicateProduct(product.code.clone()));
            }
        }

        let mut seen_thresholds = HashSet::new();
        for rule in &delivery_rules {
            validate_price_cents("threshold", rule.threshold_cents)?;
            validate_price_cents("cost", rule.cost_cents)?;
            if !seen_thresholds.insert(rule.threshold_cents) {
                return Err(CoreError::DuplicateDeliveryThreshold(rule.threshold()));
            }
        }
        if !seen_thresholds.contains(&0) {
            return Err(CoreError::MissingCatchAllDeliveryRule);
        }

        let mut seen_offers = HashSet::new();
        for offer in &offers {
            validate_min_quantity(offer.min_quantity)?;
            if !seen_codes.contains(offer.product_code.as_str()) {
                return Err(CoreError::UnknownOfferProduct(offer.product_code.clone()));
            }
            if !seen_offers.insert(offer.product_code.as_str()) {
                return Err(CoreError::DuplicateOffer(offer.product_code.clone()));
            }
        }

        Ok(PricingRules::assemble(products, delivery_rules, offers))
    }

    /// Parses and validates a JSON [`RulesDocument`].
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: RulesDocument = serde_json::from_str(json)?;
        PricingRules::try_from(document)
    }

    /// Returns the rule set in its serialized form.
    pub fn to_document(&self) -> RulesDocument {
        RulesDocument {
            products: self.catalog.values().cloned().collect(),
            delivery_rules: self.delivery_rules.clone(),
            offers: self.offers.clone(),
        }
    }

    fn assemble(
        products: Vec<Product>,
        mut delivery_rules: Vec<DeliveryRule>,
        offers: Vec<Offer>,
    ) -> Self {
        delivery_rules.sort_by(|a, b| b.threshold_cents.cmp(&a.threshold_cents));

        let catalog: BTreeMap<String, Product> = products
            .into_iter()
            .map(|product| (product.code.clone(), product))
            .collect();

        debug!(
            products = catalog.len(),
            delivery_rules = delivery_rules.len(),
            offers = offers.len(),
            "Pricing rules assembled"
        );

        PricingRules {
            catalog,
            delivery_rules,
            offers,
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Looks up a product by code.
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.catalog.get(code)
    }

    /// True when `code` is in the catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.catalog.contains_key(code)
    }

    /// Catalog products in code order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.values()
    }

    /// Delivery bands, highest threshold first.
    pub fn delivery_rules(&self) -> &[DeliveryRule] {
        &self.delivery_rules
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Delivery charge for a discounted subtotal.
    ///
    /// The first band (highest threshold first) whose threshold the amount
    /// reaches wins. An amount below every threshold, only possible when it
    /// is negative, falls into the lowest band.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use basket_core::rules::PricingRules;
    ///
    /// let rules = PricingRules::standard();
    /// assert_eq!(rules.delivery_cost(Money::from_cents(4942)).cents(), 495);
    /// assert_eq!(rules.delivery_cost(Money::from_cents(5000)).cents(), 295);
    /// assert_eq!(rules.delivery_cost(Money::from_cents(9000)).cents(), 0);
    /// ```
    pub fn delivery_cost(&self, discounted_subtotal: Money) -> Money {
        self.delivery_rules
            .iter()
            .find(|rule| rule.applies_to(discounted_subtotal))
            .or_else(|| self.delivery_rules.last())
            .map(DeliveryRule::cost)
            .unwrap_or_else(Money::zero)
    }
}

impl TryFrom<RulesDocument> for PricingRules {
    type Error = CoreError;

    fn try_from(document: RulesDocument) -> CoreResult<Self> {
        PricingRules::new(document.products, document.delivery_rules, document.offers)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn widget(code: &str, price_cents: i64) -> Product {
        Product::new(code, format!("Widget {}", code), price_cents)
    }

    #[test]
    fn test_standard_catalog() {
        let rules = PricingRules::standard();

        assert_eq!(rules.product("R01").map(|p| p.price_cents), Some(3295));
        assert_eq!(rules.product("G01").map(|p| p.price_cents), Some(2495));
        assert_eq!(rules.product("B01").map(|p| p.price_cents), Some(795));
        assert!(!rules.contains("X99"));

        let codes: Vec<&str> = rules.products().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["B01", "G01", "R01"]);
    }

    #[test]
    fn test_standard_is_shared() {
        let a = PricingRules::standard() as *const PricingRules;
        let b = PricingRules::standard() as *const PricingRules;
        assert_eq!(a, b);
    }

    #[test]
    fn test_standard_delivery_bands() {
        let rules = PricingRules::standard();
        let cost = |cents| rules.delivery_cost(Money::from_cents(cents)).cents();

        assert_eq!(cost(0), 495);
        assert_eq!(cost(4999), 495);
        assert_eq!(cost(5000), 295);
        assert_eq!(cost(8999), 295);
        assert_eq!(cost(9000), 0);
        assert_eq!(cost(100_000), 0);
    }

    #[test]
    fn test_delivery_cost_is_non_increasing() {
        let rules = PricingRules::standard();
        let mut previous = rules.delivery_cost(Money::zero());
        for cents in (0..=12_000).step_by(5) {
            let cost = rules.delivery_cost(Money::from_cents(cents));
            assert!(cost <= previous, "delivery rose at {}", cents);
            previous = cost;
        }
    }

    #[test]
    fn test_negative_amount_falls_into_lowest_band() {
        let rules = PricingRules::standard();
        assert_eq!(rules.delivery_cost(Money::from_cents(-1)).cents(), 495);
    }

    #[test]
    fn test_new_sorts_delivery_rules_descending() {
        let rules = PricingRules::new(
            vec![widget("A01", 100)],
            vec![
                DeliveryRule::new(0, 500),
                DeliveryRule::new(9000, 0),
                DeliveryRule::new(5000, 300),
            ],
            vec![],
        )
        .unwrap();

        let thresholds: Vec<i64> = rules
            .delivery_rules()
            .iter()
            .map(|r| r.threshold_cents)
            .collect();
        assert_eq!(thresholds, vec![9000, 5000, 0]);
    }

    #[test]
    fn test_new_requires_catch_all_delivery_rule() {
        let result = PricingRules::new(
            vec![widget("A01", 100)],
            vec![DeliveryRule::new(5000, 0)],
            vec![],
        );
        assert!(matches!(result, Err(CoreError::MissingCatchAllDeliveryRule)));

        let result = PricingRules::new(vec![widget("A01", 100)], vec![], vec![]);
        assert!(matches!(result, Err(CoreError::MissingCatchAllDeliveryRule)));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = PricingRules::new(
            vec![widget("A01", 100), widget("A01", 200)],
            vec![DeliveryRule::new(0, 0)],
            vec![],
        );
        assert!(matches!(result, Err(CoreError::DuplicateProduct(code)) if code == "A01"));

        let result = PricingRules::new(
            vec![widget("A01", 100)],
            vec![DeliveryRule::new(0, 100), DeliveryRule::new(0, 200)],
            vec![],
        );
        assert!(matches!(result, Err(CoreError::DuplicateDeliveryThreshold(_))));

        let offer = Offer::new("A01", OfferKind::SecondHalfPrice, 2);
        let result = PricingRules::new(
            vec![widget("A01", 100)],
            vec![DeliveryRule::new(0, 0)],
            vec![offer.clone(), offer],
        );
        assert!(matches!(result, Err(CoreError::DuplicateOffer(_))));
    }

    #[test]
    fn test_new_rejects_offer_on_unknown_product() {
        let result = PricingRules::new(
            vec![widget("A01", 100)],
            vec![DeliveryRule::new(0, 0)],
            vec![Offer::new("Z01", OfferKind::SecondHalfPrice, 2)],
        );
        assert!(matches!(result, Err(CoreError::UnknownOfferProduct(code)) if code == "Z01"));
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        let result = PricingRules::new(
            vec![widget("A01", -1)],
            vec![DeliveryRule::new(0, 0)],
            vec![],
        );
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        let result = PricingRules::new(
            vec![widget("A01", 100)],
            vec![DeliveryRule::new(0, -5)],
            vec![],
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));

        let result = PricingRules::new(
            vec![widget("A01", 100)],
            vec![DeliveryRule::new(0, 0)],
            vec![Offer::new("A01", OfferKind::SecondHalfPrice, 0)],
        );
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_new_rejects_amounts_that_could_overflow() {
        let result = PricingRules::new(
            vec![widget("A01", i64::MAX / 2 + 1)],
            vec![DeliveryRule::new(0, 0)],
            vec![],
        );
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::OutOfRange { max, .. }))
                if max == crate::MAX_PRICE_CENTS
        ));

        let result = PricingRules::new(
            vec![widget("A01", 100)],
            vec![
                DeliveryRule::new(0, 0),
                DeliveryRule::new(crate::MAX_PRICE_CENTS + 1, 0),
            ],
            vec![],
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));

        let json = format!(
            r#"{{
                "products": [{{ "code": "A01", "name": "Anvil", "price_cents": {} }}],
                "delivery_rules": [{{ "threshold_cents": 0, "cost_cents": 0 }}]
            }}"#,
            i64::MAX
        );
        assert!(matches!(
            PricingRules::from_json(&json),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "products": [
                { "code": "T01", "name": "Teapot", "price_cents": 1999 },
                { "code": "C01", "name": "Cup", "price_cents": 450 }
            ],
            "delivery_rules": [
                { "threshold_cents": 0, "cost_cents": 399 },
                { "threshold_cents": 3000, "cost_cents": 0 }
            ],
            "offers": [
                { "product_code": "C01", "kind": "second_half_price", "min_quantity": 2 }
            ]
        }"#;

        let rules = PricingRules::from_json(json).unwrap();
        assert_eq!(rules.product("T01").map(|p| p.name.as_str()), Some("Teapot"));
        assert_eq!(rules.offers().len(), 1);
        assert_eq!(rules.delivery_cost(Money::from_cents(3000)).cents(), 0);
    }

    #[test]
    fn test_from_json_offers_optional() {
        let json = r#"{
            "products": [{ "code": "T01", "name": "Teapot", "price_cents": 1999 }],
            "delivery_rules": [{ "threshold_cents": 0, "cost_cents": 399 }]
        }"#;
        let rules = PricingRules::from_json(json).unwrap();
        assert!(rules.offers().is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_documents() {
        assert!(matches!(
            PricingRules::from_json("not json"),
            Err(CoreError::InvalidRulesDocument { .. })
        ));

        let unknown_kind = r#"{
            "products": [{ "code": "T01", "name": "Teapot", "price_cents": 1999 }],
            "delivery_rules": [{ "threshold_cents": 0, "cost_cents": 399 }],
            "offers": [{ "product_code": "T01", "kind": "buy_one_get_one", "min_quantity": 2 }]
        }"#;
        assert!(matches!(
            PricingRules::from_json(unknown_kind),
            Err(CoreError::InvalidRulesDocument { .. })
        ));
    }

    #[test]
    fn test_standard_document_reloads() {
        let document = PricingRules::standard().to_document();
        let json = serde_json::to_string(&document).unwrap();
        let reloaded = PricingRules::from_json(&json).unwrap();
        assert_eq!(reloaded.to_document(), document);
    }
}
