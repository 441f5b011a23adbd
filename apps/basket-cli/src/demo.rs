//! # Demo Scenarios
//!
//! The fixed baskets the harness prices when run without codes, each with
//! the total expected under the standard rules.

use basket_core::{Basket, CoreResult, Money, PricingRules};
use serde::Serialize;
use tracing::info;

/// Demo baskets and their expected totals in cents.
pub const SCENARIOS: &[(&[&str], i64)] = &[
    (&["B01", "G01"], 3785),
    (&["R01", "R01"], 5437),
    (&["R01", "G01"], 6085),
    (&["B01", "B01", "R01", "R01"], 6827),
];

/// Outcome of one demo scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub case: usize,
    pub items: Vec<String>,
    pub total: Money,
    pub expected: Money,
    pub pass: bool,
}

impl ScenarioReport {
    /// Text block printed for this scenario.
    pub fn render(&self) -> String {
        format!(
            "Test case {}: Items: {}\nTotal: {}\nExpected: {}\nPass: {}\n",
            self.case,
            self.items.join(", "),
            self.total,
            self.expected,
            self.pass
        )
    }
}

/// Prices every scenario against `rules`.
///
/// Fails only if `rules` lacks a scenario's product code.
pub fn run_scenarios(rules: &PricingRules) -> CoreResult<Vec<ScenarioReport>> {
    SCENARIOS
        .iter()
        .enumerate()
        .map(|(index, &(codes, expected_cents))| -> CoreResult<ScenarioReport> {
            let basket = Basket::from_codes(rules, codes.iter().copied())?;
            let total = basket.total();
            let expected = Money::from_cents(expected_cents);
            let pass = total == expected;
            info!(case = index + 1, total = %total, pass, "Scenario priced");

            Ok(ScenarioReport {
                case: index + 1,
                items: basket.items().to_vec(),
                total,
                expected,
                pass,
            })
        })
        .collect()
}
