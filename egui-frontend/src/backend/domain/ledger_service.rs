//! Ledger calculation logic for the cash drawer counter.
//!
//! This is the recalculation core: it takes the raw text of every tracked
//! field and produces the extended value per denomination, the drawer total,
//! the variance against the expected amount, and the suggested cash to
//! remove. It is pure and runs on every frame, so it must be (and is)
//! idempotent for unchanged inputs.

use shared::VarianceState;

use super::models::DENOMINATIONS;

/// Float amount left in the drawer after removing the day's take.
pub const DRAWER_TARGET: f64 = 250.00;

/// Raw text of every tracked input field. Blank or non-numeric text parses
/// to zero; no further validation is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerForm {
    /// One count field per denomination, parallel to `DENOMINATIONS`
    pub counts: Vec<String>,
    pub expected_amount: String,
    pub cash_taken: String,
    pub new_drawer: String,
}

impl DrawerForm {
    pub fn new() -> Self {
        Self {
            counts: vec![String::new(); DENOMINATIONS.len()],
            expected_amount: String::new(),
            cash_taken: String::new(),
            new_drawer: String::new(),
        }
    }

    /// Clear every tracked field back to blank. The next recompute then
    /// yields all-zero totals.
    pub fn clear(&mut self) {
        for count in &mut self.counts {
            count.clear();
        }
        self.expected_amount.clear();
        self.cash_taken.clear();
        self.new_drawer.clear();
    }

    pub fn parsed_counts(&self) -> Vec<f64> {
        self.counts.iter().map(|raw| parse_or_zero(raw)).collect()
    }
}

impl Default for DrawerForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Extended value of one denomination row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTotal {
    pub label: &'static str,
    pub count: f64,
    pub extended: f64,
}

/// Everything the summary panel and the exporters need, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerTotals {
    pub rows: Vec<RowTotal>,
    pub total: f64,
    pub expected: f64,
    pub variance: f64,
    pub variance_state: VarianceState,
    /// max(total - DRAWER_TARGET, 0); what to pull so the float remains
    pub cash_to_remove: f64,
    pub cash_taken: f64,
    pub new_drawer: f64,
}

pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Recompute all derived figures from the current form contents.
    pub fn compute(&self, form: &DrawerForm) -> DrawerTotals {
        let mut rows = Vec::with_capacity(DENOMINATIONS.len());
        let mut total = 0.0;

        for (denomination, raw) in DENOMINATIONS.iter().zip(&form.counts) {
            let count = parse_or_zero(raw);
            let extended = count * denomination.unit_value;
            total += extended;
            rows.push(RowTotal {
                label: denomination.label,
                count,
                extended: round_cents(extended),
            });
        }

        let expected = parse_or_zero(&form.expected_amount);
        let variance = round_cents(total - expected);

        DrawerTotals {
            rows,
            total: round_cents(total),
            expected: round_cents(expected),
            variance,
            variance_state: VarianceState::from_variance(variance),
            cash_to_remove: round_cents((total - DRAWER_TARGET).max(0.0)),
            cash_taken: round_cents(parse_or_zero(&form.cash_taken)),
            new_drawer: round_cents(parse_or_zero(&form.new_drawer)),
        }
    }
}

/// Numeric coercion matching the original form behavior: anything that is
/// not a valid number counts as zero.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Round to cents so displayed figures and their sign classification agree.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Leading dollar sign, exactly two decimals. Negative amounts render as
/// `$-0.20`, like the page this replaces.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Counts print without a decimal point when whole, so "10" stays "10".
pub fn format_count(count: f64) -> String {
    if count == count.trunc() {
        format!("{}", count as i64)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(counts: &[(usize, &str)], expected: &str) -> DrawerForm {
        let mut form = DrawerForm::new();
        for (index, raw) in counts {
            form.counts[*index] = (*raw).to_string();
        }
        form.expected_amount = expected.to_string();
        form
    }

    #[test]
    fn computes_extended_values_and_total() {
        // Pennies x10 and Nickels x4
        let form = form_with(&[(0, "10"), (1, "4")], "0.50");
        let totals = LedgerService::new().compute(&form);

        assert_eq!(totals.rows[0].extended, 0.10);
        assert_eq!(totals.rows[1].extended, 0.20);
        assert_eq!(totals.total, 0.30);
        assert_eq!(totals.variance, -0.20);
        assert_eq!(totals.variance_state, VarianceState::Short);
    }

    #[test]
    fn blank_and_garbage_fields_count_as_zero() {
        let mut form = form_with(&[(4, "abc"), (5, "")], "");
        form.cash_taken = "not a number".to_string();
        let totals = LedgerService::new().compute(&form);

        assert_eq!(totals.total, 0.0);
        assert_eq!(totals.expected, 0.0);
        assert_eq!(totals.cash_taken, 0.0);
        assert_eq!(totals.variance_state, VarianceState::Balanced);
    }

    #[test]
    fn variance_sign_selects_state() {
        let service = LedgerService::new();

        let over = service.compute(&form_with(&[(4, "300")], "250"));
        assert_eq!(over.variance, 50.0);
        assert_eq!(over.variance_state, VarianceState::Over);

        let balanced = service.compute(&form_with(&[(3, "4")], "1.00"));
        assert_eq!(balanced.variance, 0.0);
        assert_eq!(balanced.variance_state, VarianceState::Balanced);
    }

    #[test]
    fn cash_to_remove_never_negative() {
        let service = LedgerService::new();

        let heavy = service.compute(&form_with(&[(9, "3")], ""));
        assert_eq!(heavy.cash_to_remove, 50.0);

        let light = service.compute(&form_with(&[(4, "20")], ""));
        assert_eq!(light.cash_to_remove, 0.0);
    }

    #[test]
    fn recompute_is_idempotent() {
        let form = form_with(&[(0, "7"), (7, "3.5")], "62.50");
        let service = LedgerService::new();
        assert_eq!(service.compute(&form), service.compute(&form));
    }

    #[test]
    fn cleared_form_yields_zero_totals() {
        let mut form = form_with(&[(2, "12")], "40");
        form.cash_taken = "15".to_string();
        form.clear();

        assert!(form.counts.iter().all(String::is_empty));
        assert!(form.expected_amount.is_empty());

        let totals = LedgerService::new().compute(&form);
        assert_eq!(totals.total, 0.0);
        assert_eq!(totals.variance, 0.0);
        assert_eq!(totals.variance_state, VarianceState::Balanced);
    }

    #[test]
    fn currency_formatting_keeps_two_decimals() {
        assert_eq!(format_currency(0.3), "$0.30");
        assert_eq!(format_currency(-0.2), "$-0.20");
        assert_eq!(format_currency(250.0), "$250.00");
        assert_eq!(format_count(10.0), "10");
        assert_eq!(format_count(3.5), "3.5");
    }
}
