//! Calculator result formatting
//!
//! Turns calculator outputs into display-ready terminal text. The numeric
//! modules themselves never format anything.

use crate::calc::{AgeBreakdown, BmiReading, Hsl, LoanResult, NextBirthday, Rgb};
use crate::calc::{InvestmentResult, UnitCategory};

/// Format an amortized loan result
pub fn format_loan_result(result: &LoanResult, principal: f64) -> String {
    let mut output = String::new();
    output.push_str(&format!("Monthly EMI:     {:.2}\n", result.monthly_payment));
    output.push_str(&format!("Principal:       {:.2}\n", principal));
    output.push_str(&format!("Total Interest:  {:.2}\n", result.total_interest));
    output.push_str(&format!("Total Payable:   {:.2}\n", result.total_payable));
    output
}

/// Format a SIP projection result
pub fn format_investment_result(result: &InvestmentResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Invested Amount: {:.2}\n", result.invested_amount));
    output.push_str(&format!("Est. Returns:    {:.2}\n", result.estimated_returns));
    output.push_str(&format!("Total Value:     {:.2}\n", result.total_value));
    output
}

/// Format a unit conversion result
pub fn format_conversion(
    amount: f64,
    from: &str,
    to: &str,
    result: f64,
    precision: usize,
) -> String {
    format!("{} {} = {:.*} {}\n", amount, from, precision, result, to)
}

/// List the unit symbols available per category
pub fn format_unit_listing() -> String {
    let mut output = String::new();
    for category in UnitCategory::ALL {
        let symbols: Vec<_> = category.unit_symbols().collect();
        output.push_str(&format!("{}: {}\n", category, symbols.join(", ")));
    }
    output
}

/// Format an age breakdown with the next-birthday interval
pub fn format_age(age: &AgeBreakdown, next: &NextBirthday) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Age: {} years, {} months, {} days\n",
        age.years, age.months, age.days
    ));
    if next.total_days == 0 {
        output.push_str("Next birthday: today! 🎂\n");
    } else {
        output.push_str(&format!(
            "Next birthday: in {} months and {} days ({} days total, approximate breakdown)\n",
            next.months, next.days, next.total_days
        ));
    }
    output
}

/// Format a BMI reading
pub fn format_bmi(reading: &BmiReading) -> String {
    format!("BMI: {:.1} ({})\n", reading.rounded(), reading.category)
}

/// Format a color in all three spaces
pub fn format_color(rgb: &Rgb, hsl: &Hsl) -> String {
    let mut output = String::new();
    output.push_str(&format!("HEX: {}\n", rgb.to_hex()));
    output.push_str(&format!("RGB: {}\n", rgb));
    output.push_str(&format!("HSL: {}\n", hsl));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{amortize, LoanInputs};

    #[test]
    fn test_loan_output_contains_totals() {
        let result = amortize(&LoanInputs {
            principal: 12_000.0,
            annual_rate_pct: 0.0,
            term_months: 12,
        })
        .unwrap();

        let text = format_loan_result(&result, 12_000.0);
        assert!(text.contains("Monthly EMI:     1000.00"));
        assert!(text.contains("Total Interest:  0.00"));
    }

    #[test]
    fn test_conversion_respects_precision() {
        let text = format_conversion(1.0, "mi", "km", 1.60934, 4);
        assert!(text.contains("1.6093 km"));
    }

    #[test]
    fn test_unit_listing_covers_categories() {
        let text = format_unit_listing();
        assert!(text.contains("length: m, km"));
        assert!(text.contains("weight: g, kg"));
    }
}
