//! Systematic investment (SIP) projection
//!
//! Future value of a fixed monthly contribution compounding at an expected
//! annual rate of return.

use serde::Serialize;

use crate::error::{ToolboxError, ToolboxResult};

/// Inputs for an investment projection
#[derive(Debug, Clone, Copy)]
pub struct InvestmentInputs {
    /// Contribution made each month, must be positive and finite
    pub monthly_contribution: f64,
    /// Expected annual return rate in percent, non-negative
    pub annual_rate_pct: f64,
    /// Investment horizon in whole years, at least 1
    pub years: u32,
}

/// Derived projection figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentResult {
    /// Sum of all contributions: `monthly_contribution * years * 12`
    pub invested_amount: f64,
    /// Growth on top of the contributions
    pub estimated_returns: f64,
    /// `invested_amount + estimated_returns`
    pub total_value: f64,
}

/// Project the future value of a monthly SIP contribution.
///
/// Uses `M = C * (((1+i)^n - 1) / i) * (1+i)` with `i` the monthly rate and
/// `n` the number of contributions. A zero rate means the future value is
/// simply the amount invested; that branch avoids the division by `i`.
///
/// # Errors
///
/// Returns [`ToolboxError::InvalidInput`] when the contribution is not a
/// positive finite number, the rate is negative or non-finite, or the
/// duration is zero.
pub fn project(inputs: &InvestmentInputs) -> ToolboxResult<InvestmentResult> {
    if !inputs.monthly_contribution.is_finite() || inputs.monthly_contribution <= 0.0 {
        return Err(ToolboxError::InvalidInput(
            "monthly contribution must be a positive number".into(),
        ));
    }
    if !inputs.annual_rate_pct.is_finite() || inputs.annual_rate_pct < 0.0 {
        return Err(ToolboxError::InvalidInput(
            "return rate must be a non-negative number".into(),
        ));
    }
    if inputs.years == 0 {
        return Err(ToolboxError::InvalidInput(
            "duration must be at least one year".into(),
        ));
    }

    let monthly_rate = inputs.annual_rate_pct / 12.0 / 100.0;
    let months = (inputs.years * 12) as f64;
    let invested_amount = inputs.monthly_contribution * months;

    let total_value = if monthly_rate == 0.0 {
        invested_amount
    } else {
        inputs.monthly_contribution * (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
            * (1.0 + monthly_rate)
    };

    Ok(InvestmentResult {
        invested_amount,
        estimated_returns: total_value - invested_amount,
        total_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_zero_rate_returns_invested_amount() {
        let result = project(&InvestmentInputs {
            monthly_contribution: 500.0,
            annual_rate_pct: 0.0,
            years: 10,
        })
        .unwrap();

        assert!((result.invested_amount - 60_000.0).abs() < EPS);
        assert!(result.estimated_returns.abs() < EPS);
        assert!((result.total_value - 60_000.0).abs() < EPS);
    }

    #[test]
    fn test_positive_rate_grows() {
        let result = project(&InvestmentInputs {
            monthly_contribution: 5_000.0,
            annual_rate_pct: 12.0,
            years: 10,
        })
        .unwrap();

        assert!((result.invested_amount - 600_000.0).abs() < EPS);
        assert!(result.estimated_returns > 0.0);
        assert!(result.total_value > result.invested_amount);
        // Known ballpark for this classic SIP example (~11.6 lakh)
        assert!(result.total_value > 1_160_000.0 && result.total_value < 1_163_000.0);
    }

    #[test]
    fn test_totals_are_consistent() {
        let result = project(&InvestmentInputs {
            monthly_contribution: 100.0,
            annual_rate_pct: 7.0,
            years: 25,
        })
        .unwrap();

        assert!(
            (result.total_value - (result.invested_amount + result.estimated_returns)).abs()
                < 1e-6
        );
        assert!(result.total_value.is_finite());
    }

    #[test]
    fn test_rejects_bad_input() {
        let base = InvestmentInputs {
            monthly_contribution: 100.0,
            annual_rate_pct: 8.0,
            years: 5,
        };

        assert!(project(&InvestmentInputs { monthly_contribution: 0.0, ..base }).is_err());
        assert!(project(&InvestmentInputs { monthly_contribution: -5.0, ..base }).is_err());
        assert!(project(&InvestmentInputs { monthly_contribution: f64::NAN, ..base }).is_err());
        assert!(project(&InvestmentInputs { annual_rate_pct: -0.1, ..base }).is_err());
        assert!(project(&InvestmentInputs { years: 0, ..base }).is_err());
    }
}
