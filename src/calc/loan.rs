//! Amortized loan (EMI) calculator
//!
//! Computes the fixed monthly payment that amortizes a loan's principal and
//! interest over a term, plus the derived totals.

use serde::Serialize;

use crate::error::{ToolboxError, ToolboxResult};

/// Inputs for a loan amortization
#[derive(Debug, Clone, Copy)]
pub struct LoanInputs {
    /// Loan principal, must be positive and finite
    pub principal: f64,
    /// Annual interest rate in percent (e.g. 10.0 for 10% p.a.), non-negative
    pub annual_rate_pct: f64,
    /// Loan term in months, at least 1
    pub term_months: u32,
}

/// Derived loan figures, recomputed whole on any input change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanResult {
    /// Fixed monthly payment (EMI)
    pub monthly_payment: f64,
    /// Interest paid over the full term
    pub total_interest: f64,
    /// Principal plus interest: `monthly_payment * term_months`
    pub total_payable: f64,
}

/// Compute the equated monthly installment for a loan.
///
/// Uses the standard amortization formula
/// `P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate. A zero
/// interest rate takes the `P / n` branch so the formula never divides
/// by zero.
///
/// # Errors
///
/// Returns [`ToolboxError::InvalidInput`] when the principal is not a
/// positive finite number, the rate is negative or non-finite, or the
/// term is zero.
pub fn amortize(inputs: &LoanInputs) -> ToolboxResult<LoanResult> {
    if !inputs.principal.is_finite() || inputs.principal <= 0.0 {
        return Err(ToolboxError::InvalidInput(
            "loan principal must be a positive number".into(),
        ));
    }
    if !inputs.annual_rate_pct.is_finite() || inputs.annual_rate_pct < 0.0 {
        return Err(ToolboxError::InvalidInput(
            "interest rate must be a non-negative number".into(),
        ));
    }
    if inputs.term_months == 0 {
        return Err(ToolboxError::InvalidInput(
            "loan term must be at least one month".into(),
        ));
    }

    let monthly_rate = inputs.annual_rate_pct / 12.0 / 100.0;
    let n = inputs.term_months as f64;

    let monthly_payment = if monthly_rate == 0.0 {
        // Zero-interest loan: straight division, no amortization
        inputs.principal / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        inputs.principal * monthly_rate * growth / (growth - 1.0)
    };

    let total_payable = monthly_payment * n;
    let total_interest = total_payable - inputs.principal;

    Ok(LoanResult {
        monthly_payment,
        total_interest,
        total_payable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_zero_rate_is_straight_division() {
        let result = amortize(&LoanInputs {
            principal: 12_000.0,
            annual_rate_pct: 0.0,
            term_months: 12,
        })
        .unwrap();

        assert!((result.monthly_payment - 1_000.0).abs() < EPS);
        assert!(result.total_interest.abs() < EPS);
        assert!((result.total_payable - 12_000.0).abs() < EPS);
    }

    #[test]
    fn test_positive_rate_accrues_interest() {
        let result = amortize(&LoanInputs {
            principal: 100_000.0,
            annual_rate_pct: 10.0,
            term_months: 12,
        })
        .unwrap();

        // Known value for 100k at 10% p.a. over 12 months
        assert!((result.monthly_payment - 8_791.59).abs() < 0.05);
        assert!(result.total_interest > 0.0);
        assert!(result.total_payable > 100_000.0);
    }

    #[test]
    fn test_totals_are_consistent() {
        let result = amortize(&LoanInputs {
            principal: 250_000.0,
            annual_rate_pct: 6.5,
            term_months: 360,
        })
        .unwrap();

        let n = 360.0;
        assert!((result.monthly_payment * n - result.total_payable).abs() < 1e-6);
        assert!(
            (result.total_payable - (250_000.0 + result.total_interest)).abs() < 1e-6
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        let base = LoanInputs {
            principal: 1_000.0,
            annual_rate_pct: 5.0,
            term_months: 12,
        };

        assert!(amortize(&LoanInputs { principal: 0.0, ..base }).is_err());
        assert!(amortize(&LoanInputs { principal: -10.0, ..base }).is_err());
        assert!(amortize(&LoanInputs { principal: f64::NAN, ..base }).is_err());
        assert!(amortize(&LoanInputs { annual_rate_pct: -1.0, ..base }).is_err());
        assert!(amortize(&LoanInputs { annual_rate_pct: f64::INFINITY, ..base }).is_err());
        assert!(amortize(&LoanInputs { term_months: 0, ..base }).is_err());
    }

    #[test]
    fn test_result_is_always_finite() {
        let result = amortize(&LoanInputs {
            principal: 1.0,
            annual_rate_pct: 30.0,
            term_months: 1,
        })
        .unwrap();

        assert!(result.monthly_payment.is_finite());
        assert!(result.total_interest.is_finite());
        assert!(result.total_payable.is_finite());
    }
}
