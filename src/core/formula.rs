use super::error::{Error, Result};
use super::types::{BudgetSplit, SplitAmounts};

/// Slack allowed when checking that split percentages sum to 100.
pub const SPLIT_SUM_TOLERANCE: f64 = 0.5;

/// Splits an income across a needs/wants/savings percentage allocation.
pub fn percent_split(monthly_income: f64, split: BudgetSplit) -> Result<SplitAmounts> {
    if !monthly_income.is_finite() || monthly_income < 0.0 {
        return Err(Error::Validation(
            "monthly_income must be a non-negative number".to_string(),
        ));
    }
    if split.needs_pct < 0.0 || split.wants_pct < 0.0 || split.savings_pct < 0.0 {
        return Err(Error::Validation(
            "split percentages must be non-negative".to_string(),
        ));
    }
    let sum = split.needs_pct + split.wants_pct + split.savings_pct;
    if !sum.is_finite() || (sum - 100.0).abs() > SPLIT_SUM_TOLERANCE {
        return Err(Error::Validation(format!(
            "split percentages must sum to 100, got {sum}"
        )));
    }
    Ok(SplitAmounts {
        needs_amount: monthly_income * split.needs_pct / 100.0,
        wants_amount: monthly_income * split.wants_pct / 100.0,
        savings_amount: monthly_income * split.savings_pct / 100.0,
    })
}

/// Future value of equal monthly contributions compounded at an annual rate.
///
/// A zero rate degenerates to `contribution * months`.
pub fn future_value_of_annuity(
    monthly_contribution: f64,
    annual_rate_pct: f64,
    months: u32,
) -> Result<f64> {
    if !monthly_contribution.is_finite() || monthly_contribution < 0.0 {
        return Err(Error::Validation(
            "monthly_contribution must be a non-negative number".to_string(),
        ));
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < -100.0 {
        return Err(Error::Validation(
            "annual_rate_pct must be a percentage of -100 or above".to_string(),
        ));
    }
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return Ok(monthly_contribution * f64::from(months));
    }
    let factor = ((1.0 + monthly_rate).powi(months as i32) - 1.0) / monthly_rate;
    Ok(monthly_contribution * factor)
}

/// Division for display ratios; yields `fallback` instead of NaN or infinity.
pub fn safe_divide(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 {
        return fallback;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() { ratio } else { fallback }
}
