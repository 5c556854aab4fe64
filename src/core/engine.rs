use super::error::{Error, Result};
use super::events::simulate_life_events;
use super::formula::{future_value_of_annuity, percent_split, safe_divide};
use super::types::{
    AssetAllocation, BalanceOutlook, BudgetBreakdown, BudgetPersona, BudgetSplit, DebtPayoff,
    EmergencyFundPlan, GoalAlternatives, GoalAssessment, Grade, HorizonProjection, IncomeType,
    InflationReport, InvestmentOutlook, LifestyleMode, MilestoneCheck, MilestoneStanding,
    NegotiationPower, PlanInputs, PlanResult, RiskTolerance, SpendingZone, StabilityReport,
    TrajectoryPoint, TrajectoryStatus,
};

pub const DEFAULT_HORIZONS: [u32; 3] = [10, 20, 30];

const MILESTONE_TARGETS: [(u32, f64); 3] = [(30, 1.0), (35, 3.0), (40, 5.0)];

const EMERGENCY_CONTRIBUTION_SHARE: f64 = 0.5;
const GOAL_BUDGET_SHARE: f64 = 0.3;

/// Runs every calculator over one snapshot of financial facts.
///
/// The sections are wired together: savings capacity is reduced by debt
/// payments, emergency catch-up is carved out before investing, and a fixed
/// share of the remaining savings is offered to the goal. The first failing
/// section aborts the whole plan; there are no partial results.
pub fn run_plan(inputs: &PlanInputs) -> Result<PlanResult> {
    let budget = build_budget(
        inputs.monthly_income,
        inputs.budget_persona,
        inputs.lifestyle_mode,
        inputs.plan_month,
        inputs.debt_monthly_payment,
    )?;
    let debt = debt_payoff(
        inputs.debt_principal,
        inputs.debt_annual_rate_pct,
        inputs.debt_monthly_payment,
        inputs.debt_extra_payment,
    )?;

    let emergency_fund = emergency_fund_plan(
        budget.amounts.needs_amount,
        inputs.emergency_target_months,
        inputs.emergency_fund_saved,
        budget.adjusted_savings * EMERGENCY_CONTRIBUTION_SHARE,
    )?;
    let emergency_catch_up =
        ((emergency_fund.target_amount - inputs.emergency_fund_saved) / 12.0).max(0.0);
    let available_for_investment = (budget.adjusted_savings - emergency_catch_up).max(0.0);

    let horizons = project_growth(
        inputs.investment_monthly_contribution,
        inputs.annual_return_pct,
        &DEFAULT_HORIZONS,
    )?;
    let allocation = asset_allocation(inputs.age, inputs.risk_tolerance)?;
    let milestones = net_worth_milestones(
        inputs.age,
        inputs.monthly_income * 12.0,
        inputs.current_savings,
        budget.adjusted_savings,
        available_for_investment,
        inputs.annual_return_pct,
    )?;
    let investment = InvestmentOutlook {
        monthly_contribution: inputs.investment_monthly_contribution,
        available_for_investment,
        horizons,
        allocation,
        milestones,
    };

    let goal = goal_feasibility(
        inputs.goal_target_amount,
        inputs.goal_already_saved,
        inputs.goal_timeline_months,
        budget.adjusted_savings * GOAL_BUDGET_SHARE,
    )?;
    let trajectory = BalanceTrajectory::new(
        inputs.current_balance,
        inputs.daily_burn_rate,
        inputs.days_remaining,
        inputs.spending_adjustment_pct,
        inputs.monthly_income,
    )?;
    let stability = stability_report(
        inputs.monthly_income,
        inputs.income_type,
        inputs.income_variance_pct,
        inputs.emergency_fund_saved,
    )?;
    let inflation = lifestyle_inflation(
        inputs.monthly_income,
        inputs.income_growth_pct,
        inputs.spending_growth_pct,
    )?;
    let what_if = simulate_life_events(&inputs.life_events, inputs.monthly_income)?;

    Ok(PlanResult {
        budget,
        debt,
        investment,
        emergency_fund,
        goal,
        balance: trajectory.outlook(),
        stability,
        inflation,
        what_if,
    })
}

pub fn tier_split(monthly_income: f64) -> BudgetSplit {
    if monthly_income < 2000.0 {
        BudgetSplit {
            needs_pct: 60.0,
            wants_pct: 25.0,
            savings_pct: 15.0,
        }
    } else if monthly_income < 4000.0 {
        BudgetSplit {
            needs_pct: 55.0,
            wants_pct: 30.0,
            savings_pct: 15.0,
        }
    } else if monthly_income < 6000.0 {
        BudgetSplit {
            needs_pct: 50.0,
            wants_pct: 30.0,
            savings_pct: 20.0,
        }
    } else {
        BudgetSplit {
            needs_pct: 45.0,
            wants_pct: 35.0,
            savings_pct: 20.0,
        }
    }
}

pub fn persona_split(persona: BudgetPersona) -> BudgetSplit {
    match persona {
        BudgetPersona::Student => BudgetSplit {
            needs_pct: 70.0,
            wants_pct: 20.0,
            savings_pct: 10.0,
        },
        BudgetPersona::Balanced => BudgetSplit {
            needs_pct: 50.0,
            wants_pct: 30.0,
            savings_pct: 20.0,
        },
        BudgetPersona::Slay => BudgetSplit {
            needs_pct: 40.0,
            wants_pct: 35.0,
            savings_pct: 25.0,
        },
        BudgetPersona::Emergency => BudgetSplit {
            needs_pct: 80.0,
            wants_pct: 10.0,
            savings_pct: 10.0,
        },
        BudgetPersona::Holiday => BudgetSplit {
            needs_pct: 45.0,
            wants_pct: 40.0,
            savings_pct: 15.0,
        },
        BudgetPersona::WealthBuilder => BudgetSplit {
            needs_pct: 35.0,
            wants_pct: 25.0,
            savings_pct: 40.0,
        },
    }
}

pub fn lifestyle_split(mode: LifestyleMode) -> BudgetSplit {
    match mode {
        LifestyleMode::Survival => BudgetSplit {
            needs_pct: 70.0,
            wants_pct: 15.0,
            savings_pct: 15.0,
        },
        LifestyleMode::Comfort => BudgetSplit {
            needs_pct: 50.0,
            wants_pct: 30.0,
            savings_pct: 20.0,
        },
        LifestyleMode::Slay => BudgetSplit {
            needs_pct: 45.0,
            wants_pct: 25.0,
            savings_pct: 30.0,
        },
    }
}

/// Seasonal persona nudge: festive spending in November and December, a
/// saving reset in January.
pub fn suggested_persona(plan_month: u32) -> Result<Option<BudgetPersona>> {
    if !(1..=12).contains(&plan_month) {
        return Err(Error::Validation(
            "plan_month must be between 1 and 12".to_string(),
        ));
    }
    Ok(match plan_month {
        11 | 12 => Some(BudgetPersona::Holiday),
        1 => Some(BudgetPersona::WealthBuilder),
        _ => None,
    })
}

/// Resolves the budget split (explicit persona first, then lifestyle mode,
/// then the income tier) and derives amounts plus debt-adjusted savings.
pub fn build_budget(
    monthly_income: f64,
    persona: Option<BudgetPersona>,
    lifestyle_mode: Option<LifestyleMode>,
    plan_month: u32,
    monthly_debt_payment: f64,
) -> Result<BudgetBreakdown> {
    require_non_negative(monthly_debt_payment, "monthly_debt_payment")?;
    let split = match (persona, lifestyle_mode) {
        (Some(persona), _) => persona_split(persona),
        (None, Some(mode)) => lifestyle_split(mode),
        (None, None) => tier_split(monthly_income),
    };
    let amounts = percent_split(monthly_income, split)?;
    let adjusted_savings = (amounts.savings_amount - monthly_debt_payment).max(0.0);
    Ok(BudgetBreakdown {
        split,
        amounts,
        adjusted_savings,
        debt_payoff_extra: amounts.savings_amount - adjusted_savings,
        suggested_persona: suggested_persona(plan_month)?,
    })
}

/// Closed-form payoff schedule for a fixed total monthly payment.
///
/// A payment at or below the monthly interest on the balance can never
/// clear it, which is reported as `Infeasible` rather than an infinite
/// month count.
pub fn debt_payoff(
    principal: f64,
    annual_rate_pct: f64,
    monthly_payment: f64,
    extra_payment: f64,
) -> Result<DebtPayoff> {
    require_non_negative(principal, "principal")?;
    if !annual_rate_pct.is_finite() || !(0.0..100.0).contains(&annual_rate_pct) {
        return Err(Error::Validation(
            "annual_rate_pct must be at least 0 and below 100".to_string(),
        ));
    }
    require_non_negative(monthly_payment, "monthly_payment")?;
    require_non_negative(extra_payment, "extra_payment")?;

    let total_payment = monthly_payment + extra_payment;
    if principal == 0.0 {
        return Ok(DebtPayoff {
            months_to_payoff: 0.0,
            total_interest: 0.0,
            total_paid: 0.0,
            freed_monthly_payment: total_payment,
        });
    }
    if total_payment <= 0.0 {
        return Err(Error::Infeasible(
            "positive balance with no monthly payment".to_string(),
        ));
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return Ok(DebtPayoff {
            months_to_payoff: principal / total_payment,
            total_interest: 0.0,
            total_paid: principal,
            freed_monthly_payment: total_payment,
        });
    }

    let monthly_interest = monthly_rate * principal;
    if monthly_interest >= total_payment {
        return Err(Error::Infeasible(format!(
            "payment of {total_payment:.2} does not cover monthly interest of {monthly_interest:.2}"
        )));
    }
    let months_to_payoff =
        -(1.0 - monthly_interest / total_payment).ln() / (1.0 + monthly_rate).ln();
    let total_interest = (total_payment * months_to_payoff - principal).max(0.0);
    Ok(DebtPayoff {
        months_to_payoff,
        total_interest,
        total_paid: principal + total_interest,
        freed_monthly_payment: total_payment,
    })
}

pub fn project_growth(
    monthly_contribution: f64,
    annual_return_pct: f64,
    horizon_years: &[u32],
) -> Result<Vec<HorizonProjection>> {
    let mut horizons = Vec::with_capacity(horizon_years.len());
    for &years in horizon_years {
        if years == 0 {
            return Err(Error::Validation(
                "horizon_years must all be positive".to_string(),
            ));
        }
        let months = years * 12;
        let future_value =
            future_value_of_annuity(monthly_contribution, annual_return_pct, months)?;
        let total_contributions = monthly_contribution * f64::from(months);
        horizons.push(HorizonProjection {
            years,
            future_value,
            total_contributions,
            growth: future_value - total_contributions,
        });
    }
    Ok(horizons)
}

/// Net-worth checkpoints at ages 30, 35 and 40, targeting one, three and
/// five times annual income. Checkpoints at or below the current age are
/// omitted.
pub fn net_worth_milestones(
    age: u32,
    annual_income: f64,
    current_savings: f64,
    monthly_savings: f64,
    monthly_investing: f64,
    annual_return_pct: f64,
) -> Result<Vec<MilestoneCheck>> {
    require_age(age)?;
    require_non_negative(annual_income, "annual_income")?;
    require_non_negative(current_savings, "current_savings")?;
    require_non_negative(monthly_savings, "monthly_savings")?;
    require_non_negative(monthly_investing, "monthly_investing")?;
    if !annual_return_pct.is_finite() || annual_return_pct < -100.0 {
        return Err(Error::Validation(
            "annual_return_pct must be a percentage of -100 or above".to_string(),
        ));
    }

    let mut milestones = Vec::new();
    for (target_age, multiplier) in MILESTONE_TARGETS {
        if target_age <= age {
            continue;
        }
        let years = f64::from(target_age - age);
        let growth_factor = (1.0 + annual_return_pct / 100.0).powf(years);
        let target_net_worth = annual_income * multiplier;
        let projected_net_worth = current_savings
            + monthly_savings * 12.0 * years
            + monthly_investing * 12.0 * years * growth_factor;
        milestones.push(MilestoneCheck {
            target_age,
            target_net_worth,
            projected_net_worth,
            standing: if projected_net_worth >= target_net_worth {
                MilestoneStanding::OnTrack
            } else {
                MilestoneStanding::NeedsBoost
            },
        });
    }
    Ok(milestones)
}

/// Stock/bond/cash weights by age and risk appetite. Whatever the clamps
/// leave over lands in cash, so the three always sum to 100.
pub fn asset_allocation(age: u32, risk_tolerance: RiskTolerance) -> Result<AssetAllocation> {
    require_age(age)?;
    let age = f64::from(age);
    let (stock_pct, bond_pct) = match risk_tolerance {
        RiskTolerance::Conservative => ((60.0 - age).max(20.0), (40.0 + (age - 20.0)).min(50.0)),
        RiskTolerance::Moderate => (
            (70.0 - (age - 20.0)).max(40.0),
            (30.0 + (age - 20.0)).min(40.0),
        ),
        RiskTolerance::Aggressive => (
            (80.0 + (35.0 - age)).min(95.0),
            (20.0 - (35.0 - age)).max(5.0),
        ),
    };
    Ok(AssetAllocation {
        stock_pct,
        bond_pct,
        cash_pct: 100.0 - stock_pct - bond_pct,
    })
}

pub fn emergency_fund_plan(
    monthly_needs: f64,
    target_months: f64,
    current_saved: f64,
    monthly_contribution: f64,
) -> Result<EmergencyFundPlan> {
    require_non_negative(monthly_needs, "monthly_needs")?;
    if !target_months.is_finite() || target_months <= 0.0 {
        return Err(Error::Validation(
            "target_months must be positive".to_string(),
        ));
    }
    require_non_negative(current_saved, "current_saved")?;
    require_non_negative(monthly_contribution, "monthly_contribution")?;

    let target_amount = monthly_needs * target_months;
    let funded = current_saved >= target_amount;
    let months_to_target = if funded {
        0.0
    } else if monthly_contribution == 0.0 {
        return Err(Error::Infeasible(
            "no monthly contribution toward an unmet emergency fund".to_string(),
        ));
    } else {
        (target_amount - current_saved) / monthly_contribution
    };
    Ok(EmergencyFundPlan {
        target_amount,
        progress_pct: safe_divide(current_saved, target_amount, 0.0) * 100.0,
        months_to_target,
        funded,
    })
}

/// Checks a savings goal against the budget actually available for it.
///
/// An infeasible goal always carries both fallbacks: the stretched
/// timeline that keeps the target, and the reduced target that keeps the
/// timeline.
pub fn goal_feasibility(
    target_amount: f64,
    already_saved: f64,
    timeline_months: u32,
    available_budget: f64,
) -> Result<GoalAssessment> {
    if !target_amount.is_finite() || target_amount <= 0.0 {
        return Err(Error::Validation(
            "target_amount must be positive".to_string(),
        ));
    }
    require_non_negative(already_saved, "already_saved")?;
    if already_saved > target_amount {
        return Err(Error::Validation(
            "already_saved cannot exceed target_amount".to_string(),
        ));
    }
    if timeline_months == 0 {
        return Err(Error::Validation(
            "timeline_months must be positive".to_string(),
        ));
    }
    require_non_negative(available_budget, "available_budget")?;

    let required_monthly = target_amount / f64::from(timeline_months);
    let feasible = required_monthly <= available_budget;
    let alternatives = if feasible {
        None
    } else {
        if available_budget == 0.0 {
            return Err(Error::Infeasible(
                "goal cannot be reached with no available budget".to_string(),
            ));
        }
        Some(GoalAlternatives {
            extended_timeline_months: target_amount / available_budget,
            reduced_target: available_budget * f64::from(timeline_months),
        })
    };
    Ok(GoalAssessment {
        required_monthly,
        available_budget,
        progress_pct: safe_divide(already_saved, target_amount, 0.0) * 100.0,
        feasible,
        alternatives,
    })
}

/// Straight-line depletion of a balance over the rest of the month.
///
/// The balance at any day is a closed form of the day number, so points can
/// be sampled in any order and resampled freely. A negative projected
/// balance is a modeled shortfall, not a floor.
#[derive(Copy, Clone, Debug)]
pub struct BalanceTrajectory {
    current_balance: f64,
    adjusted_daily_rate: f64,
    days_remaining: u32,
    reference_income: f64,
}

impl BalanceTrajectory {
    pub fn new(
        current_balance: f64,
        daily_burn_rate: f64,
        days_remaining: u32,
        spending_adjustment_pct: f64,
        reference_income: f64,
    ) -> Result<Self> {
        if !current_balance.is_finite() {
            return Err(Error::Validation(
                "current_balance must be a finite number".to_string(),
            ));
        }
        require_non_negative(daily_burn_rate, "daily_burn_rate")?;
        if !spending_adjustment_pct.is_finite() || spending_adjustment_pct < -100.0 {
            return Err(Error::Validation(
                "spending_adjustment_pct must be at least -100".to_string(),
            ));
        }
        require_non_negative(reference_income, "reference_income")?;
        Ok(Self {
            current_balance,
            adjusted_daily_rate: daily_burn_rate * (1.0 + spending_adjustment_pct / 100.0),
            days_remaining,
            reference_income,
        })
    }

    pub fn adjusted_daily_rate(&self) -> f64 {
        self.adjusted_daily_rate
    }

    pub fn point_at(&self, day: u32) -> TrajectoryPoint {
        let projected_balance = self.current_balance - self.adjusted_daily_rate * f64::from(day);
        TrajectoryPoint {
            day,
            projected_balance,
            status: self.status_of(projected_balance),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = TrajectoryPoint> + '_ {
        (0..=self.days_remaining).map(|day| self.point_at(day))
    }

    /// `None` means the balance never reaches zero at the adjusted rate.
    pub fn days_until_zero(&self) -> Option<f64> {
        if self.adjusted_daily_rate <= 0.0 {
            return None;
        }
        Some((self.current_balance / self.adjusted_daily_rate).max(0.0))
    }

    pub fn outlook(&self) -> BalanceOutlook {
        let month_end_balance = self.point_at(self.days_remaining).projected_balance;
        let shortfall = (-month_end_balance).max(0.0);
        BalanceOutlook {
            days_until_zero: self.days_until_zero(),
            month_end_balance,
            shortfall,
            daily_cut_needed: safe_divide(shortfall, f64::from(self.days_remaining), 0.0),
            points: self.points().collect(),
        }
    }

    fn status_of(&self, balance: f64) -> TrajectoryStatus {
        if balance <= 0.0 {
            TrajectoryStatus::Danger
        } else if balance <= self.reference_income * 0.10 {
            TrajectoryStatus::Warning
        } else {
            TrajectoryStatus::Safe
        }
    }
}

pub fn grade_for_score(score: f64) -> Grade {
    if score >= 90.0 {
        Grade::APlus
    } else if score >= 80.0 {
        Grade::A
    } else if score >= 70.0 {
        Grade::BPlus
    } else if score >= 60.0 {
        Grade::B
    } else if score >= 50.0 {
        Grade::CPlus
    } else if score >= 40.0 {
        Grade::C
    } else {
        Grade::D
    }
}

/// Scores income predictability from source type and month-to-month
/// variance, then derives borrowing and negotiation guidance from the
/// score.
pub fn stability_report(
    monthly_income: f64,
    income_type: IncomeType,
    income_variance_pct: f64,
    emergency_fund_saved: f64,
) -> Result<StabilityReport> {
    require_non_negative(monthly_income, "monthly_income")?;
    if !income_variance_pct.is_finite() || !(0.0..=100.0).contains(&income_variance_pct) {
        return Err(Error::Validation(
            "income_variance_pct must be between 0 and 100".to_string(),
        ));
    }
    require_non_negative(emergency_fund_saved, "emergency_fund_saved")?;

    let base = match income_type {
        IncomeType::Salary => 85.0,
        IncomeType::Freelance => 45.0,
        IncomeType::Mixed => 65.0,
        IncomeType::BusinessOwner => 55.0,
    };
    let stability_score = (base - income_variance_pct * 0.5).clamp(0.0, 100.0);
    let loan_multiplier = if stability_score >= 70.0 {
        48.0
    } else if stability_score >= 50.0 {
        24.0
    } else {
        12.0
    };
    let (negotiation_power, demand_factor) = if stability_score >= 75.0 {
        (NegotiationPower::High, 1.15)
    } else if stability_score >= 50.0 {
        (NegotiationPower::Medium, 1.10)
    } else {
        (NegotiationPower::Low, 1.05)
    };
    let gig_fund_target = monthly_income * 6.0;
    let gig_fund_progress_pct = safe_divide(emergency_fund_saved, gig_fund_target, 0.0) * 100.0;
    Ok(StabilityReport {
        stability_score,
        grade: grade_for_score(stability_score),
        max_safe_loan: monthly_income * loan_multiplier,
        negotiation_power,
        safe_salary_demand: monthly_income * demand_factor,
        gig_fund_target,
        gig_fund_progress_pct,
        gig_ready: gig_fund_progress_pct >= 100.0,
    })
}

/// Compares spending growth against income growth. A spending rate above
/// the income rate opens a deficit; at `deficit` percent a year the gap
/// swallows the full income in `100 / deficit` years, reported up to a
/// ten-year ceiling.
pub fn lifestyle_inflation(
    monthly_income: f64,
    income_growth_pct: f64,
    spending_growth_pct: f64,
) -> Result<InflationReport> {
    require_non_negative(monthly_income, "monthly_income")?;
    for (name, rate) in [
        ("income_growth_pct", income_growth_pct),
        ("spending_growth_pct", spending_growth_pct),
    ] {
        if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
            return Err(Error::Validation(format!(
                "{name} must be between 0 and 100"
            )));
        }
    }

    let zone = if spending_growth_pct > 15.0 {
        SpendingZone::Crash
    } else if spending_growth_pct > 10.0 {
        SpendingZone::Danger
    } else if spending_growth_pct > 5.0 {
        SpendingZone::Caution
    } else {
        SpendingZone::Safe
    };
    let current_fun_budget = monthly_income * 0.3;

    if spending_growth_pct <= income_growth_pct {
        return Ok(InflationReport {
            at_risk: false,
            deficit_rate: 0.0,
            years_to_broke: None,
            zone,
            current_fun_budget,
            suggested_fun_cap: None,
        });
    }

    let deficit_rate = spending_growth_pct - income_growth_pct;
    Ok(InflationReport {
        at_risk: true,
        deficit_rate,
        years_to_broke: Some((100.0 / deficit_rate).min(10.0)),
        zone,
        current_fun_budget,
        suggested_fun_cap: Some((current_fun_budget * (1.0 - deficit_rate / 100.0)).max(0.0)),
    })
}

fn require_non_negative(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(format!(
            "{name} must be a non-negative number"
        )));
    }
    Ok(())
}

fn require_age(age: u32) -> Result<()> {
    if !(18..=99).contains(&age) {
        return Err(Error::Validation(
            "age must be between 18 and 99".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::LifeEventKind;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_tol(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} within {tolerance}, got {actual}"
        );
    }

    fn sample_inputs() -> PlanInputs {
        PlanInputs {
            monthly_income: 5000.0,
            age: 25,
            income_type: IncomeType::Salary,
            risk_tolerance: RiskTolerance::Moderate,
            budget_persona: None,
            lifestyle_mode: None,
            plan_month: 6,
            debt_principal: 10_000.0,
            debt_annual_rate_pct: 18.0,
            debt_monthly_payment: 300.0,
            debt_extra_payment: 0.0,
            investment_monthly_contribution: 500.0,
            annual_return_pct: 7.0,
            current_savings: 8000.0,
            emergency_target_months: 6.0,
            emergency_fund_saved: 2000.0,
            goal_target_amount: 5000.0,
            goal_already_saved: 0.0,
            goal_timeline_months: 12,
            current_balance: 2500.0,
            daily_burn_rate: 120.0,
            days_remaining: 30,
            spending_adjustment_pct: 0.0,
            income_variance_pct: 15.0,
            income_growth_pct: 5.0,
            spending_growth_pct: 15.0,
            life_events: Vec::new(),
        }
    }

    fn split_sum(split: BudgetSplit) -> f64 {
        split.needs_pct + split.wants_pct + split.savings_pct
    }

    #[test]
    fn tier_split_follows_income_boundaries() {
        assert_approx(tier_split(1500.0).needs_pct, 60.0);
        assert_approx(tier_split(1999.99).needs_pct, 60.0);
        assert_approx(tier_split(2000.0).needs_pct, 55.0);
        assert_approx(tier_split(4000.0).needs_pct, 50.0);
        assert_approx(tier_split(5999.99).needs_pct, 50.0);
        assert_approx(tier_split(6000.0).needs_pct, 45.0);
        assert_approx(tier_split(25_000.0).wants_pct, 35.0);
    }

    #[test]
    fn every_built_in_split_sums_to_100() {
        for income in [0.0, 1999.0, 2000.0, 3999.0, 4000.0, 5999.0, 6000.0, 50_000.0] {
            assert_approx(split_sum(tier_split(income)), 100.0);
        }
        for persona in [
            BudgetPersona::Student,
            BudgetPersona::Balanced,
            BudgetPersona::Slay,
            BudgetPersona::Emergency,
            BudgetPersona::Holiday,
            BudgetPersona::WealthBuilder,
        ] {
            assert_approx(split_sum(persona_split(persona)), 100.0);
        }
        for mode in [
            LifestyleMode::Survival,
            LifestyleMode::Comfort,
            LifestyleMode::Slay,
        ] {
            assert_approx(split_sum(lifestyle_split(mode)), 100.0);
        }
    }

    #[test]
    fn persona_table_spot_checks() {
        let student = persona_split(BudgetPersona::Student);
        assert_approx(student.needs_pct, 70.0);
        assert_approx(student.savings_pct, 10.0);
        let wealth = persona_split(BudgetPersona::WealthBuilder);
        assert_approx(wealth.savings_pct, 40.0);
    }

    #[test]
    fn seasonal_suggestion_peaks_in_winter() {
        assert_eq!(
            suggested_persona(11).expect("valid month"),
            Some(BudgetPersona::Holiday)
        );
        assert_eq!(
            suggested_persona(12).expect("valid month"),
            Some(BudgetPersona::Holiday)
        );
        assert_eq!(
            suggested_persona(1).expect("valid month"),
            Some(BudgetPersona::WealthBuilder)
        );
        assert_eq!(suggested_persona(6).expect("valid month"), None);
    }

    #[test]
    fn seasonal_suggestion_rejects_invalid_months() {
        assert!(matches!(suggested_persona(0), Err(Error::Validation(_))));
        assert!(matches!(suggested_persona(13), Err(Error::Validation(_))));
    }

    #[test]
    fn build_budget_prefers_persona_over_lifestyle_and_tier() {
        let breakdown = build_budget(
            5000.0,
            Some(BudgetPersona::Student),
            Some(LifestyleMode::Slay),
            6,
            0.0,
        )
        .expect("must build");
        assert_approx(breakdown.split.needs_pct, 70.0);

        let breakdown =
            build_budget(5000.0, None, Some(LifestyleMode::Survival), 6, 0.0).expect("must build");
        assert_approx(breakdown.split.needs_pct, 70.0);
        assert_approx(breakdown.split.wants_pct, 15.0);

        let breakdown = build_budget(5000.0, None, None, 6, 0.0).expect("must build");
        assert_approx(breakdown.split.needs_pct, 50.0);
    }

    #[test]
    fn build_budget_nets_debt_payments_out_of_savings() {
        let breakdown = build_budget(5000.0, None, None, 6, 300.0).expect("must build");
        assert_approx(breakdown.amounts.savings_amount, 1000.0);
        assert_approx(breakdown.adjusted_savings, 700.0);
        assert_approx(breakdown.debt_payoff_extra, 300.0);

        let swamped = build_budget(5000.0, None, None, 6, 1500.0).expect("must build");
        assert_approx(swamped.adjusted_savings, 0.0);
        assert_approx(swamped.debt_payoff_extra, 1000.0);
    }

    #[test]
    fn build_budget_rejects_negative_debt_payment() {
        let err = build_budget(5000.0, None, None, 6, -1.0)
            .expect_err("negative payment must be rejected");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn debt_payoff_at_zero_rate_is_simple_division() {
        let payoff = debt_payoff(1000.0, 0.0, 100.0, 0.0).expect("must solve");
        assert_approx(payoff.months_to_payoff, 10.0);
        assert_approx(payoff.total_interest, 0.0);
        assert_approx(payoff.total_paid, 1000.0);
        assert_approx(payoff.freed_monthly_payment, 100.0);
    }

    #[test]
    fn debt_payoff_with_interest_stays_finite_and_positive() {
        let payoff = debt_payoff(5000.0, 18.0, 200.0, 0.0).expect("must solve");
        assert!(payoff.months_to_payoff.is_finite());
        assert!(payoff.months_to_payoff > 0.0);
        assert!(payoff.total_interest > 0.0);
        assert_approx(payoff.total_paid, 5000.0 + payoff.total_interest);
    }

    #[test]
    fn debt_payoff_shrinks_with_bigger_payments() {
        let base = debt_payoff(5000.0, 18.0, 200.0, 0.0).expect("must solve");
        let faster = debt_payoff(5000.0, 18.0, 250.0, 0.0).expect("must solve");
        assert!(faster.months_to_payoff < base.months_to_payoff);
        assert!(faster.total_interest < base.total_interest);

        let with_extra = debt_payoff(5000.0, 18.0, 200.0, 50.0).expect("must solve");
        assert_approx(with_extra.months_to_payoff, faster.months_to_payoff);
    }

    #[test]
    fn debt_payoff_rejects_payment_below_interest() {
        let err = debt_payoff(5000.0, 18.0, 50.0, 0.0).expect_err("payment cannot amortize");
        assert!(matches!(err, Error::Infeasible(_)));
    }

    #[test]
    fn debt_payoff_with_no_balance_is_already_done() {
        let payoff = debt_payoff(0.0, 18.0, 0.0, 0.0).expect("must solve");
        assert_approx(payoff.months_to_payoff, 0.0);
        assert_approx(payoff.total_interest, 0.0);
    }

    #[test]
    fn debt_payoff_rejects_balance_without_payment() {
        let err = debt_payoff(5000.0, 18.0, 0.0, 0.0).expect_err("no payment must be infeasible");
        assert!(matches!(err, Error::Infeasible(_)));
    }

    #[test]
    fn debt_payoff_rejects_out_of_range_rates() {
        assert!(matches!(
            debt_payoff(5000.0, 100.0, 500.0, 0.0),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            debt_payoff(5000.0, -1.0, 500.0, 0.0),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn debt_payoff_closed_form_matches_known_case() {
        // 10k at 12% with 300/month: r = 0.01, months = -ln(2/3)/ln(1.01).
        let payoff = debt_payoff(10_000.0, 12.0, 300.0, 0.0).expect("must solve");
        assert_approx_tol(payoff.months_to_payoff, 40.7489, 1e-3);
        assert_approx_tol(payoff.total_interest, 300.0 * 40.7489 - 10_000.0, 0.5);
    }

    #[test]
    fn growth_projection_covers_each_horizon() {
        let horizons = project_growth(500.0, 7.0, &DEFAULT_HORIZONS).expect("must project");
        assert_eq!(horizons.len(), 3);
        assert_eq!(horizons[0].years, 10);
        assert!(horizons[0].future_value > horizons[0].total_contributions);
        assert!(horizons[2].future_value > horizons[1].future_value);
        assert_approx(horizons[1].total_contributions, 500.0 * 240.0);
        assert_approx(
            horizons[1].growth,
            horizons[1].future_value - horizons[1].total_contributions,
        );
    }

    #[test]
    fn growth_projection_rejects_zero_year_horizon() {
        let err = project_growth(500.0, 7.0, &[0]).expect_err("zero horizon must be rejected");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn milestones_cover_only_future_ages() {
        let all = net_worth_milestones(25, 60_000.0, 8000.0, 700.0, 0.0, 7.0).expect("must check");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].target_age, 30);

        let last = net_worth_milestones(38, 60_000.0, 8000.0, 700.0, 0.0, 7.0).expect("must check");
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].target_age, 40);

        let none = net_worth_milestones(45, 60_000.0, 8000.0, 700.0, 0.0, 7.0).expect("must check");
        assert!(none.is_empty());
    }

    #[test]
    fn milestones_classify_against_income_multiples() {
        // Zero return keeps the arithmetic exact: 20k + 1000*12*5 + 0 = 80k.
        let checks =
            net_worth_milestones(25, 60_000.0, 20_000.0, 1000.0, 0.0, 0.0).expect("must check");
        let at_30 = &checks[0];
        assert_approx(at_30.target_net_worth, 60_000.0);
        assert_approx(at_30.projected_net_worth, 80_000.0);
        assert_eq!(at_30.standing, MilestoneStanding::OnTrack);

        // At 35 the bar is 3x income: 20k + 1000*12*10 = 140k < 180k.
        let at_35 = &checks[1];
        assert_approx(at_35.target_net_worth, 180_000.0);
        assert_approx(at_35.projected_net_worth, 140_000.0);
        assert_eq!(at_35.standing, MilestoneStanding::NeedsBoost);
    }

    #[test]
    fn milestones_compound_the_investing_stream() {
        let flat = net_worth_milestones(25, 60_000.0, 0.0, 0.0, 500.0, 0.0).expect("must check");
        let compounded =
            net_worth_milestones(25, 60_000.0, 0.0, 0.0, 500.0, 7.0).expect("must check");
        assert!(compounded[0].projected_net_worth > flat[0].projected_net_worth);
    }

    #[test]
    fn allocation_matches_known_profiles() {
        let aggressive = asset_allocation(25, RiskTolerance::Aggressive).expect("must allocate");
        assert_approx(aggressive.stock_pct, 90.0);
        assert_approx(aggressive.bond_pct, 10.0);
        assert_approx(aggressive.cash_pct, 0.0);

        let conservative = asset_allocation(30, RiskTolerance::Conservative).expect("must allocate");
        assert_approx(conservative.stock_pct, 30.0);
        assert_approx(conservative.bond_pct, 50.0);
        assert_approx(conservative.cash_pct, 20.0);

        let moderate = asset_allocation(40, RiskTolerance::Moderate).expect("must allocate");
        assert_approx(moderate.stock_pct, 50.0);
        assert_approx(moderate.bond_pct, 40.0);
        assert_approx(moderate.cash_pct, 10.0);
    }

    #[test]
    fn allocation_rejects_out_of_range_ages() {
        assert!(matches!(
            asset_allocation(17, RiskTolerance::Moderate),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            asset_allocation(100, RiskTolerance::Moderate),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn emergency_fund_reports_progress_toward_target() {
        let plan = emergency_fund_plan(2500.0, 6.0, 2000.0, 350.0).expect("must plan");
        assert_approx(plan.target_amount, 15_000.0);
        assert!(!plan.funded);
        assert_approx_tol(plan.progress_pct, 13.3333, 1e-3);
        assert_approx(plan.months_to_target, 13_000.0 / 350.0);
    }

    #[test]
    fn emergency_fund_already_met_needs_no_time() {
        let plan = emergency_fund_plan(2000.0, 3.0, 7000.0, 0.0).expect("must plan");
        assert!(plan.funded);
        assert_approx(plan.months_to_target, 0.0);
        assert!(plan.progress_pct > 100.0);
    }

    #[test]
    fn emergency_fund_unmet_without_contribution_is_infeasible() {
        let err = emergency_fund_plan(2000.0, 6.0, 100.0, 0.0)
            .expect_err("no contribution must be infeasible");
        assert!(matches!(err, Error::Infeasible(_)));
    }

    #[test]
    fn emergency_fund_rejects_non_positive_target_months() {
        let err = emergency_fund_plan(2000.0, 0.0, 100.0, 50.0)
            .expect_err("zero months must be rejected");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn goal_on_budget_is_feasible_without_alternatives() {
        let goal = goal_feasibility(1200.0, 0.0, 12, 100.0).expect("must assess");
        assert_approx(goal.required_monthly, 100.0);
        assert!(goal.feasible);
        assert!(goal.alternatives.is_none());
    }

    #[test]
    fn goal_over_budget_offers_both_fallbacks() {
        let goal = goal_feasibility(1200.0, 0.0, 12, 50.0).expect("must assess");
        assert!(!goal.feasible);
        let alternatives = goal.alternatives.expect("infeasible goal carries fallbacks");
        assert_approx(alternatives.extended_timeline_months, 24.0);
        assert_approx(alternatives.reduced_target, 600.0);
    }

    #[test]
    fn goal_without_any_budget_is_infeasible() {
        let err = goal_feasibility(1200.0, 0.0, 12, 0.0).expect_err("no budget means no plan");
        assert!(matches!(err, Error::Infeasible(_)));
    }

    #[test]
    fn goal_progress_tracks_saved_share() {
        let goal = goal_feasibility(2000.0, 500.0, 10, 500.0).expect("must assess");
        assert_approx(goal.progress_pct, 25.0);
    }

    #[test]
    fn goal_rejects_saved_beyond_target() {
        let err = goal_feasibility(1000.0, 1500.0, 12, 100.0).expect_err("must reject");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn goal_rejects_zero_timeline() {
        let err = goal_feasibility(1000.0, 0.0, 0, 100.0).expect_err("must reject");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn trajectory_is_the_same_wherever_you_sample_it() {
        let trajectory = BalanceTrajectory::new(2500.0, 125.0, 30, 0.0, 5000.0).expect("must build");
        let first = trajectory.point_at(10);
        let again = trajectory.point_at(10);
        assert_approx(first.projected_balance, again.projected_balance);
        assert_eq!(first.status, again.status);

        let from_iter = trajectory
            .points()
            .nth(10)
            .expect("day 10 is inside the window");
        assert_approx(from_iter.projected_balance, first.projected_balance);
        assert_approx(first.projected_balance, 2500.0 - 1250.0);
    }

    #[test]
    fn trajectory_statuses_step_down_with_the_balance() {
        let trajectory = BalanceTrajectory::new(600.0, 100.0, 30, 0.0, 5000.0).expect("must build");
        assert_eq!(trajectory.point_at(0).status, TrajectoryStatus::Safe);
        // Day 2 leaves 400, inside the 10% income band.
        assert_eq!(trajectory.point_at(2).status, TrajectoryStatus::Warning);
        assert_eq!(trajectory.point_at(6).status, TrajectoryStatus::Danger);
    }

    #[test]
    fn trajectory_days_until_zero_scales_with_the_adjustment() {
        let base = BalanceTrajectory::new(2500.0, 125.0, 30, 0.0, 5000.0).expect("must build");
        assert_approx(base.days_until_zero().expect("burn rate is positive"), 20.0);

        let halved = BalanceTrajectory::new(2500.0, 125.0, 30, -50.0, 5000.0).expect("must build");
        assert_approx(halved.days_until_zero().expect("burn rate is positive"), 40.0);

        let frozen = BalanceTrajectory::new(2500.0, 125.0, 30, -100.0, 5000.0).expect("must build");
        assert!(frozen.days_until_zero().is_none());

        let idle = BalanceTrajectory::new(2500.0, 0.0, 30, 25.0, 5000.0).expect("must build");
        assert!(idle.days_until_zero().is_none());
    }

    #[test]
    fn trajectory_outlook_names_the_shortfall_and_the_cut() {
        let trajectory = BalanceTrajectory::new(1000.0, 100.0, 30, 0.0, 5000.0).expect("must build");
        let outlook = trajectory.outlook();
        assert_approx(outlook.month_end_balance, -2000.0);
        assert_approx(outlook.shortfall, 2000.0);
        assert_approx_tol(outlook.daily_cut_needed, 66.6667, 1e-3);
        assert_eq!(outlook.points.len(), 31);

        let covered = BalanceTrajectory::new(5000.0, 100.0, 30, 0.0, 5000.0)
            .expect("must build")
            .outlook();
        assert_approx(covered.shortfall, 0.0);
        assert_approx(covered.daily_cut_needed, 0.0);
    }

    #[test]
    fn trajectory_rejects_cuts_below_minus_100() {
        let err = BalanceTrajectory::new(1000.0, 100.0, 30, -101.0, 5000.0)
            .expect_err("adjustment below -100 must be rejected");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn grades_follow_score_boundaries() {
        assert_eq!(grade_for_score(90.0), Grade::APlus);
        assert_eq!(grade_for_score(89.99), Grade::A);
        assert_eq!(grade_for_score(80.0), Grade::A);
        assert_eq!(grade_for_score(69.99), Grade::B);
        assert_eq!(grade_for_score(50.0), Grade::CPlus);
        assert_eq!(grade_for_score(39.99), Grade::D);
        assert_eq!(grade_for_score(0.0), Grade::D);
    }

    #[test]
    fn stability_score_starts_from_the_income_type() {
        let salary = stability_report(5000.0, IncomeType::Salary, 0.0, 0.0).expect("must score");
        assert_approx(salary.stability_score, 85.0);
        assert_eq!(salary.grade, Grade::A);

        let freelance =
            stability_report(5000.0, IncomeType::Freelance, 0.0, 0.0).expect("must score");
        assert_approx(freelance.stability_score, 45.0);
        assert_eq!(freelance.grade, Grade::C);

        let mixed = stability_report(5000.0, IncomeType::Mixed, 0.0, 0.0).expect("must score");
        assert_approx(mixed.stability_score, 65.0);

        let owner =
            stability_report(5000.0, IncomeType::BusinessOwner, 0.0, 0.0).expect("must score");
        assert_approx(owner.stability_score, 55.0);
    }

    #[test]
    fn variance_drags_the_score_down_to_zero_at_worst() {
        let report = stability_report(5000.0, IncomeType::Salary, 15.0, 0.0).expect("must score");
        assert_approx(report.stability_score, 77.5);
        assert_eq!(report.grade, Grade::BPlus);

        let floored =
            stability_report(5000.0, IncomeType::Freelance, 100.0, 0.0).expect("must score");
        assert_approx(floored.stability_score, 0.0);
        assert_eq!(floored.grade, Grade::D);
    }

    #[test]
    fn loan_ceiling_steps_with_the_score() {
        let strong = stability_report(5000.0, IncomeType::Salary, 15.0, 0.0).expect("must score");
        assert_approx(strong.max_safe_loan, 240_000.0);

        let middle = stability_report(5000.0, IncomeType::Mixed, 10.0, 0.0).expect("must score");
        assert_approx(middle.max_safe_loan, 120_000.0);

        let weak = stability_report(5000.0, IncomeType::Freelance, 20.0, 0.0).expect("must score");
        assert_approx(weak.max_safe_loan, 60_000.0);
    }

    #[test]
    fn negotiation_power_sets_the_salary_demand() {
        let high = stability_report(5000.0, IncomeType::Salary, 15.0, 0.0).expect("must score");
        assert_eq!(high.negotiation_power, NegotiationPower::High);
        assert_approx(high.safe_salary_demand, 5750.0);

        let medium = stability_report(5000.0, IncomeType::Mixed, 0.0, 0.0).expect("must score");
        assert_eq!(medium.negotiation_power, NegotiationPower::Medium);
        assert_approx(medium.safe_salary_demand, 5500.0);

        let low = stability_report(5000.0, IncomeType::Freelance, 20.0, 0.0).expect("must score");
        assert_eq!(low.negotiation_power, NegotiationPower::Low);
        assert_approx(low.safe_salary_demand, 5250.0);
    }

    #[test]
    fn gig_readiness_asks_for_six_months_of_income() {
        let not_ready =
            stability_report(5000.0, IncomeType::Salary, 0.0, 15_000.0).expect("must score");
        assert_approx(not_ready.gig_fund_target, 30_000.0);
        assert_approx(not_ready.gig_fund_progress_pct, 50.0);
        assert!(!not_ready.gig_ready);

        let ready = stability_report(5000.0, IncomeType::Salary, 0.0, 30_000.0).expect("must score");
        assert!(ready.gig_ready);
    }

    #[test]
    fn stability_rejects_variance_outside_0_to_100() {
        let err = stability_report(5000.0, IncomeType::Salary, 101.0, 0.0)
            .expect_err("variance above 100 must be rejected");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn inflation_deficit_sets_the_broke_clock() {
        let report = lifestyle_inflation(5000.0, 5.0, 30.0).expect("must analyze");
        assert!(report.at_risk);
        assert_approx(report.deficit_rate, 25.0);
        assert_approx(report.years_to_broke.expect("deficit sets a clock"), 4.0);
        assert_eq!(report.zone, SpendingZone::Crash);
        assert_approx(report.current_fun_budget, 1500.0);
        assert_approx(
            report.suggested_fun_cap.expect("at risk caps fun spending"),
            1125.0,
        );
    }

    #[test]
    fn inflation_clock_is_capped_at_ten_years() {
        let report = lifestyle_inflation(5000.0, 5.0, 6.0).expect("must analyze");
        assert_approx(report.deficit_rate, 1.0);
        assert_approx(report.years_to_broke.expect("deficit sets a clock"), 10.0);
    }

    #[test]
    fn matched_growth_is_reported_not_errored() {
        let report = lifestyle_inflation(5000.0, 10.0, 10.0).expect("must analyze");
        assert!(!report.at_risk);
        assert!(report.years_to_broke.is_none());
        assert!(report.suggested_fun_cap.is_none());
        assert_approx(report.deficit_rate, 0.0);
    }

    #[test]
    fn spending_zones_follow_the_growth_rate_alone() {
        assert_eq!(
            lifestyle_inflation(5000.0, 50.0, 3.0)
                .expect("must analyze")
                .zone,
            SpendingZone::Safe
        );
        assert_eq!(
            lifestyle_inflation(5000.0, 50.0, 8.0)
                .expect("must analyze")
                .zone,
            SpendingZone::Caution
        );
        assert_eq!(
            lifestyle_inflation(5000.0, 50.0, 12.0)
                .expect("must analyze")
                .zone,
            SpendingZone::Danger
        );
        assert_eq!(
            lifestyle_inflation(5000.0, 50.0, 20.0)
                .expect("must analyze")
                .zone,
            SpendingZone::Crash
        );
    }

    #[test]
    fn run_plan_wires_the_sections_together() {
        let result = run_plan(&sample_inputs()).expect("defaults must produce a plan");

        assert_approx(result.budget.amounts.needs_amount, 2500.0);
        assert_approx(result.budget.adjusted_savings, 700.0);
        assert_eq!(result.budget.suggested_persona, None);

        assert_approx_tol(result.debt.months_to_payoff, 46.56, 0.01);

        assert_approx(result.emergency_fund.target_amount, 15_000.0);
        assert_approx(result.emergency_fund.months_to_target, 13_000.0 / 350.0);

        // Emergency catch-up (13k over 12 months) swallows the whole 700.
        assert_approx(result.investment.available_for_investment, 0.0);
        assert_eq!(result.investment.milestones.len(), 3);
        assert_eq!(result.investment.horizons.len(), 3);

        assert_approx(result.goal.available_budget, 210.0);
        assert!(!result.goal.feasible);
        assert!(result.goal.alternatives.is_some());

        assert_approx(
            result.balance.days_until_zero.expect("burn rate is positive"),
            2500.0 / 120.0,
        );
        assert_approx(result.balance.shortfall, 1100.0);

        assert_approx(result.stability.stability_score, 77.5);
        assert_eq!(result.stability.grade, Grade::BPlus);

        assert!(result.inflation.at_risk);
        assert_approx(result.inflation.deficit_rate, 10.0);

        assert_eq!(result.what_if.event_count, 0);
        assert_approx(result.what_if.success_rate, 92.0);
    }

    #[test]
    fn run_plan_fails_whole_when_one_section_fails() {
        let mut inputs = sample_inputs();
        inputs.debt_monthly_payment = 0.0;
        inputs.debt_extra_payment = 0.0;
        let err = run_plan(&inputs).expect_err("unpayable debt must abort the plan");
        assert!(matches!(err, Error::Infeasible(_)));
    }

    #[test]
    fn run_plan_carries_life_events_into_the_what_if() {
        let mut inputs = sample_inputs();
        inputs.life_events = vec![LifeEventKind::GetMarried, LifeEventKind::BuyHouse];
        let result = run_plan(&inputs).expect("must produce a plan");
        assert_eq!(result.what_if.event_count, 2);
        assert_approx(result.what_if.totals.expense_delta, 0.75);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn allocation_always_sums_to_100(age in 18u32..=99) {
            for risk in [
                RiskTolerance::Conservative,
                RiskTolerance::Moderate,
                RiskTolerance::Aggressive,
            ] {
                let allocation = asset_allocation(age, risk).expect("must allocate");
                prop_assert!(allocation.stock_pct >= 0.0);
                prop_assert!(allocation.bond_pct >= 0.0);
                prop_assert!(allocation.cash_pct >= 0.0);
                let sum = allocation.stock_pct + allocation.bond_pct + allocation.cash_pct;
                prop_assert!((sum - 100.0).abs() < 1e-9);
            }
        }

        #[test]
        fn budget_amounts_sum_to_income(income_cents in 0i64..200_000_000) {
            let income = income_cents as f64 / 100.0;
            let breakdown = build_budget(income, None, None, 6, 0.0).expect("must build");
            let total = breakdown.amounts.needs_amount
                + breakdown.amounts.wants_amount
                + breakdown.amounts.savings_amount;
            prop_assert!((total - income).abs() < 1e-6);
        }

        #[test]
        fn paying_more_never_takes_longer(
            principal_cents in 100_00i64..50_000_00,
            rate_tenths in 1i32..999,
            bump_cents in 1i64..500_00,
        ) {
            let principal = principal_cents as f64 / 100.0;
            let rate = f64::from(rate_tenths) / 10.0;
            // Keep the base payment above the interest floor.
            let payment = principal * rate / 100.0 / 12.0 + 50.0;
            let bump = bump_cents as f64 / 100.0;
            let base = debt_payoff(principal, rate, payment, 0.0).expect("must solve");
            let faster = debt_payoff(principal, rate, payment + bump, 0.0).expect("must solve");
            prop_assert!(faster.months_to_payoff < base.months_to_payoff);
            prop_assert!(faster.total_interest <= base.total_interest);
        }
    }
}
