use serde::Serialize;

use super::events::{LifeEventKind, WhatIfOutcome};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IncomeType {
    Salary,
    Freelance,
    Mixed,
    BusinessOwner,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetPersona {
    Student,
    Balanced,
    Slay,
    Emergency,
    Holiday,
    WealthBuilder,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LifestyleMode {
    Survival,
    Comfort,
    Slay,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrajectoryStatus {
    Safe,
    Warning,
    Danger,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MilestoneStanding {
    OnTrack,
    NeedsBoost,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NegotiationPower {
    High,
    Medium,
    Low,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpendingZone {
    Safe,
    Caution,
    Danger,
    Crash,
}

#[derive(Debug, Clone)]
pub struct PlanInputs {
    pub monthly_income: f64,
    pub age: u32,
    pub income_type: IncomeType,
    pub risk_tolerance: RiskTolerance,
    pub budget_persona: Option<BudgetPersona>,
    pub lifestyle_mode: Option<LifestyleMode>,
    pub plan_month: u32,
    pub debt_principal: f64,
    pub debt_annual_rate_pct: f64,
    pub debt_monthly_payment: f64,
    pub debt_extra_payment: f64,
    pub investment_monthly_contribution: f64,
    pub annual_return_pct: f64,
    pub current_savings: f64,
    pub emergency_target_months: f64,
    pub emergency_fund_saved: f64,
    pub goal_target_amount: f64,
    pub goal_already_saved: f64,
    pub goal_timeline_months: u32,
    pub current_balance: f64,
    pub daily_burn_rate: f64,
    pub days_remaining: u32,
    pub spending_adjustment_pct: f64,
    pub income_variance_pct: f64,
    pub income_growth_pct: f64,
    pub spending_growth_pct: f64,
    pub life_events: Vec<LifeEventKind>,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSplit {
    pub needs_pct: f64,
    pub wants_pct: f64,
    pub savings_pct: f64,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitAmounts {
    pub needs_amount: f64,
    pub wants_amount: f64,
    pub savings_amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub split: BudgetSplit,
    pub amounts: SplitAmounts,
    pub adjusted_savings: f64,
    pub debt_payoff_extra: f64,
    pub suggested_persona: Option<BudgetPersona>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub months_to_payoff: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub freed_monthly_payment: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonProjection {
    pub years: u32,
    pub future_value: f64,
    pub total_contributions: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneCheck {
    pub target_age: u32,
    pub target_net_worth: f64,
    pub projected_net_worth: f64,
    pub standing: MilestoneStanding,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub stock_pct: f64,
    pub bond_pct: f64,
    pub cash_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOutlook {
    pub monthly_contribution: f64,
    pub available_for_investment: f64,
    pub horizons: Vec<HorizonProjection>,
    pub allocation: AssetAllocation,
    pub milestones: Vec<MilestoneCheck>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFundPlan {
    pub target_amount: f64,
    pub progress_pct: f64,
    pub months_to_target: f64,
    pub funded: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAlternatives {
    pub extended_timeline_months: f64,
    pub reduced_target: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAssessment {
    pub required_monthly: f64,
    pub available_budget: f64,
    pub progress_pct: f64,
    pub feasible: bool,
    pub alternatives: Option<GoalAlternatives>,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub day: u32,
    pub projected_balance: f64,
    pub status: TrajectoryStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceOutlook {
    pub days_until_zero: Option<f64>,
    pub month_end_balance: f64,
    pub shortfall: f64,
    pub daily_cut_needed: f64,
    pub points: Vec<TrajectoryPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityReport {
    pub stability_score: f64,
    pub grade: Grade,
    pub max_safe_loan: f64,
    pub negotiation_power: NegotiationPower,
    pub safe_salary_demand: f64,
    pub gig_fund_target: f64,
    pub gig_fund_progress_pct: f64,
    pub gig_ready: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationReport {
    pub at_risk: bool,
    pub deficit_rate: f64,
    pub years_to_broke: Option<f64>,
    pub zone: SpendingZone,
    pub current_fun_budget: f64,
    pub suggested_fun_cap: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct PlanResult {
    pub budget: BudgetBreakdown,
    pub debt: DebtPayoff,
    pub investment: InvestmentOutlook,
    pub emergency_fund: EmergencyFundPlan,
    pub goal: GoalAssessment,
    pub balance: BalanceOutlook,
    pub stability: StabilityReport,
    pub inflation: InflationReport,
    pub what_if: WhatIfOutcome,
}
