mod engine;
mod error;
mod events;
mod formula;
mod types;

pub use engine::{
    BalanceTrajectory, DEFAULT_HORIZONS, asset_allocation, build_budget, debt_payoff,
    emergency_fund_plan, goal_feasibility, grade_for_score, lifestyle_inflation, lifestyle_split,
    net_worth_milestones, persona_split, project_growth, run_plan, stability_report,
    suggested_persona, tier_split,
};
pub use error::{Error, Result};
pub use events::{
    EventImpactTotals, LifeEvent, LifeEventKind, WhatIfOutcome, simulate_life_events,
};
pub use formula::{SPLIT_SUM_TOLERANCE, future_value_of_annuity, percent_split, safe_divide};
pub use types::{
    AssetAllocation, BalanceOutlook, BudgetBreakdown, BudgetPersona, BudgetSplit, DebtPayoff,
    EmergencyFundPlan, GoalAlternatives, GoalAssessment, Grade, HorizonProjection, IncomeType,
    InflationReport, InvestmentOutlook, LifestyleMode, MilestoneCheck, MilestoneStanding,
    NegotiationPower, PlanInputs, PlanResult, RiskTolerance, SpendingZone, SplitAmounts,
    StabilityReport, TrajectoryPoint, TrajectoryStatus,
};
