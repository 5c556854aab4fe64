use serde::Serialize;

use super::error::{Error, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeEventKind {
    GetMarried,
    HaveBaby,
    BuyHouse,
    JobLoss,
    GetPromoted,
    BackToSchool,
    Recession,
    BuyCar,
    YearOfTravel,
    MedicalEmergency,
}

/// Deltas are fractions of the baseline, so 0.40 reads as +40%.
#[derive(Copy, Clone, Debug)]
pub struct LifeEvent {
    pub expense_delta: f64,
    pub stability_delta: f64,
    pub travel_delta: f64,
    pub timeline: &'static str,
}

impl LifeEventKind {
    pub const ALL: [LifeEventKind; 10] = [
        LifeEventKind::GetMarried,
        LifeEventKind::HaveBaby,
        LifeEventKind::BuyHouse,
        LifeEventKind::JobLoss,
        LifeEventKind::GetPromoted,
        LifeEventKind::BackToSchool,
        LifeEventKind::Recession,
        LifeEventKind::BuyCar,
        LifeEventKind::YearOfTravel,
        LifeEventKind::MedicalEmergency,
    ];

    pub fn profile(self) -> LifeEvent {
        match self {
            LifeEventKind::GetMarried => LifeEvent {
                expense_delta: 0.40,
                stability_delta: -0.20,
                travel_delta: 0.50,
                timeline: "2 years",
            },
            LifeEventKind::HaveBaby => LifeEvent {
                expense_delta: 0.60,
                stability_delta: -0.30,
                travel_delta: -0.40,
                timeline: "3 years",
            },
            LifeEventKind::BuyHouse => LifeEvent {
                expense_delta: 0.35,
                stability_delta: 0.10,
                travel_delta: -0.20,
                timeline: "5 years",
            },
            LifeEventKind::JobLoss => LifeEvent {
                expense_delta: -0.10,
                stability_delta: -0.80,
                travel_delta: -0.70,
                timeline: "6 months",
            },
            LifeEventKind::GetPromoted => LifeEvent {
                expense_delta: 0.15,
                stability_delta: 0.30,
                travel_delta: 0.25,
                timeline: "1 year",
            },
            LifeEventKind::BackToSchool => LifeEvent {
                expense_delta: 0.50,
                stability_delta: -0.50,
                travel_delta: -0.30,
                timeline: "2 years",
            },
            LifeEventKind::Recession => LifeEvent {
                expense_delta: -0.05,
                stability_delta: -0.40,
                travel_delta: -0.50,
                timeline: "2 years",
            },
            LifeEventKind::BuyCar => LifeEvent {
                expense_delta: 0.20,
                stability_delta: 0.0,
                travel_delta: 0.10,
                timeline: "Now",
            },
            LifeEventKind::YearOfTravel => LifeEvent {
                expense_delta: 0.80,
                stability_delta: -0.60,
                travel_delta: 1.0,
                timeline: "1 year",
            },
            LifeEventKind::MedicalEmergency => LifeEvent {
                expense_delta: 0.90,
                stability_delta: -0.30,
                travel_delta: -0.80,
                timeline: "6 months",
            },
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventImpactTotals {
    pub expense_delta: f64,
    pub stability_delta: f64,
    pub travel_delta: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfOutcome {
    pub events: Vec<LifeEventKind>,
    pub event_count: u32,
    pub totals: EventImpactTotals,
    pub adjusted_monthly_expenses: f64,
    pub monthly_surplus: f64,
    pub stability_score: f64,
    pub success_rate: f64,
    pub confidence_pct: f64,
    pub months_to_broke: Option<f64>,
    pub best_case_net_worth: f64,
    pub worst_case_net_worth: f64,
}

/// Overlays a set of life events on a baseline spending profile.
///
/// Deltas compose additively; interactions between events are not modeled.
/// The baseline assumes expenses at 70% of income, and `months_to_broke`
/// measures a three-month cash buffer against the post-event deficit.
pub fn simulate_life_events(
    events: &[LifeEventKind],
    monthly_income: f64,
) -> Result<WhatIfOutcome> {
    if !monthly_income.is_finite() || monthly_income < 0.0 {
        return Err(Error::Validation(
            "monthly_income must be a non-negative number".to_string(),
        ));
    }
    for (index, kind) in events.iter().enumerate() {
        if events[index + 1..].contains(kind) {
            return Err(Error::Validation(format!("duplicate life event: {kind:?}")));
        }
    }

    let mut totals = EventImpactTotals {
        expense_delta: 0.0,
        stability_delta: 0.0,
        travel_delta: 0.0,
    };
    for kind in events {
        let profile = kind.profile();
        totals.expense_delta += profile.expense_delta;
        totals.stability_delta += profile.stability_delta;
        totals.travel_delta += profile.travel_delta;
    }

    let event_count = events.len() as u32;
    let base_monthly_expenses = monthly_income * 0.7;
    let adjusted_monthly_expenses = base_monthly_expenses * (1.0 + totals.expense_delta);
    let monthly_surplus = monthly_income - adjusted_monthly_expenses;
    let stability_score = (70.0 + totals.stability_delta * 100.0).clamp(0.0, 100.0);
    let success_rate =
        (85.0 - 8.0 * f64::from(event_count) + stability_score / 10.0).clamp(0.0, 100.0);
    let confidence_pct = (90.0 - 12.0 * f64::from(event_count)).max(20.0);
    let months_to_broke = if monthly_surplus < 0.0 {
        Some(monthly_income * 3.0 / -monthly_surplus)
    } else {
        None
    };

    let five_year_income = monthly_income * 12.0 * 5.0;
    Ok(WhatIfOutcome {
        events: events.to_vec(),
        event_count,
        totals,
        adjusted_monthly_expenses,
        monthly_surplus,
        stability_score,
        success_rate,
        confidence_pct,
        months_to_broke,
        best_case_net_worth: five_year_income * 1.15,
        worst_case_net_worth: (five_year_income * (0.3 - totals.expense_delta)).max(0.0),
    })
}
