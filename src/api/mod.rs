use axum::{
    Router,
    extract::{Json, Query, rejection::{JsonRejection, QueryRejection}},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IntoDeserializer, value::StrDeserializer},
};
use std::fmt;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    BalanceOutlook, BudgetBreakdown, BudgetPersona, DebtPayoff, EmergencyFundPlan, Error,
    GoalAssessment, IncomeType, InflationReport, InvestmentOutlook, LifeEventKind, LifestyleMode,
    PlanInputs, PlanResult, RiskTolerance, StabilityReport, WhatIfOutcome, run_plan,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliIncomeType {
    Salary,
    Freelance,
    Mixed,
    BusinessOwner,
}

impl From<CliIncomeType> for IncomeType {
    fn from(value: CliIncomeType) -> Self {
        match value {
            CliIncomeType::Salary => IncomeType::Salary,
            CliIncomeType::Freelance => IncomeType::Freelance,
            CliIncomeType::Mixed => IncomeType::Mixed,
            CliIncomeType::BusinessOwner => IncomeType::BusinessOwner,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<CliRiskTolerance> for RiskTolerance {
    fn from(value: CliRiskTolerance) -> Self {
        match value {
            CliRiskTolerance::Conservative => RiskTolerance::Conservative,
            CliRiskTolerance::Moderate => RiskTolerance::Moderate,
            CliRiskTolerance::Aggressive => RiskTolerance::Aggressive,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliBudgetPersona {
    Student,
    Balanced,
    Slay,
    Emergency,
    Holiday,
    WealthBuilder,
}

impl From<CliBudgetPersona> for BudgetPersona {
    fn from(value: CliBudgetPersona) -> Self {
        match value {
            CliBudgetPersona::Student => BudgetPersona::Student,
            CliBudgetPersona::Balanced => BudgetPersona::Balanced,
            CliBudgetPersona::Slay => BudgetPersona::Slay,
            CliBudgetPersona::Emergency => BudgetPersona::Emergency,
            CliBudgetPersona::Holiday => BudgetPersona::Holiday,
            CliBudgetPersona::WealthBuilder => BudgetPersona::WealthBuilder,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliLifestyleMode {
    Survival,
    Comfort,
    Slay,
}

impl From<CliLifestyleMode> for LifestyleMode {
    fn from(value: CliLifestyleMode) -> Self {
        match value {
            CliLifestyleMode::Survival => LifestyleMode::Survival,
            CliLifestyleMode::Comfort => LifestyleMode::Comfort,
            CliLifestyleMode::Slay => LifestyleMode::Slay,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliLifeEvent {
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

impl From<CliLifeEvent> for LifeEventKind {
    fn from(value: CliLifeEvent) -> Self {
        match value {
            CliLifeEvent::GetMarried => LifeEventKind::GetMarried,
            CliLifeEvent::HaveBaby => LifeEventKind::HaveBaby,
            CliLifeEvent::BuyHouse => LifeEventKind::BuyHouse,
            CliLifeEvent::JobLoss => LifeEventKind::JobLoss,
            CliLifeEvent::GetPromoted => LifeEventKind::GetPromoted,
            CliLifeEvent::BackToSchool => LifeEventKind::BackToSchool,
            CliLifeEvent::Recession => LifeEventKind::Recession,
            CliLifeEvent::BuyCar => LifeEventKind::BuyCar,
            CliLifeEvent::YearOfTravel => LifeEventKind::YearOfTravel,
            CliLifeEvent::MedicalEmergency => LifeEventKind::MedicalEmergency,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ApiIncomeType {
    Salary,
    Freelance,
    Mixed,
    #[serde(alias = "businessOwner", alias = "business_owner")]
    BusinessOwner,
}

impl From<ApiIncomeType> for CliIncomeType {
    fn from(value: ApiIncomeType) -> Self {
        match value {
            ApiIncomeType::Salary => CliIncomeType::Salary,
            ApiIncomeType::Freelance => CliIncomeType::Freelance,
            ApiIncomeType::Mixed => CliIncomeType::Mixed,
            ApiIncomeType::BusinessOwner => CliIncomeType::BusinessOwner,
        }
    }
}

impl From<IncomeType> for ApiIncomeType {
    fn from(value: IncomeType) -> Self {
        match value {
            IncomeType::Salary => ApiIncomeType::Salary,
            IncomeType::Freelance => ApiIncomeType::Freelance,
            IncomeType::Mixed => ApiIncomeType::Mixed,
            IncomeType::BusinessOwner => ApiIncomeType::BusinessOwner,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ApiRiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<ApiRiskTolerance> for CliRiskTolerance {
    fn from(value: ApiRiskTolerance) -> Self {
        match value {
            ApiRiskTolerance::Conservative => CliRiskTolerance::Conservative,
            ApiRiskTolerance::Moderate => CliRiskTolerance::Moderate,
            ApiRiskTolerance::Aggressive => CliRiskTolerance::Aggressive,
        }
    }
}

impl From<RiskTolerance> for ApiRiskTolerance {
    fn from(value: RiskTolerance) -> Self {
        match value {
            RiskTolerance::Conservative => ApiRiskTolerance::Conservative,
            RiskTolerance::Moderate => ApiRiskTolerance::Moderate,
            RiskTolerance::Aggressive => ApiRiskTolerance::Aggressive,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiBudgetPersona {
    Student,
    Balanced,
    Slay,
    Emergency,
    Holiday,
    #[serde(alias = "wealthBuilder", alias = "wealth_builder")]
    WealthBuilder,
}

impl From<ApiBudgetPersona> for CliBudgetPersona {
    fn from(value: ApiBudgetPersona) -> Self {
        match value {
            ApiBudgetPersona::Student => CliBudgetPersona::Student,
            ApiBudgetPersona::Balanced => CliBudgetPersona::Balanced,
            ApiBudgetPersona::Slay => CliBudgetPersona::Slay,
            ApiBudgetPersona::Emergency => CliBudgetPersona::Emergency,
            ApiBudgetPersona::Holiday => CliBudgetPersona::Holiday,
            ApiBudgetPersona::WealthBuilder => CliBudgetPersona::WealthBuilder,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiLifestyleMode {
    Survival,
    Comfort,
    Slay,
}

impl From<ApiLifestyleMode> for CliLifestyleMode {
    fn from(value: ApiLifestyleMode) -> Self {
        match value {
            ApiLifestyleMode::Survival => CliLifestyleMode::Survival,
            ApiLifestyleMode::Comfort => CliLifestyleMode::Comfort,
            ApiLifestyleMode::Slay => CliLifestyleMode::Slay,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiLifeEvent {
    #[serde(alias = "getMarried", alias = "get_married")]
    GetMarried,
    #[serde(alias = "haveBaby", alias = "have_baby")]
    HaveBaby,
    #[serde(alias = "buyHouse", alias = "buy_house")]
    BuyHouse,
    #[serde(alias = "jobLoss", alias = "job_loss")]
    JobLoss,
    #[serde(alias = "getPromoted", alias = "get_promoted")]
    GetPromoted,
    #[serde(alias = "backToSchool", alias = "back_to_school")]
    BackToSchool,
    Recession,
    #[serde(alias = "buyCar", alias = "buy_car")]
    BuyCar,
    #[serde(alias = "yearOfTravel", alias = "year_of_travel")]
    YearOfTravel,
    #[serde(alias = "medicalEmergency", alias = "medical_emergency")]
    MedicalEmergency,
}

impl From<ApiLifeEvent> for CliLifeEvent {
    fn from(value: ApiLifeEvent) -> Self {
        match value {
            ApiLifeEvent::GetMarried => CliLifeEvent::GetMarried,
            ApiLifeEvent::HaveBaby => CliLifeEvent::HaveBaby,
            ApiLifeEvent::BuyHouse => CliLifeEvent::BuyHouse,
            ApiLifeEvent::JobLoss => CliLifeEvent::JobLoss,
            ApiLifeEvent::GetPromoted => CliLifeEvent::GetPromoted,
            ApiLifeEvent::BackToSchool => CliLifeEvent::BackToSchool,
            ApiLifeEvent::Recession => CliLifeEvent::Recession,
            ApiLifeEvent::BuyCar => CliLifeEvent::BuyCar,
            ApiLifeEvent::YearOfTravel => CliLifeEvent::YearOfTravel,
            ApiLifeEvent::MedicalEmergency => CliLifeEvent::MedicalEmergency,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    monthly_income: Option<f64>,
    age: Option<u32>,
    income_type: Option<ApiIncomeType>,
    risk_tolerance: Option<ApiRiskTolerance>,
    budget_persona: Option<ApiBudgetPersona>,
    lifestyle_mode: Option<ApiLifestyleMode>,
    plan_month: Option<u32>,

    debt_principal: Option<f64>,
    debt_rate: Option<f64>,
    debt_payment: Option<f64>,
    debt_extra: Option<f64>,

    monthly_investing: Option<f64>,
    annual_return: Option<f64>,
    current_savings: Option<f64>,

    emergency_months: Option<f64>,
    emergency_saved: Option<f64>,

    goal_target: Option<f64>,
    goal_saved: Option<f64>,
    goal_months: Option<u32>,

    current_balance: Option<f64>,
    daily_burn: Option<f64>,
    days_remaining: Option<u32>,
    spending_adjustment: Option<f64>,

    income_variance: Option<f64>,
    income_growth: Option<f64>,
    spending_growth: Option<f64>,

    #[serde(deserialize_with = "life_events_from_list_or_csv")]
    life_events: Option<Vec<ApiLifeEvent>>,
}

/// Life events arrive as a JSON array in POST bodies and as one
/// comma-separated value in GET query strings; both forms land here.
fn life_events_from_list_or_csv<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<ApiLifeEvent>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EventListVisitor;

    impl<'de> de::Visitor<'de> for EventListVisitor {
        type Value = Option<Vec<ApiLifeEvent>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a life event list or a comma-separated string")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let mut events = Vec::new();
            for token in value.split(',') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                let token_de: StrDeserializer<E> = token.into_deserializer();
                events.push(ApiLifeEvent::deserialize(token_de)?);
            }
            Ok(Some(events))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut events = Vec::new();
            while let Some(event) = seq.next_element()? {
                events.push(event);
            }
            Ok(Some(events))
        }
    }

    deserializer.deserialize_any(EventListVisitor)
}

#[derive(Parser, Debug)]
#[command(
    name = "moneta",
    about = "Personal financial planning calculator (budget + debt + investing + life events)"
)]
struct Cli {
    #[arg(long, default_value_t = 5000.0, help = "Monthly take-home income")]
    monthly_income: f64,
    #[arg(long, default_value_t = 25)]
    age: u32,
    #[arg(long, value_enum, default_value_t = CliIncomeType::Salary)]
    income_type: CliIncomeType,
    #[arg(long, value_enum, default_value_t = CliRiskTolerance::Moderate)]
    risk_tolerance: CliRiskTolerance,
    #[arg(
        long,
        value_enum,
        help = "Named budget split; overrides --lifestyle-mode and the income tier"
    )]
    budget_persona: Option<CliBudgetPersona>,
    #[arg(
        long,
        value_enum,
        help = "Budget split by lifestyle, used when no persona is given"
    )]
    lifestyle_mode: Option<CliLifestyleMode>,
    #[arg(
        long,
        default_value_t = 1,
        help = "Calendar month the plan is drawn up in, 1-12"
    )]
    plan_month: u32,
    #[arg(long, default_value_t = 10000.0)]
    debt_principal: f64,
    #[arg(long, default_value_t = 18.0, help = "Debt APR in percent")]
    debt_annual_rate: f64,
    #[arg(long, default_value_t = 300.0)]
    debt_monthly_payment: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Extra debt payment on top of the regular one"
    )]
    debt_extra_payment: f64,
    #[arg(
        long,
        default_value_t = 500.0,
        help = "Monthly contribution assumed for growth projections"
    )]
    monthly_investing: f64,
    #[arg(
        long,
        default_value_t = 7.0,
        help = "Expected annual investment return in percent"
    )]
    annual_return: f64,
    #[arg(long, default_value_t = 8000.0)]
    current_savings: f64,
    #[arg(
        long,
        default_value_t = 6.0,
        help = "Months of needs the emergency fund should cover"
    )]
    emergency_target_months: f64,
    #[arg(long, default_value_t = 2000.0)]
    emergency_fund_saved: f64,
    #[arg(long, default_value_t = 5000.0)]
    goal_target: f64,
    #[arg(long, default_value_t = 0.0)]
    goal_saved: f64,
    #[arg(long, default_value_t = 12)]
    goal_months: u32,
    #[arg(long, default_value_t = 2500.0)]
    current_balance: f64,
    #[arg(
        long,
        help = "Daily spending rate; defaults to 80% of monthly income over 30 days"
    )]
    daily_burn_rate: Option<f64>,
    #[arg(long, default_value_t = 30, help = "Days left in the current month")]
    days_remaining: u32,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Percent change to the daily burn rate; -100 freezes spending"
    )]
    spending_adjustment: f64,
    #[arg(
        long,
        default_value_t = 15.0,
        help = "Month-to-month income variance in percent"
    )]
    income_variance: f64,
    #[arg(long, default_value_t = 5.0, help = "Annual income growth in percent")]
    income_growth: f64,
    #[arg(
        long,
        default_value_t = 15.0,
        help = "Annual spending growth in percent"
    )]
    spending_growth: f64,
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        help = "Life events to overlay on the plan, comma separated"
    )]
    life_events: Vec<CliLifeEvent>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse {
    monthly_income: f64,
    age: u32,
    income_type: ApiIncomeType,
    risk_tolerance: ApiRiskTolerance,
    budget: BudgetBreakdown,
    debt: DebtPayoff,
    investment: InvestmentOutlook,
    emergency_fund: EmergencyFundPlan,
    goal: GoalAssessment,
    balance: BalanceOutlook,
    stability: StabilityReport,
    inflation: InflationReport,
    what_if: WhatIfOutcome,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(cli: Cli) -> Result<PlanInputs, String> {
    if !(18..=99).contains(&cli.age) {
        return Err("--age must be between 18 and 99".to_string());
    }

    if !cli.monthly_income.is_finite() || cli.monthly_income < 0.0 {
        return Err("--monthly-income must be >= 0".to_string());
    }

    if !(1..=12).contains(&cli.plan_month) {
        return Err("--plan-month must be between 1 and 12".to_string());
    }

    if !cli.debt_annual_rate.is_finite() || !(0.0..100.0).contains(&cli.debt_annual_rate) {
        return Err("--debt-annual-rate must be >= 0 and < 100".to_string());
    }

    for (name, value) in [
        ("--debt-principal", cli.debt_principal),
        ("--debt-monthly-payment", cli.debt_monthly_payment),
        ("--debt-extra-payment", cli.debt_extra_payment),
        ("--monthly-investing", cli.monthly_investing),
        ("--current-savings", cli.current_savings),
        ("--emergency-fund-saved", cli.emergency_fund_saved),
        ("--goal-saved", cli.goal_saved),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{name} must be >= 0"));
        }
    }

    if !cli.annual_return.is_finite() || cli.annual_return < -100.0 {
        return Err("--annual-return must be >= -100".to_string());
    }

    if !cli.emergency_target_months.is_finite() || cli.emergency_target_months <= 0.0 {
        return Err("--emergency-target-months must be > 0".to_string());
    }

    if !cli.goal_target.is_finite() || cli.goal_target <= 0.0 {
        return Err("--goal-target must be > 0".to_string());
    }

    if cli.goal_saved > cli.goal_target {
        return Err("--goal-saved cannot exceed --goal-target".to_string());
    }

    if cli.goal_months == 0 {
        return Err("--goal-months must be > 0".to_string());
    }

    if !cli.current_balance.is_finite() {
        return Err("--current-balance must be a finite number".to_string());
    }

    if let Some(burn) = cli.daily_burn_rate {
        if !burn.is_finite() || burn < 0.0 {
            return Err("--daily-burn-rate must be >= 0".to_string());
        }
    }

    if !(1..=31).contains(&cli.days_remaining) {
        return Err("--days-remaining must be between 1 and 31".to_string());
    }

    if !cli.spending_adjustment.is_finite() || cli.spending_adjustment < -100.0 {
        return Err("--spending-adjustment must be >= -100".to_string());
    }

    for (name, rate) in [
        ("--income-variance", cli.income_variance),
        ("--income-growth", cli.income_growth),
        ("--spending-growth", cli.spending_growth),
    ] {
        if !(0.0..=100.0).contains(&rate) {
            return Err(format!("{name} must be between 0 and 100"));
        }
    }

    for (index, event) in cli.life_events.iter().enumerate() {
        if cli.life_events[index + 1..].contains(event) {
            return Err("--life-events must not repeat an event".to_string());
        }
    }

    let daily_burn_rate = cli
        .daily_burn_rate
        .unwrap_or(cli.monthly_income * 0.8 / 30.0);

    Ok(PlanInputs {
        monthly_income: cli.monthly_income,
        age: cli.age,
        income_type: cli.income_type.into(),
        risk_tolerance: cli.risk_tolerance.into(),
        budget_persona: cli.budget_persona.map(Into::into),
        lifestyle_mode: cli.lifestyle_mode.map(Into::into),
        plan_month: cli.plan_month,
        debt_principal: cli.debt_principal,
        debt_annual_rate_pct: cli.debt_annual_rate,
        debt_monthly_payment: cli.debt_monthly_payment,
        debt_extra_payment: cli.debt_extra_payment,
        investment_monthly_contribution: cli.monthly_investing,
        annual_return_pct: cli.annual_return,
        current_savings: cli.current_savings,
        emergency_target_months: cli.emergency_target_months,
        emergency_fund_saved: cli.emergency_fund_saved,
        goal_target_amount: cli.goal_target,
        goal_already_saved: cli.goal_saved,
        goal_timeline_months: cli.goal_months,
        current_balance: cli.current_balance,
        daily_burn_rate,
        days_remaining: cli.days_remaining,
        spending_adjustment_pct: cli.spending_adjustment,
        income_variance_pct: cli.income_variance,
        income_growth_pct: cli.income_growth,
        spending_growth_pct: cli.spending_growth,
        life_events: cli.life_events.into_iter().map(Into::into).collect(),
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/plan", get(plan_get_handler).post(plan_post_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("Moneta HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/plan");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn plan_get_handler(query: Result<Query<PlanPayload>, QueryRejection>) -> Response {
    match query {
        Ok(Query(payload)) => plan_handler_impl(payload).await,
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn plan_post_handler(body: Result<Json<PlanPayload>, JsonRejection>) -> Response {
    match body {
        Ok(Json(payload)) => plan_handler_impl(payload).await,
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn plan_handler_impl(payload: PlanPayload) -> Response {
    let inputs = match plan_inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    match run_plan(&inputs) {
        Ok(result) => json_response(StatusCode::OK, build_plan_response(&inputs, result)),
        Err(err) => error_response(status_for(&err), &err.to_string()),
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::Infeasible(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn plan_inputs_from_json(json: &str) -> Result<PlanInputs, String> {
    let payload = serde_json::from_str::<PlanPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    plan_inputs_from_payload(payload)
}

fn plan_inputs_from_payload(payload: PlanPayload) -> Result<PlanInputs, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.monthly_income {
        cli.monthly_income = v;
    }
    if let Some(v) = payload.age {
        cli.age = v;
    }
    if let Some(v) = payload.income_type {
        cli.income_type = v.into();
    }
    if let Some(v) = payload.risk_tolerance {
        cli.risk_tolerance = v.into();
    }
    if let Some(v) = payload.budget_persona {
        cli.budget_persona = Some(v.into());
    }
    if let Some(v) = payload.lifestyle_mode {
        cli.lifestyle_mode = Some(v.into());
    }
    if let Some(v) = payload.plan_month {
        cli.plan_month = v;
    }

    if let Some(v) = payload.debt_principal {
        cli.debt_principal = v;
    }
    if let Some(v) = payload.debt_rate {
        cli.debt_annual_rate = v;
    }
    if let Some(v) = payload.debt_payment {
        cli.debt_monthly_payment = v;
    }
    if let Some(v) = payload.debt_extra {
        cli.debt_extra_payment = v;
    }

    if let Some(v) = payload.monthly_investing {
        cli.monthly_investing = v;
    }
    if let Some(v) = payload.annual_return {
        cli.annual_return = v;
    }
    if let Some(v) = payload.current_savings {
        cli.current_savings = v;
    }

    if let Some(v) = payload.emergency_months {
        cli.emergency_target_months = v;
    }
    if let Some(v) = payload.emergency_saved {
        cli.emergency_fund_saved = v;
    }

    if let Some(v) = payload.goal_target {
        cli.goal_target = v;
    }
    if let Some(v) = payload.goal_saved {
        cli.goal_saved = v;
    }
    if let Some(v) = payload.goal_months {
        cli.goal_months = v;
    }

    if let Some(v) = payload.current_balance {
        cli.current_balance = v;
    }
    if let Some(v) = payload.daily_burn {
        cli.daily_burn_rate = Some(v);
    }
    if let Some(v) = payload.days_remaining {
        cli.days_remaining = v;
    }
    if let Some(v) = payload.spending_adjustment {
        cli.spending_adjustment = v;
    }

    if let Some(v) = payload.income_variance {
        cli.income_variance = v;
    }
    if let Some(v) = payload.income_growth {
        cli.income_growth = v;
    }
    if let Some(v) = payload.spending_growth {
        cli.spending_growth = v;
    }

    if let Some(v) = payload.life_events {
        cli.life_events = v.into_iter().map(Into::into).collect();
    }

    build_inputs(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        monthly_income: 5_000.0,
        age: 25,
        income_type: CliIncomeType::Salary,
        risk_tolerance: CliRiskTolerance::Moderate,
        budget_persona: None,
        lifestyle_mode: None,
        plan_month: 1,
        debt_principal: 10_000.0,
        debt_annual_rate: 18.0,
        debt_monthly_payment: 300.0,
        debt_extra_payment: 0.0,
        monthly_investing: 500.0,
        annual_return: 7.0,
        current_savings: 8_000.0,
        emergency_target_months: 6.0,
        emergency_fund_saved: 2_000.0,
        goal_target: 5_000.0,
        goal_saved: 0.0,
        goal_months: 12,
        current_balance: 2_500.0,
        daily_burn_rate: None,
        days_remaining: 30,
        spending_adjustment: 0.0,
        income_variance: 15.0,
        income_growth: 5.0,
        spending_growth: 15.0,
        life_events: Vec::new(),
    }
}

fn build_plan_response(inputs: &PlanInputs, result: PlanResult) -> PlanResponse {
    PlanResponse {
        monthly_income: inputs.monthly_income,
        age: inputs.age,
        income_type: inputs.income_type.into(),
        risk_tolerance: inputs.risk_tolerance.into(),
        budget: result.budget,
        debt: result.debt,
        investment: result.investment,
        emergency_fund: result.emergency_fund,
        goal: result.goal,
        balance: result.balance,
        stability: result.stability,
        inflation: result.inflation,
        what_if: result.what_if,
    }
}
