use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let terms: fincalc_core::amortization::schedule::LoanTerms =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let payment = fincalc_core::amortization::schedule::monthly_payment(&terms);
    serde_json::to_string(&payment).map_err(to_napi_error)
}

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let terms: fincalc_core::amortization::schedule::LoanTerms =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::amortization::schedule::build_schedule(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_payoff(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::amortization::payoff::PayoffInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::amortization::payoff::simulate_payoff(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

#[napi]
pub fn annuity_future_value(input_json: String) -> NapiResult<String> {
    let params: fincalc_core::growth::annuity::AnnuityParams =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let fv = fincalc_core::growth::annuity::future_value(&params);
    serde_json::to_string(&fv).map_err(to_napi_error)
}

#[napi]
pub fn project_growth(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::growth::annuity::GrowthInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::growth::annuity::project_growth(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn plan_goal(input_json: String) -> NapiResult<String> {
    let goal: fincalc_core::growth::goal::ContributionGoal =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::growth::goal::plan_goal(&goal).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Inflation
// ---------------------------------------------------------------------------

#[napi]
pub fn project_expenses(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::inflation::projection::ExpenseInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::inflation::projection::project_expenses(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct MultiplierBindingInput {
    swr_pct: rust_decimal::Decimal,
}

#[napi]
pub fn corpus_multiplier(input_json: String) -> NapiResult<String> {
    let binding_input: MultiplierBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let multiplier = fincalc_core::inflation::projection::corpus_multiplier(binding_input.swr_pct)
        .map_err(to_napi_error)?;
    serde_json::to_string(&multiplier).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_score(input_json: String) -> NapiResult<String> {
    let factors: fincalc_core::scoring::estimator::ScoreFactors =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::scoring::estimator::estimate_score(&factors).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
