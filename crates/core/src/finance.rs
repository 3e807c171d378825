//! Compound interest calculations
//!
//! The future value of an investment compounded `n` times per unit of time is
//! `a = p * (1 + r/n)^(n*t)`. Regular contributions add an annuity term
//! `m * (y/n) * ((1 + r/n)^(n*t) - 1) / (r/n)`.
//!
//! Every amount is rounded up to the cent with `ceil(value * 100) / 100`, so
//! displayed results never round against the investor.

use serde::{Deserialize, Serialize};

/// Contributions per unit of time when none is given (monthly, for yearly units)
pub const DEFAULT_CONTRIBUTIONS_PERIOD: u32 = 12;

/// Input rejected before any calculation runs
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the regular-contributions-period cannot be zero")]
    ZeroContributionsPeriod,

    #[error("the compound-periods cannot be zero")]
    ZeroCompoundPeriods,

    #[error("the invest-amount cannot be negative")]
    NegativePrincipal,

    #[error("the regular-contributions cannot be negative")]
    NegativeContribution,

    #[error("the annual-interest-rate must be a finite number")]
    NonFiniteRate,
}

/// Parameters of a compound interest calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestInput {
    /// Initial deposit or loan amount
    pub principal: f64,
    /// Annual interest rate as a percentage (5 means 5%)
    pub annual_rate: f64,
    /// Times interest compounds per unit of time
    pub compound_periods: u32,
    /// Number of time units
    pub duration: u32,
    /// Amount added on every contribution
    #[serde(default)]
    pub regular_contribution: f64,
    /// Contributions per unit of time
    #[serde(default = "default_contributions_period")]
    pub contributions_period: u32,
}

fn default_contributions_period() -> u32 {
    DEFAULT_CONTRIBUTIONS_PERIOD
}

impl InterestInput {
    pub fn new(principal: f64, annual_rate: f64, compound_periods: u32, duration: u32) -> Self {
        Self {
            principal,
            annual_rate,
            compound_periods,
            duration,
            regular_contribution: 0.0,
            contributions_period: DEFAULT_CONTRIBUTIONS_PERIOD,
        }
    }

    pub fn with_contributions(mut self, amount: f64, contributions_period: u32) -> Self {
        self.regular_contribution = amount;
        self.contributions_period = contributions_period;
        self
    }

    /// Check the preconditions of the formula
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.principal >= 0.0) || !self.principal.is_finite() {
            return Err(ValidationError::NegativePrincipal);
        }
        if !(self.regular_contribution >= 0.0) || !self.regular_contribution.is_finite() {
            return Err(ValidationError::NegativeContribution);
        }
        if !self.annual_rate.is_finite() {
            return Err(ValidationError::NonFiniteRate);
        }
        if self.compound_periods == 0 {
            return Err(ValidationError::ZeroCompoundPeriods);
        }
        if self.has_contributions() && self.contributions_period == 0 {
            return Err(ValidationError::ZeroContributionsPeriod);
        }
        Ok(())
    }

    fn has_contributions(&self) -> bool {
        self.regular_contribution > 0.0
    }
}

/// Result for a single period of the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub period: u32,
    pub future_value: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
}

/// Result of a compound interest calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub future_value: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Round up to two decimal places
pub fn round_up_cents(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}

/// Unrounded future value after `duration` units
fn raw_future_value(input: &InterestInput, duration: u32) -> f64 {
    let rate = input.annual_rate / 100.0;
    let periods = f64::from(input.compound_periods);
    let periodic_rate = rate / periods;
    let growth = (1.0 + periodic_rate).powf(periods * f64::from(duration));

    let base = input.principal * growth;
    if !input.has_contributions() {
        return base;
    }

    let contributions_period = f64::from(input.contributions_period);

    let series = input.regular_contribution
        * (contributions_period / periods)
        * annuity_factor(periodic_rate, periods * f64::from(duration));

    base + series
}

/// `((1 + i)^k - 1) / i`, the value of `k` unit deposits at periodic rate `i`
///
/// Evaluated through `ln_1p`/`exp_m1` so rates close to zero keep their
/// precision. At exactly zero it is the limit `k`.
fn annuity_factor(periodic_rate: f64, steps: f64) -> f64 {
    if periodic_rate == 0.0 {
        return steps;
    }
    if periodic_rate <= -1.0 {
        return ((1.0 + periodic_rate).powf(steps) - 1.0) / periodic_rate;
    }

    (steps * periodic_rate.ln_1p()).exp_m1() / periodic_rate
}

/// Unrounded principal plus every contribution made after `duration` units
fn raw_total_contributions(input: &InterestInput, duration: u32) -> f64 {
    if !input.has_contributions() {
        return input.principal;
    }

    input.principal
        + input.regular_contribution * f64::from(input.contributions_period) * f64::from(duration)
}

fn period_entry(input: &InterestInput, period: u32) -> HistoryEntry {
    let future_value = raw_future_value(input, period);
    let total_contributions = raw_total_contributions(input, period);

    HistoryEntry {
        period,
        future_value: round_up_cents(future_value),
        total_contributions: round_up_cents(total_contributions),
        interest_earned: round_up_cents(future_value - total_contributions),
    }
}

/// Compute the future value for the whole duration
///
/// With `include_history` the result also carries one entry per period,
/// from 1 up to the requested duration.
pub fn compound_interest(
    input: &InterestInput,
    include_history: bool,
) -> Result<InterestResult, ValidationError> {
    input.validate()?;

    let total = period_entry(input, input.duration);
    let history = if include_history {
        Some(build_history(input))
    } else {
        None
    };

    Ok(InterestResult {
        future_value: total.future_value,
        total_contributions: total.total_contributions,
        interest_earned: total.interest_earned,
        history,
    })
}

/// Compute one entry per period, indexed 1..=duration
///
/// Returns an empty history for a zero duration.
pub fn compound_interest_history(
    input: &InterestInput,
) -> Result<Vec<HistoryEntry>, ValidationError> {
    input.validate()?;
    Ok(build_history(input))
}

fn build_history(input: &InterestInput) -> Vec<HistoryEntry> {
    (1..=input.duration)
        .map(|period| period_entry(input, period))
        .collect()
}
