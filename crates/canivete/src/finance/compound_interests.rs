use crate::prelude::{eprintln, println, *};
use canivete_core::config::Config;
use canivete_core::finance::{compound_interest, InterestInput, InterestResult};
use colored::Colorize;
use serde::{Deserialize, Serialize};

pub const LONG_ABOUT: &str = "Calculates compound interests.

The formula for compound interests is a = p*((1+r/n)^(n * t))
With different periodic payments an extra is needed:
    a_series = m * (y/n) {[(1 + r/n)^(n * t) - 1] / (r/n)}
    total = a + a_series

Where:
    a = the future value of the investment/loan, including interest
    p = the principal investment amount (the initial deposit or loan amount)
    r = the annual interest rate (decimal)
    n = the number of times that interest is compounded per unit t
    t = the time the money is invested or borrowed for
    m = the regular contribution
    y = regular contributions in the compounded period

Amounts are always rounded up to the cent.";

pub const EXAMPLES: &str = "Examples:
  canivete finance compoundinterests -t 10 -p 1000 -r 5 -n 1
  canivete finance compoundinterests -t 25 -p 15000 -r 5 -n 1 -m 400 -y 12
  canivete finance compoundinterests -t 5 -p 1000 -r 3 -n 12 --history --output table";

#[derive(Debug, Clone, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON object (default)
    Json,
    /// Human readable table
    Table,
}

#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct CompoundInterestsOptions {
    /// the principal investment amount (the initial deposit or loan amount)
    #[arg(short = 'p', long)]
    pub invest_amount: f64,

    /// the annual interest rate (decimal, percentage)
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub annual_interest_rate: f64,

    /// number of times interest compounds, i.e. 12 = monthly, 4 = quarterly, 2 = semi-annually, 1 = annually
    #[arg(short = 'n', long)]
    pub compound_periods: u32,

    /// the time the money is invested or borrowed for (e.g. 10 years)
    #[arg(short = 't', long)]
    pub time: u32,

    /// regular contributions (additional money added to investment)
    #[arg(short = 'm', long, default_value = "0")]
    pub regular_contributions: f64,

    /// regular contributions in the compounded period (e.g. 12 if every month in a year) [default: 12]
    #[arg(short = 'y', long)]
    pub regular_contributions_period: Option<u32>,

    /// Include the value at the end of every period
    #[arg(long)]
    pub history: bool,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub output: OutputFormat,
}

pub fn run(options: CompoundInterestsOptions, global: crate::Global, config: &Config) -> Result<()> {
    let input = build_input(&options, config);

    if global.verbose {
        eprintln!("Input: {:?}", input);
        eprintln!();
    }

    let result = compound_interest_data(&input, options.history)?;

    match options.output {
        OutputFormat::Json => println!("{}", format_result_json(&result)?),
        OutputFormat::Table => println!("{}", format_result_text(&input, &result)),
    }

    Ok(())
}

/// Map command-line options onto the calculator input
pub fn build_input(options: &CompoundInterestsOptions, config: &Config) -> InterestInput {
    InterestInput::new(
        options.invest_amount,
        options.annual_interest_rate,
        options.compound_periods,
        options.time,
    )
    .with_contributions(
        options.regular_contributions,
        config.contributions_period(options.regular_contributions_period),
    )
}

/// Public data function - validate and compute
pub fn compound_interest_data(input: &InterestInput, include_history: bool) -> Result<InterestResult> {
    log::debug!(
        "Computing compound interest over {} periods (history: {})",
        input.duration,
        include_history
    );

    let result = compound_interest(input, include_history)
        .map_err(|e| Error::Validation(e.to_string()))?;

    Ok(result)
}

fn format_result_json(result: &InterestResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_amount(value: f64) -> String {
    f!("{value:.2}")
}

fn format_result_text(input: &InterestInput, result: &InterestResult) -> String {
    let mut output = String::new();

    output.push_str(&f!("\n{}\n", "COMPOUND INTERESTS".bright_cyan().bold()));

    let mut summary = new_table();
    summary.add_row(prettytable::row!["Principal", format_amount(input.principal)]);
    summary.add_row(prettytable::row![
        "Annual rate",
        f!("{}%", input.annual_rate)
    ]);
    summary.add_row(prettytable::row![
        "Compound periods",
        input.compound_periods
    ]);
    summary.add_row(prettytable::row!["Time", input.duration]);
    if input.regular_contribution > 0.0 {
        summary.add_row(prettytable::row![
            "Regular contributions",
            f!(
                "{} x {}",
                format_amount(input.regular_contribution),
                input.contributions_period
            )
        ]);
    }
    summary.add_row(prettytable::row![
        "Total contributions",
        format_amount(result.total_contributions)
    ]);
    summary.add_row(prettytable::row![
        "Interest earned",
        format_amount(result.interest_earned)
    ]);
    summary.add_row(prettytable::row![
        "Future value",
        format_amount(result.future_value)
    ]);
    output.push_str(&summary.to_string());

    if let Some(history) = &result.history {
        output.push_str(&f!("\n{}\n", "HISTORY".bright_yellow().bold()));

        let mut table = new_table();
        table.set_titles(prettytable::row![
            "Period",
            "Future value",
            "Total contributions",
            "Interest earned"
        ]);
        for entry in history {
            table.add_row(prettytable::row![
                entry.period,
                format_amount(entry.future_value),
                format_amount(entry.total_contributions),
                format_amount(entry.interest_earned)
            ]);
        }
        output.push_str(&table.to_string());
    }

    output
}
