//! Calculator CLI commands

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::calc::{
    age_on, amortize, bmi, convert, imperial_to_metric, next_birthday, project, InvestmentInputs,
    LoanInputs, Rgb, UnitCategory,
};
use crate::config::Settings;
use crate::display::{
    format_age, format_bmi, format_color, format_conversion, format_investment_result,
    format_loan_result, format_unit_listing,
};
use crate::error::{ToolboxError, ToolboxResult};

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// EMI for a fixed-rate loan
    Loan {
        /// Loan principal
        principal: f64,
        /// Annual interest rate in percent
        rate: f64,
        /// Loan term in months
        months: u32,
    },
    /// Project a monthly investment plan
    Sip {
        /// Monthly contribution
        monthly: f64,
        /// Expected annual return in percent
        rate: f64,
        /// Investment horizon in years
        years: u32,
    },
    /// Convert between units
    Convert {
        /// Amount to convert
        amount: f64,
        /// Source unit symbol
        from: String,
        /// Target unit symbol
        to: String,
        /// Unit category (length or weight)
        #[arg(short, long, default_value = "length")]
        category: String,
    },
    /// List the units available for conversion
    Units,
    /// Age from a birth date
    Age {
        /// Birth date (YYYY-MM-DD)
        birth_date: String,
        /// Compute the age as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },
    /// Body mass index from height and weight
    Bmi {
        /// Height in centimeters (metric mode)
        #[arg(long)]
        height_cm: Option<f64>,
        /// Weight in kilograms (metric mode)
        #[arg(long)]
        weight_kg: Option<f64>,
        /// Height: feet component (imperial mode)
        #[arg(long)]
        feet: Option<f64>,
        /// Height: inches component (imperial mode)
        #[arg(long, default_value_t = 0.0)]
        inches: f64,
        /// Weight in pounds (imperial mode)
        #[arg(long)]
        pounds: Option<f64>,
    },
    /// Convert a hex color to RGB and HSL
    Color {
        /// Hex color code, e.g. #6366f1
        hex: String,
    },
}

fn parse_date(s: &str) -> ToolboxResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ToolboxError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Handle a calculator command
pub fn handle_calc_command(settings: &Settings, cmd: CalcCommands) -> ToolboxResult<()> {
    match cmd {
        CalcCommands::Loan { principal, rate, months } => {
            let result = amortize(&LoanInputs {
                principal,
                annual_rate_pct: rate,
                term_months: months,
            })?;
            print!("{}", format_loan_result(&result, principal));
        }

        CalcCommands::Sip { monthly, rate, years } => {
            let result = project(&InvestmentInputs {
                monthly_contribution: monthly,
                annual_rate_pct: rate,
                years,
            })?;
            print!("{}", format_investment_result(&result));
        }

        CalcCommands::Convert { amount, from, to, category } => {
            let category = UnitCategory::parse(&category).ok_or_else(|| {
                ToolboxError::InvalidInput(format!(
                    "unknown category '{}', expected length or weight",
                    category
                ))
            })?;
            let result = convert(amount, &from, &to, category)?;
            print!(
                "{}",
                format_conversion(amount, &from, &to, result, settings.conversion_precision)
            );
        }

        CalcCommands::Units => {
            print!("{}", format_unit_listing());
        }

        CalcCommands::Age { birth_date, on } => {
            let birth = parse_date(&birth_date)?;
            let today = match on {
                Some(date) => parse_date(&date)?,
                None => Utc::now().date_naive(),
            };
            let age = age_on(birth, today)?;
            let next = next_birthday(birth, today);
            print!("{}", format_age(&age, &next));
        }

        CalcCommands::Bmi { height_cm, weight_kg, feet, inches, pounds } => {
            let (height_m, weight) = match (height_cm, weight_kg, feet, pounds) {
                (Some(cm), Some(kg), None, None) => (cm / 100.0, kg),
                (None, None, Some(ft), Some(lb)) => imperial_to_metric(ft, inches, lb),
                _ => {
                    return Err(ToolboxError::InvalidInput(
                        "pass --height-cm and --weight-kg, or --feet and --pounds".into(),
                    ))
                }
            };
            let reading = bmi(height_m, weight)?;
            print!("{}", format_bmi(&reading));
        }

        CalcCommands::Color { hex } => {
            let rgb = Rgb::from_hex(&hex)?;
            let hsl = rgb.to_hsl();
            print!("{}", format_color(&rgb, &hsl));
        }
    }

    Ok(())
}
