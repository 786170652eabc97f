use std::io::{self, Write};

use common::types::Payout;
use common::{PayoutRate, PrizeTier, ValidationError};
use judge::{Statistics, Ticket};

const ERROR_PREFIX: &str = "[ERROR] ";

/// Formats an amount with comma thousands separators.
pub fn format_amount(amount: Payout) -> String{
    let digits = amount.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate(){
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }

    return result;
}

pub fn tier_line(tier: PrizeTier, count: u64) -> String{
    let bonus = if tier.requires_bonus() { ", bonus ball matches" } else { "" };

    format!(
        "{} matches{} ({} KRW) - {} tickets",
        tier.required_matches(),
        bonus,
        format_amount(tier.payout()),
        count
    )
}

/// Two decimal places, rounded half up.
pub fn rate_line(rate: &PayoutRate) -> String{
    let basis_points = rate.basis_points();
    format!("Total return rate is {}.{:02}%.", basis_points / 100, basis_points % 100)
}

pub fn print_error<W: Write>(output: &mut W, error: ValidationError) -> io::Result<()>{
    writeln!(output, "{}{}", ERROR_PREFIX, error)
}

pub fn print_tickets<W: Write>(output: &mut W, tickets: &[Ticket]) -> io::Result<()>{
    writeln!(output)?;
    writeln!(output, "You have purchased {} tickets.", tickets.len())?;
    for ticket in tickets.iter(){
        writeln!(output, "{}", ticket)?;
    }
    writeln!(output)
}

pub fn print_statistics<W: Write>(output: &mut W, stats: &Statistics) -> io::Result<()>{
    writeln!(output)?;
    writeln!(output, "Winning statistics")?;
    writeln!(output, "---")?;
    for tier in PrizeTier::WINNING.iter(){
        writeln!(output, "{}", tier_line(*tier, stats.count(*tier)))?;
    }

    match stats.payout_rate() {
        Ok(rate) => writeln!(output, "{}", rate_line(&rate)),
        Err(error) => print_error(output, error),
    }
}
