//! Console round of the lotto game: buy tickets, enter the draw, read the report.

use std::io::{BufRead, Write};

use common::constants::TICKET_PRICE;
use judge::{purchase, BonusNumber, NumberPicker, NumberSet, PurchaseAmount, Statistics, WinningNumbers};

pub mod config;
pub mod console;
pub mod events;
pub mod view;

use console::Console;
use events::EventLog;

pub const PURCHASE_PROMPT: &str = "Please enter the purchase amount.";
pub const WINNING_PROMPT: &str = "Please enter the winning numbers.";
pub const BONUS_PROMPT: &str = "Please enter the bonus number.";

/// Plays one round. Invalid answers are reported and asked again; only I/O failures end the round early.
pub fn run<R, W, P>(input: R, output: W, picker: &mut P, events: &EventLog) -> anyhow::Result<Statistics>
where R: BufRead, W: Write, P: NumberPicker + ?Sized {
    let mut console = Console::new(input, output);

    let amount = console.ask(PURCHASE_PROMPT, PurchaseAmount::parse)?;
    let tickets = purchase(amount.value(), TICKET_PRICE, picker)?;
    events.tickets_purchased(amount.value(), &tickets);
    view::print_tickets(console.output(), &tickets)?;

    let numbers = console.ask(WINNING_PROMPT, NumberSet::parse)?;
    writeln!(console.output())?;
    let bonus = console.ask(BONUS_PROMPT, |raw| BonusNumber::validate(raw, &numbers))?;
    let winning = WinningNumbers::new(numbers, bonus)?;
    events.winning_numbers_set(&winning);

    let stats = Statistics::aggregate(&tickets, &winning.numbers, winning.bonus, amount.value());
    events.statistics_computed(&stats);
    view::print_statistics(console.output(), &stats)?;
    console.output().flush()?;

    return Ok(stats);
}
