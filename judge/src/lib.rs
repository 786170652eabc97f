//! Ticket judging engine: number validation, prize classification and round statistics.

pub mod classify;
pub mod interfaces;
pub mod numbers;
pub mod picker;
pub mod statistics;
pub mod ticket;

#[cfg(test)]
mod test_utils;

pub use classify::{classify, match_count};
pub use interfaces::picker::NumberPicker;
pub use numbers::{BonusNumber, NumberSet, WinningNumbers};
pub use picker::RandomPicker;
pub use statistics::{payout_rate, Statistics};
pub use ticket::{purchase, PurchaseAmount, Ticket};
