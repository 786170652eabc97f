use common::PrizeTier;

use crate::numbers::{BonusNumber, NumberSet, WinningNumbers};
use crate::ticket::Ticket;

pub fn match_count(ticket: &NumberSet, winning: &NumberSet) -> usize{
    ticket.iter().filter(|number| winning.contains(*number)).count()
}

/// Classifies a ticket against the winning set and bonus number.
pub fn classify(ticket: &NumberSet, winning: &NumberSet, bonus: BonusNumber) -> PrizeTier{
    let matched = match_count(ticket, winning);
    let has_bonus = ticket.contains(bonus.value());

    return PrizeTier::from_match(matched, has_bonus);
}

impl WinningNumbers{
    pub fn judge(&self, ticket: &Ticket) -> PrizeTier{
        classify(ticket.numbers(), &self.numbers, self.bonus)
    }
}
