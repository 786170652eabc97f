use common::types::{Amount, Payout, TicketCount};
use common::{PayoutRate, PrizeTier, ValidationError};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::numbers::{BonusNumber, NumberSet};
use crate::ticket::Ticket;

/// Tier counts of one round together with what was spent on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct Statistics{
    counts: [TicketCount; PrizeTier::ALL.len()],
    purchase_amount: Amount,
}

impl Statistics{
    pub fn new(purchase_amount: Amount) -> Self{
        Self { counts: [0; PrizeTier::ALL.len()], purchase_amount }
    }

    pub fn aggregate(tickets: &[Ticket], winning: &NumberSet, bonus: BonusNumber, purchase_amount: Amount) -> Self{
        let mut result = Self::new(purchase_amount);
        for ticket in tickets.iter(){
            result.record(classify(ticket.numbers(), winning, bonus));
        }

        return result;
    }

    pub fn record(&mut self, tier: PrizeTier){
        self.counts[tier.index()] += 1;
    }

    pub fn count(&self, tier: PrizeTier) -> TicketCount{
        self.counts[tier.index()]
    }

    pub fn purchase_amount(&self) -> Amount{
        self.purchase_amount
    }

    pub fn total_tickets(&self) -> TicketCount{
        self.counts.iter().sum()
    }

    pub fn total_payout(&self) -> Payout{
        return PrizeTier::ALL
            .iter()
            .map(|tier| Payout::from(self.count(*tier)) * tier.payout())
            .sum();
    }

    pub fn payout_rate(&self) -> Result<PayoutRate, ValidationError>{
        payout_rate(self, self.purchase_amount)
    }
}

/// Total payout of `stats` over `purchase_amount`, unrounded.
pub fn payout_rate(stats: &Statistics, purchase_amount: Amount) -> Result<PayoutRate, ValidationError>{
    PayoutRate::new(stats.total_payout(), Payout::from(purchase_amount))
}
