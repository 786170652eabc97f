use std::fmt;

use common::constants::TICKET_PRICE;
use common::types::{Amount, TicketCount};
use common::ValidationError;
use serde::{Deserialize, Serialize};

use crate::interfaces::picker::NumberPicker;
use crate::numbers::NumberSet;

/// One purchased combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket{
    numbers: NumberSet,
}

impl Ticket{
    pub fn new(numbers: NumberSet) -> Self{
        Self { numbers }
    }

    pub fn numbers(&self) -> &NumberSet{
        &self.numbers
    }
}

impl fmt::Display for Ticket{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.numbers, f)
    }
}

/// Amount of money spent, always a whole number of tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseAmount(Amount);

impl PurchaseAmount{
    pub fn parse(raw: &str) -> Result<Self, ValidationError>{
        let amount = raw.parse::<i32>().map_err(|_| ValidationError::NonNumeric)?;
        let amount = Amount::try_from(amount).map_err(|_| ValidationError::InvalidAmount)?;

        return Self::new(amount);
    }

    pub fn new(amount: Amount) -> Result<Self, ValidationError>{
        if amount % TICKET_PRICE != 0 {
            return Err(ValidationError::InvalidAmount);
        }

        Ok(Self(amount))
    }

    pub fn value(&self) -> Amount{
        self.0
    }

    pub fn ticket_count(&self) -> TicketCount{
        self.0 / TICKET_PRICE
    }
}

/// Draws tickets until `amount` is spent. Draws that fail validation are dropped and drawn again,
/// so a picker that never yields a valid set keeps this looping.
pub fn purchase<P>(amount: Amount, ticket_price: Amount, picker: &mut P) -> Result<Vec<Ticket>, ValidationError>
where P: NumberPicker + ?Sized {
    if ticket_price == 0 || amount % ticket_price != 0 {
        return Err(ValidationError::InvalidAmount);
    }

    let mut remaining = amount;
    let mut tickets: Vec<Ticket> = Vec::new();
    while remaining > 0 {
        let numbers = match NumberSet::from_numbers(&picker.pick()) {
            Ok(numbers) => numbers,
            Err(_) => continue,
        };

        tickets.push(Ticket::new(numbers));
        remaining -= ticket_price;
    }

    return Ok(tickets);
}
