use rand::Rng;

use crate::numbers::{BonusNumber, NumberSet};
use crate::ticket::Ticket;

pub fn generate_random_seed() -> u64{
    return rand::thread_rng().gen::<u64>();
}

pub fn numbers(raw: &[i64]) -> NumberSet{
    NumberSet::from_numbers(raw).unwrap()
}

pub fn ticket(raw: &[i64]) -> Ticket{
    Ticket::new(numbers(raw))
}

pub fn bonus(value: i64, winning: &NumberSet) -> BonusNumber{
    BonusNumber::from_number(value, winning).unwrap()
}

/// Picker that hands out `draws` in order.
pub fn fixed_picker(draws: Vec<Vec<i64>>) -> impl FnMut() -> Vec<i64>{
    let mut remaining = draws.into_iter();
    move || remaining.next().expect("fixed picker ran out of draws")
}
