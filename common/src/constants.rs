use crate::types::{Amount, LottoNumber};

pub const MIN_NUMBER: LottoNumber = 1;
pub const MAX_NUMBER: LottoNumber = 45;
pub const NUMBERS_PER_TICKET: usize = 6;
pub const TICKET_PRICE: Amount = 1_000;

pub const EVENT_STANDARD: &str = "lotto";
pub const EVENT_VERSION: &str = "1.0.0";
