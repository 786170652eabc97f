use std::collections::HashSet;
use std::fmt;

use common::constants::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
use common::types::LottoNumber;
use common::ValidationError;
use serde::{Deserialize, Serialize};

const SEPARATOR: char = ',';

fn parse_number(token: &str) -> Result<i64, ValidationError>{
    return token
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| ValidationError::NonNumeric);
}

fn to_lotto_number(number: i64) -> Result<LottoNumber, ValidationError>{
    if number < MIN_NUMBER as i64 || number > MAX_NUMBER as i64 {
        return Err(ValidationError::OutOfRange);
    }

    return Ok(number as LottoNumber);
}

/// Six distinct numbers in `[MIN_NUMBER, MAX_NUMBER]`, kept in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct NumberSet{
    numbers: [LottoNumber; NUMBERS_PER_TICKET],
}

impl NumberSet{
    /// Validates raw tokens. Checks run in order: numeric, count, range, duplicates.
    pub fn validate<S: AsRef<str>>(raw: &[S]) -> Result<Self, ValidationError>{
        let mut numbers: Vec<i64> = Vec::with_capacity(raw.len());
        for token in raw.iter(){
            numbers.push(parse_number(token.as_ref())?);
        }

        return Self::from_numbers(&numbers);
    }

    /// Splits comma separated text and validates the tokens.
    pub fn parse(text: &str) -> Result<Self, ValidationError>{
        let tokens: Vec<&str> = text.split(SEPARATOR).collect();
        return Self::validate(&tokens);
    }

    pub fn from_numbers(numbers: &[i64]) -> Result<Self, ValidationError>{
        if numbers.len() != NUMBERS_PER_TICKET {
            return Err(ValidationError::WrongCount);
        }

        let mut result = [0 as LottoNumber; NUMBERS_PER_TICKET];
        for (idx, number) in numbers.iter().enumerate(){
            result[idx] = to_lotto_number(*number)?;
        }

        let unique: HashSet<LottoNumber> = result.iter().copied().collect();
        if unique.len() != NUMBERS_PER_TICKET {
            return Err(ValidationError::DuplicateValue);
        }

        Ok(Self { numbers: result })
    }

    pub fn contains(&self, number: LottoNumber) -> bool{
        self.numbers.contains(&number)
    }

    pub fn iter(&self) -> impl Iterator<Item = LottoNumber> + '_ {
        self.numbers.iter().copied()
    }

    pub fn as_slice(&self) -> &[LottoNumber]{
        &self.numbers
    }

    pub fn sorted(&self) -> [LottoNumber; NUMBERS_PER_TICKET]{
        let mut sorted = self.numbers;
        sorted.sort_unstable();
        return sorted;
    }
}

impl TryFrom<Vec<i64>> for NumberSet{
    type Error = ValidationError;

    fn try_from(numbers: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_numbers(&numbers)
    }
}

impl From<NumberSet> for Vec<i64>{
    fn from(set: NumberSet) -> Self {
        set.iter().map(i64::from).collect()
    }
}

impl fmt::Display for NumberSet{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .sorted()
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "[{}]", joined)
    }
}

/// Extra number drawn with the winning set, never one of the winning numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BonusNumber(LottoNumber);

impl BonusNumber{
    pub fn validate(raw: &str, winning: &NumberSet) -> Result<Self, ValidationError>{
        return Self::from_number(parse_number(raw)?, winning);
    }

    pub fn from_number(number: i64, winning: &NumberSet) -> Result<Self, ValidationError>{
        let number = to_lotto_number(number)?;
        if winning.contains(number) {
            return Err(ValidationError::DuplicateWithWinning);
        }

        Ok(Self(number))
    }

    pub fn value(&self) -> LottoNumber{
        self.0
    }
}

impl fmt::Display for BonusNumber{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Winning set of a round together with its bonus number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningNumbers{
    pub numbers: NumberSet,
    pub bonus: BonusNumber,
}

impl WinningNumbers{
    pub fn new(numbers: NumberSet, bonus: BonusNumber) -> Result<Self, ValidationError>{
        if numbers.contains(bonus.value()) {
            return Err(ValidationError::DuplicateWithWinning);
        }

        Ok(Self { numbers, bonus })
    }
}
