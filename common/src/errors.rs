use std::fmt;

/// Reasons a raw input is rejected. Nothing is constructed when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    NonNumeric,
    WrongCount,
    OutOfRange,
    DuplicateValue,
    DuplicateWithWinning,
    DivisionUndefined,
    InvalidAmount,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::NonNumeric => "Only numbers can be entered.",
            ValidationError::WrongCount => "Exactly 6 numbers must be entered.",
            ValidationError::OutOfRange => "Numbers must be between 1 and 45.",
            ValidationError::DuplicateValue => "Numbers must not repeat.",
            ValidationError::DuplicateWithWinning => "The bonus number must differ from the winning numbers.",
            ValidationError::DivisionUndefined => "Payout rate is undefined for a zero purchase amount.",
            ValidationError::InvalidAmount => "The purchase amount must be a non-negative multiple of 1,000.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
