use chrono::NaiveDate;
use thiserror::Error;

use super::{format_cents, Cents, TransactionKind};

/// Reasons a transaction is refused by the ledger.
/// All of these are recoverable: the caller is expected to ask again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be positive")]
    NonPositiveAmount(Cents),

    #[error("Amount cannot exceed {}", format_cents(MAX_AMOUNT_CENTS))]
    AmountTooLarge(Cents),

    #[error("Total {0} would grow past the largest amount the ledger can hold")]
    TotalOutOfRange(TransactionKind),

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest single amount: 1,000,000,000,000,000.00
pub const MAX_AMOUNT_CENTS: Cents = 100_000_000_000_000_000;

pub fn validate_amount(amount_cents: Cents) -> Result<Cents, ValidationError> {
    if amount_cents <= 0 {
        return Err(ValidationError::NonPositiveAmount(amount_cents));
    }
    if amount_cents > MAX_AMOUNT_CENTS {
        return Err(ValidationError::AmountTooLarge(amount_cents));
    }
    Ok(amount_cents)
}

/// Returns the trimmed description.
pub fn validate_description(description: &str) -> Result<String, ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(description.to_string())
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts `2024-1-5` and signed or 5-digit years, so the shape
/// is checked before the calendar is.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(input.to_string());

    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Resolve an optional date, substituting `today` when it is missing or blank.
pub fn resolve_date(
    input: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    match input.map(str::trim) {
        None | Some("") => Ok(today),
        Some(date_str) => parse_date(date_str),
    }
}
