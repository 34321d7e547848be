use std::fmt;

/// Parse a user-supplied amount.
///
/// Accepts any decimal or integer literal that is finite and strictly positive.
/// Example: "3.5" -> 3.5, "100" -> 100.0, "-5" -> error
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !amount.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }
    if amount <= 0.0 {
        return Err(ParseAmountError::NotPositive);
    }
    Ok(amount)
}

/// Format an amount with a leading dollar sign, using the shortest decimal
/// representation (3.5 -> "$3.5", 100.0 -> "$100").
pub fn format_amount(amount: f64) -> String {
    format!("${}", amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotPositive,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::NotPositive => write!(f, "amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
