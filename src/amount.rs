//! Conversion of human-entered decimal amounts into mint base units.
//!
//! Amounts are parsed from their decimal text and scaled with integer
//! arithmetic, so `2.5` at 9 decimals is exactly `2_500_000_000`. Scaling
//! always rounds up when the amount carries more fractional digits than the
//! mint supports.

use std::{
    fmt::{self, Display},
    iter,
    str::FromStr,
};

use crate::errors::AmountError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiAmount {
    whole: u128,
    // fractional digits as typed, without trailing zeros
    fraction: String,
}

impl UiAmount {
    /// Smallest integer number of base units that is not less than
    /// `self * 10^decimals`.
    pub fn to_base_units(&self, decimals: u8) -> Result<u64, AmountError> {
        let overflow = || AmountError::Overflow {
            amount: self.to_string(),
            decimals,
        };

        let digits = decimals as usize;
        let (kept, dropped) = if self.fraction.len() > digits {
            self.fraction.split_at(digits)
        } else {
            (self.fraction.as_str(), "")
        };

        // shift one decimal digit at a time so only real overflow fails
        let padding = iter::repeat('0').take(digits - kept.len());
        let mut units = self.whole;
        for digit in kept.chars().chain(padding) {
            // digits were validated on parse
            let digit = digit.to_digit(10).unwrap_or(0) as u128;
            units = units
                .checked_mul(10)
                .and_then(|units| units.checked_add(digit))
                .ok_or_else(overflow)?;
        }

        if dropped.chars().any(|digit| digit != '0') {
            units = units.checked_add(1).ok_or_else(overflow)?;
        }

        u64::try_from(units).map_err(|_| overflow())
    }
}

impl FromStr for UiAmount {
    type Err = AmountError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || AmountError::InvalidAmount(input.to_string());
        let trimmed = input.trim();

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(invalid());
        }

        let whole = if whole.is_empty() {
            0
        } else {
            whole.parse::<u128>().map_err(|_| invalid())?
        };

        Ok(UiAmount {
            whole,
            fraction: fraction.trim_end_matches('0').to_string(),
        })
    }
}

impl Display for UiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_empty() {
            write!(f, "{}", self.whole)
        } else {
            write!(f, "{}.{}", self.whole, self.fraction)
        }
    }
}

/// Scale `amount` against a mint with `decimals` decimal places.
pub fn scale(amount: &UiAmount, decimals: u8) -> Result<u64, AmountError> {
    amount.to_base_units(decimals)
}

/// Render base units back as a decimal string for summaries.
pub fn format_base_units(units: u64, decimals: u8) -> String {
    let digits = units.to_string();
    let decimals = decimals as usize;

    let (whole, fraction) = if digits.len() > decimals {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        (whole.to_string(), fraction.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = decimals))
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, fraction)
    }
}
