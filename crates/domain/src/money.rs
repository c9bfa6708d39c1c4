//! Fixed-point money representation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Money amount represented in cents to avoid floating point issues.
///
/// Every amount carries exactly two implied fractional digits, so values
/// are always quantized and arithmetic between them has no rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

/// Error returned when a money string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money amount: {0:?}")]
pub struct ParseMoneyError(String);

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * i64::from(quantity),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents - rhs.cents,
        }
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses `"100"`, `"100.5"`, or `"100.50"` (at most two fractional
    /// digits), with an optional leading minus sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (dollars, fraction) = match body.split_once('.') {
            Some((d, f)) => (d, f),
            None => (body, ""),
        };
        if dollars.is_empty() || fraction.len() > 2 {
            return Err(err());
        }
        let dollars: i64 = dollars.parse().map_err(|_| err())?;
        let mut cents_part: i64 = 0;
        if !fraction.is_empty() {
            cents_part = fraction.parse().map_err(|_| err())?;
            if fraction.len() == 1 {
                cents_part *= 10;
            }
        }
        let cents = dollars * 100 + cents_part;
        Ok(Money::from_cents(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dollars_is_hundred_cents() {
        assert_eq!(Money::from_dollars(10), Money::from_cents(1000));
    }

    #[test]
    fn display_pads_two_digits() {
        assert_eq!(Money::from_cents(100_000).to_string(), "1000.00");
        assert_eq!(Money::from_cents(9005).to_string(), "90.05");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
    }

    #[test]
    fn arithmetic_is_exact() {
        let base = Money::from_cents(20_000);
        let discount = Money::from_cents(1_000);
        assert_eq!(base - discount, Money::from_cents(19_000));
        assert_eq!(discount + discount, Money::from_cents(2_000));
        assert_eq!(Money::from_cents(10_000).multiply(2), base);
    }

    #[test]
    fn min_picks_smaller_amount() {
        let a = Money::from_cents(1_000);
        let b = Money::from_cents(500);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn parses_common_forms() {
        assert_eq!("100".parse::<Money>().unwrap(), Money::from_cents(10_000));
        assert_eq!("100.5".parse::<Money>().unwrap(), Money::from_cents(10_050));
        assert_eq!(
            "100.50".parse::<Money>().unwrap(),
            Money::from_cents(10_050)
        );
        assert_eq!("-0.25".parse::<Money>().unwrap(), Money::from_cents(-25));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("10.123".parse::<Money>().is_err());
        assert!("ten".parse::<Money>().is_err());
        assert!("10.x".parse::<Money>().is_err());
    }

    #[test]
    fn serializes_as_raw_cents() {
        assert_eq!(
            serde_json::to_string(&Money::from_cents(1234)).unwrap(),
            "1234"
        );
    }
}
