//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so repeated aggregation never
//! drifts. Amounts cross the JSON boundary as plain decimal numbers
//! (`12.5`), never as strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest decimal magnitude accepted by [`Money::from_decimal`] and [`Money::parse`]
const MAX_DECIMAL: f64 = 90_000_000_000_000.0;

/// [`MAX_DECIMAL`] in cents
const MAX_CENTS: i64 = 9_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendpace::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal number, rounding to the nearest cent
    ///
    /// Rejects NaN, infinities and magnitudes that would overflow the cent
    /// representation.
    ///
    /// # Examples
    /// ```
    /// use spendpace::models::Money;
    /// assert_eq!(Money::from_decimal(12.5).unwrap().cents(), 1250);
    /// assert!(Money::from_decimal(f64::NAN).is_err());
    /// ```
    pub fn from_decimal(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NonFinite);
        }
        if value.abs() > MAX_DECIMAL {
            return Err(MoneyParseError::OutOfRange(value));
        }
        Ok(Self((value * 100.0).round() as i64))
    }

    /// Whether the amount is within the range accepted from user input
    ///
    /// Arithmetic on in-range amounts stays far from `i64` limits; out-of-range
    /// amounts only arise from [`Money::from_cents`].
    pub const fn is_within_range(&self) -> bool {
        self.0 >= -MAX_CENTS && self.0 <= MAX_CENTS
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number, for serialization and ratios
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamp negative amounts to zero
    pub fn clamp_non_negative(self) -> Self {
        Self(self.0.max(0))
    }

    /// Multiply by a whole count (e.g. a per-day ceiling times a day count)
    pub fn times(self, count: i64) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Divide evenly into `parts`, rounding half away from zero
    ///
    /// Returns zero when `parts` is not positive.
    pub fn divide(self, parts: i64) -> Self {
        if parts <= 0 {
            return Self::zero();
        }
        Self(div_round(self.0 as i128, parts as i128) as i64)
    }

    /// Multiply by `numerator / denominator`, rounding half away from zero
    ///
    /// Returns zero when `denominator` is not positive.
    pub fn mul_ratio(self, numerator: i64, denominator: i64) -> Self {
        if denominator <= 0 {
            return Self::zero();
        }
        Self(div_round(
            self.0 as i128 * numerator as i128,
            denominator as i128,
        ) as i64)
    }

    /// Multiply by a decimal factor, rounding to the nearest cent
    pub fn scale(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }

    /// `self` as a percentage of `whole`, rounded to one decimal place
    ///
    /// Zero when `whole` is not positive.
    pub fn percent_of(self, whole: Money) -> f64 {
        if !whole.is_positive() {
            return 0.0;
        }
        round_tenth(self.0 as f64 / whole.0 as f64 * 100.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "10", ".75" and thousands
    /// separators ("1,200.00"). At most two decimal places.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let digits = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");
        let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let well_formed = !(whole.is_empty() && frac.is_empty())
            && frac.len() <= 2
            && whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        // Digits only at this point, so a failed parse means overflow
        let out_of_range = || MoneyParseError::OutOfRange(whole.parse::<f64>().unwrap_or(f64::MAX));
        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|total| *total <= MAX_CENTS)
            .ok_or_else(out_of_range)?;
        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

/// Round to one decimal place, halves away from zero
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn div_round(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.abs() * 2 >= denominator.abs() {
        quotient + numerator.signum() * denominator.signum()
    } else {
        quotient
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NonFinite,
    OutOfRange(f64),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NonFinite => write!(f, "Amount must be a finite number"),
            MoneyParseError::OutOfRange(v) => write!(f, "Amount out of range: {}", v),
        }
    }
}

impl std::error::Error for MoneyParseError {}
