//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (hundredths, i64) to avoid
//! floating-point drift when summing many meal prices. On disk an amount is a
//! plain JSON number in major units (`50`, `52.5`).
//!
//! Amounts coming from text or JSON are limited to [`Money::MAX`] in size, and
//! arithmetic saturates instead of overflowing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};

/// Symbol used by the `Display` impl
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from input or storage (one trillion units)
    pub const MAX: Money = Money(100_000_000_000_000);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use tiffin::models::Money;
    /// let amount = Money::from_minor(5050); // 50.50
    /// assert_eq!(amount.whole_units(), 50);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_whole(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a major-unit float, rounded to two places
    /// and limited to `-MAX..=MAX`
    pub fn from_major_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::zero();
        }
        let limit = Self::MAX.0 as f64;
        Self((value * 100.0).round().clamp(-limit, limit) as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn whole_units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn fraction_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Negative amounts become zero
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            self
        }
    }

    /// Amount in major units as a float
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Format with a currency symbol and two decimals (`₹52.50`, `-₹10.00`)
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.whole_units().abs(),
            self.fraction_part()
        )
    }

    /// Format with a currency symbol and no trailing zeros (`₹50`, `₹52.5`)
    pub fn format_compact(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.compact_number())
    }

    /// Unsigned major-unit digits without trailing fractional zeros
    fn compact_number(&self) -> String {
        let whole = self.whole_units().abs();
        let fraction = self.fraction_part();
        if fraction == 0 {
            whole.to_string()
        } else if fraction % 10 == 0 {
            format!("{}.{}", whole, fraction / 10)
        } else {
            format!("{}.{:02}", whole, fraction)
        }
    }

    /// Plain decimal representation used by the `advance` storage slice
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}", sign, self.compact_number())
    }
}

/// Parse user input into a non-negative amount
///
/// Leniently reads the leading number of `input` (digits, an optional
/// fraction, an optional exponent) after trimming whitespace and any leading
/// currency symbol. Empty or non-numeric input yields zero, negative input is
/// clamped to zero, and the result is rounded to two decimal places and
/// capped at [`Money::MAX`].
///
/// ```
/// use tiffin::models::{parse_non_negative_amount, Money};
/// assert_eq!(parse_non_negative_amount("50"), Money::from_whole(50));
/// assert_eq!(parse_non_negative_amount("12abc"), Money::from_whole(12));
/// assert_eq!(parse_non_negative_amount("1e3"), Money::from_whole(1000));
/// assert_eq!(parse_non_negative_amount("abc"), Money::zero());
/// assert_eq!(parse_non_negative_amount("-5"), Money::zero());
/// ```
pub fn parse_non_negative_amount(input: &str) -> Money {
    let s = input
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii() || c == '$')
        .trim_start();

    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return Money::zero();
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    let value: f64 = s[..end].parse().unwrap_or(0.0);
    if value.is_nan() || value <= 0.0 {
        return Money::zero();
    }

    Money::from_major_f64(value)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_major_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        Ok(Money::from_major_f64(value))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
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
