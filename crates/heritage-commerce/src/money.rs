//! Money type for representing monetary values.
//!
//! Uses an integer count of the currency's minor unit (fils for the Kuwaiti
//! dinar) to avoid floating-point drift when prices are multiplied and
//! summed.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies prices can be held in.
///
/// The storefront sells in dinars only; a persisted price in any other
/// code fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Kuwaiti dinar.
    #[default]
    KWD,
}

impl Currency {
    /// Get the currency code (e.g., "KWD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KWD => "KWD",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::KWD => 3,
        }
    }

    /// Number of minor units in one major unit (1000 fils per dinar).
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., fils).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Kuwaiti dinar amount from fils.
    pub fn kwd(fils: i64) -> Self {
        Self::new(fils, Currency::KWD)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use heritage_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(85.5, Currency::KWD);
    /// assert_eq!(price.amount_minor, 85_500);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_minor = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Parse a decimal string such as `"450"` or `"85.500"`.
    pub fn parse_decimal(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let amount: f64 = input
            .trim()
            .parse()
            .map_err(|_| CommerceError::InvalidAmount(input.to_string()))?;
        if !amount.is_finite() {
            return Err(CommerceError::InvalidAmount(input.to_string()));
        }
        Ok(Self::from_decimal(amount, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Format the amount with the currency's decimals (e.g., "450.000").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let per = self.currency.minor_per_major();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let whole = abs / per as u64;
        if places == 0 {
            return format!("{}{}", sign, whole);
        }
        let frac = abs % per as u64;
        format!("{}{}.{:0places$}", sign, whole, frac)
    }

    /// Format as "450.000 KWD".
    pub fn display(&self) -> String {
        self.display_with(self.currency.code())
    }

    /// Format with a caller-supplied currency label, e.g. a translated one.
    pub fn display_with(&self, label: &str) -> String {
        format!("{} {}", self.display_amount(), label)
    }

    /// Add, clamping at the representable range.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        )
    }

    /// Multiply by a quantity, clamping at the representable range.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
