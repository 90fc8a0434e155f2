//! Monetary values.
//!
//! Amounts are stored in the smallest unit of their currency (cents for
//! USD) as signed integers, so price math never touches floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Currencies the storefront can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Display symbol, e.g. "$".
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Decimal places of the minor unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse an ISO code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g. cents).
    pub amount_cents: i64,
    /// The currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Create a value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a value from a decimal major-unit amount.
    ///
    /// ```
    /// use stride_commerce::money::{Currency, Money};
    /// assert_eq!(Money::from_decimal(129.99, Currency::USD).amount_cents, 12999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let scale = 10_i64.pow(currency.decimal_places());
        Self::new((amount * scale as f64).round() as i64, currency)
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Decimal major-unit value, for display only.
    pub fn to_decimal(&self) -> f64 {
        let scale = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / scale as f64
    }

    /// Format with symbol, e.g. "$129.99".
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Add, returning `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(sum, self.currency))
    }

    /// Subtract, returning `None` on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let diff = self.amount_cents.checked_sub(other.amount_cents)?;
        Some(Money::new(diff, self.currency))
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let product = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(product, self.currency))
    }

    /// Sum an iterator of amounts in `currency`.
    ///
    /// Returns `None` if any amount carries a different currency or the
    /// running total overflows.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_add` for
    /// fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other)
            .expect("currency mismatch or overflow in Money addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_subtract` for
    /// fallible subtraction.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("currency mismatch or overflow in Money subtraction")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        let m = Money::from_decimal(129.99, Currency::USD);
        assert_eq!(m.amount_cents, 12999);

        // JPY has no minor unit
        let m = Money::from_decimal(5000.0, Currency::JPY);
        assert_eq!(m.amount_cents, 5000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(12999, Currency::USD).display(), "$129.99");
        assert_eq!(Money::new(5000, Currency::JPY).display(), "\u{00a5}5000");
    }

    #[test]
    fn test_try_add_and_subtract() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(250, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap().amount_cents, 1250);
        assert_eq!(a.try_subtract(&b).unwrap().amount_cents, 750);
    }

    #[test]
    fn test_currency_mismatch_is_none() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
        assert!(usd.try_subtract(&eur).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert!(m.try_multiply(2).is_none());
        assert_eq!(m.try_multiply(1).unwrap().amount_cents, i64::MAX);
    }

    #[test]
    fn test_try_sum() {
        let items = vec![
            Money::new(1000, Currency::USD),
            Money::new(2500, Currency::USD),
        ];
        let total = Money::try_sum(items.iter(), Currency::USD).unwrap();
        assert_eq!(total.amount_cents, 3500);

        let mixed = vec![
            Money::new(1000, Currency::USD),
            Money::new(1000, Currency::EUR),
        ];
        assert!(Money::try_sum(mixed.iter(), Currency::USD).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("GBP"), Some(Currency::GBP));
        assert_eq!(Currency::from_code("XXX"), None);
    }
}
