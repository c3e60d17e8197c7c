//! Fixed-point currency amount with 2 decimal places.
//!
//! Uses `rust_decimal` at the input and output boundary so amounts read
//! from text and written to reports are exact to the cent. The projection
//! itself runs on `f64`.

use log::warn;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A currency amount rounded to whole cents.
///
/// Parses Brazilian-formatted text such as `R$ 1.234,56`, where `.`
/// separates thousands and `,` marks the decimals.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use wealth_projection::Money;
///
/// let amount = Money::from_str("R$ 1.234,5").unwrap();
/// assert_eq!(amount.to_string(), "1234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money`, rounding half away from zero to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        Money(rounded)
    }

    /// Converts an engine amount.
    ///
    /// Returns `None` for non-finite values and for amounts beyond the
    /// `Decimal` range (about 7.9e28).
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).map(Money::new)
    }

    /// Converts to the engine's floating-point representation.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parses user-typed currency text, falling back to zero.
    ///
    /// Reads the longest numeric prefix after normalisation, so trailing
    /// junk is ignored. Text with no leading number, or a negative
    /// amount, yields zero.
    pub fn parse_lenient(input: &str) -> Self {
        let normalized = normalize(input);
        let prefix = numeric_prefix(&normalized);

        match Decimal::from_str(prefix) {
            Ok(value) if value.is_sign_negative() && !value.is_zero() => {
                warn!("Negative amount '{}' treated as zero", input.trim());
                Money::ZERO
            }
            Ok(value) => Money::new(value),
            Err(_) => {
                if !input.trim().is_empty() {
                    warn!("Unparsable amount '{}' treated as zero", input.trim());
                }
                Money::ZERO
            }
        }
    }
}

/// Strips the currency symbol, whitespace and thousands separators, then
/// turns the decimal comma into a dot.
fn normalize(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
        .collect();
    stripped.replacen(',', ".", 1)
}

/// Longest `[-]digits[.digits]` prefix of `s`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return "";
    }

    let mut end = sign + digits;
    if bytes.get(end) == Some(&b'.') {
        let fraction = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    &s[..end]
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    /// Strict parse: the whole normalised text must be a number.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(&normalize(s))?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}
