//! Log-price transform and price formatting

use serde::Serialize;
use std::fmt;

/// The model is trained on ln(price); undo it.
pub fn to_price(raw_output: f64) -> f64 {
    raw_output.exp()
}

/// Predicted price in Colombian pesos
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Price(f64);

impl Price {
    /// Wrap a value; `None` unless it is finite and strictly positive
    pub fn new(cop: f64) -> Option<Self> {
        (cop.is_finite() && cop > 0.0).then_some(Self(cop))
    }

    pub fn cop(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    /// Two decimals with comma thousands separators, e.g. `1,234,567.89 COP`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.0);
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "{}.{} COP", grouped, cents)
    }
}
