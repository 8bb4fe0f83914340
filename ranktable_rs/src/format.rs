//! Number formatters.
//!
//! Formatting never fails outward: invalid input degrades to a safe default
//! string and a logged diagnostic.

use std::fmt::Write;

use tracing::{error, warn};

use crate::config::RenderConfig;
use crate::validators::is_positive_number;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Format a currency amount with K/M scaling.
///
/// ```
/// use ranktable::{RenderConfig, format::format_currency};
///
/// let config = RenderConfig::default();
/// assert_eq!(format_currency(1500.0, &config), "1.5K ₽");
/// ```
pub fn format_currency(amount: f64, config: &RenderConfig) -> String {
    if !is_positive_number(amount) {
        warn!(amount, "invalid amount for currency formatting");
        return format!("0 {}", config.currency_symbol);
    }

    match scaled_currency(amount, config) {
        Ok(formatted) => formatted,
        Err(err) => {
            error!(amount, error = %err, "currency formatting failed");
            format!("{} {}", amount, config.currency_symbol)
        }
    }
}

fn scaled_currency(amount: f64, config: &RenderConfig) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let symbol = &config.currency_symbol;

    if amount >= MILLION {
        let millions = format_decimal(amount / MILLION, config.decimal_places);
        write!(out, "{}{} {}", millions, config.million_suffix, symbol)?;
    } else if amount >= THOUSAND {
        let thousands = format_decimal(amount / THOUSAND, config.decimal_places);
        write!(out, "{}{} {}", thousands, config.thousand_suffix, symbol)?;
    } else {
        write!(out, "{} {}", amount.round(), symbol)?;
    }

    Ok(out)
}

/// Render `number` with exactly `places` fractional digits.
///
/// Rounds the exact binary value, so `4.35` (stored as `4.3499...`) gives
/// `4.3`. Values exactly halfway between two results round away from zero.
pub fn format_decimal(number: f64, places: usize) -> String {
    let value = if is_exact_tie(number, places) {
        // Next representable value away from zero
        f64::from_bits(number.to_bits() + 1)
    } else {
        number
    };
    // -0 prints as 0
    format!("{:.*}", places, value + 0.0)
}

/// True when `number` lies exactly halfway between two `places`-digit
/// decimals, i.e. `number * 10^places` has a fractional part of exactly 1/2.
fn is_exact_tie(number: f64, places: usize) -> bool {
    if !number.is_finite() || number == 0.0 {
        return false;
    }

    let bits = number.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    // number = odd * 2^exponent; times 10^places = odd * 5^places * 2^(exponent + places)
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    exponent + places as i64 == -1
}

/// Format a rating; invalid values become the configured default first.
pub fn format_rating(rating: f64, config: &RenderConfig) -> String {
    let valid = if is_positive_number(rating) {
        rating
    } else {
        config.default_rating
    };
    format_decimal(valid, config.decimal_places)
}
