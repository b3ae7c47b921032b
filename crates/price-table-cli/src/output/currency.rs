//! Monetary display formatting. The engine works in raw `f64` and never
//! rounds; everything user-facing goes through here instead.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Format an amount with the Brazilian convention: `R$ 1.234,56`
/// (thousands `.`, decimal `,`, fixed 2 fractional digits).
///
/// Non-finite or out-of-range values fall through unformatted so a broken
/// schedule stays visible instead of panicking the formatter.
pub fn format_currency(value: f64) -> String {
    let Some(amount) = Decimal::from_f64(value) else {
        return format!("R$ {value}");
    };

    let mut amount = amount.round_dp(2);
    amount.rescale(2);

    let text = amount.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    format!("R$ {sign}{},{frac_part}", group_thousands(int_part))
}

/// Format a periodic rate as entered by the user, e.g. `1% a.m.`
pub fn format_rate(rate_percent: f64) -> String {
    format!("{rate_percent}% a.m.")
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, b) in bytes.iter().enumerate() {
        if idx > 0 && (bytes.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_amounts() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(100.0), "R$ 100,00");
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
    }

    #[test]
    fn groups_thousands_recursively() {
        assert_eq!(format_currency(10000.0), "R$ 10.000,00");
        assert_eq!(format_currency(1234567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_currency(-1234.56), "R$ -1.234,56");
    }

    #[test]
    fn rounds_to_two_digits_for_display() {
        assert_eq!(format_currency(888.4878867834), "R$ 888,49");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_currency(f64::NAN), "R$ NaN");
        assert_eq!(format_currency(f64::INFINITY), "R$ inf");
    }

    #[test]
    fn rate_echoes_user_entry() {
        assert_eq!(format_rate(1.0), "1% a.m.");
        assert_eq!(format_rate(2.5), "2.5% a.m.");
    }
}
