use chrono::{Datelike, NaiveDate};

use crate::models::Cell;

pub const DEFAULT_CURRENCY: &str = "$";

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Parse a statement amount. Text uses `.` for thousands and `,` for
/// decimals ("1.234,56"). Anything unparseable is 0.
pub fn parse_amount(cell: &Cell) -> f64 {
    match cell {
        Cell::Empty => 0.0,
        Cell::Number(n) => *n,
        Cell::Text(raw) => {
            let s = raw.replace('.', "").replacen(',', ".", 1);
            match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => 0.0,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Decode a spreadsheet date serial (1900 date system) into (year, month, day).
pub fn serial_date_parts(serial: f64) -> Option<(i32, u32, u32)> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let days = serial.floor() as i64;
    // Serial 60 is 1900-02-29, a date that never existed but Excel counts anyway.
    if days == 60 {
        return Some((1900, 2, 29));
    }
    let base = if days < 60 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let date = base.checked_add_signed(chrono::Duration::try_days(days)?)?;
    Some((date.year(), date.month(), date.day()))
}

/// Date cell as a display string: serials become `DD/MM/YYYY`, text passes
/// through untouched, empty cells give "".
pub fn parse_date(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Number(serial) => serial_date_parts(*serial)
            .map(|(y, m, d)| format!("{d:02}/{m:02}/{y:04}"))
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Two-decimal amount behind a currency marker: $1234.50, -$20.00
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    if amount < 0.0 && fixed != "0.00" {
        format!("-{symbol}{fixed}")
    } else {
        format!("{symbol}{fixed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_localized_text() {
        assert_eq!(parse_amount(&Cell::text("1.234,56")), 1234.56);
        assert_eq!(parse_amount(&Cell::text("1.000.000,00")), 1_000_000.0);
        assert_eq!(parse_amount(&Cell::text("100")), 100.0);
        assert_eq!(parse_amount(&Cell::text("  45,5 ")), 45.5);
        assert_eq!(parse_amount(&Cell::text("-12,30")), -12.3);
    }

    #[test]
    fn test_parse_amount_numbers_pass_through() {
        assert_eq!(parse_amount(&Cell::Number(42.0)), 42.0);
        assert_eq!(parse_amount(&Cell::Number(1234.56)), 1234.56);
    }

    #[test]
    fn test_parse_amount_fallbacks() {
        assert_eq!(parse_amount(&Cell::Empty), 0.0);
        assert_eq!(parse_amount(&Cell::text("")), 0.0);
        assert_eq!(parse_amount(&Cell::text("not_a_number")), 0.0);
        assert_eq!(parse_amount(&Cell::text("NaN")), 0.0);
        assert_eq!(parse_amount(&Cell::text("inf")), 0.0);
    }

    #[test]
    fn test_serial_date_parts() {
        assert_eq!(serial_date_parts(45667.0), Some((2025, 1, 10)));
        assert_eq!(serial_date_parts(45325.0), Some((2024, 2, 3)));
        assert_eq!(serial_date_parts(1.0), Some((1900, 1, 1)));
        assert_eq!(serial_date_parts(59.0), Some((1900, 2, 28)));
        assert_eq!(serial_date_parts(60.0), Some((1900, 2, 29)));
        assert_eq!(serial_date_parts(61.0), Some((1900, 3, 1)));
    }

    #[test]
    fn test_serial_date_parts_drops_time_of_day() {
        assert_eq!(serial_date_parts(45325.75), Some((2024, 2, 3)));
    }

    #[test]
    fn test_serial_date_parts_rejects_garbage() {
        assert_eq!(serial_date_parts(-1.0), None);
        assert_eq!(serial_date_parts(f64::NAN), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(&Cell::Number(45325.0)), "03/02/2024");
        assert_eq!(parse_date(&Cell::text("15/06/2024")), "15/06/2024");
        assert_eq!(parse_date(&Cell::text(" raw text ")), " raw text ");
        assert_eq!(parse_date(&Cell::Empty), "");
        assert_eq!(parse_date(&Cell::Number(-5.0)), "");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(DEFAULT_CURRENCY, 1234.5), "$1234.50");
        assert_eq!(format_currency(DEFAULT_CURRENCY, 0.0), "$0.00");
        assert_eq!(format_currency(DEFAULT_CURRENCY, -100.0), "-$100.00");
        assert_eq!(format_currency("€", 42.129), "€42.13");
        assert_eq!(format_currency("$", -0.001), "$0.00");
    }
}
