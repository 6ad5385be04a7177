//! Conversions between `Mes/AAAA` strings and `dd/mm/yyyy` dates.

use crate::DateError;
use chrono::NaiveDate;

/// Full Portuguese month names, January first.
pub const MONTHS_FULL: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// Three-letter Portuguese abbreviations, January first.
pub const MONTHS_ABBREV: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Full month name for a 1-based month number.
pub fn month_name(month: u32) -> Result<&'static str, DateError> {
    if (1..=12).contains(&month) {
        Ok(MONTHS_FULL[(month - 1) as usize])
    } else {
        Err(DateError::InvalidMonthNumber(month))
    }
}

/// 1-based month number for a Portuguese abbreviation (case-insensitive).
pub fn month_number(abbrev: &str) -> Result<u32, DateError> {
    MONTHS_ABBREV
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbrev.trim()))
        .map(|i| (i + 1) as u32)
        .ok_or_else(|| DateError::UnknownMonth(abbrev.to_string()))
}

/// Split a `Mes/AAAA` string into (year, month number).
fn parse_month_year(date: &str) -> Result<(i32, u32), DateError> {
    let mut parts = date.splitn(2, '/');
    let (Some(month_part), Some(year_part)) = (parts.next(), parts.next()) else {
        return Err(DateError::InvalidFormat(date.to_string()));
    };
    let month = month_number(month_part)?;
    let year: i32 = year_part
        .trim()
        .parse()
        .map_err(|_| DateError::InvalidFormat(date.to_string()))?;
    Ok((year, month))
}

/// `"Jan/2024"` → `"01/01/2024"`.
pub fn first_day_of_month(date: &str) -> Result<String, DateError> {
    let (year, month) = parse_month_year(date)?;
    Ok(format!("01/{month:02}/{year}"))
}

/// `"Jan/2024"` → `"31/01/2024"` (month-length and leap-year aware).
pub fn last_day_of_month(date: &str) -> Result<String, DateError> {
    let (year, month) = parse_month_year(date)?;
    let last = days_in_month(year, month);
    Ok(format!("{last:02}/{month:02}/{year}"))
}

/// `"Jan/2024"` → `(2024, "Janeiro")`.
pub fn year_and_month_name(date: &str) -> Result<(i32, &'static str), DateError> {
    let (year, month) = parse_month_year(date)?;
    Ok((year, month_name(month)?))
}

/// `"Jan/2024"` → `"Janeiro/2024"`.
pub fn expand_month_name(date: &str) -> Result<String, DateError> {
    let (year, month) = parse_month_year(date)?;
    Ok(format!("{}/{year}", month_name(month)?))
}

/// Number of days in the given month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month already validated");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid first of next month");
    next.signed_duration_since(first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(first_day_of_month("Jan/2024").expect("convert"), "01/01/2024");
        assert_eq!(first_day_of_month("dez/2023").expect("convert"), "01/12/2023");
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month("Jan/2024").expect("convert"), "31/01/2024");
        assert_eq!(last_day_of_month("Abr/2024").expect("convert"), "30/04/2024");
        // 2024 is a leap year
        assert_eq!(last_day_of_month("Fev/2024").expect("convert"), "29/02/2024");
        assert_eq!(last_day_of_month("Fev/2023").expect("convert"), "28/02/2023");
    }

    #[test]
    fn test_year_and_month_name() {
        assert_eq!(
            year_and_month_name("Jan/2024").expect("convert"),
            (2024, "Janeiro")
        );
    }

    #[test]
    fn test_expand_month_name() {
        assert_eq!(expand_month_name("Jan/2024").expect("convert"), "Janeiro/2024");
        assert_eq!(expand_month_name("Mar/2025").expect("convert"), "Março/2025");
    }

    #[test]
    fn test_month_number_round_trip() {
        for (i, abbrev) in MONTHS_ABBREV.iter().enumerate() {
            let number = month_number(abbrev).expect("known abbreviation");
            assert_eq!(number, (i + 1) as u32);
            assert_eq!(month_name(number).expect("valid number"), MONTHS_FULL[i]);
        }
    }

    #[test]
    fn test_unknown_abbreviation() {
        assert_eq!(
            month_number("Foo").expect_err("unknown month"),
            DateError::UnknownMonth("Foo".to_string())
        );
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            first_day_of_month("Janeiro2024").expect_err("no slash"),
            DateError::InvalidFormat(_)
        ));
        assert!(matches!(
            first_day_of_month("Jan/abcd").expect_err("bad year"),
            DateError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_invalid_month_number() {
        assert_eq!(
            month_name(0).expect_err("zero"),
            DateError::InvalidMonthNumber(0)
        );
        assert_eq!(
            month_name(13).expect_err("thirteen"),
            DateError::InvalidMonthNumber(13)
        );
    }
}
