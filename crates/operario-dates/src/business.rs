//! Brazilian business-day arithmetic.
//!
//! A business day is a weekday that is not a national holiday. Movable
//! holidays (Carnival, Good Friday, Corpus Christi) are derived from the
//! Easter date via the anonymous Gregorian computus.

use crate::DateError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Easter Sunday for `year` (anonymous Gregorian computus).
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).expect("computus yields a valid date")
}

/// Whether `date` is a Brazilian national holiday.
#[must_use]
pub fn is_national_holiday(date: NaiveDate) -> bool {
    let fixed = [
        (1, 1),   // Confraternização Universal
        (4, 21),  // Tiradentes
        (5, 1),   // Dia do Trabalho
        (9, 7),   // Independência
        (10, 12), // Nossa Senhora Aparecida
        (11, 2),  // Finados
        (11, 15), // Proclamação da República
        (12, 25), // Natal
    ];
    if fixed.contains(&(date.month(), date.day())) {
        return true;
    }

    let easter = easter_sunday(date.year());
    let movable = [
        easter - Duration::days(48), // Carnival Monday
        easter - Duration::days(47), // Carnival Tuesday
        easter - Duration::days(2),  // Good Friday
        easter + Duration::days(60), // Corpus Christi
    ];
    movable.contains(&date)
}

/// Whether `date` is a weekday and not a national holiday.
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !is_national_holiday(date)
}

/// The `ordinal`-th business day (1-based) of the given month.
pub fn nth_business_day(year: i32, month: u32, ordinal: u32) -> Result<NaiveDate, DateError> {
    if ordinal == 0 || !(1..=12).contains(&month) {
        return Err(DateError::NoSuchBusinessDay {
            year,
            month,
            ordinal,
        });
    }

    let mut counted = 0;
    for day in 1..=crate::months::days_in_month(year, month) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid day of month");
        if is_business_day(date) {
            counted += 1;
            if counted == ordinal {
                return Ok(date);
            }
        }
    }
    Err(DateError::NoSuchBusinessDay {
        year,
        month,
        ordinal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_easter_known_years() {
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026), date(2026, 4, 5));
    }

    #[test]
    fn test_fixed_holidays() {
        assert!(is_national_holiday(date(2024, 1, 1)));
        assert!(is_national_holiday(date(2024, 9, 7)));
        assert!(is_national_holiday(date(2024, 12, 25)));
        assert!(!is_national_holiday(date(2024, 3, 14)));
    }

    #[test]
    fn test_movable_holidays_2024() {
        // Carnival Monday/Tuesday, Good Friday, Corpus Christi
        assert!(is_national_holiday(date(2024, 2, 12)));
        assert!(is_national_holiday(date(2024, 2, 13)));
        assert!(is_national_holiday(date(2024, 3, 29)));
        assert!(is_national_holiday(date(2024, 5, 30)));
    }

    #[test]
    fn test_weekends_are_not_business_days() {
        assert!(!is_business_day(date(2024, 6, 1))); // Saturday
        assert!(!is_business_day(date(2024, 6, 2))); // Sunday
        assert!(is_business_day(date(2024, 6, 3))); // Monday
    }

    #[test]
    fn test_nth_business_day_skips_new_year() {
        // 01/01/2024 is a Monday holiday, so the first business day is the 2nd
        assert_eq!(
            nth_business_day(2024, 1, 1).expect("first business day"),
            date(2024, 1, 2)
        );
        assert_eq!(
            nth_business_day(2024, 1, 5).expect("fifth business day"),
            date(2024, 1, 8)
        );
    }

    #[test]
    fn test_nth_business_day_out_of_range() {
        assert!(matches!(
            nth_business_day(2024, 1, 0).expect_err("zero ordinal"),
            DateError::NoSuchBusinessDay { .. }
        ));
        assert!(matches!(
            nth_business_day(2024, 1, 25).expect_err("too many"),
            DateError::NoSuchBusinessDay { .. }
        ));
    }
}
