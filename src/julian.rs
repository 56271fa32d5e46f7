//! Solar-calendar arithmetic over Julian day numbers.

use crate::consts::{
    BASE_SOLAR_YEAR, CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_REFORM_JDN, LEAP_YEAR_CYCLE, MAX_MONTH,
};

pub(crate) const fn is_solar_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_solar_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_solar_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days elapsed from solar 1900-01-01 to the given solar date.
///
/// Whole years first, then whole months, then the day of month. The leap-year
/// count needs no century correction inside 1900..=2049: 1900 itself is no
/// leap year (excluded by the `- 1`) and 2000 is one.
pub(crate) fn solar_days_since_base(year: u16, month: u8, day: u8) -> i64 {
    let year_delta = i64::from(year) - i64::from(BASE_SOLAR_YEAR);
    let leap_years = (year_delta - 1) / 4;
    let plain_years = year_delta - leap_years;
    let mut days = plain_years * 365 + leap_years * 366;

    for m in 1..month {
        days += i64::from(days_in_solar_month(year, m));
    }

    days + i64::from(day) - 1
}

/// Converts a Julian day number to a civil (year, month, day).
///
/// Closed-form transform from Numerical Recipes in C, 2nd ed. (Cambridge
/// University Press, 1992). Dates on or after the Gregorian adoption day
/// receive the century correction first; the branch point must stay at
/// exactly [`GREGORIAN_REFORM_JDN`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn julian_to_solar(jdn: i64) -> (u16, u8, u8) {
    let mut ja = jdn;
    if ja >= GREGORIAN_REFORM_JDN {
        let alpha = (((ja - 1_867_216) as f64 - 0.25) / 36524.25) as i64;
        ja = ja + 1 + alpha - alpha / 4;
    }

    let jb = ja + 1524;
    let jc = (6680.0 + ((jb - 2_439_870) as f64 - 122.1) / 365.25) as i64;
    let jd = 365 * jc + jc / 4;
    let je = ((jb - jd) as f64 / 30.6001) as i64;

    let day = jb - jd - (30.6001 * je as f64) as i64;

    let mut month = je - 1;
    if month > 12 {
        month -= 12;
    }

    let mut year = jc - 4715;
    if month > 2 {
        year -= 1;
    }

    (year as u16, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SOLAR_BASE_JDN;

    #[test]
    fn test_days_since_base() {
        assert_eq!(0, solar_days_since_base(1900, 1, 1));
        assert_eq!(30, solar_days_since_base(1900, 1, 31));
        assert_eq!(31, solar_days_since_base(1900, 2, 1));
        // 1900 is not a leap year, 1904 is.
        assert_eq!(365, solar_days_since_base(1901, 1, 1));
        assert_eq!(365 * 4, solar_days_since_base(1904, 1, 1));
        assert_eq!(365 * 4 + 366, solar_days_since_base(1905, 1, 1));
        // 2000-01-01 is JDN 2451545.
        assert_eq!(
            2_451_545,
            solar_days_since_base(2000, 1, 1) + SOLAR_BASE_JDN
        );
    }

    #[test]
    fn test_julian_to_solar_roundtrips_epochs() {
        assert_eq!((1900, 1, 1), julian_to_solar(2_415_021));
        assert_eq!((1900, 1, 31), julian_to_solar(2_415_051));
        assert_eq!((2000, 1, 1), julian_to_solar(2_451_545));
        assert_eq!((2049, 12, 31), julian_to_solar(2_469_807));
        // Just past the last solar year; reachable from late lunar 2049.
        assert_eq!((2050, 1, 22), julian_to_solar(2_469_829));
    }

    #[test]
    fn test_julian_to_solar_reform_boundary() {
        assert_eq!((1582, 10, 15), julian_to_solar(GREGORIAN_REFORM_JDN));
        assert_eq!((1582, 10, 4), julian_to_solar(GREGORIAN_REFORM_JDN - 1));
    }

    #[test]
    fn test_julian_to_solar_inverts_days_since_base() {
        for (y, m, d) in [
            (1900, 2, 1),
            (1956, 2, 29),
            (1999, 12, 31),
            (2000, 2, 29),
            (2020, 5, 25),
            (2049, 12, 31),
        ] {
            let jdn = solar_days_since_base(y, m, d) + SOLAR_BASE_JDN;
            assert_eq!((y, m, d), julian_to_solar(jdn), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_is_solar_leap_year() {
        assert!(is_solar_leap_year(1904));
        assert!(is_solar_leap_year(2000));
        assert!(is_solar_leap_year(2048));
        assert!(!is_solar_leap_year(1900));
        assert!(!is_solar_leap_year(1901));
        assert!(!is_solar_leap_year(2019));
    }

    #[test]
    fn test_days_in_solar_month() {
        assert_eq!(31, days_in_solar_month(2020, 1));
        assert_eq!(29, days_in_solar_month(2020, 2));
        assert_eq!(28, days_in_solar_month(2021, 2));
        assert_eq!(28, days_in_solar_month(1900, 2));
        assert_eq!(30, days_in_solar_month(2020, 11));
    }
}
