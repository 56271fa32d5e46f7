//! Date conversion between the Gregorian calendar and the Korean
//! traditional lunisolar calendar, backed by the official tables published
//! by the Korea Astronomy and Space Science Institute.
//!
//! Many parts of the Korean lunisolar calendar match the Chinese Shixian
//! calendar, but the month-length data differs in places, and the difference
//! does not accumulate over short ranges - so the tables are looked up, not
//! computed from an astronomical model. Accepted date range:
//!
//! |      | Gregorian  | Lunisolar  |
//! |------|------------|------------|
//! | From | 1900-01-31 | 1900-01-01 |
//! | To   | 2049-12-31 | 2049-12-29 |
//!
//! Every operation is a pure function over constant tables; there is no
//! shared state and conversions may run from any number of threads.
//!
//! # Examples
//!
//! ```
//! use korean_lunar::{Script, Weekday, lunar_date_of};
//!
//! let date = lunar_date_of(2000, 1, 1)?;
//!
//! assert_eq!((1999, 11, 25), (date.lun_year, date.lun_month, date.lun_day));
//! assert!(!date.lun_leap_month);
//! assert_eq!(2_451_545, date.julian_day);
//! assert_eq!(Weekday::Saturday, date.sol_weekday);
//! assert_eq!("己卯", date.yearly_label(Script::Chinese));
//! # Ok::<(), korean_lunar::DateError>(())
//! ```
//!
//! And back, including leap months (lunar 2020 repeats month 4):
//!
//! ```
//! use korean_lunar::solar_date_of;
//!
//! let regular = solar_date_of(2020, 4, 1, false)?;
//! let leap = solar_date_of(2020, 4, 1, true)?;
//!
//! assert_eq!((2020, 4, 23), (regular.sol_year, regular.sol_month, regular.sol_day));
//! assert_eq!((2020, 5, 23), (leap.sol_year, leap.sol_month, leap.sol_day));
//! assert_eq!(0, leap.monthly_cycle);
//! # Ok::<(), korean_lunar::DateError>(())
//! ```

mod consts;
mod cycle;
mod julian;
mod prelude;
mod tables;
mod types;

pub use consts::*;
pub use cycle::{Script, earthly_branch, heavenly_stem, sexagenary_label};
pub use types::{KoreanLunarDate, Weekday};

/// Error type for date conversion: a conversion either yields a fully
/// populated [`KoreanLunarDate`] or one of these rejections, never a
/// partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the table coverage.
    #[error("year {year} is out of range ({min}..={max})")]
    YearOutOfRange { year: u16, min: u16, max: u16 },

    /// Solar date inside January 1900, before the first covered lunar day.
    #[error("solar date {year:04}-{month:02}-{day:02} is before the first covered day, 1900-01-31")]
    BeforeSolarCoverage { year: u16, month: u8, day: u8 },

    /// Month outside 1..=12.
    #[error("month {month} is out of range (1..={MAX_MONTH})")]
    MonthOutOfRange { month: u8 },

    /// Day outside the true length of the (solar or lunar) month; `max` is
    /// that resolved length, leap months included.
    #[error("day {day} is out of range (1..={max}) for {year:04}-{month:02}")]
    DayOutOfRange { year: u16, month: u8, day: u8, max: u8 },
}

/// Calculates the lunar date of a solar (Gregorian) date.
///
/// The date must be between 1900-01-31 and 2049-12-31; note that January
/// 1900 before the 31st is rejected because the lunar tables begin one
/// month later than the solar base date.
///
/// # Example
///
/// ```
/// use korean_lunar::lunar_date_of;
///
/// let date = lunar_date_of(2020, 6, 25)?;
/// assert_eq!((2020, 5, 5), (date.lun_year, date.lun_month, date.lun_day));
/// # Ok::<(), korean_lunar::DateError>(())
/// ```
///
/// # Errors
///
/// Returns a [`DateError`] if any date component is out of range.
pub fn lunar_date_of(
    solar_year: u16,
    solar_month: u8,
    solar_day: u8,
) -> Result<KoreanLunarDate, DateError> {
    check_solar_bounds(solar_year, solar_month, solar_day)?;

    let mut days_left = julian::solar_days_since_base(solar_year, solar_month, solar_day);
    let julian_day = days_left + SOLAR_BASE_JDN;
    days_left -= EPOCH_GAP_DAYS;

    let lun_year = tables::year_of_offset(days_left);
    days_left -= tables::year_base_offset(lun_year);

    // Walk forward month by month. When the walk reaches the year's leap
    // month it passes that month number twice: the regular pass increments
    // the month counter, the leap pass only toggles the flag.
    let leap_month = tables::leap_month(lun_year);
    let mut lun_month: u8 = 1;
    let mut days_of_month = i64::from(resolve_month_days(lun_year, lun_month, false));
    let mut leap_month_passed = false;
    let mut in_leap_month = false;

    while days_left >= days_of_month {
        if lun_month == leap_month {
            if in_leap_month {
                in_leap_month = false;
            } else {
                leap_month_passed = true;
                in_leap_month = true;
            }
        }

        if !in_leap_month {
            lun_month += 1;
        }

        days_left -= days_of_month;
        days_of_month = i64::from(resolve_month_days(lun_year, lun_month, in_leap_month));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lun_day = (days_left + 1) as u8;
    let lun_leap_month = leap_month_passed && lun_month == leap_month;

    Ok(assemble(
        solar_year,
        solar_month,
        solar_day,
        julian_day,
        lun_year,
        lun_month,
        lun_day,
        lun_leap_month,
    ))
}

/// Calculates the solar (Gregorian) date of a lunar date.
///
/// The lunar date must be between 1900-01-01 and the last day the tables
/// cover, lunar 2049-12-29. Since lunar month lengths vary, check
/// [`days_of_lunar_month`] before passing a day on the edge of a month
/// (29 or 30).
///
/// `is_leap_month` is ignored when the month is not actually the leap month
/// of that year: lunar 2000 holds no leap month, so
/// `solar_date_of(2000, 1, 1, true)` equals `solar_date_of(2000, 1, 1, false)`.
/// For a genuine leap month such as lunar 2020-04 the flag is significant.
///
/// # Errors
///
/// Returns a [`DateError`] if any date component is out of range.
pub fn solar_date_of(
    lunar_year: u16,
    lunar_month: u8,
    lunar_day: u8,
    is_leap_month: bool,
) -> Result<KoreanLunarDate, DateError> {
    check_lunar_bounds(lunar_year, lunar_month, lunar_day, is_leap_month)?;

    let leap_month = tables::leap_month(lunar_year);
    let in_leap_month = is_leap_month && leap_month == lunar_month;

    let mut days = tables::year_base_offset(lunar_year);
    for month in 1..lunar_month {
        days += i64::from(resolve_month_days(lunar_year, month, false));
    }

    // The leap month immediately follows its regular counterpart, so the
    // regular month's full length comes first.
    if in_leap_month {
        days += i64::from(resolve_month_days(lunar_year, lunar_month, false));
    }

    // Months past the leap month must account for the inserted month, which
    // the 1..lunar_month walk above never includes.
    if leap_month != 0 && lunar_month > leap_month {
        days += i64::from(resolve_month_days(lunar_year, leap_month, true));
    }

    days += i64::from(lunar_day) - 1;

    let julian_day = days + LUNAR_BASE_JDN;
    let (sol_year, sol_month, sol_day) = julian::julian_to_solar(julian_day);

    Ok(assemble(
        sol_year,
        sol_month,
        sol_day,
        julian_day,
        lunar_year,
        lunar_month,
        lunar_day,
        in_leap_month,
    ))
}

/// The leap month of a lunar year, or 0 if the year has none.
///
/// # Example
///
/// ```
/// use korean_lunar::leap_month_of;
///
/// assert_eq!(4, leap_month_of(2020)?);
/// assert_eq!(0, leap_month_of(2000)?);
/// # Ok::<(), korean_lunar::DateError>(())
/// ```
///
/// # Errors
///
/// Returns [`DateError::YearOutOfRange`] for years outside 1900..=2049.
pub fn leap_month_of(lunar_year: u16) -> Result<u8, DateError> {
    check_lunar_year(lunar_year)?;
    Ok(tables::leap_month(lunar_year))
}

/// The day count of a lunar month, 29 or 30.
///
/// `is_leap_month` is ignored when the month is not actually the leap month
/// of that year.
///
/// # Example
///
/// ```
/// use korean_lunar::days_of_lunar_month;
///
/// assert_eq!(29, days_of_lunar_month(1906, 4, false)?);
/// assert_eq!(30, days_of_lunar_month(1906, 4, true)?); // long leap month
/// # Ok::<(), korean_lunar::DateError>(())
/// ```
///
/// # Errors
///
/// Returns a [`DateError`] if the year or month is out of range.
pub fn days_of_lunar_month(
    lunar_year: u16,
    lunar_month: u8,
    is_leap_month: bool,
) -> Result<u8, DateError> {
    check_lunar_year(lunar_year)?;
    check_month(lunar_month)?;
    Ok(resolve_month_days(lunar_year, lunar_month, is_leap_month))
}

/// Resolves the length of a lunar month from the packed tables. A leap flag
/// on a month that is not the year's leap month is treated as false; this
/// tolerance is deliberate, so callers at leap-month boundaries need not
/// pre-check [`leap_month_of`]. Arguments must already be validated.
fn resolve_month_days(lunar_year: u16, lunar_month: u8, is_leap_month: bool) -> u8 {
    let long = if is_leap_month && tables::leap_month(lunar_year) == lunar_month {
        tables::is_long_leap_month(lunar_year)
    } else {
        tables::is_long_month(lunar_year, lunar_month)
    };

    if long {
        LONG_LUNAR_MONTH_DAYS
    } else {
        SHORT_LUNAR_MONTH_DAYS
    }
}

/// Builds the fully populated result value; the single construction point
/// for [`KoreanLunarDate`].
#[allow(clippy::too_many_arguments, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn assemble(
    sol_year: u16,
    sol_month: u8,
    sol_day: u8,
    julian_day: i64,
    lun_year: u16,
    lun_month: u8,
    lun_day: u8,
    lun_leap_month: bool,
) -> KoreanLunarDate {
    let monthly_cycle = if lun_leap_month {
        0
    } else {
        cycle::monthly_cycle(lun_year, lun_month)
    };

    KoreanLunarDate {
        sol_year,
        sol_month,
        sol_day,
        sol_weekday: Weekday::from_jdn(julian_day),
        sol_leap_year: julian::is_solar_leap_year(sol_year),
        julian_day: julian_day as u32,
        lun_year,
        lun_month,
        lun_day,
        lun_leap_month,
        lun_days_in_month: resolve_month_days(lun_year, lun_month, lun_leap_month),
        daily_cycle: cycle::daily_cycle(julian_day),
        monthly_cycle,
        yearly_cycle: cycle::yearly_cycle(lun_year),
    }
}

fn check_solar_bounds(year: u16, month: u8, day: u8) -> Result<(), DateError> {
    if !(BASE_SOLAR_YEAR..=END_SOLAR_YEAR).contains(&year) {
        return Err(DateError::YearOutOfRange {
            year,
            min: BASE_SOLAR_YEAR,
            max: END_SOLAR_YEAR,
        });
    }

    if year == BASE_SOLAR_YEAR && month == JANUARY && day < 31 {
        return Err(DateError::BeforeSolarCoverage { year, month, day });
    }

    check_month(month)?;

    let max = julian::days_in_solar_month(year, month);
    if !(MIN_DAY..=max).contains(&day) {
        return Err(DateError::DayOutOfRange {
            year,
            month,
            day,
            max,
        });
    }

    Ok(())
}

fn check_lunar_bounds(
    year: u16,
    month: u8,
    day: u8,
    is_leap_month: bool,
) -> Result<(), DateError> {
    check_lunar_year(year)?;
    check_month(month)?;

    let max = resolve_month_days(year, month, is_leap_month);
    if !(MIN_DAY..=max).contains(&day) {
        return Err(DateError::DayOutOfRange {
            year,
            month,
            day,
            max,
        });
    }

    Ok(())
}

fn check_lunar_year(year: u16) -> Result<(), DateError> {
    if (BASE_LUNAR_YEAR..=END_LUNAR_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(DateError::YearOutOfRange {
            year,
            min: BASE_LUNAR_YEAR,
            max: END_LUNAR_YEAR,
        })
    }
}

fn check_month(month: u8) -> Result<(), DateError> {
    if (1..=MAX_MONTH).contains(&month) {
        Ok(())
    } else {
        Err(DateError::MonthOutOfRange { month })
    }
}
