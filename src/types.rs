use crate::cycle::{Script, sexagenary_label};
use crate::prelude::*;
use serde::Serialize;
use std::fmt;

/// Day of week, numbered 1 (Sunday) through 7 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[repr(u8)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 1,
    #[display(fmt = "Monday")]
    Monday = 2,
    #[display(fmt = "Tuesday")]
    Tuesday = 3,
    #[display(fmt = "Wednesday")]
    Wednesday = 4,
    #[display(fmt = "Thursday")]
    Thursday = 5,
    #[display(fmt = "Friday")]
    Friday = 6,
    #[display(fmt = "Saturday")]
    Saturday = 7,
}

impl Weekday {
    /// The weekday number, 1 (Sunday) through 7 (Saturday).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Weekday of a Julian day number. The remainder table is phased so that
    /// the solar base day, JDN 2415021 (1900-01-01), lands on Monday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn from_jdn(jdn: i64) -> Self {
        const BY_REMAINDER: [Weekday; 7] = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ];
        BY_REMAINDER[(jdn % 7) as usize]
    }
}

/// A single Korean lunisolar date together with its Gregorian counterpart.
///
/// Produced only by [`crate::lunar_date_of`] and [`crate::solar_date_of`],
/// always fully populated; two values are equal iff every field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KoreanLunarDate {
    /// Solar (Gregorian) year
    pub sol_year: u16,
    /// Solar month, 1-based
    pub sol_month: u8,
    /// Solar day of month
    pub sol_day: u8,
    /// Day of week of the solar date
    pub sol_weekday: Weekday,
    /// Whether the solar year is a leap year
    pub sol_leap_year: bool,
    /// Julian day number, counted from January 1, 4713 BC
    pub julian_day: u32,

    /// Lunar year
    pub lun_year: u16,
    /// Lunar month, 1-based; a leap month shares its number with the regular
    /// month it follows
    pub lun_month: u8,
    /// Lunar day of month
    pub lun_day: u8,
    /// Whether the date falls in a leap month
    pub lun_leap_month: bool,
    /// Length of the lunar month holding this date, 29 or 30. Needed by
    /// anything that lays out a month, e.g. drawing a calendar page.
    pub lun_days_in_month: u8,

    /// Sexagenary cycle number of the day, 1..=60
    pub daily_cycle: u8,
    /// Sexagenary cycle number of the month, 1..=60, or 0 when the date
    /// falls in a leap month: leap months carry no monthly stem-branch.
    pub monthly_cycle: u8,
    /// Sexagenary cycle number of the lunar year, 1..=60
    pub yearly_cycle: u8,
}

impl KoreanLunarDate {
    /// Stem-branch label of the day, e.g. 戊午.
    pub fn daily_label(&self, script: Script) -> String {
        sexagenary_label(self.daily_cycle, script)
    }

    /// Stem-branch label of the month; empty for leap months.
    pub fn monthly_label(&self, script: Script) -> String {
        sexagenary_label(self.monthly_cycle, script)
    }

    /// Stem-branch label of the lunar year, e.g. 己卯.
    pub fn yearly_label(&self, script: Script) -> String {
        sexagenary_label(self.yearly_cycle, script)
    }

    /// The solar side of this date as a [`chrono::NaiveDate`].
    ///
    /// Converter-produced values always convert; `None` can only arise for a
    /// hand-mutated value with impossible solar fields.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.sol_year),
            u32::from(self.sol_month),
            u32::from(self.sol_day),
        )
    }
}

impl fmt::Display for KoreanLunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.lun_leap_month { " leap" } else { "" };
        write!(
            f,
            "{:04}-{:02}-{:02} (lunar {:04}-{:02}-{:02}{leap})",
            self.sol_year,
            self.sol_month,
            self.sol_day,
            self.lun_year,
            self.lun_month,
            self.lun_day,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_from_jdn() {
        // 1900-01-01 was a Monday, 2000-01-01 a Saturday.
        assert_eq!(Weekday::Monday, Weekday::from_jdn(2_415_021));
        assert_eq!(Weekday::Saturday, Weekday::from_jdn(2_451_545));
        assert_eq!(Weekday::Sunday, Weekday::from_jdn(2_451_546));
    }

    #[test]
    fn test_weekday_numbers() {
        assert_eq!(1, Weekday::Sunday.number());
        assert_eq!(7, Weekday::Saturday.number());
        assert_eq!("Saturday", Weekday::Saturday.to_string());
    }
}
