/// First lunar year covered by the embedded tables (inclusive)
pub const BASE_LUNAR_YEAR: u16 = 1900;

/// Last lunar year covered by the embedded tables (inclusive)
pub const END_LUNAR_YEAR: u16 = 2049;

/// First solar year accepted by [`crate::lunar_date_of`]
pub const BASE_SOLAR_YEAR: u16 = 1900;

/// Last solar year accepted by [`crate::lunar_date_of`]
pub const END_SOLAR_YEAR: u16 = 2049;

/// Length of a short ("small") lunar month
pub const SHORT_LUNAR_MONTH_DAYS: u8 = 29;

/// Length of a long ("large") lunar month
pub const LONG_LUNAR_MONTH_DAYS: u8 = 30;

/// Julian day number of the solar base date, 1900-01-01
pub const SOLAR_BASE_JDN: i64 = 2_415_021;

/// Julian day number of lunar 1900-01-01 (solar 1900-01-31)
pub const LUNAR_BASE_JDN: i64 = 2_415_051;

/// Gap between the solar epoch and the lunar epoch; the lunar table starts
/// 30 days after the solar base date.
pub(crate) const EPOCH_GAP_DAYS: i64 = LUNAR_BASE_JDN - SOLAR_BASE_JDN;

/// Julian day number of the Gregorian calendar adoption, 1582-10-15.
/// Civil dates on or after this day get the Gregorian century correction.
pub(crate) const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Length of the sexagenary (stem-branch) cycle
pub const SEXAGENARY_CYCLE: u8 = 60;

/// Yearly cycle number of the base lunar year, minus one.
/// Calibrated against the KASI reference data; never rederive.
pub(crate) const YEARLY_CYCLE_PHASE: i64 = 36;

/// Monthly cycle number of lunar 1900-01, minus one (same calibration)
pub(crate) const MONTHLY_CYCLE_PHASE: i64 = 14;

/// Daily cycle number of the lunar base day, minus one (same calibration)
pub(crate) const DAILY_CYCLE_PHASE: i64 = 10;

/// Maximum valid month, solar or lunar (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for solar leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each solar month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_solar_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
