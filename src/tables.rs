//! Encoded calendar tables for the Korean lunisolar calendar, 1900-2049.
//!
//! Korean lunisolar month lengths and leap-month placement follow no
//! closed-form rule; they are reproduced here from the data published by the
//! Korea Astronomy and Space Science Institute (<https://astro.kasi.re.kr>).
//! Every word must match that dataset bit for bit - a discrepancy is a
//! correctness bug, not a tuning choice.

use crate::consts::BASE_LUNAR_YEAR;

/// Month lengths and leap months, two lunar years per 32-bit word (even year
/// offsets in the high half, odd ones in the low half).
///
/// Within each 16-bit half, the low 12 bits are a month-length bitmap with
/// month 1 as the most significant bit: a set bit marks a long (30-day)
/// month, a clear bit a short (29-day) one. The top nibble holds the leap
/// month number, 0 meaning the year has no leap month.
///
/// Leap-month *lengths* do not fit in this layout (that would need a 17th
/// bit per year), so they live in [`LONG_LEAP_MONTH_YEARS`] instead.
const PACKED_YEARS: [u32; 75] = [
    0x84bd04ae, 0x0a57554d, 0x0d260d95, 0x4655056a, 0x09ad255d, // 1900
    0x04ae6a5b, 0x0a4d0d25, 0x5da90b55, 0x056a2ada, 0x095d74bb, // 1910
    0x049b0a4b, 0x5b4b06a9, 0x0ad44bb5, 0x02b6095b, 0x25370497, // 1920
    0x66560e4a, 0x0ea556a9, 0x05b502b6, 0x38ae092e, 0x7c8d0c95, // 1930
    0x0d4a6d8a, 0x0b69056d, 0x425b025d, 0x092d2d2b, 0x0a957d55, // 1940
    0x0b4a0b55, 0x555504db, 0x025b3857, 0x052b8a9b, 0x069506aa, // 1950
    0x6aea0ab5, 0x04b64aae, 0x0a570527, 0x37260d95, 0x76b5056a, // 1960
    0x09ad54dd, 0x04ae0a4e, 0x4d4d0d25, 0x8d590b54, 0x0d6a695a, // 1970
    0x095b049b, 0x4a9b0a4b, 0xab2706a5, 0x06d46b75, 0x02b6095b, // 1980
    0x54b70497, 0x064b374a, 0x0ea586d9, 0x05ad02b6, 0x596e092e, // 1990
    0x0c964e95, 0x0d4a0da5, 0x2755056c, 0x7abb025d, 0x092d5cab, // 2000
    0x0a950b4a, 0x3b4a0b55, 0x955d04ba, 0x0a5b5557, 0x052b0a95, // 2010
    0x4b9506aa, 0x0ad526b5, 0x04b66a6e, 0x0a570527, 0x56a60d93, // 2020
    0x05aa3b6a, 0x096db4af, 0x04ae0a4d, 0x6d0d0d25, 0x0d525dd4, // 2030
    0x0b6a096d, 0x255b049b, 0x7a570a4b, 0x0b255b25, 0x06d40ada, // 2040
];

/// Days elapsed from lunar 1900-01-01 to the first day of each lunar year.
///
/// This index lets the solar-to-lunar conversion jump straight to the right
/// lunar year with a binary search instead of scanning month lengths from
/// 1900; the remaining walk is at most 13 months.
const YEAR_BASE_DAYS: [i32; 150] = [
    0, 384, 738, 1093, 1476, 1830, 2185, 2569, 2923, 3278, // 1900
    3662, 4016, 4400, 4754, 5108, 5492, 5847, 6201, 6585, 6940, // 1910
    7324, 7678, 8032, 8416, 8770, 9124, 9509, 9863, 10218, 10602, // 1920
    10956, 11339, 11693, 12048, 12432, 12787, 13141, 13525, 13879, 14263, // 1930
    14617, 14971, 15355, 15710, 16065, 16449, 16803, 17157, 17541, 17895, // 1940
    18279, 18633, 18988, 19372, 19727, 20081, 20465, 20819, 21203, 21557, // 1950
    21911, 22295, 22650, 23004, 23388, 23743, 24097, 24480, 24835, 25219, // 1960
    25573, 25928, 26312, 26666, 27020, 27404, 27758, 28142, 28496, 28851, // 1970
    29235, 29590, 29944, 30328, 30682, 31066, 31420, 31774, 32159, 32513, // 1980
    32868, 33252, 33606, 33960, 34343, 34698, 35082, 35437, 35791, 36175, // 1990
    36529, 36883, 37267, 37621, 37976, 38360, 38714, 39099, 39453, 39807, // 2000
    40191, 40545, 40899, 41283, 41638, 42022, 42376, 42731, 43115, 43469, // 2010
    43823, 44207, 44561, 44916, 45300, 45654, 46038, 46393, 46747, 47130, // 2020
    47485, 47839, 48223, 48578, 48962, 49316, 49670, 50054, 50408, 50762, // 2030
    51146, 51501, 51856, 52240, 52594, 52978, 53332, 53686, 54070, 54424, // 2040
];

/// Year offsets (relative to 1900) whose leap month is long (30 days).
/// Sorted; membership is decided by exact binary search.
const LONG_LEAP_MONTH_YEARS: [u16; 12] = [6, 33, 36, 38, 41, 44, 52, 55, 79, 112, 136, 147];

/// Returns the 16-bit packed record (leap nibble + month bitmap) for
/// `lunar_year`. The caller must have validated the year.
pub(crate) fn year_record(lunar_year: u16) -> u16 {
    let delta = usize::from(lunar_year - BASE_LUNAR_YEAR);
    let shift = (1 - delta % 2) * 16;
    ((PACKED_YEARS[delta / 2] >> shift) & 0xFFFF) as u16
}

/// Leap month number of `lunar_year`, 0 if the year has none.
pub(crate) fn leap_month(lunar_year: u16) -> u8 {
    (year_record(lunar_year) >> 12) as u8
}

/// Whether regular month `month` (1..=12) of `lunar_year` has 30 days.
pub(crate) fn is_long_month(lunar_year: u16, month: u8) -> bool {
    year_record(lunar_year) & (0x0800_u16 >> (month - 1)) != 0
}

/// Whether the leap month of `lunar_year` has 30 days. Only meaningful for
/// years that actually contain a leap month.
pub(crate) fn is_long_leap_month(lunar_year: u16) -> bool {
    LONG_LEAP_MONTH_YEARS
        .binary_search(&(lunar_year - BASE_LUNAR_YEAR))
        .is_ok()
}

/// Days from lunar 1900-01-01 to the first day of `lunar_year`.
pub(crate) fn year_base_offset(lunar_year: u16) -> i64 {
    i64::from(YEAR_BASE_DAYS[usize::from(lunar_year - BASE_LUNAR_YEAR)])
}

/// The lunar year containing the day `days_since_lunar_base` days after
/// lunar 1900-01-01: the greatest year whose base offset is <= the target.
pub(crate) fn year_of_offset(days_since_lunar_base: i64) -> u16 {
    let index = YEAR_BASE_DAYS.partition_point(|&base| i64::from(base) <= days_since_lunar_base);
    BASE_LUNAR_YEAR + index as u16 - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{END_LUNAR_YEAR, LONG_LUNAR_MONTH_DAYS, SHORT_LUNAR_MONTH_DAYS};

    fn month_days(year: u16, month: u8, leap: bool) -> i32 {
        let long = if leap {
            is_long_leap_month(year)
        } else {
            is_long_month(year, month)
        };
        i32::from(if long {
            LONG_LUNAR_MONTH_DAYS
        } else {
            SHORT_LUNAR_MONTH_DAYS
        })
    }

    #[test]
    fn test_year_record_halves() {
        // 1900 sits in the high half of the first word, 1901 in the low half.
        assert_eq!(0x84bd, year_record(1900));
        assert_eq!(0x04ae, year_record(1901));
        assert_eq!(0x0ada, year_record(2049));
    }

    #[test]
    fn test_known_leap_months() {
        for (year, expected) in [
            (1900, 8),
            (1906, 4),
            (1984, 10),
            (2004, 2),
            (2014, 9),
            (2020, 4),
            (2033, 11),
            (2047, 5),
        ] {
            assert_eq!(expected, leap_month(year), "leap month of {year}");
        }
        for year in [1901, 1999, 2000, 2049] {
            assert_eq!(0, leap_month(year), "{year} has no leap month");
        }
    }

    #[test]
    fn test_month_bitmap_msb_first() {
        // 2020 record is 0x4b95: months 1, 3, 4, 5, 8, 10, 12 are long.
        let expected = [true, false, true, true, true, false, false, true, false, true, false, true];
        for (i, &long) in expected.iter().enumerate() {
            assert_eq!(long, is_long_month(2020, i as u8 + 1), "2020 month {}", i + 1);
        }
    }

    #[test]
    fn test_long_leap_month_lookup() {
        // 1906 and 2036 hold 30-day leap months, 2020's leap month is short.
        assert!(is_long_leap_month(1906));
        assert!(is_long_leap_month(2036));
        assert!(!is_long_leap_month(2020));
        assert!(!is_long_leap_month(1900));
    }

    #[test]
    fn test_long_leap_years_sorted() {
        assert!(LONG_LEAP_MONTH_YEARS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_year_index_reconciles_with_bitmap() {
        // index[y+1] - index[y] must equal the decoded day count of year y.
        for year in crate::consts::BASE_LUNAR_YEAR..END_LUNAR_YEAR {
            let mut total: i32 = (1..=12).map(|m| month_days(year, m, false)).sum();
            if leap_month(year) != 0 {
                total += month_days(year, leap_month(year), true);
            }
            let from_index = year_base_offset(year + 1) - year_base_offset(year);
            assert_eq!(i64::from(total), from_index, "day count of lunar {year}");
        }
    }

    #[test]
    fn test_year_of_offset_brackets() {
        assert_eq!(1900, year_of_offset(0));
        assert_eq!(1900, year_of_offset(383));
        assert_eq!(1901, year_of_offset(384));
        assert_eq!(2049, year_of_offset(54424));
        assert_eq!(2049, year_of_offset(54777));
    }
}
