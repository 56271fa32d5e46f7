//! Sexagenary (60-cycle) stem-branch calculation.
//!
//! Cycle numbers run from 1 (甲子) to 60 (癸亥); 0 is a sentinel for "no
//! cycle", which only occurs for the monthly cycle of a leap month. A cycle
//! number maps to a heavenly stem by `(cycle - 1) % 10` and to an earthly
//! branch by `(cycle - 1) % 12`.

use crate::consts::{
    BASE_LUNAR_YEAR, DAILY_CYCLE_PHASE, EPOCH_GAP_DAYS, LUNAR_BASE_JDN, MONTHLY_CYCLE_PHASE,
    SEXAGENARY_CYCLE, YEARLY_CYCLE_PHASE,
};
use crate::prelude::*;
use serde::Serialize;

/// Script used to render stem and branch symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum Script {
    /// Hanja (Chinese characters), e.g. 甲子
    #[display(fmt = "Chinese")]
    Chinese,
    /// Hangul, e.g. 갑자
    #[display(fmt = "Korean")]
    Korean,
}

const HEAVENLY_STEMS_CHINESE: [char; 10] =
    ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const HEAVENLY_STEMS_KOREAN: [char; 10] =
    ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'];

const EARTHLY_BRANCHES_CHINESE: [char; 12] =
    ['子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥'];
const EARTHLY_BRANCHES_KOREAN: [char; 12] =
    ['자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해'];

/// The heavenly stem (Cheon'gan, 천간) symbol of a cycle number, or `None`
/// for the leap-month sentinel 0.
///
/// # Example
///
/// ```
/// use korean_lunar::{heavenly_stem, Script};
///
/// assert_eq!(Some('甲'), heavenly_stem(1, Script::Chinese));
/// assert_eq!(Some('갑'), heavenly_stem(1, Script::Korean));
/// assert_eq!(None, heavenly_stem(0, Script::Chinese));
/// ```
pub fn heavenly_stem(cycle: u8, script: Script) -> Option<char> {
    if cycle == 0 {
        return None;
    }

    let index = usize::from(cycle - 1) % 10;
    Some(match script {
        Script::Chinese => HEAVENLY_STEMS_CHINESE[index],
        Script::Korean => HEAVENLY_STEMS_KOREAN[index],
    })
}

/// The earthly branch (Jiji, 지지) symbol of a cycle number, or `None` for
/// the leap-month sentinel 0.
pub fn earthly_branch(cycle: u8, script: Script) -> Option<char> {
    if cycle == 0 {
        return None;
    }

    let index = usize::from(cycle - 1) % 12;
    Some(match script {
        Script::Chinese => EARTHLY_BRANCHES_CHINESE[index],
        Script::Korean => EARTHLY_BRANCHES_KOREAN[index],
    })
}

/// The full stem-branch label (Yuksipgapja, 육십갑자) of a cycle number;
/// empty for the leap-month sentinel 0.
///
/// # Example
///
/// ```
/// use korean_lunar::{sexagenary_label, Script};
///
/// assert_eq!("甲子", sexagenary_label(1, Script::Chinese));
/// assert_eq!("계해", sexagenary_label(60, Script::Korean));
/// assert_eq!("", sexagenary_label(0, Script::Chinese));
/// ```
pub fn sexagenary_label(cycle: u8, script: Script) -> String {
    match (heavenly_stem(cycle, script), earthly_branch(cycle, script)) {
        (Some(stem), Some(branch)) => [stem, branch].iter().collect(),
        _ => String::new(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cycle(steps: i64) -> u8 {
    (1 + steps % i64::from(SEXAGENARY_CYCLE)) as u8
}

pub(crate) fn yearly_cycle(lunar_year: u16) -> u8 {
    to_cycle(i64::from(lunar_year - BASE_LUNAR_YEAR) + YEARLY_CYCLE_PHASE)
}

pub(crate) fn monthly_cycle(lunar_year: u16, lunar_month: u8) -> u8 {
    let months = i64::from(lunar_year - BASE_LUNAR_YEAR) * 12 + i64::from(lunar_month) - 1;
    to_cycle(months + MONTHLY_CYCLE_PHASE)
}

pub(crate) fn daily_cycle(jdn: i64) -> u8 {
    to_cycle(jdn + EPOCH_GAP_DAYS - LUNAR_BASE_JDN + DAILY_CYCLE_PHASE)
}
