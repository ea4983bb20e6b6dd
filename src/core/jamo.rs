//! 호환용 자모 코드포인트 분류
//!
//! 입력 스트림의 문자 하나를 한글 역할(자음/모음/완성형 음절/비한글)로
//! 분류하고 초성/중성/종성 인덱스를 구합니다. 분해된 자모는
//! 호환용 자모 블록(ㄱ~ㅎ, ㅏ~ㅣ)으로 들어온다고 가정합니다.

use crate::core::unicode::decompose_syllable;

/// 호환용 자음 블록 시작 (ㄱ)
const JAEUM_BASE: u32 = 0x3131;
/// 호환용 모음 블록 시작 (ㅏ)
const MOEUM_BASE: u32 = 0x314F;
/// 호환용 자음 개수 (ㄱ~ㅎ)
const JAEUM_COUNT: u32 = 30;
/// 호환용 모음 개수 (ㅏ~ㅣ)
const MOEUM_COUNT: u32 = 21;

/// 코드포인트의 한글 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// 자음 (lead: 초성 인덱스, None이면 초성 불가 / tail: 종성 인덱스, None이면 종성 불가)
    Consonant {
        lead: Option<u32>,
        tail: Option<u32>,
    },
    /// 모음 (medial: 중성 인덱스)
    Vowel { medial: u32 },
    /// 완성형 음절 (tail 0 = 종성 없음)
    Syllable { lead: u32, medial: u32, tail: u32 },
    /// 비한글 - 그대로 통과
    Other,
}

/// 호환용 자음 30자의 (초성 인덱스, 종성 인덱스) 테이블
///
/// 초성 인덱스 순서 (19개):
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
///
/// 종성 인덱스 순서 (28개, 0 = 없음):
/// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
/// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
/// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
const JAEUM_ROLES: [(Option<u32>, Option<u32>); 30] = [
    (Some(0), Some(1)),   // ㄱ
    (Some(1), Some(2)),   // ㄲ
    (None, Some(3)),      // ㄳ (겹받침, 초성 불가)
    (Some(2), Some(4)),   // ㄴ
    (None, Some(5)),      // ㄵ
    (None, Some(6)),      // ㄶ
    (Some(3), Some(7)),   // ㄷ
    (Some(4), None),      // ㄸ (종성 불가)
    (Some(5), Some(8)),   // ㄹ
    (None, Some(9)),      // ㄺ
    (None, Some(10)),     // ㄻ
    (None, Some(11)),     // ㄼ
    (None, Some(12)),     // ㄽ
    (None, Some(13)),     // ㄾ
    (None, Some(14)),     // ㄿ
    (None, Some(15)),     // ㅀ
    (Some(6), Some(16)),  // ㅁ
    (Some(7), Some(17)),  // ㅂ
    (Some(8), None),      // ㅃ (종성 불가)
    (None, Some(18)),     // ㅄ
    (Some(9), Some(19)),  // ㅅ
    (Some(10), Some(20)), // ㅆ
    (Some(11), Some(21)), // ㅇ
    (Some(12), Some(22)), // ㅈ
    (Some(13), None),     // ㅉ (종성 불가)
    (Some(14), Some(23)), // ㅊ
    (Some(15), Some(24)), // ㅋ
    (Some(16), Some(25)), // ㅌ
    (Some(17), Some(26)), // ㅍ
    (Some(18), Some(27)), // ㅎ
];

/// 문자 하나를 한글 역할로 분류
pub fn classify(c: char) -> CharClass {
    if let Some((lead, medial, tail)) = decompose_syllable(c) {
        return CharClass::Syllable { lead, medial, tail };
    }

    let code = c as u32;
    if (JAEUM_BASE..JAEUM_BASE + JAEUM_COUNT).contains(&code) {
        let (lead, tail) = JAEUM_ROLES[(code - JAEUM_BASE) as usize];
        return CharClass::Consonant { lead, tail };
    }
    if (MOEUM_BASE..MOEUM_BASE + MOEUM_COUNT).contains(&code) {
        return CharClass::Vowel {
            medial: code - MOEUM_BASE,
        };
    }

    CharClass::Other
}

/// 호환용 자음인지 확인
pub fn is_jaeum(c: char) -> bool {
    matches!(classify(c), CharClass::Consonant { .. })
}

/// 호환용 모음인지 확인
pub fn is_moeum(c: char) -> bool {
    matches!(classify(c), CharClass::Vowel { .. })
}
