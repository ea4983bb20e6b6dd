//! 유니코드 한글 음절 조합/분해 공식
//!
//! 오프셋 산술만 담당하는 순수 함수들. 상태 기계와 분리되어 있어
//! 전체 인덱스 범위에 대해 독립적으로 검증할 수 있습니다.

/// 한글 음절 시작 코드포인트 (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
pub const LEAD_COUNT: u32 = 19;
/// 중성 개수
pub const MEDIAL_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const TAIL_COUNT: u32 = 28;

/// 무음가 ㅇ의 초성 인덱스. 모음으로 시작하는 음절의 초성 자리를 채움
pub const NULL_ONSET_LEAD: u32 = 11;

/// 중성이 비어 있을 때 채우는 ㅡ의 중성 인덱스
pub const FILLER_MEDIAL: u32 = 18;

/// 초성/중성/종성 인덱스로 완성형 음절 생성
/// - lead: 초성 인덱스 (0~18)
/// - medial: 중성 인덱스 (0~20)
/// - tail: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(lead: u32, medial: u32, tail: u32) -> Option<char> {
    if lead >= LEAD_COUNT || medial >= MEDIAL_COUNT || tail >= TAIL_COUNT {
        return None;
    }
    let code = SYLLABLE_BASE + (lead * MEDIAL_COUNT + medial) * TAIL_COUNT + tail;
    char::from_u32(code)
}

/// 완성형 음절을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스), 음절 범위 밖이면 None
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    let last = SYLLABLE_BASE + LEAD_COUNT * MEDIAL_COUNT * TAIL_COUNT - 1;
    if !(SYLLABLE_BASE..=last).contains(&code) {
        return None;
    }
    let offset = code - SYLLABLE_BASE;
    let tail = offset % TAIL_COUNT;
    let medial = (offset / TAIL_COUNT) % MEDIAL_COUNT;
    let lead = offset / (TAIL_COUNT * MEDIAL_COUNT);
    Some((lead, medial, tail))
}

/// 초성이 무음가 ㅇ인지 확인
pub fn is_null_onset(lead: u32) -> bool {
    lead == NULL_ONSET_LEAD
}
