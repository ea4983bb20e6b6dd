//! 조합 중인 음절 버퍼
//!
//! 초성/중성/종성 세 칸을 들고 있다가 flush 시점에 빈 칸을 채워
//! 완성형 음절 하나로 합성합니다.

use crate::core::unicode::{compose_syllable, FILLER_MEDIAL, NULL_ONSET_LEAD};

/// 초성/중성/종성 슬롯. 빈 칸은 None (0 코드포인트 센티널 없음)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableBuffer {
    lead: Option<u32>,
    medial: Option<u32>,
    tail: Option<u32>,
}

impl SyllableBuffer {
    /// 빈 버퍼 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 슬롯이 비어 있는지
    pub fn is_empty(&self) -> bool {
        self.lead.is_none() && self.medial.is_none() && self.tail.is_none()
    }

    /// 초성만 있고 중성을 기다리는 상태인지 (모음 운반 음절 병합 전제 조건)
    pub fn awaits_medial(&self) -> bool {
        self.lead.is_some() && self.medial.is_none()
    }

    /// 초성 저장
    pub fn set_lead(&mut self, lead: u32) {
        self.lead = Some(lead);
    }

    /// 중성 저장
    pub fn set_medial(&mut self, medial: u32) {
        self.medial = Some(medial);
    }

    /// 종성 저장. 0(종성 없음)은 빈 슬롯으로 취급
    pub fn set_tail(&mut self, tail: u32) {
        self.tail = if tail == 0 { None } else { Some(tail) };
    }

    /// 분해된 음절 세 조각을 한 번에 적재
    pub fn load(&mut self, lead: u32, medial: u32, tail: u32) {
        self.lead = Some(lead);
        self.medial = Some(medial);
        self.tail = if tail == 0 { None } else { Some(tail) };
    }

    /// 버퍼를 완성형 음절 하나로 합성하고 비움
    ///
    /// 빈 버퍼면 None. 초성이 비었으면 ㅇ, 중성이 비었으면 ㅡ로 채워
    /// 불완전한 입력도 표시 가능한 음절로 만듭니다.
    pub fn flush(&mut self) -> Option<char> {
        if self.is_empty() {
            return None;
        }

        let lead = self.lead.unwrap_or(NULL_ONSET_LEAD);
        let medial = self.medial.unwrap_or(FILLER_MEDIAL);
        let tail = self.tail.unwrap_or(0);

        self.lead = None;
        self.medial = None;
        self.tail = None;

        compose_syllable(lead, medial, tail)
    }
}
