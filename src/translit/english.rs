//! 영어 발음 사전 변환기
//!
//! 발음 사전을 로드해 영어 단어를 발음 표기 문자열로 바꿉니다.
//!
//! # 사전 형식
//! ```text
//! ;;; 주석 줄
//! hangul  ㅎㅏ-ㄴㄱㅡ-ㄹ
//! hello  HH AH0 L OW1
//! ```
//! 단어와 발음은 공백 두 칸으로 구분. 발음의 강세 숫자(0/1/2)와
//! 내부 공백은 제거됩니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{Translit, TranslitError};

/// 단어 앞뒤에서 잘라내는 문장 부호
const TRIM_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')'];

/// 영어 발음 사전 변환기
#[derive(Debug, Clone)]
pub struct EnglishTranslit {
    /// 소문자 단어 -> 발음 표기
    dict: HashMap<String, String>,
}

impl EnglishTranslit {
    /// 사전 파일에서 로드
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TranslitError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// 임의의 리더에서 사전 파싱
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TranslitError> {
        let mut dict = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            if line.starts_with(";;;") {
                continue;
            }

            // 단어와 발음은 공백 두 칸으로 구분
            if let Some((word, pron)) = line.split_once("  ") {
                let word = word.trim().to_lowercase();
                if word.is_empty() {
                    continue;
                }
                // 강세 숫자와 내부 공백 제거
                let pron: String = pron
                    .chars()
                    .filter(|c| !matches!(c, '0' | '1' | '2' | ' '))
                    .collect();
                dict.insert(word, pron);
            }
        }

        if dict.is_empty() {
            return Err(TranslitError::Format("사전에 항목이 없습니다".into()));
        }

        log::debug!("발음 사전 로드 완료: {}개 항목", dict.len());
        Ok(Self { dict })
    }

    /// 단어 하나 조회 (소문자화, 문장 부호 제거 후)
    pub fn lookup(&self, word: &str) -> Option<&str> {
        let clean = word.trim_matches(TRIM_PUNCT).to_lowercase();
        self.dict.get(&clean).map(String::as_str)
    }

    /// 등록된 항목 수
    pub fn len(&self) -> usize {
        self.dict.len()
    }

    /// 사전이 비어 있는지
    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }
}

impl Translit for EnglishTranslit {
    fn scheme(&self) -> &str {
        "english"
    }

    /// 텍스트의 각 단어를 발음 표기로 변환
    /// 사전에 없는 단어는 그대로 유지
    fn transliterate(&self, text: &str) -> String {
        let words: Vec<&str> = text
            .split_whitespace()
            .map(|w| self.lookup(w).unwrap_or(w))
            .collect();
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
;;; 테스트용 사전
hangul  ㅎㅏ-ㄴㄱㅡ-ㄹ
jamo  ㅈㅏㅁㅗ
hello  HH AH0 L OW1
";

    fn sample_dict() -> EnglishTranslit {
        EnglishTranslit::from_reader(Cursor::new(SAMPLE)).unwrap()
    }

    #[test]
    fn test_parse_dictionary() {
        let t = sample_dict();
        assert_eq!(t.len(), 3);
        assert_eq!(t.lookup("hangul"), Some("ㅎㅏ-ㄴㄱㅡ-ㄹ"));
    }

    #[test]
    fn test_comment_lines_skipped() {
        let t = EnglishTranslit::from_reader(Cursor::new(
            ";;; 주석\n;;; 또 주석\nword  ㅝㄷㅡ\n",
        ))
        .unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_stress_digits_stripped() {
        let t = sample_dict();
        // "HH AH0 L OW1" -> 강세 숫자/공백 제거
        assert_eq!(t.lookup("hello"), Some("HHAHLOW"));
    }

    #[test]
    fn test_lookup_normalization() {
        let t = sample_dict();
        assert_eq!(t.lookup("Hangul"), Some("ㅎㅏ-ㄴㄱㅡ-ㄹ"));
        assert_eq!(t.lookup("HANGUL"), Some("ㅎㅏ-ㄴㄱㅡ-ㄹ"));
        assert_eq!(t.lookup("hangul,"), Some("ㅎㅏ-ㄴㄱㅡ-ㄹ"));
        assert_eq!(t.lookup("\"hangul\""), Some("ㅎㅏ-ㄴㄱㅡ-ㄹ"));
        assert_eq!(t.lookup("unknown"), None);
    }

    #[test]
    fn test_transliterate_passthrough_on_miss() {
        let t = sample_dict();
        assert_eq!(t.transliterate("hangul rocks"), "ㅎㅏ-ㄴㄱㅡ-ㄹ rocks");
        assert_eq!(t.transliterate("nothing here"), "nothing here");
    }

    #[test]
    fn test_transliterate_multiple_words() {
        let t = sample_dict();
        assert_eq!(t.transliterate("jamo hangul"), "ㅈㅏㅁㅗ ㅎㅏ-ㄴㄱㅡ-ㄹ");
    }

    #[test]
    fn test_empty_dictionary_is_error() {
        let result = EnglishTranslit::from_reader(Cursor::new(";;; 주석뿐\n"));
        assert!(matches!(result, Err(TranslitError::Format(_))));
    }

    #[test]
    fn test_scheme() {
        assert_eq!(sample_dict().scheme(), "english");
    }
}
