//! Word lists
//!
//! Real Kordle lists load from files; a small jamo-decomposed sample is
//! embedded so the binary works out of the box and smoke tests need no files.

pub mod loader;

/// Sample list of common Korean words decomposed into 6 basic jamo
///
/// Each entry is one word, e.g. 한국 → `ㅎㅏㄴㄱㅜㄱ`.
pub const SAMPLE: &[&str] = &[
    "ㅎㅏㄴㄱㅜㄱ", // 한국
    "ㅇㅏㄴㄱㅕㅇ", // 안경
    "ㅈㅓㅇㄷㅏㅂ", // 정답
    "ㅁㅜㄴㅂㅓㅂ", // 문법
    "ㅅㅏㄴㅊㅐㄱ", // 산책
    "ㅇㅡㅁㅇㅏㄱ", // 음악
    "ㅇㅣㄹㅂㅗㄴ", // 일본
    "ㄷㅗㄱㅇㅣㄹ", // 독일
    "ㅇㅕㄴㅍㅣㄹ", // 연필
    "ㄱㅓㅁㅈㅓㅇ", // 검정
    "ㅅㅣㄴㅁㅜㄴ", // 신문
    "ㅅㅗㄴㄴㅣㅁ", // 손님
    "ㅂㅏㅂㅅㅏㅇ", // 밥상
    "ㅍㅜㅇㅅㅓㄴ", // 풍선
    "ㅅㅓㄹㅌㅏㅇ", // 설탕
    "ㅈㅏㅇㄱㅏㅂ", // 장갑
    "ㅊㅣㅁㅁㅜㄱ", // 침묵
    "ㅁㅜㅈㅣㄱㅐ", // 무지개
    "ㅂㅏㄴㅏㄴㅏ", // 바나나
    "ㅈㅣㅇㅜㄱㅐ", // 지우개
    "ㄱㅗㅅㅏㄹㅣ", // 고사리
    "ㅅㅗㄴㅏㅁㅜ", // 소나무
    "ㄷㅜㄷㅓㅈㅣ", // 두더지
    "ㄴㅓㄱㅜㄹㅣ", // 너구리
    "ㄱㅐㄴㅏㄹㅣ", // 개나리
    "ㄷㅏㄹㅣㅁㅣ", // 다리미
    "ㄱㅣㄹㅓㄱㅣ", // 기러기
    "ㄷㅜㄹㅜㅁㅣ", // 두루미
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::wordlists::loader::words_from_lines;

    #[test]
    fn sample_words_are_six_jamo() {
        let alphabet = Alphabet::korean_jamo();
        for &entry in SAMPLE {
            assert_eq!(
                entry.chars().count(),
                6,
                "'{entry}' is not 6 jamo"
            );
            assert!(
                entry.chars().all(|ch| alphabet.contains(ch)),
                "'{entry}' contains a non-jamo letter"
            );
        }
    }

    #[test]
    fn sample_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for &entry in SAMPLE {
            assert!(seen.insert(entry), "duplicate sample word '{entry}'");
        }
    }

    #[test]
    fn sample_parses_completely() {
        let alphabet = Alphabet::korean_jamo();
        let words = words_from_lines(SAMPLE.iter().copied(), &alphabet, 6);
        assert_eq!(words.len(), SAMPLE.len());
    }
}
