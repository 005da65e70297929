//! 유니코드 한글 음절 분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 테이블 (호환용 자모, 유니코드 초성 순서)
#[rustfmt::skip]
const CHOSEONG: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블
#[rustfmt::skip]
const JUNGSEONG: [char; JUNGSEONG_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (0번은 종성 없음)
#[rustfmt::skip]
const JONGSEONG: [Option<char>; JONGSEONG_COUNT as usize] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 완성형 한글 한 글자를 분해한 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableBlock {
    /// 초성 인덱스 (0~18)
    pub choseong: u32,
    /// 중성 인덱스 (0~20)
    pub jungseong: u32,
    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub jongseong: u32,
}

impl SyllableBlock {
    /// 받침 유무
    pub fn has_jongseong(&self) -> bool {
        self.jongseong != 0
    }

    /// 초성 자모 문자
    pub fn choseong_char(&self) -> char {
        CHOSEONG[self.choseong as usize]
    }

    /// 중성 자모 문자
    pub fn jungseong_char(&self) -> char {
        JUNGSEONG[self.jungseong as usize]
    }

    /// 종성 자모 문자 (받침 없으면 None)
    pub fn jongseong_char(&self) -> Option<char> {
        JONGSEONG[self.jongseong as usize]
    }

    /// 초성, 중성, (종성) 순서의 자모 목록
    pub fn jamo(&self) -> impl Iterator<Item = char> {
        [Some(self.choseong_char()), Some(self.jungseong_char()), self.jongseong_char()]
            .into_iter()
            .flatten()
    }
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성으로 분해
/// 완성형 범위 밖의 문자(낱자모, 영문 등)는 None
pub fn decompose_syllable(c: char) -> Option<SyllableBlock> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    Some(SyllableBlock {
        choseong: offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT),
        jungseong: (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT,
        jongseong: offset % JONGSEONG_COUNT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_syllable() {
        // 가 = ㄱ(0) + ㅏ(0)
        assert_eq!(
            decompose_syllable('가'),
            Some(SyllableBlock { choseong: 0, jungseong: 0, jongseong: 0 })
        );
        // 한 = ㅎ(18) + ㅏ(0) + ㄴ(4)
        assert_eq!(
            decompose_syllable('한'),
            Some(SyllableBlock { choseong: 18, jungseong: 0, jongseong: 4 })
        );
        // 글 = ㄱ(0) + ㅡ(18) + ㄹ(8)
        assert_eq!(
            decompose_syllable('글'),
            Some(SyllableBlock { choseong: 0, jungseong: 18, jongseong: 8 })
        );
    }

    #[test]
    fn test_syllable_range_edges() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('\u{ABFF}'));
        assert!(!is_hangul_syllable('\u{D7A4}'));

        // 힣 = ㅎ + ㅣ + ㅎ (모든 테이블의 마지막 항목)
        let last = decompose_syllable('힣').unwrap();
        assert_eq!(last.jamo().collect::<String>(), "ㅎㅣㅎ");
    }

    #[test]
    fn test_non_syllable_is_not_decomposed() {
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('1'), None);
        // 낱자모는 완성형이 아님
        assert_eq!(decompose_syllable('ㄱ'), None);
        assert_eq!(decompose_syllable('ㅏ'), None);
    }

    #[test]
    fn test_jamo_chars() {
        let block = decompose_syllable('현').unwrap();
        assert_eq!(block.choseong_char(), 'ㅎ');
        assert_eq!(block.jungseong_char(), 'ㅕ');
        assert_eq!(block.jongseong_char(), Some('ㄴ'));
        assert!(block.has_jongseong());

        let block = decompose_syllable('도').unwrap();
        assert_eq!(block.jongseong_char(), None);
        assert!(!block.has_jongseong());
        assert_eq!(block.jamo().collect::<Vec<_>>(), vec!['ㄷ', 'ㅗ']);
    }

    #[test]
    fn test_complex_jongseong_chars() {
        // 읽 = ㅇ + ㅣ + ㄺ
        assert_eq!(decompose_syllable('읽').unwrap().jongseong_char(), Some('ㄺ'));
        // 값 = ㄱ + ㅏ + ㅄ
        assert_eq!(decompose_syllable('값').unwrap().jongseong_char(), Some('ㅄ'));
        // 꽃 = ㄲ + ㅗ + ㅊ
        assert_eq!(decompose_syllable('꽃').unwrap().jamo().collect::<String>(), "ㄲㅗㅊ");
    }
}
