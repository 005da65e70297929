//! 이름 호칭 변환 (받침에 따른 조사 붙이기, 자모 분해 표시)

use crate::core::unicode::decompose_syllable;

/// 받침 있는 이름 뒤에 붙는 접사 (도현 → 도현이)
const LINKING_PARTICLE: char = '이';

/// 자모 분해 결과를 이어 붙일 구분자
const LETTER_DELIMITER: &str = ", ";

/// 이름에서 파생된 호칭 묶음
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressForm {
    /// 캐주얼 호칭 (도현이/지수)
    pub casual: String,
    /// 자모 분해 (ㄷ, ㅗ, ㅎ, ㅕ, ㄴ)
    pub letters: String,
}

impl AddressForm {
    pub fn of(name: &str) -> Self {
        Self {
            casual: address_form(name),
            letters: decompose(name),
        }
    }
}

/// 문자에 받침이 있는지 확인
/// 완성형 한글이 아니면 false (영문 섞인 이름 허용)
pub fn has_trailing_consonant(c: char) -> bool {
    decompose_syllable(c).is_some_and(|block| block.has_jongseong())
}

/// 이름 → 캐주얼 호칭
/// 마지막 글자만 본다: 받침 있으면 +이, 없으면 그대로
pub fn address_form(name: &str) -> String {
    match name.chars().last() {
        Some(last) if has_trailing_consonant(last) => {
            let mut casual = String::with_capacity(name.len() + LINKING_PARTICLE.len_utf8());
            casual.push_str(name);
            casual.push(LINKING_PARTICLE);
            casual
        }
        _ => name.to_string(),
    }
}

/// 이름을 자모 단위로 분해하여 ", "로 연결
/// 완성형 한글이 아닌 문자는 한 단위로 그대로 복사
pub fn decompose(name: &str) -> String {
    let mut units: Vec<String> = Vec::with_capacity(name.chars().count() * 3);
    for c in name.chars() {
        match decompose_syllable(c) {
            Some(block) => units.extend(block.jamo().map(String::from)),
            None => units.push(c.to_string()),
        }
    }
    units.join(LETTER_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_form_with_batchim() {
        assert_eq!(address_form("도현"), "도현이");
        assert_eq!(address_form("민준"), "민준이");
        assert_eq!(address_form("별"), "별이");
    }

    #[test]
    fn test_address_form_without_batchim() {
        assert_eq!(address_form("지수"), "지수");
        assert_eq!(address_form("하나"), "하나");
    }

    #[test]
    fn test_address_form_only_last_char_matters() {
        // 첫 글자 받침은 무관
        assert_eq!(address_form("민수"), "민수");
        // 영문 마지막 글자 -> 그대로
        assert_eq!(address_form("도현A"), "도현A");
        assert_eq!(address_form("Sam"), "Sam");
    }

    #[test]
    fn test_address_form_empty() {
        assert_eq!(address_form(""), "");
    }

    #[test]
    fn test_has_trailing_consonant() {
        assert!(has_trailing_consonant('현'));
        assert!(!has_trailing_consonant('수'));
        assert!(!has_trailing_consonant('a'));
        assert!(!has_trailing_consonant('ㄴ')); // 낱자모
        assert!(!has_trailing_consonant('!'));
    }

    #[test]
    fn test_decompose_name() {
        assert_eq!(decompose("도현"), "ㄷ, ㅗ, ㅎ, ㅕ, ㄴ");
        assert_eq!(decompose("지수"), "ㅈ, ㅣ, ㅅ, ㅜ");
    }

    #[test]
    fn test_decompose_passthrough() {
        assert_eq!(decompose("A도"), "A, ㄷ, ㅗ");
        assert_eq!(decompose("ㄱ"), "ㄱ");
        assert_eq!(decompose("a b"), "a,  , b");
    }

    #[test]
    fn test_decompose_empty() {
        assert_eq!(decompose(""), "");
        assert_eq!(AddressForm::of(""), AddressForm::default());
    }

    #[test]
    fn test_address_form_bundle() {
        let form = AddressForm::of("도현");
        assert_eq!(form.casual, "도현이");
        assert_eq!(form.letters, "ㄷ, ㅗ, ㅎ, ㅕ, ㄴ");
    }
}
