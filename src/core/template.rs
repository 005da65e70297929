//! 페이지 텍스트의 {변수} 치환
//!
//! | 변수             | 값                          |
//! |------------------|-----------------------------|
//! | `{name}`         | 캐주얼 호칭 (도현이/지수)   |
//! | `{firstName}`    | 원래 이름 (도현/지수)       |
//! | `{parentNames}`  | 부모 호칭 (엄마 아빠)       |
//! | `{nameLetters}`  | 자모 분해 (ㄷ, ㅗ, ㅎ, ㅕ, ㄴ) |
//!
//! 치환은 한 번만 훑는다. 치환된 값 안의 `{...}`는 다시 해석하지 않는다.

use crate::config::Defaults;
use crate::core::inflector::AddressForm;

/// 치환 변수 묶음
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    pub name: String,
    pub first_name: String,
    pub parent_names: String,
    pub name_letters: String,
}

impl Bindings {
    /// 이름과 부모 호칭으로부터 변수 생성
    pub fn new(first_name: &str, parent_names: &str) -> Self {
        let form = AddressForm::of(first_name);
        Self {
            name: form.casual,
            first_name: first_name.to_string(),
            parent_names: parent_names.to_string(),
            name_letters: form.letters,
        }
    }

    /// 입력값 기준으로 생성. 공백만 있는 입력은 설정 기본값 사용
    pub fn from_inputs(first_name: &str, parent_names: &str, defaults: &Defaults) -> Self {
        let first_name = non_blank_or(first_name, &defaults.first_name);
        let parent_names = non_blank_or(parent_names, &defaults.parent_names);
        Self::new(first_name, parent_names)
    }

    /// 변수 이름으로 값 조회
    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "firstName" => Some(&self.first_name),
            "parentNames" => Some(&self.parent_names),
            "nameLetters" => Some(&self.name_letters),
            _ => None,
        }
    }
}

fn non_blank_or<'a>(input: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// 템플릿 치환. 모르는 변수나 닫히지 않은 중괄호는 그대로 둔다
pub fn render(template: Option<&str>, bindings: &Bindings) -> String {
    let Some(mut rest) = template else {
        return String::new();
    };
    let mut output = String::with_capacity(rest.len());

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            // 닫는 중괄호가 더 없으면 나머지는 그대로
            output.push('{');
            rest = after_open;
            break;
        };

        let key = &after_open[..close];
        if let Some(value) = bindings.lookup(key) {
            output.push_str(value);
            rest = &after_open[close + 1..];
            continue;
        }

        // 같은 닫는 중괄호를 쓸 수 있는 후보는 키 안의 마지막 여는 중괄호뿐
        output.push('{');
        match key.rfind('{') {
            Some(inner) => {
                output.push_str(&key[..inner]);
                rest = &after_open[inner..];
            }
            None => {
                output.push_str(&after_open[..=close]);
                rest = &after_open[close + 1..];
            }
        }
    }

    output.push_str(rest);
    output
}
