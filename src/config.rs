//! 동화책 설정 파일 로드 (JSON)
//!
//! 설정은 세션 시작 시 한 번 읽고 이후 변경하지 않는다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::navigation::GestureConfig;

/// 설정 로드 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 읽기 실패
    #[error("설정 파일 읽기 오류 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON 파싱 실패
    #[error("설정 JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 입력이 비었을 때 쓰는 기본값
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub parent_names: String,
}

/// 텍스트 위치
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Top,
    Bottom,
    /// 알 수 없는 값도 가운데로 처리
    #[default]
    #[serde(other)]
    Center,
}

/// 페이지 배경
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    /// 일러스트 이미지 경로
    Illustration(String),
    /// CSS 그라디언트/색상 문자열
    Gradient(String),
    Blank,
}

/// 동화책 한 페이지
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub scene: u32,
    #[serde(default)]
    pub title: String,
    /// 치환 변수를 포함한 본문
    #[serde(default)]
    pub text: Option<String>,
    /// `illustrations`의 키
    #[serde(default)]
    pub illustration: Option<String>,
    #[serde(default)]
    pub bg_gradient: Option<String>,
    /// 없거나 빈 문자열이면 흰색
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub text_position: Option<TextPosition>,
}

/// 글자색 기본값
const DEFAULT_TEXT_COLOR: &str = "white";

impl Page {
    /// 글자색. null/빈 문자열은 기본값
    pub fn text_color(&self) -> &str {
        non_blank(self.text_color.as_deref()).unwrap_or(DEFAULT_TEXT_COLOR)
    }

    /// 텍스트 위치. null이면 가운데
    pub fn text_position(&self) -> TextPosition {
        self.text_position.unwrap_or_default()
    }
}

/// 공백뿐인 문자열은 없는 것으로 취급
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// 스토리 버전 (A/B 등)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Version {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// 동화책 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BookConfig {
    #[serde(default)]
    pub defaults: Defaults,
    /// 일러스트 키 -> 이미지 경로
    #[serde(default)]
    pub illustrations: BTreeMap<String, String>,
    /// 버전 id -> 버전 (id 순서로 정렬)
    #[serde(default)]
    pub versions: BTreeMap<String, Version>,
    #[serde(default)]
    pub gesture: GestureConfig,
}

impl BookConfig {
    /// 파일에서 설정 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        log::debug!(
            "설정 로드: {} (버전 {}개, 일러스트 {}개)",
            path.display(),
            config.versions.len(),
            config.illustrations.len()
        );
        Ok(config)
    }

    /// JSON 문자열에서 설정 로드
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 버전의 페이지 목록. 없는 버전이면 빈 목록
    pub fn pages(&self, version: &str) -> &[Page] {
        self.versions
            .get(version)
            .map(|v| v.pages.as_slice())
            .unwrap_or_default()
    }

    /// 기본 버전 (id 순서상 첫 번째)
    pub fn default_version(&self) -> Option<&str> {
        self.versions.keys().next().map(String::as_str)
    }

    /// 버전 id와 페이지 수 목록
    pub fn page_counts(&self) -> Vec<(String, usize)> {
        self.versions
            .iter()
            .map(|(id, version)| (id.clone(), version.pages.len()))
            .collect()
    }

    /// 페이지 배경 결정: 등록된 일러스트 > 그라디언트 > 없음
    pub fn background(&self, page: &Page) -> Background {
        if let Some(locator) = non_blank(page.illustration.as_deref())
            .and_then(|key| self.illustrations.get(key))
            .filter(|locator| !locator.trim().is_empty())
        {
            return Background::Illustration(locator.clone());
        }
        match non_blank(page.bg_gradient.as_deref()) {
            Some(gradient) => Background::Gradient(gradient.to_string()),
            None => Background::Blank,
        }
    }
}
