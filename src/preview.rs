//! 동화책 미리보기 세션
//!
//! 표시 계층에 넘겨줄 값(치환된 본문, 배경, 이전/다음 가능 여부, 전환 스타일)을
//! 계산한다. 그리기와 마크업은 표시 계층 몫이다.

use std::time::Instant;

use crate::config::{Background, BookConfig, Page, TextPosition};
use crate::core::template::{render, Bindings};
use crate::navigation::{
    GestureOutcome, GesturePolicy, GestureSample, Navigator, PageController, PendingTransition,
    Transition, TransitionToken,
};

/// 썸네일에 그라디언트도 일러스트도 없을 때 쓰는 배경색
const THUMBNAIL_FALLBACK: &str = "#333";

/// 현재 페이지 표시 정보
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub version: String,
    pub version_label: String,
    pub scene: u32,
    pub title: String,
    /// "1. 숲" 형식의 장면 뱃지
    pub badge: String,
    /// 변수 치환된 본문
    pub text: String,
    pub background: Background,
    pub text_color: String,
    pub text_position: TextPosition,
    /// 1부터 시작
    pub page_number: usize,
    pub page_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// 썸네일 한 칸
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub index: usize,
    pub scene: u32,
    pub title: String,
    pub background: Background,
    pub active: bool,
}

/// 버전 선택 버튼용 요약
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSummary {
    pub id: String,
    pub label: String,
    pub page_count: usize,
}

pub struct BookPreview {
    config: BookConfig,
    controller: PageController,
    first_name_input: String,
    parent_names_input: String,
    bindings: Bindings,
}

impl BookPreview {
    /// 기본 버전 첫 페이지, 설정의 기본 이름으로 시작
    pub fn new(config: BookConfig) -> Self {
        let navigator = Navigator::new(config.page_counts());
        let policy = GesturePolicy::new(config.gesture.clone());
        let first_name_input = config.defaults.first_name.clone();
        let parent_names_input = config.defaults.parent_names.clone();
        let bindings =
            Bindings::from_inputs(&first_name_input, &parent_names_input, &config.defaults);
        Self {
            config,
            controller: PageController::new(navigator, policy),
            first_name_input,
            parent_names_input,
            bindings,
        }
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// 이름 입력 변경
    pub fn set_first_name(&mut self, input: &str) {
        self.first_name_input = input.to_string();
        self.refresh_bindings();
    }

    /// 부모 호칭 입력 변경
    pub fn set_parent_names(&mut self, input: &str) {
        self.parent_names_input = input.to_string();
        self.refresh_bindings();
    }

    fn refresh_bindings(&mut self) {
        self.bindings = Bindings::from_inputs(
            &self.first_name_input,
            &self.parent_names_input,
            &self.config.defaults,
        );
        log::debug!("변수 갱신: {:?}", self.bindings);
    }

    fn pages(&self) -> &[Page] {
        self.config.pages(self.controller.navigator().version())
    }

    fn version_label(&self) -> String {
        let version = self.controller.navigator().version();
        self.config
            .versions
            .get(version)
            .map(|v| v.label.clone())
            .unwrap_or_default()
    }

    /// 현재 페이지. 버전에 페이지가 없으면 None
    pub fn view(&self) -> Option<PageView> {
        let navigator = self.controller.navigator();
        let index = navigator.page_index();
        let page = self.pages().get(index)?;

        Some(PageView {
            version: navigator.version().to_string(),
            version_label: self.version_label(),
            scene: page.scene,
            title: page.title.clone(),
            badge: format!("{}. {}", page.scene, page.title),
            text: render(page.text.as_deref(), &self.bindings),
            background: self.config.background(page),
            text_color: page.text_color().to_string(),
            text_position: page.text_position(),
            page_number: index + 1,
            page_count: navigator.page_count(),
            has_prev: navigator.has_prev(),
            has_next: navigator.has_next(),
        })
    }

    /// "현재 / 전체" 페이지 표시
    pub fn counter_label(&self) -> String {
        let navigator = self.controller.navigator();
        if navigator.page_count() == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", navigator.page_index() + 1, navigator.page_count())
    }

    /// 현재 버전의 썸네일 목록
    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        let active = self.controller.navigator().page_index();
        self.pages()
            .iter()
            .enumerate()
            .map(|(index, page)| Thumbnail {
                index,
                scene: page.scene,
                title: page.title.clone(),
                background: match self.config.background(page) {
                    Background::Blank => Background::Gradient(THUMBNAIL_FALLBACK.to_string()),
                    background => background,
                },
                active: index == active,
            })
            .collect()
    }

    /// 버전 목록 (id 순서)
    pub fn versions(&self) -> Vec<VersionSummary> {
        self.config
            .versions
            .iter()
            .map(|(id, version)| VersionSummary {
                id: id.clone(),
                label: version.label.clone(),
                page_count: version.pages.len(),
            })
            .collect()
    }

    pub fn select_version(&mut self, id: &str) -> bool {
        self.controller.select_version(id)
    }

    pub fn next(&mut self, now: Instant) -> Option<PendingTransition> {
        self.controller.request_step(1, now)
    }

    pub fn prev(&mut self, now: Instant) -> Option<PendingTransition> {
        self.controller.request_step(-1, now)
    }

    /// 0부터 시작하는 인덱스로 이동
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Option<PendingTransition> {
        self.controller.request_jump(index, now)
    }

    pub fn drag(&mut self, delta: f64, now: Instant) -> Option<f64> {
        self.controller.drag(delta, now)
    }

    pub fn release(
        &mut self,
        sample: GestureSample,
        viewport_width: f64,
        now: Instant,
    ) -> GestureOutcome {
        self.controller.release(sample, viewport_width, now)
    }

    pub fn complete(&mut self, token: TransitionToken) -> Option<Transition> {
        self.controller.complete(token)
    }

    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        self.controller.poll(now)
    }

    pub fn finalize(&mut self) -> Option<Transition> {
        self.controller.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::TransitionStyle;

    const SAMPLE: &str = r##"{
        "defaults": { "firstName": "도현", "parentNames": "엄마 아빠" },
        "illustrations": { "castle": "img/castle.png" },
        "versions": {
            "A": {
                "label": "모험 버전",
                "pages": [
                    { "scene": 1, "title": "성", "text": "{name}야, {parentNames}가 기다려",
                      "illustration": "castle" },
                    { "scene": 2, "title": "이름", "text": "{firstName}: {nameLetters}",
                      "textPosition": "top" },
                    { "scene": 3, "title": "밤", "bgGradient": "#000" },
                    { "scene": 4, "title": "빈 배경", "illustration": "", "bgGradient": "" }
                ]
            },
            "B": { "label": "잠자리 버전", "pages": [
                { "scene": 1, "title": "꿈", "text": "잘 자, {name}" }
            ] },
            "C": { "label": "빈 버전", "pages": [] }
        }
    }"##;

    fn preview() -> BookPreview {
        BookPreview::new(BookConfig::from_json(SAMPLE).unwrap())
    }

    #[test]
    fn test_initial_view() {
        let preview = preview();
        let view = preview.view().unwrap();
        assert_eq!(view.version, "A");
        assert_eq!(view.version_label, "모험 버전");
        assert_eq!(view.badge, "1. 성");
        assert_eq!(view.text, "도현이야, 엄마 아빠가 기다려");
        assert_eq!(view.background, Background::Illustration("img/castle.png".into()));
        assert_eq!(view.text_color, "white");
        assert_eq!(view.text_position, TextPosition::Center);
        assert_eq!((view.page_number, view.page_count), (1, 4));
        assert!(!view.has_prev);
        assert!(view.has_next);
        assert_eq!(preview.counter_label(), "1 / 4");
    }

    #[test]
    fn test_name_change_updates_text() {
        let mut preview = preview();
        preview.set_first_name("지수");
        preview.set_parent_names("할머니");
        assert_eq!(preview.view().unwrap().text, "지수야, 할머니가 기다려");

        preview.set_first_name("  ");
        assert_eq!(preview.bindings().first_name, "도현");
    }

    #[test]
    fn test_navigation_updates_view() {
        let mut preview = preview();
        let now = Instant::now();
        let pending = preview.next(now).unwrap();
        assert_eq!(pending.transition.style, TransitionStyle::Slide);
        preview.complete(pending.token);

        let view = preview.view().unwrap();
        assert_eq!(view.text, "도현: ㄷ, ㅗ, ㅎ, ㅕ, ㄴ");
        assert_eq!(view.text_position, TextPosition::Top);
        assert!(view.has_prev);
        assert!(view.has_next);

        preview.jump_to(2, now).unwrap();
        preview.finalize();
        let view = preview.view().unwrap();
        assert_eq!(view.text, "");
        assert_eq!(view.background, Background::Gradient("#000".into()));
        assert!(view.has_next);

        preview.jump_to(3, now).unwrap();
        preview.finalize();
        let view = preview.view().unwrap();
        // 빈 문자열 배경은 없는 것으로 본다
        assert_eq!(view.background, Background::Blank);
        assert!(!view.has_next);
        assert_eq!(preview.next(now), None);
    }

    #[test]
    fn test_thumbnails() {
        let preview = preview();
        let thumbs = preview.thumbnails();
        assert_eq!(thumbs.len(), 4);
        assert!(thumbs[0].active);
        assert!(!thumbs[1].active);
        assert_eq!(thumbs[1].background, Background::Gradient("#333".into()));
        assert_eq!(thumbs[2].background, Background::Gradient("#000".into()));
        assert_eq!(thumbs[3].background, Background::Gradient("#333".into()));
    }

    #[test]
    fn test_versions_and_switch() {
        let mut preview = preview();
        let ids: Vec<_> = preview.versions().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);

        assert!(!preview.select_version("Z"));
        assert!(preview.select_version("B"));
        let view = preview.view().unwrap();
        assert_eq!(view.text, "잘 자, 도현이");
        assert_eq!(view.page_count, 1);
        assert!(!view.has_prev && !view.has_next);
    }

    #[test]
    fn test_empty_version_has_no_view() {
        let mut preview = preview();
        assert!(preview.select_version("C"));
        assert_eq!(preview.view(), None);
        assert!(preview.thumbnails().is_empty());
        assert_eq!(preview.counter_label(), "0 / 0");
    }

    #[test]
    fn test_empty_config_has_no_view() {
        let preview = BookPreview::new(BookConfig::default());
        assert_eq!(preview.view(), None);
        assert!(preview.versions().is_empty());
    }
}
