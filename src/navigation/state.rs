//! 버전/페이지 위치 상태와 범위 검사

use crate::navigation::gesture::Bounds;
use crate::navigation::transition::Transition;

/// 현재 위치 (버전, 페이지 인덱스)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub version: String,
    pub page_index: usize,
}

/// 페이지 이동 상태 기계
///
/// 버전별 페이지 수는 생성 시 고정된다. 범위를 벗어난 요청은 에러 없이 무시한다.
#[derive(Debug, Clone)]
pub struct Navigator {
    /// 버전 id -> 페이지 수
    versions: Vec<(String, usize)>,
    state: NavigationState,
}

impl Navigator {
    /// 첫 번째 버전, 0번 페이지에서 시작
    pub fn new(versions: Vec<(String, usize)>) -> Self {
        let version = versions
            .first()
            .map(|(id, _)| id.clone())
            .unwrap_or_default();
        Self {
            versions,
            state: NavigationState {
                version,
                page_index: 0,
            },
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn version(&self) -> &str {
        &self.state.version
    }

    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    /// 현재 버전의 페이지 수 (없는 버전이면 0)
    pub fn page_count(&self) -> usize {
        self.count_of(&self.state.version).unwrap_or(0)
    }

    pub fn has_prev(&self) -> bool {
        self.state.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.state.page_index + 1 < self.page_count()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }

    pub fn is_known_version(&self, id: &str) -> bool {
        self.count_of(id).is_some()
    }

    fn count_of(&self, id: &str) -> Option<usize> {
        self.versions
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, count)| *count)
    }

    /// 버전 변경. 모르는 id면 false (상태 유지), 아니면 0번 페이지로 이동
    pub fn select_version(&mut self, id: &str) -> bool {
        if !self.is_known_version(id) {
            log::debug!("알 수 없는 버전 무시: {}", id);
            return false;
        }
        self.state.version = id.to_string();
        self.state.page_index = 0;
        true
    }

    /// `page_index + delta`가 범위 안이면 그 인덱스 (delta 0은 이동 아님)
    pub fn step_target(&self, delta: isize) -> Option<usize> {
        if delta == 0 {
            return None;
        }
        let target = self.state.page_index.checked_add_signed(delta)?;
        (target < self.page_count()).then_some(target)
    }

    /// 현재와 다르고 범위 안인 인덱스면 그대로 반환
    pub fn jump_target(&self, index: usize) -> Option<usize> {
        (index != self.state.page_index && index < self.page_count()).then_some(index)
    }

    /// 상대 이동. 범위를 벗어나면 잘라내지 않고 무시
    pub fn step(&mut self, delta: isize) -> Option<Transition> {
        let target = self.step_target(delta)?;
        Some(self.move_to(target))
    }

    /// 특정 페이지로 이동. 같은 페이지거나 범위 밖이면 무시
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        let target = self.jump_target(index)?;
        Some(self.move_to(target))
    }

    fn move_to(&mut self, target: usize) -> Transition {
        let transition = Transition::new(self.state.page_index, target);
        self.state.page_index = target;
        transition
    }
}
